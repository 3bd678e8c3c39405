//! Display helpers for vacancy text: markup cleanup, cell truncation, dates and salaries.

use std::{borrow::Cow, sync::OnceLock};

use chrono::NaiveDate;
use regex::Regex;

use crate::vacancy::{Salary, VacancyError};

pub const MAX_CELL_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

const WITH_TAX_DEDUCTION: &str = "С вычетом налогов";
const WITHOUT_TAX_DEDUCTION: &str = "Без вычета налогов";

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern compiles"))
}

fn whitespace_pattern() -> &'static Regex {
    WHITESPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"))
}

/// Strips `<...>` tags, collapses whitespace runs to one space and trims the ends.
pub fn clean_text(input: &str) -> String {
    let without_tags = tag_pattern().replace_all(input, "");
    let collapsed = whitespace_pattern().replace_all(&without_tags, " ");
    collapsed.trim().to_string()
}

/// Cuts text longer than [`MAX_CELL_CHARS`] characters and appends [`ELLIPSIS`].
pub fn truncate_cell(value: &str) -> Cow<'_, str> {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &value[..byte_idx])),
        None => Cow::Borrowed(value),
    }
}

/// Parses the leading `YYYY-MM-DD` part of a publication timestamp.
pub fn parse_published_date(raw: &str) -> Result<NaiveDate, VacancyError> {
    let prefix = match raw.char_indices().nth(10) {
        Some((byte_idx, _)) => &raw[..byte_idx],
        None => raw,
    };
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|source| VacancyError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Groups digits by thousands with a single space: `1234567` becomes `1 234 567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn tax_note(gross: bool) -> &'static str {
    if gross {
        WITHOUT_TAX_DEDUCTION
    } else {
        WITH_TAX_DEDUCTION
    }
}

/// Table rendering of a salary: `50 000 - 70 000 (Рубли) (С вычетом налогов)`.
///
/// Bounds are truncated toward zero before grouping. The tax wording is the
/// opposite of [`Salary`]'s own `Display` output; the table uses this one.
pub fn format_salary(salary: &Salary) -> String {
    format!(
        "{} - {} ({}) ({})",
        group_thousands(salary.from.trunc() as i64),
        group_thousands(salary.to.trunc() as i64),
        salary.currency.label(),
        tax_note(salary.gross)
    )
}

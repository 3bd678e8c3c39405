use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    locale::{Currency, Experience, Field},
    text,
};

pub const CSV_FIELD_COUNT: usize = Field::CSV_ORDER.len();

#[derive(Debug, Error)]
pub enum VacancyError {
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("Unknown experience code '{0}'")]
    UnknownExperience(String),
    #[error("Unknown currency code '{0}'")]
    UnknownCurrency(String),
    #[error("Premium flag must be 'True' or 'False', got '{0}'")]
    InvalidPremium(String),
    #[error("Failed to parse salary bound '{value}'")]
    InvalidSalary {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Failed to parse publication date '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Field '{0}' must hold a single line")]
    UnexpectedMultiline(&'static str),
}

/// A raw cell after loading: one cleaned line, or the untouched lines of a multi-line cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    TextList(Vec<String>),
}

impl FieldValue {
    /// Multi-line cells are split as-is; single-line cells go through [`text::clean_text`].
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains('\n') {
            FieldValue::TextList(raw.split('\n').map(str::to_string).collect())
        } else {
            FieldValue::Text(text::clean_text(raw))
        }
    }

    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(value) => value.clone(),
            FieldValue::TextList(items) => items.join("\n"),
        }
    }

    fn single_line(&self, field: Field) -> Result<&str, VacancyError> {
        match self {
            FieldValue::Text(value) => Ok(value),
            FieldValue::TextList(_) => Err(VacancyError::UnexpectedMultiline(field.key())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: f64,
    pub to: f64,
    /// `false` only when the source flag is the literal `False`.
    pub gross: bool,
    pub currency: Currency,
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let note = if self.gross {
            "С вычетом налогов"
        } else {
            "Без вычета налогов"
        };
        write!(
            f,
            "{} - {} ({}) ({note})",
            self.from,
            self.to,
            self.currency.code()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub name: FieldValue,
    pub description: FieldValue,
    pub key_skills: FieldValue,
    pub experience: Experience,
    pub premium: bool,
    pub employer_name: FieldValue,
    pub salary: Salary,
    pub area_name: FieldValue,
    pub published_at: NaiveDate,
}

impl Vacancy {
    /// Builds a vacancy from a row laid out in [`Field::CSV_ORDER`].
    pub fn from_record(raw: &[String]) -> Result<Self, VacancyError> {
        let values = raw
            .iter()
            .map(|cell| FieldValue::from_raw(cell))
            .collect::<Vec<_>>();
        let [
            name,
            description,
            key_skills,
            experience,
            premium,
            employer_name,
            salary_from,
            salary_to,
            salary_gross,
            salary_currency,
            area_name,
            published_at,
        ]: [FieldValue; CSV_FIELD_COUNT] = values.try_into().map_err(|values: Vec<FieldValue>| {
            VacancyError::ColumnCount {
                expected: CSV_FIELD_COUNT,
                found: values.len(),
            }
        })?;

        let salary = Salary {
            from: parse_bound(salary_from.single_line(Field::SalaryFrom)?)?,
            to: parse_bound(salary_to.single_line(Field::SalaryTo)?)?,
            gross: salary_gross.single_line(Field::SalaryGross)? != "False",
            currency: salary_currency
                .single_line(Field::SalaryCurrency)?
                .parse()?,
        };

        Ok(Self {
            name,
            description,
            key_skills,
            experience: experience.single_line(Field::ExperienceId)?.parse()?,
            premium: parse_premium(premium.single_line(Field::Premium)?)?,
            employer_name,
            salary,
            area_name,
            published_at: text::parse_published_date(published_at.single_line(Field::PublishedAt)?)?,
        })
    }
}

fn parse_bound(value: &str) -> Result<f64, VacancyError> {
    value
        .parse::<f64>()
        .map_err(|source| VacancyError::InvalidSalary {
            value: value.to_string(),
            source,
        })
}

fn parse_premium(value: &str) -> Result<bool, VacancyError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(VacancyError::InvalidPremium(other.to_string())),
    }
}

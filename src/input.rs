//! Interactive collection of report parameters.
//!
//! Every prompt is always asked. Validation problems do not stop the
//! sequence; the first one is kept and later suppresses rendering.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::locale::{Field, INDEX_LABEL, NO_LABEL, YES_LABEL};

const FILE_NAME_PROMPT: &str = "Введите название файла: ";
const FILTER_PROMPT: &str = "Введите параметр фильтрации: ";
const SORT_FIELD_PROMPT: &str = "Введите параметр сортировки: ";
const SORT_ORDER_PROMPT: &str = "Обратный порядок сортировки (Да / Нет): ";
const RANGE_PROMPT: &str = "Введите диапазон вывода: ";
const COLUMNS_PROMPT: &str = "Введите требуемые столбцы: ";
const COLUMN_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Название файла не может быть пустым")]
    EmptyFileName,
    #[error("Параметр сортировки некорректен")]
    InvalidSortField,
    #[error("Порядок сортировки задан некорректно")]
    InvalidSortOrder,
    #[error("Диапазон вывода задан некорректно")]
    InvalidRange,
}

/// Half-open row window applied after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputRange {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl OutputRange {
    /// An answer without a space is the full range; otherwise it must be `<start> <end>`.
    pub fn parse(value: &str) -> Option<Self> {
        if !value.contains(' ') {
            return Some(Self::default());
        }
        let bounds = value
            .split(' ')
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        match bounds.as_slice() {
            [start, end] => Some(Self {
                start: Some(*start),
                end: Some(*end),
            }),
            _ => None,
        }
    }

    /// Clamps the window to `len` rows; an inverted window is empty.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let end = self.end.unwrap_or(len).min(len);
        let start = self.start.unwrap_or(0).min(end);
        (start, end)
    }
}

/// Requested column labels, always led by the index column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    labels: Vec<String>,
}

impl ColumnSelection {
    /// Splits on `", "`; a blank answer leaves only the index column.
    pub fn parse(value: &str) -> Self {
        Self::from_labels(value.split(COLUMN_SEPARATOR))
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = std::iter::once(INDEX_LABEL.to_string())
            .chain(labels.into_iter().map(Into::into))
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn includes(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParams {
    pub file_name: String,
    /// Collected for compatibility; rows are never filtered by it.
    pub filter: String,
    pub sort_field: Option<Field>,
    pub reversed: bool,
    pub range: OutputRange,
    pub columns: ColumnSelection,
}

#[derive(Debug)]
pub struct Collected {
    pub params: InputParams,
    pub error: Option<InputError>,
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    error: Option<InputError>,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("Writing prompt")?;
        self.output.flush().context("Flushing prompt")?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Reading answer from standard input")?;
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        debug!("{} -> {:?}", prompt.trim_end(), answer);
        Ok(answer)
    }

    fn reject(&mut self, error: InputError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Collected> {
    let mut prompter = Prompter {
        input,
        output,
        error: None,
    };

    let file_name = prompter.ask(FILE_NAME_PROMPT)?;
    if file_name.is_empty() {
        prompter.reject(InputError::EmptyFileName);
    }

    let filter = prompter.ask(FILTER_PROMPT)?;

    let sort_answer = prompter.ask(SORT_FIELD_PROMPT)?;
    let sort_field = if sort_answer.is_empty() {
        None
    } else {
        let field = Field::from_label(&sort_answer);
        if field.is_none() {
            prompter.reject(InputError::InvalidSortField);
        }
        field
    };

    // A blank answer sorts in reverse just like "Да"; only "Нет" keeps ascending order.
    let order_answer = prompter.ask(SORT_ORDER_PROMPT)?;
    let reversed = match order_answer.as_str() {
        "" | YES_LABEL => true,
        NO_LABEL => false,
        _ => {
            prompter.reject(InputError::InvalidSortOrder);
            true
        }
    };

    let range_answer = prompter.ask(RANGE_PROMPT)?;
    let range = OutputRange::parse(&range_answer).unwrap_or_else(|| {
        prompter.reject(InputError::InvalidRange);
        OutputRange::default()
    });

    let columns = ColumnSelection::parse(&prompter.ask(COLUMNS_PROMPT)?);

    let params = InputParams {
        file_name,
        filter,
        sort_field,
        reversed,
        range,
        columns,
    };
    debug!(
        "Collected parameters: sort={:?} reversed={} range={:?} columns={}",
        params.sort_field,
        params.reversed,
        params.range,
        params.columns.labels().iter().join("|")
    );
    Ok(Collected {
        params,
        error: prompter.error,
    })
}

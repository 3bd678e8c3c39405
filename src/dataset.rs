//! Loading vacancy rows from a CSV export.
//!
//! The first record is the header and fixes the expected arity. Data rows with
//! a different arity or any empty cell are skipped without error; every other
//! row must convert into a [`Vacancy`] or the load fails.

use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, info};

use crate::{
    io_utils,
    vacancy::{CSV_FIELD_COUNT, Vacancy, VacancyError},
};

#[derive(Debug, Default)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub vacancies: Vec<Vacancy>,
    pub discarded: usize,
}

impl DataSet {
    pub fn load(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Self> {
        info!("Loading vacancies from {:?}", path);
        let reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
        let dataset = Self::from_csv(reader, encoding)
            .with_context(|| format!("Loading vacancies from {path:?}"))?;
        info!(
            "Loaded {} vacancy row(s), skipped {} incomplete row(s)",
            dataset.vacancies.len(),
            dataset.discarded
        );
        Ok(dataset)
    }

    pub fn from_csv<R: Read>(
        mut reader: csv::Reader<R>,
        encoding: &'static Encoding,
    ) -> Result<Self> {
        let mut records = reader.byte_records();
        let Some(header) = records.next() else {
            debug!("Input has no header row; nothing to load");
            return Ok(Self::default());
        };
        let header = header.context("Reading header row")?;
        let headers = io_utils::decode_headers(&header, encoding)?;
        if headers.len() != CSV_FIELD_COUNT {
            return Err(VacancyError::ColumnCount {
                expected: CSV_FIELD_COUNT,
                found: headers.len(),
            })
            .context("Validating header row");
        }

        let mut vacancies = Vec::new();
        let mut discarded = 0usize;
        for (idx, record) in records.enumerate() {
            let row_number = idx + 2;
            let record = record.with_context(|| format!("Reading row {row_number}"))?;
            let decoded = io_utils::decode_record(&record, encoding)
                .with_context(|| format!("Decoding row {row_number}"))?;
            if !is_complete(&decoded, headers.len()) {
                debug!(
                    "Skipping row {row_number}: {} cell(s), empty cell present: {}",
                    decoded.len(),
                    decoded.iter().any(String::is_empty)
                );
                discarded += 1;
                continue;
            }
            let vacancy = Vacancy::from_record(&decoded)
                .with_context(|| format!("Building vacancy from row {row_number}"))?;
            debug!("Row {row_number}: salary {}", vacancy.salary);
            vacancies.push(vacancy);
        }

        Ok(Self {
            headers,
            vacancies,
            discarded,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }
}

fn is_complete(row: &[String], expected: usize) -> bool {
    row.len() == expected && row.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    const HEADER: &str = "name,description,key_skills,experience_id,premium,employer_name,\
                          salary_from,salary_to,salary_gross,salary_currency,area_name,published_at";

    fn load(data: &str) -> Result<DataSet> {
        let reader = io_utils::open_csv_reader(data.as_bytes(), io_utils::DEFAULT_CSV_DELIMITER);
        DataSet::from_csv(reader, UTF_8)
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let dataset = load("").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.headers.is_empty());
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let data = format!(
            "{HEADER}\n\
             A,d,s,noExperience,True,E,1,2,True,RUR,Msk,2022-01-01\n\
             B,,s,noExperience,True,E,1,2,True,RUR,Msk,2022-01-01\n\
             C,d,s,noExperience,True,E,1,2,True,RUR,Msk\n\
             D,d,s,noExperience,True,E,1,2,True,RUR,Msk,2022-01-01,extra\n"
        );
        let dataset = load(&data).unwrap();
        assert_eq!(dataset.vacancies.len(), 1);
        assert_eq!(dataset.discarded, 3);
        assert_eq!(dataset.vacancies[0].name.display(), "A");
    }

    #[test]
    fn header_with_wrong_arity_is_rejected() {
        let err = load("name,description\nA,B\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VacancyError>(),
            Some(VacancyError::ColumnCount { expected: 12, found: 2 })
        ));
    }

    #[test]
    fn bad_value_in_complete_row_is_fatal() {
        let data = format!("{HEADER}\nA,d,s,noExperience,True,E,1,2,True,XXX,Msk,2022-01-01\n");
        let err = load(&data).unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));
        assert!(format!("{err:#}").contains("Unknown currency code 'XXX'"));
    }
}

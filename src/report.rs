//! The vacancy table: one localized row per vacancy, then sort, range and
//! column selection applied at print time.

use anyhow::{Result, anyhow};
use log::{debug, warn};

use crate::{
    input::InputParams,
    locale::{self, Field, INDEX_LABEL},
    table,
    text::{self, truncate_cell},
    vacancy::Vacancy,
};

pub const TABLE_FIELDS: [Field; 9] = [
    Field::Name,
    Field::Description,
    Field::KeySkills,
    Field::ExperienceId,
    Field::Premium,
    Field::EmployerName,
    Field::Salary,
    Field::AreaName,
    Field::PublishedAt,
];

#[derive(Debug, Clone)]
pub struct VacancyTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl VacancyTable {
    pub fn from_vacancies(vacancies: &[Vacancy]) -> Self {
        let headers = std::iter::once(INDEX_LABEL)
            .chain(TABLE_FIELDS.iter().map(|field| field.label()))
            .map(str::to_string)
            .collect();
        let rows = vacancies
            .iter()
            .enumerate()
            .map(|(idx, vacancy)| vacancy_row(idx + 1, vacancy))
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Sorts, slices and projects the table for display.
    pub fn view(&self, params: &InputParams) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rows = self.rows.iter().collect::<Vec<_>>();

        if let Some(field) = params.sort_field {
            let column = self.column_index(field.label()).ok_or_else(|| {
                anyhow!("Cannot sort by '{field}': the column is not part of the vacancy table")
            })?;
            debug!(
                "Sorting {} row(s) by '{field}' ({})",
                rows.len(),
                if params.reversed { "descending" } else { "ascending" }
            );
            // Reversing the stable ascending order puts equal keys in descending row-number order.
            rows.sort_by(|a, b| a[column].cmp(&b[column]));
            if params.reversed {
                rows.reverse();
            }
        }

        let (start, end) = params.range.bounds(rows.len());
        let window = &rows[start..end];

        for label in params
            .columns
            .labels()
            .iter()
            .filter(|l| !l.is_empty() && self.column_index(l).is_none())
        {
            warn!("Ignoring unknown column '{label}'");
        }
        let visible = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| params.columns.includes(header))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        let headers = visible.iter().map(|&idx| self.headers[idx].clone()).collect();
        let rows = window
            .iter()
            .map(|row| visible.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok((headers, rows))
    }

    pub fn render(&self, params: &InputParams, max_width: usize) -> Result<String> {
        let (headers, rows) = self.view(params)?;
        Ok(table::render_table(&headers, &rows, max_width))
    }

    fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == label)
    }
}

fn vacancy_row(position: usize, vacancy: &Vacancy) -> Vec<String> {
    vec![
        position.to_string(),
        truncate_cell(&vacancy.name.display()).into_owned(),
        truncate_cell(&vacancy.description.display()).into_owned(),
        truncate_cell(&vacancy.key_skills.display()).into_owned(),
        vacancy.experience.label().to_string(),
        locale::yes_no(vacancy.premium).to_string(),
        truncate_cell(&vacancy.employer_name.display()).into_owned(),
        text::format_salary(&vacancy.salary),
        vacancy.area_name.display(),
        text::format_date(vacancy.published_at),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        input::{ColumnSelection, OutputRange},
        locale::{Currency, Experience},
        vacancy::{FieldValue, Salary},
    };
    use chrono::NaiveDate;

    fn vacancy(name: &str, from: f64, day: u32) -> Vacancy {
        Vacancy {
            name: FieldValue::Text(name.to_string()),
            description: FieldValue::Text("x".repeat(150)),
            key_skills: FieldValue::TextList(vec!["Rust".into(), "SQL".into()]),
            experience: Experience::NoExperience,
            premium: true,
            employer_name: FieldValue::Text("Acme".into()),
            salary: Salary {
                from,
                to: from * 2.0,
                gross: false,
                currency: Currency::Rur,
            },
            area_name: FieldValue::Text("Москва".into()),
            published_at: NaiveDate::from_ymd_opt(2022, 7, day).unwrap(),
        }
    }

    fn params(sort_field: Option<Field>, reversed: bool) -> InputParams {
        InputParams {
            file_name: "vacancies.csv".into(),
            filter: String::new(),
            sort_field,
            reversed,
            range: OutputRange::default(),
            columns: ColumnSelection::from_labels(TABLE_FIELDS.map(Field::label)),
        }
    }

    fn sample_table() -> VacancyTable {
        VacancyTable::from_vacancies(&[
            vacancy("Бухгалтер", 30000.0, 3),
            vacancy("Аналитик", 90000.0, 1),
            vacancy("Водитель", 45000.0, 2),
        ])
    }

    #[test]
    fn rows_are_localized_and_numbered() {
        let table = sample_table();
        assert_eq!(table.headers().len(), 10);
        let row = &table.rows()[0];
        assert_eq!(row[0], "1");
        assert_eq!(row[2].chars().count(), 103);
        assert_eq!(row[3], "Rust\nSQL");
        assert_eq!(row[4], "Нет опыта");
        assert_eq!(row[5], "Да");
        assert_eq!(row[7], "30 000 - 60 000 (Рубли) (С вычетом налогов)");
        assert_eq!(row[9], "03.07.2022");
    }

    #[test]
    fn sort_ascending_and_reversed_by_displayed_string() {
        let table = sample_table();
        let (_, rows) = table.view(&params(Some(Field::Name), false)).unwrap();
        let names = rows.iter().map(|r| r[1].as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Аналитик", "Бухгалтер", "Водитель"]);

        let (_, rows) = table.view(&params(Some(Field::Name), true)).unwrap();
        let indices = rows.iter().map(|r| r[0].as_str()).collect::<Vec<_>>();
        assert_eq!(indices, vec!["3", "1", "2"]);
    }

    #[test]
    fn no_sort_field_keeps_load_order() {
        let (_, rows) = sample_table().view(&params(None, true)).unwrap();
        let indices = rows.iter().map(|r| r[0].as_str()).collect::<Vec<_>>();
        assert_eq!(indices, vec!["1", "2", "3"]);
    }

    #[test]
    fn range_applies_after_sort() {
        let mut p = params(Some(Field::PublishedAt), false);
        p.range = OutputRange::parse("1 2").unwrap();
        let (_, rows) = sample_table().view(&p).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][9], "02.07.2022");
    }

    #[test]
    fn columns_follow_table_order_and_keep_index() {
        let mut p = params(None, true);
        p.columns = ColumnSelection::parse("Оклад, Название, Зарплата");
        let (headers, rows) = sample_table().view(&p).unwrap();
        assert_eq!(headers, vec!["№", "Название", "Оклад"]);
        assert_eq!(rows[1], vec!["2", "Аналитик", "90 000 - 180 000 (Рубли) (С вычетом налогов)"]);
    }

    #[test]
    fn sorting_by_a_field_outside_the_table_fails() {
        let err = sample_table()
            .view(&params(Some(Field::SalaryFrom), false))
            .unwrap_err();
        assert!(err.to_string().contains("Нижняя граница вилки оклада"));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let rendered = VacancyTable::from_vacancies(&[])
            .render(&params(None, true), table::DEFAULT_MAX_WIDTH)
            .unwrap();
        // "Дата публикации вакансии" wraps, so the header block is two lines tall.
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("+---+"));
    }

    fn positions(rows: &[Vec<String>]) -> Vec<&str> {
        rows.iter().map(|r| r[0].as_str()).collect()
    }

    #[test]
    fn range_two_four_keeps_sorted_positions_two_and_three() {
        let table = VacancyTable::from_vacancies(&[
            vacancy("Д", 1000.0, 1),
            vacancy("Б", 1000.0, 2),
            vacancy("Г", 1000.0, 3),
            vacancy("А", 1000.0, 4),
            vacancy("В", 1000.0, 5),
        ]);
        let mut p = params(Some(Field::Name), false);
        p.range = OutputRange::parse("2 4").unwrap();
        let (_, rows) = table.view(&p).unwrap();
        let names = rows.iter().map(|r| r[1].as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["В", "Г"]);
        assert_eq!(positions(&rows), vec!["5", "3"]);
    }

    #[test]
    fn equal_sort_keys_follow_row_numbers() {
        let table = VacancyTable::from_vacancies(&[
            vacancy("Same", 1000.0, 1),
            vacancy("Same", 2000.0, 2),
            vacancy("Same", 3000.0, 3),
        ]);
        let (_, rows) = table.view(&params(Some(Field::Name), true)).unwrap();
        assert_eq!(positions(&rows), vec!["3", "2", "1"]);

        let (_, rows) = table.view(&params(Some(Field::Name), false)).unwrap();
        assert_eq!(positions(&rows), vec!["1", "2", "3"]);
    }

    #[test]
    fn blank_column_answer_shows_only_the_index() {
        let mut p = params(None, true);
        p.columns = ColumnSelection::parse("");
        let (headers, rows) = sample_table().view(&p).unwrap();
        assert_eq!(headers, vec!["№"]);
        assert_eq!(rows, vec![vec!["1"], vec!["2"], vec!["3"]]);
    }

    #[test]
    fn unknown_column_labels_are_skipped() {
        let mut p = params(None, true);
        p.columns = ColumnSelection::parse("Зарплата, Город");
        let (headers, rows) = sample_table().view(&p).unwrap();
        assert_eq!(headers, vec!["№"]);
        assert_eq!(rows.len(), 3);
    }
}

//! Russian display labels for vacancy fields and coded values.
//!
//! The dictionaries are closed sets, so each one is an enum with a lookup from
//! the raw CSV code and a `label()` accessor instead of a runtime map.

use std::{fmt, str::FromStr};

use crate::vacancy::VacancyError;

pub const INDEX_LABEL: &str = "№";
pub const YES_LABEL: &str = "Да";
pub const NO_LABEL: &str = "Нет";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    KeySkills,
    ExperienceId,
    Premium,
    EmployerName,
    SalaryFrom,
    SalaryTo,
    SalaryGross,
    SalaryCurrency,
    AreaName,
    PublishedAt,
    Salary,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Name,
        Field::Description,
        Field::KeySkills,
        Field::ExperienceId,
        Field::Premium,
        Field::EmployerName,
        Field::SalaryFrom,
        Field::SalaryTo,
        Field::SalaryGross,
        Field::SalaryCurrency,
        Field::AreaName,
        Field::PublishedAt,
        Field::Salary,
    ];

    /// Column order of the input file. `Salary` is display-only and never appears here.
    pub const CSV_ORDER: [Field; 12] = [
        Field::Name,
        Field::Description,
        Field::KeySkills,
        Field::ExperienceId,
        Field::Premium,
        Field::EmployerName,
        Field::SalaryFrom,
        Field::SalaryTo,
        Field::SalaryGross,
        Field::SalaryCurrency,
        Field::AreaName,
        Field::PublishedAt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::KeySkills => "key_skills",
            Field::ExperienceId => "experience_id",
            Field::Premium => "premium",
            Field::EmployerName => "employer_name",
            Field::SalaryFrom => "salary_from",
            Field::SalaryTo => "salary_to",
            Field::SalaryGross => "salary_gross",
            Field::SalaryCurrency => "salary_currency",
            Field::AreaName => "area_name",
            Field::PublishedAt => "published_at",
            Field::Salary => "salary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Название",
            Field::Description => "Описание",
            Field::KeySkills => "Навыки",
            Field::ExperienceId => "Опыт работы",
            Field::Premium => "Премиум-вакансия",
            Field::EmployerName => "Компания",
            Field::SalaryFrom => "Нижняя граница вилки оклада",
            Field::SalaryTo => "Верхняя граница вилки оклада",
            Field::SalaryGross => "Оклад указан до вычета налогов",
            Field::SalaryCurrency => "Идентификатор валюты оклада",
            Field::AreaName => "Название региона",
            Field::PublishedAt => "Дата публикации вакансии",
            Field::Salary => "Оклад",
        }
    }

    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { YES_LABEL } else { NO_LABEL }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    NoExperience,
    Between1And3,
    Between3And6,
    MoreThan6,
}

impl Experience {
    pub fn code(self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Experience::NoExperience => "Нет опыта",
            Experience::Between1And3 => "От 1 года до 3 лет",
            Experience::Between3And6 => "От 3 до 6 лет",
            Experience::MoreThan6 => "Более 6 лет",
        }
    }
}

impl FromStr for Experience {
    type Err = VacancyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "noExperience" => Ok(Experience::NoExperience),
            "between1And3" => Ok(Experience::Between1And3),
            "between3And6" => Ok(Experience::Between3And6),
            "moreThan6" => Ok(Experience::MoreThan6),
            other => Err(VacancyError::UnknownExperience(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Azn,
    Byr,
    Eur,
    Gel,
    Kgs,
    Kzt,
    Rur,
    Uah,
    Usd,
    Uzs,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Azn => "AZN",
            Currency::Byr => "BYR",
            Currency::Eur => "EUR",
            Currency::Gel => "GEL",
            Currency::Kgs => "KGS",
            Currency::Kzt => "KZT",
            Currency::Rur => "RUR",
            Currency::Uah => "UAH",
            Currency::Usd => "USD",
            Currency::Uzs => "UZS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::Azn => "Манаты",
            Currency::Byr => "Белорусские рубли",
            Currency::Eur => "Евро",
            Currency::Gel => "Грузинский лари",
            Currency::Kgs => "Киргизский сом",
            Currency::Kzt => "Тенге",
            Currency::Rur => "Рубли",
            Currency::Uah => "Гривны",
            Currency::Usd => "Доллары",
            Currency::Uzs => "Узбекский сум",
        }
    }
}

impl FromStr for Currency {
    type Err = VacancyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AZN" => Ok(Currency::Azn),
            "BYR" => Ok(Currency::Byr),
            "EUR" => Ok(Currency::Eur),
            "GEL" => Ok(Currency::Gel),
            "KGS" => Ok(Currency::Kgs),
            "KZT" => Ok(Currency::Kzt),
            "RUR" => Ok(Currency::Rur),
            "UAH" => Ok(Currency::Uah),
            "USD" => Ok(Currency::Usd),
            "UZS" => Ok(Currency::Uzs),
            other => Err(VacancyError::UnknownCurrency(other.to_string())),
        }
    }
}

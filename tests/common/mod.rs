#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};

pub const VACANCY_HEADER: &str = "name,description,key_skills,experience_id,premium,employer_name,\
                                  salary_from,salary_to,salary_gross,salary_currency,area_name,published_at";

/// One well-formed CSV line; `key_skills` may contain `\n` and is quoted.
pub fn vacancy_line(name: &str, key_skills: &str, salary_from: &str, currency: &str) -> String {
    format!(
        "{name},<p>Пишем <b>сервисы</b></p>,\"{key_skills}\",between1And3,False,Acme,\
         {salary_from},150000.0,False,{currency},Москва,2022-07-05T18:19:30+0300"
    )
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        self.write_bytes(name, contents.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents).expect("write temp file contents");
        path
    }

    /// Writes a vacancy export made of the standard header and `lines`.
    pub fn write_vacancies(&self, name: &str, lines: &[String]) -> PathBuf {
        let mut contents = format!("{VACANCY_HEADER}\n");
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        self.write(name, &contents)
    }
}

/// Joins prompt answers into the text piped to standard input.
pub fn answers(values: &[&str]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

pub mod cli;
pub mod dataset;
pub mod input;
pub mod io_utils;
pub mod locale;
pub mod report;
pub mod table;
pub mod text;
pub mod vacancy;

use std::{
    env,
    io::{self, BufRead, Write},
    path::Path,
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::{cli::Cli, dataset::DataSet, report::VacancyTable};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("vacancy_table", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    execute(&cli, &mut input, &mut output)
}

/// Asks for the report parameters, then prints either the first input error or the table.
pub fn execute<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()> {
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    let delimiter = cli.delimiter.unwrap_or(io_utils::DEFAULT_CSV_DELIMITER);

    let collected = input::collect(input, output)?;
    if let Some(error) = collected.error {
        info!("Input rejected: {error}");
        writeln!(output, "{error}").context("Writing error message")?;
        return Ok(());
    }
    let params = collected.params;
    if !params.filter.is_empty() {
        info!("Filter parameter {:?} is accepted but not applied", params.filter);
    }

    let dataset = DataSet::load(Path::new(&params.file_name), delimiter, encoding)?;
    if dataset.is_empty() {
        info!("No vacancies to display");
    }
    let table = VacancyTable::from_vacancies(&dataset.vacancies);
    let rendered = table.render(&params, cli.max_width)?;
    write!(output, "{rendered}").context("Writing table")?;
    output.flush().context("Flushing output")?;
    Ok(())
}

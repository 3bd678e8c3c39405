use clap::Parser;

use crate::table::DEFAULT_MAX_WIDTH;

/// All report parameters are asked for interactively; these flags only tune
/// how the input file is read and how wide table cells may grow.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Render a job-vacancy CSV export as a localized table",
    long_about = None
)]
pub struct Cli {
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Maximum display width of a table cell before its text wraps
    #[arg(long = "max-width", default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: usize,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}

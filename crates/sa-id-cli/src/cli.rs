//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sa_id_validator::{BatchConfig, IdColumn};

/// Environment variable holding the default field delimiter for `batch`.
pub const DELIMITER_ENV: &str = "SA_ID_DELIMITER";

#[derive(Parser, Debug)]
#[command(
    name = "sa-id",
    version,
    about = "Validate South African national identity numbers",
    long_about = "Validate South African national identity numbers.\n\n\
                  Checks the format, embedded date of birth, citizenship digit\n\
                  and Luhn checksum, and reports the encoded gender."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate identity numbers given as arguments.
    Check(CheckArgs),

    /// Validate a column of identity numbers in a delimited file.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identity numbers to validate.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Delimited file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Header name of the ID column.
    #[arg(long, value_name = "NAME", conflicts_with = "column_index")]
    pub column: Option<String>,

    /// Zero-based index of the ID column (default 0).
    #[arg(long, value_name = "N")]
    pub column_index: Option<usize>,

    /// Field delimiter: a single character, or "tab" [env: SA_ID_DELIMITER, default tab].
    #[arg(long, value_name = "C", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// The file has no header row.
    #[arg(long, conflicts_with = "column")]
    pub no_headers: bool,

    /// Report blank ID fields as invalid instead of skipping them.
    #[arg(long)]
    pub keep_blank: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl BatchArgs {
    /// Builds the batch configuration, falling back to `default_delimiter`
    /// when no `--delimiter` was given.
    pub fn to_config(&self, default_delimiter: u8) -> BatchConfig {
        let column = match (&self.column, self.column_index) {
            (Some(name), _) => IdColumn::Name(name.clone()),
            (None, Some(index)) => IdColumn::Index(index),
            (None, None) => IdColumn::default(),
        };

        BatchConfig {
            delimiter: self.delimiter.unwrap_or(default_delimiter),
            has_headers: !self.no_headers,
            column,
            skip_blank: !self.keep_blank,
            ..BatchConfig::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// JSON document.
    Json,
}

/// Parses a delimiter argument: `tab`, `\t`, or a single ASCII character.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "invalid delimiter '{}': expected a single ASCII character or 'tab'",
                    value
                )),
            }
        }
    }
}

/// Default delimiter from [`DELIMITER_ENV`], or tab.
pub fn default_delimiter() -> u8 {
    delimiter_or_tab(std::env::var(DELIMITER_ENV).ok().as_deref())
}

/// Parses an optional delimiter setting, falling back to tab when it is
/// absent or invalid.
pub fn delimiter_or_tab(value: Option<&str>) -> u8 {
    value
        .and_then(|value| parse_delimiter(value).ok())
        .unwrap_or(b'\t')
}

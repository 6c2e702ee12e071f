//! # sa-id-cli
//!
//! Command-line front end for `sa-id-validator`.
//!
//! The `sa-id` binary validates identity numbers given as arguments
//! (`sa-id check`) or held in a delimited file (`sa-id batch`), printing text
//! or JSON reports to stdout and logs to stderr.
//!
//! Identity numbers are personal data. They appear in the reports the user
//! asked for, never in log output.

pub mod cli;
pub mod commands;
pub mod report;

pub use commands::{run_batch, run_check, CommandResult};

/// Exit status when every identity number was valid.
pub const EXIT_VALID: u8 = 0;
/// Exit status when at least one identity number was invalid.
pub const EXIT_INVALID: u8 = 1;
/// Exit status when the command could not run to completion.
pub const EXIT_ERROR: u8 = 2;

/// Maps a command outcome to the process exit status.
pub fn exit_status(result: &CommandResult) -> u8 {
    match result {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_INVALID,
        Err(_) => EXIT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(true)), 0);
        assert_eq!(exit_status(&Ok(false)), 1);
        let err: CommandResult = Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into());
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn test_exit_status_from_commands() {
        let args = cli::CheckArgs {
            ids: vec!["2001014800086".to_string()],
            format: cli::OutputFormat::Text,
        };
        assert_eq!(exit_status(&run_check(&args, &mut Vec::<u8>::new())), EXIT_VALID);

        let args = cli::CheckArgs {
            ids: vec!["2001014800087".to_string()],
            format: cli::OutputFormat::Text,
        };
        assert_eq!(exit_status(&run_check(&args, &mut Vec::<u8>::new())), EXIT_INVALID);

        let args = cli::BatchArgs {
            file: "/nonexistent/sa-id.tsv".into(),
            column: None,
            column_index: None,
            delimiter: None,
            no_headers: true,
            keep_blank: false,
            format: cli::OutputFormat::Text,
        };
        assert_eq!(
            exit_status(&run_batch(&args, b'\t', &mut Vec::<u8>::new())),
            EXIT_ERROR
        );
    }
}

//! Command implementations.
//!
//! Each command writes its report to `out` and returns whether every
//! identity number was valid.

use std::error::Error;
use std::io::Write;

use sa_id_validator::BatchValidator;

use crate::cli::{BatchArgs, CheckArgs, OutputFormat};
use crate::report::{BatchReport, IdReport, RejectedRow};

/// Result type for command runs.
pub type CommandResult = Result<bool, Box<dyn Error>>;

/// Runs `sa-id check`.
pub fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> CommandResult {
    let reports: Vec<IdReport> = args.ids.iter().map(|id| IdReport::check(id)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(checked = reports.len(), invalid, "check finished");

    match args.format {
        OutputFormat::Text => {
            for report in &reports {
                writeln!(out, "{}", report.to_text())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(invalid == 0)
}

/// Runs `sa-id batch`.
pub fn run_batch<W: Write>(args: &BatchArgs, default_delimiter: u8, out: &mut W) -> CommandResult {
    let config = args.to_config(default_delimiter);
    tracing::info!(file = %args.file.display(), "validating batch");

    let validator = BatchValidator::from_path(&args.file, config)?;
    let mut rejected = Vec::new();
    let stats = validator.validate_batched(|batch| {
        rejected.extend(batch.iter().filter_map(RejectedRow::from_record));
        Ok(())
    })?;

    tracing::info!(
        total = stats.total,
        valid = stats.valid,
        invalid = stats.invalid,
        elapsed_ms = stats.elapsed_ms,
        "batch finished"
    );

    let report = BatchReport {
        file: args.file.display().to_string(),
        stats,
        rejected,
    };

    match args.format {
        OutputFormat::Text => write!(out, "{}", report.to_text())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(report.stats.invalid == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn check_args(ids: &[&str], format: OutputFormat) -> CheckArgs {
        CheckArgs {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            format,
        }
    }

    fn batch_args(file: PathBuf, format: OutputFormat) -> BatchArgs {
        BatchArgs {
            file,
            column: Some("id".to_string()),
            column_index: None,
            delimiter: Some(b','),
            no_headers: false,
            keep_blank: false,
            format,
        }
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sa-id-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_all_valid() {
        let mut out = Vec::new();
        let ok = run_check(
            &check_args(&["2001014800086", "2909035800085"], OutputFormat::Text),
            &mut out,
        )
        .unwrap();
        assert!(ok);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.contains("\tvalid\t")));
    }

    #[test]
    fn test_check_with_invalid() {
        let mut out = Vec::new();
        let ok = run_check(
            &check_args(&["2001014800086", "2001324800086"], OutputFormat::Text),
            &mut out,
        )
        .unwrap();
        assert!(!ok);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("2001324800086\tinvalid\tfemale\tinvalid date of birth: 2020-01-32"));
    }

    #[test]
    fn test_check_json() {
        let mut out = Vec::new();
        run_check(&check_args(&["2001015000084"], OutputFormat::Json), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["gender"], "male");
        assert_eq!(json[0]["valid"], false);
        assert_eq!(json[0]["error"]["reason"], "checksum_mismatch");
    }

    #[test]
    fn test_batch_text() {
        let path = write_temp(
            "batch.csv",
            "name,id\nAlice,2001014800086\nBob,2909035800085\nCarol,2001014800286\nDan,\n",
        );
        let mut out = Vec::new();
        let ok = run_batch(&batch_args(path.clone(), OutputFormat::Text), b'\t', &mut out).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!ok);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("line 4: 2001014800286\t"));
        assert!(text.contains("checked:  3 (1 blank skipped)"));
        assert!(text.contains("female:   1"));
        assert!(text.contains("male:     1"));
    }

    #[test]
    fn test_batch_json_all_valid() {
        let path = write_temp("batch.json.csv", "id\n2001014800086\n2909035800085\n");
        let mut out = Vec::new();
        let ok = run_batch(&batch_args(path.clone(), OutputFormat::Json), b'\t', &mut out).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(ok);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["stats"]["valid"], 2);
        assert_eq!(json["rejected"], serde_json::json!([]));
    }

    #[test]
    fn test_batch_missing_file() {
        let args = batch_args(PathBuf::from("/nonexistent/sa-id.csv"), OutputFormat::Text);
        let err = run_batch(&args, b'\t', &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_batch_missing_column() {
        let path = write_temp("nocolumn.csv", "name\nAlice\n");
        let result = run_batch(&batch_args(path.clone(), OutputFormat::Text), b'\t', &mut Vec::<u8>::new());
        std::fs::remove_file(&path).unwrap();
        assert!(result.unwrap_err().to_string().contains("Missing required column: id"));
    }
}

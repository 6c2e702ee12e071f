//! Report types printed by the `check` and `batch` commands.

use std::fmt::Write as _;

use sa_id_types::{Citizenship, Gender, SaIdNumber};
use sa_id_validator::{
    classify_gender, validate, BatchRecord, BatchStats, Stage, ValidationError, ValidationResult,
};
use serde::Serialize;

/// Result of checking one identity number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdReport {
    /// The input as given.
    pub id: String,
    /// Whether every check passed.
    pub valid: bool,
    /// Gender from the sequence code; known for any well-formed input.
    pub gender: Gender,
    /// Citizenship status of a valid number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<Citizenship>,
    /// Date of birth of a valid number, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Why the number was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl IdReport {
    /// Validates `id` and builds its report.
    pub fn check(id: &str) -> Self {
        Self::from_outcome(id, validate(Some(id)))
    }

    /// Builds a report from an existing validation outcome.
    pub fn from_outcome(id: &str, outcome: ValidationResult<SaIdNumber>) -> Self {
        let gender = classify_gender(Some(id));
        match outcome {
            Ok(number) => Self {
                id: id.to_string(),
                valid: true,
                gender,
                citizenship: number.citizenship(),
                date_of_birth: Some(format_date(&number)),
                error: None,
            },
            Err(err) => Self {
                id: id.to_string(),
                valid: false,
                gender,
                citizenship: None,
                date_of_birth: None,
                error: Some(err),
            },
        }
    }

    /// Renders the report as one human-readable line.
    pub fn to_text(&self) -> String {
        let mut line = format!(
            "{}\t{}\t{}",
            self.id,
            if self.valid { "valid" } else { "invalid" },
            self.gender
        );
        if let Some(citizenship) = self.citizenship {
            let _ = write!(line, "\t{}", citizenship);
        }
        if let Some(date) = &self.date_of_birth {
            let _ = write!(line, "\t{}", date);
        }
        if let Some(err) = &self.error {
            let _ = write!(line, "\t{}", err);
        }
        line
    }
}

fn format_date(number: &SaIdNumber) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        number.birth_year(),
        number.birth_month(),
        number.birth_day()
    )
}

/// A row rejected during a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// One-based line number.
    pub line: u64,
    /// The raw field value.
    pub input: String,
    /// The check that failed.
    pub stage: Stage,
    /// Human-readable reason.
    pub reason: String,
}

impl RejectedRow {
    /// Extracts the rejection from a record, if it was rejected.
    pub fn from_record(record: &BatchRecord) -> Option<Self> {
        let err = record.outcome.as_ref().err()?;
        Some(Self {
            line: record.line,
            input: record.input.clone(),
            stage: err.stage(),
            reason: err.to_string(),
        })
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Input file.
    pub file: String,
    /// Counts.
    pub stats: BatchStats,
    /// Rejected rows in input order.
    pub rejected: Vec<RejectedRow>,
}

impl BatchReport {
    /// Renders the report as human-readable text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rejected {
            let _ = writeln!(
                out,
                "line {}: {}\t{} ({})",
                row.line, row.input, row.reason, row.stage
            );
        }
        if !self.rejected.is_empty() {
            out.push('\n');
        }
        let stats = &self.stats;
        let _ = writeln!(out, "file:     {}", self.file);
        let _ = writeln!(
            out,
            "checked:  {} ({} blank skipped)",
            stats.total, stats.skipped
        );
        let _ = writeln!(
            out,
            "valid:    {} ({:.1}%)",
            stats.valid,
            stats.valid_rate()
        );
        let _ = writeln!(out, "invalid:  {}", stats.invalid);
        let _ = writeln!(out, "female:   {}", stats.female);
        let _ = writeln!(out, "male:     {}", stats.male);
        out
    }
}

//! Error, configuration and statistics types for validation.

use sa_id_types::FormatError;
use thiserror::Error;

/// The check in the validation pipeline that rejected an input.
///
/// Variants are listed in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// Presence, length and digit check.
    Format,
    /// Embedded date of birth.
    BirthDate,
    /// Sequence / gender code range.
    GenderCode,
    /// Citizenship digit.
    Citizenship,
    /// Luhn checksum.
    Checksum,
}

impl Stage {
    /// Snake-case name of this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::BirthDate => "birth_date",
            Self::GenderCode => "gender_code",
            Self::Citizenship => "citizenship",
            Self::Checksum => "checksum",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason an identity number was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum ValidationError {
    /// No input was supplied.
    #[error("identity number is missing")]
    Missing,

    /// The input was the empty string.
    #[error("identity number is empty")]
    Empty,

    /// The input did not have 13 characters.
    #[error("expected 13 digits, found {found} characters")]
    InvalidLength {
        /// Number of characters found.
        found: usize,
    },

    /// The input contained a character other than an ASCII digit.
    #[error("non-digit character '{found}' at index {index}")]
    NonDigit {
        /// Zero-based character index.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// The first six digits do not form a calendar date.
    #[error("invalid date of birth: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate {
        /// Century-resolved year.
        year: u16,
        /// Month as written.
        month: u8,
        /// Day as written.
        day: u8,
    },

    /// The gender code is outside 0000-9999.
    #[error("gender code {code} out of range")]
    GenderCodeOutOfRange {
        /// The decoded code.
        code: u16,
    },

    /// The citizenship digit is not 0 or 1.
    #[error("invalid citizenship digit {digit} (expected 0 or 1)")]
    InvalidCitizenship {
        /// The digit found.
        digit: u8,
    },

    /// The Luhn checksum failed.
    #[error("checksum mismatch: check digit is {found}, expected {expected}")]
    ChecksumMismatch {
        /// Check digit that would make the number pass.
        expected: u8,
        /// Check digit found.
        found: u8,
    },
}

impl ValidationError {
    /// Returns the pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Missing | Self::Empty | Self::InvalidLength { .. } | Self::NonDigit { .. } => {
                Stage::Format
            }
            Self::InvalidBirthDate { .. } => Stage::BirthDate,
            Self::GenderCodeOutOfRange { .. } => Stage::GenderCode,
            Self::InvalidCitizenship { .. } => Stage::Citizenship,
            Self::ChecksumMismatch { .. } => Stage::Checksum,
        }
    }

    /// Returns true if the input was not a 13-digit string at all.
    pub fn is_format_error(&self) -> bool {
        self.stage() == Stage::Format
    }
}

impl From<FormatError> for ValidationError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Empty => Self::Empty,
            FormatError::InvalidLength(found) => Self::InvalidLength { found },
            FormatError::NonDigit { index, found } => Self::NonDigit { index, found },
        }
    }
}

/// Result type for single-number validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors that stop a batch run.
///
/// A rejected identity number is not a batch error; it is reported in the
/// record outcome.
#[derive(Error, Debug)]
pub enum BatchError {
    /// I/O error reading the input.
    #[error("IO error reading batch input: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Input file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Named ID column not present in the header.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The column name that was requested.
        column: String,
    },

    /// A named column was requested for input without a header row.
    #[error("Column '{column}' requested by name but input has no header row")]
    HeadersRequired {
        /// The column name that was requested.
        column: String,
    },

    /// A row is too short to contain the ID column.
    #[error("Line {line}: no column at index {index} (row has {width} fields)")]
    ColumnOutOfRange {
        /// One-based line number.
        line: u64,
        /// Requested column index.
        index: usize,
        /// Number of fields in the row.
        width: usize,
    },
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Which column of a delimited file holds the identity numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdColumn {
    /// Zero-based column index.
    Index(usize),
    /// Header name. Requires a header row.
    Name(String),
}

impl Default for IdColumn {
    fn default() -> Self {
        Self::Index(0)
    }
}

/// Configuration for batch validation.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row is a header.
    pub has_headers: bool,
    /// Column holding the identity numbers.
    pub column: IdColumn,
    /// Number of records per callback in batched mode.
    pub batch_size: usize,
    /// Skip rows whose ID field is blank instead of rejecting them.
    pub skip_blank: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            has_headers: true,
            column: IdColumn::default(),
            batch_size: 10_000,
            skip_blank: true,
        }
    }
}

impl BatchConfig {
    /// Comma-separated input with a header row.
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            ..Self::default()
        }
    }

    /// One identity number per line, no header.
    pub fn lines() -> Self {
        Self {
            has_headers: false,
            ..Self::default()
        }
    }
}

/// Statistics from a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchStats {
    /// Rows validated (blank rows that were skipped excluded).
    pub total: usize,
    /// Rows that passed every check.
    pub valid: usize,
    /// Rows that failed a check.
    pub invalid: usize,
    /// Blank rows skipped.
    pub skipped: usize,
    /// Valid rows classified female.
    pub female: usize,
    /// Valid rows classified male.
    pub male: usize,
    /// Wall time in milliseconds.
    pub elapsed_ms: u64,
}

impl BatchStats {
    /// Returns the percentage of validated rows that passed.
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.valid as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_config_default() {
        let config = BatchConfig::default();
        assert_eq!(config.delimiter, b'\t');
        assert!(config.has_headers);
        assert_eq!(config.column, IdColumn::Index(0));
        assert_eq!(config.batch_size, 10_000);
        assert!(config.skip_blank);
    }

    #[test]
    fn test_batch_config_presets() {
        assert_eq!(BatchConfig::csv().delimiter, b',');
        assert!(!BatchConfig::lines().has_headers);
    }

    #[test]
    fn test_stage_of_errors() {
        assert_eq!(ValidationError::Missing.stage(), Stage::Format);
        assert_eq!(
            ValidationError::InvalidBirthDate {
                year: 2020,
                month: 13,
                day: 1
            }
            .stage(),
            Stage::BirthDate
        );
        assert_eq!(
            ValidationError::InvalidCitizenship { digit: 2 }.stage(),
            Stage::Citizenship
        );
        assert_eq!(
            ValidationError::ChecksumMismatch {
                expected: 6,
                found: 7
            }
            .stage(),
            Stage::Checksum
        );
        assert!(Stage::Format < Stage::Checksum);
    }

    #[test]
    fn test_from_format_error() {
        assert_eq!(
            ValidationError::from(FormatError::InvalidLength(11)),
            ValidationError::InvalidLength { found: 11 }
        );
        assert!(ValidationError::from(FormatError::Empty).is_format_error());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidBirthDate {
            year: 2020,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date of birth: 2020-02-30");
        let err = ValidationError::ChecksumMismatch {
            expected: 6,
            found: 7,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: check digit is 7, expected 6"
        );
    }

    #[test]
    fn test_batch_stats_valid_rate() {
        let stats = BatchStats {
            total: 4,
            valid: 3,
            ..Default::default()
        };
        assert!((stats.valid_rate() - 75.0).abs() < 0.01);
        assert_eq!(BatchStats::default().valid_rate(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_validation_error_json() {
        let err = ValidationError::InvalidCitizenship { digit: 2 };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "reason": "invalid_citizenship", "digit": 2 })
        );
    }
}

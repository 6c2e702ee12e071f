//! # sa-id-validator
//!
//! Validation and gender classification for South African identity numbers.
//!
//! A number is valid when it passes, in order:
//!
//! 1. **Format**: exactly 13 ASCII digits
//! 2. **Birth date**: `YYMMDD` is a real date (years above 50 are 19xx, the rest 20xx)
//! 3. **Gender code**: positions 7-10 within 0000-9999
//! 4. **Citizenship**: position 11 is 0 or 1
//! 5. **Checksum**: the Luhn check over all 13 digits
//!
//! ## Usage
//!
//! ```rust
//! use sa_id_types::Gender;
//! use sa_id_validator::{classify_gender, is_valid, validate, ValidationError};
//!
//! assert!(is_valid(Some("2001014800086")));
//! assert!(!is_valid(None));
//! assert_eq!(classify_gender(Some("2909035800085")), Gender::Male);
//!
//! assert_eq!(
//!     validate(Some("2001014800286")),
//!     Err(ValidationError::InvalidCitizenship { digit: 2 })
//! );
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): [`validate_many_parallel`] via rayon.
//! - `serde` (default): Serialize support for errors, records and statistics.

#![warn(missing_docs)]

mod batch;
pub mod checks;
pub mod luhn;
mod types;
mod validator;

pub use batch::{validate_many, BatchRecord, BatchValidator};
#[cfg(feature = "parallel")]
pub use batch::validate_many_parallel;
pub use types::{
    BatchConfig, BatchError, BatchResult, BatchStats, IdColumn, Stage, ValidationError,
    ValidationResult,
};
pub use validator::{classify_gender, is_valid, validate};

// Re-export sa-id-types for convenience
pub use sa_id_types;

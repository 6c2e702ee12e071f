//! # sa-id-types
//!
//! Type definitions for South African national identity numbers.
//!
//! This crate provides the value types shared by the validator and the
//! command-line tool: the structurally parsed [`SaIdNumber`], the coded
//! [`Gender`] and [`Citizenship`] segments, and the [`layout`] constants.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use sa_id_types::{Gender, SaIdNumber};
//! use sa_id_types::layout;
//!
//! let id: SaIdNumber = "2001014800086".parse().unwrap();
//! assert_eq!(id.gender(), Gender::Female);
//! assert_eq!(id.digits().len(), layout::ID_LENGTH);
//! ```
//!
//! Parsing checks structure only. Use `sa-id-validator` to check the birth
//! date, citizenship digit and checksum.

#![warn(missing_docs)]

mod enums;
mod id_number;
pub mod layout;

// Re-export all public types at crate root
pub use enums::{Citizenship, Gender};
pub use id_number::{FormatError, SaIdNumber};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _gender = Gender::Unknown;
        let _citizenship = Citizenship::Citizen;
        let _err = FormatError::Empty;
        assert_eq!(layout::ID_LENGTH, 13);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let id: SaIdNumber = "2909035800085".parse().unwrap();

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2909035800085\"");
        let parsed: SaIdNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<SaIdNumber>("\"2909035\"").is_err());
        assert!(serde_json::from_str::<SaIdNumber>("\"29090358000X5\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_enum_serde_names() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Citizenship::PermanentResident).unwrap(),
            "\"permanent_resident\""
        );
    }
}

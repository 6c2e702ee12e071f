//! Identity number validation and gender classification.
//!
//! The pipeline runs format, birth date, gender code, citizenship and
//! checksum in that order and stops at the first failure.

use sa_id_types::{Gender, SaIdNumber};

use crate::checks;
use crate::types::ValidationResult;

/// Validates an identity number and returns the decoded number, or the
/// reason for the first failed check.
///
/// # Examples
///
/// ```
/// use sa_id_validator::{validate, Stage};
///
/// let id = validate(Some("2001014800086")).unwrap();
/// assert_eq!(id.birth_year(), 2020);
///
/// let err = validate(Some("2001014800286")).unwrap_err();
/// assert_eq!(err.stage(), Stage::Citizenship);
/// ```
pub fn validate(id: Option<&str>) -> ValidationResult<SaIdNumber> {
    let number = checks::format(id)?;
    checks::birth_date(&number)?;
    checks::gender_code(&number)?;
    checks::citizenship(&number)?;
    checks::checksum(&number)?;
    Ok(number)
}

/// Returns true if `id` is a valid South African identity number.
///
/// `None` and the empty string are invalid.
///
/// # Examples
///
/// ```
/// use sa_id_validator::is_valid;
///
/// assert!(is_valid(Some("2001014800086")));
/// assert!(!is_valid(Some("2001014800087")));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid(id: Option<&str>) -> bool {
    validate(id).is_ok()
}

/// Classifies the gender encoded in `id`.
///
/// Only the format check is applied; a number with a bad date or checksum
/// is still classified. Malformed input yields [`Gender::Unknown`].
///
/// # Examples
///
/// ```
/// use sa_id_types::Gender;
/// use sa_id_validator::classify_gender;
///
/// assert_eq!(classify_gender(Some("2001014800086")), Gender::Female);
/// assert_eq!(classify_gender(Some("2001015000084")), Gender::Male);
/// assert_eq!(classify_gender(Some("")), Gender::Unknown);
/// ```
pub fn classify_gender(id: Option<&str>) -> Gender {
    checks::format(id).map_or(Gender::Unknown, |number| number.gender())
}

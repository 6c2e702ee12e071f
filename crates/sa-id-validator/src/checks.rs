//! The individual checks of the validation pipeline.
//!
//! Every check after [`format`] takes the structurally parsed number, so no
//! later check re-parses text.

use chrono::NaiveDate;
use sa_id_types::layout::MAX_GENDER_CODE;
use sa_id_types::{Citizenship, SaIdNumber};

use crate::luhn;
use crate::types::{ValidationError, ValidationResult};

/// Checks that the input is present and is exactly 13 ASCII digits.
pub fn format(id: Option<&str>) -> ValidationResult<SaIdNumber> {
    let id = id.ok_or(ValidationError::Missing)?;
    Ok(SaIdNumber::parse(id)?)
}

/// Checks that `YYMMDD` is a real calendar date after century resolution.
///
/// # Examples
///
/// ```
/// use sa_id_validator::checks;
///
/// let leap = checks::format(Some("0002290000000")).unwrap();
/// assert!(checks::birth_date(&leap).is_ok());
///
/// let not_leap = checks::format(Some("0102290000000")).unwrap();
/// assert!(checks::birth_date(&not_leap).is_err());
/// ```
pub fn birth_date(id: &SaIdNumber) -> ValidationResult<NaiveDate> {
    let (year, month, day) = (id.birth_year(), id.birth_month(), id.birth_day());
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or(ValidationError::InvalidBirthDate { year, month, day })
}

/// Checks that the gender code is within 0000-9999.
///
/// Four digits can never exceed 9999; the guard keeps the range explicit.
pub fn gender_code(id: &SaIdNumber) -> ValidationResult<u16> {
    let code = id.gender_code();
    if code > MAX_GENDER_CODE {
        return Err(ValidationError::GenderCodeOutOfRange { code });
    }
    Ok(code)
}

/// Checks that the citizenship digit is 0 or 1.
pub fn citizenship(id: &SaIdNumber) -> ValidationResult<Citizenship> {
    id.citizenship()
        .ok_or(ValidationError::InvalidCitizenship {
            digit: id.citizenship_digit(),
        })
}

/// Checks the Luhn checksum over all 13 digits.
pub fn checksum(id: &SaIdNumber) -> ValidationResult<()> {
    let digits = id.digits();
    if luhn::is_valid(digits) {
        return Ok(());
    }
    Err(ValidationError::ChecksumMismatch {
        expected: luhn::check_digit(&digits[..digits.len() - 1]),
        found: id.check_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> SaIdNumber {
        format(Some(s)).unwrap()
    }

    #[test]
    fn test_format() {
        assert!(format(Some("2001014800086")).is_ok());
        assert_eq!(format(None), Err(ValidationError::Missing));
        assert_eq!(format(Some("")), Err(ValidationError::Empty));
        assert_eq!(
            format(Some("20010148000")),
            Err(ValidationError::InvalidLength { found: 11 })
        );
        assert_eq!(
            format(Some("2001-01-4800086")),
            Err(ValidationError::InvalidLength { found: 15 })
        );
        assert_eq!(
            format(Some("20010A4800086")),
            Err(ValidationError::NonDigit {
                index: 5,
                found: 'A'
            })
        );
    }

    #[test]
    fn test_birth_date() {
        let date = birth_date(&parsed("2001014800086")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());

        let date = birth_date(&parsed("8506155800089")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1985, 6, 15).unwrap());

        assert_eq!(
            birth_date(&parsed("2013014800086")),
            Err(ValidationError::InvalidBirthDate {
                year: 2020,
                month: 13,
                day: 1
            })
        );
        assert!(birth_date(&parsed("2001324800086")).is_err());
        assert!(birth_date(&parsed("2000014800086")).is_err());
        assert!(birth_date(&parsed("2001004800086")).is_err());
        assert!(birth_date(&parsed("2002304800086")).is_err());
        assert!(birth_date(&parsed("2004314800086")).is_err());
    }

    #[test]
    fn test_birth_date_century_cutoff() {
        // 2050 is not a leap year, 1952 is.
        assert_eq!(
            birth_date(&parsed("5002290000000")),
            Err(ValidationError::InvalidBirthDate {
                year: 2050,
                month: 2,
                day: 29
            })
        );
        let date = birth_date(&parsed("5202290000000")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1952, 2, 29).unwrap());
    }

    #[test]
    fn test_gender_code() {
        assert_eq!(gender_code(&parsed("2001014800086")), Ok(4800));
        assert_eq!(gender_code(&parsed("2001019999086")), Ok(9999));
        assert_eq!(gender_code(&parsed("2001010000086")), Ok(0));
    }

    #[test]
    fn test_citizenship() {
        assert_eq!(
            citizenship(&parsed("2001014800086")),
            Ok(Citizenship::Citizen)
        );
        assert_eq!(
            citizenship(&parsed("2001014800186")),
            Ok(Citizenship::PermanentResident)
        );
        assert_eq!(
            citizenship(&parsed("2001014800286")),
            Err(ValidationError::InvalidCitizenship { digit: 2 })
        );
    }

    #[test]
    fn test_checksum() {
        assert!(checksum(&parsed("2001014800086")).is_ok());
        assert!(checksum(&parsed("2909035800085")).is_ok());
        assert_eq!(
            checksum(&parsed("2001014800087")),
            Err(ValidationError::ChecksumMismatch {
                expected: 6,
                found: 7
            })
        );
    }
}

//! Layout of a South African identity number.
//!
//! ```text
//!  Y Y M M D D  G G G G  C  A  Z
//!  0 1 2 3 4 5  6 7 8 9  10 11 12
//! ```
//!
//! - `YYMMDD`: date of birth, two-digit year
//! - `GGGG`: sequence number, which also encodes gender
//! - `C`: citizenship (0 citizen, 1 permanent resident)
//! - `A`: historical classification digit (not validated)
//! - `Z`: Luhn check digit
//!
//! Offsets below are zero-based byte offsets into the 13-digit string.

use std::ops::Range;

/// Number of digits in an identity number.
pub const ID_LENGTH: usize = 13;

/// Offsets of the two-digit birth year.
pub const YEAR: Range<usize> = 0..2;

/// Offsets of the birth month.
pub const MONTH: Range<usize> = 2..4;

/// Offsets of the birth day.
pub const DAY: Range<usize> = 4..6;

/// Offsets of the sequence / gender code.
pub const GENDER_CODE: Range<usize> = 6..10;

/// Offset of the citizenship digit.
pub const CITIZENSHIP: usize = 10;

/// Offset of the historical classification digit.
pub const CLASSIFICATION: usize = 11;

/// Offset of the check digit.
pub const CHECK_DIGIT: usize = 12;

/// Two-digit years above this value belong to the 1900s, the rest to the 2000s.
pub const CENTURY_CUTOFF: u8 = 50;

/// Smallest gender code assigned to males. Codes below it are female.
pub const MALE_THRESHOLD: u16 = 5000;

/// Largest representable gender code.
pub const MAX_GENDER_CODE: u16 = 9999;

/// Resolves a two-digit year to a full year using [`CENTURY_CUTOFF`].
///
/// # Examples
///
/// ```
/// use sa_id_types::layout::resolve_century;
///
/// assert_eq!(resolve_century(51), 1951);
/// assert_eq!(resolve_century(50), 2050);
/// assert_eq!(resolve_century(0), 2000);
/// ```
pub const fn resolve_century(year_of_century: u8) -> u16 {
    if year_of_century > CENTURY_CUTOFF {
        1900 + year_of_century as u16
    } else {
        2000 + year_of_century as u16
    }
}

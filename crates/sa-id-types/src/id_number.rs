//! South African identity number value type.
//!
//! [`SaIdNumber`] guarantees structure only: exactly 13 ASCII digits. The
//! calendar, citizenship and checksum rules live in `sa-id-validator`.

use std::str::FromStr;

use crate::layout::{self, ID_LENGTH};
use crate::{Citizenship, Gender};

/// Error type for structural parsing of an identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input was empty.
    Empty,
    /// The input did not contain exactly 13 characters.
    InvalidLength(usize),
    /// A character other than an ASCII digit was found.
    NonDigit {
        /// Zero-based character index.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "identity number is empty"),
            Self::InvalidLength(len) => write!(
                f,
                "identity number has {} characters (expected {})",
                len, ID_LENGTH
            ),
            Self::NonDigit { index, found } => {
                write!(f, "non-digit character '{}' at index {}", found, index)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// A structurally well-formed South African identity number.
///
/// Holds the 13 decoded digits. Leading zeros are significant, so the value
/// is never treated as an integer.
///
/// # Examples
///
/// ```
/// use sa_id_types::{Citizenship, Gender, SaIdNumber};
///
/// let id: SaIdNumber = "2001014800086".parse().unwrap();
/// assert_eq!(id.birth_year(), 2020);
/// assert_eq!(id.birth_month(), 1);
/// assert_eq!(id.birth_day(), 1);
/// assert_eq!(id.gender_code(), 4800);
/// assert_eq!(id.gender(), Gender::Female);
/// assert_eq!(id.citizenship(), Some(Citizenship::Citizen));
/// assert_eq!(id.check_digit(), 6);
/// assert_eq!(id.to_string(), "2001014800086");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SaIdNumber {
    digits: [u8; ID_LENGTH],
}

impl SaIdNumber {
    /// Parses a 13-digit string.
    ///
    /// Only the structure is checked. Whitespace and separators are rejected.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        if s.is_empty() {
            return Err(FormatError::Empty);
        }

        let len = s.chars().count();
        if len != ID_LENGTH {
            return Err(FormatError::InvalidLength(len));
        }

        let mut digits = [0u8; ID_LENGTH];
        for (index, c) in s.chars().enumerate() {
            if !c.is_ascii_digit() {
                return Err(FormatError::NonDigit { index, found: c });
            }
            digits[index] = c as u8 - b'0';
        }

        Ok(Self { digits })
    }

    /// Creates an identity number from decoded digits.
    ///
    /// Returns `None` if any element is greater than 9.
    pub fn from_digits(digits: [u8; ID_LENGTH]) -> Option<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Some(Self { digits })
        } else {
            None
        }
    }

    /// The decoded digits, most significant first.
    pub fn digits(&self) -> &[u8; ID_LENGTH] {
        &self.digits
    }

    fn number(&self, range: std::ops::Range<usize>) -> u16 {
        self.digits[range]
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// Two-digit birth year as written (positions 1-2).
    pub fn year_of_century(&self) -> u8 {
        self.number(layout::YEAR) as u8
    }

    /// Birth year with the century resolved by the fixed cutoff.
    pub fn birth_year(&self) -> u16 {
        layout::resolve_century(self.year_of_century())
    }

    /// Birth month as written. Not guaranteed to be 1-12.
    pub fn birth_month(&self) -> u8 {
        self.number(layout::MONTH) as u8
    }

    /// Birth day as written. Not guaranteed to exist in the month.
    pub fn birth_day(&self) -> u8 {
        self.number(layout::DAY) as u8
    }

    /// Four-digit sequence / gender code (positions 7-10).
    pub fn gender_code(&self) -> u16 {
        self.number(layout::GENDER_CODE)
    }

    /// Gender derived from [`gender_code`](Self::gender_code).
    pub fn gender(&self) -> Gender {
        Gender::from_code(self.gender_code())
    }

    /// Raw citizenship digit (position 11).
    pub fn citizenship_digit(&self) -> u8 {
        self.digits[layout::CITIZENSHIP]
    }

    /// Citizenship status, or `None` when the digit is not 0 or 1.
    pub fn citizenship(&self) -> Option<Citizenship> {
        Citizenship::from_digit(self.citizenship_digit())
    }

    /// Position 12. Historically a race classifier; carried but not validated.
    pub fn classification_digit(&self) -> u8 {
        self.digits[layout::CLASSIFICATION]
    }

    /// Check digit (position 13).
    pub fn check_digit(&self) -> u8 {
        self.digits[layout::CHECK_DIGIT]
    }
}

impl FromStr for SaIdNumber {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SaIdNumber {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SaIdNumber> for String {
    fn from(id: SaIdNumber) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for SaIdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

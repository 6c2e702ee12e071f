//! Enumerations for the coded segments of an identity number.

use crate::layout::{MALE_THRESHOLD, MAX_GENDER_CODE};

/// Gender encoded in the sequence segment of an identity number.
///
/// # Examples
///
/// ```
/// use sa_id_types::Gender;
///
/// assert_eq!(Gender::from_code(148), Gender::Female);
/// assert_eq!(Gender::from_code(5000), Gender::Male);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// Gender code 0000-4999.
    Female,
    /// Gender code 5000-9999.
    Male,
    /// The input was not a well-formed identity number.
    #[default]
    Unknown,
}

impl Gender {
    /// Classifies a four-digit gender code.
    ///
    /// Returns `Unknown` for values above 9999, which cannot occur in a
    /// well-formed number.
    pub fn from_code(code: u16) -> Self {
        match code {
            c if c < MALE_THRESHOLD => Self::Female,
            c if c <= MAX_GENDER_CODE => Self::Male,
            _ => Self::Unknown,
        }
    }

    /// Lowercase name of this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true unless this is `Unknown`.
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Citizenship status encoded in the eleventh digit.
///
/// # Examples
///
/// ```
/// use sa_id_types::Citizenship;
///
/// assert_eq!(Citizenship::from_digit(0), Some(Citizenship::Citizen));
/// assert_eq!(Citizenship::from_digit(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Citizenship {
    /// South African citizen.
    Citizen,
    /// Permanent resident.
    PermanentResident,
}

impl Citizenship {
    /// Digit for a South African citizen.
    pub const CITIZEN_DIGIT: u8 = 0;
    /// Digit for a permanent resident.
    pub const PERMANENT_RESIDENT_DIGIT: u8 = 1;

    /// Creates a Citizenship from its digit.
    ///
    /// Returns `None` for any digit other than 0 or 1.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            Self::CITIZEN_DIGIT => Some(Self::Citizen),
            Self::PERMANENT_RESIDENT_DIGIT => Some(Self::PermanentResident),
            _ => None,
        }
    }

    /// Returns the digit for this status.
    pub fn to_digit(self) -> u8 {
        match self {
            Self::Citizen => Self::CITIZEN_DIGIT,
            Self::PermanentResident => Self::PERMANENT_RESIDENT_DIGIT,
        }
    }

    /// Snake-case name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::PermanentResident => "permanent_resident",
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

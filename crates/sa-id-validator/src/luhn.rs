//! Luhn (mod 10) checksum.
//!
//! Digits are processed right to left. Every second digit, starting with the
//! one immediately left of the check digit, is doubled, and 9 is subtracted
//! from any doubled value above 9. The number is valid when the sum of all
//! digits, check digit included, is a multiple of 10.
//!
//! Inputs are decoded digits (`0..=9`), not ASCII bytes.

fn double(digit: u8) -> u32 {
    let doubled = u32::from(digit) * 2;
    if doubled > 9 {
        doubled - 9
    } else {
        doubled
    }
}

/// Sum of the digits with alternate doubling. `offset` selects which parity
/// (counted from the right) is doubled.
fn weighted_sum(digits: &[u8], offset: usize) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            debug_assert!(d <= 9, "luhn input must be decoded digits");
            if (i + offset) % 2 == 1 {
                double(d)
            } else {
                u32::from(d)
            }
        })
        .sum()
}

/// Returns true if `digits`, whose last element is the check digit, passes
/// the Luhn check. Empty input is never valid.
///
/// # Examples
///
/// ```
/// use sa_id_validator::luhn;
///
/// assert!(luhn::is_valid(&[2, 0, 0, 1, 0, 1, 4, 8, 0, 0, 0, 8, 6]));
/// assert!(!luhn::is_valid(&[2, 0, 0, 1, 0, 1, 4, 8, 0, 0, 0, 8, 7]));
/// ```
pub fn is_valid(digits: &[u8]) -> bool {
    !digits.is_empty() && weighted_sum(digits, 0) % 10 == 0
}

/// Computes the check digit to append to `payload`.
///
/// # Examples
///
/// ```
/// use sa_id_validator::luhn;
///
/// assert_eq!(luhn::check_digit(&[2, 0, 0, 1, 0, 1, 4, 8, 0, 0, 0, 8]), 6);
/// ```
pub fn check_digit(payload: &[u8]) -> u8 {
    // The rightmost payload digit sits next to the check digit, so it is doubled.
    let sum = weighted_sum(payload, 1);
    ((10 - sum % 10) % 10) as u8
}

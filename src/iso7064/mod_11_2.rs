//! The ISO 7064 Mod 11, 2 algorithm.
//!
//! Produces one check character over a decimal body; the check character
//! can be "X" (value 10). Used by e.g. ISBN-10 and the Chinese resident
//! identity card number.
//!
//! ```rust
//! use pruefziffer::iso7064::mod_11_2;
//!
//! assert_eq!(mod_11_2::calc_check_digit("0794").unwrap(), '0');
//! assert_eq!(mod_11_2::calc_check_digit("079").unwrap(), 'X');
//! assert!(mod_11_2::is_valid("079X"));
//! ```

use crate::core::{Alphabet, ValidationError};

/// Digits plus "X" for the check value 10.
const ALPHABET: Alphabet = Alphabet::new("0123456789X");

/// Calculate the checksum over `number`. Valid numbers have a checksum
/// of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    super::pure_checksum(number, ALPHABET)
}

/// Check that `number` ends in the correct check character.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    super::validate_checksum_is_one(number, checksum)
}

/// Whether `number` ends in the correct check character.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the character ("0"-"9" or "X") that must be appended to
/// `number` to make it valid.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    super::pure_check_char(number, ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(calc_check_digit("0794").unwrap(), '0');
        assert_eq!(calc_check_digit("079").unwrap(), 'X');
    }

    #[test]
    fn known_valid_numbers() {
        assert!(is_valid("07940"));
        assert!(is_valid("079X"));
        assert_eq!(checksum("079X").unwrap(), 1);
    }

    #[test]
    fn wrong_check_digit_rejected() {
        assert_eq!(validate("07941"), Err(ValidationError::InvalidChecksum));
    }
}

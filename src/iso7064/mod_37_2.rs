//! The ISO 7064 Mod 37, 2 algorithm.
//!
//! Produces one check character over an alphanumeric body; the check
//! character may also be "*" (value 36).
//!
//! ```rust
//! use pruefziffer::iso7064::mod_37_2;
//!
//! assert_eq!(mod_37_2::calc_check_digit("G123498654321").unwrap(), 'H');
//! assert!(mod_37_2::is_valid("G123498654321H"));
//! ```

use crate::core::{BASE37, ValidationError};

/// Calculate the checksum over `number`. Valid numbers have a checksum
/// of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    super::pure_checksum(number, BASE37)
}

/// Check that `number` ends in the correct check character.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    super::validate_checksum_is_one(number, checksum)
}

/// Whether `number` ends in the correct check character.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the character that must be appended to `number` to make it
/// valid.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    super::pure_check_char(number, BASE37)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(calc_check_digit("G123498654321").unwrap(), 'H');
        assert_eq!(calc_check_digit("G123489654321").unwrap(), 'Y');
    }

    #[test]
    fn known_valid_numbers() {
        assert!(is_valid("G123489654321Y"));
        assert_eq!(checksum("G123489654321Y").unwrap(), 1);
    }

    #[test]
    fn star_is_a_valid_character() {
        let c = calc_check_digit("A999914123456789*").unwrap();
        let mut full = String::from("A999914123456789*");
        full.push(c);
        assert!(is_valid(&full));
    }

    #[test]
    fn wrong_check_char_rejected() {
        assert_eq!(validate("G123489654321Z"), Err(ValidationError::InvalidChecksum));
    }
}

//! The ISO 7064 Mod 37, 36 algorithm.
//!
//! Produces one alphanumeric check character over an alphanumeric body.
//!
//! ```rust
//! use pruefziffer::iso7064::mod_37_36;
//!
//! assert_eq!(mod_37_36::calc_check_digit("A12425GABC1234002").unwrap(), 'M');
//! assert!(mod_37_36::is_valid("A12425GABC1234002M"));
//! ```

use crate::core::{BASE36, ValidationError};

/// Calculate the checksum over `number`. Valid numbers have a checksum
/// of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    super::hybrid_checksum(number, BASE36)
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
    super::hybrid_check_char(number, BASE36)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(calc_check_digit("A12425GABC1234002").unwrap(), 'M');
        assert_eq!(checksum("A12425GABC1234002M").unwrap(), 1);
    }

    #[test]
    fn lowercase_rejected() {
        assert!(matches!(checksum("a12425g"), Err(ValidationError::InvalidFormat(_))));
    }

    #[test]
    fn appending_check_char_validates() {
        for number in ["A12425GABC1234002", "B1", "XYZ123", "0"] {
            let c = calc_check_digit(number).unwrap();
            let mut full = number.to_string();
            full.push(c);
            assert!(is_valid(&full), "append {c} to {number}");
        }
    }
}

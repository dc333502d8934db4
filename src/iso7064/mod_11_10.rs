//! The ISO 7064 Mod 11, 10 algorithm.
//!
//! Produces one decimal check digit over a decimal body.
//!
//! ```rust
//! use pruefziffer::iso7064::mod_11_10;
//!
//! assert_eq!(mod_11_10::calc_check_digit("79462").unwrap(), '3');
//! assert!(mod_11_10::is_valid("794623"));
//! ```

use crate::core::{DECIMAL, ValidationError};

/// Calculate the checksum over `number`. Valid numbers have a checksum
/// of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    super::hybrid_checksum(number, DECIMAL)
}

/// Check that `number` ends in the correct check digit.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    super::validate_checksum_is_one(number, checksum)
}

/// Whether `number` ends in the correct check digit.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the digit that must be appended to `number` to make it valid.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    super::hybrid_check_char(number, DECIMAL)
}

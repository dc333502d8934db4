//! Aadhaar (Indian resident identity number) validation.
//!
//! Twelve digits: an eleven-digit randomly assigned number that never
//! starts with 0 or 1 and is never a palindrome, followed by a Verhoeff
//! check digit.
//!
//! ```rust
//! use pruefziffer::formats::aadhaar;
//!
//! assert!(aadhaar::is_valid("2341 2341 2346"));
//! assert_eq!(aadhaar::mask("234123412346").unwrap(), "XXXX XXXX 2346");
//! ```

use crate::algorithms::verhoeff;
use crate::core::{NumberFormat, ValidationError, clean, isdigits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> Result<String, ValidationError> {
    Ok(clean(number, " -"))
}

/// Fully validate an Aadhaar number and return its compacted form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if number.len() != 12 {
        return Err(ValidationError::length(format!(
            "expected 12 digits, got {}",
            number.len()
        )));
    }
    if !isdigits(&number) {
        return Err(ValidationError::format("expected digits only"));
    }
    if matches!(number.as_bytes()[0], b'0' | b'1') {
        return Err(ValidationError::component("number must not start with 0 or 1"));
    }
    if number.bytes().eq(number.bytes().rev()) {
        return Err(ValidationError::component("number must not be a palindrome"));
    }
    verhoeff::validate(&number).map_err(|_| ValidationError::InvalidChecksum)?;
    Ok(number)
}

/// Whether `number` is a valid Aadhaar number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat a valid number to the standard presentation in groups of four.
pub fn format(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if !number.is_ascii() {
        return Err(ValidationError::format("unexpected non-ASCII character"));
    }
    if number.len() != 12 {
        return Err(ValidationError::length("expected 12 digits"));
    }
    Ok([&number[..4], &number[4..8], &number[8..]].join(" "))
}

/// Mask the first eight digits as required by the MeitY publication
/// guidelines, keeping only the last four visible.
pub fn mask(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if !number.is_ascii() {
        return Err(ValidationError::format("unexpected non-ASCII character"));
    }
    if number.len() != 12 {
        return Err(ValidationError::length("expected 12 digits"));
    }
    Ok(format!("XXXX XXXX {}", &number[8..]))
}

/// The Aadhaar format as a [`NumberFormat`] implementation.
pub struct Aadhaar;

impl NumberFormat for Aadhaar {
    fn compact(&self, number: &str) -> Result<String, ValidationError> {
        compact(number)
    }

    fn validate(&self, number: &str) -> Result<String, ValidationError> {
        validate(number)
    }

    fn format(&self, number: &str) -> Result<String, ValidationError> {
        format(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_numbers() {
        assert_eq!(validate("234123412346").unwrap(), "234123412346");
        assert!(is_valid("2341 2341 2346"));
    }

    #[test]
    fn wrong_length() {
        assert!(matches!(validate("23412341234"), Err(ValidationError::InvalidLength(_))));
    }

    #[test]
    fn leading_zero_or_one_rejected() {
        assert!(matches!(
            validate("012345678901"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("123456789012"),
            Err(ValidationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn palindrome_rejected() {
        assert!(matches!(
            validate("222222222222"),
            Err(ValidationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn wrong_check_digit() {
        assert_eq!(validate("234123412347"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn format_and_mask_report_non_ascii_as_format_error() {
        assert!(matches!(
            format("23412341234\u{00e9}"),
            Err(ValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            mask("23412341234\u{00e9}"),
            Err(ValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn formatting_and_masking() {
        assert_eq!(format("234123412346").unwrap(), "2341 2341 2346");
        assert_eq!(mask("2341 2341 2346").unwrap(), "XXXX XXXX 2346");
    }
}

//! IMEI (International Mobile Equipment Identity) validation.
//!
//! A bare IMEI is 14 digits; retail devices usually report 15 digits where
//! the last is a Luhn check digit. The 16-digit IMEISV replaces the check
//! digit with a two-digit software version and carries no checksum.
//!
//! ```rust
//! use pruefziffer::formats::imei;
//!
//! assert!(imei::is_valid("35686800-004141-20"));
//! assert_eq!(imei::format("354178036859789").unwrap(), "35-417803-685978-9");
//! assert_eq!(imei::imei_type("35686800-004141-20"), Some(imei::ImeiType::ImeiSv));
//! ```

use crate::algorithms::luhn;
use crate::core::{NumberFormat, ValidationError, clean, isdigits};

/// The two flavors of equipment identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeiType {
    /// 14 or 15 digits (the latter with a Luhn check digit).
    Imei,
    /// 16 digits, ending in the software version, no check digit.
    ImeiSv,
}

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> Result<String, ValidationError> {
    Ok(clean(number, " -"))
}

/// Fully validate an IMEI or IMEISV and return its compacted form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if !matches!(number.len(), 14 | 15 | 16) {
        return Err(ValidationError::length(format!(
            "expected 14, 15 or 16 digits, got {}",
            number.len()
        )));
    }
    if !isdigits(&number) {
        return Err(ValidationError::format("expected digits only"));
    }
    // Only the 15-digit form carries a check digit.
    if number.len() == 15 {
        luhn::validate(&number).map_err(|_| ValidationError::InvalidChecksum)?;
    }
    Ok(number)
}

/// Whether `number` is a valid IMEI or IMEISV.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Classify `number` as IMEI or IMEISV, or `None` when invalid.
pub fn imei_type(number: &str) -> Option<ImeiType> {
    match validate(number) {
        Ok(number) if number.len() == 16 => Some(ImeiType::ImeiSv),
        Ok(_) => Some(ImeiType::Imei),
        Err(_) => None,
    }
}

/// Append the Luhn check digit to a 14-digit IMEI.
pub fn add_check_digit(number: &str) -> Result<String, ValidationError> {
    let mut number = compact(number)?;
    if number.len() != 14 {
        return Err(ValidationError::length("expected 14 digits"));
    }
    if !isdigits(&number) {
        return Err(ValidationError::format("expected digits only"));
    }
    number.push(luhn::calc_check_digit(&number)?);
    Ok(number)
}

/// Reformat a valid number to the standard 2-6-6[-rest] presentation.
pub fn format(number: &str) -> Result<String, ValidationError> {
    let number = compact(number)?;
    if !number.is_ascii() {
        return Err(ValidationError::format("unexpected non-ASCII character"));
    }
    if number.len() < 14 {
        return Err(ValidationError::length("expected at least 14 digits"));
    }
    let mut parts = vec![&number[..2], &number[2..8], &number[8..14]];
    if number.len() > 14 {
        parts.push(&number[14..]);
    }
    Ok(parts.join("-"))
}

/// The IMEI format as a [`NumberFormat`] implementation.
pub struct Imei;

impl NumberFormat for Imei {
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

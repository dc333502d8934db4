//! The ISO 7064 Mod 97, 10 algorithm.
//!
//! Interprets the number as one large decimal numeral (letters expand to
//! two digits, A=10 ... Z=35) and requires a remainder of 1 modulo 97.
//! The scheme has two check digits, and the published standard constrains
//! the pair to the range "02".."98" — "00", "01" and "99" never occur in a
//! correctly issued number. This is the checksum behind the IBAN.
//!
//! ```rust
//! use pruefziffer::iso7064::mod_97_10;
//!
//! assert_eq!(mod_97_10::calc_check_digits("5367").unwrap(), "02");
//! assert!(mod_97_10::is_valid("536702"));
//! ```

use crate::core::{BASE36, ValidationError};

/// Calculate the checksum over `number`. Valid numbers have a checksum
/// of 1.
///
/// The remainder is folded digit by digit, so arbitrarily long numbers
/// never need big-integer arithmetic.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    let mut check = 0;
    for c in number.chars() {
        let v = BASE36.value_of(c)?;
        // Letters contribute their two-digit decimal expansion.
        check = if v < 10 {
            (check * 10 + v) % 97
        } else {
            (check * 100 + v) % 97
        };
    }
    Ok(check)
}

/// Calculate the two check digits that must be appended to `number` to
/// make it valid.
///
/// The result is always within "02".."98": the remainder over
/// `number + "00"` lies in 0..=96, so 98 minus it never reaches the
/// excluded "00", "01" and "99" values.
pub fn calc_check_digits(number: &str) -> Result<String, ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::format("empty number"));
    }
    let check = (checksum(number)? * 100) % 97;
    Ok(format!("{:02}", 98 - check))
}

/// Check that `number` ends in the correct check digit pair.
///
/// The supplied pair is compared against the recomputed one, so a number
/// whose remainder happens to be 1 but which carries the out-of-range
/// representative (e.g. "01" where "98" is the issued pair) is still
/// rejected.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    if !number.is_ascii() || number.len() < 3 {
        return Err(ValidationError::format("expected a body plus two check digits"));
    }
    let (body, check) = number.split_at(number.len() - 2);
    if calc_check_digits(body)? != check {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Whether `number` ends in the correct check digit pair.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(calc_check_digits("99991234567890121414").unwrap(), "90");
        assert_eq!(calc_check_digits("4354111611551114").unwrap(), "31");
        assert_eq!(calc_check_digits("80000821490000000009SE").unwrap(), "98");
    }

    #[test]
    fn boundary_pairs_near_excluded_range() {
        assert_eq!(calc_check_digits("5367").unwrap(), "02");
        assert_eq!(calc_check_digits("5303").unwrap(), "97");
        assert_eq!(calc_check_digits("5335").unwrap(), "98");
    }

    #[test]
    fn known_valid_numbers() {
        assert!(is_valid("9999123456789012141490"));
        assert!(is_valid("08686001256515001121751"));
        assert!(is_valid("80000821490000000009SE98"));
    }

    #[test]
    fn out_of_range_representative_rejected() {
        // Same residue as ...98 but not the issued pair.
        assert_eq!(checksum("80000821490000000009SE01").unwrap(), 1);
        assert_eq!(
            validate("80000821490000000009SE01"),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn short_or_non_ascii_is_format_error() {
        assert!(matches!(validate("12"), Err(ValidationError::InvalidFormat(_))));
        assert!(matches!(validate("12\u{00e9}4"), Err(ValidationError::InvalidFormat(_))));
    }
}

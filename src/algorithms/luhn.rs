//! The Luhn and Luhn mod N algorithms.
//!
//! The Luhn algorithm detects most accidental errors in identification
//! numbers: all single-digit substitutions and most adjacent
//! transpositions. The mod N generalization works over any
//! [`Alphabet`] and keeps the doubling-and-reduce rule generic over the
//! alphabet size.
//!
//! ```rust
//! use pruefziffer::algorithms::luhn;
//!
//! assert_eq!(luhn::checksum("7894").unwrap(), 6);
//! assert_eq!(luhn::calc_check_digit("7894").unwrap(), '9');
//! assert!(luhn::is_valid("78949"));
//! ```

use crate::core::{Alphabet, DECIMAL, ValidationError};

/// Calculate the Luhn checksum over `number`. Valid numbers have a
/// checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    checksum_with(number, DECIMAL)
}

/// Luhn mod N checksum over the given alphabet.
///
/// Every second value from the right is doubled; a doubled value is reduced
/// by summing its base-N digits before entering the sum.
pub fn checksum_with(number: &str, alphabet: Alphabet) -> Result<u32, ValidationError> {
    let n = alphabet.len();
    let mut sum = 0;
    for (i, c) in number.chars().rev().enumerate() {
        let v = alphabet.value_of(c)?;
        sum += if i % 2 == 1 {
            let doubled = v * 2;
            doubled / n + doubled % n
        } else {
            v
        };
    }
    Ok(sum % n)
}

/// Check that `number` passes the Luhn checksum.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    validate_with(number, DECIMAL)
}

/// Check that `number` passes the Luhn mod N checksum over the given
/// alphabet.
pub fn validate_with(number: &str, alphabet: Alphabet) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::format("empty number"));
    }
    if checksum_with(number, alphabet)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Whether `number` passes the Luhn checksum.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Whether `number` passes the Luhn mod N checksum over the given alphabet.
pub fn is_valid_with(number: &str, alphabet: Alphabet) -> bool {
    validate_with(number, alphabet).is_ok()
}

/// Calculate the digit that must be appended to `number` to make it pass
/// the Luhn checksum.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    calc_check_digit_with(number, DECIMAL)
}

/// Calculate the check digit for the Luhn mod N algorithm over the given
/// alphabet.
pub fn calc_check_digit_with(number: &str, alphabet: Alphabet) -> Result<char, ValidationError> {
    let n = alphabet.len();
    // Checksum with the zero character appended, then pick the digit that
    // cancels it out.
    let mut padded = String::with_capacity(number.len() + 1);
    padded.push_str(number);
    padded.push(alphabet.char_at(0));
    let ck = checksum_with(&padded, alphabet)?;
    Ok(alphabet.char_at((n - ck) % n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BASE36;

    #[test]
    fn known_checksums() {
        assert_eq!(checksum("7894").unwrap(), 6);
        assert_eq!(checksum("78949").unwrap(), 0);
    }

    #[test]
    fn classic_test_card_number() {
        assert!(is_valid("4111111111111111"));
        assert!(!is_valid("4111111111111112"));
    }

    #[test]
    fn empty_is_invalid() {
        assert!(!is_valid(""));
        assert_eq!(validate(""), Err(ValidationError::format("empty number")));
    }

    #[test]
    fn non_digit_is_format_error() {
        assert!(matches!(validate("12a4"), Err(ValidationError::InvalidFormat(_))));
    }

    #[test]
    fn mod_n_alphabet() {
        // Same behavior as plain Luhn when restricted to digits.
        assert_eq!(checksum_with("7894", DECIMAL).unwrap(), 6);
        let c = calc_check_digit_with("ABCDEF", BASE36).unwrap();
        let mut number = String::from("ABCDEF");
        number.push(c);
        assert!(is_valid_with(&number, BASE36));
    }

    #[test]
    fn check_digit_appending_validates() {
        for number in ["1", "12", "7894", "35686800004141", "00000000"] {
            let c = calc_check_digit(number).unwrap();
            let mut full = number.to_string();
            full.push(c);
            assert!(is_valid(&full), "append {c} to {number}");
        }
    }
}

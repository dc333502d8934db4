//! The ISO 7064 check character systems.
//!
//! Five schemes from the standard, one module each, named after the
//! modulus and radix pair: [`mod_11_10`] and [`mod_37_36`] (single check
//! character from the body's own alphabet), [`mod_11_2`] and [`mod_37_2`]
//! (single check character from an alphabet extended with "X" or "*"), and
//! [`mod_97_10`] (two decimal check digits, used by IBAN-style numbers).
//!
//! All schemes consider a number valid when the checksum over the full
//! number (body plus check character) is 1.

use crate::core::{Alphabet, ValidationError};

pub mod mod_11_10;
pub mod mod_11_2;
pub mod mod_37_2;
pub mod mod_37_36;
pub mod mod_97_10;

/// The Mod x+1, x recurrence shared by Mod 11,10 and Mod 37,36.
///
/// A running value starting at half the modulus is doubled modulo
/// modulus + 1 (substituting the modulus for zero first) and the next
/// digit value is added modulo the modulus.
fn hybrid_checksum(number: &str, alphabet: Alphabet) -> Result<u32, ValidationError> {
    let modulus = alphabet.len();
    let mut check = modulus / 2;
    for c in number.chars() {
        let v = alphabet.value_of(c)?;
        let nonzero = if check == 0 { modulus } else { check };
        check = ((nonzero * 2) % (modulus + 1) + v) % modulus;
    }
    Ok(check)
}

/// Check character for the Mod x+1, x recurrence: the value that brings the
/// checksum of body + check character to 1.
fn hybrid_check_char(number: &str, alphabet: Alphabet) -> Result<char, ValidationError> {
    let modulus = alphabet.len();
    let check = hybrid_checksum(number, alphabet)?;
    let nonzero = if check == 0 { modulus } else { check };
    let doubled = (nonzero * 2) % (modulus + 1);
    Ok(alphabet.char_at((1 + modulus - doubled) % modulus))
}

/// The pure Mod x, 2 recurrence shared by Mod 11,2 and Mod 37,2:
/// `check := (2 * check + value) mod modulus`.
fn pure_checksum(number: &str, alphabet: Alphabet) -> Result<u32, ValidationError> {
    let modulus = alphabet.len();
    let mut check = 0;
    for c in number.chars() {
        check = (2 * check + alphabet.value_of(c)?) % modulus;
    }
    Ok(check)
}

/// Check character for the Mod x, 2 recurrence.
fn pure_check_char(number: &str, alphabet: Alphabet) -> Result<char, ValidationError> {
    let modulus = alphabet.len();
    let doubled = (2 * pure_checksum(number, alphabet)?) % modulus;
    Ok(alphabet.char_at((1 + modulus - doubled) % modulus))
}

/// Shared validation shape: empty input is a format error, a checksum other
/// than 1 is a checksum error.
fn validate_checksum_is_one(
    number: &str,
    checksum: impl FnOnce(&str) -> Result<u32, ValidationError>,
) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::format("empty number"));
    }
    if checksum(number)? != 1 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

//! The Verhoeff algorithm.
//!
//! Uses the Cayley table of the dihedral group of order 10 together with a
//! positional permutation table. Detects all single-digit substitutions and
//! all adjacent transpositions, plus most twin, jump and phonetic errors —
//! strictly stronger than Luhn.
//!
//! ```rust
//! use pruefziffer::algorithms::verhoeff;
//!
//! assert_eq!(verhoeff::checksum("654").unwrap(), 1);
//! assert_eq!(verhoeff::calc_check_digit("654").unwrap(), '8');
//! assert!(verhoeff::is_valid("6548"));
//! ```

use crate::core::{DECIMAL, ValidationError};

/// Cayley table of the dihedral group D5.
static MULTIPLICATION_TABLE: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation applied to each digit, cycling with period 8 by position
/// from the right.
static PERMUTATION_TABLE: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverse of each element in the multiplication table:
/// `MULTIPLICATION_TABLE[c][INVERSE_TABLE[c]] == 0`.
static INVERSE_TABLE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Calculate the Verhoeff checksum over `number`. Valid numbers have a
/// checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    let mut check = 0usize;
    for (i, c) in number.chars().rev().enumerate() {
        let d = DECIMAL.value_of(c)? as usize;
        check = MULTIPLICATION_TABLE[check][PERMUTATION_TABLE[i % 8][d] as usize] as usize;
    }
    Ok(check as u32)
}

/// Check that `number` passes the Verhoeff algorithm.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::format("empty number"));
    }
    if checksum(number)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Whether `number` passes the Verhoeff algorithm.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the digit that must be appended to `number` to make it pass
/// the Verhoeff algorithm.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    // Checksum with a placeholder digit appended, then cancel it with the
    // group inverse.
    let mut padded = String::with_capacity(number.len() + 1);
    padded.push_str(number);
    padded.push('0');
    let check = checksum(&padded)? as usize;
    Ok((b'0' + INVERSE_TABLE[check]) as char)
}

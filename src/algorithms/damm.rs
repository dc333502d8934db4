//! The Damm algorithm.
//!
//! A check digit algorithm built on a totally anti-symmetric quasigroup of
//! order 10. It detects all single-digit substitutions and all adjacent
//! transpositions without any multiplication, using a single table lookup
//! per digit.
//!
//! ```rust
//! use pruefziffer::algorithms::damm;
//!
//! assert_eq!(damm::calc_check_digit("572").unwrap(), '4');
//! assert!(damm::is_valid("5724"));
//! ```

use crate::core::{DECIMAL, ValidationError};

/// The quasigroup operation table. No value repeats within a row or a
/// column, and `TABLE[i][i] == 0` for all i.
static OPERATION_TABLE: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// Calculate the Damm checksum over `number`. Valid numbers have a
/// checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    let mut interim = 0usize;
    for c in number.chars() {
        let d = DECIMAL.value_of(c)? as usize;
        interim = OPERATION_TABLE[interim][d] as usize;
    }
    Ok(interim as u32)
}

/// Check that `number` passes the Damm algorithm.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::format("empty number"));
    }
    if checksum(number)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Whether `number` passes the Damm algorithm.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Calculate the digit that must be appended to `number` to make it pass
/// the Damm algorithm.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    let row = checksum(number)? as usize;
    // The digit that drives the interim value to 0. Each row is a
    // permutation, so the search always succeeds.
    let d = OPERATION_TABLE[row]
        .iter()
        .position(|&cell| cell == 0)
        .unwrap_or_default();
    Ok((b'0' + d as u8) as char)
}

//! Character alphabets for checksum algorithms.
//!
//! Every algorithm in this crate operates on an ordered set of characters
//! whose position is the character's numeric value ("0"-"9" → 0-9,
//! "A"-"Z" → 10-35). The alphabets are fixed per algorithm family and never
//! change at run time.

use super::error::ValidationError;

/// Decimal digits only.
pub const DECIMAL: Alphabet = Alphabet("0123456789");

/// Decimal digits followed by the uppercase letters (values 10-35).
pub const BASE36: Alphabet = Alphabet("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// [`BASE36`] plus the "*" placeholder (value 36), used by ISO 7064
/// Mod 37 variants.
pub const BASE37: Alphabet = Alphabet("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*");

/// An ordered character set mapping characters to their numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet(&'static str);

impl Alphabet {
    /// An alphabet over the given ordered character set. Characters must be
    /// ASCII and unique; the character at position i has value i.
    pub const fn new(chars: &'static str) -> Self {
        Self(chars)
    }

    /// The numeric value of `c`, or an invalid-format failure when `c` is
    /// not part of this alphabet.
    pub fn value_of(self, c: char) -> Result<u32, ValidationError> {
        self.0
            .chars()
            .position(|a| a == c)
            .map(|i| i as u32)
            .ok_or_else(|| ValidationError::format(format!("unexpected character '{c}'")))
    }

    /// The character for value `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not below [`len`](Self::len); callers pass values
    /// reduced modulo the alphabet length.
    pub fn char_at(self, v: u32) -> char {
        self.0.as_bytes()[v as usize] as char
    }

    /// Number of characters in the alphabet (the modulus of the algorithms
    /// built on it).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u32 {
        self.0.len() as u32
    }

    /// Whether every character of `number` belongs to this alphabet.
    pub fn contains_all(self, number: &str) -> bool {
        !number.is_empty() && number.chars().all(|c| self.0.contains(c))
    }
}

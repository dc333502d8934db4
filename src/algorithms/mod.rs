//! Classic check digit algorithms.
//!
//! Luhn (and Luhn mod N), Damm and Verhoeff. All three produce a single
//! check digit; they differ in which transcription error classes they
//! detect. The engines assume pre-normalized input — callers strip
//! separators and canonicalize case before handing a number over.

pub mod damm;
pub mod luhn;
pub mod verhoeff;

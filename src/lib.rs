//! # pruefziffer
//!
//! Check digit algorithms and standard number validation: the Luhn, Damm and
//! Verhoeff algorithms, the ISO 7064 family, and representative number
//! formats (IBAN, IMEI, Aadhaar) layered on top of them.
//!
//! Every number format exposes the same four operations — `compact`,
//! `validate`, `is_valid`, `format` — and reports failures through one
//! [`ValidationError`](core::ValidationError) taxonomy: invalid length,
//! invalid format, invalid component, invalid checksum, checked in that
//! order.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::algorithms::{luhn, verhoeff};
//! use pruefziffer::iso7064::mod_97_10;
//!
//! assert_eq!(luhn::calc_check_digit("7894").unwrap(), '9');
//! assert!(luhn::is_valid("78949"));
//!
//! assert_eq!(verhoeff::checksum("654").unwrap(), 1);
//! assert_eq!(verhoeff::calc_check_digit("654").unwrap(), '8');
//!
//! assert_eq!(mod_97_10::calc_check_digits("5367").unwrap(), "02");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Normalizer, error taxonomy, validation protocol, Luhn/Damm/Verhoeff, ISO 7064 |
//! | `formats` | IBAN, IMEI, Aadhaar number formats |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod algorithms;

#[cfg(feature = "core")]
pub mod iso7064;

#[cfg(feature = "formats")]
pub mod formats;

// Re-export the shared protocol types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::{NumberFormat, ValidationError};

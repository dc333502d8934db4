//! Number formats layered on the checksum engines.
//!
//! Each format is a self-contained module exposing the four-operation
//! protocol as free functions (`compact`, `validate`, `is_valid`, `format`)
//! plus a unit struct implementing [`NumberFormat`](crate::core::NumberFormat)
//! for callers that want the formats behind one trait.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::formats::{aadhaar, iban, imei};
//!
//! assert!(iban::is_valid("GR16 0110 1050 0000 1054 7023 795"));
//! assert_eq!(iban::compact("GR16 0110 1050 0000 1054 7023 795").unwrap(),
//!            "GR1601101050000010547023795");
//!
//! assert!(imei::is_valid("35686800-004141-20"));
//! assert_eq!(aadhaar::format("234123412346").unwrap(), "2341 2341 2346");
//! ```

pub mod aadhaar;
pub mod iban;
pub mod imei;

pub use aadhaar::Aadhaar;
pub use iban::Iban;
pub use imei::Imei;

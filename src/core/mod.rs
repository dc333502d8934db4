//! Shared validation infrastructure.
//!
//! This module provides the pieces every number format and checksum engine
//! builds on: input normalization, character alphabets, the error taxonomy
//! and the four-operation validation protocol.

mod alphabet;
mod clean;
mod error;
mod protocol;

pub use alphabet::{Alphabet, BASE36, BASE37, DECIMAL};
pub use clean::{clean, isdigits};
pub use error::ValidationError;
pub use protocol::NumberFormat;

use super::error::ValidationError;

/// The uniform contract every number format implements.
///
/// Formats differ wildly in structure (bank account numbers, device
/// identifiers, national IDs) but share this capability set, so callers can
/// validate any supported number behind one trait object.
///
/// Failure precedence is part of the contract: `validate` reports length
/// before format, format before component checks, and components before the
/// checksum.
pub trait NumberFormat {
    /// Strip valid separators and surrounding whitespace and canonicalize
    /// case. Never verifies checksums; may reject absurdly malformed input.
    fn compact(&self, number: &str) -> Result<String, ValidationError>;

    /// Fully validate `number` and return its compacted canonical form.
    fn validate(&self, number: &str) -> Result<String, ValidationError>;

    /// Reformat a valid number into its conventional human-readable shape.
    /// The result is unspecified for input that does not pass `validate`.
    fn format(&self, number: &str) -> Result<String, ValidationError>;

    /// Whether `number` passes `validate`. Never panics and never
    /// propagates an error.
    fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }
}

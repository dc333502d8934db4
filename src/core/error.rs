use thiserror::Error;

/// Why a number failed validation.
///
/// The variants form a fixed precedence: length is checked before structural
/// format, format before component-level checks, and components before the
/// checksum. A malformed input therefore always receives the earliest
/// applicable kind, which keeps error reporting deterministic across
/// releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The number's character set or structure does not match the expected
    /// pattern.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The normalized number has the wrong length. A special case of
    /// [`InvalidFormat`](Self::InvalidFormat), reported separately because it
    /// is checked first.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// A structurally well-formed part of the number (country code, registry
    /// prefix, ...) is not a permitted value.
    #[error("invalid component: {0}")]
    InvalidComponent(String),

    /// Structure and components are fine but the check digit(s) do not match.
    #[error("invalid checksum")]
    InvalidChecksum,
}

impl ValidationError {
    /// Shorthand for an invalid-format failure.
    pub fn format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Shorthand for an invalid-length failure.
    pub fn length(message: impl Into<String>) -> Self {
        Self::InvalidLength(message.into())
    }

    /// Shorthand for an invalid-component failure.
    pub fn component(message: impl Into<String>) -> Self {
        Self::InvalidComponent(message.into())
    }

    /// Whether this is a format-level failure (including the length
    /// sub-kind).
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::InvalidLength(_))
    }
}

//! Error types for the Marquee plugin.
//!
//! [`MarqueeError`] is the single error type shared by every layer, and
//! [`Result`] is the matching alias. None of these errors is fatal to the
//! plugin: callers either surface them as a notice or log them and carry on
//! with the previous state.

use thiserror::Error;

/// The main error type for Marquee operations.
///
/// # Examples
///
/// ```
/// use marquee::MarqueeError;
///
/// let err = MarqueeError::Fetch("catalog service responded with HTTP 401".to_string());
/// assert_eq!(err.to_string(), "catalog service responded with HTTP 401");
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// The catalog request failed before producing items.
    ///
    /// Covers transport failures and non-2xx responses. The string is shown
    /// to the user as-is, so it should read as a sentence fragment.
    #[error("{0}")]
    Fetch(String),

    /// The catalog payload could not be decoded.
    #[error("Malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert_from_serde() {
        let err: MarqueeError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, MarqueeError::Decode(_)));
        assert!(err.to_string().starts_with("Malformed catalog payload"));
    }
}

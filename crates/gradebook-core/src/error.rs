//! Catalog error types.
//!
//! Record and list operations never swallow failures: every I/O or
//! validation problem surfaces as a [`CatalogError`] to the caller of the
//! session.

use thiserror::Error;

/// Errors that can occur while populating, displaying, or tearing down records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the named field was read.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof { field: String },

    /// The score token is not a valid integer.
    #[error("invalid number for {field} {input:?}")]
    InvalidScore { field: String, input: String },

    /// The list has already been torn down.
    #[error("record list has already been released")]
    Released,

    /// The listing could not be serialized to JSON.
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_score_message_quotes_input() {
        let err = CatalogError::InvalidScore {
            field: "Grade:".into(),
            input: "five".into(),
        };
        assert_eq!(err.to_string(), "invalid number for Grade: \"five\"");
    }

    #[test]
    fn eof_message_names_caption() {
        let err = CatalogError::UnexpectedEof {
            field: "Points scored:".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading Points scored:"
        );
    }

    #[test]
    fn json_errors_convert() {
        let source = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: CatalogError = source.into();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("failed to serialize records: "));
    }
}

//! Error types for the query builder.
//!
//! Building a query never fails: every constructor and setter is total and
//! silently skips values it cannot place. Errors only surface at the edges,
//! when a document is parsed from text, rendered to text, or passed through
//! the optional [`lint`](crate::lint) gate.
//!
//! # Examples
//!
//! ```
//! use es_query_builder::error::{QueryBuilderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QueryBuilderError::invalid_argument("unknown sort order"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for query builder operations.
#[derive(Error, Debug)]
pub enum QueryBuilderError {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text that was expected to hold a JSON object held something else
    #[error("Not an object: {0}")]
    NotAnObject(String),

    /// Invalid argument (unknown enum variant, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The lint gate rejected a document
    #[error("Lint error: {0}")]
    Lint(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with QueryBuilderError.
pub type Result<T> = std::result::Result<T, QueryBuilderError>;

impl QueryBuilderError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QueryBuilderError::InvalidArgument(msg.into())
    }

    /// Create a new not-an-object error.
    pub fn not_an_object<S: Into<String>>(msg: S) -> Self {
        QueryBuilderError::NotAnObject(msg.into())
    }

    /// Create a new lint error.
    pub fn lint<S: Into<String>>(msg: S) -> Self {
        QueryBuilderError::Lint(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QueryBuilderError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = QueryBuilderError::invalid_argument("unknown operator 'xor'");
        assert_eq!(error.to_string(), "Invalid argument: unknown operator 'xor'");

        let error = QueryBuilderError::not_an_object("found array");
        assert_eq!(error.to_string(), "Not an object: found array");

        let error = QueryBuilderError::lint("1 issue");
        assert_eq!(error.to_string(), "Lint error: 1 issue");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = QueryBuilderError::from(json_error);

        match error {
            QueryBuilderError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }
}

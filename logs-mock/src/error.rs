//! Error types for Logs Mock.

/// Errors returned by store queries and request decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cursor is not base64, or its payload is not a non-negative offset.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// No record has the requested id.
    #[error("Log not found: {0}")]
    NotFound(String),

    /// A request parameter could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Logs Mock operations.
pub type Result<T> = std::result::Result<T, Error>;

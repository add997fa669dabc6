//! Store error types.

use thiserror::Error;

/// Store error type.
///
/// Operations on an area or actor that does not exist are not errors; they
/// return `Ok(false)` and change nothing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration with an id that is already taken.
    #[error("area id `{0}` is already in use")]
    DuplicateId(String),

    /// Registration whose box intersects an existing area.
    #[error("area `{id}` intersects the boundary of area `{existing}`")]
    Overlap { id: String, existing: String },

    /// Empty or malformed id / actor name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A persisted blob could not be decoded.
    #[error("persisted `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    /// Encoding a blob for writing failed.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// LMDB error.
    #[error("database error: {0}")]
    Database(#[from] heed::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

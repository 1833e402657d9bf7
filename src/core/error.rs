//! Error types for the tenancy ledger.

use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ledger operations.
///
/// A detected tamper is not an error: `Chain::verify` reports it as a
/// finding. Not-found query results are `Option`s or empty collections.
#[derive(Error, Debug)]
pub enum Error {
    // Chain errors
    #[error("Block not found at index {0}")]
    BlockNotFound(usize),

    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    #[error("Chain integrity violated at index {0}")]
    ChainIntegrityViolated(usize),

    // Editor errors
    #[error("Unknown record field: {0}")]
    UnknownField(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::BlockNotFound(7).to_string(),
            "Block not found at index 7"
        );
        assert_eq!(
            Error::UnknownField("Salary".into()).to_string(),
            "Unknown record field: Salary"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::SerializationError(_)));
    }
}

//! Emission errors.

use thiserror::Error;

/// Errors that can occur while emitting a record.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The record could not be serialized to JSON.
    #[error("Failed to marshal log: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output stream rejected the line.
    #[error("Failed to write log: {0}")]
    Write(#[from] std::io::Error),
}

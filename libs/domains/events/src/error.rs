//! Event domain error types

use thiserror::Error;

/// Result type for event store and migration operations
pub type EventResult<T> = std::result::Result<T, EventError>;

/// Errors from the event stores
///
/// There is no HTTP surface here; errors stay plain and bubble up to
/// the migrator binary, which treats every one of them as fatal.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("event store error: {0}")]
    Store(String),

    #[error("event payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<scylla::errors::ExecutionError> for EventError {
    fn from(err: scylla::errors::ExecutionError) -> Self {
        Self::Store(err.to_string())
    }
}

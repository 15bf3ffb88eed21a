//! # Store Errors
//!
//! Errors raised by the collection runtime itself, as opposed to the
//! document-specific errors carried inside [`StoreError::EntityError`].

/// Errors that can occur while talking to a collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection closed")]
    ActorClosed,
    #[error("Collection dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

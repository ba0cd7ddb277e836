use thiserror::Error;

use crate::{EntityId, EntityKind};

/// Errors that can occur when interacting with the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same kind and id already exists.
    ///
    /// Identities are caller-assigned, so this is a client conflict,
    /// not an internal failure.
    #[error("duplicate key: {kind} with id {id} already exists")]
    DuplicateKey { kind: EntityKind, id: EntityId },

    /// No record with this kind and id exists.
    #[error("not found: {kind} with id {id}")]
    NotFound { kind: EntityKind, id: EntityId },

    /// A serialization/deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

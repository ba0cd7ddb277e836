//! Domain error types.

use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A raw value could not be converted to the field's column type.
    #[error("invalid value for field '{field}': {reason}")]
    InvalidFieldValue { field: String, reason: String },

    /// The named field is not a declared column of the entity kind.
    ///
    /// Unknown fields in a partial update are rejected rather than
    /// silently ignored.
    #[error("unknown field '{field}' for {kind}")]
    UnknownField {
        kind: common::EntityKind,
        field: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidFieldValue`].
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidFieldValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

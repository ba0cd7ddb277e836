use serde::{Deserialize, Serialize};

use crate::{EntityId, EntityKind};

/// Envelope for one persisted record.
///
/// The payload is the entity's JSON document with typed columns
/// already normalized (dates in ISO form). The store never looks
/// inside the payload; the domain layer owns its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Which table the record belongs to.
    pub kind: EntityKind,
    /// Caller-assigned identity, unique within the kind.
    pub id: EntityId,
    /// The entity's column values as a JSON document.
    pub payload: serde_json::Value,
}

impl StoredRecord {
    /// Creates a record envelope for the given kind and id.
    pub fn new(kind: EntityKind, id: EntityId, payload: serde_json::Value) -> Self {
        Self { kind, id, payload }
    }
}

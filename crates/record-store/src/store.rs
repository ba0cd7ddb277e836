use async_trait::async_trait;

use crate::{EntityId, EntityKind, Result, StoredRecord};

/// Core trait for record store implementations.
///
/// All implementations must be thread-safe (Send + Sync) and must
/// serialize writes to the same identity so a read-modify-write
/// cycle in the layer above never loses an update. Every successful
/// mutation is durable by the time the call returns.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a new record.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if a record of the same
    /// kind and id already exists; identities are caller-assigned and
    /// never reused by the store.
    async fn insert(&self, record: StoredRecord) -> Result<()>;

    /// Retrieves the record with the given kind and id.
    ///
    /// Fails with [`StoreError::NotFound`] if absent.
    async fn get(&self, kind: EntityKind, id: EntityId) -> Result<StoredRecord>;

    /// Retrieves all records of a kind, in insertion order.
    async fn list(&self, kind: EntityKind) -> Result<Vec<StoredRecord>>;

    /// Replaces the payload of an existing record.
    ///
    /// The record's identity never changes; fails with
    /// [`StoreError::NotFound`] if no record with the envelope's kind
    /// and id exists.
    async fn update(&self, record: StoredRecord) -> Result<()>;

    /// Deletes the record with the given kind and id.
    ///
    /// Fails with [`StoreError::NotFound`] if absent. Dependent
    /// records of other kinds are left untouched; there is no
    /// cascading delete.
    async fn delete(&self, kind: EntityKind, id: EntityId) -> Result<()>;
}

/// Extension trait providing convenience methods for record stores.
#[async_trait]
pub trait RecordStoreExt: RecordStore {
    /// Checks whether a record with this kind and id exists.
    async fn exists(&self, kind: EntityKind, id: EntityId) -> Result<bool> {
        match self.get(kind, id).await {
            Ok(_) => Ok(true),
            Err(crate::StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementation for all RecordStore implementations
impl<T: RecordStore + ?Sized> RecordStoreExt for T {}

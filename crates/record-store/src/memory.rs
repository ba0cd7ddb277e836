use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    EntityId, EntityKind, Result, StoreError, StoredRecord,
    store::RecordStore,
};

/// In-memory record store.
///
/// Keeps one insertion-ordered table per entity kind behind a single
/// `RwLock`, which serializes all writers. The [`RecordStore`] trait
/// leaves room for a SQL-backed implementation with the same
/// contract.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<EntityKind, Vec<StoredRecord>>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records of the given kind.
    pub async fn count(&self, kind: EntityKind) -> usize {
        self.tables
            .read()
            .await
            .get(&kind)
            .map_or(0, Vec::len)
    }

    /// Clears all tables.
    pub async fn clear(&self) {
        self.tables.write().await.clear();
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, record: StoredRecord) -> Result<()> {
        let mut tables = self.tables.write().await;
        let table = tables.entry(record.kind).or_default();

        if table.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateKey {
                kind: record.kind,
                id: record.id,
            });
        }

        table.push(record);
        Ok(())
    }

    async fn get(&self, kind: EntityKind, id: EntityId) -> Result<StoredRecord> {
        let tables = self.tables.read().await;
        tables
            .get(&kind)
            .and_then(|table| table.iter().find(|r| r.id == id))
            .cloned()
            .ok_or(StoreError::NotFound { kind, id })
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<StoredRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.get(&kind).cloned().unwrap_or_default())
    }

    async fn update(&self, record: StoredRecord) -> Result<()> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .get_mut(&record.kind)
            .and_then(|table| table.iter_mut().find(|r| r.id == record.id))
            .ok_or(StoreError::NotFound {
                kind: record.kind,
                id: record.id,
            })?;

        slot.payload = record.payload;
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: EntityId) -> Result<()> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(&kind)
            .ok_or(StoreError::NotFound { kind, id })?;

        let before = table.len();
        table.retain(|r| r.id != id);
        if table.len() == before {
            return Err(StoreError::NotFound { kind, id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: EntityKind, id: i64, name: &str) -> StoredRecord {
        StoredRecord::new(
            kind,
            EntityId::new(id),
            serde_json::json!({ "name": name }),
        )
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();

        let found = store.get(EntityKind::User, EntityId::new(1)).await.unwrap();
        assert_eq!(found.payload["name"], "Ann");
    }

    #[tokio::test]
    async fn insert_duplicate_id_rejected() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();

        let result = store.insert(record(EntityKind::User, 1, "Bob")).await;
        assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));

        // The original record is untouched.
        let found = store.get(EntityKind::User, EntityId::new(1)).await.unwrap();
        assert_eq!(found.payload["name"], "Ann");
    }

    #[tokio::test]
    async fn same_id_allowed_across_kinds() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();
        store
            .insert(record(EntityKind::Order, 1, "Cleaning"))
            .await
            .unwrap();

        assert_eq!(store.count(EntityKind::User).await, 1);
        assert_eq!(store.count(EntityKind::Order).await, 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        for (id, name) in [(3, "c"), (1, "a"), (2, "b")] {
            store
                .insert(record(EntityKind::Offer, id, name))
                .await
                .unwrap();
        }

        let listed = store.list(EntityKind::Offer).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn list_of_empty_kind_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.list(EntityKind::Order).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_payload_in_place() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();
        store
            .insert(record(EntityKind::User, 2, "Bob"))
            .await
            .unwrap();

        store
            .update(record(EntityKind::User, 1, "Anna"))
            .await
            .unwrap();

        let listed = store.list(EntityKind::User).await.unwrap();
        // Updating never reorders the table.
        assert_eq!(listed[0].payload["name"], "Anna");
        assert_eq!(listed[1].payload["name"], "Bob");
    }

    #[tokio::test]
    async fn update_missing_record_not_found() {
        let store = InMemoryStore::new();
        let result = store.update(record(EntityKind::User, 9, "Ghost")).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_then_get_not_found() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::Order, 5, "Repair"))
            .await
            .unwrap();

        store
            .delete(EntityKind::Order, EntityId::new(5))
            .await
            .unwrap();

        let result = store.get(EntityKind::Order, EntityId::new(5)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn exists_reflects_inserts_and_deletes() {
        use crate::store::RecordStoreExt;

        let store = InMemoryStore::new();
        let id = EntityId::new(1);
        assert!(!store.exists(EntityKind::User, id).await.unwrap());

        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();
        assert!(store.exists(EntityKind::User, id).await.unwrap());

        store.delete(EntityKind::User, id).await.unwrap();
        assert!(!store.exists(EntityKind::User, id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_record_not_found() {
        let store = InMemoryStore::new();
        let result = store.delete(EntityKind::Offer, EntityId::new(404)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_does_not_cascade_across_kinds() {
        let store = InMemoryStore::new();
        store
            .insert(record(EntityKind::User, 1, "Ann"))
            .await
            .unwrap();
        store
            .insert(
                StoredRecord::new(
                    EntityKind::Offer,
                    EntityId::new(1),
                    serde_json::json!({ "executor_id": 1 }),
                ),
            )
            .await
            .unwrap();

        store
            .delete(EntityKind::User, EntityId::new(1))
            .await
            .unwrap();

        // The offer still references the deleted user.
        let offer = store.get(EntityKind::Offer, EntityId::new(1)).await.unwrap();
        assert_eq!(offer.payload["executor_id"], 1);
    }
}

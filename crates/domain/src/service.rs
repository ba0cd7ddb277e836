//! Generic CRUD operations over any entity kind.

use std::sync::Arc;

use record_store::RecordStore;
use tokio::sync::Mutex;

use crate::entity::{Entity, from_record, to_record};
use crate::error::DomainError;
use crate::field::{DateFormat, coerce};
use crate::EntityId;
use crate::serialize::{FieldMap, serialize as render};

/// The five resource operations, expressed once over all kinds.
///
/// Holds an explicitly passed store handle; there is no ambient
/// session state. Cloning the service shares the store and the update
/// lock.
pub struct ResourceService<S: RecordStore> {
    store: S,
    // Serializes the read-modify-persist cycle of partial updates so
    // no concurrent caller can observe or clobber a half-applied one.
    update_lock: Arc<Mutex<()>>,
}

impl<S: RecordStore + Clone> Clone for ResourceService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            update_lock: self.update_lock.clone(),
        }
    }
}

impl<S: RecordStore> ResourceService<S> {
    /// Creates a service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            update_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every record of the kind, serialized, in insertion order.
    pub async fn list<E: Entity>(&self) -> Result<Vec<FieldMap>, DomainError> {
        let records = self.store.list(E::KIND).await?;
        records
            .into_iter()
            .map(|r| Ok(render(&from_record::<E>(r)?)))
            .collect()
    }

    /// Creates a record from a full attribute map, id included.
    ///
    /// Every column is coerced with the `%m/%d/%Y` date format (the
    /// create and seed call sites share it). A duplicate id surfaces
    /// as [`record_store::StoreError::DuplicateKey`].
    pub async fn create<E: Entity>(&self, fields: &FieldMap) -> Result<E, DomainError> {
        let entity = E::from_fields(fields, DateFormat::MonthDayYear)?;
        self.store.insert(to_record(&entity)?).await?;
        tracing::debug!(kind = %E::KIND, id = %entity.id(), "record created");
        Ok(entity)
    }

    /// Fetches one record by id and serializes it.
    pub async fn fetch<E: Entity>(&self, id: EntityId) -> Result<FieldMap, DomainError> {
        let record = self.store.get(E::KIND, id).await?;
        Ok(render(&from_record::<E>(record)?))
    }

    /// Applies a partial update: only the named fields change.
    ///
    /// Unknown field names and `id` reassignment are rejected before
    /// anything is written. Date columns parse the `%Y-%m-%d` format;
    /// the create-side `%m/%d/%Y` form is not accepted here. All
    /// assignments persist in a single store update, and the whole
    /// read-modify-persist cycle runs under the update lock.
    pub async fn update<E: Entity>(
        &self,
        id: EntityId,
        fields: &FieldMap,
    ) -> Result<E, DomainError> {
        let _guard = self.update_lock.lock().await;

        let record = self.store.get(E::KIND, id).await?;
        let mut entity: E = from_record(record)?;

        for (name, raw) in fields {
            let column = E::column(name)?;
            let value = coerce(column, raw, DateFormat::YearMonthDay)?;
            entity.apply(name, value)?;
        }

        self.store.update(to_record(&entity)?).await?;
        tracing::debug!(kind = %E::KIND, %id, fields = fields.len(), "record updated");
        Ok(entity)
    }

    /// Deletes one record by id.
    ///
    /// Records of other kinds that reference it are left dangling;
    /// there is no cascading delete.
    pub async fn delete<E: Entity>(&self, id: EntityId) -> Result<(), DomainError> {
        self.store.delete(E::KIND, id).await?;
        tracing::debug!(kind = %E::KIND, %id, "record deleted");
        Ok(())
    }
}

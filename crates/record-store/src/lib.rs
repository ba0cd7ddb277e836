//! Persistence layer for the record service.
//!
//! Records are stored as [`StoredRecord`] envelopes keyed by
//! `(EntityKind, EntityId)`. The [`RecordStore`] trait is the single
//! seam between the domain layer and whatever actually holds the
//! data; [`InMemoryStore`] is the bundled implementation.

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use common::{EntityId, EntityKind};
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use record::StoredRecord;
pub use store::{RecordStore, RecordStoreExt};

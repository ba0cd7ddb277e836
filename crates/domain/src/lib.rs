//! Domain layer for the record service.
//!
//! Defines the three entity kinds (users, orders, offers), the field
//! coercion rules that turn wire values into typed column values, the
//! generic serializer that renders any entity as an ordered map of
//! textual fields, and [`ResourceService`], which expresses the CRUD
//! operations once over all kinds.

pub mod entity;
pub mod error;
pub mod field;
pub mod offer;
pub mod order;
pub mod serialize;
pub mod service;
pub mod user;

pub use common::{EntityId, EntityKind};
pub use entity::Entity;
pub use error::DomainError;
pub use field::{Column, ColumnKind, DateFormat, FieldValue, coerce};
pub use offer::Offer;
pub use order::Order;
pub use serialize::{FieldMap, serialize};
pub use service::ResourceService;
pub use user::User;

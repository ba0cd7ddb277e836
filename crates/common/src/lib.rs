//! Shared types used across the record service crates.

mod types;

pub use types::{EntityId, EntityKind};

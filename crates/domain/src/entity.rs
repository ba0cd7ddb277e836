//! The [`Entity`] trait: one uniquely identified persistent record kind.
//!
//! Each kind declares its columns as a static table in declaration
//! order; field access and assignment go through that table by name,
//! so a request can address any subset of columns at runtime while
//! unknown names are rejected instead of silently ignored.

use serde::Serialize;
use serde::de::DeserializeOwned;

use record_store::StoredRecord;

use crate::error::DomainError;
use crate::field::{Column, DateFormat, FieldValue, coerce};
use crate::{EntityId, EntityKind};

/// A persistent record kind with a caller-assigned integer identity.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Which table this kind lives in.
    const KIND: EntityKind;

    /// The record's identity.
    fn id(&self) -> EntityId;

    /// The declared columns, in declaration order.
    ///
    /// Relationship back-references are not columns and never appear
    /// here.
    fn columns() -> &'static [Column];

    /// Returns the current typed value of a column, or `None` for an
    /// undeclared name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Assigns a typed value to a column.
    ///
    /// The value has already been coerced to the column's kind; `id`
    /// is not assignable because identity never changes after create.
    fn apply(&mut self, name: &str, value: FieldValue) -> Result<(), DomainError>;

    /// Looks up a declared column by name.
    fn column(name: &str) -> Result<&'static Column, DomainError> {
        Self::columns()
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DomainError::UnknownField {
                kind: Self::KIND,
                field: name.to_string(),
            })
    }

    /// Builds an entity from a full attribute map, coercing every
    /// declared column with the given date format.
    ///
    /// A missing column fails with `InvalidFieldValue`; keys that name
    /// no declared column are ignored, as the original accepted them.
    fn from_fields(
        fields: &serde_json::Map<String, serde_json::Value>,
        dates: DateFormat,
    ) -> Result<Self, DomainError> {
        let mut document = serde_json::Map::new();
        for column in Self::columns() {
            let raw = fields
                .get(column.name)
                .ok_or_else(|| DomainError::invalid_field(column.name, "field is missing"))?;
            let value = coerce(column, raw, dates)?;
            document.insert(column.name.to_string(), field_to_json(&value));
        }
        Ok(serde_json::from_value(serde_json::Value::Object(document))?)
    }
}

/// Maps a failed assignment to the right error: unknown column name,
/// or a value whose kind does not match the declared column.
pub(crate) fn mismatch<E: Entity>(name: &str) -> DomainError {
    match E::column(name) {
        Ok(_) => DomainError::invalid_field(name, "value does not match column type"),
        Err(e) => e,
    }
}

/// Renders a typed value as the JSON it takes in a stored payload.
fn field_to_json(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Int(n) => serde_json::Value::from(*n),
        FieldValue::Text(s) => serde_json::Value::from(s.clone()),
        // chrono's serde form for NaiveDate is the ISO string.
        FieldValue::Date(d) => serde_json::Value::from(d.format("%Y-%m-%d").to_string()),
    }
}

/// Wraps an entity in a store envelope.
pub fn to_record<E: Entity>(entity: &E) -> Result<StoredRecord, DomainError> {
    let payload = serde_json::to_value(entity)?;
    Ok(StoredRecord::new(E::KIND, entity.id(), payload))
}

/// Unwraps a store envelope back into its entity.
pub fn from_record<E: Entity>(record: StoredRecord) -> Result<E, DomainError> {
    Ok(serde_json::from_value(record.payload)?)
}

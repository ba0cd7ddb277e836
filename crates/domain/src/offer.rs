//! The offer entity.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, mismatch};
use crate::error::DomainError;
use crate::field::{Column, FieldValue};
use crate::{EntityId, EntityKind};

/// An executor's offer against an order.
///
/// Both references are loose: neither the order nor the executor has
/// to exist when the offer is created, and deleting either leaves the
/// offer in place with a dangling id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: EntityId,
    pub order_id: i64,
    pub executor_id: i64,
}

const COLUMNS: &[Column] = &[
    Column::int("id"),
    Column::int("order_id"),
    Column::int("executor_id"),
];

impl Entity for Offer {
    const KIND: EntityKind = EntityKind::Offer;

    fn id(&self) -> EntityId {
        self.id
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Int(self.id.as_i64())),
            "order_id" => Some(FieldValue::Int(self.order_id)),
            "executor_id" => Some(FieldValue::Int(self.executor_id)),
            _ => None,
        }
    }

    fn apply(&mut self, name: &str, value: FieldValue) -> Result<(), DomainError> {
        match (name, value) {
            ("id", _) => {
                return Err(DomainError::invalid_field("id", "identity cannot be reassigned"));
            }
            ("order_id", FieldValue::Int(v)) => self.order_id = v,
            ("executor_id", FieldValue::Int(v)) => self.executor_id = v,
            (name, _) => return Err(mismatch::<Self>(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DateFormat;

    #[test]
    fn builds_from_field_map() {
        let serde_json::Value::Object(map) = serde_json::json!({
            "id": 1,
            "order_id": 4,
            "executor_id": 2
        }) else {
            unreachable!()
        };
        let offer = Offer::from_fields(&map, DateFormat::MonthDayYear).unwrap();
        assert_eq!(offer.order_id, 4);
        assert_eq!(offer.executor_id, 2);
    }

    #[test]
    fn numeric_strings_coerce_to_references() {
        let serde_json::Value::Object(map) = serde_json::json!({
            "id": "7",
            "order_id": "4",
            "executor_id": "2"
        }) else {
            unreachable!()
        };
        let offer = Offer::from_fields(&map, DateFormat::MonthDayYear).unwrap();
        assert_eq!(offer.id, EntityId::new(7));
        assert_eq!(offer.order_id, 4);
    }
}

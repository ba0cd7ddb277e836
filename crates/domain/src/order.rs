//! The order entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, mismatch};
use crate::error::DomainError;
use crate::field::{Column, FieldValue};
use crate::{EntityId, EntityKind};

/// A work order placed by a customer.
///
/// `customer_id` references a user; `executor_id` is a loose integer
/// with no enforced foreign key. Neither reference is validated at
/// create time, and `start_date <= end_date` is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

const COLUMNS: &[Column] = &[
    Column::int("id"),
    Column::text("name"),
    Column::text("description"),
    Column::date("start_date"),
    Column::date("end_date"),
    Column::text("address"),
    Column::int("price"),
    Column::int("customer_id"),
    Column::int("executor_id"),
];

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> EntityId {
        self.id
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Int(self.id.as_i64())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "start_date" => Some(FieldValue::Date(self.start_date)),
            "end_date" => Some(FieldValue::Date(self.end_date)),
            "address" => Some(FieldValue::Text(self.address.clone())),
            "price" => Some(FieldValue::Int(self.price)),
            "customer_id" => Some(FieldValue::Int(self.customer_id)),
            "executor_id" => Some(FieldValue::Int(self.executor_id)),
            _ => None,
        }
    }

    fn apply(&mut self, name: &str, value: FieldValue) -> Result<(), DomainError> {
        match (name, value) {
            ("id", _) => {
                return Err(DomainError::invalid_field("id", "identity cannot be reassigned"));
            }
            ("name", FieldValue::Text(v)) => self.name = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("start_date", FieldValue::Date(v)) => self.start_date = v,
            ("end_date", FieldValue::Date(v)) => self.end_date = v,
            ("address", FieldValue::Text(v)) => self.address = v,
            ("price", FieldValue::Int(v)) => self.price = v,
            ("customer_id", FieldValue::Int(v)) => self.customer_id = v,
            ("executor_id", FieldValue::Int(v)) => self.executor_id = v,
            (name, _) => return Err(mismatch::<Self>(name)),
        }
        Ok(())
    }
}

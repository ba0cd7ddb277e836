//! The user entity.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, mismatch};
use crate::error::DomainError;
use crate::field::{Column, FieldValue};
use crate::{EntityId, EntityKind};

/// A registered user.
///
/// Users are referenced by orders (as customer) and offers (as
/// executor). Those are lookup-only back-references; deleting a user
/// leaves dependents in place with dangling ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

const COLUMNS: &[Column] = &[
    Column::int("id"),
    Column::text("first_name"),
    Column::text("last_name"),
    Column::int("age"),
    Column::text("email"),
    Column::text("role"),
    Column::text("phone"),
];

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> EntityId {
        self.id
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Int(self.id.as_i64())),
            "first_name" => Some(FieldValue::Text(self.first_name.clone())),
            "last_name" => Some(FieldValue::Text(self.last_name.clone())),
            "age" => Some(FieldValue::Int(self.age)),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "role" => Some(FieldValue::Text(self.role.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            _ => None,
        }
    }

    fn apply(&mut self, name: &str, value: FieldValue) -> Result<(), DomainError> {
        match (name, value) {
            ("id", _) => {
                return Err(DomainError::invalid_field("id", "identity cannot be reassigned"));
            }
            ("first_name", FieldValue::Text(v)) => self.first_name = v,
            ("last_name", FieldValue::Text(v)) => self.last_name = v,
            ("age", FieldValue::Int(v)) => self.age = v,
            ("email", FieldValue::Text(v)) => self.email = v,
            ("role", FieldValue::Text(v)) => self.role = v,
            ("phone", FieldValue::Text(v)) => self.phone = v,
            (name, _) => return Err(mismatch::<Self>(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DateFormat;

    fn fields() -> serde_json::Map<String, serde_json::Value> {
        let serde_json::Value::Object(map) = serde_json::json!({
            "id": 1,
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 30,
            "email": "ann@example.com",
            "role": "customer",
            "phone": "555-0101"
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn builds_from_full_field_map() {
        let user = User::from_fields(&fields(), DateFormat::MonthDayYear).unwrap();
        assert_eq!(user.id, EntityId::new(1));
        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut map = fields();
        map.remove("email");
        let result = User::from_fields(&map, DateFormat::MonthDayYear);
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));
    }

    #[test]
    fn extra_keys_are_ignored_on_create() {
        let mut map = fields();
        map.insert("nickname".to_string(), serde_json::json!("annie"));
        assert!(User::from_fields(&map, DateFormat::MonthDayYear).is_ok());
    }

    #[test]
    fn apply_assigns_declared_column() {
        let mut user = User::from_fields(&fields(), DateFormat::MonthDayYear).unwrap();
        user.apply("age", FieldValue::Int(31)).unwrap();
        assert_eq!(user.age, 31);
    }

    #[test]
    fn apply_rejects_identity_reassignment() {
        let mut user = User::from_fields(&fields(), DateFormat::MonthDayYear).unwrap();
        let result = user.apply("id", FieldValue::Int(2));
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));
        assert_eq!(user.id, EntityId::new(1));
    }

    #[test]
    fn apply_rejects_unknown_field() {
        let mut user = User::from_fields(&fields(), DateFormat::MonthDayYear).unwrap();
        let result = user.apply("nickname", FieldValue::Text("annie".to_string()));
        assert!(matches!(result, Err(DomainError::UnknownField { .. })));
    }
}

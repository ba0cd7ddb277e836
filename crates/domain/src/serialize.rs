//! Generic serialization of entities into ordered field maps.

use crate::entity::Entity;

/// An ordered mapping of column name to textual value.
///
/// serde_json is built with `preserve_order`, so the map iterates and
/// emits in insertion order — here, the entity kind's declaration
/// order.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Renders every declared column of an entity as text, in declaration
/// order.
///
/// Works the same for any kind: integers render via `Display`, dates
/// as `YYYY-MM-DD`. Relationship back-references are not columns and
/// are never emitted.
pub fn serialize<E: Entity>(entity: &E) -> FieldMap {
    let mut map = FieldMap::new();
    for column in E::columns() {
        if let Some(value) = entity.field(column.name) {
            map.insert(
                column.name.to_string(),
                serde_json::Value::String(value.render()),
            );
        }
    }
    map
}

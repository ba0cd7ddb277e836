//! Generic CRUD endpoints, instantiated per entity kind.
//!
//! All five resource groups share these handlers; the router pins the
//! entity type parameter per path. Mutating endpoints answer with the
//! plain text `"Ok"`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{Entity, FieldMap, ResourceService};
use record_store::RecordStore;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
///
/// The store handle is passed explicitly through the service; there
/// is no process-wide session.
pub struct AppState<S: RecordStore> {
    pub records: ResourceService<S>,
}

fn into_fields(body: serde_json::Value) -> Result<FieldMap, ApiError> {
    match body {
        serde_json::Value::Object(fields) => Ok(fields),
        _ => Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        )),
    }
}

/// GET /{kind} — list every record of the kind in insertion order.
#[tracing::instrument(skip(state), fields(kind = %E::KIND))]
pub async fn list<E: Entity, S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<FieldMap>>, ApiError> {
    let records = state.records.list::<E>().await?;
    Ok(Json(records))
}

/// POST /{kind} — create a record from a full attribute map, id included.
#[tracing::instrument(skip(state, body), fields(kind = %E::KIND))]
pub async fn create<E: Entity, S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<serde_json::Value>,
) -> Result<&'static str, ApiError> {
    let fields = into_fields(body)?;
    state.records.create::<E>(&fields).await?;
    metrics::counter!("records_created_total", "kind" => E::KIND.as_str()).increment(1);
    Ok("Ok")
}

/// GET /{kind}/:id — fetch one record by id.
#[tracing::instrument(skip(state), fields(kind = %E::KIND))]
pub async fn fetch<E: Entity, S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<FieldMap>, ApiError> {
    let record = state.records.fetch::<E>(id.into()).await?;
    Ok(Json(record))
}

/// PUT /{kind}/:id — apply a partial update; absent fields keep their values.
#[tracing::instrument(skip(state, body), fields(kind = %E::KIND))]
pub async fn update<E: Entity, S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<&'static str, ApiError> {
    let fields = into_fields(body)?;
    state.records.update::<E>(id.into(), &fields).await?;
    metrics::counter!("records_updated_total", "kind" => E::KIND.as_str()).increment(1);
    Ok("Ok")
}

/// DELETE /{kind}/:id — delete one record; dependents are left dangling.
#[tracing::instrument(skip(state), fields(kind = %E::KIND))]
pub async fn remove<E: Entity, S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state.records.delete::<E>(id.into()).await?;
    metrics::counter!("records_deleted_total", "kind" => E::KIND.as_str()).increment(1);
    Ok("Ok")
}

//! HTTP API server with observability for the record service.
//!
//! Exposes the uniform CRUD interface over users, orders, and offers,
//! with structured logging (tracing) and Prometheus metrics. Missing
//! records answer 400 with a human-readable message; only unmatched
//! routes answer 404.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use domain::{Offer, Order, ResourceService, User};
use metrics_exporter_prometheus::PrometheusHandle;
use record_store::RecordStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::records::AppState;

async fn index() -> &'static str {
    "Ok"
}

async fn unknown_route() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, error::UNKNOWN_ROUTE_MESSAGE)
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: RecordStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    use routes::records::{create, fetch, list, remove, update};

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(index))
        .route("/health", get(routes::health::check))
        .route("/users", get(list::<User, S>).post(create::<User, S>))
        .route(
            "/users/{id}",
            get(fetch::<User, S>)
                .put(update::<User, S>)
                .delete(remove::<User, S>),
        )
        .route("/orders", get(list::<Order, S>).post(create::<Order, S>))
        .route(
            "/orders/{id}",
            get(fetch::<Order, S>)
                .put(update::<Order, S>)
                .delete(remove::<Order, S>),
        )
        .route("/offers", get(list::<Offer, S>).post(create::<Offer, S>))
        .route(
            "/offers/{id}",
            get(fetch::<Offer, S>)
                .put(update::<Offer, S>)
                .delete(remove::<Offer, S>),
        )
        .fallback(unknown_route)
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state around the given store.
pub fn create_default_state<S: RecordStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        records: ResourceService::new(store),
    })
}

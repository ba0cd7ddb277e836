//! API error types with HTTP response mapping.
//!
//! Missing records answer with status 400 (not 404) and a
//! human-readable Russian message; only an unmatched route gets a
//! 404. Client-caused failures are plain-text bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::EntityKind;
use domain::DomainError;
use record_store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The addressed record does not exist.
    NotFound(EntityKind),
    /// Bad request from the client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
}

/// Boundary text for a missing record of the given kind.
pub fn not_found_message(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "Пользователь не найден",
        EntityKind::Order => "Заказ не найден",
        EntityKind::Offer => "Предложение не найдено",
    }
}

/// Boundary text for an unmatched route.
pub const UNKNOWN_ROUTE_MESSAGE: &str = "Запрошенная страница не существует";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(kind) => {
                (StatusCode::BAD_REQUEST, not_found_message(kind).to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, message).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Store(StoreError::NotFound { kind, .. }) => ApiError::NotFound(kind),
            DomainError::Store(StoreError::DuplicateKey { .. }) => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::InvalidFieldValue { .. } | DomainError::UnknownField { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::Store(StoreError::Serialization(_)) | DomainError::Serialization(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_kind() {
        let err = DomainError::Store(StoreError::NotFound {
            kind: EntityKind::Order,
            id: common::EntityId::new(1),
        });
        assert!(matches!(
            ApiError::from(err),
            ApiError::NotFound(EntityKind::Order)
        ));
    }

    #[test]
    fn duplicate_key_is_a_bad_request() {
        let err = DomainError::Store(StoreError::DuplicateKey {
            kind: EntityKind::User,
            id: common::EntityId::new(1),
        });
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }

    #[test]
    fn invalid_field_is_a_bad_request() {
        let err = DomainError::invalid_field("age", "not an integer");
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }
}

//! HTTP error handling and response types.
//!
//! Every client-visible error is a fixed, pre-written string; driver and
//! repository detail stays in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Readiness error body, returned for every request while the store
/// connection has not been established.
pub const ERR_DB_UNREADY: &str =
    "Base de datos no conectada. Intenta nuevamente en unos instantes.";
/// Fixed message for failures while listing users.
pub const ERR_LIST_USERS: &str = "Error al obtener los usuarios";
/// Fixed message for failures while fetching a single user.
pub const ERR_GET_USER: &str = "Error al obtener el usuario";
/// Fixed message for failures while inserting a user.
pub const ERR_ADD_USER: &str = "Error al añadir el usuario";
/// Lookup miss body.
pub const ERR_USER_NOT_FOUND: &str = "Usuario no encontrado";
/// Body for unmatched routes.
pub const ERR_ROUTE_NOT_FOUND: &str = "Recurso no encontrado";

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Client-visible error message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Variants carry only the fixed client-visible message for their route; the
/// underlying cause is logged at the call site and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// Store connection was never established (503 with the readiness body)
    ServiceUnavailable,
    /// Domain not-found condition (404)
    NotFound(&'static str),
    /// Store operation failed (500 with a route-specific body)
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, ERR_DB_UNREADY),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiError::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unready_response_shape() {
        let response = AppError::ServiceUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "error": "Base de datos no conectada. Intenta nuevamente en unos instantes."
            })
        );
    }

    #[tokio::test]
    async fn test_internal_response_uses_fixed_message() {
        let response = AppError::Internal(ERR_LIST_USERS).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Error al obtener los usuarios");
    }
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Store failures are logged and mapped to the fixed route-specific
//! error body; no driver detail reaches the client.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, CreateUserResponse, StatusMessage, UserRecord};
use super::error::{
    AppError, ERR_ADD_USER, ERR_GET_USER, ERR_LIST_USERS, ERR_ROUTE_NOT_FOUND, ERR_USER_NOT_FOUND,
};
use super::state::AppState;
use crate::db::services as db_services;

/// Confirmation message for user creation.
pub const MSG_USER_ADDED: &str = "Usuario añadido exitosamente.";

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Liveness probe. Always `[{"message":"on"}]` once the readiness gate has
/// passed.
pub async fn service_status() -> Json<Vec<StatusMessage>> {
    Json(vec![StatusMessage {
        message: "on".to_string(),
    }])
}

/// GET /api/users
///
/// List all user records in the store's native order, no pagination.
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<Vec<UserRecord>> {
    let repository = state.repository()?;

    let users = db_services::list_users(repository).await.map_err(|e| {
        tracing::error!(error = %e, "listing users failed");
        AppError::Internal(ERR_LIST_USERS)
    })?;

    Ok(Json(users))
}

/// GET /api/users/{name}
///
/// Fetch a single user by exact match on the `name` field. Records created
/// through this API carry `nombre` instead, so this lookup misses them; the
/// mismatch is preserved from the system being replaced.
pub async fn get_user_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<UserRecord> {
    let repository = state.repository()?;

    let user = db_services::find_user_by_name(repository, &name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "user lookup failed");
            AppError::Internal(ERR_GET_USER)
        })?;

    match user {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::NotFound(ERR_USER_NOT_FOUND)),
    }
}

/// POST /api/users
///
/// Persist the supplied fields as-is, with no validation; missing fields are
/// simply not stored. Returns 201 echoing the persisted record.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    let repository = state.repository()?;

    let user: UserRecord = request.into();
    db_services::add_user(repository, &user).await.map_err(|e| {
        tracing::error!(error = %e, "user insert failed");
        AppError::Internal(ERR_ADD_USER)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: MSG_USER_ADDED.to_string(),
            user,
        }),
    ))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound(ERR_ROUTE_NOT_FOUND)
}

//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::db::models::UserRecord;

/// Body of the liveness probe response (`GET /` returns an array of these).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Request body for creating a new user.
///
/// Every field is optional and passed through untouched; a missing field is
/// simply not stored. Unknown fields in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub id: Option<serde_json::Value>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
}

impl From<CreateUserRequest> for UserRecord {
    fn from(request: CreateUserRequest) -> Self {
        UserRecord {
            id: request.id,
            nombre: request.nombre,
            apellido: request.apellido,
            telefono: request.telefono,
        }
    }
}

/// Response for user creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Confirmation message
    pub message: String,
    /// The record as persisted (absent fields omitted)
    pub user: UserRecord,
}

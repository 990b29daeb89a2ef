//! Data models for the user store.

use serde::{Deserialize, Serialize};

/// A single user document as stored in the collection.
///
/// Every field is optional and caller-supplied; the store enforces no
/// constraints. Fields that were absent at creation time are omitted from
/// stored documents and from JSON responses alike, so a record only ever
/// carries the subset of fields the client actually sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// External identifier, opaque to this service (string or number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

//! High-level store service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`UserRepository`]. Every function is a direct
//! pass-through to the store's native collection capability; there is no
//! business logic to layer on top.

use log::info;

use super::models::UserRecord;
use super::repository::{RepositoryError, RepositoryResult, UserRepository};

/// Field queried by the lookup endpoint.
///
/// Note: documents are created with the field `nombre`, so a lookup on
/// `name` never matches records created through this API. This mirrors the
/// observed behavior of the system being replaced and is kept intentionally.
pub const LOOKUP_FIELD: &str = "name";

/// Check if the store connection is healthy.
pub async fn health_check(repo: &dyn UserRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Run the one-shot readiness probe against a freshly built repository.
///
/// This is the single connection attempt made at startup: an unhealthy or
/// failing probe is reported as a connection error and never retried.
pub async fn verify_connection(repo: &dyn UserRepository) -> RepositoryResult<()> {
    if health_check(repo).await? {
        Ok(())
    } else {
        Err(RepositoryError::ConnectionError(
            "store did not answer the readiness probe".to_string(),
        ))
    }
}

/// Fetch all user records in the store's native order.
pub async fn list_users(repo: &dyn UserRepository) -> RepositoryResult<Vec<UserRecord>> {
    repo.list_users().await
}

/// Find a user whose `name` field equals `name` exactly.
///
/// Returns `Ok(None)` when no document matches; that is a domain condition,
/// not an error.
pub async fn find_user_by_name(
    repo: &dyn UserRepository,
    name: &str,
) -> RepositoryResult<Option<UserRecord>> {
    repo.find_user_by_field(LOOKUP_FIELD, name).await
}

/// Persist a user record as-is, with no validation.
pub async fn add_user(repo: &dyn UserRepository, user: &UserRecord) -> RepositoryResult<()> {
    repo.insert_user(user).await?;
    info!("user record inserted");
    Ok(())
}

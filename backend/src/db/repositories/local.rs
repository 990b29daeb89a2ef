//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::db::models::UserRecord;
use crate::db::repository::{RepositoryError, RepositoryResult, UserRepository};

/// In-memory user repository.
///
/// Documents live in a `Vec` behind a `RwLock`, so listing returns them in
/// insertion order (the in-memory analogue of the store's native order).
/// Field lookups compare against the record's JSON representation, which
/// reproduces the exact-match semantics of a document store filter: a field
/// that was never written simply never matches.
#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn insert_user(&self, user: &UserRecord) -> RepositoryResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::InternalError("user store lock poisoned".to_string()))?;
        users.push(user.clone());
        Ok(())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::InternalError("user store lock poisoned".to_string()))?;
        Ok(users.clone())
    }

    async fn find_user_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> RepositoryResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::InternalError("user store lock poisoned".to_string()))?;

        for user in users.iter() {
            let doc = serde_json::to_value(user)
                .map_err(|e| RepositoryError::QueryError(e.to_string()))?;
            if doc.get(field).and_then(|v| v.as_str()) == Some(value) {
                return Ok(Some(user.clone()));
            }
        }
        Ok(None)
    }
}

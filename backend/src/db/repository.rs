//! Repository trait for abstracting document store operations.
//!
//! This trait defines the interface for all store operations, allowing
//! different implementations (MongoDB, in-memory) to be swapped via
//! dependency injection.

use async_trait::async_trait;

use super::models::UserRecord;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Repository trait for the users collection.
///
/// Implementations expose the store's native collection capabilities:
/// insert-one, find-all, and find-one by exact field match. No validation,
/// pagination, or ordering guarantees are layered on top; results come back
/// in the store's native order.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across concurrent in-flight requests.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Check if the store connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the connection is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert a single user document as-is.
    ///
    /// Absent fields are not stored; no uniqueness or type constraints are
    /// enforced.
    async fn insert_user(&self, user: &UserRecord) -> RepositoryResult<()>;

    /// Fetch all user documents in the store's native order.
    async fn list_users(&self) -> RepositoryResult<Vec<UserRecord>>;

    /// Find the first document whose `field` equals `value` exactly.
    ///
    /// # Returns
    /// - `Ok(Some(record))` on a match
    /// - `Ok(None)` when no document carries that field/value pair
    /// - `Err(RepositoryError)` if the query failed
    async fn find_user_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> RepositoryResult<Option<UserRecord>>;
}

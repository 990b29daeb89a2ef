//! Application state for the HTTP server.

use std::sync::Arc;

use super::error::AppError;
use crate::db::repository::UserRepository;

/// Store readiness, decided once at startup.
///
/// The bootstrap makes a single connection attempt. When it fails the state
/// stays `Uninitialized` for the life of the process and every request is
/// answered with 503; there is no retry.
pub enum StoreState {
    /// The one-time connection attempt failed (or has not been made).
    Uninitialized,
    /// The store is connected and ready to serve requests.
    Ready(Arc<dyn UserRepository>),
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<StoreState>,
}

impl AppState {
    /// Create application state backed by a connected repository.
    pub fn ready(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            store: Arc::new(StoreState::Ready(repository)),
        }
    }

    /// Create application state for a process whose store connection failed.
    pub fn uninitialized() -> Self {
        Self {
            store: Arc::new(StoreState::Uninitialized),
        }
    }

    /// Whether the store connection was established.
    pub fn is_ready(&self) -> bool {
        matches!(*self.store, StoreState::Ready(_))
    }

    /// Access the repository, failing with the readiness error if the store
    /// never connected.
    pub fn repository(&self) -> Result<&dyn UserRepository, AppError> {
        match &*self.store {
            StoreState::Ready(repository) => Ok(repository.as_ref()),
            StoreState::Uninitialized => Err(AppError::ServiceUnavailable),
        }
    }
}

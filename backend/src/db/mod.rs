//! Store access module for user records.
//!
//! This module provides abstractions for document store operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/) - axum handlers                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - pass-through operations  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - abstract interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Mongo Repository │     │ Local Repository        │
//! │ (mongodb driver) │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use users_api::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let users = services::list_users(&repo).await?;
//!     println!("Found {} users", users.len());
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod config;
pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

pub use config::MongoConfig;
pub use factory::{RepositoryFactory, RepositoryType};
pub use models::UserRecord;
pub use repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
pub use repositories::MongoRepository;
pub use repository::{RepositoryError, RepositoryResult, UserRepository};

use std::sync::Arc;

/// Connect to the store selected by the environment.
///
/// Exactly one connection attempt is made, as a health-check probe against
/// the freshly built repository; there is no retry. Callers decide how to
/// proceed on failure (the HTTP server keeps running in an unready state
/// serving 503s).
pub async fn connect_from_env() -> RepositoryResult<Arc<dyn UserRepository>> {
    let repo_type = RepositoryType::from_env();
    let repository = match repo_type {
        RepositoryType::Mongo => {
            let config = MongoConfig::from_env().map_err(RepositoryError::ConfigurationError)?;
            RepositoryFactory::create(repo_type, Some(&config)).await?
        }
        RepositoryType::Local => RepositoryFactory::create(repo_type, None).await?,
    };

    services::verify_connection(repository.as_ref()).await?;
    Ok(repository)
}

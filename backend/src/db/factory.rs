//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::config::MongoConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
use super::repositories::MongoRepository;
use super::repository::{RepositoryError, RepositoryResult, UserRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("mongo", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Mongo when a connection string
    /// is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("MONGO_URI").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `mongo_config` - Store configuration (required for Mongo)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn UserRepository>)` - Shared repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn create(
        repo_type: RepositoryType,
        mongo_config: Option<&MongoConfig>,
    ) -> RepositoryResult<Arc<dyn UserRepository>> {
        match repo_type {
            RepositoryType::Mongo => {
                #[cfg(feature = "mongo-repo")]
                {
                    let config = mongo_config.ok_or_else(|| {
                        RepositoryError::ConfigurationError(
                            "Mongo repository requires MongoConfig".to_string(),
                        )
                    })?;
                    let repo = MongoRepository::new(config).await?;
                    Ok(Arc::new(repo) as Arc<dyn UserRepository>)
                }
                #[cfg(not(feature = "mongo-repo"))]
                {
                    let _ = mongo_config;
                    Err(RepositoryError::ConfigurationError(
                        "Mongo repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn UserRepository> {
        Arc::new(LocalRepository::new())
    }
}

//! MongoDB repository implementation.
//!
//! Production backend reaching a MongoDB deployment through the official
//! driver. The user collection is typed, so documents serialize straight
//! from [`UserRecord`] with no mapping layer.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use log::{info, warn};
use mongodb::{Client, Collection};

use crate::db::config::MongoConfig;
use crate::db::models::UserRecord;
use crate::db::repository::{RepositoryError, RepositoryResult, UserRepository};

/// MongoDB-backed user repository.
///
/// The driver's client is safe for concurrent use, so a single instance is
/// shared across all in-flight requests.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    client: Client,
    database: String,
    collection: Collection<UserRecord>,
}

impl MongoRepository {
    /// Build the MongoDB client and bind the users collection.
    ///
    /// `Client::with_uri_str` does not reach the server by itself; the
    /// bootstrap verifies reachability through [`UserRepository::health_check`],
    /// which issues a `ping` command. This type never retries.
    pub async fn new(config: &MongoConfig) -> RepositoryResult<Self> {
        info!(
            "configuring MongoDB client for database '{}', collection '{}'",
            config.database, config.collection
        );

        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| RepositoryError::ConnectionError(format!("invalid MongoDB URI: {e}")))?;

        let collection = client
            .database(&config.database)
            .collection::<UserRecord>(&config.collection);

        Ok(Self {
            client,
            database: config.database.clone(),
            collection,
        })
    }
}

#[async_trait]
impl UserRepository for MongoRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        match self
            .client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!("MongoDB ping failed: {e}");
                Ok(false)
            }
        }
    }

    async fn insert_user(&self, user: &UserRecord) -> RepositoryResult<()> {
        self.collection
            .insert_one(user)
            .await
            .map_err(|e| RepositoryError::QueryError(format!("insert failed: {e}")))?;
        Ok(())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<UserRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| RepositoryError::QueryError(format!("find failed: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::QueryError(format!("cursor read failed: {e}")))
    }

    async fn find_user_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> RepositoryResult<Option<UserRecord>> {
        self.collection
            .find_one(doc! { field: value })
            .await
            .map_err(|e| RepositoryError::QueryError(format!("find_one failed: {e}")))
    }
}

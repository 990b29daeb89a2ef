//! Store configuration and environment variable handling.

use std::env;

/// MongoDB configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string for the MongoDB deployment
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection holding user documents
    pub collection: String,
}

impl MongoConfig {
    /// Create a new store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGO_URI` (required): MongoDB connection string
    /// - `MONGO_DATABASE` (optional, default: `despliegue_docker`): database name
    /// - `MONGO_COLLECTION` (optional, default: `users`): collection name
    ///
    /// # Errors
    /// Returns an error if `MONGO_URI` is not set.
    pub fn from_env() -> Result<Self, String> {
        let uri = env::var("MONGO_URI")
            .map_err(|_| "MONGO_URI environment variable not set".to_string())?;
        let database =
            env::var("MONGO_DATABASE").unwrap_or_else(|_| "despliegue_docker".to_string());
        let collection = env::var("MONGO_COLLECTION").unwrap_or_else(|_| "users".to_string());

        Ok(Self {
            uri,
            database,
            collection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_uri() {
        // Run both the missing and present cases in one test so the env
        // mutation cannot race with a parallel test.
        env::remove_var("MONGO_URI");
        assert!(MongoConfig::from_env().is_err());

        env::set_var("MONGO_URI", "mongodb://localhost:27017");
        let config = MongoConfig::from_env().unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "despliegue_docker");
        assert_eq!(config.collection, "users");
        env::remove_var("MONGO_URI");
    }
}

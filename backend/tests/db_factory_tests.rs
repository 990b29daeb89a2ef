//! Tests for repository type selection and factory construction.

use users_api::db::{RepositoryError, RepositoryFactory, RepositoryType, UserRepository};

#[test]
fn test_repository_type_from_str() {
    assert_eq!("mongo".parse::<RepositoryType>(), Ok(RepositoryType::Mongo));
    assert_eq!(
        "MongoDB".parse::<RepositoryType>(),
        Ok(RepositoryType::Mongo)
    );
    assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
    assert!("cassandra".parse::<RepositoryType>().is_err());
}

#[tokio::test]
async fn test_create_local_repository() {
    let repo = RepositoryFactory::create_local();
    assert!(repo.health_check().await.unwrap());
    assert!(repo.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_via_type_local() {
    let repo = RepositoryFactory::create(RepositoryType::Local, None)
        .await
        .unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[cfg(not(feature = "mongo-repo"))]
#[tokio::test]
async fn test_mongo_without_feature_is_configuration_error() {
    let result = RepositoryFactory::create(RepositoryType::Mongo, None).await;
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::ConfigurationError(_)
    ));
}

#[cfg(feature = "mongo-repo")]
#[tokio::test]
async fn test_mongo_without_config_is_configuration_error() {
    let result = RepositoryFactory::create(RepositoryType::Mongo, None).await;
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::ConfigurationError(_)
    ));
}

#[test]
fn test_repository_error_display() {
    let err = RepositoryError::QueryError("boom".to_string());
    assert_eq!(err.to_string(), "Query error: boom");

    let err: RepositoryError = "oops".into();
    assert_eq!(err.to_string(), "Internal error: oops");
}

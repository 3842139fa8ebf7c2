use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, NewSessionError};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::CassandraConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for Cassandra connection handling
#[derive(Debug, thiserror::Error)]
pub enum CassandraError {
    #[error("Cassandra error: {0}")]
    Scylla(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Keyspace error: {0}")]
    KeyspaceError(String),
}

/// Shared session handle; scylla sessions pool internally.
pub type CassandraSession = Arc<Session>;

/// Connect to Cassandra/ScyllaDB nodes with default settings.
///
/// # Example
/// ```ignore
/// use database::cassandra::connect;
///
/// let session = connect(&["127.0.0.1:9042"]).await?;
/// session.query_unpaged("SELECT release_version FROM system.local", &[]).await?;
/// ```
pub async fn connect(nodes: &[impl AsRef<str>]) -> Result<CassandraSession, CassandraError> {
    let points: Vec<&str> = nodes.iter().map(|s| s.as_ref()).collect();
    info!("Attempting to connect to Cassandra at {:?}", points);

    let session: Session = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(10))
        .build()
        .await?;

    ping(&session).await?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect using a CassandraConfig and verify the cluster answers.
///
/// # Example
/// ```ignore
/// use database::cassandra::{CassandraConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = CassandraConfig::from_env()?;
/// let session = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(
    config: &CassandraConfig,
) -> Result<CassandraSession, CassandraError> {
    info!("Attempting to connect to Cassandra at {:?}", config.nodes);

    let points: Vec<&str> = config.nodes.iter().map(|s| s.as_str()).collect();

    let mut builder = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.user(username, password);
    }

    if let Some(ref keyspace) = config.keyspace {
        builder = builder.use_keyspace(keyspace, true);
    }

    let session: Session = builder.build().await?;

    ping(&session).await?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect from config, retrying with exponential backoff on failure.
///
/// # Example
/// ```ignore
/// use database::cassandra::{CassandraConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = CassandraConfig::from_env()?;
/// let retry_config = RetryConfig::new().with_max_retries(5);
/// let session = connect_from_config_with_retry(&config, Some(retry_config)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &CassandraConfig,
    retry_config: Option<RetryConfig>,
) -> Result<CassandraSession, CassandraError> {
    let config_clone = config.clone();

    match retry_config {
        Some(retry) => retry_with_backoff(|| connect_from_config(&config_clone), retry).await,
        None => retry(|| connect_from_config(&config_clone)).await,
    }
}

async fn ping(session: &Session) -> Result<(), CassandraError> {
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .map(|_| ())
        .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))
}

/// Create a keyspace if it doesn't exist.
///
/// # Example
/// ```ignore
/// use database::cassandra::{connect, create_keyspace_if_not_exists};
///
/// let session = connect(&["127.0.0.1:9042"]).await?;
/// create_keyspace_if_not_exists(&session, "registry", 1).await?;
/// ```
pub async fn create_keyspace_if_not_exists(
    session: &Session,
    keyspace: &str,
    replication_factor: u32,
) -> Result<(), CassandraError> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
        keyspace, replication_factor
    );

    session
        .query_unpaged(query, &[])
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Keyspace '{}' ready", keyspace);
    Ok(())
}

/// Switch the session to a keyspace.
pub async fn use_keyspace(session: &Session, keyspace: &str) -> Result<(), CassandraError> {
    session
        .use_keyspace(keyspace, true)
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Using keyspace '{}'", keyspace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_connect() {
        let nodes =
            std::env::var("CASSANDRA_NODES").unwrap_or_else(|_| "127.0.0.1:9042".to_string());
        let points: Vec<&str> = nodes.split(',').collect();

        let result = connect(&points).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_connect_from_config() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        let result = connect_from_config(&config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_create_keyspace() {
        let session = connect(&["127.0.0.1:9042"]).await.unwrap();
        let result = create_keyspace_if_not_exists(&session, "registry_test", 1).await;
        assert!(result.is_ok());
    }
}

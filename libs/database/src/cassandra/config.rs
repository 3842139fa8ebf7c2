#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Cassandra/ScyllaDB connection settings.
///
/// The platform only reads Cassandra as the legacy event store, so the
/// surface here stays small: nodes, keyspace, credentials, timeout.
///
/// # Example
///
/// ```ignore
/// use database::cassandra::CassandraConfig;
///
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "registry");
///
/// // From environment variables (requires `config` feature)
/// let config = CassandraConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points as host:port pairs
    /// Example: ["127.0.0.1:9042", "127.0.0.2:9042"]
    pub nodes: Vec<String>,

    /// Keyspace holding the event tables
    pub keyspace: Option<String>,

    /// Optional authentication credentials
    pub username: Option<String>,
    pub password: Option<String>,

    pub connect_timeout_secs: u64,
}

impl CassandraConfig {
    pub fn new<S: Into<String>>(nodes: Vec<S>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|s| s.into()).collect(),
            keyspace: None,
            username: None,
            password: None,
            connect_timeout_secs: 10,
        }
    }

    pub fn with_keyspace<S: Into<String>>(nodes: Vec<S>, keyspace: impl Into<String>) -> Self {
        Self {
            keyspace: Some(keyspace.into()),
            ..Self::new(nodes)
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self::new(vec!["127.0.0.1:9042"])
    }
}

/// Load CassandraConfig from environment variables
///
/// Environment variables:
/// - `CASSANDRA_NODES` (required) - Comma-separated contact points
///   Example: "127.0.0.1:9042,127.0.0.2:9042"
/// - `CASSANDRA_KEYSPACE` (optional) - Keyspace name
/// - `CASSANDRA_USERNAME` (optional)
/// - `CASSANDRA_PASSWORD` (optional)
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
#[cfg(feature = "config")]
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let nodes_raw = std::env::var("CASSANDRA_NODES")
            .map_err(|_| ConfigError::MissingEnvVar("CASSANDRA_NODES".to_string()))?;

        let nodes: Vec<String> = nodes_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if nodes.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_NODES".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let keyspace = std::env::var("CASSANDRA_KEYSPACE").ok();
        let username = std::env::var("CASSANDRA_USERNAME").ok();
        let password = std::env::var("CASSANDRA_PASSWORD").ok();

        let connect_timeout_secs = std::env::var("CASSANDRA_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            nodes,
            keyspace,
            username,
            password,
            connect_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        assert_eq!(config.nodes, vec!["127.0.0.1:9042"]);
        assert!(config.keyspace.is_none());
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_with_keyspace() {
        let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "registry");
        assert_eq!(config.keyspace, Some("registry".to_string()));
    }

    #[test]
    fn test_builder() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"])
            .with_credentials("etl", "secret")
            .with_connect_timeout(30);

        assert_eq!(config.username, Some("etl".to_string()));
        assert_eq!(config.password, Some("secret".to_string()));
        assert_eq!(config.connect_timeout_secs, 30);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("CASSANDRA_NODES", Some("10.0.0.1:9042, 10.0.0.2:9042")),
                ("CASSANDRA_KEYSPACE", Some("registry")),
            ],
            || {
                let config = CassandraConfig::from_env().unwrap();
                assert_eq!(config.nodes, vec!["10.0.0.1:9042", "10.0.0.2:9042"]);
                assert_eq!(config.keyspace, Some("registry".to_string()));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_missing_nodes() {
        temp_env::with_vars([("CASSANDRA_NODES", None::<&str>)], || {
            assert!(CassandraConfig::from_env().is_err());
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_blank_nodes() {
        temp_env::with_vars([("CASSANDRA_NODES", Some(" , "))], || {
            assert!(CassandraConfig::from_env().is_err());
        });
    }
}

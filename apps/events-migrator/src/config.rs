//! Configuration for the events migrator

use core_config::FromEnv;
use database::cassandra::CassandraConfig;
use database::mongodb::MongoConfig;
use eyre::Result;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Composes the connection settings for both ends of the copy:
/// Cassandra as the legacy source, MongoDB as the destination.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub cassandra: CassandraConfig,
    /// Keyspace holding the legacy event tables
    pub keyspace: String,
    pub mongodb: MongoConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_env();
        let mut cassandra = <CassandraConfig as FromEnv>::from_env()?;
        let mongodb = <MongoConfig as FromEnv>::from_env()?;

        // The session is built without a keyspace; the migrate command
        // creates and selects it after connecting, so a fresh cluster
        // can be bootstrapped.
        let keyspace = cassandra
            .keyspace
            .take()
            .unwrap_or_else(|| "registry".to_string());

        Ok(Self {
            environment,
            cassandra,
            keyspace,
            mongodb,
        })
    }
}

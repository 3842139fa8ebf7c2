//! Database connectors for the registry platform
//!
//! MongoDB holds the registry itself (routes, devices, transformations,
//! destinations, tenants) and the event collections; Cassandra appears as
//! the legacy event store that the migrator reads from.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `cassandra` - Cassandra/ScyllaDB support via the `scylla` driver
//! - `config` (default) - `core_config::FromEnv` implementations
//! - `all` - everything
//!
//! # Examples
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```
//!
//! ## Cassandra/ScyllaDB
//!
//! ```ignore
//! use database::cassandra::{CassandraConfig, connect_from_config};
//!
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "registry");
//! let session = connect_from_config(&config).await?;
//! session.query_unpaged("SELECT now() FROM system.local", &[]).await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(feature = "cassandra")]
pub mod cassandra;

pub use common::{RetryConfig, retry, retry_with_backoff};

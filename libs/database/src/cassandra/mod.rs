//! Cassandra/ScyllaDB connector for the legacy event store
//!
//! Uses the `scylla` driver, which speaks the CQL protocol to both
//! Apache Cassandra and ScyllaDB.

mod config;
mod connector;
mod health;

pub use config::CassandraConfig;
pub use connector::{
    CassandraError, CassandraSession, connect, connect_from_config, connect_from_config_with_retry,
    create_keyspace_if_not_exists, use_keyspace,
};
pub use health::{ClusterInfo, check_health, get_cluster_info};

// Re-export scylla types for convenience
pub use scylla::client::session::Session;
pub use scylla::client::session_builder::SessionBuilder;

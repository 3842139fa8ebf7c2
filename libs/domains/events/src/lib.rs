//! Events Domain
//!
//! Storage for the events devices publish and receive, and the batch
//! migrator that copies event history between storage backends. Events
//! are partitioned per (tenant, application) with separate incoming and
//! outgoing sets; both the MongoDB and the Cassandra backend implement
//! the same [`EventStore`] trait, so the migrator works over any
//! source/destination pair.
//!
//! # Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use domain_events::{CassandraEventStore, EventMigrationService, MongoEventStore};
//! use domain_tenancy::{MongoApplicationRepository, MongoTenantRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = database::cassandra::connect(&["127.0.0.1:9042"]).await?;
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("registry");
//!
//! let migration = EventMigrationService::new(
//!     CassandraEventStore::new(session),
//!     MongoEventStore::new(db.clone()),
//!     MongoTenantRepository::new(db.clone()),
//!     MongoApplicationRepository::new(db),
//! );
//! let report = migration.migrate("acme-.*", Utc::now()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cassandra;
pub mod error;
pub mod migration;
pub mod models;
pub mod mongodb;
pub mod store;

// Re-export commonly used types
pub use cassandra::CassandraEventStore;
pub use error::{EventError, EventResult};
pub use migration::{EventMigrationService, MigrationError, MigrationReport, MigrationResult};
pub use models::{Event, EventQuery, EventScope};
pub use mongodb::MongoEventStore;
pub use store::EventStore;

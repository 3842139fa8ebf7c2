//! Events Migrator
//!
//! One-shot tool that copies device events from the legacy Cassandra store
//! into MongoDB, tenant by tenant. Runs to completion and prints a report.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{CassandraEventStore, EventMigrationService, MongoEventStore};
use domain_tenancy::{MongoApplicationRepository, MongoTenantRepository};
use eyre::Result;
use tracing::info;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "events-migrator")]
#[command(about = "Copy device events from Cassandra into MongoDB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy events for matching tenants
    Migrate {
        /// Regular expression matched against the whole tenant domain name
        #[arg(short, long)]
        tenant_filter: String,

        /// Copy events recorded at or after this instant (RFC 3339,
        /// e.g. 2019-09-01T00:00:00Z)
        #[arg(short, long)]
        start_instant: DateTime<Utc>,
    },

    /// Show connectivity status for both stores
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let cli = Cli::parse();

    // Connect to both ends before dispatching
    info!("Connecting to Cassandra at {:?}", config.cassandra.nodes);
    let session = database::cassandra::connect_from_config_with_retry(&config.cassandra, None)
        .await
        .map_err(|e| eyre::eyre!("Cassandra connection failed: {}", e))?;

    let cluster = database::cassandra::get_cluster_info(&session)
        .await
        .map_err(|e| eyre::eyre!("Cassandra cluster query failed: {}", e))?;
    info!(
        "Connected to Cassandra cluster {:?} (release {:?})",
        cluster.cluster_name, cluster.release_version
    );

    info!("Connecting to MongoDB at {}", config.mongodb.url());
    let mongo_client = database::mongodb::connect_from_config_with_retry(&config.mongodb, None)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;
    let db = mongo_client.database(config.mongodb.database());

    match cli.command {
        Commands::Migrate {
            tenant_filter,
            start_instant,
        } => {
            info!(
                "Starting event migration for tenants matching '{}' from {}",
                tenant_filter, start_instant
            );

            database::cassandra::create_keyspace_if_not_exists(&session, &config.keyspace, 1)
                .await
                .map_err(|e| eyre::eyre!("Cassandra keyspace setup failed: {}", e))?;
            database::cassandra::use_keyspace(&session, &config.keyspace)
                .await
                .map_err(|e| eyre::eyre!("Cassandra keyspace selection failed: {}", e))?;

            let source = CassandraEventStore::new(session);
            source
                .ensure_schema()
                .await
                .map_err(|e| eyre::eyre!("Cassandra schema check failed: {}", e))?;

            let destination = MongoEventStore::new(db.clone());
            destination
                .create_indexes()
                .await
                .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;

            let tenants = MongoTenantRepository::new(db.clone());
            let applications = MongoApplicationRepository::new(db);

            let service = EventMigrationService::new(source, destination, tenants, applications);
            let report = service.migrate(&tenant_filter, start_instant).await?;

            info!(
                "Migration complete: {} incoming and {} outgoing events copied across {} tenants",
                report.incoming_events_copied, report.outgoing_events_copied, report.tenants_matched
            );

            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Status => {
            let cassandra_healthy = database::cassandra::check_health(&session).await;
            let mongodb_healthy = database::mongodb::check_health(&mongo_client).await;

            let status = serde_json::json!({
                "cassandra": {
                    "healthy": cassandra_healthy,
                    "cluster_name": cluster.cluster_name,
                    "datacenter": cluster.datacenter,
                    "release_version": cluster.release_version,
                    "keyspace": config.keyspace,
                },
                "mongodb": {
                    "healthy": mongodb_healthy,
                    "database": config.mongodb.database(),
                },
            });

            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}

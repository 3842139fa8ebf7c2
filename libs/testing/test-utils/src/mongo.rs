//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("registry-test");
/// let collection = db.collection::<mongodb::bson::Document>("event_routes");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    ///
    /// Uses the MongoDB 7 image.
    pub async fn new() -> Self {
        let mongo_image = Mongo::default().with_tag("7");

        let container = mongo_image
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to connect to test MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready (Mongo 7)");

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Get a cloned client (useful for passing to repositories)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Get a database handle
    ///
    /// Use a per-test database name so concurrent tests stay isolated.
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let db = mongo.database("test-utils-smoke");
        let collection = db.collection("smoke");

        collection
            .insert_one(doc! { "name": "probe", "value": 1 })
            .await
            .unwrap();

        let found = collection
            .find_one(doc! { "name": "probe" })
            .await
            .unwrap();

        assert!(found.is_some());
        assert_eq!(found.unwrap().get_i32("value").unwrap(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_database_isolation() {
        let mongo = TestMongo::new().await;
        let db1 = mongo.database("isolation-a");
        let db2 = mongo.database("isolation-b");

        db1.collection("devices")
            .insert_one(doc! { "only": "a" })
            .await
            .unwrap();

        let in_b = db2
            .collection::<mongodb::bson::Document>("devices")
            .find_one(doc! { "only": "a" })
            .await
            .unwrap();

        assert!(in_b.is_none());
    }
}

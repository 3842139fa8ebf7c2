use mongodb::Client;

/// Check MongoDB connectivity.
///
/// Backs the `/health/ready` probe of services holding a client.
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}

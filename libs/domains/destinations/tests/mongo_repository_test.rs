//! MongoDB repository tests for the destinations domain
//!
//! These run against a throwaway MongoDB container. Execute with
//! `cargo test -p domain-destinations -- --ignored` when Docker is
//! available.

use domain_destinations::*;
use test_utils::{TestDataBuilder, TestMongo};
use uuid::Uuid;

fn create_input(builder: &TestDataBuilder, suffix: &str) -> CreateRestDestination {
    CreateRestDestination {
        name: builder.name("destination", suffix),
        service_uri: format!("https://hooks.example.com/{}", suffix),
        service_username: Some("svc".to_string()),
        service_password: Some("secret".to_string()),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_destination_roundtrip_and_unique_name() {
    let mongo = TestMongo::new().await;
    let repo = MongoRestDestinationRepository::new(mongo.database("destinations_test"));
    repo.create_indexes().await.unwrap();

    let builder = TestDataBuilder::from_test_name("destination_roundtrip");
    let tenant_id = Uuid::now_v7();

    let created = repo
        .create(tenant_id, create_input(&builder, "main"))
        .await
        .unwrap();
    assert!(created.active);

    let reloaded = repo
        .find_by_guid(tenant_id, created.guid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.name, created.name);
    assert_eq!(reloaded.service_uri, "https://hooks.example.com/main");
    assert_eq!(reloaded.service_username.as_deref(), Some("svc"));
    assert!(repo.exists_by_name(tenant_id, &created.name).await.unwrap());

    // The unique index rejects a second destination with the same name
    let duplicate = repo.create(tenant_id, create_input(&builder, "main")).await;
    assert!(duplicate.is_err());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_destination_update_and_delete() {
    let mongo = TestMongo::new().await;
    let repo = MongoRestDestinationRepository::new(mongo.database("destinations_test"));
    repo.create_indexes().await.unwrap();

    let builder = TestDataBuilder::from_test_name("destination_update_delete");
    let tenant_id = Uuid::now_v7();

    let mut destination = repo
        .create(tenant_id, create_input(&builder, "main"))
        .await
        .unwrap();

    destination.service_uri = "https://hooks.example.com/rotated".to_string();
    destination.active = false;
    assert!(repo.update(&destination).await.unwrap());

    let reloaded = repo
        .find_by_guid(tenant_id, destination.guid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.service_uri, "https://hooks.example.com/rotated");
    assert!(!reloaded.active);

    assert!(repo.delete(tenant_id, destination.guid).await.unwrap());
    assert!(!repo.delete(tenant_id, destination.guid).await.unwrap());
    assert!(
        repo.find_by_guid(tenant_id, destination.guid)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_destinations_are_scoped_to_their_tenant() {
    let mongo = TestMongo::new().await;
    let repo = MongoRestDestinationRepository::new(mongo.database("destinations_test"));
    repo.create_indexes().await.unwrap();

    let builder = TestDataBuilder::from_test_name("destination_scoping");
    let acme = Uuid::now_v7();
    let globex = Uuid::now_v7();

    let destination = repo
        .create(acme, create_input(&builder, "scoped"))
        .await
        .unwrap();

    assert_eq!(repo.find_by_tenant(acme).await.unwrap().len(), 1);
    assert!(repo.find_by_tenant(globex).await.unwrap().is_empty());

    // Cross-tenant lookups by GUID miss
    assert!(
        repo.find_by_guid(globex, destination.guid)
            .await
            .unwrap()
            .is_none()
    );

    // Same destination name under another tenant is allowed
    repo.create(globex, create_input(&builder, "scoped"))
        .await
        .unwrap();
}

//! MongoDB event store tests
//!
//! These run against a throwaway MongoDB container. Execute with
//! `cargo test -p domain-events -- --ignored` when Docker is available.

use chrono::{DateTime, Duration, Utc};
use domain_events::*;
use test_utils::TestMongo;
use uuid::Uuid;

/// BSON datetimes carry millisecond precision, so fixtures are built
/// at millisecond precision to survive the round trip intact.
fn event_at(offset_minutes: i64, device_guid: Uuid, channel: &str) -> Event {
    let instant = Utc::now() + Duration::minutes(offset_minutes);
    let timestamp = DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap();
    Event {
        timestamp,
        ingested_at: timestamp,
        device_guid,
        channel: channel.to_string(),
        payload: serde_json::json!({ "value": offset_minutes }),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_event_roundtrip_with_time_range_and_order() {
    let mongo = TestMongo::new().await;
    let store = MongoEventStore::new(mongo.database("events_test"));
    store.create_indexes().await.unwrap();

    let scope = EventScope::new("acme", "factory");
    let device = Uuid::now_v7();

    let old = event_at(-30, device, "temperature");
    let mid = event_at(-20, device, "temperature");
    let new = event_at(-10, device, "temperature");
    for event in [&old, &mid, &new] {
        store.save_incoming(&scope, event).await.unwrap();
    }

    // Range filter drops the oldest event, order is newest first
    let query = EventQuery::since(mid.timestamp);
    let found = store.find_incoming(&scope, &query).await.unwrap();
    assert_eq!(found, vec![new.clone(), mid.clone()]);

    // Ascending flips the order
    let ascending = EventQuery {
        ascending: true,
        ..EventQuery::since(mid.timestamp)
    };
    let found = store.find_incoming(&scope, &ascending).await.unwrap();
    assert_eq!(found, vec![mid, new.clone()]);

    // Upper bound and limit
    let bounded = EventQuery {
        end: Some(new.timestamp - Duration::minutes(1)),
        ..EventQuery::default()
    };
    let found = store.find_incoming(&scope, &bounded).await.unwrap();
    assert_eq!(found.len(), 2);

    let limited = EventQuery {
        limit: Some(1),
        ..EventQuery::default()
    };
    let found = store.find_incoming(&scope, &limited).await.unwrap();
    assert_eq!(found, vec![new]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_event_directions_and_scopes_are_isolated() {
    let mongo = TestMongo::new().await;
    let store = MongoEventStore::new(mongo.database("events_test"));
    store.create_indexes().await.unwrap();

    let acme = EventScope::new("acme", "factory");
    let globex = EventScope::new("globex", "factory");
    let device = Uuid::now_v7();

    let inbound = event_at(-5, device, "temperature");
    let outbound = event_at(-4, device, "commands");
    store.save_incoming(&acme, &inbound).await.unwrap();
    store.save_outgoing(&acme, &outbound).await.unwrap();

    let query = EventQuery::default();
    assert_eq!(store.find_incoming(&acme, &query).await.unwrap(), vec![inbound]);
    assert_eq!(store.find_outgoing(&acme, &query).await.unwrap(), vec![outbound]);

    // The other tenant's identically named application sees nothing
    assert!(store.find_incoming(&globex, &query).await.unwrap().is_empty());
    assert!(store.find_outgoing(&globex, &query).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_event_device_and_channel_filters() {
    let mongo = TestMongo::new().await;
    let store = MongoEventStore::new(mongo.database("events_test"));
    store.create_indexes().await.unwrap();

    let scope = EventScope::new("acme", "warehouse");
    let thermostat = Uuid::now_v7();
    let hygrometer = Uuid::now_v7();

    store
        .save_incoming(&scope, &event_at(-3, thermostat, "temperature"))
        .await
        .unwrap();
    store
        .save_incoming(&scope, &event_at(-2, hygrometer, "humidity"))
        .await
        .unwrap();

    let by_device = EventQuery {
        device_guid: Some(thermostat),
        ..EventQuery::default()
    };
    let found = store.find_incoming(&scope, &by_device).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].device_guid, thermostat);

    let by_channel = EventQuery {
        channel: Some("humidity".to_string()),
        ..EventQuery::default()
    };
    let found = store.find_incoming(&scope, &by_channel).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].channel, "humidity");
}

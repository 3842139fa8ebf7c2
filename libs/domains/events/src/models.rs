//! Device event models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single device event, incoming or outgoing
///
/// Events are stored per (tenant, application) partition; the entity
/// itself carries only what varies inside one partition. `timestamp` is
/// the instant the device reported, `ingested_at` the instant the
/// platform accepted the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Device-reported instant, also the ordering key
    pub timestamp: DateTime<Utc>,
    /// When the platform accepted the event
    pub ingested_at: DateTime<Utc>,
    /// GUID of the publishing (or receiving) device
    pub device_guid: Uuid,
    /// MQTT channel the event travelled on
    pub channel: String,
    /// Arbitrary JSON payload
    pub payload: serde_json::Value,
}

impl Event {
    pub fn new(
        timestamp: DateTime<Utc>,
        device_guid: Uuid,
        channel: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            timestamp,
            ingested_at: Utc::now(),
            device_guid,
            channel: channel.into(),
            payload,
        }
    }
}

/// The (tenant, application) partition an event operation runs against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventScope {
    pub tenant_domain: String,
    pub application_name: String,
}

impl EventScope {
    pub fn new(tenant_domain: impl Into<String>, application_name: impl Into<String>) -> Self {
        Self {
            tenant_domain: tenant_domain.into(),
            application_name: application_name.into(),
        }
    }
}

/// Filter options for reading events within a scope
///
/// Every bound is optional; the default reads the whole partition newest
/// first.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Restrict to a single device
    pub device_guid: Option<Uuid>,
    /// Restrict to a single channel
    pub channel: Option<String>,
    /// Inclusive lower timestamp bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper timestamp bound
    pub end: Option<DateTime<Utc>>,
    /// Oldest-first when true; default is newest-first
    pub ascending: bool,
    /// Maximum number of events returned
    pub limit: Option<u32>,
}

impl EventQuery {
    /// Everything at or after `start`, newest first, unbounded. The
    /// shape the migrator reads with.
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_stamps_ingestion_time() {
        let reported = Utc::now() - chrono::Duration::minutes(5);
        let event = Event::new(
            reported,
            Uuid::now_v7(),
            "temperature",
            serde_json::json!({ "value": 21.5 }),
        );

        assert_eq!(event.timestamp, reported);
        assert!(event.ingested_at > reported);
    }

    #[test]
    fn test_default_query_is_unbounded_newest_first() {
        let query = EventQuery::default();

        assert!(query.start.is_none());
        assert!(query.end.is_none());
        assert!(query.device_guid.is_none());
        assert!(query.channel.is_none());
        assert!(query.limit.is_none());
        assert!(!query.ascending);
    }

    #[test]
    fn test_since_sets_only_the_lower_bound() {
        let start = Utc::now();
        let query = EventQuery::since(start);

        assert_eq!(query.start, Some(start));
        assert!(query.end.is_none());
        assert!(!query.ascending);
    }
}

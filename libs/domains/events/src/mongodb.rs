//! MongoDB implementation of the event store
//!
//! Incoming and outgoing events live in their own collections. Both
//! timestamps are stored as BSON datetimes so the range filters compare
//! as dates rather than strings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, to_bson};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{Event, EventQuery, EventScope};
use crate::store::EventStore;

pub const INCOMING_COLLECTION: &str = "incoming_events";
pub const OUTGOING_COLLECTION: &str = "outgoing_events";

/// Wire shape of an event document
///
/// Scope fields are denormalized into every document; the datetime
/// serde helpers keep the timestamps as real BSON dates.
#[derive(Debug, Serialize, Deserialize)]
struct EventDocument {
    tenant_domain: String,
    application_name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    timestamp: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    ingested_at: DateTime<Utc>,
    device_guid: Uuid,
    channel: String,
    payload: serde_json::Value,
}

impl EventDocument {
    fn new(scope: &EventScope, event: &Event) -> Self {
        Self {
            tenant_domain: scope.tenant_domain.clone(),
            application_name: scope.application_name.clone(),
            timestamp: event.timestamp,
            ingested_at: event.ingested_at,
            device_guid: event.device_guid,
            channel: event.channel.clone(),
            payload: event.payload.clone(),
        }
    }

    fn into_event(self) -> Event {
        Event {
            timestamp: self.timestamp,
            ingested_at: self.ingested_at,
            device_guid: self.device_guid,
            channel: self.channel,
            payload: self.payload,
        }
    }
}

#[derive(Clone)]
pub struct MongoEventStore {
    incoming: Collection<EventDocument>,
    outgoing: Collection<EventDocument>,
}

impl MongoEventStore {
    pub fn new(db: Database) -> Self {
        Self {
            incoming: db.collection::<EventDocument>(INCOMING_COLLECTION),
            outgoing: db.collection::<EventDocument>(OUTGOING_COLLECTION),
        }
    }

    /// Ensure the partition + timestamp index exists on both collections
    pub async fn create_indexes(&self) -> EventResult<()> {
        let index = || {
            IndexModel::builder()
                .keys(doc! { "tenant_domain": 1, "application_name": 1, "timestamp": -1 })
                .build()
        };
        self.incoming.create_index(index()).await?;
        self.outgoing.create_index(index()).await?;
        Ok(())
    }

    fn to_bson_datetime(dt: DateTime<Utc>) -> Bson {
        Bson::DateTime(mongodb::bson::DateTime::from_millis(dt.timestamp_millis()))
    }

    fn build_filter(scope: &EventScope, query: &EventQuery) -> Document {
        let mut filter = doc! {
            "tenant_domain": &scope.tenant_domain,
            "application_name": &scope.application_name,
        };

        if let Some(device_guid) = query.device_guid {
            filter.insert("device_guid", to_bson(&device_guid).unwrap_or(Bson::Null));
        }

        if let Some(channel) = &query.channel {
            filter.insert("channel", channel);
        }

        let mut timestamp_filter = Document::new();
        if let Some(start) = query.start {
            timestamp_filter.insert("$gte", Self::to_bson_datetime(start));
        }
        if let Some(end) = query.end {
            timestamp_filter.insert("$lte", Self::to_bson_datetime(end));
        }
        if !timestamp_filter.is_empty() {
            filter.insert("timestamp", timestamp_filter);
        }

        filter
    }

    async fn find(
        collection: &Collection<EventDocument>,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        let order = if query.ascending { 1 } else { -1 };
        let mut options = FindOptions::builder()
            .sort(doc! { "timestamp": order })
            .build();
        if let Some(limit) = query.limit {
            options.limit = Some(i64::from(limit));
        }

        let cursor = collection
            .find(Self::build_filter(scope, query))
            .with_options(options)
            .await?;
        let documents: Vec<EventDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(EventDocument::into_event).collect())
    }
}

#[async_trait]
impl EventStore for MongoEventStore {
    #[instrument(skip(self, query), fields(tenant_domain = %scope.tenant_domain, application_name = %scope.application_name))]
    async fn find_incoming(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        Self::find(&self.incoming, scope, query).await
    }

    #[instrument(skip(self, query), fields(tenant_domain = %scope.tenant_domain, application_name = %scope.application_name))]
    async fn find_outgoing(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        Self::find(&self.outgoing, scope, query).await
    }

    #[instrument(skip(self, event), fields(tenant_domain = %scope.tenant_domain, device_guid = %event.device_guid))]
    async fn save_incoming(&self, scope: &EventScope, event: &Event) -> EventResult<()> {
        self.incoming
            .insert_one(EventDocument::new(scope, event))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, event), fields(tenant_domain = %scope.tenant_domain, device_guid = %event.device_guid))]
    async fn save_outgoing(&self, scope: &EventScope, event: &Event) -> EventResult<()> {
        self.outgoing
            .insert_one(EventDocument::new(scope, event))
            .await?;
        Ok(())
    }
}

//! Cassandra implementation of the event store
//!
//! The legacy layout: one table per direction, partitioned by
//! (tenant_domain, application_name) and clustered newest-first on the
//! event timestamp. Payloads are stored as JSON text. Statements are
//! assembled dynamically because every query bound is optional;
//! non-key filters (device, channel) require ALLOW FILTERING on this
//! schema, same as the original deployment ran with.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::cassandra::CassandraSession;
use scylla::value::{CqlTimestamp, CqlValue};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventQuery, EventScope};
use crate::store::EventStore;

pub const INCOMING_TABLE: &str = "incoming_events";
pub const OUTGOING_TABLE: &str = "outgoing_events";

pub struct CassandraEventStore {
    session: CassandraSession,
}

impl CassandraEventStore {
    pub fn new(session: CassandraSession) -> Self {
        Self { session }
    }

    /// Create both event tables if they do not exist
    pub async fn ensure_schema(&self) -> EventResult<()> {
        for table in [INCOMING_TABLE, OUTGOING_TABLE] {
            let cql = format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    tenant_domain text,
                    application_name text,
                    timestamp timestamp,
                    device_guid uuid,
                    channel text,
                    ingested_at timestamp,
                    payload text,
                    PRIMARY KEY ((tenant_domain, application_name), timestamp, device_guid)
                ) WITH CLUSTERING ORDER BY (timestamp DESC, device_guid ASC)"
            );
            self.session.query_unpaged(cql, &[]).await?;
        }
        Ok(())
    }

    fn cql_timestamp(dt: DateTime<Utc>) -> CqlValue {
        CqlValue::Timestamp(CqlTimestamp(dt.timestamp_millis()))
    }

    /// Assemble the SELECT for one direction table from the optional
    /// query bounds
    fn select_statement(
        table: &str,
        scope: &EventScope,
        query: &EventQuery,
    ) -> (String, Vec<CqlValue>) {
        let mut cql = format!(
            "SELECT timestamp, ingested_at, device_guid, channel, payload \
             FROM {table} WHERE tenant_domain = ? AND application_name = ?"
        );
        let mut values = vec![
            CqlValue::Text(scope.tenant_domain.clone()),
            CqlValue::Text(scope.application_name.clone()),
        ];

        if let Some(start) = query.start {
            cql.push_str(" AND timestamp >= ?");
            values.push(Self::cql_timestamp(start));
        }
        if let Some(end) = query.end {
            cql.push_str(" AND timestamp <= ?");
            values.push(Self::cql_timestamp(end));
        }

        let mut filtering = false;
        if let Some(device_guid) = query.device_guid {
            cql.push_str(" AND device_guid = ?");
            values.push(CqlValue::Uuid(device_guid));
            filtering = true;
        }
        if let Some(channel) = &query.channel {
            cql.push_str(" AND channel = ?");
            values.push(CqlValue::Text(channel.clone()));
            filtering = true;
        }

        cql.push_str(if query.ascending {
            " ORDER BY timestamp ASC"
        } else {
            " ORDER BY timestamp DESC"
        });

        if let Some(limit) = query.limit {
            cql.push_str(" LIMIT ?");
            values.push(CqlValue::Int(limit as i32));
        }

        if filtering {
            cql.push_str(" ALLOW FILTERING");
        }

        (cql, values)
    }

    async fn find(
        &self,
        table: &str,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        let (cql, values) = Self::select_statement(table, scope, query);
        let result = self.session.query_unpaged(cql, values).await?;

        let rows_result = result
            .into_rows_result()
            .map_err(|e| EventError::Store(e.to_string()))?;
        let rows = rows_result
            .rows::<(DateTime<Utc>, DateTime<Utc>, Uuid, String, String)>()
            .map_err(|e| EventError::Store(e.to_string()))?;

        let mut events = Vec::new();
        for row in rows {
            let (timestamp, ingested_at, device_guid, channel, payload) =
                row.map_err(|e| EventError::Store(e.to_string()))?;
            events.push(Event {
                timestamp,
                ingested_at,
                device_guid,
                channel,
                payload: serde_json::from_str(&payload)?,
            });
        }
        Ok(events)
    }

    async fn save(&self, table: &str, scope: &EventScope, event: &Event) -> EventResult<()> {
        let cql = format!(
            "INSERT INTO {table} \
             (tenant_domain, application_name, timestamp, device_guid, channel, ingested_at, payload) \
             VALUES (?, ?, ?, ?, ?, ?, ?)"
        );
        let values = vec![
            CqlValue::Text(scope.tenant_domain.clone()),
            CqlValue::Text(scope.application_name.clone()),
            Self::cql_timestamp(event.timestamp),
            CqlValue::Uuid(event.device_guid),
            CqlValue::Text(event.channel.clone()),
            Self::cql_timestamp(event.ingested_at),
            CqlValue::Text(serde_json::to_string(&event.payload)?),
        ];

        self.session.query_unpaged(cql, values).await?;
        Ok(())
    }
}

#[async_trait]
impl EventStore for CassandraEventStore {
    #[instrument(skip(self, query), fields(tenant_domain = %scope.tenant_domain, application_name = %scope.application_name))]
    async fn find_incoming(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        self.find(INCOMING_TABLE, scope, query).await
    }

    #[instrument(skip(self, query), fields(tenant_domain = %scope.tenant_domain, application_name = %scope.application_name))]
    async fn find_outgoing(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>> {
        self.find(OUTGOING_TABLE, scope, query).await
    }

    #[instrument(skip(self, event), fields(tenant_domain = %scope.tenant_domain, device_guid = %event.device_guid))]
    async fn save_incoming(&self, scope: &EventScope, event: &Event) -> EventResult<()> {
        self.save(INCOMING_TABLE, scope, event).await
    }

    #[instrument(skip(self, event), fields(tenant_domain = %scope.tenant_domain, device_guid = %event.device_guid))]
    async fn save_outgoing(&self, scope: &EventScope, event: &Event) -> EventResult<()> {
        self.save(OUTGOING_TABLE, scope, event).await
    }
}

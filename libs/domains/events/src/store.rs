//! Event store trait
//!
//! One implementation per backend (MongoDB, Cassandra); the migrator
//! moves events between any two of them. Incoming and outgoing events
//! live in separate collections/tables, so the trait keeps separate
//! methods per direction rather than a direction argument leaking into
//! storage keys.

use async_trait::async_trait;

use crate::error::EventResult;
use crate::models::{Event, EventQuery, EventScope};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Read incoming events in a scope, filtered and ordered by `query`
    async fn find_incoming(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>>;

    /// Read outgoing events in a scope, filtered and ordered by `query`
    async fn find_outgoing(
        &self,
        scope: &EventScope,
        query: &EventQuery,
    ) -> EventResult<Vec<Event>>;

    /// Persist one incoming event into a scope
    async fn save_incoming(&self, scope: &EventScope, event: &Event) -> EventResult<()>;

    /// Persist one outgoing event into a scope
    async fn save_outgoing(&self, scope: &EventScope, event: &Event) -> EventResult<()>;
}

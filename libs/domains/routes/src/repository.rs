use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RouteResult;
use crate::models::EventRoute;

/// Repository trait for EventRoute persistence
///
/// Unlike the simpler domains, routes are fully constructed by the
/// service (actors and transformation resolved first), so create takes
/// the finished entity rather than a DTO.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRouteRepository: Send + Sync {
    /// List a tenant's routes
    async fn find_by_tenant(&self, tenant_id: Uuid) -> RouteResult<Vec<EventRoute>>;

    /// Look a route up by tenant and GUID
    async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<Option<EventRoute>>;

    /// Persist a freshly built route
    async fn create(&self, route: &EventRoute) -> RouteResult<()>;

    /// Replace a stored route; returns false when it no longer exists
    async fn update(&self, route: &EventRoute) -> RouteResult<bool>;

    /// Delete a route; returns false when it did not exist
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<bool>;

    /// Check if a route name is taken within a tenant
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> RouteResult<bool>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DestinationResult;
use crate::models::{CreateRestDestination, RestDestination};

/// Repository trait for RestDestination persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestDestinationRepository: Send + Sync {
    /// List a tenant's REST destinations
    async fn find_by_tenant(&self, tenant_id: Uuid) -> DestinationResult<Vec<RestDestination>>;

    /// Look a destination up by tenant and GUID
    async fn find_by_guid(
        &self,
        tenant_id: Uuid,
        guid: Uuid,
    ) -> DestinationResult<Option<RestDestination>>;

    /// Register a destination under a tenant
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateRestDestination,
    ) -> DestinationResult<RestDestination>;

    /// Replace a stored destination; returns false when it no longer exists
    async fn update(&self, destination: &RestDestination) -> DestinationResult<bool>;

    /// Delete a destination; returns false when it did not exist
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DestinationResult<bool>;

    /// Check if a destination name is taken within a tenant
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> DestinationResult<bool>;
}

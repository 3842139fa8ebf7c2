use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TransformationResult;
use crate::models::{CreateTransformation, Transformation};

/// Repository trait for Transformation persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransformationRepository: Send + Sync {
    /// List a tenant's transformations
    async fn find_by_tenant(&self, tenant_id: Uuid) -> TransformationResult<Vec<Transformation>>;

    /// Look a transformation up by tenant and GUID
    async fn find_by_guid(
        &self,
        tenant_id: Uuid,
        guid: Uuid,
    ) -> TransformationResult<Option<Transformation>>;

    /// Create a transformation under a tenant
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateTransformation,
    ) -> TransformationResult<Transformation>;

    /// Replace a stored transformation; returns false when it no longer exists
    async fn update(&self, transformation: &Transformation) -> TransformationResult<bool>;

    /// Delete a transformation; returns false when it did not exist
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> TransformationResult<bool>;

    /// Check if a transformation name is taken within a tenant
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> TransformationResult<bool>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{ApplicationResult, TenantResult};
use crate::models::{Application, CreateApplication, CreateTenant, Tenant};

/// Repository trait for Tenant persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// List all tenants
    async fn find_all(&self) -> TenantResult<Vec<Tenant>>;

    /// Look a tenant up by its unique domain name
    async fn find_by_domain_name(&self, domain_name: &str) -> TenantResult<Option<Tenant>>;

    /// Register a new tenant
    async fn create(&self, input: CreateTenant) -> TenantResult<Tenant>;

    /// Check if a domain name is taken
    async fn exists_by_domain_name(&self, domain_name: &str) -> TenantResult<bool>;
}

/// Repository trait for Application persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// List a tenant's applications
    async fn find_by_tenant(&self, tenant_id: Uuid) -> ApplicationResult<Vec<Application>>;

    /// Look an application up by tenant and name
    async fn find_by_name(
        &self,
        tenant_id: Uuid,
        name: &str,
    ) -> ApplicationResult<Option<Application>>;

    /// Create an application under a tenant
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateApplication,
    ) -> ApplicationResult<Application>;

    /// Check if an application name is taken within a tenant
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> ApplicationResult<bool>;
}

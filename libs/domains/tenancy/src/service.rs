//! Tenancy services - business logic for tenants and applications

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{
    ApplicationError, ApplicationResult, TenantError, TenantResult,
};
use crate::models::{Application, CreateApplication, CreateTenant, Tenant};
use crate::repository::{ApplicationRepository, TenantRepository};

/// Tenant service providing registration and lookup
pub struct TenantService<R: TenantRepository> {
    repository: Arc<R>,
}

impl<R: TenantRepository> TenantService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_tenants(&self) -> TenantResult<Vec<Tenant>> {
        self.repository.find_all().await
    }

    /// Resolve a tenant by domain name; the middleware depends on this.
    #[instrument(skip(self))]
    pub async fn get_tenant_by_domain(&self, domain_name: &str) -> TenantResult<Tenant> {
        self.repository
            .find_by_domain_name(domain_name)
            .await?
            .ok_or_else(|| TenantError::NotFound(domain_name.to_string()))
    }

    #[instrument(skip(self, input), fields(domain_name = %input.domain_name))]
    pub async fn create_tenant(&self, input: CreateTenant) -> TenantResult<Tenant> {
        input
            .validate()
            .map_err(|e| TenantError::Validation(e.to_string()))?;

        if self
            .repository
            .exists_by_domain_name(&input.domain_name)
            .await?
        {
            return Err(TenantError::DuplicateDomain(input.domain_name));
        }

        self.repository.create(input).await
    }
}

impl<R: TenantRepository> Clone for TenantService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Application service scoped to a tenant taken from the request context
pub struct ApplicationService<R: ApplicationRepository> {
    repository: Arc<R>,
}

impl<R: ApplicationRepository> ApplicationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn list_applications(&self, tenant: &Tenant) -> ApplicationResult<Vec<Application>> {
        self.repository.find_by_tenant(tenant.id).await
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn get_application(
        &self,
        tenant: &Tenant,
        name: &str,
    ) -> ApplicationResult<Application> {
        self.repository
            .find_by_name(tenant.id, name)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(name.to_string()))
    }

    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name, application_name = %input.name))]
    pub async fn create_application(
        &self,
        tenant: &Tenant,
        input: CreateApplication,
    ) -> ApplicationResult<Application> {
        input
            .validate()
            .map_err(|e| ApplicationError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(tenant.id, &input.name).await? {
            return Err(ApplicationError::DuplicateName(input.name));
        }

        self.repository.create(tenant.id, input).await
    }
}

impl<R: ApplicationRepository> Clone for ApplicationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

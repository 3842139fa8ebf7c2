//! REST destination service - lifecycle of outgoing HTTP endpoints

use chrono::Utc;
use domain_tenancy::Tenant;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{DestinationError, DestinationResult};
use crate::models::{CreateRestDestination, RestDestination, UpdateRestDestination};
use crate::repository::RestDestinationRepository;

pub struct RestDestinationService<R: RestDestinationRepository> {
    repository: Arc<R>,
}

impl<R: RestDestinationRepository> RestDestinationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn list_destinations(
        &self,
        tenant: &Tenant,
    ) -> DestinationResult<Vec<RestDestination>> {
        self.repository.find_by_tenant(tenant.id).await
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn get_destination(
        &self,
        tenant: &Tenant,
        guid: Uuid,
    ) -> DestinationResult<RestDestination> {
        self.repository
            .find_by_guid(tenant.id, guid)
            .await?
            .ok_or(DestinationError::NotFound(guid))
    }

    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name, name = %input.name))]
    pub async fn create_destination(
        &self,
        tenant: &Tenant,
        input: CreateRestDestination,
    ) -> DestinationResult<RestDestination> {
        input
            .validate()
            .map_err(|e| DestinationError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(tenant.id, &input.name).await? {
            return Err(DestinationError::DuplicateName(input.name));
        }

        self.repository.create(tenant.id, input).await
    }

    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name))]
    pub async fn update_destination(
        &self,
        tenant: &Tenant,
        guid: Uuid,
        input: UpdateRestDestination,
    ) -> DestinationResult<RestDestination> {
        input
            .validate()
            .map_err(|e| DestinationError::Validation(e.to_string()))?;

        let mut destination = self.get_destination(tenant, guid).await?;

        if input.name != destination.name
            && self.repository.exists_by_name(tenant.id, &input.name).await?
        {
            return Err(DestinationError::DuplicateName(input.name));
        }

        destination.name = input.name;
        destination.service_uri = input.service_uri;
        destination.service_username = input.service_username;
        destination.service_password = input.service_password;
        destination.active = input.active;
        destination.updated_at = Utc::now();

        if !self.repository.update(&destination).await? {
            return Err(DestinationError::NotFound(guid));
        }
        Ok(destination)
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn remove_destination(&self, tenant: &Tenant, guid: Uuid) -> DestinationResult<()> {
        if !self.repository.delete(tenant.id, guid).await? {
            return Err(DestinationError::NotFound(guid));
        }
        Ok(())
    }
}

impl<R: RestDestinationRepository> Clone for RestDestinationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

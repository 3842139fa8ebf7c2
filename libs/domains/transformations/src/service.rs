//! Transformation service - business logic for step pipelines

use chrono::Utc;
use domain_tenancy::Tenant;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TransformationError, TransformationResult};
use crate::models::{CreateTransformation, Transformation, UpdateTransformation};
use crate::repository::TransformationRepository;

pub struct TransformationService<R: TransformationRepository> {
    repository: Arc<R>,
}

impl<R: TransformationRepository> TransformationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn list_transformations(
        &self,
        tenant: &Tenant,
    ) -> TransformationResult<Vec<Transformation>> {
        self.repository.find_by_tenant(tenant.id).await
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn get_transformation(
        &self,
        tenant: &Tenant,
        guid: Uuid,
    ) -> TransformationResult<Transformation> {
        self.repository
            .find_by_guid(tenant.id, guid)
            .await?
            .ok_or(TransformationError::NotFound(guid))
    }

    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name, name = %input.name))]
    pub async fn create_transformation(
        &self,
        tenant: &Tenant,
        input: CreateTransformation,
    ) -> TransformationResult<Transformation> {
        input
            .validate()
            .map_err(|e| TransformationError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(tenant.id, &input.name).await? {
            return Err(TransformationError::DuplicateName(input.name));
        }

        self.repository.create(tenant.id, input).await
    }

    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name))]
    pub async fn update_transformation(
        &self,
        tenant: &Tenant,
        guid: Uuid,
        input: UpdateTransformation,
    ) -> TransformationResult<Transformation> {
        input
            .validate()
            .map_err(|e| TransformationError::Validation(e.to_string()))?;

        let mut transformation = self.get_transformation(tenant, guid).await?;

        // Renames must not collide with another pipeline
        if input.name != transformation.name
            && self.repository.exists_by_name(tenant.id, &input.name).await?
        {
            return Err(TransformationError::DuplicateName(input.name));
        }

        transformation.name = input.name;
        transformation.description = input.description;
        transformation.steps = input.steps;
        transformation.updated_at = Utc::now();

        if !self.repository.update(&transformation).await? {
            return Err(TransformationError::NotFound(guid));
        }
        Ok(transformation)
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn remove_transformation(
        &self,
        tenant: &Tenant,
        guid: Uuid,
    ) -> TransformationResult<()> {
        if !self.repository.delete(tenant.id, guid).await? {
            return Err(TransformationError::NotFound(guid));
        }
        Ok(())
    }
}

impl<R: TransformationRepository> Clone for TransformationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

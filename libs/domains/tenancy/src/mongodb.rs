//! MongoDB implementations of the tenancy repositories

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ApplicationResult, TenantResult};
use crate::models::{Application, CreateApplication, CreateTenant, Tenant};
use crate::repository::{ApplicationRepository, TenantRepository};

/// MongoDB implementation of the TenantRepository
pub struct MongoTenantRepository {
    collection: Collection<Tenant>,
}

impl MongoTenantRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Tenant>("tenants");
        Self { collection }
    }

    /// Ensure the unique domain name index exists
    pub async fn create_indexes(&self) -> TenantResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "domain_name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for MongoTenantRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> TenantResult<Vec<Tenant>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "domain_name": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let tenants: Vec<Tenant> = cursor.try_collect().await?;

        Ok(tenants)
    }

    #[instrument(skip(self))]
    async fn find_by_domain_name(&self, domain_name: &str) -> TenantResult<Option<Tenant>> {
        let tenant = self
            .collection
            .find_one(doc! { "domain_name": domain_name })
            .await?;
        Ok(tenant)
    }

    #[instrument(skip(self, input), fields(domain_name = %input.domain_name))]
    async fn create(&self, input: CreateTenant) -> TenantResult<Tenant> {
        let tenant = Tenant::new(input);

        self.collection.insert_one(&tenant).await?;

        tracing::info!(tenant_id = %tenant.id, domain_name = %tenant.domain_name, "Tenant created");
        Ok(tenant)
    }

    #[instrument(skip(self))]
    async fn exists_by_domain_name(&self, domain_name: &str) -> TenantResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "domain_name": domain_name })
            .await?;
        Ok(count > 0)
    }
}

/// MongoDB implementation of the ApplicationRepository
pub struct MongoApplicationRepository {
    collection: Collection<Application>,
}

impl MongoApplicationRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Application>("applications");
        Self { collection }
    }

    /// Ensure the per-tenant unique name index exists
    pub async fn create_indexes(&self) -> ApplicationResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "tenant_id": 1, "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    fn tenant_filter(tenant_id: Uuid) -> mongodb::bson::Document {
        doc! { "tenant_id": to_bson(&tenant_id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ApplicationRepository for MongoApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_tenant(&self, tenant_id: Uuid) -> ApplicationResult<Vec<Application>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "name": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::tenant_filter(tenant_id))
            .with_options(options)
            .await?;
        let applications: Vec<Application> = cursor.try_collect().await?;

        Ok(applications)
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        tenant_id: Uuid,
        name: &str,
    ) -> ApplicationResult<Option<Application>> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("name", name);

        let application = self.collection.find_one(filter).await?;
        Ok(application)
    }

    #[instrument(skip(self, input), fields(application_name = %input.name))]
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateApplication,
    ) -> ApplicationResult<Application> {
        let application = Application::new(tenant_id, input);

        self.collection.insert_one(&application).await?;

        tracing::info!(application_id = %application.id, "Application created");
        Ok(application)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> ApplicationResult<bool> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("name", name);

        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}

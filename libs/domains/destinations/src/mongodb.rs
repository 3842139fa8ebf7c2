//! MongoDB implementation of the REST destination repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::DestinationResult;
use crate::models::{CreateRestDestination, RestDestination};
use crate::repository::RestDestinationRepository;

pub struct MongoRestDestinationRepository {
    collection: Collection<RestDestination>,
}

impl MongoRestDestinationRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<RestDestination>("rest_destinations");
        Self { collection }
    }

    /// Ensure the per-tenant unique name index exists
    pub async fn create_indexes(&self) -> DestinationResult<()> {
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

    fn guid_filter(tenant_id: Uuid, guid: Uuid) -> mongodb::bson::Document {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("_id", to_bson(&guid).unwrap_or(Bson::Null));
        filter
    }
}

#[async_trait]
impl RestDestinationRepository for MongoRestDestinationRepository {
    #[instrument(skip(self))]
    async fn find_by_tenant(&self, tenant_id: Uuid) -> DestinationResult<Vec<RestDestination>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "name": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::tenant_filter(tenant_id))
            .with_options(options)
            .await?;
        let destinations: Vec<RestDestination> = cursor.try_collect().await?;

        Ok(destinations)
    }

    #[instrument(skip(self))]
    async fn find_by_guid(
        &self,
        tenant_id: Uuid,
        guid: Uuid,
    ) -> DestinationResult<Option<RestDestination>> {
        let destination = self
            .collection
            .find_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(destination)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateRestDestination,
    ) -> DestinationResult<RestDestination> {
        let destination = RestDestination::new(tenant_id, input);

        self.collection.insert_one(&destination).await?;

        tracing::info!(destination_guid = %destination.guid, "REST destination created");
        Ok(destination)
    }

    #[instrument(skip(self, destination), fields(destination_guid = %destination.guid))]
    async fn update(&self, destination: &RestDestination) -> DestinationResult<bool> {
        let result = self
            .collection
            .replace_one(
                Self::guid_filter(destination.tenant_id, destination.guid),
                destination,
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DestinationResult<bool> {
        let result = self
            .collection
            .delete_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> DestinationResult<bool> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("name", name);

        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}

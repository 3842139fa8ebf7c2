//! MongoDB implementation of the transformation repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::TransformationResult;
use crate::models::{CreateTransformation, Transformation};
use crate::repository::TransformationRepository;

pub struct MongoTransformationRepository {
    collection: Collection<Transformation>,
}

impl MongoTransformationRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Transformation>("transformations");
        Self { collection }
    }

    /// Ensure the per-tenant unique name index exists
    pub async fn create_indexes(&self) -> TransformationResult<()> {
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
impl TransformationRepository for MongoTransformationRepository {
    #[instrument(skip(self))]
    async fn find_by_tenant(&self, tenant_id: Uuid) -> TransformationResult<Vec<Transformation>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "name": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::tenant_filter(tenant_id))
            .with_options(options)
            .await?;
        let transformations: Vec<Transformation> = cursor.try_collect().await?;

        Ok(transformations)
    }

    #[instrument(skip(self))]
    async fn find_by_guid(
        &self,
        tenant_id: Uuid,
        guid: Uuid,
    ) -> TransformationResult<Option<Transformation>> {
        let transformation = self
            .collection
            .find_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(transformation)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateTransformation,
    ) -> TransformationResult<Transformation> {
        let transformation = Transformation::new(tenant_id, input);

        self.collection.insert_one(&transformation).await?;

        tracing::info!(
            transformation_guid = %transformation.guid,
            steps = transformation.steps.len(),
            "Transformation created"
        );
        Ok(transformation)
    }

    #[instrument(skip(self, transformation), fields(transformation_guid = %transformation.guid))]
    async fn update(&self, transformation: &Transformation) -> TransformationResult<bool> {
        let result = self
            .collection
            .replace_one(
                Self::guid_filter(transformation.tenant_id, transformation.guid),
                transformation,
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> TransformationResult<bool> {
        let result = self
            .collection
            .delete_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> TransformationResult<bool> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("name", name);

        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}

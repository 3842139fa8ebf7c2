//! MongoDB implementation of the event route repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::RouteResult;
use crate::models::EventRoute;
use crate::repository::EventRouteRepository;

pub struct MongoEventRouteRepository {
    collection: Collection<EventRoute>,
}

impl MongoEventRouteRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<EventRoute>("event_routes");
        Self { collection }
    }

    /// Ensure the per-tenant unique route name index exists
    pub async fn create_indexes(&self) -> RouteResult<()> {
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
impl EventRouteRepository for MongoEventRouteRepository {
    #[instrument(skip(self))]
    async fn find_by_tenant(&self, tenant_id: Uuid) -> RouteResult<Vec<EventRoute>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "name": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::tenant_filter(tenant_id))
            .with_options(options)
            .await?;
        let routes: Vec<EventRoute> = cursor.try_collect().await?;

        Ok(routes)
    }

    #[instrument(skip(self))]
    async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<Option<EventRoute>> {
        let route = self
            .collection
            .find_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(route)
    }

    #[instrument(skip(self, route), fields(route_name = %route.name))]
    async fn create(&self, route: &EventRoute) -> RouteResult<()> {
        self.collection.insert_one(route).await?;

        tracing::info!(route_guid = %route.guid, route_name = %route.name, "Event route stored");
        Ok(())
    }

    #[instrument(skip(self, route), fields(route_guid = %route.guid))]
    async fn update(&self, route: &EventRoute) -> RouteResult<bool> {
        let result = self
            .collection
            .replace_one(Self::guid_filter(route.tenant_id, route.guid), route)
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<bool> {
        let result = self
            .collection
            .delete_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> RouteResult<bool> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("name", name);

        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}

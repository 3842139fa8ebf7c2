//! MongoDB implementation of the device repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::DeviceResult;
use crate::models::{Device, RegisterDevice};
use crate::repository::DeviceRepository;

pub struct MongoDeviceRepository {
    collection: Collection<Device>,
}

impl MongoDeviceRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Device>("devices");
        Self { collection }
    }

    /// Ensure the per-tenant unique device_id index exists
    pub async fn create_indexes(&self) -> DeviceResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "tenant_id": 1, "device_id": 1 })
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
impl DeviceRepository for MongoDeviceRepository {
    #[instrument(skip(self))]
    async fn find_by_tenant(&self, tenant_id: Uuid) -> DeviceResult<Vec<Device>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "device_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::tenant_filter(tenant_id))
            .with_options(options)
            .await?;
        let devices: Vec<Device> = cursor.try_collect().await?;

        Ok(devices)
    }

    #[instrument(skip(self))]
    async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<Option<Device>> {
        let device = self
            .collection
            .find_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(device)
    }

    #[instrument(skip(self, input), fields(device_id = %input.device_id))]
    async fn create(&self, tenant_id: Uuid, input: RegisterDevice) -> DeviceResult<Device> {
        let device = Device::new(tenant_id, input);

        self.collection.insert_one(&device).await?;

        tracing::info!(device_guid = %device.guid, device_id = %device.device_id, "Device registered");
        Ok(device)
    }

    #[instrument(skip(self, device), fields(device_guid = %device.guid))]
    async fn update(&self, device: &Device) -> DeviceResult<bool> {
        let result = self
            .collection
            .replace_one(Self::guid_filter(device.tenant_id, device.guid), device)
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<bool> {
        let result = self
            .collection
            .delete_one(Self::guid_filter(tenant_id, guid))
            .await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_device_id(&self, tenant_id: Uuid, device_id: &str) -> DeviceResult<bool> {
        let mut filter = Self::tenant_filter(tenant_id);
        filter.insert("device_id", device_id);

        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}

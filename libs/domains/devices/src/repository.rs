use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DeviceResult;
use crate::models::{Device, RegisterDevice};

/// Repository trait for Device persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// List a tenant's devices
    async fn find_by_tenant(&self, tenant_id: Uuid) -> DeviceResult<Vec<Device>>;

    /// Look a device up by tenant and GUID
    async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<Option<Device>>;

    /// Register a new device under a tenant
    async fn create(&self, tenant_id: Uuid, input: RegisterDevice) -> DeviceResult<Device>;

    /// Replace a stored device; returns false when it no longer exists
    async fn update(&self, device: &Device) -> DeviceResult<bool>;

    /// Delete a device; returns false when it did not exist
    async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<bool>;

    /// Check if a device ID is taken within a tenant
    async fn exists_by_device_id(&self, tenant_id: Uuid, device_id: &str) -> DeviceResult<bool>;
}

//! Device service - registration and lifecycle of tenant devices

use chrono::Utc;
use domain_tenancy::Tenant;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{DeviceError, DeviceResult};
use crate::models::{Device, RegisterDevice, UpdateDevice};
use crate::repository::DeviceRepository;

pub struct DeviceService<R: DeviceRepository> {
    repository: Arc<R>,
}

impl<R: DeviceRepository> DeviceService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn list_devices(&self, tenant: &Tenant) -> DeviceResult<Vec<Device>> {
        self.repository.find_by_tenant(tenant.id).await
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn get_device(&self, tenant: &Tenant, guid: Uuid) -> DeviceResult<Device> {
        self.repository
            .find_by_guid(tenant.id, guid)
            .await?
            .ok_or(DeviceError::NotFound(guid))
    }

    /// Register a new device; it comes up active with a generated GUID
    /// and API key.
    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name, device_id = %input.device_id))]
    pub async fn register_device(
        &self,
        tenant: &Tenant,
        input: RegisterDevice,
    ) -> DeviceResult<Device> {
        input
            .validate()
            .map_err(|e| DeviceError::Validation(e.to_string()))?;

        if self
            .repository
            .exists_by_device_id(tenant.id, &input.device_id)
            .await?
        {
            return Err(DeviceError::DuplicateDeviceId(input.device_id));
        }

        self.repository.create(tenant.id, input).await
    }

    /// Update a device's display fields. The device ID, GUID and API key
    /// never change after registration.
    #[instrument(skip(self, tenant, input), fields(tenant_domain = %tenant.domain_name))]
    pub async fn update_device(
        &self,
        tenant: &Tenant,
        guid: Uuid,
        input: UpdateDevice,
    ) -> DeviceResult<Device> {
        input
            .validate()
            .map_err(|e| DeviceError::Validation(e.to_string()))?;

        let mut device = self.get_device(tenant, guid).await?;
        device.name = input.name;
        device.description = input.description;
        device.updated_at = Utc::now();

        if !self.repository.update(&device).await? {
            return Err(DeviceError::NotFound(guid));
        }
        Ok(device)
    }

    /// Toggle a device between active and inactive
    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn switch_activation(&self, tenant: &Tenant, guid: Uuid) -> DeviceResult<Device> {
        let mut device = self.get_device(tenant, guid).await?;
        device.active = !device.active;
        device.updated_at = Utc::now();

        if !self.repository.update(&device).await? {
            return Err(DeviceError::NotFound(guid));
        }

        tracing::info!(device_guid = %device.guid, active = device.active, "Device activation switched");
        Ok(device)
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn remove_device(&self, tenant: &Tenant, guid: Uuid) -> DeviceResult<()> {
        if !self.repository.delete(tenant.id, guid).await? {
            return Err(DeviceError::NotFound(guid));
        }
        Ok(())
    }
}

impl<R: DeviceRepository> Clone for DeviceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDeviceRepository;
    use domain_tenancy::CreateTenant;

    fn sample_tenant() -> Tenant {
        Tenant::new(CreateTenant {
            name: "Acme".to_string(),
            domain_name: "acme".to_string(),
        })
    }

    fn register_input(device_id: &str) -> RegisterDevice {
        RegisterDevice {
            device_id: device_id.to_string(),
            name: "Thermostat".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_device_rejects_taken_device_id() {
        let tenant = sample_tenant();

        let mut mock_repo = MockDeviceRepository::new();
        mock_repo
            .expect_exists_by_device_id()
            .returning(|_, _| Ok(true));

        let service = DeviceService::new(mock_repo);
        let result = service
            .register_device(&tenant, register_input("sensor-01"))
            .await;

        assert!(matches!(result, Err(DeviceError::DuplicateDeviceId(id)) if id == "sensor-01"));
    }

    #[tokio::test]
    async fn test_register_device_rejects_invalid_device_id() {
        // Validation fails before the repository is consulted.
        let service = DeviceService::new(MockDeviceRepository::new());
        let result = service
            .register_device(&sample_tenant(), register_input("not a device id"))
            .await;

        assert!(matches!(result, Err(DeviceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_device_not_found() {
        let mut mock_repo = MockDeviceRepository::new();
        mock_repo.expect_find_by_guid().returning(|_, _| Ok(None));

        let service = DeviceService::new(mock_repo);
        let guid = Uuid::now_v7();
        let result = service.get_device(&sample_tenant(), guid).await;

        assert!(matches!(result, Err(DeviceError::NotFound(g)) if g == guid));
    }

    #[tokio::test]
    async fn test_switch_activation_toggles_flag() {
        let tenant = sample_tenant();
        let device = Device::new(tenant.id, register_input("sensor-01"));
        let guid = device.guid;
        assert!(device.active);

        let mut mock_repo = MockDeviceRepository::new();
        let stored = device.clone();
        mock_repo
            .expect_find_by_guid()
            .returning(move |_, _| Ok(Some(stored.clone())));
        mock_repo
            .expect_update()
            .withf(|device| !device.active)
            .returning(|_| Ok(true));

        let service = DeviceService::new(mock_repo);
        let updated = service.switch_activation(&tenant, guid).await.unwrap();

        assert!(!updated.active);
    }

    #[tokio::test]
    async fn test_remove_device_not_found() {
        let mut mock_repo = MockDeviceRepository::new();
        mock_repo.expect_delete().returning(|_, _| Ok(false));

        let service = DeviceService::new(mock_repo);
        let guid = Uuid::now_v7();
        let result = service.remove_device(&sample_tenant(), guid).await;

        assert!(matches!(result, Err(DeviceError::NotFound(g)) if g == guid));
    }

    #[tokio::test]
    async fn test_update_device_keeps_identity_fields() {
        let tenant = sample_tenant();
        let device = Device::new(tenant.id, register_input("sensor-01"));
        let guid = device.guid;
        let api_key = device.api_key.clone();

        let mut mock_repo = MockDeviceRepository::new();
        let stored = device.clone();
        mock_repo
            .expect_find_by_guid()
            .returning(move |_, _| Ok(Some(stored.clone())));
        mock_repo.expect_update().returning(|_| Ok(true));

        let service = DeviceService::new(mock_repo);
        let updated = service
            .update_device(
                &tenant,
                guid,
                UpdateDevice {
                    name: "Thermostat v2".to_string(),
                    description: "replaced".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Thermostat v2");
        assert_eq!(updated.device_id, "sensor-01");
        assert_eq!(updated.api_key, api_key);
    }
}

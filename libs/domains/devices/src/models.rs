use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Device IDs come from the hardware side (serial numbers, MAC-derived
/// identifiers), so underscores and uppercase are allowed where tenant
/// domains forbid them.
static DEVICE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

fn validate_device_id(device_id: &str) -> Result<(), validator::ValidationError> {
    if !DEVICE_ID_PATTERN.is_match(device_id) {
        return Err(validator::ValidationError::new("invalid_device_id"));
    }
    Ok(())
}

/// Device entity - a tenant-owned piece of hardware that publishes and
/// receives events
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Device {
    /// Unique identifier (stored as _id in MongoDB); this is the GUID
    /// route actors and URIs address the device by
    #[serde(rename = "_id", alias = "guid")]
    pub guid: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Hardware-facing identifier, unique within the tenant
    pub device_id: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Credential the device presents when publishing events
    pub api_key: String,
    /// Inactive devices keep their registration but are not routed to
    pub active: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a new device
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterDevice {
    #[validate(
        length(min = 1, max = 36),
        custom(function = "validate_device_id")
    )]
    pub device_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating a device's editable fields
///
/// The device_id, GUID and API key are fixed at registration; only the
/// display fields can change afterwards.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateDevice {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Device {
    pub fn new(tenant_id: Uuid, input: RegisterDevice) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::now_v7(),
            tenant_id,
            device_id: input.device_id,
            name: input.name,
            description: input.description,
            api_key: Uuid::new_v4().simple().to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical actor URI for this device under its tenant's domain
    pub fn uri(&self, tenant_domain: &str) -> String {
        format!("device://{}/{}", tenant_domain, self.guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_input(device_id: &str) -> RegisterDevice {
        RegisterDevice {
            device_id: device_id.to_string(),
            name: "Thermostat".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_device_ids() {
        for id in ["sensor-01", "THERMO_42", "abc123", "a"] {
            assert!(register_input(id).validate().is_ok(), "{} should be valid", id);
        }
    }

    #[test]
    fn test_invalid_device_ids() {
        for id in ["", "sensor 01", "sensör", "dev/01"] {
            assert!(register_input(id).validate().is_err(), "{} should be rejected", id);
        }
    }

    #[test]
    fn test_new_device_is_active_with_generated_credentials() {
        let device = Device::new(Uuid::now_v7(), register_input("sensor-01"));

        assert!(device.active);
        assert!(!device.api_key.is_empty());
        assert_ne!(device.guid, Uuid::nil());
    }

    #[test]
    fn test_device_uri_uses_tenant_domain_and_guid() {
        let device = Device::new(Uuid::now_v7(), register_input("sensor-01"));
        let uri = device.uri("acme");

        assert_eq!(uri, format!("device://acme/{}", device.guid));
    }
}

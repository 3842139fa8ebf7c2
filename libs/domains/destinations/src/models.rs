use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// REST destination entity - an external HTTP endpoint a route can
/// forward events to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestDestination {
    /// Unique identifier (stored as _id in MongoDB); this is the GUID
    /// outgoing route actors address the destination by
    #[serde(rename = "_id", alias = "guid")]
    pub guid: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Name, unique within the tenant
    pub name: String,
    /// Endpoint URL events are forwarded to
    pub service_uri: String,
    /// Optional basic-auth username for the endpoint
    pub service_username: Option<String>,
    /// Optional basic-auth password for the endpoint
    pub service_password: Option<String>,
    /// Inactive destinations keep their registration but are not routed to
    pub active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a REST destination
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRestDestination {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(url)]
    pub service_uri: String,
    #[serde(default)]
    pub service_username: Option<String>,
    #[serde(default)]
    pub service_password: Option<String>,
}

/// DTO for replacing a REST destination's editable fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRestDestination {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(url)]
    pub service_uri: String,
    #[serde(default)]
    pub service_username: Option<String>,
    #[serde(default)]
    pub service_password: Option<String>,
    pub active: bool,
}

impl RestDestination {
    pub fn new(tenant_id: Uuid, input: CreateRestDestination) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::now_v7(),
            tenant_id,
            name: input.name,
            service_uri: input.service_uri,
            service_username: input.service_username,
            service_password: input.service_password,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical actor URI for this destination under its tenant's domain
    pub fn uri(&self, tenant_domain: &str) -> String {
        format!("rest://{}/{}", tenant_domain, self.guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(uri: &str) -> CreateRestDestination {
        CreateRestDestination {
            name: "alerts-webhook".to_string(),
            service_uri: uri.to_string(),
            service_username: None,
            service_password: None,
        }
    }

    #[test]
    fn test_create_rejects_invalid_service_uri() {
        assert!(create_input("not a url").validate().is_err());
    }

    #[test]
    fn test_new_destination_is_active() {
        let destination = RestDestination::new(
            Uuid::now_v7(),
            create_input("https://hooks.example.com/alerts"),
        );
        assert!(destination.active);
    }

    #[test]
    fn test_destination_uri_uses_tenant_domain_and_guid() {
        let destination = RestDestination::new(
            Uuid::now_v7(),
            create_input("https://hooks.example.com/alerts"),
        );
        let uri = destination.uri("acme");

        assert_eq!(uri, format!("rest://acme/{}", destination.guid));
    }
}

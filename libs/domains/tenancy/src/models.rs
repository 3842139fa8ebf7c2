use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Domain names become the authority part of device:// and rest:// URIs,
/// so they stay lowercase DNS-label-ish.
static DOMAIN_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

static APPLICATION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

fn validate_domain_name(domain_name: &str) -> Result<(), validator::ValidationError> {
    if !DOMAIN_NAME_PATTERN.is_match(domain_name) {
        return Err(validator::ValidationError::new("invalid_domain_name"));
    }
    Ok(())
}

fn validate_application_name(name: &str) -> Result<(), validator::ValidationError> {
    if !APPLICATION_NAME_PATTERN.is_match(name) {
        return Err(validator::ValidationError::new("invalid_application_name"));
    }
    Ok(())
}

/// Tenant entity - the organizational boundary every registry record
/// belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tenant {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique lowercase domain name used in actor URIs
    pub domain_name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for registering a new tenant
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTenant {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(
        length(min = 2, max = 50),
        custom(function = "validate_domain_name")
    )]
    pub domain_name: String,
}

impl Tenant {
    pub fn new(input: CreateTenant) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            domain_name: input.domain_name,
            created_at: Utc::now(),
        }
    }
}

/// Application entity - a tenant-owned grouping for devices and events
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Application {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Name, unique within the tenant
    pub name: String,
    /// Optional human-friendly name
    pub friendly_name: Option<String>,
    /// Description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating an application under a tenant
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateApplication {
    #[validate(
        length(min = 1, max = 64),
        custom(function = "validate_application_name")
    )]
    pub name: String,
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Application {
    pub fn new(tenant_id: Uuid, input: CreateApplication) -> Self {
        Self {
            id: Uuid::now_v7(),
            tenant_id,
            name: input.name,
            friendly_name: input.friendly_name,
            description: input.description,
            created_at: Utc::now(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// HTTP methods a transformation step may invoke
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum StepMethod {
    Get,
    Post,
    Put,
}

/// A single REST invocation in a transformation pipeline
///
/// Steps run in list order; each step posts the previous step's output
/// to its URL and passes the response on.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TransformationStep {
    pub method: StepMethod,
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Transformation entity - a named, ordered pipeline of REST steps a
/// route can push events through before delivery
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transformation {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "guid")]
    pub guid: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Name, unique within the tenant
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Ordered invocation steps
    pub steps: Vec<TransformationStep>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a transformation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTransformation {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1), nested)]
    pub steps: Vec<TransformationStep>,
}

/// DTO for replacing a transformation's editable fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTransformation {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1), nested)]
    pub steps: Vec<TransformationStep>,
}

impl Transformation {
    pub fn new(tenant_id: Uuid, input: CreateTransformation) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::now_v7(),
            tenant_id,
            name: input.name,
            description: input.description,
            steps: input.steps,
            created_at: now,
            updated_at: now,
        }
    }
}

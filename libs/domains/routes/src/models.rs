use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Key under which a device actor carries its MQTT channel in the
/// auxiliary data map
pub const DEVICE_CHANNEL_KEY: &str = "channel";

static CHANNEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

fn validate_channel(channel: &str) -> Result<(), validator::ValidationError> {
    if !CHANNEL_PATTERN.is_match(channel) {
        return Err(validator::ValidationError::new("invalid_channel"));
    }
    Ok(())
}

/// The two endpoint kinds a route can connect
///
/// The tag is closed: any other value is rejected when the form is
/// deserialized, so handlers never see an unclassifiable actor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteActorKind {
    Device,
    Rest,
}

/// A resolved route endpoint
///
/// Built by the actor resolver from the referenced device or REST
/// destination at create/update time; never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteActor {
    #[serde(rename = "type")]
    pub kind: RouteActorKind,
    /// Display name copied from the referenced record
    pub display_name: String,
    /// Canonical URI of the endpoint (device:// or rest://)
    pub uri: String,
    /// Auxiliary data; device actors hold the channel under
    /// [`DEVICE_CHANNEL_KEY`], rest actors hold nothing
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl RouteActor {
    /// Actor for a device endpoint, carrying its publish channel
    pub fn device(display_name: String, uri: String, channel: Option<String>) -> Self {
        Self {
            kind: RouteActorKind::Device,
            display_name,
            uri,
            data: HashMap::from([(
                DEVICE_CHANNEL_KEY.to_string(),
                channel.unwrap_or_default(),
            )]),
        }
    }

    /// Actor for a REST destination endpoint
    pub fn rest(display_name: String, uri: String) -> Self {
        Self {
            kind: RouteActorKind::Rest,
            display_name,
            uri,
            data: HashMap::new(),
        }
    }

    pub fn channel(&self) -> Option<&str> {
        self.data.get(DEVICE_CHANNEL_KEY).map(String::as_str)
    }
}

/// Snapshot of the transformation a route references
///
/// Stores just enough to address and display it; the pipeline itself
/// stays in the transformations collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransformationRef {
    pub guid: Uuid,
    pub name: String,
}

/// EventRoute entity - a named rule wiring an incoming actor to an
/// outgoing actor with optional filtering and transformation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventRoute {
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
    /// Where matching events come from; a route may be saved with this
    /// side unset
    pub incoming: Option<RouteActor>,
    /// Where matching events go; may likewise be unset
    pub outgoing: Option<RouteActor>,
    /// Optional expression evaluated against event payloads at routing
    /// time
    pub filtering_expression: Option<String>,
    /// Optional transformation applied before delivery
    pub transformation: Option<TransformationRef>,
    /// Inactive routes are kept but not executed
    pub active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// One side of a route as submitted by the caller
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RouteActorForm {
    #[serde(rename = "type")]
    pub kind: RouteActorKind,
    /// GUID of the referenced device or REST destination
    pub guid: Uuid,
    /// Channel for device actors; ignored for rest actors
    #[serde(default)]
    #[validate(custom(function = "validate_channel"))]
    pub channel: Option<String>,
}

/// DTO for creating or replacing an event route
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RouteForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(nested)]
    pub incoming: Option<RouteActorForm>,
    #[serde(default)]
    #[validate(nested)]
    pub outgoing: Option<RouteActorForm>,
    #[serde(default)]
    pub filtering_expression: Option<String>,
    /// Raw transformation reference; blank or absent means "no
    /// transformation"
    #[serde(default)]
    pub transformation_guid: Option<String>,
    /// Applied on update; creates ignore it and start the route active
    #[serde(default)]
    pub active: bool,
}

impl EventRoute {
    /// Build a new route from a form and its resolved references.
    /// Created routes always start active.
    pub fn new(
        tenant_id: Uuid,
        form: RouteForm,
        incoming: Option<RouteActor>,
        outgoing: Option<RouteActor>,
        transformation: Option<TransformationRef>,
    ) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::now_v7(),
            tenant_id,
            name: form.name,
            description: form.description,
            incoming,
            outgoing,
            filtering_expression: form.filtering_expression,
            transformation,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

//! Event Routes Domain
//!
//! The core routing model of the registry: named rules connecting an
//! incoming actor (a device publishing on a channel) to an outgoing
//! actor (another device or a REST destination), optionally filtered by
//! an expression and passed through a transformation. Actor and
//! transformation references are resolved against the device,
//! destination, and transformation domains at write time, so stored
//! routes always carry concrete display names and URIs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_destinations::{MongoRestDestinationRepository, RestDestinationService};
//! use domain_devices::{DeviceService, MongoDeviceRepository};
//! use domain_routes::{EventRouteService, MongoEventRouteRepository, handlers};
//! use domain_transformations::{MongoTransformationRepository, TransformationService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("registry");
//!
//! let service = EventRouteService::new(
//!     MongoEventRouteRepository::new(db.clone()),
//!     DeviceService::new(MongoDeviceRepository::new(db.clone())),
//!     TransformationService::new(MongoTransformationRepository::new(db.clone())),
//!     RestDestinationService::new(MongoRestDestinationRepository::new(db)),
//! );
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod resolver;
pub mod service;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{RouteError, RouteResult};
pub use handlers::ApiDoc;
pub use models::{
    DEVICE_CHANNEL_KEY, EventRoute, RouteActor, RouteActorForm, RouteActorKind, RouteForm,
    TransformationRef,
};
pub use mongodb::MongoEventRouteRepository;
pub use repository::EventRouteRepository;
pub use resolver::{ActorResolver, TransformationResolver};
pub use service::EventRouteService;

//! Destinations Domain
//!
//! External HTTP endpoints a tenant forwards events to. An outgoing
//! route actor of kind `rest` is backed by one of these records and
//! addressed by the canonical URI `rest://{tenant_domain}/{guid}`.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DestinationError, DestinationResult};
pub use handlers::ApiDoc;
pub use models::{CreateRestDestination, RestDestination, UpdateRestDestination};
pub use mongodb::MongoRestDestinationRepository;
pub use repository::RestDestinationRepository;
pub use service::RestDestinationService;

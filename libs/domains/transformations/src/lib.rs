//! Transformations Domain
//!
//! Named pipelines of REST invocation steps. An event route may reference
//! one transformation; matching events are pushed through its steps in
//! order before being handed to the outgoing actor.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TransformationError, TransformationResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateTransformation, StepMethod, Transformation, TransformationStep, UpdateTransformation,
};
pub use mongodb::MongoTransformationRepository;
pub use repository::TransformationRepository;
pub use service::TransformationService;

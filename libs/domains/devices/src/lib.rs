//! Devices Domain
//!
//! Registration and lifecycle of the physical devices a tenant owns.
//! Devices are the subjects of event routing: an incoming route actor is
//! backed by a registered device and addressed by the canonical URI
//! `device://{tenant_domain}/{guid}`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_devices::{DeviceService, MongoDeviceRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("registry");
//!
//! let service = DeviceService::new(MongoDeviceRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DeviceError, DeviceResult};
pub use handlers::ApiDoc;
pub use models::{Device, RegisterDevice, UpdateDevice};
pub use mongodb::MongoDeviceRepository;
pub use repository::DeviceRepository;
pub use service::DeviceService;

//! Tenancy Domain
//!
//! Tenants and their applications, plus the request-scoping machinery the
//! rest of the platform hangs off: every registry entity lives under a
//! tenant, and tenant-scoped routers resolve the caller from the
//! `X-Tenant-Domain` header via [`middleware::tenant_context`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tenancy::{
//!     handlers,
//!     mongodb::{MongoApplicationRepository, MongoTenantRepository},
//!     service::{ApplicationService, TenantService},
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("registry");
//!
//! let tenants = TenantService::new(MongoTenantRepository::new(db.clone()));
//! let applications = ApplicationService::new(MongoApplicationRepository::new(db));
//!
//! let router = handlers::router(tenants, applications);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ApplicationError, ApplicationResult, TenantError, TenantResult};
pub use handlers::ApiDoc;
pub use middleware::{CurrentTenant, TENANT_DOMAIN_HEADER, tenant_context};
pub use models::{Application, CreateApplication, CreateTenant, Tenant};
pub use mongodb::{MongoApplicationRepository, MongoTenantRepository};
pub use repository::{ApplicationRepository, TenantRepository};
pub use service::{ApplicationService, TenantService};

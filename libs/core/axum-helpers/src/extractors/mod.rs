//! Custom extractors for Axum handlers.
//!
//! These reduce boilerplate and keep error responses uniform across every
//! domain router.

pub mod guid_path;
pub mod validated_json;

pub use guid_path::GuidPath;
pub use validated_json::ValidatedJson;

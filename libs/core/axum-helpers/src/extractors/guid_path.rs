//! GUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for GUID path parameters.
///
/// Parses the single path parameter as a UUID and returns a structured
/// 400 response when it is malformed, before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::GuidPath;
///
/// async fn get_route(GuidPath(guid): GuidPath) -> String {
///     format!("Route GUID: {}", guid)
/// }
///
/// let app = Router::new().route("/routes/{guid}", get(get_route));
/// ```
pub struct GuidPath(pub Uuid);

impl<S> FromRequestParts<S> for GuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&raw) {
            Ok(guid) => Ok(GuidPath(guid)),
            Err(_) => Err(
                AppError::bad_request("request.guid", format!("Invalid GUID: {}", raw))
                    .into_response(),
            ),
        }
    }
}

//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - failed business validation, carries the originating machine code",
    content_type = "application/json",
    example = json!({
        "code": "route.actor.device.not_found",
        "error": "BadRequest",
        "message": "Incoming device does not exist",
        "details": null
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - request body validation failed",
    content_type = "application/json",
    example = json!({
        "code": "request.validation",
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct ValidationFailedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed GUID in path",
    content_type = "application/json",
    example = json!({
        "code": "request.guid",
        "error": "BadRequest",
        "message": "Invalid GUID: not-a-guid",
        "details": null
    })
)]
pub struct BadGuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": "route.not_found",
        "error": "NotFound",
        "message": "Event route does not exist",
        "details": null
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - tenant context missing or unknown",
    content_type = "application/json",
    example = json!({
        "code": "tenant.header.missing",
        "error": "Unauthorized",
        "message": "X-Tenant-Domain header is required",
        "details": null
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": "internal.error",
        "error": "InternalServerError",
        "message": "An unexpected internal error occurred",
        "details": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

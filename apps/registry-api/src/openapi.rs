//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Device Registry API",
        version = "0.1.0",
        description = "Multi-tenant registry for devices, transformations, REST destinations, and event routes",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/tenants", api = domain_tenancy::ApiDoc),
        (path = "/api/devices", api = domain_devices::ApiDoc),
        (path = "/api/transformations", api = domain_transformations::ApiDoc),
        (path = "/api/destinations", api = domain_destinations::ApiDoc),
        (path = "/api/routes", api = domain_routes::ApiDoc)
    ),
    tags(
        (name = "Tenants", description = "Tenant and application administration"),
        (name = "Devices", description = "Device registration and lifecycle"),
        (name = "Transformations", description = "Payload transformation definitions"),
        (name = "Destinations", description = "Outbound REST destinations"),
        (name = "Event Routes", description = "Event routing configuration")
    )
)]
pub struct ApiDoc;

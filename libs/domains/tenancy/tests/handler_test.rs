//! Handler tests for Tenancy domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Repositories are mocked so the tests run without MongoDB; the Mongo
//! implementations are covered by the ignored container tests.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use chrono::Utc;
use domain_tenancy::*;
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

mock! {
    TenantRepo {}

    #[async_trait]
    impl TenantRepository for TenantRepo {
        async fn find_all(&self) -> TenantResult<Vec<Tenant>>;
        async fn find_by_domain_name(&self, domain_name: &str) -> TenantResult<Option<Tenant>>;
        async fn create(&self, input: CreateTenant) -> TenantResult<Tenant>;
        async fn exists_by_domain_name(&self, domain_name: &str) -> TenantResult<bool>;
    }
}

mock! {
    ApplicationRepo {}

    #[async_trait]
    impl ApplicationRepository for ApplicationRepo {
        async fn find_by_tenant(&self, tenant_id: Uuid) -> ApplicationResult<Vec<Application>>;
        async fn find_by_name(
            &self,
            tenant_id: Uuid,
            name: &str,
        ) -> ApplicationResult<Option<Application>>;
        async fn create(
            &self,
            tenant_id: Uuid,
            input: CreateApplication,
        ) -> ApplicationResult<Application>;
        async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> ApplicationResult<bool>;
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_tenant(domain: &str) -> Tenant {
    Tenant {
        id: Uuid::now_v7(),
        name: format!("{} Inc", domain),
        domain_name: domain.to_string(),
        created_at: Utc::now(),
    }
}

fn admin_router(tenants: MockTenantRepo, applications: MockApplicationRepo) -> Router {
    handlers::router(
        TenantService::new(tenants),
        ApplicationService::new(applications),
    )
}

#[tokio::test]
async fn test_list_tenants_handler_returns_200() {
    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_find_all()
        .returning(|| Ok(vec![sample_tenant("acme"), sample_tenant("globex")]));

    let app = admin_router(tenants, MockApplicationRepo::new());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Tenant> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].domain_name, "acme");
}

#[tokio::test]
async fn test_create_tenant_handler_returns_201() {
    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_exists_by_domain_name()
        .returning(|_| Ok(false));
    tenants
        .expect_create()
        .returning(|input| Ok(Tenant::new(input)));

    let app = admin_router(tenants, MockApplicationRepo::new());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Acme Corporation",
                "domain_name": "acme"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let tenant: Tenant = json_body(response.into_body()).await;
    assert_eq!(tenant.domain_name, "acme");
    assert_eq!(tenant.name, "Acme Corporation");
}

#[tokio::test]
async fn test_create_tenant_handler_rejects_duplicate_domain() {
    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_exists_by_domain_name()
        .returning(|_| Ok(true));

    let app = admin_router(tenants, MockApplicationRepo::new());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Acme Corporation",
                "domain_name": "acme"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "tenant.domain.in_use");
}

#[tokio::test]
async fn test_create_tenant_handler_validates_domain_name() {
    // No expectations: validation must fail before the repository is hit.
    let app = admin_router(MockTenantRepo::new(), MockApplicationRepo::new());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Acme Corporation",
                "domain_name": "Acme Corp"  // Uppercase and spaces are invalid
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "request.validation");
}

#[tokio::test]
async fn test_list_applications_handler_returns_200() {
    let tenant = sample_tenant("acme");
    let tenant_id = tenant.id;

    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_find_by_domain_name()
        .returning(move |_| Ok(Some(tenant.clone())));

    let mut applications = MockApplicationRepo::new();
    applications
        .expect_find_by_tenant()
        .with(mockall::predicate::eq(tenant_id))
        .returning(|tenant_id| {
            Ok(vec![Application::new(
                tenant_id,
                CreateApplication {
                    name: "smart-home".to_string(),
                    friendly_name: None,
                    description: String::new(),
                },
            )])
        });

    let app = admin_router(tenants, applications);

    let request = Request::builder()
        .method("GET")
        .uri("/acme/applications")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Application> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "smart-home");
    assert_eq!(listed[0].tenant_id, tenant_id);
}

#[tokio::test]
async fn test_list_applications_handler_returns_404_for_unknown_tenant() {
    let mut tenants = MockTenantRepo::new();
    tenants.expect_find_by_domain_name().returning(|_| Ok(None));

    let app = admin_router(tenants, MockApplicationRepo::new());

    let request = Request::builder()
        .method("GET")
        .uri("/ghost/applications")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "tenant.not_found");
}

#[tokio::test]
async fn test_create_application_handler_returns_201() {
    let tenant = sample_tenant("acme");

    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_find_by_domain_name()
        .returning(move |_| Ok(Some(tenant.clone())));

    let mut applications = MockApplicationRepo::new();
    applications.expect_exists_by_name().returning(|_, _| Ok(false));
    applications
        .expect_create()
        .returning(|tenant_id, input| Ok(Application::new(tenant_id, input)));

    let app = admin_router(tenants, applications);

    let request = Request::builder()
        .method("POST")
        .uri("/acme/applications")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "smart-home",
                "friendly_name": "Smart Home"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let application: Application = json_body(response.into_body()).await;
    assert_eq!(application.name, "smart-home");
    assert_eq!(application.friendly_name.as_deref(), Some("Smart Home"));
}

// --- Tenant middleware ---

/// Probe route that echoes the resolved tenant's domain name.
fn tenant_scoped_probe(tenants: MockTenantRepo) -> Router {
    let service = TenantService::new(tenants);
    Router::new()
        .route(
            "/probe",
            get(|CurrentTenant(tenant): CurrentTenant| async move { tenant.domain_name }),
        )
        .layer(middleware::from_fn_with_state(
            service,
            tenant_context::<MockTenantRepo>,
        ))
}

#[tokio::test]
async fn test_tenant_middleware_rejects_missing_header() {
    let app = tenant_scoped_probe(MockTenantRepo::new());

    let request = Request::builder()
        .method("GET")
        .uri("/probe")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "tenant.header.missing");
}

#[tokio::test]
async fn test_tenant_middleware_rejects_unknown_tenant() {
    let mut tenants = MockTenantRepo::new();
    tenants.expect_find_by_domain_name().returning(|_| Ok(None));

    let app = tenant_scoped_probe(tenants);

    let request = Request::builder()
        .method("GET")
        .uri("/probe")
        .header(TENANT_DOMAIN_HEADER, "ghost")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "tenant.not_found");
}

#[tokio::test]
async fn test_tenant_middleware_resolves_current_tenant() {
    let mut tenants = MockTenantRepo::new();
    tenants
        .expect_find_by_domain_name()
        .with(mockall::predicate::eq("acme"))
        .returning(|domain| Ok(Some(sample_tenant(domain))));

    let app = tenant_scoped_probe(tenants);

    let request = Request::builder()
        .method("GET")
        .uri("/probe")
        .header(TENANT_DOMAIN_HEADER, "acme")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"acme");
}

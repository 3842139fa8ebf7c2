//! Shared mocks and fixtures for the crate's unit tests

use async_trait::async_trait;
use domain_destinations::{
    CreateRestDestination, DestinationResult, RestDestination, RestDestinationRepository,
};
use domain_devices::{Device, DeviceRepository, DeviceResult, RegisterDevice};
use domain_tenancy::{CreateTenant, Tenant};
use domain_transformations::{
    CreateTransformation, StepMethod, Transformation, TransformationRepository,
    TransformationResult, TransformationStep,
};
use mockall::mock;
use uuid::Uuid;

use crate::error::RouteResult;
use crate::models::EventRoute;
use crate::repository::EventRouteRepository;

mock! {
    pub DeviceRepo {}

    #[async_trait]
    impl DeviceRepository for DeviceRepo {
        async fn find_by_tenant(&self, tenant_id: Uuid) -> DeviceResult<Vec<Device>>;
        async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<Option<Device>>;
        async fn create(&self, tenant_id: Uuid, input: RegisterDevice) -> DeviceResult<Device>;
        async fn update(&self, device: &Device) -> DeviceResult<bool>;
        async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DeviceResult<bool>;
        async fn exists_by_device_id(&self, tenant_id: Uuid, device_id: &str) -> DeviceResult<bool>;
    }
}

mock! {
    pub DestinationRepo {}

    #[async_trait]
    impl RestDestinationRepository for DestinationRepo {
        async fn find_by_tenant(&self, tenant_id: Uuid) -> DestinationResult<Vec<RestDestination>>;
        async fn find_by_guid(
            &self,
            tenant_id: Uuid,
            guid: Uuid,
        ) -> DestinationResult<Option<RestDestination>>;
        async fn create(
            &self,
            tenant_id: Uuid,
            input: CreateRestDestination,
        ) -> DestinationResult<RestDestination>;
        async fn update(&self, destination: &RestDestination) -> DestinationResult<bool>;
        async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> DestinationResult<bool>;
        async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> DestinationResult<bool>;
    }
}

mock! {
    pub TransformationRepo {}

    #[async_trait]
    impl TransformationRepository for TransformationRepo {
        async fn find_by_tenant(&self, tenant_id: Uuid) -> TransformationResult<Vec<Transformation>>;
        async fn find_by_guid(
            &self,
            tenant_id: Uuid,
            guid: Uuid,
        ) -> TransformationResult<Option<Transformation>>;
        async fn create(
            &self,
            tenant_id: Uuid,
            input: CreateTransformation,
        ) -> TransformationResult<Transformation>;
        async fn update(&self, transformation: &Transformation) -> TransformationResult<bool>;
        async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> TransformationResult<bool>;
        async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> TransformationResult<bool>;
    }
}

mock! {
    pub RouteRepo {}

    #[async_trait]
    impl EventRouteRepository for RouteRepo {
        async fn find_by_tenant(&self, tenant_id: Uuid) -> RouteResult<Vec<EventRoute>>;
        async fn find_by_guid(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<Option<EventRoute>>;
        async fn create(&self, route: &EventRoute) -> RouteResult<()>;
        async fn update(&self, route: &EventRoute) -> RouteResult<bool>;
        async fn delete(&self, tenant_id: Uuid, guid: Uuid) -> RouteResult<bool>;
        async fn exists_by_name(&self, tenant_id: Uuid, name: &str) -> RouteResult<bool>;
    }
}

pub fn sample_tenant() -> Tenant {
    Tenant::new(CreateTenant {
        name: "Acme".to_string(),
        domain_name: "acme".to_string(),
    })
}

pub fn sample_device(tenant: &Tenant, device_id: &str) -> Device {
    Device::new(
        tenant.id,
        RegisterDevice {
            device_id: device_id.to_string(),
            name: format!("Device {}", device_id),
            description: String::new(),
        },
    )
}

pub fn sample_destination(tenant: &Tenant, name: &str) -> RestDestination {
    RestDestination::new(
        tenant.id,
        CreateRestDestination {
            name: name.to_string(),
            service_uri: "https://hooks.example.com/alerts".to_string(),
            service_username: None,
            service_password: None,
        },
    )
}

pub fn sample_transformation(tenant: &Tenant, name: &str) -> Transformation {
    Transformation::new(
        tenant.id,
        CreateTransformation {
            name: name.to_string(),
            description: String::new(),
            steps: vec![TransformationStep {
                method: StepMethod::Post,
                url: "https://converter.example.com/celsius".to_string(),
                username: None,
                password: None,
            }],
        },
    )
}

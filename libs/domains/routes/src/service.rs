//! Event route service - assembly and lifecycle of routing rules
//!
//! Writes go through two phases: resolve every reference the form names
//! (actors, transformation) against current records, then persist the
//! fully built route. A failed resolution aborts before persistence, so
//! a stored route never contains a dangling or partially resolved
//! reference.

use chrono::Utc;
use domain_destinations::{RestDestinationRepository, RestDestinationService};
use domain_devices::{DeviceRepository, DeviceService};
use domain_tenancy::Tenant;
use domain_transformations::{TransformationRepository, TransformationService};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{RouteError, RouteResult};
use crate::models::{EventRoute, RouteForm};
use crate::repository::EventRouteRepository;
use crate::resolver::{ActorResolver, TransformationResolver};

pub struct EventRouteService<R, D, T, X>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    repository: Arc<R>,
    actors: ActorResolver<D, X>,
    transformations: TransformationResolver<T>,
}

impl<R, D, T, X> EventRouteService<R, D, T, X>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    pub fn new(
        repository: R,
        devices: DeviceService<D>,
        transformations: TransformationService<T>,
        destinations: RestDestinationService<X>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            actors: ActorResolver::new(devices, destinations),
            transformations: TransformationResolver::new(transformations),
        }
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn list_routes(&self, tenant: &Tenant) -> RouteResult<Vec<EventRoute>> {
        self.repository.find_by_tenant(tenant.id).await
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn get_route(&self, tenant: &Tenant, guid: Uuid) -> RouteResult<EventRoute> {
        self.repository
            .find_by_guid(tenant.id, guid)
            .await?
            .ok_or(RouteError::NotFound(guid))
    }

    /// Create a route from a form. Created routes always start active,
    /// whatever the form's `active` flag says.
    #[instrument(skip(self, tenant, form), fields(tenant_domain = %tenant.domain_name, route_name = %form.name))]
    pub async fn create_route(&self, tenant: &Tenant, form: RouteForm) -> RouteResult<EventRoute> {
        form.validate()
            .map_err(|e| RouteError::Validation(e.to_string()))?;

        let incoming = self.actors.resolve(tenant, form.incoming.as_ref()).await?;
        let outgoing = self.actors.resolve(tenant, form.outgoing.as_ref()).await?;
        let transformation = self
            .transformations
            .resolve(tenant, form.transformation_guid.as_deref())
            .await?;

        if self.repository.exists_by_name(tenant.id, &form.name).await? {
            return Err(RouteError::DuplicateName(form.name));
        }

        let route = EventRoute::new(tenant.id, form, incoming, outgoing, transformation);
        self.repository.create(&route).await?;

        tracing::info!(route_guid = %route.guid, route_name = %route.name, "Event route created");
        Ok(route)
    }

    /// Replace a route's fields from a form, re-resolving every
    /// reference. Fails with not-found before touching anything when the
    /// route does not exist for the tenant.
    #[instrument(skip(self, tenant, form), fields(tenant_domain = %tenant.domain_name))]
    pub async fn update_route(
        &self,
        tenant: &Tenant,
        guid: Uuid,
        form: RouteForm,
    ) -> RouteResult<EventRoute> {
        form.validate()
            .map_err(|e| RouteError::Validation(e.to_string()))?;

        let mut route = self.get_route(tenant, guid).await?;

        let incoming = self.actors.resolve(tenant, form.incoming.as_ref()).await?;
        let outgoing = self.actors.resolve(tenant, form.outgoing.as_ref()).await?;
        let transformation = self
            .transformations
            .resolve(tenant, form.transformation_guid.as_deref())
            .await?;

        if form.name != route.name
            && self.repository.exists_by_name(tenant.id, &form.name).await?
        {
            return Err(RouteError::DuplicateName(form.name));
        }

        route.name = form.name;
        route.description = form.description;
        route.incoming = incoming;
        route.outgoing = outgoing;
        route.filtering_expression = form.filtering_expression;
        route.transformation = transformation;
        route.active = form.active;
        route.updated_at = Utc::now();

        if !self.repository.update(&route).await? {
            return Err(RouteError::NotFound(guid));
        }

        tracing::info!(route_guid = %route.guid, active = route.active, "Event route updated");
        Ok(route)
    }

    #[instrument(skip(self, tenant), fields(tenant_domain = %tenant.domain_name))]
    pub async fn remove_route(&self, tenant: &Tenant, guid: Uuid) -> RouteResult<()> {
        if !self.repository.delete(tenant.id, guid).await? {
            return Err(RouteError::NotFound(guid));
        }

        tracing::info!(route_guid = %guid, "Event route removed");
        Ok(())
    }
}

impl<R, D, T, X> Clone for EventRouteService<R, D, T, X>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            actors: self.actors.clone(),
            transformations: self.transformations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RouteActorForm, RouteActorKind};
    use crate::test_support::{
        MockDestinationRepo, MockDeviceRepo, MockRouteRepo, MockTransformationRepo,
        sample_device, sample_tenant, sample_transformation,
    };

    fn service(
        routes: MockRouteRepo,
        devices: MockDeviceRepo,
        transformations: MockTransformationRepo,
        destinations: MockDestinationRepo,
    ) -> EventRouteService<MockRouteRepo, MockDeviceRepo, MockTransformationRepo, MockDestinationRepo>
    {
        EventRouteService::new(
            routes,
            DeviceService::new(devices),
            TransformationService::new(transformations),
            RestDestinationService::new(destinations),
        )
    }

    fn base_form(name: &str) -> RouteForm {
        RouteForm {
            name: name.to_string(),
            description: String::new(),
            incoming: None,
            outgoing: None,
            filtering_expression: None,
            transformation_guid: None,
            active: false,
        }
    }

    #[tokio::test]
    async fn test_create_without_actors_persists_active_route() {
        let tenant = sample_tenant();

        let mut routes = MockRouteRepo::new();
        routes.expect_exists_by_name().returning(|_, _| Ok(false));
        routes
            .expect_create()
            .withf(|route| route.active && route.incoming.is_none() && route.outgoing.is_none())
            .returning(|_| Ok(()));

        let service = service(
            routes,
            MockDeviceRepo::new(),
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let route = service
            .create_route(&tenant, base_form("temperature-alerts"))
            .await
            .unwrap();

        assert!(route.active);
        assert_eq!(route.tenant_id, tenant.id);
    }

    #[tokio::test]
    async fn test_create_with_unknown_device_fails_before_persistence() {
        let tenant = sample_tenant();

        let mut devices = MockDeviceRepo::new();
        devices.expect_find_by_guid().returning(|_, _| Ok(None));

        // No create expectation on the route repo: persisting here would
        // fail the test with an unexpected-call panic.
        let service = service(
            MockRouteRepo::new(),
            devices,
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let guid = Uuid::now_v7();
        let mut form = base_form("temperature-alerts");
        form.incoming = Some(RouteActorForm {
            kind: RouteActorKind::Device,
            guid,
            channel: Some("temperature".to_string()),
        });

        let result = service.create_route(&tenant, form).await;
        assert!(matches!(result, Err(RouteError::ActorDeviceNotFound(g)) if g == guid));
    }

    #[tokio::test]
    async fn test_create_freezes_resolved_actor_into_route() {
        let tenant = sample_tenant();
        let device = sample_device(&tenant, "sensor-01");
        let device_guid = device.guid;
        let expected_uri = device.uri(&tenant.domain_name);

        let mut devices = MockDeviceRepo::new();
        devices
            .expect_find_by_guid()
            .returning(move |_, _| Ok(Some(device.clone())));

        let mut routes = MockRouteRepo::new();
        routes.expect_exists_by_name().returning(|_, _| Ok(false));
        let uri_check = expected_uri.clone();
        routes
            .expect_create()
            .withf(move |route| {
                route
                    .incoming
                    .as_ref()
                    .is_some_and(|actor| actor.uri == uri_check)
            })
            .returning(|_| Ok(()));

        let service = service(
            routes,
            devices,
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let mut form = base_form("temperature-alerts");
        form.incoming = Some(RouteActorForm {
            kind: RouteActorKind::Device,
            guid: device_guid,
            channel: Some("temperature".to_string()),
        });

        let route = service.create_route(&tenant, form).await.unwrap();
        assert_eq!(route.incoming.unwrap().uri, expected_uri);
    }

    #[tokio::test]
    async fn test_create_with_unresolvable_transformation_fails_whole_create() {
        let tenant = sample_tenant();

        let mut transformations = MockTransformationRepo::new();
        transformations
            .expect_find_by_guid()
            .returning(|_, _| Ok(None));

        let service = service(
            MockRouteRepo::new(),
            MockDeviceRepo::new(),
            transformations,
            MockDestinationRepo::new(),
        );

        let guid = Uuid::now_v7();
        let mut form = base_form("temperature-alerts");
        form.transformation_guid = Some(guid.to_string());

        let result = service.create_route(&tenant, form).await;
        assert!(matches!(result, Err(RouteError::TransformationNotFound(g)) if g == guid));
    }

    #[tokio::test]
    async fn test_create_with_blank_transformation_guid_stores_none() {
        let tenant = sample_tenant();

        let mut routes = MockRouteRepo::new();
        routes.expect_exists_by_name().returning(|_, _| Ok(false));
        routes
            .expect_create()
            .withf(|route| route.transformation.is_none())
            .returning(|_| Ok(()));

        let service = service(
            routes,
            MockDeviceRepo::new(),
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let mut form = base_form("temperature-alerts");
        form.transformation_guid = Some("   ".to_string());

        let route = service.create_route(&tenant, form).await.unwrap();
        assert!(route.transformation.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_taken_name() {
        let tenant = sample_tenant();

        let mut routes = MockRouteRepo::new();
        routes.expect_exists_by_name().returning(|_, _| Ok(true));

        let service = service(
            routes,
            MockDeviceRepo::new(),
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let result = service
            .create_route(&tenant, base_form("temperature-alerts"))
            .await;

        assert!(matches!(result, Err(RouteError::DuplicateName(n)) if n == "temperature-alerts"));
    }

    #[tokio::test]
    async fn test_update_missing_route_fails_before_resolution() {
        let tenant = sample_tenant();

        let mut routes = MockRouteRepo::new();
        routes.expect_find_by_guid().returning(|_, _| Ok(None));

        // Device repo has no expectations: resolution must not start.
        let service = service(
            routes,
            MockDeviceRepo::new(),
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let guid = Uuid::now_v7();
        let mut form = base_form("temperature-alerts");
        form.incoming = Some(RouteActorForm {
            kind: RouteActorKind::Device,
            guid: Uuid::now_v7(),
            channel: None,
        });

        let result = service.update_route(&tenant, guid, form).await;
        assert!(matches!(result, Err(RouteError::NotFound(g)) if g == guid));
    }

    #[tokio::test]
    async fn test_update_applies_active_flag_and_rewrites_transformation() {
        let tenant = sample_tenant();
        let transformation = sample_transformation(&tenant, "normalize");
        let transformation_guid = transformation.guid;

        let existing = EventRoute::new(
            tenant.id,
            base_form("temperature-alerts"),
            None,
            None,
            None,
        );
        let guid = existing.guid;
        assert!(existing.active);

        let mut routes = MockRouteRepo::new();
        let stored = existing.clone();
        routes
            .expect_find_by_guid()
            .returning(move |_, _| Ok(Some(stored.clone())));
        routes.expect_update().returning(|_| Ok(true));

        let mut transformations = MockTransformationRepo::new();
        transformations
            .expect_find_by_guid()
            .returning(move |_, _| Ok(Some(transformation.clone())));

        let service = service(
            routes,
            MockDeviceRepo::new(),
            transformations,
            MockDestinationRepo::new(),
        );

        let mut form = base_form("temperature-alerts");
        form.transformation_guid = Some(transformation_guid.to_string());
        form.active = false;

        let updated = service.update_route(&tenant, guid, form).await.unwrap();

        assert!(!updated.active);
        assert_eq!(
            updated.transformation.map(|t| t.guid),
            Some(transformation_guid)
        );
    }

    #[tokio::test]
    async fn test_remove_missing_route_is_not_found() {
        let mut routes = MockRouteRepo::new();
        routes.expect_delete().returning(|_, _| Ok(false));

        let service = service(
            routes,
            MockDeviceRepo::new(),
            MockTransformationRepo::new(),
            MockDestinationRepo::new(),
        );

        let guid = Uuid::now_v7();
        let result = service.remove_route(&sample_tenant(), guid).await;

        assert!(matches!(result, Err(RouteError::NotFound(g)) if g == guid));
    }
}

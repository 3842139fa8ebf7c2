//! Reference resolution for route forms
//!
//! A submitted route names its endpoints and transformation by GUID;
//! before anything is persisted these references are resolved against
//! the current device / REST destination / transformation records and
//! frozen into the route. A failed lookup aborts the whole operation.

use domain_destinations::{RestDestinationRepository, RestDestinationService};
use domain_devices::{DeviceRepository, DeviceService};
use domain_tenancy::Tenant;
use domain_transformations::{TransformationRepository, TransformationService};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{RouteError, RouteResult};
use crate::models::{RouteActor, RouteActorForm, RouteActorKind, TransformationRef};

/// Resolves actor forms into [`RouteActor`] descriptors
pub struct ActorResolver<D: DeviceRepository, X: RestDestinationRepository> {
    devices: DeviceService<D>,
    destinations: RestDestinationService<X>,
}

impl<D, X> ActorResolver<D, X>
where
    D: DeviceRepository,
    X: RestDestinationRepository,
{
    pub fn new(devices: DeviceService<D>, destinations: RestDestinationService<X>) -> Self {
        Self {
            devices,
            destinations,
        }
    }

    /// Resolve one side of a route.
    ///
    /// An absent form is a route with that side unset, not an error.
    #[instrument(skip(self, tenant, form), fields(tenant_domain = %tenant.domain_name))]
    pub async fn resolve(
        &self,
        tenant: &Tenant,
        form: Option<&RouteActorForm>,
    ) -> RouteResult<Option<RouteActor>> {
        let Some(form) = form else {
            return Ok(None);
        };

        let actor = match form.kind {
            RouteActorKind::Device => {
                let device = self.devices.get_device(tenant, form.guid).await?;
                RouteActor::device(
                    device.name.clone(),
                    device.uri(&tenant.domain_name),
                    form.channel.clone(),
                )
            }
            RouteActorKind::Rest => {
                let destination = self.destinations.get_destination(tenant, form.guid).await?;
                RouteActor::rest(
                    destination.name.clone(),
                    destination.uri(&tenant.domain_name),
                )
            }
        };

        Ok(Some(actor))
    }
}

impl<D: DeviceRepository, X: RestDestinationRepository> Clone for ActorResolver<D, X> {
    fn clone(&self) -> Self {
        Self {
            devices: self.devices.clone(),
            destinations: self.destinations.clone(),
        }
    }
}

/// Resolves the optional transformation reference of a route form
pub struct TransformationResolver<T: TransformationRepository> {
    transformations: TransformationService<T>,
}

impl<T: TransformationRepository> TransformationResolver<T> {
    pub fn new(transformations: TransformationService<T>) -> Self {
        Self { transformations }
    }

    /// Resolve a raw transformation reference.
    ///
    /// Absent or blank means "no transformation"; anything else must
    /// name an existing transformation of the tenant.
    #[instrument(skip(self, tenant, raw_guid), fields(tenant_domain = %tenant.domain_name))]
    pub async fn resolve(
        &self,
        tenant: &Tenant,
        raw_guid: Option<&str>,
    ) -> RouteResult<Option<TransformationRef>> {
        let Some(raw) = raw_guid.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };

        let guid = Uuid::parse_str(raw).map_err(|_| {
            RouteError::Validation(format!("'{}' is not a valid transformation GUID", raw))
        })?;

        let transformation = self.transformations.get_transformation(tenant, guid).await?;

        Ok(Some(TransformationRef {
            guid: transformation.guid,
            name: transformation.name,
        }))
    }
}

impl<T: TransformationRepository> Clone for TransformationResolver<T> {
    fn clone(&self) -> Self {
        Self {
            transformations: self.transformations.clone(),
        }
    }
}

//! Store-to-store event migration
//!
//! Walks every tenant whose domain name fully matches a filter regex,
//! then every application the tenant owns, and copies all incoming and
//! outgoing events at or after a start instant from the source store to
//! the destination store. Copies are per-event writes with no batching
//! and no watermark; the first failed read or write aborts the run, so
//! a partial run leaves some applications migrated and others not.

use chrono::{DateTime, Utc};
use domain_tenancy::{ApplicationError, ApplicationRepository, TenantError, TenantRepository};
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::instrument;

use crate::error::EventError;
use crate::models::{EventQuery, EventScope};
use crate::store::EventStore;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("invalid tenant filter: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error(transparent)]
    Tenants(#[from] TenantError),

    #[error(transparent)]
    Applications(#[from] ApplicationError),

    #[error(transparent)]
    Store(#[from] EventError),
}

pub type MigrationResult<T> = std::result::Result<T, MigrationError>;

/// Summary of a completed migration run
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub tenants_matched: usize,
    pub applications_visited: usize,
    pub incoming_events_copied: usize,
    pub outgoing_events_copied: usize,
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
}

pub struct EventMigrationService<S, D, TR, AR>
where
    S: EventStore,
    D: EventStore,
    TR: TenantRepository,
    AR: ApplicationRepository,
{
    source: Arc<S>,
    destination: Arc<D>,
    tenants: Arc<TR>,
    applications: Arc<AR>,
}

impl<S, D, TR, AR> EventMigrationService<S, D, TR, AR>
where
    S: EventStore,
    D: EventStore,
    TR: TenantRepository,
    AR: ApplicationRepository,
{
    pub fn new(source: S, destination: D, tenants: TR, applications: AR) -> Self {
        Self {
            source: Arc::new(source),
            destination: Arc::new(destination),
            tenants: Arc::new(tenants),
            applications: Arc::new(applications),
        }
    }

    /// Run one migration over every tenant whose domain name fully
    /// matches `tenant_filter`.
    ///
    /// The filter is anchored before matching, so `acme-.*` means the
    /// whole domain name, not a substring of it.
    #[instrument(skip(self), fields(tenant_filter = %tenant_filter, start_instant = %start_instant))]
    pub async fn migrate(
        &self,
        tenant_filter: &str,
        start_instant: DateTime<Utc>,
    ) -> MigrationResult<MigrationReport> {
        let pattern = Regex::new(&format!("^(?:{tenant_filter})$"))?;
        let started = Instant::now();

        let mut tenants_matched = 0;
        let mut applications_visited = 0;
        let mut incoming_events_copied = 0;
        let mut outgoing_events_copied = 0;

        for tenant in self.tenants.find_all().await? {
            if !pattern.is_match(&tenant.domain_name) {
                tracing::debug!(tenant_domain = %tenant.domain_name, "Tenant skipped by filter");
                continue;
            }
            tenants_matched += 1;
            tracing::info!(tenant_domain = %tenant.domain_name, "Migrating tenant");

            for application in self.applications.find_by_tenant(tenant.id).await? {
                applications_visited += 1;
                let scope = EventScope::new(&tenant.domain_name, &application.name);
                let query = EventQuery::since(start_instant);

                let incoming = self.source.find_incoming(&scope, &query).await?;
                for event in &incoming {
                    self.destination.save_incoming(&scope, event).await?;
                }
                incoming_events_copied += incoming.len();

                let outgoing = self.source.find_outgoing(&scope, &query).await?;
                for event in &outgoing {
                    self.destination.save_outgoing(&scope, event).await?;
                }
                outgoing_events_copied += outgoing.len();

                tracing::info!(
                    tenant_domain = %scope.tenant_domain,
                    application_name = %scope.application_name,
                    incoming = incoming.len(),
                    outgoing = outgoing.len(),
                    "Application migrated"
                );
            }
        }

        let report = MigrationReport {
            tenants_matched,
            applications_visited,
            incoming_events_copied,
            outgoing_events_copied,
            duration_ms: started.elapsed().as_millis() as u64,
            finished_at: Utc::now(),
        };

        tracing::info!(
            tenants_matched = report.tenants_matched,
            applications_visited = report.applications_visited,
            incoming_events_copied = report.incoming_events_copied,
            outgoing_events_copied = report.outgoing_events_copied,
            duration_ms = report.duration_ms,
            "Event migration finished"
        );
        Ok(report)
    }
}

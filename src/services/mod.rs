//! Upstream REST services and their operation catalogs.

pub mod client;
pub mod dealfront;
pub mod frontapp;
pub mod instantly;
pub mod operation;
pub mod pipedrive;

use std::sync::Arc;

use tracing::info;

pub use client::{extract_error_message, AuthHeader, ServiceClient};
pub use operation::{Operation, Param, ParamKind, Payload, RequestParts, Route};

use crate::config::GlobalConfig;
use crate::Result;

/// One configured upstream: its client and the operations it serves.
#[derive(Debug, Clone)]
pub struct Service {
    /// HTTP client bound to the service's base URL and credential.
    pub client: ServiceClient,
    /// Operations executed through `client`.
    pub operations: Vec<Operation>,
}

/// Build every service whose credentials are present, Front first.
///
/// # Errors
///
/// Returns `AppError::Config` if any configured client cannot be built.
pub fn configured_services(config: &GlobalConfig) -> Result<Vec<Service>> {
    let fields: Arc<[String]> = config.error_message_fields.clone().into();

    let mut services = vec![Service {
        client: frontapp::client(config, Arc::clone(&fields))?,
        operations: frontapp::operations(),
    }];

    let optional: [(Option<ServiceClient>, fn() -> Vec<Operation>); 4] = [
        (pipedrive::client(config, Arc::clone(&fields))?, pipedrive::operations),
        (instantly::client(config, Arc::clone(&fields))?, instantly::operations),
        (dealfront::client(config, Arc::clone(&fields))?, dealfront::operations),
        (
            dealfront::ip_enrich_client(config, Arc::clone(&fields))?,
            dealfront::ip_enrich_operations,
        ),
    ];
    for (client, catalog) in optional {
        if let Some(client) = client {
            services.push(Service {
                client,
                operations: catalog(),
            });
        }
    }

    for service in &services {
        info!(
            service = service.client.service(),
            operations = service.operations.len(),
            "service configured"
        );
    }
    Ok(services)
}

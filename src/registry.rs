//! Merged operation registry: name to (descriptor, executor).
//!
//! Built once at startup from every configured service and immutable
//! afterwards; shared by all sessions through an `Arc`.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, info_span, Instrument};

use crate::config::GlobalConfig;
use crate::services::{self, Operation, Service, ServiceClient};
use crate::{AppError, Result};

#[derive(Debug)]
struct Entry {
    operation: Operation,
    client: ServiceClient,
}

/// Immutable catalog of every operation exposed by this process.
#[derive(Debug)]
pub struct OperationRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
    primary: ServiceClient,
}

impl OperationRegistry {
    /// Build the registry from the services configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a client cannot be built or two
    /// operations share a name.
    pub fn from_config(config: &GlobalConfig) -> Result<Self> {
        Self::from_services(services::configured_services(config)?)
    }

    /// Build the registry from explicit services; the first is the primary.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `services` is empty or two operations
    /// share a name.
    pub fn from_services(services: Vec<Service>) -> Result<Self> {
        let primary = services
            .first()
            .map(|service| service.client.clone())
            .ok_or_else(|| AppError::Config("at least one service is required".into()))?;

        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for service in services {
            for operation in service.operations {
                let name = operation.name();
                if index.insert(name, entries.len()).is_some() {
                    return Err(AppError::Config(format!(
                        "operation '{name}' is registered twice"
                    )));
                }
                entries.push(Entry {
                    operation,
                    client: service.client.clone(),
                });
            }
        }

        Ok(Self {
            entries,
            index,
            primary,
        })
    }

    /// Descriptors in listing order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Operation> {
        self.entries.iter().map(|entry| &entry.operation)
    }

    /// Look up one descriptor.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].operation)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Client of the mandatory service, used for resources.
    #[must_use]
    pub fn primary(&self) -> &ServiceClient {
        &self.primary
    }

    /// Validate `arguments` and execute the named operation upstream.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownOperation` for unregistered names,
    /// `AppError::InvalidParams` for contract violations, and
    /// `AppError::Upstream` for failed calls.
    pub async fn invoke(&self, name: &str, arguments: Option<&Map<String, Value>>) -> Result<Value> {
        let entry = self
            .index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| AppError::UnknownOperation(name.to_owned()))?;

        let parts = entry.operation.prepare(arguments)?;
        let span = info_span!("invoke", operation = name, service = entry.client.service());
        async move {
            debug!(method = %parts.method, path = %parts.path(), "executing operation");
            entry.client.send(parts).await
        }
        .instrument(span)
        .await
    }
}

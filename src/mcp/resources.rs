//! Fixed `frontapp://` MCP resources.
//!
//! Each resource maps to exactly one read-only call against the primary
//! service; the decoded JSON is returned pretty-printed as text content.

use rmcp::model::{
    Annotated, ListResourcesResult, RawResource, ReadResourceResult, ResourceContents,
};
use tracing::info;

use crate::registry::OperationRegistry;
use crate::services::RequestParts;
use crate::{AppError, Result};

/// Mime type shared by every resource.
pub const MIME_TYPE: &str = "application/json";

/// Number of conversations returned by the recent conversations resource.
pub const RECENT_CONVERSATIONS_LIMIT: &str = "20";

/// Static description of one resource and its upstream call.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDef {
    /// Resource URI.
    pub uri: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Upstream path on the primary service.
    pub path: &'static str,
    /// Fixed query parameters.
    pub query: &'static [(&'static str, &'static str)],
}

/// Every resource, in listing order.
pub const RESOURCES: [ResourceDef; 4] = [
    ResourceDef {
        uri: "frontapp://conversations/recent",
        name: "Recent Conversations",
        description: "Most recently updated conversations",
        path: "/conversations",
        query: &[("limit", RECENT_CONVERSATIONS_LIMIT)],
    },
    ResourceDef {
        uri: "frontapp://teammates",
        name: "Teammates",
        description: "List of all teammates",
        path: "/teammates",
        query: &[],
    },
    ResourceDef {
        uri: "frontapp://inboxes",
        name: "Inboxes",
        description: "List of all inboxes",
        path: "/inboxes",
        query: &[],
    },
    ResourceDef {
        uri: "frontapp://tags",
        name: "Tags",
        description: "List of all tags",
        path: "/tags",
        query: &[],
    },
];

/// Find the resource registered under `uri`.
#[must_use]
pub fn find(uri: &str) -> Option<&'static ResourceDef> {
    RESOURCES.iter().find(|def| def.uri == uri)
}

/// Build the `ListResourcesResult` for the fixed resource set.
#[must_use]
pub fn list_resources() -> ListResourcesResult {
    let resources = RESOURCES
        .iter()
        .map(|def| {
            let mut raw = RawResource::new(def.uri, def.name);
            raw.description = Some(def.description.into());
            raw.mime_type = Some(MIME_TYPE.into());
            Annotated::new(raw, None)
        })
        .collect();

    ListResourcesResult::with_all_items(resources)
}

/// Handle `resources/read` with a single upstream call.
///
/// # Errors
///
/// Returns `AppError::UnknownResource` for URIs outside the fixed set and
/// `AppError::Upstream` if the call fails.
pub async fn read_resource(uri: &str, registry: &OperationRegistry) -> Result<ReadResourceResult> {
    let def = find(uri).ok_or_else(|| AppError::UnknownResource(uri.to_owned()))?;

    let parts = def
        .query
        .iter()
        .fold(RequestParts::get(def.path), |parts, (key, value)| {
            parts.with_query(key, value)
        });
    let body = registry.primary().send(parts).await?;
    let text = serde_json::to_string_pretty(&body)
        .map_err(|err| AppError::Mcp(format!("failed to render resource: {err}")))?;

    info!(uri, "resource read");

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}

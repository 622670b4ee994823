//! MCP server handler bridging protocol requests to the operation registry.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListResourcesResult,
    ListToolsResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::Value;
use tracing::{info_span, warn, Instrument};

use super::resources;
use crate::registry::OperationRegistry;
use crate::services::Operation;
use crate::AppError;

const INSTRUCTIONS: &str = "Gateway to Front, plus Pipedrive, Instantly and Dealfront when \
     configured. Every tool maps to one REST call and returns the upstream JSON; failures come \
     back as error results carrying the upstream message.";

/// Per-session MCP front-end exposing every registered operation as a tool.
#[derive(Clone)]
pub struct GatewayServer {
    registry: Arc<OperationRegistry>,
}

impl GatewayServer {
    /// Create a front-end bound to the shared registry.
    #[must_use]
    pub fn new(registry: Arc<OperationRegistry>) -> Self {
        Self { registry }
    }

    /// Access the shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    /// Render every registered operation as an MCP tool.
    #[must_use]
    pub fn all_tools(&self) -> Vec<Tool> {
        self.registry.descriptors().map(to_tool).collect()
    }

    /// Execute one tool call, folding every failure into an error result.
    pub async fn dispatch(&self, request: CallToolRequestParam) -> CallToolResult {
        match self
            .registry
            .invoke(&request.name, request.arguments.as_ref())
            .await
        {
            Ok(value) => CallToolResult::success(vec![Content::text(pretty(&value))]),
            Err(err) => {
                warn!(%err, "tool call failed");
                CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    err.user_message()
                ))])
            }
        }
    }
}

fn to_tool(operation: &Operation) -> Tool {
    Tool::new(
        operation.name(),
        operation.description(),
        Arc::new(operation.input_schema()),
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl ServerHandler for GatewayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_owned()),
            ..Default::default()
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("call_tool", tool = %request.name);
        async move { Ok(self.dispatch(request).await) }.instrument(span)
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.all_tools())))
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        std::future::ready(Ok(resources::list_resources()))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("read_resource", uri = %request.uri);
        async move {
            resources::read_resource(&request.uri, &self.registry)
                .await
                .map_err(|err| match err {
                    AppError::UnknownResource(_) => {
                        rmcp::ErrorData::resource_not_found(err.user_message(), None)
                    }
                    other => {
                        warn!(err = %other, "resource read failed");
                        rmcp::ErrorData::internal_error(other.user_message(), None)
                    }
                })
        }
        .instrument(span)
    }
}

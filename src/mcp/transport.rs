//! Stdio transport: one implicit session on stdin/stdout.
//!
//! Logs never touch stdout; the tracing subscriber writes to stderr.

use std::sync::Arc;

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::GatewayServer;
use crate::registry::OperationRegistry;
use crate::{AppError, Result};

/// Serve one front-end over stdio until EOF or the cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the handshake or the running service fails.
pub async fn serve_stdio(registry: Arc<OperationRegistry>, ct: CancellationToken) -> Result<()> {
    let server = GatewayServer::new(registry);

    info!("starting stdio MCP transport");
    let service = server
        .serve_with_ct(stdio(), ct)
        .await
        .map_err(|err| AppError::Mcp(format!("stdio transport failed: {err}")))?;

    let reason = service
        .waiting()
        .await
        .map_err(|err| AppError::Mcp(format!("stdio service error: {err}")))?;

    info!(?reason, "stdio MCP transport shut down");
    Ok(())
}

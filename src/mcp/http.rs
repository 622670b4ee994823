//! HTTP transport with session continuity.
//!
//! Every MCP message is a `POST` to `/mcp` (or `/mcp/{token}`). An
//! `initialize` request without a session header creates a session and the
//! response carries its id in `mcp-session-id`; every later request must
//! present that header. `DELETE` closes the session.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use super::session::{Session, SessionManager};
use crate::config::GlobalConfig;
use crate::registry::OperationRegistry;
use crate::{AppError, Result};

/// Header carrying the server-issued session id.
pub const SESSION_HEADER: &str = "mcp-session-id";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const INVALID_PARAMS: i64 = -32602;
const INTERNAL_ERROR: i64 = -32603;
const MISSING_SESSION: i64 = -32000;
const UNKNOWN_SESSION: i64 = -32001;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct HttpState {
    sessions: SessionManager,
    auth_token: Option<Arc<str>>,
}

impl HttpState {
    /// Bundle the session manager with the optional gateway secret.
    #[must_use]
    pub fn new(sessions: SessionManager, auth_token: Option<String>) -> Self {
        Self {
            sessions,
            auth_token: auth_token.map(Arc::from),
        }
    }

    /// The session manager behind this transport.
    #[must_use]
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}

/// Build the axum router for the transport.
#[must_use]
pub fn router(state: HttpState) -> Router {
    let bare = Router::new()
        .route("/mcp", any(handle_mcp))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_secret));
    let tokened = Router::new()
        .route("/mcp/{token}", any(handle_mcp))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_secret_or_path_token,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(bare)
        .merge(tokened)
        .with_state(state)
}

/// Handler for `GET /health`; never requires the gateway secret.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Secret from the bearer header, else the percent-decoded `{token}` segment.
fn presented_secret<'a>(headers: &'a HeaderMap, path_token: Option<&'a str>) -> Option<&'a str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .or(path_token.filter(|token| !token.is_empty()))
}

fn authorized(state: &HttpState, headers: &HeaderMap, path_token: Option<&str>) -> bool {
    let Some(expected) = state.auth_token.as_deref() else {
        return true;
    };
    presented_secret(headers, path_token)
        .is_some_and(|presented| presented.as_bytes().ct_eq(expected.as_bytes()).into())
}

fn reject(request: &Request) -> Response {
    warn!(path = %request.uri().path(), "rejected request without valid gateway secret");
    AppError::Unauthorized("missing or invalid authorization".into()).into_response()
}

async fn require_secret(State(state): State<HttpState>, request: Request, next: Next) -> Response {
    if !authorized(&state, request.headers(), None) {
        return reject(&request);
    }
    next.run(request).await
}

async fn require_secret_or_path_token(
    State(state): State<HttpState>,
    Path(token): Path<String>,
    request: Request,
    next: Next,
) -> Response {
    if !authorized(&state, request.headers(), Some(&token)) {
        return reject(&request);
    }
    next.run(request).await
}

async fn handle_mcp(
    State(state): State<HttpState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let Some(session_id) = session_id else {
        if method == Method::POST {
            return initialize(&state, &body).await;
        }
        return missing_session();
    };

    let session = match state.sessions.get_session(&session_id).await {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    let span = info_span!("mcp_request", session_id = %session.id, %method);
    async move {
        match method {
            Method::POST => forward(&session, &body).await,
            Method::DELETE => match state.sessions.close_session(&session.id).await {
                Ok(()) => StatusCode::NO_CONTENT.into_response(),
                Err(err) => err.into_response(),
            },
            _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        }
    }
    .instrument(span)
    .await
}

async fn initialize(state: &HttpState, body: &[u8]) -> Response {
    let message = match parse_message(body) {
        Ok(message) => message,
        Err(response) => return response,
    };
    if classify(&message) != MessageKind::Request
        || message.get("method").and_then(Value::as_str) != Some("initialize")
    {
        return missing_session();
    }

    let session = state.sessions.create_session().await;
    match session.transport.request(&message).await {
        Ok(reply) => {
            let mut response = Json(reply).into_response();
            if let Ok(value) = HeaderValue::from_str(&session.id) {
                response.headers_mut().insert(SESSION_HEADER, value);
            }
            response
        }
        Err(err) => {
            warn!(%err, session_id = %session.id, "session initialization failed");
            let _ = state.sessions.close_session(&session.id).await;
            match err {
                // The service hung up on the handshake: the initialize itself was rejected.
                AppError::SessionNotFound(_) => rpc_error(
                    StatusCode::BAD_REQUEST,
                    INVALID_PARAMS,
                    "Invalid params: initialize request rejected",
                    message.get("id").cloned().unwrap_or(Value::Null),
                ),
                other => other.into_response(),
            }
        }
    }
}

async fn forward(session: &Session, body: &[u8]) -> Response {
    let message = match parse_message(body) {
        Ok(message) => message,
        Err(response) => return response,
    };

    match classify(&message) {
        MessageKind::Request => match session.transport.request(&message).await {
            Ok(reply) => Json(reply).into_response(),
            Err(err) => err.into_response(),
        },
        MessageKind::Notification | MessageKind::Response => {
            match session.transport.send(&message).await {
                Ok(()) => StatusCode::ACCEPTED.into_response(),
                Err(err) => err.into_response(),
            }
        }
        MessageKind::Invalid => rpc_error(
            StatusCode::BAD_REQUEST,
            INVALID_REQUEST,
            "Invalid Request",
            message.get("id").cloned().unwrap_or(Value::Null),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Request,
    Notification,
    Response,
    Invalid,
}

fn classify(message: &Value) -> MessageKind {
    let has_id = message.get("id").is_some_and(|id| !id.is_null());
    let has_method = message.get("method").is_some_and(Value::is_string);
    let has_outcome = message.get("result").is_some() || message.get("error").is_some();

    match (has_method, has_id, has_outcome) {
        (true, true, false) => MessageKind::Request,
        (true, false, false) => MessageKind::Notification,
        (false, true, true) => MessageKind::Response,
        _ => MessageKind::Invalid,
    }
}

/// Decode one JSON-RPC message; batches are not supported.
fn parse_message(body: &[u8]) -> std::result::Result<Value, Response> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        debug!(%err, "unparseable request body");
        rpc_error(StatusCode::BAD_REQUEST, PARSE_ERROR, "Parse error", Value::Null)
    })?;

    match value {
        Value::Object(_) => Ok(value),
        Value::Array(_) => Err(rpc_error(
            StatusCode::BAD_REQUEST,
            INVALID_REQUEST,
            "Invalid Request: batch requests are not supported",
            Value::Null,
        )),
        _ => Err(rpc_error(
            StatusCode::BAD_REQUEST,
            INVALID_REQUEST,
            "Invalid Request",
            Value::Null,
        )),
    }
}

fn missing_session() -> Response {
    AppError::BadRequest("missing session identifier".into()).into_response()
}

fn rpc_error(status: StatusCode, code: i64, message: &str, id: Value) -> Response {
    let body = json!({
        "jsonrpc": "2.0",
        "error": { "code": code, "message": message },
        "id": id,
    });
    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized(message) => {
                let body = json!({ "code": "unauthorized", "message": message });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            Self::SessionNotFound(_) => rpc_error(
                StatusCode::NOT_FOUND,
                UNKNOWN_SESSION,
                "Session not found",
                Value::Null,
            ),
            Self::BadRequest(message) => rpc_error(
                StatusCode::BAD_REQUEST,
                MISSING_SESSION,
                &format!("Bad Request: {message}"),
                Value::Null,
            ),
            other => {
                warn!(err = %other, "internal transport error");
                rpc_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR,
                    &format!("Internal error: {}", other.user_message()),
                    Value::Null,
                )
            }
        }
    }
}

/// Serve the HTTP transport on an already-bound listener until `ct` fires.
///
/// Every live session is closed during shutdown.
///
/// # Errors
///
/// Returns `AppError::Io` if the server fails while accepting connections.
pub async fn serve_http_with_listener(
    listener: TcpListener,
    state: HttpState,
    ct: CancellationToken,
) -> Result<()> {
    let sessions = state.sessions.clone();
    let app = router(state);

    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "starting HTTP MCP transport");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await
        .map_err(|err| AppError::Io(format!("HTTP server error: {err}")))?;

    sessions.close_all().await;
    info!("HTTP MCP transport shut down");
    Ok(())
}

/// Bind `bind_address:http_port` and serve the HTTP transport.
///
/// # Errors
///
/// Returns `AppError::Config` if the address is invalid or cannot be bound.
pub async fn serve_http(
    config: &GlobalConfig,
    registry: Arc<OperationRegistry>,
    ct: CancellationToken,
) -> Result<()> {
    let ip: IpAddr = config.bind_address.parse().map_err(|err| {
        AppError::Config(format!("bind_address '{}' invalid: {err}", config.bind_address))
    })?;
    let bind = SocketAddr::new(ip, config.http_port);

    let listener = TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind HTTP on {bind}: {err}")))?;

    let sessions = SessionManager::new(registry)
        .with_idle_timeout(Duration::from_secs(config.session_idle_timeout_seconds));
    let state = HttpState::new(
        sessions,
        config.credentials.mcp_auth_token.clone(),
    );
    serve_http_with_listener(listener, state, ct).await
}

//! Session registry for the HTTP transport.
//!
//! Every session owns a [`GatewayServer`] running as an rmcp service on an
//! in-process duplex stream. The HTTP adapter writes newline-delimited
//! JSON-RPC messages into the stream and matches responses back to the
//! waiting request by id.
//!
//! Clients of the HTTP transport can vanish without a `DELETE`, so each
//! session also runs an idle watchdog that closes it after a period with no
//! traffic and no request in flight.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rmcp::service::ServiceExt;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, ReadHalf, WriteHalf};
use tokio::sync::{oneshot, Mutex, Notify, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use super::handler::GatewayServer;
use crate::registry::OperationRegistry;
use crate::{AppError, Result};

/// Buffer size of each session's in-process duplex stream.
const SESSION_BUFFER_BYTES: usize = 64 * 1024;

/// Idle period after which a session is closed unless configured otherwise.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Requests awaiting a response, keyed by the serialized JSON-RPC id.
type PendingResponses = Arc<Mutex<HashMap<String, oneshot::Sender<Value>>>>;

/// Client half of a session's duplex stream.
pub struct SessionTransport {
    writer: Mutex<WriteHalf<DuplexStream>>,
    pending: PendingResponses,
    activity: Arc<Notify>,
    ct: CancellationToken,
}

impl SessionTransport {
    fn spawn(
        session_id: &str,
        stream: DuplexStream,
        ct: CancellationToken,
        idle_timeout: Duration,
    ) -> Arc<Self> {
        let (reader, writer) = tokio::io::split(stream);
        let pending = PendingResponses::default();
        let activity = Arc::new(Notify::new());

        let span = info_span!("session_reader", session_id = %session_id);
        tokio::spawn(
            route_responses(reader, Arc::clone(&pending), ct.clone()).instrument(span),
        );

        let span = info_span!("session_idle_watchdog", session_id = %session_id);
        tokio::spawn(
            watch_idle(
                idle_timeout,
                Arc::clone(&activity),
                Arc::clone(&pending),
                ct.clone(),
            )
            .instrument(span),
        );

        Arc::new(Self {
            writer: Mutex::new(writer),
            pending,
            activity,
            ct,
        })
    }

    /// Send a JSON-RPC request and wait for the matching response.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the message has no id or the id is
    /// already in flight, and `AppError::SessionNotFound` if the session
    /// closes before answering.
    pub async fn request(&self, message: &Value) -> Result<Value> {
        let key = message
            .get("id")
            .map(Value::to_string)
            .ok_or_else(|| AppError::BadRequest("request has no id".into()))?;

        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock().await;
            if pending.contains_key(&key) {
                return Err(AppError::BadRequest(format!(
                    "request id {key} is already in flight"
                )));
            }
            pending.insert(key.clone(), tx);
        }

        if let Err(err) = self.send(message).await {
            self.pending.lock().await.remove(&key);
            return Err(err);
        }

        let reply = rx
            .await
            .map_err(|_| AppError::SessionNotFound("session closed".into()));
        self.activity.notify_one();
        reply
    }

    /// Write a notification or response without waiting for a reply.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SessionNotFound` if the session is closed and
    /// `AppError::Mcp` if the stream rejects the write.
    pub async fn send(&self, message: &Value) -> Result<()> {
        if self.ct.is_cancelled() {
            return Err(AppError::SessionNotFound("session closed".into()));
        }
        self.activity.notify_one();

        let mut line = serde_json::to_vec(message)
            .map_err(|err| AppError::Mcp(format!("failed to encode message: {err}")))?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(&line)
            .await
            .map_err(|err| AppError::Mcp(format!("session write failed: {err}")))?;
        writer
            .flush()
            .await
            .map_err(|err| AppError::Mcp(format!("session flush failed: {err}")))
    }

    /// Stop the session's service and fail every waiting request.
    pub fn close(&self) {
        self.ct.cancel();
    }

    /// Whether the transport has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.ct.is_cancelled()
    }
}

async fn watch_idle(
    idle_timeout: Duration,
    activity: Arc<Notify>,
    pending: PendingResponses,
    ct: CancellationToken,
) {
    loop {
        let expired = tokio::select! {
            () = ct.cancelled() => return,
            () = activity.notified() => false,
            () = tokio::time::sleep(idle_timeout) => true,
        };

        // A slow upstream call is not idleness.
        if expired && pending.lock().await.is_empty() {
            info!(idle_secs = idle_timeout.as_secs(), "closing idle session");
            ct.cancel();
            return;
        }
    }
}

async fn route_responses(
    reader: ReadHalf<DuplexStream>,
    pending: PendingResponses,
    ct: CancellationToken,
) {
    let mut lines = BufReader::new(reader).lines();
    loop {
        let line = tokio::select! {
            () = ct.cancelled() => break,
            line = lines.next_line() => line,
        };

        match line {
            Ok(Some(line)) => deliver(&line, &pending).await,
            Ok(None) => break,
            Err(err) => {
                warn!(%err, "session stream read failed");
                break;
            }
        }
    }

    // Dropping the senders wakes every waiter with a closed-session error.
    pending.lock().await.clear();
    ct.cancel();
}

async fn deliver(line: &str, pending: &PendingResponses) {
    let message: Value = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(err) => {
            warn!(%err, "discarding undecodable server message");
            return;
        }
    };

    let is_response = message.get("method").is_none()
        && (message.get("result").is_some() || message.get("error").is_some());
    let key = message.get("id").map(Value::to_string);

    match key {
        Some(key) if is_response => {
            if let Some(tx) = pending.lock().await.remove(&key) {
                let _ = tx.send(message);
            } else {
                debug!(id = %key, "response without a waiting request");
            }
        }
        _ => debug!("dropping server-initiated message"),
    }
}

/// One live session.
pub struct Session {
    /// Server-issued identifier.
    pub id: String,
    /// The session's protocol front-end.
    pub front_end: GatewayServer,
    /// Client half of the session's transport.
    pub transport: Arc<SessionTransport>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("closed", &self.transport.is_closed())
            .finish_non_exhaustive()
    }
}

/// Concurrent registry of live sessions.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Arc<Session>>>>,
    registry: Arc<OperationRegistry>,
    idle_timeout: Duration,
}

impl SessionManager {
    /// Create an empty manager whose sessions share `registry`.
    #[must_use]
    pub fn new(registry: Arc<OperationRegistry>) -> Self {
        Self {
            sessions: Arc::default(),
            registry,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }

    /// Close sessions that see no traffic for `idle_timeout`.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Create and register a session with a fresh front-end and transport.
    ///
    /// The session is registered before this returns, so the first message
    /// written to its transport can already be routed by id.
    pub async fn create_session(&self) -> Arc<Session> {
        let ct = CancellationToken::new();
        let front_end = GatewayServer::new(Arc::clone(&self.registry));
        let (client_io, server_io) = tokio::io::duplex(SESSION_BUFFER_BYTES);

        let session = {
            let mut sessions = self.sessions.write().await;
            let mut id = uuid::Uuid::new_v4().to_string();
            while sessions.contains_key(&id) {
                id = uuid::Uuid::new_v4().to_string();
            }

            let session = Arc::new(Session {
                transport: SessionTransport::spawn(
                    &id,
                    client_io,
                    ct.clone(),
                    self.idle_timeout,
                ),
                front_end: front_end.clone(),
                created_at: Utc::now(),
                id: id.clone(),
            });
            sessions.insert(id, Arc::clone(&session));
            session
        };

        let manager = self.clone();
        let session_id = session.id.clone();
        let span = info_span!("session", session_id = %session_id);
        tokio::spawn(
            async move {
                match front_end
                    .serve_with_ct(tokio::io::split(server_io), ct.clone())
                    .await
                {
                    Ok(service) => {
                        if let Err(err) = service.waiting().await {
                            warn!(%err, "session service task failed");
                        }
                    }
                    Err(err) => warn!(%err, "session initialization failed"),
                }
                ct.cancel();
                manager.remove_session(&session_id).await;
            }
            .instrument(span),
        );

        info!(session_id = %session.id, "session created");
        session
    }

    /// Look up a live session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SessionNotFound` if `id` was never issued or has
    /// been closed.
    pub async fn get_session(&self, id: &str) -> Result<Arc<Session>> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::SessionNotFound(id.to_owned()))
    }

    /// Unregister a session; unknown ids are ignored.
    pub async fn remove_session(&self, id: &str) {
        if self.sessions.write().await.remove(id).is_some() {
            info!(session_id = %id, "session removed");
        }
    }

    /// Close a session's transport and unregister it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SessionNotFound` if `id` is not live.
    pub async fn close_session(&self, id: &str) -> Result<()> {
        let session = self.get_session(id).await?;
        session.transport.close();
        self.remove_session(id).await;
        Ok(())
    }

    /// Close every live session.
    pub async fn close_all(&self) {
        let drained: Vec<_> = self.sessions.write().await.drain().collect();
        for (_, session) in &drained {
            session.transport.close();
        }
        if !drained.is_empty() {
            info!(count = drained.len(), "closed all sessions");
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session is live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

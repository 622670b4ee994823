//! Error types shared across the gateway.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all gateway failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Request did not present a valid gateway secret.
    Unauthorized(String),
    /// Session identifier is unknown or already closed.
    SessionNotFound(String),
    /// Inbound HTTP request is malformed.
    BadRequest(String),
    /// No operation is registered under the requested name.
    UnknownOperation(String),
    /// No resource is exposed under the requested URI.
    UnknownResource(String),
    /// Tool arguments violate the operation's parameter contract.
    InvalidParams(String),
    /// Upstream service call failed.
    Upstream(String),
    /// MCP protocol or session transport failure.
    Mcp(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl AppError {
    /// Caller-facing message without the error kind prefix.
    ///
    /// Tool results surface this text verbatim after `Error: `.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownOperation(name) => format!("Unknown tool: {name}"),
            Self::UnknownResource(uri) => format!("Unknown resource: {uri}"),
            Self::Config(msg)
            | Self::Unauthorized(msg)
            | Self::SessionNotFound(msg)
            | Self::BadRequest(msg)
            | Self::InvalidParams(msg)
            | Self::Upstream(msg)
            | Self::Mcp(msg)
            | Self::Io(msg) => msg.clone(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Unauthorized(msg) => write!(f, "unauthorized: {msg}"),
            Self::SessionNotFound(msg) => write!(f, "session not found: {msg}"),
            Self::BadRequest(msg) => write!(f, "bad request: {msg}"),
            Self::UnknownOperation(msg) => write!(f, "unknown operation: {msg}"),
            Self::UnknownResource(msg) => write!(f, "unknown resource: {msg}"),
            Self::InvalidParams(msg) => write!(f, "invalid params: {msg}"),
            Self::Upstream(msg) => write!(f, "upstream: {msg}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

//! Global configuration parsing, validation, and credential loading.

use std::env;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use reqwest::Url;
use serde::Deserialize;
use tracing::warn;

use crate::mcp::session::DEFAULT_IDLE_TIMEOUT;
use crate::{AppError, Result};

/// Default Front API root.
pub const FRONTAPP_BASE_URL: &str = "https://api2.frontapp.com";
/// Default Instantly API root.
pub const INSTANTLY_BASE_URL: &str = "https://api.instantly.ai/api/v2";
/// Default Leadfeeder API root.
pub const DEALFRONT_BASE_URL: &str = "https://api.leadfeeder.com";
/// Default Dealfront IP-Enrich API root.
pub const DEALFRONT_IP_ENRICH_BASE_URL: &str = "https://api.lf-discover.com";

fn default_http_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

fn default_session_idle_timeout_seconds() -> u64 {
    DEFAULT_IDLE_TIMEOUT.as_secs()
}

/// JSON pointers tried, in order, when extracting an upstream error message.
#[must_use]
pub fn default_error_message_fields() -> Vec<String> {
    [
        "/message",
        "/error",
        "/_error/message",
        "/errors/0/detail",
        "/errors/0/title",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// Per-service base URL overrides.
///
/// Absent entries fall back to the public API roots.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct BaseUrls {
    /// Front API root.
    pub frontapp: Option<String>,
    /// Pipedrive API root; defaults to `https://{domain}.pipedrive.com/api/v1`.
    pub pipedrive: Option<String>,
    /// Instantly API root.
    pub instantly: Option<String>,
    /// Leadfeeder API root.
    pub dealfront: Option<String>,
    /// Dealfront IP-Enrich API root.
    pub dealfront_ip_enrich: Option<String>,
}

/// Pipedrive credentials; both halves are required together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipedriveCredentials {
    /// API token sent as `x-api-token`.
    pub api_token: String,
    /// Company subdomain, e.g. `acme` for `acme.pipedrive.com`.
    pub domain: String,
}

/// Secrets loaded from the environment at runtime, never from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Front API token (mandatory).
    pub frontapp_api_token: String,
    /// Pipedrive token and domain.
    pub pipedrive: Option<PipedriveCredentials>,
    /// Instantly API key.
    pub instantly_api_key: Option<String>,
    /// Leadfeeder API key.
    pub dealfront_api_key: Option<String>,
    /// Dealfront IP-Enrich API key; only honored alongside `dealfront_api_key`.
    pub dealfront_ip_enrich_api_key: Option<String>,
    /// Gateway secret guarding the HTTP transport.
    pub mcp_auth_token: Option<String>,
}

/// Global configuration parsed from an optional `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// HTTP port for the session transport; `PORT` overrides it.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Listen address for the HTTP transport; `BIND_ADDRESS` overrides it.
    ///
    /// Hosts that assign `PORT` usually expect `0.0.0.0`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Seconds without traffic after which an HTTP session is closed.
    #[serde(default = "default_session_idle_timeout_seconds")]
    pub session_idle_timeout_seconds: u64,
    /// Ordered JSON pointers used to pull a message out of upstream error bodies.
    #[serde(default = "default_error_message_fields")]
    pub error_message_fields: Vec<String>,
    /// Base URL overrides.
    #[serde(default)]
    pub base_urls: BaseUrls,
    /// Service credentials (populated at runtime).
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
            session_idle_timeout_seconds: default_session_idle_timeout_seconds(),
            error_message_fields: default_error_message_fields(),
            base_urls: BaseUrls::default(),
            credentials: Credentials::default(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load service credentials and listener overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`GlobalConfig::load_credentials_with`].
    pub fn load_credentials(&mut self) -> Result<()> {
        self.load_credentials_with(|key| env::var(key).ok())
    }

    /// Load credentials through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when `FRONTAPP_API_TOKEN` is missing, when
    /// only one of `PIPEDRIVE_API_TOKEN`/`PIPEDRIVE_DOMAIN` is set, when
    /// `DEALFRONT_IP_ENRICH_API_KEY` is set without `DEALFRONT_API_KEY`, when
    /// `PORT` is not a valid port number, or when `BIND_ADDRESS` is not an IP
    /// address.
    pub fn load_credentials_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let frontapp_api_token = get("FRONTAPP_API_TOKEN").ok_or_else(|| {
            AppError::Config("FRONTAPP_API_TOKEN environment variable is required".into())
        })?;

        let pipedrive = match (get("PIPEDRIVE_API_TOKEN"), get("PIPEDRIVE_DOMAIN")) {
            (Some(api_token), Some(domain)) => Some(PipedriveCredentials { api_token, domain }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(AppError::Config(
                    "PIPEDRIVE_DOMAIN is required when PIPEDRIVE_API_TOKEN is set".into(),
                ))
            }
            (None, Some(_)) => {
                return Err(AppError::Config(
                    "PIPEDRIVE_API_TOKEN is required when PIPEDRIVE_DOMAIN is set".into(),
                ))
            }
        };

        let dealfront_api_key = get("DEALFRONT_API_KEY");
        let dealfront_ip_enrich_api_key = get("DEALFRONT_IP_ENRICH_API_KEY");
        if dealfront_ip_enrich_api_key.is_some() && dealfront_api_key.is_none() {
            return Err(AppError::Config(
                "DEALFRONT_API_KEY is required when DEALFRONT_IP_ENRICH_API_KEY is set".into(),
            ));
        }

        if let Some(port) = get("PORT") {
            self.http_port = port
                .trim()
                .parse()
                .map_err(|err| AppError::Config(format!("invalid PORT '{port}': {err}")))?;
        }

        if let Some(address) = get("BIND_ADDRESS") {
            let address = address.trim();
            address.parse::<IpAddr>().map_err(|err| {
                AppError::Config(format!("invalid BIND_ADDRESS '{address}': {err}"))
            })?;
            self.bind_address = address.to_owned();
        }

        let mcp_auth_token = get("MCP_AUTH_TOKEN");
        if mcp_auth_token.is_none() {
            warn!("MCP_AUTH_TOKEN not set; HTTP transport accepts unauthenticated requests");
        }

        self.credentials = Credentials {
            frontapp_api_token,
            pipedrive,
            instantly_api_key: get("INSTANTLY_API_KEY"),
            dealfront_api_key,
            dealfront_ip_enrich_api_key,
            mcp_auth_token,
        };
        Ok(())
    }

    /// Resolved Front API root.
    #[must_use]
    pub fn frontapp_base_url(&self) -> String {
        self.base_urls
            .frontapp
            .clone()
            .unwrap_or_else(|| FRONTAPP_BASE_URL.into())
    }

    /// Resolved Pipedrive API root, if Pipedrive is configured.
    #[must_use]
    pub fn pipedrive_base_url(&self) -> Option<String> {
        let creds = self.credentials.pipedrive.as_ref()?;
        Some(
            self.base_urls
                .pipedrive
                .clone()
                .unwrap_or_else(|| format!("https://{}.pipedrive.com/api/v1", creds.domain)),
        )
    }

    /// Resolved Instantly API root.
    #[must_use]
    pub fn instantly_base_url(&self) -> String {
        self.base_urls
            .instantly
            .clone()
            .unwrap_or_else(|| INSTANTLY_BASE_URL.into())
    }

    /// Resolved Leadfeeder API root.
    #[must_use]
    pub fn dealfront_base_url(&self) -> String {
        self.base_urls
            .dealfront
            .clone()
            .unwrap_or_else(|| DEALFRONT_BASE_URL.into())
    }

    /// Resolved Dealfront IP-Enrich API root.
    #[must_use]
    pub fn dealfront_ip_enrich_base_url(&self) -> String {
        self.base_urls
            .dealfront_ip_enrich
            .clone()
            .unwrap_or_else(|| DEALFRONT_IP_ENRICH_BASE_URL.into())
    }

    fn validate(&self) -> Result<()> {
        self.bind_address.parse::<IpAddr>().map_err(|err| {
            AppError::Config(format!("bind_address '{}' invalid: {err}", self.bind_address))
        })?;

        if self.session_idle_timeout_seconds == 0 {
            return Err(AppError::Config(
                "session_idle_timeout_seconds must be greater than zero".into(),
            ));
        }

        if self.error_message_fields.is_empty() {
            return Err(AppError::Config(
                "error_message_fields must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .error_message_fields
            .iter()
            .find(|pointer| !pointer.starts_with('/'))
        {
            return Err(AppError::Config(format!(
                "error_message_fields entry '{bad}' must be a JSON pointer starting with '/'"
            )));
        }

        let overrides = [
            ("frontapp", &self.base_urls.frontapp),
            ("pipedrive", &self.base_urls.pipedrive),
            ("instantly", &self.base_urls.instantly),
            ("dealfront", &self.base_urls.dealfront),
            ("dealfront_ip_enrich", &self.base_urls.dealfront_ip_enrich),
        ];
        for (service, url) in overrides {
            if let Some(url) = url {
                let parsed = Url::parse(url).map_err(|err| {
                    AppError::Config(format!("base_urls.{service} '{url}' invalid: {err}"))
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(AppError::Config(format!(
                        "base_urls.{service} must use http or https"
                    )));
                }
            }
        }

        Ok(())
    }
}

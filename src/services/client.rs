//! Per-service HTTP client and upstream error decoding.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::operation::RequestParts;
use crate::{AppError, Result};

/// Credential header attached to every request of one service.
#[derive(Debug, Clone)]
pub struct AuthHeader {
    name: HeaderName,
    value: String,
}

impl AuthHeader {
    /// `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self {
            name: reqwest::header::AUTHORIZATION,
            value: format!("Bearer {token}"),
        }
    }

    /// Arbitrary header; `name` must be lowercase.
    #[must_use]
    pub fn custom(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name: HeaderName::from_static(name),
            value: value.into(),
        }
    }
}

/// HTTP client bound to one upstream service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    service: &'static str,
    base_url: Url,
    http: reqwest::Client,
    error_fields: Arc<[String]>,
}

impl ServiceClient {
    /// Build a client for `service` rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the base URL or credential header is
    /// invalid, or the HTTP client cannot be constructed.
    pub fn new(
        service: &'static str,
        base_url: &str,
        auth: AuthHeader,
        error_fields: Arc<[String]>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Config(format!("{service} base url invalid: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "{service} base url cannot carry a path"
            )));
        }

        let mut auth_value = HeaderValue::from_str(&auth.value)
            .map_err(|err| AppError::Config(format!("{service} credential invalid: {err}")))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(auth.name, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::Config(format!("{service} http client: {err}")))?;

        Ok(Self {
            service,
            base_url,
            http,
            error_fields,
        })
    }

    /// Service label used in logs.
    #[must_use]
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Absolute URL for `parts`; path segments are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the base URL cannot take path segments.
    pub fn url_for(&self, parts: &RequestParts) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::Config(format!("{} base url cannot carry a path", self.service)))?
            .pop_if_empty()
            .extend(&parts.segments);
        if !parts.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&parts.query);
        }
        Ok(url)
    }

    /// Send one request and decode the response.
    ///
    /// An empty success body decodes to `null`; a non-JSON body to a string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` carrying the extracted error message for
    /// non-success statuses, or the client's message for transport failures.
    pub async fn send(&self, parts: RequestParts) -> Result<Value> {
        let url = self.url_for(&parts)?;
        debug!(service = self.service, method = %parts.method, path = url.path(), "upstream request");

        let mut request = self.http.request(parts.method, url);
        if let Some(body) = &parts.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            warn!(service = self.service, %err, "upstream request failed");
            AppError::Upstream(err.to_string())
        })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| AppError::Upstream(err.to_string()))?;

        if status.is_success() {
            Ok(decode_body(&text))
        } else {
            let message = extract_error_message(&text, status.as_u16(), &self.error_fields);
            warn!(service = self.service, status = status.as_u16(), %message, "upstream returned error");
            Err(AppError::Upstream(message))
        }
    }
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Pull a human-readable message out of an upstream error body.
///
/// `fields` are JSON pointers tried in order; the first non-blank string
/// wins. Falls back to `Request failed with status code <status>`.
#[must_use]
pub fn extract_error_message(body: &str, status: u16, fields: &[String]) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            fields.iter().find_map(|pointer| {
                value
                    .pointer(pointer)
                    .and_then(Value::as_str)
                    .filter(|message| !message.trim().is_empty())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| format!("Request failed with status code {status}"))
}

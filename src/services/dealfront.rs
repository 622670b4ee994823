//! Dealfront lead enrichment: Leadfeeder API and the IP-Enrich sub-service.
//!
//! Leadfeeder authenticates with `Authorization: Token token=<key>` and
//! pages with JSON:API `page[number]`/`page[size]` parameters. IP-Enrich
//! is a separate host keyed by `X-API-KEY`.

use std::sync::Arc;

use super::client::{AuthHeader, ServiceClient};
use super::operation::{Operation, Param};
use crate::config::GlobalConfig;
use crate::Result;

/// Service label used in logs and errors.
pub const SERVICE: &str = "dealfront";

/// Service label for the IP-Enrich host.
pub const IP_ENRICH_SERVICE: &str = "dealfront_ip_enrich";

/// Build the Leadfeeder client, or `None` when no API key is configured.
///
/// # Errors
///
/// Returns `AppError::Config` if the base URL or key is unusable.
pub fn client(config: &GlobalConfig, error_fields: Arc<[String]>) -> Result<Option<ServiceClient>> {
    let Some(key) = config.credentials.dealfront_api_key.as_deref() else {
        return Ok(None);
    };
    ServiceClient::new(
        SERVICE,
        &config.dealfront_base_url(),
        AuthHeader::custom("authorization", format!("Token token={key}")),
        error_fields,
    )
    .map(Some)
}

/// Build the IP-Enrich client, or `None` when no IP-Enrich key is configured.
///
/// # Errors
///
/// Returns `AppError::Config` if the base URL or key is unusable.
pub fn ip_enrich_client(
    config: &GlobalConfig,
    error_fields: Arc<[String]>,
) -> Result<Option<ServiceClient>> {
    let Some(key) = config.credentials.dealfront_ip_enrich_api_key.as_deref() else {
        return Ok(None);
    };
    ServiceClient::new(
        IP_ENRICH_SERVICE,
        &config.dealfront_ip_enrich_base_url(),
        AuthHeader::custom("x-api-key", key),
        error_fields,
    )
    .map(Some)
}

fn account_id() -> Param {
    Param::string("account_id", "Leadfeeder account ID.").required()
}

fn page_number() -> Param {
    Param::number("page_number", "Page number (1-based).").wire("page[number]")
}

fn page_size() -> Param {
    Param::number("page_size", "Results per page (max 100).").wire("page[size]")
}

/// Leadfeeder operations, in listing order.
#[must_use]
pub fn operations() -> Vec<Operation> {
    vec![
        Operation::get("dealfront_list_accounts", "/accounts")
            .describe("List Leadfeeder accounts accessible with the configured API key."),
        Operation::get("dealfront_get_account", "/accounts/{account_id}")
            .describe("Get a single Leadfeeder account.")
            .param(account_id()),
        Operation::get("dealfront_list_leads", "/accounts/{account_id}/leads")
            .describe("List companies (leads) that visited the website in a date range.")
            .param(account_id())
            .param(Param::string("start_date", "Start date (YYYY-MM-DD)."))
            .param(Param::string("end_date", "End date (YYYY-MM-DD)."))
            .param(page_number())
            .param(page_size()),
        Operation::get("dealfront_get_lead", "/accounts/{account_id}/leads/{lead_id}")
            .describe("Get a single lead (company) with firmographic details.")
            .param(account_id())
            .param(Param::string("lead_id", "Lead ID.").required()),
        Operation::get(
            "dealfront_list_lead_visits",
            "/accounts/{account_id}/leads/{lead_id}/visits",
        )
        .describe("List website visits made by one lead.")
        .param(account_id())
        .param(Param::string("lead_id", "Lead ID.").required())
        .param(page_number())
        .param(page_size()),
        Operation::get("dealfront_list_visits", "/accounts/{account_id}/visits")
            .describe("List all website visits in a date range.")
            .param(account_id())
            .param(Param::string("start_date", "Start date (YYYY-MM-DD)."))
            .param(Param::string("end_date", "End date (YYYY-MM-DD)."))
            .param(page_number())
            .param(page_size()),
        Operation::get("dealfront_list_custom_feeds", "/accounts/{account_id}/custom-feeds")
            .describe("List custom feeds (saved lead filters) of an account.")
            .param(account_id()),
        Operation::get(
            "dealfront_list_custom_feed_leads",
            "/accounts/{account_id}/custom-feeds/{feed_id}/leads",
        )
        .describe("List leads matching a custom feed in a date range.")
        .param(account_id())
        .param(Param::string("feed_id", "Custom feed ID.").required())
        .param(Param::string("start_date", "Start date (YYYY-MM-DD)."))
        .param(Param::string("end_date", "End date (YYYY-MM-DD)."))
        .param(page_number())
        .param(page_size()),
        Operation::post("dealfront_create_export", "/export-requests")
            .describe("Request an asynchronous export of leads for a date range.")
            .param(account_id())
            .param(Param::string("start_date", "Start date (YYYY-MM-DD).").required())
            .param(Param::string("end_date", "End date (YYYY-MM-DD).").required())
            .json_api("export-requests"),
        Operation::get("dealfront_get_export_status", "/export-requests/{export_id}")
            .describe("Check the status of an export request and get its download URL.")
            .param(Param::string("export_id", "Export request ID.").required()),
    ]
}

/// IP-Enrich operations; present only when the IP-Enrich key is configured.
#[must_use]
pub fn ip_enrich_operations() -> Vec<Operation> {
    vec![Operation::get("dealfront_enrich_ip", "/companies")
        .describe("Identify the company behind an IP address.")
        .param(Param::string("ip", "IPv4 or IPv6 address.").required())]
}

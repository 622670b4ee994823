//! Instantly cold-email platform (API v2): client and operation catalog.

use std::sync::Arc;

use super::client::{AuthHeader, ServiceClient};
use super::operation::{Operation, Param};
use crate::config::GlobalConfig;
use crate::Result;

/// Service label used in logs and errors.
pub const SERVICE: &str = "instantly";

/// Build the Instantly client, or `None` when no API key is configured.
///
/// # Errors
///
/// Returns `AppError::Config` if the base URL or key is unusable.
pub fn client(config: &GlobalConfig, error_fields: Arc<[String]>) -> Result<Option<ServiceClient>> {
    let Some(key) = config.credentials.instantly_api_key.as_deref() else {
        return Ok(None);
    };
    ServiceClient::new(
        SERVICE,
        &config.instantly_base_url(),
        AuthHeader::bearer(key),
        error_fields,
    )
    .map(Some)
}

fn limit() -> Param {
    Param::number("limit", "Number of items to return (1-100).")
}

fn starting_after() -> Param {
    Param::string("starting_after", "Cursor from the previous page's next_starting_after.")
}

fn start_date() -> Param {
    Param::string("start_date", "Start date (YYYY-MM-DD).")
}

fn end_date() -> Param {
    Param::string("end_date", "End date (YYYY-MM-DD).")
}

/// Every Instantly operation, in listing order.
#[must_use]
#[allow(clippy::too_many_lines)] // One entry per upstream endpoint.
pub fn operations() -> Vec<Operation> {
    vec![
        // Campaign analytics
        Operation::get("get_instantly_campaign_analytics", "/campaigns/analytics")
            .describe("Get analytics for one or more Instantly campaigns.")
            .param(Param::string("id", "Campaign ID. Omit to include all campaigns."))
            .param(Param::string_array("ids", "Campaign IDs to include."))
            .param(start_date())
            .param(end_date())
            .param(Param::boolean("exclude_total_leads_count", "Skip computing the total leads count.")),
        Operation::get("get_instantly_campaign_analytics_daily", "/campaigns/analytics/daily")
            .describe("Get day-by-day analytics for Instantly campaigns.")
            .param(Param::string("campaign_id", "Campaign ID. Omit to include all campaigns."))
            .param(start_date())
            .param(end_date())
            .param(Param::number("campaign_status", "Filter by campaign status code.")),
        Operation::get("get_instantly_campaign_analytics_overview", "/campaigns/analytics/overview")
            .describe("Get an aggregated analytics overview across Instantly campaigns.")
            .param(Param::string("id", "Campaign ID. Omit to include all campaigns."))
            .param(Param::string_array("ids", "Campaign IDs to include."))
            .param(start_date())
            .param(end_date())
            .param(Param::number("campaign_status", "Filter by campaign status code.")),
        Operation::get("get_instantly_campaign_analytics_steps", "/campaigns/analytics/steps")
            .describe("Get per-step analytics for an Instantly campaign sequence.")
            .param(Param::string("campaign_id", "Campaign ID."))
            .param(start_date())
            .param(end_date())
            .param(Param::boolean("include_opportunities_count", "Include opportunity counts per step.")),

        // Account analytics
        Operation::get("get_instantly_account_analytics_daily", "/accounts/analytics/daily")
            .describe("Get daily sending analytics for Instantly email accounts.")
            .param(start_date())
            .param(end_date())
            .param(Param::string_array("emails", "Email accounts to include. Omit for all.")),
        Operation::post("get_instantly_warmup_analytics", "/accounts/warmup-analytics")
            .describe("Get warmup analytics for one or more Instantly email accounts.")
            .param(Param::string_array("emails", "Email accounts to fetch warmup analytics for.").required()),

        // Campaigns
        Operation::get("list_instantly_campaigns", "/campaigns")
            .describe("List Instantly campaigns.")
            .param(limit())
            .param(starting_after())
            .param(Param::string("search", "Search campaigns by name."))
            .param(Param::string("tag_ids", "Comma-separated tag IDs to filter by.")),
        Operation::get("get_instantly_campaign", "/campaigns/{id}")
            .describe("Get a single Instantly campaign by ID.")
            .param(Param::string("id", "Campaign ID.").required()),
        Operation::post("create_instantly_campaign", "/campaigns")
            .describe("Create an Instantly campaign.")
            .param(Param::string("name", "Campaign name.").required())
            .param(Param::object("campaign_schedule", "Sending schedule with timezone and time windows.").required())
            .param(Param::object_array("sequences", "Email sequences with steps and variants."))
            .param(Param::string_array("email_list", "Sending email accounts."))
            .param(Param::number("daily_limit", "Maximum emails sent per day."))
            .param(Param::boolean("stop_on_reply", "Stop the sequence when a lead replies."))
            .param(Param::boolean("link_tracking", "Track link clicks."))
            .param(Param::boolean("open_tracking", "Track email opens."))
            .param(Param::boolean("text_only", "Send plain-text emails only.")),
        Operation::delete("delete_instantly_campaign", "/campaigns/{id}")
            .describe("Delete an Instantly campaign.")
            .param(Param::string("id", "Campaign ID.").required()),
        Operation::get("search_instantly_campaigns_by_lead", "/campaigns/search-by-contact")
            .describe("Find the Instantly campaigns a lead belongs to.")
            .param(Param::string("search", "Lead email address.").required())
            .param(Param::string("sort_column", "Column to sort by."))
            .param(Param::string("sort_order", "Sort direction.").one_of(&["asc", "desc"])),

        // Leads
        Operation::post("list_instantly_leads", "/leads/list")
            .describe("List Instantly leads with filters.")
            .param(Param::string("campaign", "Campaign ID to filter by."))
            .param(Param::string("list_id", "Lead list ID to filter by."))
            .param(Param::string("search", "Search by name or email."))
            .param(Param::string("filter", "Predefined lead status filter."))
            .param(Param::string_array("ids", "Lead IDs to include."))
            .param(Param::string_array("contacts", "Lead emails to include."))
            .param(Param::boolean("in_campaign", "Only leads that are in a campaign."))
            .param(Param::boolean("in_list", "Only leads that are in a list."))
            .param(Param::boolean("distinct_contacts", "Deduplicate leads by email."))
            .param(limit())
            .param(starting_after()),
        Operation::get("get_instantly_lead", "/leads/{id}")
            .describe("Get a single Instantly lead by ID.")
            .param(Param::string("id", "Lead ID.").required()),
        Operation::post("create_instantly_leads", "/leads")
            .describe("Create a lead in an Instantly campaign or lead list.")
            .param(Param::string("email", "Lead email address."))
            .param(Param::string("campaign", "Campaign ID to add the lead to."))
            .param(Param::string("list_id", "Lead list ID to add the lead to."))
            .param(Param::string("first_name", "First name."))
            .param(Param::string("last_name", "Last name."))
            .param(Param::string("company_name", "Company name."))
            .param(Param::string("phone", "Phone number."))
            .param(Param::string("website", "Website URL."))
            .param(Param::string("personalization", "Personalization line."))
            .param(Param::object("custom_variables", "Custom variables keyed by name.")),
        Operation::patch("update_instantly_lead", "/leads/{id}")
            .describe("Update an Instantly lead.")
            .param(Param::string("id", "Lead ID.").required())
            .param(Param::string("first_name", "First name."))
            .param(Param::string("last_name", "Last name."))
            .param(Param::string("company_name", "Company name."))
            .param(Param::string("phone", "Phone number."))
            .param(Param::string("website", "Website URL."))
            .param(Param::string("personalization", "Personalization line."))
            .param(Param::number("lt_interest_status", "Interest status code."))
            .param(Param::object("custom_variables", "Custom variables keyed by name.")),
        Operation::delete("delete_instantly_lead", "/leads/{id}")
            .describe("Delete an Instantly lead.")
            .param(Param::string("id", "Lead ID.").required()),
        Operation::post("move_instantly_leads", "/leads/move")
            .describe("Move or copy Instantly leads to another campaign or lead list.")
            .param(Param::string_array("ids", "Lead IDs to move."))
            .param(Param::string("to_campaign_id", "Destination campaign ID."))
            .param(Param::string("to_list_id", "Destination lead list ID."))
            .param(Param::string("campaign", "Source campaign ID."))
            .param(Param::string("list_id", "Source lead list ID."))
            .param(Param::string("search", "Only move leads matching this search."))
            .param(Param::string("filter", "Only move leads matching this status filter."))
            .param(Param::boolean("copy_leads", "Copy instead of move."))
            .param(Param::boolean("check_duplicates", "Skip leads already in the destination.")),

        // Lead lists
        Operation::get("list_instantly_lead_lists", "/lead-lists")
            .describe("List Instantly lead lists.")
            .param(limit())
            .param(starting_after())
            .param(Param::string("search", "Search lead lists by name."))
            .param(Param::boolean("has_enrichment_task", "Filter by enrichment task presence.")),
        Operation::post("create_instantly_lead_list", "/lead-lists")
            .describe("Create an Instantly lead list.")
            .param(Param::string("name", "Lead list name.").required())
            .param(Param::boolean("has_enrichment_task", "Enable enrichment for the list."))
            .param(Param::string("owned_by", "User ID owning the list.")),
        Operation::patch("update_instantly_lead_list", "/lead-lists/{id}")
            .describe("Update an Instantly lead list.")
            .param(Param::string("id", "Lead list ID.").required())
            .param(Param::string("name", "Lead list name."))
            .param(Param::boolean("has_enrichment_task", "Enable enrichment for the list."))
            .param(Param::string("owned_by", "User ID owning the list.")),
        Operation::delete("delete_instantly_lead_list", "/lead-lists/{id}")
            .describe("Delete an Instantly lead list.")
            .param(Param::string("id", "Lead list ID.").required()),
        Operation::get(
            "get_instantly_lead_list_verification_stats",
            "/lead-lists/{id}/verification-stats",
        )
        .describe("Get email verification statistics for an Instantly lead list.")
        .param(Param::string("id", "Lead list ID.").required()),

        // Emails
        Operation::get("list_instantly_emails", "/emails")
            .describe("List emails sent and received through Instantly.")
            .param(limit())
            .param(starting_after())
            .param(Param::string("search", "Search emails."))
            .param(Param::string("campaign_id", "Campaign ID to filter by."))
            .param(Param::string("list_id", "Lead list ID to filter by."))
            .param(Param::string("lead", "Lead email to filter by."))
            .param(Param::string("eaccount", "Sending account to filter by."))
            .param(Param::number("i_status", "Interest status code to filter by."))
            .param(Param::boolean("is_unread", "Only unread emails."))
            .param(Param::string("email_type", "Email type.").one_of(&["received", "sent", "manual"]))
            .param(Param::string("sort_order", "Sort direction.").one_of(&["asc", "desc"])),

        // Email accounts
        Operation::get("list_instantly_accounts", "/accounts")
            .describe("List Instantly sending email accounts.")
            .param(limit())
            .param(starting_after())
            .param(Param::string("search", "Search accounts by email."))
            .param(Param::number("status", "Account status code to filter by."))
            .param(Param::number("provider_code", "Provider code to filter by."))
            .param(Param::string("tag_ids", "Comma-separated tag IDs to filter by.")),
        Operation::get("get_instantly_account", "/accounts/{email}")
            .describe("Get a single Instantly sending account by email address.")
            .param(Param::string("email", "Account email address.").required()),
    ]
}

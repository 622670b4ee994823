//! Pipedrive CRM: client and operation catalog.

use std::sync::Arc;

use super::client::{AuthHeader, ServiceClient};
use super::operation::{Operation, Param};
use crate::config::GlobalConfig;
use crate::Result;

/// Service label used in logs and errors.
pub const SERVICE: &str = "pipedrive";

/// Build the Pipedrive client, or `None` when Pipedrive is not configured.
///
/// # Errors
///
/// Returns `AppError::Config` if the base URL or token is unusable.
pub fn client(config: &GlobalConfig, error_fields: Arc<[String]>) -> Result<Option<ServiceClient>> {
    let (Some(creds), Some(base_url)) = (
        config.credentials.pipedrive.as_ref(),
        config.pipedrive_base_url(),
    ) else {
        return Ok(None);
    };
    ServiceClient::new(
        SERVICE,
        &base_url,
        AuthHeader::custom("x-api-token", creds.api_token.clone()),
        error_fields,
    )
    .map(Some)
}

/// Every Pipedrive operation, in listing order.
#[must_use]
#[allow(clippy::too_many_lines)] // One entry per upstream endpoint.
pub fn operations() -> Vec<Operation> {
    vec![
        // Deals
        Operation::get("list_deals", "/deals")
            .describe("List deals from Pipedrive with optional filtering by status, user, stage, pipeline, or custom filter.")
            .param(Param::number("limit", "Number of results to return. Default is 100."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::string("status", "Filter by deal status.").one_of(&["open", "won", "lost", "deleted"]))
            .param(Param::string("sort", "Field and order to sort by (e.g. \"update_time DESC\")."))
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::number("user_id", "Filter deals by user ID."))
            .param(Param::number("stage_id", "Filter deals by stage ID."))
            .param(Param::number("pipeline_id", "Filter deals by pipeline ID.")),
        Operation::get("get_deal", "/deals/{id}")
            .describe("Get a specific deal by its ID from Pipedrive.")
            .param(Param::number("id", "The ID of the deal.").required()),
        Operation::get("search_deals", "/deals/search")
            .describe("Search deals in Pipedrive by a search term.")
            .param(Param::string("term", "The search term to look for.").required())
            .param(Param::string("fields", "Fields to search in.").one_of(&["custom_fields", "notes", "title"]))
            .param(Param::boolean("exact_match", "When true, only exact matches are returned."))
            .param(Param::string("status", "Filter by deal status."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset.")),
        Operation::post("create_deal", "/deals")
            .describe("Create a new deal in Pipedrive.")
            .param(Param::string("title", "The title of the deal.").required())
            .param(Param::string("value", "The value of the deal."))
            .param(Param::string("currency", "The currency of the deal value (3-letter code, e.g. USD)."))
            .param(Param::number("user_id", "ID of the user who owns the deal."))
            .param(Param::number("person_id", "ID of the person associated with the deal."))
            .param(Param::number("org_id", "ID of the organization associated with the deal."))
            .param(Param::number("pipeline_id", "ID of the pipeline the deal is in."))
            .param(Param::number("stage_id", "ID of the stage the deal is in."))
            .param(Param::string("status", "Status of the deal.").one_of(&["open", "won", "lost", "deleted"]))
            .param(Param::string("expected_close_date", "Expected close date (YYYY-MM-DD)."))
            .param(Param::number("probability", "Deal success probability percentage."))
            .param(Param::number("visible_to", "Visibility of the deal (1=owner, 3=entire company).")),
        Operation::put("update_deal", "/deals/{id}")
            .describe("Update an existing deal in Pipedrive.")
            .param(Param::number("id", "The ID of the deal to update.").required())
            .param(Param::string("title", "The title of the deal."))
            .param(Param::string("value", "The value of the deal."))
            .param(Param::string("currency", "The currency of the deal value."))
            .param(Param::number("user_id", "ID of the user who owns the deal."))
            .param(Param::number("person_id", "ID of the person associated with the deal."))
            .param(Param::number("org_id", "ID of the organization associated with the deal."))
            .param(Param::number("pipeline_id", "ID of the pipeline the deal is in."))
            .param(Param::number("stage_id", "ID of the stage the deal is in."))
            .param(Param::string("status", "Status of the deal.").one_of(&["open", "won", "lost", "deleted"]))
            .param(Param::string("expected_close_date", "Expected close date (YYYY-MM-DD)."))
            .param(Param::number("probability", "Deal success probability percentage."))
            .param(Param::number("visible_to", "Visibility of the deal.")),
        Operation::delete("delete_deal", "/deals/{id}")
            .describe("Delete a deal from Pipedrive.")
            .param(Param::number("id", "The ID of the deal to delete.").required()),
        Operation::get("get_deal_activities", "/deals/{id}/activities")
            .describe("Get activities associated with a specific deal.")
            .param(Param::number("id", "The ID of the deal.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::flag("done", "Filter by done status (0 = not done, 1 = done).")),
        Operation::get("get_deal_participants", "/deals/{id}/participants")
            .describe("Get participants of a specific deal.")
            .param(Param::number("id", "The ID of the deal.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),
        Operation::get("get_deal_products", "/deals/{id}/products")
            .describe("Get products attached to a specific deal.")
            .param(Param::number("id", "The ID of the deal.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),

        // Persons
        Operation::get("list_persons", "/persons")
            .describe("List persons from Pipedrive with optional filtering.")
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::string("sort", "Field and order to sort by."))
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::number("user_id", "Filter by user ID.")),
        Operation::get("get_person", "/persons/{id}")
            .describe("Get a specific person by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the person.").required()),
        Operation::get("search_persons", "/persons/search")
            .describe("Search persons in Pipedrive by a search term.")
            .param(Param::string("term", "The search term to look for.").required())
            .param(Param::string("fields", "Fields to search in.").one_of(&["custom_fields", "notes", "name", "email", "phone"]))
            .param(Param::boolean("exact_match", "When true, only exact matches are returned."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset.")),
        Operation::post("create_person", "/persons")
            .describe("Create a new person in Pipedrive.")
            .param(Param::string("name", "The name of the person.").required())
            .param(Param::object_array("email", "Email addresses of the person."))
            .param(Param::object_array("phone", "Phone numbers of the person."))
            .param(Param::number("org_id", "ID of the organization this person belongs to."))
            .param(Param::number("visible_to", "Visibility of the person."))
            .param(Param::number("owner_id", "ID of the user who owns the person.")),
        Operation::put("update_person", "/persons/{id}")
            .describe("Update an existing person in Pipedrive.")
            .param(Param::number("id", "The ID of the person to update.").required())
            .param(Param::string("name", "The name of the person."))
            .param(Param::object_array("email", "Email addresses of the person."))
            .param(Param::object_array("phone", "Phone numbers of the person."))
            .param(Param::number("org_id", "ID of the organization this person belongs to."))
            .param(Param::number("visible_to", "Visibility of the person."))
            .param(Param::number("owner_id", "ID of the user who owns the person.")),
        Operation::delete("delete_person", "/persons/{id}")
            .describe("Delete a person from Pipedrive.")
            .param(Param::number("id", "The ID of the person to delete.").required()),
        Operation::get("get_person_deals", "/persons/{id}/deals")
            .describe("Get deals associated with a specific person.")
            .param(Param::number("id", "The ID of the person.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::string("status", "Filter by deal status.")),

        // Organizations
        Operation::get("list_organizations", "/organizations")
            .describe("List organizations from Pipedrive with optional filtering.")
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::string("sort", "Field and order to sort by."))
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::number("user_id", "Filter by user ID.")),
        Operation::get("get_organization", "/organizations/{id}")
            .describe("Get a specific organization by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the organization.").required()),
        Operation::get("search_organizations", "/organizations/search")
            .describe("Search organizations in Pipedrive by a search term.")
            .param(Param::string("term", "The search term to look for.").required())
            .param(Param::string("fields", "Fields to search in.").one_of(&["custom_fields", "notes", "name", "address"]))
            .param(Param::boolean("exact_match", "When true, only exact matches are returned."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset.")),
        Operation::post("create_organization", "/organizations")
            .describe("Create a new organization in Pipedrive.")
            .param(Param::string("name", "The name of the organization.").required())
            .param(Param::number("owner_id", "ID of the user who owns the organization."))
            .param(Param::number("visible_to", "Visibility of the organization."))
            .param(Param::string("add_time", "Creation timestamp (YYYY-MM-DD HH:MM:SS).")),
        Operation::put("update_organization", "/organizations/{id}")
            .describe("Update an existing organization in Pipedrive.")
            .param(Param::number("id", "The ID of the organization to update.").required())
            .param(Param::string("name", "The name of the organization."))
            .param(Param::number("owner_id", "ID of the user who owns the organization."))
            .param(Param::number("visible_to", "Visibility of the organization.")),
        Operation::delete("delete_organization", "/organizations/{id}")
            .describe("Delete an organization from Pipedrive.")
            .param(Param::number("id", "The ID of the organization to delete.").required()),
        Operation::get("get_organization_deals", "/organizations/{id}/deals")
            .describe("Get deals associated with a specific organization.")
            .param(Param::number("id", "The ID of the organization.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::string("status", "Filter by deal status.")),
        Operation::get("get_organization_persons", "/organizations/{id}/persons")
            .describe("Get persons associated with a specific organization.")
            .param(Param::number("id", "The ID of the organization.").required())
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),

        // Activities
        Operation::get("list_activities", "/activities")
            .describe("List activities from Pipedrive with optional filtering.")
            .param(Param::number("user_id", "Filter by user ID."))
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::string("type", "Filter by activity type (e.g. call, meeting, task, deadline, email)."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::flag("done", "Filter by done status (0 = not done, 1 = done)."))
            .param(Param::string("start_date", "Start date for filtering (YYYY-MM-DD)."))
            .param(Param::string("end_date", "End date for filtering (YYYY-MM-DD).")),
        Operation::get("get_activity", "/activities/{id}")
            .describe("Get a specific activity by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the activity.").required()),
        Operation::post("create_activity", "/activities")
            .describe("Create a new activity in Pipedrive.")
            .param(Param::string("subject", "The subject/title of the activity.").required())
            .param(Param::string("type", "The type of the activity (e.g. call, meeting, task, deadline, email).").required())
            .param(Param::string("due_date", "Due date of the activity (YYYY-MM-DD)."))
            .param(Param::string("due_time", "Due time of the activity (HH:MM)."))
            .param(Param::string("duration", "Duration of the activity (HH:MM)."))
            .param(Param::number("deal_id", "ID of the deal this activity is linked to."))
            .param(Param::number("person_id", "ID of the person this activity is linked to."))
            .param(Param::number("org_id", "ID of the organization this activity is linked to."))
            .param(Param::string("note", "Note/description of the activity."))
            .param(Param::number("user_id", "ID of the user assigned to this activity."))
            .param(Param::flag("done", "Whether the activity is done (0 = not done, 1 = done)."))
            .param(Param::boolean("busy_flag", "Whether the activity is marked as busy.")),
        Operation::put("update_activity", "/activities/{id}")
            .describe("Update an existing activity in Pipedrive.")
            .param(Param::number("id", "The ID of the activity to update.").required())
            .param(Param::string("subject", "The subject/title of the activity."))
            .param(Param::string("type", "The type of the activity."))
            .param(Param::string("due_date", "Due date of the activity (YYYY-MM-DD)."))
            .param(Param::string("due_time", "Due time of the activity (HH:MM)."))
            .param(Param::string("duration", "Duration of the activity (HH:MM)."))
            .param(Param::number("deal_id", "ID of the deal this activity is linked to."))
            .param(Param::number("person_id", "ID of the person this activity is linked to."))
            .param(Param::number("org_id", "ID of the organization this activity is linked to."))
            .param(Param::string("note", "Note/description of the activity."))
            .param(Param::number("user_id", "ID of the user assigned to this activity."))
            .param(Param::flag("done", "Whether the activity is done (0 = not done, 1 = done)."))
            .param(Param::boolean("busy_flag", "Whether the activity is marked as busy.")),
        Operation::delete("delete_activity", "/activities/{id}")
            .describe("Delete an activity from Pipedrive.")
            .param(Param::number("id", "The ID of the activity to delete.").required()),

        // Notes
        Operation::get("list_notes", "/notes")
            .describe("List notes from Pipedrive with optional filtering.")
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::string("sort", "Field and order to sort by."))
            .param(Param::number("user_id", "Filter by user ID."))
            .param(Param::number("deal_id", "Filter by deal ID."))
            .param(Param::number("person_id", "Filter by person ID."))
            .param(Param::number("org_id", "Filter by organization ID."))
            .param(Param::string("lead_id", "Filter by lead ID (UUID)."))
            .param(Param::string("start_date", "Start date for filtering (YYYY-MM-DD)."))
            .param(Param::string("end_date", "End date for filtering (YYYY-MM-DD)."))
            .param(Param::flag("pinned_to_deal_flag", "Filter by pinned to deal (0 or 1)."))
            .param(Param::flag("pinned_to_person_flag", "Filter by pinned to person (0 or 1)."))
            .param(Param::flag("pinned_to_organization_flag", "Filter by pinned to organization (0 or 1).")),
        Operation::get("get_note", "/notes/{id}")
            .describe("Get a specific note by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the note.").required()),
        Operation::post("create_note", "/notes")
            .describe("Create a new note in Pipedrive.")
            .param(Param::string("content", "The content of the note (supports HTML).").required())
            .param(Param::number("deal_id", "ID of the deal to attach the note to."))
            .param(Param::number("person_id", "ID of the person to attach the note to."))
            .param(Param::number("org_id", "ID of the organization to attach the note to."))
            .param(Param::string("lead_id", "ID of the lead to attach the note to (UUID)."))
            .param(Param::flag("pinned_to_deal_flag", "Pin note to deal (0 or 1)."))
            .param(Param::flag("pinned_to_person_flag", "Pin note to person (0 or 1)."))
            .param(Param::flag("pinned_to_organization_flag", "Pin note to organization (0 or 1)."))
            .param(Param::number("user_id", "ID of the user who creates the note.")),
        Operation::put("update_note", "/notes/{id}")
            .describe("Update an existing note in Pipedrive.")
            .param(Param::number("id", "The ID of the note to update.").required())
            .param(Param::string("content", "The content of the note (supports HTML).").required())
            .param(Param::number("deal_id", "ID of the deal to attach the note to."))
            .param(Param::number("person_id", "ID of the person to attach the note to."))
            .param(Param::number("org_id", "ID of the organization to attach the note to."))
            .param(Param::string("lead_id", "ID of the lead to attach the note to (UUID)."))
            .param(Param::flag("pinned_to_deal_flag", "Pin note to deal (0 or 1)."))
            .param(Param::flag("pinned_to_person_flag", "Pin note to person (0 or 1)."))
            .param(Param::flag("pinned_to_organization_flag", "Pin note to organization (0 or 1)."))
            .param(Param::number("user_id", "ID of the user.")),
        Operation::delete("delete_note", "/notes/{id}")
            .describe("Delete a note from Pipedrive.")
            .param(Param::number("id", "The ID of the note to delete.").required()),

        // Pipelines
        Operation::get("list_pipelines", "/pipelines")
            .describe("List all pipelines from Pipedrive."),
        Operation::get("get_pipeline", "/pipelines/{id}")
            .describe("Get a specific pipeline by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the pipeline.").required()),
        Operation::get("get_pipeline_deals", "/pipelines/{id}/deals")
            .describe("Get deals in a specific pipeline.")
            .param(Param::number("id", "The ID of the pipeline.").required())
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::number("user_id", "Filter by user ID."))
            .param(Param::flag("everyone", "Include deals from all users (0 or 1)."))
            .param(Param::number("stage_id", "Filter by stage ID."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::flag("get_summary", "Include summary data (0 or 1)."))
            .param(Param::string("totals_convert_currency", "Currency to convert totals to (3-letter code).")),

        // Stages
        Operation::get("list_stages", "/stages")
            .describe("List all stages from Pipedrive, optionally filtered by pipeline.")
            .param(Param::number("pipeline_id", "Filter stages by pipeline ID.")),
        Operation::get("get_stage", "/stages/{id}")
            .describe("Get a specific stage by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the stage.").required()),
        Operation::get("get_stage_deals", "/stages/{id}/deals")
            .describe("Get deals in a specific stage.")
            .param(Param::number("id", "The ID of the stage.").required())
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::number("user_id", "Filter by user ID."))
            .param(Param::flag("everyone", "Include deals from all users (0 or 1)."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),

        // Products
        Operation::get("list_products", "/products")
            .describe("List products from Pipedrive.")
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("user_id", "Filter by user ID.")),
        Operation::get("get_product", "/products/{id}")
            .describe("Get a specific product by ID from Pipedrive.")
            .param(Param::number("id", "The ID of the product.").required()),
        Operation::get("search_products", "/products/search")
            .describe("Search products in Pipedrive by a search term.")
            .param(Param::string("term", "The search term to look for.").required())
            .param(Param::string("fields", "Fields to search in.").one_of(&["custom_fields", "name", "code"]))
            .param(Param::boolean("exact_match", "When true, only exact matches are returned."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset.")),
        Operation::post("create_product", "/products")
            .describe("Create a new product in Pipedrive.")
            .param(Param::string("name", "The name of the product.").required())
            .param(Param::string("code", "Product code/SKU."))
            .param(Param::string("unit", "Unit of measurement."))
            .param(Param::number("tax", "Tax percentage."))
            .param(Param::boolean("active_flag", "Whether the product is active."))
            .param(Param::number("visible_to", "Visibility of the product."))
            .param(Param::number("owner_id", "ID of the user who owns the product."))
            .param(Param::object_array("prices", "Array of price objects for the product.")),
        Operation::put("update_product", "/products/{id}")
            .describe("Update an existing product in Pipedrive.")
            .param(Param::number("id", "The ID of the product to update.").required())
            .param(Param::string("name", "The name of the product."))
            .param(Param::string("code", "Product code/SKU."))
            .param(Param::string("unit", "Unit of measurement."))
            .param(Param::number("tax", "Tax percentage."))
            .param(Param::boolean("active_flag", "Whether the product is active."))
            .param(Param::number("visible_to", "Visibility of the product."))
            .param(Param::number("owner_id", "ID of the user who owns the product."))
            .param(Param::object_array("prices", "Array of price objects for the product.")),
        Operation::delete("delete_product", "/products/{id}")
            .describe("Delete a product from Pipedrive.")
            .param(Param::number("id", "The ID of the product to delete.").required()),

        // Leads
        Operation::get("list_leads", "/leads")
            .describe("List leads from Pipedrive with optional filtering.")
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::string("sort", "Field and order to sort by."))
            .param(Param::number("filter_id", "ID of the filter to use."))
            .param(Param::string("archived_status", "Filter by archived status.").one_of(&["archived", "not_archived"])),
        Operation::get("get_lead", "/leads/{id}")
            .describe("Get a specific lead by ID from Pipedrive.")
            .param(Param::string("id", "The UUID of the lead.").required()),
        Operation::post("create_lead", "/leads")
            .describe("Create a new lead in Pipedrive.")
            .param(Param::string("title", "The title of the lead.").required())
            .param(Param::number("owner_id", "ID of the user who owns the lead."))
            .param(Param::number("person_id", "ID of the person associated with the lead."))
            .param(Param::number("organization_id", "ID of the organization associated with the lead."))
            .param(Param::object("value", "The value of the lead."))
            .param(Param::string("expected_close_date", "Expected close date (YYYY-MM-DD)."))
            .param(Param::number("visible_to", "Visibility of the lead."))
            .param(Param::string_array("label_ids", "Array of label UUIDs to assign.")),
        Operation::patch("update_lead", "/leads/{id}")
            .describe("Update an existing lead in Pipedrive.")
            .param(Param::string("id", "The UUID of the lead to update.").required())
            .param(Param::string("title", "The title of the lead."))
            .param(Param::number("owner_id", "ID of the user who owns the lead."))
            .param(Param::number("person_id", "ID of the person associated with the lead."))
            .param(Param::number("organization_id", "ID of the organization associated with the lead."))
            .param(Param::object("value", "The value of the lead."))
            .param(Param::string("expected_close_date", "Expected close date (YYYY-MM-DD)."))
            .param(Param::number("visible_to", "Visibility of the lead."))
            .param(Param::string_array("label_ids", "Array of label UUIDs to assign."))
            .param(Param::boolean("is_archived", "Whether the lead is archived.")),
        Operation::delete("delete_lead", "/leads/{id}")
            .describe("Delete a lead from Pipedrive.")
            .param(Param::string("id", "The UUID of the lead to delete.").required()),
        Operation::get("search_leads", "/leads/search")
            .describe("Search leads in Pipedrive by a search term.")
            .param(Param::string("term", "The search term to look for.").required())
            .param(Param::string("fields", "Fields to search in."))
            .param(Param::boolean("exact_match", "When true, only exact matches are returned."))
            .param(Param::number("limit", "Number of results to return."))
            .param(Param::number("start", "Pagination start offset.")),

        // Fields
        Operation::get("list_deal_fields", "/dealFields")
            .describe("List all deal fields (including custom fields) from Pipedrive.")
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),
        Operation::get("list_person_fields", "/personFields")
            .describe("List all person fields (including custom fields) from Pipedrive.")
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),
        Operation::get("list_organization_fields", "/organizationFields")
            .describe("List all organization fields (including custom fields) from Pipedrive.")
            .param(Param::number("start", "Pagination start offset."))
            .param(Param::number("limit", "Number of results to return.")),
    ]
}

//! Front conversations platform: client and operation catalog.
//!
//! Front is the mandatory service; its client also backs the fixed
//! `frontapp://` resources.

use std::sync::Arc;

use super::client::{AuthHeader, ServiceClient};
use super::operation::{Operation, Param};
use crate::config::GlobalConfig;
use crate::Result;

/// Service label used in logs and errors.
pub const SERVICE: &str = "frontapp";

/// Build the Front client from the loaded credentials.
///
/// # Errors
///
/// Returns `AppError::Config` if the base URL or token is unusable.
pub fn client(config: &GlobalConfig, error_fields: Arc<[String]>) -> Result<ServiceClient> {
    ServiceClient::new(
        SERVICE,
        &config.frontapp_base_url(),
        AuthHeader::bearer(&config.credentials.frontapp_api_token),
        error_fields,
    )
}

/// Every Front operation, in listing order.
#[must_use]
#[allow(clippy::too_many_lines)] // One entry per upstream endpoint.
pub fn operations() -> Vec<Operation> {
    vec![
        // Conversations
        Operation::get("list_conversations", "/conversations")
            .describe("List conversations in Front. Returns conversations in reverse chronological order (most recently updated first). Supports pagination and filtering via query parameter.")
            .param(Param::number("limit", "Number of results (max 100, default 50)"))
            .param(Param::string("page_token", "Pagination token from previous response"))
            .param(Param::string("q", "Query string for filtering (e.g., \"status:archived\")")),
        Operation::get("get_conversation", "/conversations/{conversation_id}")
            .describe("Get details of a specific conversation by ID")
            .param(Param::string("conversation_id", "Conversation ID (e.g., cnv_abc123)").required()),
        Operation::get("search_conversations", "/conversations/search")
            .describe("Search for conversations using Front search syntax. Supports complex queries with status, tags, assignees, etc.")
            .param(Param::string("query", "Search query (e.g., \"tag:urgent status:open\")").required().wire("q"))
            .param(Param::number("limit", "Number of results (max 100, default 50)")),
        Operation::patch("update_conversation", "/conversations/{conversation_id}")
            .describe("Update conversation properties like assignee, tags, status")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string("assignee_id", "Teammate ID to assign"))
            .param(Param::string("status", "Conversation status").one_of(&["archived", "deleted", "open"]))
            .param(Param::string_array("tag_ids", "Array of tag IDs")),

        // Messages
        Operation::get("list_conversation_messages", "/conversations/{conversation_id}/messages")
            .describe("List all messages in a conversation in reverse chronological order (newest first)")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::number("limit", "Number of results (max 100, default 50)"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("get_message", "/messages/{message_id}")
            .describe("Get details of a specific message by ID")
            .param(Param::string("message_id", "Message ID (e.g., msg_abc123)").required()),
        Operation::post("send_message", "/channels/{channel_id}/messages")
            .describe("Send a new message to a channel (creates a new conversation)")
            .param(Param::string("channel_id", "Channel ID to send from").required())
            .param(Param::string_array("to", "Recipient email addresses or handles").required())
            .param(Param::string("subject", "Message subject"))
            .param(Param::string("body", "Message body (text or HTML)").required())
            .param(Param::string("text", "Plain text version of body"))
            .param(Param::string_array("cc", "CC recipients"))
            .param(Param::string_array("bcc", "BCC recipients"))
            .param(Param::string_array("tag_ids", "Tags to apply")),
        Operation::post("reply_to_conversation", "/conversations/{conversation_id}/messages")
            .describe("Send a reply to an existing conversation")
            .param(Param::string("conversation_id", "Conversation ID to reply to").required())
            .param(Param::string("type", "Type of reply").one_of(&["comment", "reply"]).required())
            .param(Param::string("body", "Reply body").required())
            .param(Param::string("text", "Plain text version"))
            .param(Param::string("author_id", "Teammate ID sending the reply"))
            .param(Param::string("channel_id", "Channel to send from (required for reply type)"))
            .route_by("type", &[("comment", "/conversations/{conversation_id}/comments")]),

        // Contacts
        Operation::get("list_contacts", "/contacts")
            .describe("List contacts in Front with pagination support")
            .param(Param::number("limit", "Number of results (max 100, default 50)"))
            .param(Param::string("page_token", "Pagination token"))
            .param(Param::string("sort_by", "Sort field"))
            .param(Param::string("sort_order", "Sort order").one_of(&["asc", "desc"])),
        Operation::get("get_contact", "/contacts/{contact_id}")
            .describe("Get details of a specific contact by ID")
            .param(Param::string("contact_id", "Contact ID (e.g., crd_abc123)").required()),
        Operation::post("create_contact", "/contacts")
            .describe("Create a new contact in Front")
            .param(Param::string("name", "Contact name"))
            .param(Param::string("description", "Contact description"))
            .param(Param::object_array("handles", "Contact handles (email, phone, etc.)").required())
            .param(Param::object("custom_fields", "Custom field key-value pairs")),
        Operation::patch("update_contact", "/contacts/{contact_id}")
            .describe("Update an existing contact")
            .param(Param::string("contact_id", "Contact ID").required())
            .param(Param::string("name", "Updated name"))
            .param(Param::string("description", "Updated description"))
            .param(Param::object_array("handles", "Updated handles"))
            .param(Param::object("custom_fields", "Updated custom fields")),

        // Teammates
        Operation::get("list_teammates", "/teammates")
            .describe("List all teammates in the Front account")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("get_teammate", "/teammates/{teammate_id}")
            .describe("Get details of a specific teammate by ID")
            .param(Param::string("teammate_id", "Teammate ID (e.g., tea_abc123)").required()),

        // Tags
        Operation::get("list_tags", "/tags")
            .describe("List all tags in the Front account")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_tag", "/tags")
            .describe("Create a new tag")
            .param(Param::string("name", "Tag name").required())
            .param(Param::string("highlight", "Tag color").one_of(&["grey", "pink", "red", "orange", "yellow", "green", "light-blue", "blue", "purple"]))
            .param(Param::boolean("is_private", "Whether tag is private")),

        // Inboxes
        Operation::get("list_inboxes", "/inboxes")
            .describe("List all inboxes accessible to the API token")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("get_inbox", "/inboxes/{inbox_id}")
            .describe("Get details of a specific inbox by ID")
            .param(Param::string("inbox_id", "Inbox ID (e.g., inb_abc123)").required()),

        // Comments
        Operation::get("list_conversation_comments", "/conversations/{conversation_id}/comments")
            .describe("List all comments (internal discussions) in a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required()),
        Operation::post("add_comment", "/conversations/{conversation_id}/comments")
            .describe("Add an internal comment to a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string("body", "Comment body").required())
            .param(Param::string("author_id", "Teammate ID posting the comment")),

        // Analytics
        Operation::get("get_analytics", "/analytics")
            .describe("Get analytics data for conversations, messages, or teammates")
            .param(Param::number("start", "Start timestamp (Unix time)").required())
            .param(Param::number("end", "End timestamp (Unix time)").required())
            .param(Param::string_array("metrics", "Metrics to retrieve (e.g., avg_first_response_time)"))
            .param(Param::object("filters", "Filters to apply")),

        // Accounts
        Operation::get("list_accounts", "/accounts")
            .describe("List all accounts in Front")
            .param(Param::number("limit", "Number of results (max 100, default 50)"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_account", "/accounts")
            .describe("Create a new account")
            .param(Param::string("name", "Account name").required())
            .param(Param::string("description", "Account description"))
            .param(Param::string_array("domains", "Account domains"))
            .param(Param::object("custom_fields", "Custom field key-value pairs")),
        Operation::get("get_account", "/accounts/{account_id}")
            .describe("Get details of a specific account by ID")
            .param(Param::string("account_id", "Account ID").required()),
        Operation::patch("update_account", "/accounts/{account_id}")
            .describe("Update an existing account")
            .param(Param::string("account_id", "Account ID").required())
            .param(Param::string("name", "Updated name"))
            .param(Param::string("description", "Updated description"))
            .param(Param::string_array("domains", "Updated domains"))
            .param(Param::object("custom_fields", "Updated custom fields")),
        Operation::delete("delete_account", "/accounts/{account_id}")
            .describe("Delete an account")
            .param(Param::string("account_id", "Account ID").required()),
        Operation::get("list_account_contacts", "/accounts/{account_id}/contacts")
            .describe("List all contacts associated with an account")
            .param(Param::string("account_id", "Account ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("add_contact_to_account", "/accounts/{account_id}/contacts")
            .describe("Add a contact to an account")
            .param(Param::string("account_id", "Account ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to add").required()),
        Operation::delete("remove_contact_from_account", "/accounts/{account_id}/contacts")
            .describe("Remove a contact from an account")
            .param(Param::string("account_id", "Account ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to remove").required())
            .body(),

        // Contact notes, handles and ownership
        Operation::delete("delete_contact", "/contacts/{contact_id}")
            .describe("Delete a contact")
            .param(Param::string("contact_id", "Contact ID").required()),
        Operation::post("merge_contacts", "/contacts/merge")
            .describe("Merge two contacts into one")
            .param(Param::string("source_contact_id", "Contact ID to merge from (will be deleted)").required())
            .param(Param::string("target_contact_id", "Contact ID to merge into (will be kept)").required()),
        Operation::get("list_contact_conversations", "/contacts/{contact_id}/conversations")
            .describe("List all conversations for a contact")
            .param(Param::string("contact_id", "Contact ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("list_contact_notes", "/contacts/{contact_id}/notes")
            .describe("List all notes for a contact")
            .param(Param::string("contact_id", "Contact ID").required()),
        Operation::post("add_contact_note", "/contacts/{contact_id}/notes")
            .describe("Add a note to a contact")
            .param(Param::string("contact_id", "Contact ID").required())
            .param(Param::string("body", "Note content").required())
            .param(Param::string("author_id", "Teammate ID creating the note")),
        Operation::post("add_contact_handle", "/contacts/{contact_id}/handles")
            .describe("Add a handle (email, phone, etc.) to a contact")
            .param(Param::string("contact_id", "Contact ID").required())
            .param(Param::string("handle", "Handle value (email, phone, etc.)").required())
            .param(Param::string("source", "Handle source type (email, phone, twitter, etc.)").required()),
        Operation::delete("delete_contact_handle", "/contacts/{contact_id}/handles")
            .describe("Delete a handle from a contact")
            .param(Param::string("contact_id", "Contact ID").required())
            .param(Param::string("handle", "Handle to remove").required())
            .param(Param::string("source", "Handle source type").required())
            .body(),
        Operation::get("list_teammate_contacts", "/teammates/{teammate_id}/contacts")
            .describe("List contacts for a specific teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_teammate_contact", "/teammates/{teammate_id}/contacts")
            .describe("Create a contact scoped to a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("name", "Contact name"))
            .param(Param::object_array("handles", "Contact handles").required()),
        Operation::get("list_team_contacts", "/teams/{team_id}/contacts")
            .describe("List contacts for a specific team")
            .param(Param::string("team_id", "Team ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),

        // Channels
        Operation::get("list_channels", "/channels")
            .describe("List all channels")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_channel", "/channels")
            .describe("Create a new channel")
            .param(Param::string("type", "Channel type (smtp, imap, twilio, custom, etc.)").required())
            .param(Param::object("settings", "Channel-specific settings").required())
            .param(Param::string("inbox_id", "Inbox ID to associate with")),
        Operation::get("get_channel", "/channels/{channel_id}")
            .describe("Get details of a specific channel")
            .param(Param::string("channel_id", "Channel ID").required()),
        Operation::patch("update_channel", "/channels/{channel_id}")
            .describe("Update a channel")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::object("settings", "Updated channel settings")),
        Operation::post("validate_channel", "/channels/{channel_id}/validate")
            .describe("Validate channel configuration")
            .param(Param::string("channel_id", "Channel ID").required())
            .no_payload(),
        Operation::get("list_teammate_channels", "/teammates/{teammate_id}/channels")
            .describe("List channels for a specific teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
        Operation::get("list_team_channels", "/teams/{team_id}/channels")
            .describe("List channels for a specific team")
            .param(Param::string("team_id", "Team ID").required()),
        Operation::post("sync_inbound_message", "/channels/{channel_id}/inbound_messages")
            .describe("Sync an inbound message to a custom channel")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::object("sender", "Sender information").required())
            .param(Param::string("subject", "Message subject"))
            .param(Param::string("body", "Message body").required())
            .param(Param::string("body_format", "Body format").one_of(&["html", "markdown"]))
            .param(Param::object("metadata", "Message metadata")),
        Operation::post("sync_outbound_message", "/channels/{channel_id}/outbound_messages")
            .describe("Sync an outbound message to a custom channel")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::string_array("to", "Recipients").required())
            .param(Param::string("subject", "Message subject"))
            .param(Param::string("body", "Message body").required())
            .param(Param::object("metadata", "Message metadata")),
        Operation::put("update_external_message_status", "/channels/{channel_id}/messages/{message_id}/status")
            .describe("Update the status of an external message")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::string("message_id", "Message ID").required())
            .param(Param::string("status", "Message status").one_of(&["delivered", "bounced", "opened"]).required()),
        Operation::put("sync_application_message_template", "/channels/{channel_id}/application_message_templates")
            .describe("Sync an application message template")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::object("template", "Template data").required())
            .body_field("template"),

        // Comment threads
        Operation::get("get_comment", "/comments/{comment_id}")
            .describe("Get a specific comment by ID")
            .param(Param::string("comment_id", "Comment ID").required()),
        Operation::patch("update_comment", "/comments/{comment_id}")
            .describe("Update a comment")
            .param(Param::string("comment_id", "Comment ID").required())
            .param(Param::string("body", "Updated comment body").required()),
        Operation::get("list_comment_mentions", "/comments/{comment_id}/mentions")
            .describe("List all mentions in a comment")
            .param(Param::string("comment_id", "Comment ID").required()),
        Operation::post("add_comment_reply", "/comments/{comment_id}/replies")
            .describe("Add a reply to a comment")
            .param(Param::string("comment_id", "Comment ID to reply to").required())
            .param(Param::string("body", "Reply body").required())
            .param(Param::string("author_id", "Teammate ID posting the reply")),

        // Contact groups (deprecated upstream)
        Operation::get("list_contact_groups", "/contact_groups")
            .describe("List all contact groups (deprecated - use contact lists)")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_contact_group", "/contact_groups")
            .describe("Create a new contact group (deprecated - use contact lists)")
            .param(Param::string("name", "Group name").required()),
        Operation::delete("delete_contact_group", "/contact_groups/{group_id}")
            .describe("Delete a contact group")
            .param(Param::string("group_id", "Group ID").required()),
        Operation::get("list_group_contacts", "/contact_groups/{group_id}/contacts")
            .describe("List contacts in a contact group")
            .param(Param::string("group_id", "Group ID").required()),
        Operation::post("add_contacts_to_group", "/contact_groups/{group_id}/contacts")
            .describe("Add contacts to a contact group")
            .param(Param::string("group_id", "Group ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to add").required()),
        Operation::delete("remove_contacts_from_group", "/contact_groups/{group_id}/contacts")
            .describe("Remove contacts from a contact group")
            .param(Param::string("group_id", "Group ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to remove").required())
            .body(),
        Operation::get("list_teammate_groups", "/teammates/{teammate_id}/contact_groups")
            .describe("List contact groups for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
        Operation::post("create_teammate_group", "/teammates/{teammate_id}/contact_groups")
            .describe("Create a contact group for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("name", "Group name").required()),
        Operation::get("list_team_groups", "/teams/{team_id}/contact_groups")
            .describe("List contact groups for a team")
            .param(Param::string("team_id", "Team ID").required()),
        Operation::post("create_team_group", "/teams/{team_id}/contact_groups")
            .describe("Create a contact group for a team")
            .param(Param::string("team_id", "Team ID").required())
            .param(Param::string("name", "Group name").required()),

        // Contact lists
        Operation::get("list_contact_lists", "/contact_lists")
            .describe("List all contact lists")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_contact_list", "/contact_lists")
            .describe("Create a new contact list")
            .param(Param::string("name", "List name").required())
            .param(Param::boolean("is_private", "Whether list is private")),
        Operation::delete("delete_contact_list", "/contact_lists/{list_id}")
            .describe("Delete a contact list")
            .param(Param::string("list_id", "List ID").required()),
        Operation::get("list_contact_list_contacts", "/contact_lists/{list_id}/contacts")
            .describe("List contacts in a contact list")
            .param(Param::string("list_id", "List ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("add_contacts_to_list", "/contact_lists/{list_id}/contacts")
            .describe("Add contacts to a contact list")
            .param(Param::string("list_id", "List ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to add").required()),
        Operation::delete("remove_contacts_from_list", "/contact_lists/{list_id}/contacts")
            .describe("Remove contacts from a contact list")
            .param(Param::string("list_id", "List ID").required())
            .param(Param::string_array("contact_ids", "Contact IDs to remove").required())
            .body(),
        Operation::get("list_teammate_contact_lists", "/teammates/{teammate_id}/contact_lists")
            .describe("List contact lists for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
        Operation::post("create_teammate_contact_list", "/teammates/{teammate_id}/contact_lists")
            .describe("Create a contact list for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("name", "List name").required()),
        Operation::get("list_team_contact_lists", "/teams/{team_id}/contact_lists")
            .describe("List contact lists for a team")
            .param(Param::string("team_id", "Team ID").required()),
        Operation::post("create_team_contact_list", "/teams/{team_id}/contact_lists")
            .describe("Create a contact list for a team")
            .param(Param::string("team_id", "Team ID").required())
            .param(Param::string("name", "List name").required()),

        // Conversation followers, links, tags and reminders
        Operation::post("create_discussion_conversation", "/conversations")
            .describe("Create a new discussion conversation")
            .param(Param::string_array("teammate_ids", "Teammate IDs to include").required())
            .param(Param::string("subject", "Discussion subject"))
            .param(Param::string("comment_body", "Initial comment body").required()),
        Operation::put("update_conversation_assignee", "/conversations/{conversation_id}/assignee")
            .describe("Update the assignee of a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string("assignee_id", "Teammate ID to assign (null to unassign)").required()),
        Operation::get("list_conversation_events", "/conversations/{conversation_id}/events")
            .describe("List all events for a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("list_conversation_followers", "/conversations/{conversation_id}/followers")
            .describe("List all followers of a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required()),
        Operation::post("add_conversation_followers", "/conversations/{conversation_id}/followers")
            .describe("Add followers to a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("teammate_ids", "Teammate IDs to add as followers").required()),
        Operation::delete("delete_conversation_followers", "/conversations/{conversation_id}/followers")
            .describe("Remove followers from a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("teammate_ids", "Teammate IDs to remove").required())
            .body(),
        Operation::get("list_conversation_inboxes", "/conversations/{conversation_id}/inboxes")
            .describe("List all inboxes associated with a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required()),
        Operation::post("add_conversation_link", "/conversations/{conversation_id}/links")
            .describe("Add a link to a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("link_ids", "Link IDs to add").required()),
        Operation::delete("remove_conversation_links", "/conversations/{conversation_id}/links")
            .describe("Remove links from a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("link_ids", "Link IDs to remove").required())
            .body(),
        Operation::patch("update_conversation_reminders", "/conversations/{conversation_id}/reminders")
            .describe("Update reminders for a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::number("scheduled_at", "Unix timestamp for reminder")),
        Operation::post("add_conversation_tag", "/conversations/{conversation_id}/tags")
            .describe("Add a tag to a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("tag_ids", "Tag IDs to add").required()),
        Operation::delete("remove_conversation_tag", "/conversations/{conversation_id}/tags")
            .describe("Remove a tag from a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required())
            .param(Param::string_array("tag_ids", "Tag IDs to remove").required())
            .body(),

        // Custom field definitions
        Operation::get("list_account_custom_fields", "/accounts/custom_fields")
            .describe("List all custom fields for accounts"),
        Operation::get("list_contact_custom_fields", "/contacts/custom_fields")
            .describe("List all custom fields for contacts"),
        Operation::get("list_conversation_custom_fields", "/conversations/custom_fields")
            .describe("List all custom fields for conversations"),
        Operation::get("list_custom_fields", "/custom_fields")
            .describe("List all custom fields"),
        Operation::get("list_inbox_custom_fields", "/inboxes/custom_fields")
            .describe("List all custom fields for inboxes"),
        Operation::get("list_link_custom_fields", "/links/custom_fields")
            .describe("List all custom fields for links"),
        Operation::get("list_teammate_custom_fields", "/teammates/custom_fields")
            .describe("List all custom fields for teammates"),

        // Drafts
        Operation::post("create_draft", "/drafts")
            .describe("Create a new draft message")
            .param(Param::string("author_id", "Teammate ID creating the draft").required())
            .param(Param::string_array("to", "Recipients"))
            .param(Param::string("subject", "Draft subject"))
            .param(Param::string("body", "Draft body").required())
            .param(Param::string("channel_id", "Channel ID")),
        Operation::get("list_conversation_drafts", "/conversations/{conversation_id}/drafts")
            .describe("List all drafts for a conversation")
            .param(Param::string("conversation_id", "Conversation ID").required()),
        Operation::post("create_draft_reply", "/channels/{channel_id}/drafts")
            .describe("Create a draft reply to a conversation")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::string("conversation_id", "Conversation ID"))
            .param(Param::string("author_id", "Teammate ID").required())
            .param(Param::string("body", "Draft body").required()),
        Operation::delete("delete_draft", "/drafts/{draft_id}")
            .describe("Delete a draft")
            .param(Param::string("draft_id", "Draft ID").required())
            .param(Param::string("version", "Draft version for conflict prevention").required())
            .body(),
        Operation::patch("edit_draft", "/drafts/{draft_id}")
            .describe("Edit an existing draft")
            .param(Param::string("draft_id", "Draft ID").required())
            .param(Param::string("version", "Draft version for conflict prevention").required())
            .param(Param::string("body", "Updated draft body"))
            .param(Param::string("subject", "Updated subject")),

        // Events
        Operation::get("list_events", "/events")
            .describe("List events with optional filtering by type, date range, and inbox")
            .param(Param::string("q", "Query string for filtering events"))
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("get_event", "/events/{event_id}")
            .describe("Get details of a specific event")
            .param(Param::string("event_id", "Event ID").required()),

        // Inbox channels and access
        Operation::post("create_inbox", "/inboxes")
            .describe("Create a new inbox")
            .param(Param::string("name", "Inbox name").required())
            .param(Param::string_array("teammate_ids", "Teammate IDs with access")),
        Operation::get("list_inbox_channels", "/inboxes/{inbox_id}/channels")
            .describe("List all channels for an inbox")
            .param(Param::string("inbox_id", "Inbox ID").required()),
        Operation::get("list_inbox_conversations", "/inboxes/{inbox_id}/conversations")
            .describe("List all conversations in an inbox")
            .param(Param::string("inbox_id", "Inbox ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("list_inbox_access", "/inboxes/{inbox_id}/access")
            .describe("List all teammates with access to an inbox")
            .param(Param::string("inbox_id", "Inbox ID").required()),
        Operation::post("add_inbox_access", "/inboxes/{inbox_id}/access")
            .describe("Grant teammates access to an inbox")
            .param(Param::string("inbox_id", "Inbox ID").required())
            .param(Param::string_array("teammate_ids", "Teammate IDs to grant access").required()),
        Operation::delete("remove_inbox_access", "/inboxes/{inbox_id}/access")
            .describe("Remove teammates access from an inbox")
            .param(Param::string("inbox_id", "Inbox ID").required())
            .param(Param::string_array("teammate_ids", "Teammate IDs to remove").required())
            .body(),
        Operation::get("list_team_inboxes", "/teams/{team_id}/inboxes")
            .describe("List all inboxes for a team")
            .param(Param::string("team_id", "Team ID").required()),
        Operation::post("create_team_inbox", "/teams/{team_id}/inboxes")
            .describe("Create an inbox for a team")
            .param(Param::string("team_id", "Team ID").required())
            .param(Param::string("name", "Inbox name").required()),

        // Message import and seen status
        Operation::post("receive_custom_message", "/channels/{channel_id}/incoming_messages")
            .describe("Receive a custom message on a channel")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::object("sender", "Sender information").required())
            .param(Param::string("body", "Message body").required())
            .param(Param::string("subject", "Message subject"))
            .param(Param::object("metadata", "Message metadata")),
        Operation::post("import_message", "/channels/{channel_id}/import")
            .describe("Import a historical message to an inbox")
            .param(Param::string("channel_id", "Channel ID").required())
            .param(Param::object("sender", "Sender information").required())
            .param(Param::string_array("to", "Recipients").required())
            .param(Param::string("body", "Message body").required())
            .param(Param::string("subject", "Message subject"))
            .param(Param::number("created_at", "Unix timestamp of original message").required())
            .param(Param::object("metadata", "Message metadata")),
        Operation::get("get_message_seen_status", "/messages/{message_id}/seen")
            .describe("Get the seen status of a message")
            .param(Param::string("message_id", "Message ID").required()),
        Operation::post("mark_message_seen", "/messages/{message_id}/seen")
            .describe("Mark a message as seen by a teammate")
            .param(Param::string("message_id", "Message ID").required())
            .no_payload(),

        // Message template folders
        Operation::get("list_message_template_folders", "/message_template_folders")
            .describe("List all message template folders")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_message_template_folder", "/message_template_folders")
            .describe("Create a new message template folder")
            .param(Param::string("name", "Folder name").required())
            .param(Param::string("parent_folder_id", "Parent folder ID (optional)")),
        Operation::get("get_message_template_folder", "/message_template_folders/{folder_id}")
            .describe("Get details of a message template folder")
            .param(Param::string("folder_id", "Folder ID").required()),
        Operation::patch("update_message_template_folder", "/message_template_folders/{folder_id}")
            .describe("Update a message template folder")
            .param(Param::string("folder_id", "Folder ID").required())
            .param(Param::string("name", "Updated folder name").required()),
        Operation::delete("delete_message_template_folder", "/message_template_folders/{folder_id}")
            .describe("Delete a message template folder")
            .param(Param::string("folder_id", "Folder ID").required()),
        Operation::get("list_child_folders", "/message_template_folders/{folder_id}/children")
            .describe("List child folders of a message template folder")
            .param(Param::string("folder_id", "Folder ID").required()),
        Operation::post("create_child_folder", "/message_template_folders/{folder_id}/children")
            .describe("Create a child folder within a message template folder")
            .param(Param::string("folder_id", "Parent folder ID").required())
            .param(Param::string("name", "Child folder name").required()),
        Operation::get("list_teammate_folders", "/teammates/{teammate_id}/message_template_folders")
            .describe("List message template folders for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
        Operation::post("create_teammate_folder", "/teammates/{teammate_id}/message_template_folders")
            .describe("Create a message template folder for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("name", "Folder name").required()),
        Operation::get("list_team_folders", "/teams/{team_id}/message_template_folders")
            .describe("List message template folders for a team")
            .param(Param::string("team_id", "Team ID").required()),

        // Message templates
        Operation::get("list_message_templates", "/message_templates")
            .describe("List all message templates")
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::post("create_message_template", "/message_templates")
            .describe("Create a new message template")
            .param(Param::string("name", "Template name").required())
            .param(Param::string("subject", "Template subject"))
            .param(Param::string("body", "Template body").required())
            .param(Param::string("folder_id", "Folder ID (optional)")),
        Operation::get("get_message_template", "/message_templates/{template_id}")
            .describe("Get details of a message template")
            .param(Param::string("template_id", "Template ID").required()),
        Operation::patch("update_message_template", "/message_templates/{template_id}")
            .describe("Update a message template")
            .param(Param::string("template_id", "Template ID").required())
            .param(Param::string("name", "Updated name"))
            .param(Param::string("subject", "Updated subject"))
            .param(Param::string("body", "Updated body")),
        Operation::delete("delete_message_template", "/message_templates/{template_id}")
            .describe("Delete a message template")
            .param(Param::string("template_id", "Template ID").required()),
        Operation::get("list_child_templates", "/message_templates/{template_id}/children")
            .describe("List child templates of a message template")
            .param(Param::string("template_id", "Template ID").required()),
        Operation::post("create_child_template", "/message_templates/{template_id}/children")
            .describe("Create a child template within a message template")
            .param(Param::string("template_id", "Parent template ID").required())
            .param(Param::string("name", "Child template name").required())
            .param(Param::string("body", "Template body").required()),

        // Tag hierarchy
        Operation::get("get_tag", "/tags/{tag_id}")
            .describe("Get details of a specific tag")
            .param(Param::string("tag_id", "Tag ID").required()),
        Operation::patch("update_tag", "/tags/{tag_id}")
            .describe("Update a tag")
            .param(Param::string("tag_id", "Tag ID").required())
            .param(Param::string("name", "Updated tag name"))
            .param(Param::string("highlight", "Updated tag color")),
        Operation::delete("delete_tag", "/tags/{tag_id}")
            .describe("Delete a tag")
            .param(Param::string("tag_id", "Tag ID").required()),
        Operation::get("list_tag_children", "/tags/{tag_id}/children")
            .describe("List child tags of a tag")
            .param(Param::string("tag_id", "Tag ID").required()),
        Operation::post("create_child_tag", "/tags/{tag_id}/children")
            .describe("Create a child tag")
            .param(Param::string("tag_id", "Parent tag ID").required())
            .param(Param::string("name", "Child tag name").required())
            .param(Param::string("highlight", "Tag color")),
        Operation::get("list_tagged_conversations", "/tags/{tag_id}/conversations")
            .describe("List all conversations with a specific tag")
            .param(Param::string("tag_id", "Tag ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("list_teammate_tags", "/teammates/{teammate_id}/tags")
            .describe("List tags for a specific teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
        Operation::post("create_teammate_tag", "/teammates/{teammate_id}/tags")
            .describe("Create a tag for a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("name", "Tag name").required())
            .param(Param::string("highlight", "Tag color")),
        Operation::get("list_team_tags", "/teams/{team_id}/tags")
            .describe("List tags for a specific team")
            .param(Param::string("team_id", "Team ID").required()),
        Operation::post("create_team_tag", "/teams/{team_id}/tags")
            .describe("Create a tag for a team")
            .param(Param::string("team_id", "Team ID").required())
            .param(Param::string("name", "Tag name").required())
            .param(Param::string("highlight", "Tag color")),

        // Teammate views
        Operation::patch("update_teammate", "/teammates/{teammate_id}")
            .describe("Update a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::string("username", "Updated username"))
            .param(Param::string("first_name", "Updated first name"))
            .param(Param::string("last_name", "Updated last name"))
            .param(Param::boolean("is_available", "Updated availability status")),
        Operation::get("list_teammate_conversations", "/teammates/{teammate_id}/conversations")
            .describe("List conversations assigned to a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required())
            .param(Param::number("limit", "Number of results"))
            .param(Param::string("page_token", "Pagination token")),
        Operation::get("list_teammate_inboxes", "/teammates/{teammate_id}/inboxes")
            .describe("List inboxes accessible to a teammate")
            .param(Param::string("teammate_id", "Teammate ID").required()),
    ]
}

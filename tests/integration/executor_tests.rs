//! End-to-end executor tests: tool calls through a live gateway against the
//! echoing fake upstream.
//!
//! Validates path, query, and body construction, credential headers,
//! upstream error message passthrough, and resource reads.

use serde_json::{json, Value};

use super::test_helpers::{
    result_text, spawn_gateway, spawn_upstream, test_config, McpConnection,
};

fn echoed(result: &Value) -> Value {
    serde_json::from_str(result_text(result)).expect("tool result is JSON")
}

#[tokio::test]
async fn path_parameters_fill_the_route() {
    let (upstream, log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool("get_conversation", json!({ "conversation_id": "cnv_123" }))
        .await;

    assert_eq!(result["isError"], json!(false));
    let echo = echoed(&result);
    assert_eq!(echo["method"], "GET");
    assert_eq!(echo["path"], "/conversations/cnv_123");

    let requests = log.lock().expect("log").clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer front-test-token")
    );
}

#[tokio::test]
async fn remaining_arguments_go_to_the_query() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool("search_conversations", json!({ "query": "tag:urgent", "limit": 5 }))
        .await;

    let echo = echoed(&result);
    assert_eq!(echo["path"], "/conversations/search");
    let query = echo["query"].as_str().expect("query string");
    assert!(query.contains("q=tag%3Aurgent"), "query was {query}");
    assert!(query.contains("limit=5"), "query was {query}");
}

#[tokio::test]
async fn write_operations_send_a_json_body() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool(
            "update_conversation",
            json!({ "conversation_id": "cnv_9", "status": "archived" }),
        )
        .await;

    let echo = echoed(&result);
    assert_eq!(echo["method"], "PATCH");
    assert_eq!(echo["path"], "/conversations/cnv_9");
    assert_eq!(echo["body"], json!({ "status": "archived" }));
}

#[tokio::test]
async fn reply_type_selects_the_route() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let comment = mcp
        .call_tool(
            "reply_to_conversation",
            json!({ "conversation_id": "cnv_1", "type": "comment", "body": "on it" }),
        )
        .await;
    assert_eq!(echoed(&comment)["path"], "/conversations/cnv_1/comments");

    let reply = mcp
        .call_tool(
            "reply_to_conversation",
            json!({ "conversation_id": "cnv_1", "type": "reply", "body": "hello" }),
        )
        .await;
    assert_eq!(echoed(&reply)["path"], "/conversations/cnv_1/messages");
}

#[tokio::test]
async fn upstream_error_message_is_passed_through() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool("get_conversation", json!({ "conversation_id": "cnv_missing" }))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert_eq!(result_text(&result), "Error: Conversation not found");
}

#[tokio::test]
async fn non_json_error_falls_back_to_status() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool("get_conversation", json!({ "conversation_id": "cnv_broken" }))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert_eq!(
        result_text(&result),
        "Error: Request failed with status code 502"
    );
}

#[tokio::test]
async fn invalid_arguments_never_reach_upstream() {
    let (upstream, log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp
        .call_tool("get_conversation", json!({ "conversation": "cnv_1" }))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert!(result_text(&result).starts_with("Error: "));
    assert!(log.lock().expect("log").is_empty());
}

#[tokio::test]
async fn secondary_services_use_their_own_roots_and_credentials() {
    let (upstream, log) = spawn_upstream().await;
    let config = test_config(
        &upstream,
        &[
            ("PIPEDRIVE_API_TOKEN", "pd-token"),
            ("PIPEDRIVE_DOMAIN", "acme"),
            ("DEALFRONT_API_KEY", "lf-key"),
        ],
    );
    let gateway = spawn_gateway(&config).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let deal = mcp.call_tool("get_deal", json!({ "id": 42 })).await;
    assert_eq!(echoed(&deal)["path"], "/pipedrive/deals/42");

    let leads = mcp
        .call_tool(
            "dealfront_list_leads",
            json!({ "account_id": "acc_1", "page_number": 2 }),
        )
        .await;
    let echo = echoed(&leads);
    assert_eq!(echo["path"], "/dealfront/accounts/acc_1/leads");
    assert!(echo["query"]
        .as_str()
        .is_some_and(|query| query.contains("page%5Bnumber%5D=2")));

    let requests = log.lock().expect("log").clone();
    assert_eq!(
        requests[1].authorization.as_deref(),
        Some("Token token=lf-key")
    );
}

#[tokio::test]
async fn recent_conversations_resource_issues_one_limited_call() {
    let (upstream, log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let reply = mcp
        .request(
            "resources/read",
            json!({ "uri": "frontapp://conversations/recent" }),
        )
        .await;

    let contents = &reply["result"]["contents"][0];
    assert_eq!(contents["uri"], "frontapp://conversations/recent");
    let text = contents["text"].as_str().expect("text content");
    let echo: Value = serde_json::from_str(text).expect("pretty JSON");
    assert_eq!(echo["path"], "/conversations");

    let requests = log.lock().expect("log").clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/conversations");
    assert_eq!(requests[0].query.as_deref(), Some("limit=20"));
}

#[tokio::test]
async fn unknown_resource_is_a_protocol_error() {
    let (upstream, log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let reply = mcp
        .request("resources/read", json!({ "uri": "frontapp://nope" }))
        .await;

    assert!(reply["error"]["message"]
        .as_str()
        .is_some_and(|message| message.contains("Unknown resource: frontapp://nope")));
    assert!(log.lock().expect("log").is_empty());

    let tools = mcp.request("tools/list", json!({})).await;
    assert!(tools["result"]["tools"].is_array(), "session still usable");
}

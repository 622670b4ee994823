//! Integration tests for the HTTP session transport.
//!
//! Validates the gateway secret gate, session creation and routing, the
//! error statuses for missing and unknown sessions, `DELETE`, and the
//! unauthenticated health endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use switchboard::mcp::http::SESSION_HEADER;
use switchboard::mcp::session::SessionManager;

use super::test_helpers::{
    result_text, spawn_gateway, spawn_gateway_with, spawn_upstream, test_config, test_registry,
    McpConnection,
};

const SECRET: &str = "gateway-secret";

fn initialize_body() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": { "name": "switchboard-test", "version": "0.0.1" }
        }
    })
}

#[tokio::test]
async fn health_is_unauthenticated() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;

    let response = reqwest::get(format!("{}/health", gateway.base_url))
        .await
        .expect("GET /health");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("health body");
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn initialize_returns_session_header_and_server_info() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);

    let reply = mcp.handshake().await;

    let session_id = mcp.session_id.clone().expect("session header");
    assert!(uuid::Uuid::parse_str(&session_id).is_ok());
    assert_eq!(reply["result"]["serverInfo"]["name"], "switchboard");
    assert!(reply["result"]["capabilities"]["tools"].is_object());
    assert!(reply["result"]["capabilities"]["resources"].is_object());
    assert_eq!(gateway.sessions.len().await, 1);
}

#[tokio::test]
async fn missing_secret_is_rejected_without_creating_a_session() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;
    let mcp = McpConnection::new(&gateway.base_url);

    let response = mcp.post(&initialize_body()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("401 body");
    assert_eq!(body["code"], "unauthorized");
    assert!(gateway.sessions.is_empty().await);
}

#[tokio::test]
async fn wrong_secret_is_rejected() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;
    let mcp = McpConnection::with_bearer(&gateway.base_url, "not-the-secret");

    let response = mcp.post(&initialize_body()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(gateway.sessions.is_empty().await);
}

#[tokio::test]
async fn bearer_secret_is_accepted() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;
    let mut mcp = McpConnection::with_bearer(&gateway.base_url, SECRET);

    mcp.handshake().await;

    assert!(mcp.session_id.is_some());
    assert_eq!(gateway.sessions.len().await, 1);
}

#[tokio::test]
async fn path_secret_is_accepted() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.mcp_url = format!("{}/mcp/{SECRET}", gateway.base_url);

    mcp.handshake().await;
    let tools = mcp.request("tools/list", json!({})).await;

    assert!(tools["result"]["tools"].is_array());
}

#[tokio::test]
async fn wrong_path_secret_is_rejected() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", SECRET)])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.mcp_url = format!("{}/mcp/guess", gateway.base_url);

    let response = mcp.post(&initialize_body()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn path_secret_is_percent_decoded() {
    let secret = "s3cr3t with spaces&more";
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[("MCP_AUTH_TOKEN", secret)])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.mcp_url = format!("{}/mcp/s3cr3t%20with%20spaces%26more", gateway.base_url);

    mcp.handshake().await;

    assert!(mcp.session_id.is_some());
    assert_eq!(gateway.sessions.len().await, 1);
}

#[tokio::test]
async fn open_mode_accepts_requests_without_secret() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);

    mcp.handshake().await;

    assert!(mcp.session_id.is_some());
}

#[tokio::test]
async fn non_initialize_without_session_is_bad_request() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mcp = McpConnection::new(&gateway.base_url);

    let response = mcp
        .post(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("400 body");
    assert_eq!(body["error"]["code"], -32000);
    assert_eq!(
        body["error"]["message"],
        "Bad Request: missing session identifier"
    );
    assert!(gateway.sessions.is_empty().await);
}

#[tokio::test]
async fn rejected_initialize_is_bad_request_and_leaves_no_session() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mcp = McpConnection::new(&gateway.base_url);

    let response = mcp
        .post(&json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(SESSION_HEADER).is_none());
    let body: Value = response.json().await.expect("400 body");
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["id"], 1);
    assert!(gateway.sessions.is_empty().await);
}

#[tokio::test]
async fn get_without_session_is_bad_request() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;

    let response = reqwest::get(format!("{}/mcp", gateway.base_url))
        .await
        .expect("GET /mcp");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.session_id = Some(uuid::Uuid::new_v4().to_string());

    let response = mcp
        .post(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("404 body");
    assert_eq!(body["error"]["message"], "Session not found");
}

#[tokio::test]
async fn unknown_tool_is_an_error_result_and_session_survives() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let result = mcp.call_tool("does_not_exist", json!({})).await;
    assert_eq!(result["isError"], json!(true));
    assert_eq!(result_text(&result), "Error: Unknown tool: does_not_exist");

    let tools = mcp.request("tools/list", json!({})).await;
    assert!(tools["result"]["tools"].is_array());
}

#[tokio::test]
async fn delete_closes_the_session() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    assert_eq!(mcp.delete().await, StatusCode::NO_CONTENT);
    assert!(gateway.sessions.is_empty().await);

    let response = mcp
        .post(&json!({ "jsonrpc": "2.0", "id": 99, "method": "tools/list" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_with_session_is_method_not_allowed() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let response = reqwest::Client::new()
        .get(&mcp.mcp_url)
        .header(SESSION_HEADER, mcp.session_id.clone().expect("session"))
        .send()
        .await
        .expect("GET /mcp");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn batch_bodies_are_rejected() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut mcp = McpConnection::new(&gateway.base_url);
    mcp.handshake().await;

    let response = mcp
        .post(&json!([{ "jsonrpc": "2.0", "id": 5, "method": "tools/list" }]))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("batch body");
    assert_eq!(body["error"]["code"], -32600);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let (upstream, _log) = spawn_upstream().await;
    let gateway = spawn_gateway(&test_config(&upstream, &[])).await;
    let mut first = McpConnection::new(&gateway.base_url);
    let mut second = McpConnection::new(&gateway.base_url);
    first.handshake().await;
    second.handshake().await;

    assert_ne!(first.session_id, second.session_id);
    assert_eq!(gateway.sessions.len().await, 2);

    assert_eq!(first.delete().await, StatusCode::NO_CONTENT);
    let tools = second.request("tools/list", json!({})).await;
    assert!(tools["result"]["tools"].is_array());
}

#[tokio::test]
async fn abandoned_sessions_are_closed_after_idle_timeout() {
    let (upstream, _log) = spawn_upstream().await;
    let config = test_config(&upstream, &[]);
    let sessions =
        SessionManager::new(test_registry(&config)).with_idle_timeout(Duration::from_millis(300));
    let gateway = spawn_gateway_with(&config, sessions).await;

    let mut abandoned = Vec::new();
    for _ in 0..5 {
        let mut mcp = McpConnection::new(&gateway.base_url);
        mcp.handshake().await;
        abandoned.push(mcp.session_id.clone().expect("session header"));
    }
    assert_eq!(gateway.sessions.len().await, 5);

    let drained = tokio::time::timeout(Duration::from_secs(5), async {
        while !gateway.sessions.is_empty().await {
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    })
    .await;
    assert!(drained.is_ok(), "idle sessions closed");

    let mut stale = McpConnection::new(&gateway.base_url);
    stale.session_id = abandoned.pop();
    let response = stale
        .post(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

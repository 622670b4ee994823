//! Integration tests for the session registry.
//!
//! Validates `create_session`, `get_session`, `remove_session`, id
//! uniqueness under concurrency, and removal when the session's service
//! ends.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use switchboard::mcp::session::SessionManager;
use switchboard::AppError;

use super::test_helpers::{test_config, test_registry};

fn manager() -> SessionManager {
    let config = test_config("http://127.0.0.1:9", &[]);
    SessionManager::new(test_registry(&config))
}

#[tokio::test]
async fn create_then_get_returns_the_same_session() {
    let sessions = manager();

    let created = sessions.create_session().await;
    let fetched = sessions.get_session(&created.id).await.expect("live session");

    assert!(Arc::ptr_eq(&created, &fetched));
    assert_eq!(sessions.len().await, 1);
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let sessions = manager();

    let err = sessions.get_session("never-issued").await.expect_err("unknown id");

    assert!(matches!(err, AppError::SessionNotFound(_)));
}

#[tokio::test]
async fn removed_session_is_indistinguishable_from_unknown() {
    let sessions = manager();
    let created = sessions.create_session().await;

    sessions.remove_session(&created.id).await;

    let err = sessions.get_session(&created.id).await.expect_err("removed");
    assert!(matches!(err, AppError::SessionNotFound(_)));
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn remove_is_idempotent() {
    let sessions = manager();
    let created = sessions.create_session().await;

    sessions.remove_session(&created.id).await;
    sessions.remove_session(&created.id).await;
    sessions.remove_session("never-issued").await;

    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn concurrent_creation_issues_unique_ids() {
    let sessions = manager();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let sessions = sessions.clone();
        handles.push(tokio::spawn(async move { sessions.create_session().await.id.clone() }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("task"));
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 32);
    assert_eq!(sessions.len().await, 32);
}

#[tokio::test]
async fn closing_the_transport_removes_the_session() {
    let sessions = manager();
    let created = sessions.create_session().await;

    created.transport.close();

    let removed = tokio::time::timeout(Duration::from_secs(5), async {
        while !sessions.is_empty().await {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(removed.is_ok(), "session removed after its service ended");
}

#[tokio::test]
async fn transport_routes_the_initialize_response() {
    let sessions = manager();
    let created = sessions.create_session().await;

    let reply = created
        .transport
        .request(&json!({
            "jsonrpc": "2.0",
            "id": "init-1",
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "switchboard-test", "version": "0.0.1" }
            }
        }))
        .await
        .expect("initialize reply");

    assert_eq!(reply["id"], "init-1");
    assert_eq!(reply["result"]["serverInfo"]["name"], "switchboard");
}

#[tokio::test]
async fn requests_on_a_closed_transport_fail() {
    let sessions = manager();
    let created = sessions.create_session().await;
    created.transport.close();

    let err = created
        .transport
        .request(&json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }))
        .await
        .expect_err("closed transport");

    assert!(matches!(err, AppError::SessionNotFound(_)));
}

#[tokio::test]
async fn close_all_drains_the_registry() {
    let sessions = manager();
    let first = sessions.create_session().await;
    let second = sessions.create_session().await;

    sessions.close_all().await;

    assert!(sessions.is_empty().await);
    assert!(first.transport.is_closed());
    assert!(second.transport.is_closed());
}

#[tokio::test]
async fn idle_session_is_closed_and_removed() {
    let sessions = manager().with_idle_timeout(Duration::from_millis(200));
    let created = sessions.create_session().await;

    let removed = tokio::time::timeout(Duration::from_secs(5), async {
        while !sessions.is_empty().await {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;

    assert!(removed.is_ok(), "idle session removed");
    assert!(created.transport.is_closed());
}

#[tokio::test]
async fn traffic_keeps_a_session_alive() {
    let sessions = manager().with_idle_timeout(Duration::from_millis(400));
    let created = sessions.create_session().await;

    created
        .transport
        .request(&json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "switchboard-test", "version": "0.0.1" }
            }
        }))
        .await
        .expect("initialize reply");
    created
        .transport
        .send(&json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
        .await
        .expect("initialized");

    for id in 1..=10 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        created
            .transport
            .request(&json!({ "jsonrpc": "2.0", "id": id, "method": "ping" }))
            .await
            .expect("ping reply");
    }

    assert!(!created.transport.is_closed());
    assert_eq!(sessions.len().await, 1);
}

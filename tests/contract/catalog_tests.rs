//! Contract tests for the merged tool catalog.
//!
//! Tool names are the public contract: the catalog depends only on which
//! optional services are configured, and names never collide.

use std::collections::HashSet;
use std::sync::Arc;

use switchboard::config::GlobalConfig;
use switchboard::mcp::handler::GatewayServer;
use switchboard::registry::OperationRegistry;
use switchboard::services::{dealfront, frontapp, instantly, pipedrive};

fn server(pairs: &[(&str, &str)]) -> GatewayServer {
    let mut env = vec![("FRONTAPP_API_TOKEN", "front-token")];
    env.extend_from_slice(pairs);

    let mut config = GlobalConfig::default();
    config
        .load_credentials_with(|key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        })
        .expect("credentials");
    let registry = OperationRegistry::from_config(&config).expect("registry");
    GatewayServer::new(Arc::new(registry))
}

fn tool_names(server: &GatewayServer) -> Vec<String> {
    server
        .all_tools()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect()
}

#[test]
fn front_only_lists_exactly_the_front_catalog() {
    let names = tool_names(&server(&[]));
    let expected: Vec<String> = frontapp::operations()
        .iter()
        .map(|op| op.name().to_owned())
        .collect();

    assert_eq!(names, expected);
    assert_eq!(names.len(), 142);
}

#[test]
fn all_services_list_the_union_in_service_order() {
    let names = tool_names(&server(&[
        ("PIPEDRIVE_API_TOKEN", "p"),
        ("PIPEDRIVE_DOMAIN", "acme"),
        ("INSTANTLY_API_KEY", "i"),
        ("DEALFRONT_API_KEY", "d"),
        ("DEALFRONT_IP_ENRICH_API_KEY", "e"),
    ]));

    let expected: Vec<String> = frontapp::operations()
        .into_iter()
        .chain(pipedrive::operations())
        .chain(instantly::operations())
        .chain(dealfront::operations())
        .chain(dealfront::ip_enrich_operations())
        .map(|op| op.name().to_owned())
        .collect();

    assert_eq!(names, expected);
    assert_eq!(names.len(), 142 + 55 + 25 + 10 + 1);
}

#[test]
fn enrich_ip_requires_its_own_key() {
    let names = tool_names(&server(&[("DEALFRONT_API_KEY", "d")]));

    assert!(names.iter().any(|name| name == "dealfront_list_accounts"));
    assert!(!names.iter().any(|name| name == "dealfront_enrich_ip"));
}

#[test]
fn names_are_unique_across_every_catalog() {
    let mut seen = HashSet::new();
    for op in frontapp::operations()
        .into_iter()
        .chain(pipedrive::operations())
        .chain(instantly::operations())
        .chain(dealfront::operations())
        .chain(dealfront::ip_enrich_operations())
    {
        assert!(seen.insert(op.name()), "duplicate tool name {}", op.name());
    }
}

#[test]
fn every_tool_has_a_description() {
    let server = server(&[
        ("PIPEDRIVE_API_TOKEN", "p"),
        ("PIPEDRIVE_DOMAIN", "acme"),
        ("INSTANTLY_API_KEY", "i"),
        ("DEALFRONT_API_KEY", "d"),
    ]);
    for tool in server.all_tools() {
        assert!(
            tool.description.as_deref().is_some_and(|text| !text.is_empty()),
            "{} has no description",
            tool.name
        );
    }
}

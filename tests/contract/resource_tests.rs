//! Contract tests for the fixed `frontapp://` resource set.

use switchboard::mcp::resources::{find, list_resources, MIME_TYPE, RESOURCES};

#[test]
fn resource_uris_and_names_are_stable() {
    let listed = list_resources();
    let pairs: Vec<(&str, &str)> = listed
        .resources
        .iter()
        .map(|resource| (resource.raw.uri.as_str(), resource.raw.name.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("frontapp://conversations/recent", "Recent Conversations"),
            ("frontapp://teammates", "Teammates"),
            ("frontapp://inboxes", "Inboxes"),
            ("frontapp://tags", "Tags"),
        ]
    );
    assert!(listed.next_cursor.is_none());
}

#[test]
fn every_resource_is_json() {
    for resource in list_resources().resources {
        assert_eq!(resource.raw.mime_type.as_deref(), Some(MIME_TYPE));
        assert!(resource.raw.description.is_some());
    }
}

#[test]
fn every_resource_reads_one_primary_path() {
    let paths: Vec<_> = RESOURCES.iter().map(|def| def.path).collect();
    assert_eq!(paths, vec!["/conversations", "/teammates", "/inboxes", "/tags"]);
    assert_eq!(
        find("frontapp://teammates").map(|def| def.query.len()),
        Some(0)
    );
}

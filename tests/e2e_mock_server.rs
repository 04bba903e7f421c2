//! E2E tests using the mock DependencyTrack server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use std::io::Write;

use dependency_track::mock_server::{
    Fixtures, MockServer, MockState, DNSMASQ_COMPONENT_UUID, FIRMWARE_PROJECT_UUID,
    SERVER_DEFAULT_PAGE_SIZE,
};
use dependency_track::{BomUploadOptions, DependencyTrackClient, PageParams};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let client = DependencyTrackClient::new(&url, "test-key").unwrap();
    let result = client.projects().list().await;

    assert!(result.is_err());
}

// =============================================================================
// Search Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_search_then_get_dependencies() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    // Step 1: Global search finds the component by name-version
    let results = client.search("dnsmasq-2.78").await.expect("search failed");
    assert_eq!(results.component.len(), 1);
    assert!(results.project.is_empty());

    // Step 2: Follow its UUID to the dependency endpoint
    let uuid = results.component[0]["uuid"].as_str().unwrap();
    assert_eq!(uuid, DNSMASQ_COMPONENT_UUID);
    let detail = client
        .components()
        .dependency(uuid)
        .await
        .expect("dependency lookup failed");
    assert!(detail.is_array());

    server.shutdown().await;
}

#[tokio::test]
async fn test_vulnerability_search() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let found = client
        .search_vulnerabilities("CVE-2017-14491")
        .await
        .expect("search failed");

    assert_eq!(found[0]["severity"], "CRITICAL");

    server.shutdown().await;
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_and_get_project_workflow() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let projects = client.projects().list().await.expect("list failed");
    assert!(!projects.is_empty(), "Expected at least one project");

    let uuid = projects[0]["uuid"].as_str().unwrap();
    let project = client.projects().get(uuid).await.expect("get failed");
    assert_eq!(project, projects[0]);

    let properties = client
        .projects()
        .properties(uuid)
        .await
        .expect("properties failed");
    assert_eq!(properties[0]["propertyValue"], "42");

    let dependencies = client
        .projects()
        .dependency(uuid)
        .await
        .expect("dependency failed");
    assert_eq!(dependencies.as_array().unwrap().len(), 3);

    server.shutdown().await;
}

#[tokio::test]
async fn test_project_not_found() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let err = client
        .projects()
        .get("99999999-9999-9999-9999-999999999999")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert!(!err.is_authentication());

    server.shutdown().await;
}

// =============================================================================
// License Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_concise_licenses_drop_text() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let full = client.licenses().list().await.expect("list failed");
    let concise = client.licenses().list_concise().await.expect("list failed");

    assert_eq!(full.len(), concise.len());
    assert!(full.iter().all(|l| l.get("licenseText").is_some()));
    assert!(concise.iter().all(|l| l.get("licenseText").is_none()));

    let mit = client.licenses().get("MIT").await.expect("get failed");
    assert_eq!(mit["name"], "MIT License");

    server.shutdown().await;
}

// =============================================================================
// Pagination Tests
// =============================================================================

#[tokio::test]
async fn test_large_page_size_returns_everything() {
    let mut state = MockState::new();
    state.components = Fixtures::bulk_components(SERVER_DEFAULT_PAGE_SIZE + 50);
    let server = MockServer::with_state(state).await;

    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();
    let components = client.components().list().await.expect("list failed");
    assert_eq!(components.len(), SERVER_DEFAULT_PAGE_SIZE + 50);

    // A small page shows the server-side truncation the default works around
    let small = DependencyTrackClient::new(server.url(), "test-key")
        .unwrap()
        .with_page_params(PageParams::for_page(2, 20));
    let page = small.components().list().await.expect("list failed");
    assert_eq!(page.len(), 20);
    assert_eq!(page[0]["name"], "lib20");

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_api_key_is_rejected() {
    let state = MockState::new()
        .with_project(Fixtures::project(FIRMWARE_PROJECT_UUID, "firmware", "1.0"))
        .with_required_api_key("correct-key");
    let server = MockServer::with_state(state).await;

    let bad = DependencyTrackClient::new(server.url(), "wrong-key").unwrap();
    let err = bad.projects().list().await.unwrap_err();
    assert!(err.is_authentication());
    assert_eq!(err.status_code(), Some(401));

    let good = DependencyTrackClient::new(server.url(), "correct-key").unwrap();
    let projects = good.projects().list().await.expect("list failed");
    assert_eq!(projects.len(), 1);

    server.shutdown().await;
}

// =============================================================================
// BOM Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_upload_bom_to_existing_project() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"bomFormat\": \"CycloneDX\"}").unwrap();

    let token = client
        .bom()
        .upload(file.path(), &BomUploadOptions::for_project(FIRMWARE_PROJECT_UUID))
        .await
        .expect("upload failed");

    let state = server.state();
    let state = state.read().await;
    assert_eq!(state.uploads.len(), 1);
    assert_eq!(state.uploads[0].token, token.token);
    assert_eq!(state.uploads[0].project_uuid, FIRMWARE_PROJECT_UUID);
    assert_eq!(state.uploads[0].bom, b"{\"bomFormat\": \"CycloneDX\"}");
    drop(state);

    server.shutdown().await;
}

#[tokio::test]
async fn test_upload_bom_auto_creates_project() {
    let server = MockServer::start_empty().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<bom/>").unwrap();

    // Without auto-create the project must exist
    let err = client
        .bom()
        .upload(file.path(), &BomUploadOptions::for_name("new-app", "0.1.0"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    client
        .bom()
        .upload(
            file.path(),
            &BomUploadOptions::for_name("new-app", "0.1.0").auto_create(true),
        )
        .await
        .expect("upload failed");

    let projects = client.projects().search("new-app").await.expect("search failed");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["version"], "0.1.0");
    assert!(projects[0]["lastBomImport"].is_i64());

    server.shutdown().await;
}

// =============================================================================
// Close Tests
// =============================================================================

#[tokio::test]
async fn test_closed_client_stops_working() {
    let server = MockServer::start().await;
    let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();

    client.licenses().list().await.expect("list failed");
    client.close();

    let err = client.licenses().list().await.unwrap_err();
    assert!(matches!(err, dependency_track::DependencyTrackError::Closed));

    server.shutdown().await;
}

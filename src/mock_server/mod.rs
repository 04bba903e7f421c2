//! Mock DependencyTrack server for E2E testing.
//!
//! This module provides an in-memory mock server that speaks the part of the
//! DependencyTrack API this crate uses. Unlike wiremock, which mocks at the
//! HTTP level per-test, this server keeps state across requests: uploaded
//! BOMs create projects, list endpoints page like the real server, and an
//! API key can be enforced.
//!
//! # Example
//!
//! ```ignore
//! use dependency_track::mock_server::{MockServer, FIRMWARE_PROJECT_UUID};
//! use dependency_track::DependencyTrackClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = DependencyTrackClient::new(server.url(), "test-key").unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.projects().get(FIRMWARE_PROJECT_UUID).await.unwrap();
//!     assert_eq!(project["name"], "Acme Router Firmware");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, DNSMASQ_COMPONENT_UUID, FIRMWARE_PROJECT_UUID};
pub use handlers::SERVER_DEFAULT_PAGE_SIZE;
pub use server::MockServer;
pub use state::{BomForm, BomRejection, BomUpload, MockState, SharedState};

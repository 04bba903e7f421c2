//! Mock DependencyTrack server.
//!
//! Provides an axum-based HTTP server that simulates the DependencyTrack API.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, SharedState};

/// A mock DependencyTrack server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Pass this to `DependencyTrackClient::new`; the client appends `/api/v1`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows inspecting or modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        state.projects = scenario.projects;
        state.components = scenario.components;
        state.licenses = scenario.licenses;
        state.vulnerabilities = scenario.vulnerabilities;

        for (project_uuid, property) in scenario.project_properties {
            state
                .project_properties
                .entry(project_uuid)
                .or_default()
                .push(property);
        }

        state
            .project_dependencies
            .extend(scenario.project_dependencies);
        state
            .component_dependencies
            .extend(scenario.component_dependencies);

        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: SharedState) -> Router {
        let api = Router::new()
            // Search routes
            .route("/search/:query", get(handlers::search))
            .route("/vulnerability", get(handlers::list_vulnerabilities))
            // Project routes
            .route("/project", get(handlers::list_projects))
            .route("/project/:uuid", get(handlers::get_project))
            .route("/project/:uuid/", get(handlers::get_project))
            .route(
                "/project/:uuid/property",
                get(handlers::get_project_properties),
            )
            .route(
                "/dependency/project/:uuid",
                get(handlers::get_project_dependencies),
            )
            // Component routes
            .route("/component", get(handlers::list_components))
            .route(
                "/dependency/component/:uuid",
                get(handlers::get_component_dependencies),
            )
            // License routes
            .route("/license", get(handlers::list_licenses))
            .route("/license/concise", get(handlers::list_concise_licenses))
            .route("/license/:license_id", get(handlers::get_license))
            // BOM routes
            .route("/bom", post(handlers::upload_bom))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            ))
            .with_state(state);

        Router::new()
            .nest("/api/v1", api)
            // Health check
            .route("/health", get(health_check))
    }
}

/// Reject requests without the configured `X-Api-Key`.
async fn require_api_key(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let required = state.read().await.required_api_key.clone();

    if let Some(expected) = required {
        let provided = request
            .headers()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        }
    }

    next.run(request).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

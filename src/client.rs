//! DependencyTrack API client.
//!
//! Low-level HTTP client that handles the API key header, URL building and
//! status checking. Endpoint operations live on the capability objects in
//! [`crate::api`], reached through [`DependencyTrackClient::projects`] and
//! friends.

use std::env;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::{BomApi, ComponentsApi, LicensesApi, ProjectsApi};
use crate::error::{DependencyTrackError, FailedResponse, Result};
use crate::pagination::PageParams;

const DEFAULT_HOST: &str = "http://localhost:8081";
const API_PREFIX: &str = "api/v1/";
const API_KEY_HEADER: &str = "X-Api-Key";
const USER_AGENT: &str = concat!("dependency-track-rs/", env!("CARGO_PKG_VERSION"));

/// Low-level DependencyTrack API client.
///
/// Every request carries the `X-Api-Key` header. Resource operations are
/// grouped on capability objects:
///
/// - [`projects`](Self::projects)
/// - [`components`](Self::components)
/// - [`licenses`](Self::licenses)
/// - [`bom`](Self::bom)
///
/// This struct is cheaply cloneable; clones share the same connection pool
/// and the same closed state.
///
/// # Example
///
/// ```no_run
/// use dependency_track::DependencyTrackClient;
///
/// # async fn example() -> dependency_track::Result<()> {
/// // Create from environment variables
/// let client = DependencyTrackClient::from_env()?;
///
/// // Or configure manually
/// let client = DependencyTrackClient::new("https://dtrack.example.com", "odt_key")?;
/// let projects = client.projects().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DependencyTrackClient {
    http: Arc<RwLock<Option<Client>>>,
    host: Arc<Url>,
    api_base: Arc<Url>,
    api_key: String,
    page: PageParams,
}

impl std::fmt::Debug for DependencyTrackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyTrackClient")
            .field("api_base", &self.api_base.as_str())
            .field("page", &self.page)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl DependencyTrackClient {
    /// Create a client from environment variables.
    ///
    /// Uses `DTRACK_API_KEY` for authentication and optionally `DTRACK_URL`
    /// for the server (defaults to `http://localhost:8081`).
    ///
    /// # Errors
    ///
    /// Returns an error if `DTRACK_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("DTRACK_API_KEY").map_err(|_| {
            DependencyTrackError::ConfigMissing(
                "DTRACK_API_KEY environment variable not set".to_string(),
            )
        })?;

        let host = env::var("DTRACK_URL").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        Self::new(&host, &api_key)
    }

    /// Create a new client for the server at `host`.
    ///
    /// Requests go to `<host>/api/v1/`. The key is not validated here; a bad
    /// key surfaces as [`DependencyTrackError::Authentication`] on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid.
    pub fn new(host: &str, api_key: &str) -> Result<Self> {
        let host = Url::parse(&format!("{}/", host.trim_end_matches('/')))?;
        let api_base = host.join(API_PREFIX)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(DependencyTrackError::Http)?;

        tracing::info!(
            "DependencyTrack instance against {} using {}",
            host,
            api_base
        );

        Ok(Self {
            http: Arc::new(RwLock::new(Some(http))),
            host: Arc::new(host),
            api_base: Arc::new(api_base),
            api_key: api_key.to_string(),
            page: PageParams::default(),
        })
    }

    /// Replace the pagination parameters sent with list requests.
    #[must_use]
    pub fn with_page_params(mut self, page: PageParams) -> Self {
        self.page = page;
        self
    }

    /// The server URL this client was created with.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// The API base all request paths are joined onto.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Pagination parameters attached to list requests.
    pub fn page_params(&self) -> &PageParams {
        &self.page
    }

    /// Project operations.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Component operations.
    pub fn components(&self) -> ComponentsApi<'_> {
        ComponentsApi::new(self)
    }

    /// License operations.
    pub fn licenses(&self) -> LicensesApi<'_> {
        LicensesApi::new(self)
    }

    /// Bill-of-materials operations.
    pub fn bom(&self) -> BomApi<'_> {
        BomApi::new(self)
    }

    /// Release the underlying transport.
    ///
    /// Every later call on this client, or on any clone of it, fails with
    /// [`DependencyTrackError::Closed`]. Closing twice is a no-op.
    pub fn close(&self) {
        let released = match self.http.write() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if released.is_some() {
            tracing::info!("Closed DependencyTrack session for {}", self.host);
        }
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        match self.http.read() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }

    /// Make a GET request without query parameters.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str, description: &str) -> Result<Response> {
        let url = self.api_base.join(path)?;

        let response = self
            .transport()?
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(DependencyTrackError::Http)?;

        Self::check_response(response, description).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        description: &str,
    ) -> Result<Response> {
        let url = self.api_base.join(path)?;

        let response = self
            .transport()?
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(DependencyTrackError::Http)?;

        Self::check_response(response, description).await
    }

    /// Make a POST request with a multipart body.
    #[tracing::instrument(skip(self, query, form))]
    pub async fn post_multipart<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        form: Form,
        description: &str,
    ) -> Result<Response> {
        let url = self.api_base.join(path)?;

        let response = self
            .transport()?
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .multipart(form)
            .send()
            .await
            .map_err(DependencyTrackError::Http)?;

        Self::check_response(response, description).await
    }

    /// GET `path` with the pagination query and decode the JSON body.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        description: &str,
    ) -> Result<T> {
        let response = self.get_with_query(path, &self.page, description).await?;
        Self::decode(response).await
    }

    /// Decode a successful response body as JSON.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await.map_err(DependencyTrackError::Http)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn transport(&self) -> Result<Client> {
        let guard = match self.http.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone().ok_or(DependencyTrackError::Closed)
    }

    /// Check response status and convert errors.
    ///
    /// Only 200 counts as success.
    async fn check_response(response: Response, description: &str) -> Result<Response> {
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "response received");

        if status == StatusCode::OK {
            return Ok(response);
        }

        let url = response.url().clone();
        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, "failed to read error response body");
                String::new()
            }
        };
        let response = FailedResponse {
            url,
            status,
            headers,
            body,
        };

        tracing::warn!(status = status.as_u16(), "{description}");

        let description = description.to_string();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(DependencyTrackError::Authentication {
                    description,
                    response,
                })
            }
            _ => Err(DependencyTrackError::Api {
                description,
                response,
            }),
        }
    }
}

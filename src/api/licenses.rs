//! License endpoints.

use serde_json::Value;

use super::{get_search_text, segment};
use crate::client::DependencyTrackClient;
use crate::error::Result;

/// Operations on `/license`.
#[derive(Debug, Clone, Copy)]
pub struct LicensesApi<'a> {
    client: &'a DependencyTrackClient,
}

impl<'a> LicensesApi<'a> {
    pub(crate) fn new(client: &'a DependencyTrackClient) -> Self {
        Self { client }
    }

    /// List all licenses.
    ///
    /// `GET /license`
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.client
            .get_paged("license", "Unable to get a list of licenses")
            .await
    }

    /// List all licenses in condensed form (no license text).
    ///
    /// `GET /license/concise`
    #[tracing::instrument(skip(self))]
    pub async fn list_concise(&self) -> Result<Vec<Value>> {
        self.client
            .get_paged("license/concise", "Unable to get a list of concise licenses")
            .await
    }

    /// Search licenses by name.
    ///
    /// `GET /license?searchText={query}`
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Value>> {
        get_search_text(self.client, "license", query, "Error while license searching").await
    }

    /// Get a license by its SPDX identifier, e.g. `Apache-2.0`.
    ///
    /// `GET /license/{licenseId}`. Unlike the list endpoints, no pagination
    /// query is sent.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, license_id: &str) -> Result<Value> {
        let path = format!("license/{}", segment(license_id));
        let response = self
            .client
            .get(&path, &format!("Error while getting license {license_id}"))
            .await?;
        DependencyTrackClient::decode(response).await
    }
}

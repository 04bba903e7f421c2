//! Search endpoints that span resource kinds.

use serde_json::Value;

use super::{get_search_text, segment};
use crate::client::DependencyTrackClient;
use crate::error::Result;
use crate::models::{SearchResponse, SearchResults};

impl DependencyTrackClient {
    /// Free-text search across licenses, projects, components and
    /// vulnerabilities.
    ///
    /// `GET /search/{query}`. Returns the `results` object of the response.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &dependency_track::DependencyTrackClient) -> dependency_track::Result<()> {
    /// let results = client.search("dnsmasq-2.78").await?;
    /// for component in &results.component {
    ///     println!("{}", component["name"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let path = format!("search/{}", segment(query));
        let response: SearchResponse = self.get_paged(&path, "Error while searching").await?;
        Ok(response.results)
    }

    /// Search vulnerabilities.
    ///
    /// `GET /vulnerability?searchText={query}`
    #[tracing::instrument(skip(self))]
    pub async fn search_vulnerabilities(&self, query: &str) -> Result<Vec<Value>> {
        get_search_text(
            self,
            "vulnerability",
            query,
            "Error while vulnerability searching",
        )
        .await
    }
}

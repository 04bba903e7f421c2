//! Component endpoints.

use serde_json::Value;

use super::{get_search_text, segment};
use crate::client::DependencyTrackClient;
use crate::error::Result;

/// Operations on `/component` and `/dependency/component`.
#[derive(Debug, Clone, Copy)]
pub struct ComponentsApi<'a> {
    client: &'a DependencyTrackClient,
}

impl<'a> ComponentsApi<'a> {
    pub(crate) fn new(client: &'a DependencyTrackClient) -> Self {
        Self { client }
    }

    /// List all components accessible to the API key.
    ///
    /// `GET /component`
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.client
            .get_paged("component", "Unable to get a list of components")
            .await
    }

    /// Search components by name.
    ///
    /// `GET /component?searchText={query}`
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Value>> {
        get_search_text(
            self.client,
            "component",
            query,
            "Error while component searching",
        )
        .await
    }

    /// Get the dependency detail of a component.
    ///
    /// `GET /dependency/component/{uuid}`
    #[tracing::instrument(skip(self))]
    pub async fn dependency(&self, uuid: &str) -> Result<Value> {
        let path = format!("dependency/component/{}", segment(uuid));
        self.client
            .get_paged(
                &path,
                &format!("Error while getting dependency for component {uuid}"),
            )
            .await
    }
}

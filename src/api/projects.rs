//! Project endpoints.

use serde_json::Value;

use super::{get_search_text, segment};
use crate::client::DependencyTrackClient;
use crate::error::Result;

/// Operations on `/project` and `/dependency/project`.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: &dependency_track::DependencyTrackClient) -> dependency_track::Result<()> {
/// let project = client
///     .projects()
///     .get("11111111-1111-1111-1111-111111111111")
///     .await?;
/// println!("{}", project["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProjectsApi<'a> {
    client: &'a DependencyTrackClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a DependencyTrackClient) -> Self {
        Self { client }
    }

    /// List all projects accessible to the API key.
    ///
    /// `GET /project`
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.client
            .get_paged("project", "Unable to get a list of projects")
            .await
    }

    /// Search projects by name.
    ///
    /// `GET /project?searchText={query}`
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Value>> {
        get_search_text(self.client, "project", query, "Error while project searching").await
    }

    /// Get a single project.
    ///
    /// `GET /project/{uuid}/`
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, uuid: &str) -> Result<Value> {
        let path = format!("project/{}/", segment(uuid));
        self.client
            .get_paged(&path, &format!("Error while getting project {uuid}"))
            .await
    }

    /// List the properties of a project.
    ///
    /// `GET /project/{uuid}/property`
    #[tracing::instrument(skip(self))]
    pub async fn properties(&self, uuid: &str) -> Result<Vec<Value>> {
        let path = format!("project/{}/property", segment(uuid));
        self.client
            .get_paged(
                &path,
                &format!("Error while getting property for project {uuid}"),
            )
            .await
    }

    /// Get the dependency graph of a project.
    ///
    /// `GET /dependency/project/{uuid}`
    #[tracing::instrument(skip(self))]
    pub async fn dependency(&self, uuid: &str) -> Result<Value> {
        let path = format!("dependency/project/{}", segment(uuid));
        self.client
            .get_paged(
                &path,
                &format!("Error while getting dependency for project {uuid}"),
            )
            .await
    }
}

//! Bill-of-materials endpoints.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::client::DependencyTrackClient;
use crate::error::{DependencyTrackError, Result};
use crate::models::{BomUploadOptions, BomUploadToken};

/// Operations on `/bom`.
#[derive(Debug, Clone, Copy)]
pub struct BomApi<'a> {
    client: &'a DependencyTrackClient,
}

impl<'a> BomApi<'a> {
    pub(crate) fn new(client: &'a DependencyTrackClient) -> Self {
        Self { client }
    }

    /// Upload a CycloneDX or SPDX document.
    ///
    /// `POST /bom` as `multipart/form-data`. The file is read completely and
    /// closed before the request goes out. Returns the token of the
    /// server-side processing job.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dependency_track::BomUploadOptions;
    ///
    /// # async fn example(client: &dependency_track::DependencyTrackClient) -> dependency_track::Result<()> {
    /// let token = client
    ///     .bom()
    ///     .upload("bom.xml", &BomUploadOptions::for_name("frontend", "1.2.0").auto_create(true))
    ///     .await?;
    /// println!("processing: {}", token.token);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DependencyTrackError::Io`] without contacting the server if
    /// the file cannot be read.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn upload(
        &self,
        path: impl AsRef<Path>,
        options: &BomUploadOptions,
    ) -> Result<BomUploadToken> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| DependencyTrackError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(bytes = contents.len(), "read BOM file");

        let form = multipart_form(contents, options);
        let response = self
            .client
            .post_multipart(
                "bom",
                self.client.page_params(),
                form,
                "Unable to upload BOM file",
            )
            .await?;
        DependencyTrackClient::decode(response).await
    }
}

/// Build the upload body. Optional identifiers are left out when unset.
fn multipart_form(contents: Vec<u8>, options: &BomUploadOptions) -> Form {
    let mut form = Form::new().part("bom", Part::bytes(contents).file_name("bom"));

    if let Some(project_id) = &options.project_id {
        form = form.text("project", project_id.clone());
    }
    if let Some(name) = &options.project_name {
        form = form.text("projectName", name.clone());
    }
    if let Some(version) = &options.project_version {
        form = form.text("projectVersion", version.clone());
    }

    form.text("autoCreate", options.auto_create.to_string())
}

//! Bill-of-materials upload types.

use serde::{Deserialize, Serialize};

/// Options for [`BomApi::upload`](crate::BomApi::upload).
///
/// Either `project_id` or `project_name` + `project_version` should identify
/// the target project. With `auto_create` the server creates a missing
/// project from the name and version.
#[derive(Debug, Clone, Default)]
pub struct BomUploadOptions {
    /// UUID of an existing project.
    pub project_id: Option<String>,
    /// Project name.
    pub project_name: Option<String>,
    /// Project version.
    pub project_version: Option<String>,
    /// Create the project if it does not exist.
    pub auto_create: bool,
}

impl BomUploadOptions {
    /// Target an existing project by UUID.
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    /// Target a project by name and version.
    pub fn for_name(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            project_name: Some(name.into()),
            project_version: Some(version.into()),
            ..Default::default()
        }
    }

    /// Set the auto-create flag.
    #[must_use]
    pub fn auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }
}

/// Response to a BOM upload.
///
/// The token identifies the asynchronous processing job on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomUploadToken {
    pub token: String,
}

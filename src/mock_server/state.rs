//! Mock server state management.
//!
//! Provides the in-memory data store for the mock DependencyTrack server.
//! Records are stored as raw JSON, the same way the client sees them.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::SearchResults;

/// State shared between the server task and the test.
pub type SharedState = Arc<RwLock<MockState>>;

/// A BOM accepted by `POST /api/v1/bom`.
#[derive(Debug, Clone)]
pub struct BomUpload {
    /// Processing token handed back to the client.
    pub token: String,
    /// UUID of the project the BOM was attached to.
    pub project_uuid: String,
    /// Raw document bytes.
    pub bom: Vec<u8>,
    /// When the upload was accepted.
    pub uploaded_at: DateTime<Utc>,
}

/// Fields of a BOM upload form.
#[derive(Debug, Clone, Default)]
pub struct BomForm {
    pub bom: Option<Vec<u8>>,
    pub project: Option<String>,
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub auto_create: bool,
}

/// Why a BOM upload was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BomRejection {
    /// The form had no `bom` part.
    MissingBom,
    /// No project matched and auto-create was off or impossible.
    ProjectNotFound,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Project records, each with a `uuid`.
    pub projects: Vec<Value>,

    /// Component records, each with a `uuid`.
    pub components: Vec<Value>,

    /// License records, each with a `licenseId`.
    pub licenses: Vec<Value>,

    /// Vulnerability records, each with a `vulnId`.
    pub vulnerabilities: Vec<Value>,

    /// Project properties indexed by project UUID.
    pub project_properties: HashMap<String, Vec<Value>>,

    /// Dependency detail indexed by project UUID.
    pub project_dependencies: HashMap<String, Value>,

    /// Dependency detail indexed by component UUID.
    pub component_dependencies: HashMap<String, Value>,

    /// Every accepted BOM upload, oldest first.
    pub uploads: Vec<BomUpload>,

    /// Optional API key. If set, requests must send it in `X-Api-Key`.
    pub required_api_key: Option<String>,
}

fn field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}

fn contains_ignore_case(record: &Value, fields: &[&str], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    fields.iter().any(|name| {
        field(record, name)
            .map(|v| v.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

fn filtered(records: &[Value], fields: &[&str], text: Option<&str>) -> Vec<Value> {
    records
        .iter()
        .filter(|r| text.map(|t| contains_ignore_case(r, fields, t)).unwrap_or(true))
        .cloned()
        .collect()
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a project record.
    pub fn with_project(mut self, project: Value) -> Self {
        self.projects.push(project);
        self
    }

    /// Add a component record.
    pub fn with_component(mut self, component: Value) -> Self {
        self.components.push(component);
        self
    }

    /// Add a license record.
    pub fn with_license(mut self, license: Value) -> Self {
        self.licenses.push(license);
        self
    }

    /// Add a vulnerability record.
    pub fn with_vulnerability(mut self, vulnerability: Value) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    /// Add a property to a project.
    pub fn with_project_property(mut self, project_uuid: &str, property: Value) -> Self {
        self.project_properties
            .entry(project_uuid.to_string())
            .or_default()
            .push(property);
        self
    }

    /// Set the dependency detail of a project.
    pub fn with_project_dependencies(mut self, project_uuid: &str, detail: Value) -> Self {
        self.project_dependencies
            .insert(project_uuid.to_string(), detail);
        self
    }

    /// Set the dependency detail of a component.
    pub fn with_component_dependencies(mut self, component_uuid: &str, detail: Value) -> Self {
        self.component_dependencies
            .insert(component_uuid.to_string(), detail);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, api_key: &str) -> Self {
        self.required_api_key = Some(api_key.to_string());
        self
    }

    /// Get a project by UUID.
    pub fn get_project(&self, uuid: &str) -> Option<&Value> {
        self.projects.iter().find(|p| field(p, "uuid") == Some(uuid))
    }

    /// Get a component by UUID.
    pub fn get_component(&self, uuid: &str) -> Option<&Value> {
        self.components.iter().find(|c| field(c, "uuid") == Some(uuid))
    }

    /// Get a license by SPDX id.
    pub fn get_license(&self, license_id: &str) -> Option<&Value> {
        self.licenses
            .iter()
            .find(|l| field(l, "licenseId") == Some(license_id))
    }

    /// List projects, optionally filtered by name.
    pub fn list_projects(&self, search_text: Option<&str>) -> Vec<Value> {
        filtered(&self.projects, &["name"], search_text)
    }

    /// List components, optionally filtered by name or group.
    pub fn list_components(&self, search_text: Option<&str>) -> Vec<Value> {
        filtered(&self.components, &["name", "group"], search_text)
    }

    /// List licenses, optionally filtered by name or SPDX id.
    pub fn list_licenses(&self, search_text: Option<&str>) -> Vec<Value> {
        filtered(&self.licenses, &["name", "licenseId"], search_text)
    }

    /// List vulnerabilities, optionally filtered by id or description.
    pub fn list_vulnerabilities(&self, search_text: Option<&str>) -> Vec<Value> {
        filtered(
            &self.vulnerabilities,
            &["vulnId", "description"],
            search_text,
        )
    }

    /// Free-text search across every resource kind.
    ///
    /// Components also match on `name-version`, so `dnsmasq-2.78` finds
    /// dnsmasq 2.78.
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let component = self
            .components
            .iter()
            .filter(|c| {
                let coordinate = format!(
                    "{}-{}",
                    field(c, "name").unwrap_or_default(),
                    field(c, "version").unwrap_or_default()
                );
                coordinate.to_lowercase().contains(&needle)
                    || contains_ignore_case(c, &["name", "group"], query)
            })
            .cloned()
            .collect();

        SearchResults {
            license: self.list_licenses(Some(query)),
            project: self.list_projects(Some(query)),
            component,
            vulnerability: self.list_vulnerabilities(Some(query)),
            ..Default::default()
        }
    }

    /// Accept a BOM upload and return its processing token.
    ///
    /// The target project is resolved by UUID, then by name and version.
    /// With `auto_create` a missing project is created from the name and
    /// version.
    pub fn accept_bom(&mut self, form: BomForm) -> Result<String, BomRejection> {
        let bom = form.bom.ok_or(BomRejection::MissingBom)?;

        let existing = match (&form.project, &form.project_name) {
            (Some(uuid), _) => self.get_project(uuid).and_then(|p| field(p, "uuid")),
            (None, Some(name)) => self
                .projects
                .iter()
                .find(|p| {
                    field(p, "name") == Some(name.as_str())
                        && field(p, "version") == form.project_version.as_deref()
                })
                .and_then(|p| field(p, "uuid")),
            (None, None) => None,
        }
        .map(str::to_string);

        let project_uuid = match (existing, form.auto_create, &form.project_name) {
            (Some(uuid), _, _) => uuid,
            (None, true, Some(name)) => {
                let uuid = uuid::Uuid::new_v4().to_string();
                self.projects.push(json!({
                    "uuid": uuid,
                    "name": name,
                    "version": form.project_version,
                    "active": true
                }));
                uuid
            }
            _ => return Err(BomRejection::ProjectNotFound),
        };

        let uploaded_at = Utc::now();
        if let Some(project) = self
            .projects
            .iter_mut()
            .find(|p| field(p, "uuid") == Some(project_uuid.as_str()))
        {
            project["lastBomImport"] = json!(uploaded_at.timestamp_millis());
        }

        let token = uuid::Uuid::new_v4().to_string();
        self.uploads.push(BomUpload {
            token: token.clone(),
            project_uuid,
            bom,
            uploaded_at,
        });
        Ok(token)
    }
}

//! DependencyTrack API client library.
//!
//! A thin Rust wrapper around the DependencyTrack REST API (`/api/v1`).
//! Each method issues exactly one HTTP request, attaches the API key, and
//! turns any status other than 200 into a typed error.
//!
//! # Quick Start
//!
//! ```no_run
//! use dependency_track::{BomUploadOptions, DependencyTrackClient};
//!
//! #[tokio::main]
//! async fn main() -> dependency_track::Result<()> {
//!     // Create client from environment variables
//!     let client = DependencyTrackClient::from_env()?;
//!
//!     // Search everything
//!     let results = client.search("dnsmasq-2.78").await?;
//!     println!("Found {} components", results.component.len());
//!
//!     // List all projects
//!     let projects = client.projects().list().await?;
//!     println!("Found {} projects", projects.len());
//!
//!     // Upload a BOM
//!     let token = client
//!         .bom()
//!         .upload("bom.xml", &BomUploadOptions::for_project("11111111-1111-1111-1111-111111111111"))
//!         .await?;
//!     println!("Processing token: {}", token.token);
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! [`DependencyTrackClient`] owns the transport and hands out one capability
//! object per resource:
//!
//! - [`ProjectsApi`] - projects, their properties and dependencies
//! - [`ComponentsApi`] - components and their dependencies
//! - [`LicensesApi`] - full and concise license lists
//! - [`BomApi`] - bill-of-materials upload
//!
//! Resource records are returned as raw [`serde_json::Value`]s.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `DTRACK_API_KEY` (required) - API key generated in the DependencyTrack UI
//! - `DTRACK_URL` (optional) - Server URL (defaults to `http://localhost:8081`)
//!
//! # Pagination
//!
//! List requests send `pageSize=10000&pageNumber=1` rather than following
//! pages. Larger result sets are truncated by the server.

mod api;
mod client;
mod error;
mod models;
mod output;
mod pagination;

pub mod cli;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::DependencyTrackClient;
pub use error::{DependencyTrackError, FailedResponse, Result};
pub use pagination::{PageParams, DEFAULT_PAGE_SIZE};

// Re-export capability objects
pub use api::{BomApi, ComponentsApi, LicensesApi, ProjectsApi};

// Re-export models
pub use models::{BomUploadOptions, BomUploadToken, SearchResults};

// Re-export output helpers
pub use output::{PrettyPrint, RecordRow};

//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the dtrack binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// DependencyTrack command-line interface.
#[derive(Parser, Debug)]
#[command(name = "dtrack", about = "DependencyTrack API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// DependencyTrack server URL.
    #[arg(long, global = true, env = "DTRACK_URL", default_value = "http://localhost:8081")]
    pub url: String,

    /// API key generated in the DependencyTrack UI.
    #[arg(long, global = true, env = "DTRACK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the server.
    Search {
        /// Free-text query.
        query: String,

        /// Restrict the search to one resource kind.
        #[arg(long, value_enum, default_value = "all")]
        kind: SearchKind,
    },

    /// List every record of a resource kind.
    List {
        /// The collection to list.
        entity: Collection,
    },

    /// Get a single record.
    Get {
        /// The type of record to get.
        entity: Entity,

        /// Project UUID or SPDX license id.
        id: String,
    },

    /// List the properties of a project.
    Properties {
        /// Project UUID.
        uuid: String,
    },

    /// Show the dependency detail of a project or component.
    Dependencies {
        /// Whose dependencies to show.
        owner: DependencyOwner,

        /// Project or component UUID.
        uuid: String,
    },

    /// Upload a bill of materials.
    UploadBom {
        /// Path to the CycloneDX or SPDX document.
        file: PathBuf,

        /// UUID of the target project.
        #[arg(long)]
        project: Option<String>,

        /// Name of the target project.
        #[arg(long)]
        project_name: Option<String>,

        /// Version of the target project.
        #[arg(long)]
        project_version: Option<String>,

        /// Create the project if it does not exist.
        #[arg(long)]
        auto_create: bool,
    },
}

/// Resource kinds accepted by `search --kind`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// All kinds via the global search endpoint.
    All,
    #[value(alias = "components")]
    Component,
    #[value(alias = "projects")]
    Project,
    #[value(alias = "licenses")]
    License,
    #[value(alias = "vulnerabilities")]
    Vulnerability,
}

/// Collections that can be listed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    #[value(alias = "project")]
    Projects,
    #[value(alias = "component")]
    Components,
    #[value(alias = "license")]
    Licenses,
    /// Licenses without their full text.
    ConciseLicenses,
}

/// Records that can be fetched individually.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A project, by UUID.
    #[value(alias = "projects")]
    Project,
    /// A license, by SPDX id.
    #[value(alias = "licenses")]
    License,
}

/// Owners of a dependency listing.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyOwner {
    Project,
    Component,
}

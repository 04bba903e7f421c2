//! CLI argument parsing tests.

use clap::Parser;
use dependency_track::cli::{Cli, Collection, Command, DependencyOwner, Entity, SearchKind};

#[test]
fn test_cli_parses_search_subcommand() {
    let cli = Cli::parse_from(["dtrack", "search", "dnsmasq-2.78"]);

    assert!(!cli.json);
    match cli.command {
        Command::Search { query, kind } => {
            assert_eq!(query, "dnsmasq-2.78");
            assert_eq!(kind, SearchKind::All);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_search_kind_accepts_plural_alias() {
    let cli = Cli::parse_from(["dtrack", "search", "openssl", "--kind", "components"]);

    assert!(matches!(
        cli.command,
        Command::Search {
            kind: SearchKind::Component,
            ..
        }
    ));
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["dtrack", "list", "projects"]);
    assert!(matches!(
        cli.command,
        Command::List {
            entity: Collection::Projects
        }
    ));

    let cli = Cli::parse_from(["dtrack", "list", "concise-licenses"]);
    assert!(matches!(
        cli.command,
        Command::List {
            entity: Collection::ConciseLicenses
        }
    ));
}

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["dtrack", "get", "license", "Apache-2.0"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::License);
            assert_eq!(id, "Apache-2.0");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_dependencies_subcommand() {
    let cli = Cli::parse_from([
        "dtrack",
        "dependencies",
        "component",
        "22222222-2222-2222-2222-222222222222",
    ]);

    match cli.command {
        Command::Dependencies { owner, uuid } => {
            assert_eq!(owner, DependencyOwner::Component);
            assert_eq!(uuid, "22222222-2222-2222-2222-222222222222");
        }
        _ => panic!("Expected Dependencies command"),
    }
}

#[test]
fn test_cli_parses_upload_bom_subcommand() {
    let cli = Cli::parse_from([
        "dtrack",
        "upload-bom",
        "bom.xml",
        "--project-name",
        "frontend",
        "--project-version",
        "1.2.0",
        "--auto-create",
    ]);

    match cli.command {
        Command::UploadBom {
            file,
            project,
            project_name,
            project_version,
            auto_create,
        } => {
            assert_eq!(file.to_str(), Some("bom.xml"));
            assert!(project.is_none());
            assert_eq!(project_name.as_deref(), Some("frontend"));
            assert_eq!(project_version.as_deref(), Some("1.2.0"));
            assert!(auto_create);
        }
        _ => panic!("Expected UploadBom command"),
    }
}

#[test]
fn test_global_flags() {
    // --json before subcommand
    let cli = Cli::parse_from(["dtrack", "--json", "list", "projects"]);
    assert!(cli.json);

    // --json and --url after subcommand (global flags)
    let cli = Cli::parse_from([
        "dtrack",
        "list",
        "projects",
        "--json",
        "--url",
        "https://dtrack.example.com",
        "--api-key",
        "odt_abc",
    ]);
    assert!(cli.json);
    assert_eq!(cli.url, "https://dtrack.example.com");
    assert_eq!(cli.api_key.as_deref(), Some("odt_abc"));
}

#[test]
fn test_unknown_collection_is_rejected() {
    let result = Cli::try_parse_from(["dtrack", "list", "revisions"]);
    assert!(result.is_err());
}

// Env vars are process-global, so every env fallback case runs in this one test.
#[test]
fn test_url_and_api_key_fall_back_to_env() {
    std::env::remove_var("DTRACK_URL");
    std::env::remove_var("DTRACK_API_KEY");
    let cli = Cli::try_parse_from(["dtrack", "list", "projects"]).unwrap();
    assert_eq!(cli.url, "http://localhost:8081");
    assert!(cli.api_key.is_none());

    std::env::set_var("DTRACK_URL", "https://dtrack.example.com");
    std::env::set_var("DTRACK_API_KEY", "odt_env");
    let cli = Cli::try_parse_from(["dtrack", "list", "projects"]).unwrap();
    assert_eq!(cli.url, "https://dtrack.example.com");
    assert_eq!(cli.api_key.as_deref(), Some("odt_env"));

    // Flags win over the environment
    let cli = Cli::try_parse_from(["dtrack", "list", "projects", "--api-key", "odt_flag"]).unwrap();
    assert_eq!(cli.api_key.as_deref(), Some("odt_flag"));

    std::env::remove_var("DTRACK_URL");
    std::env::remove_var("DTRACK_API_KEY");
}

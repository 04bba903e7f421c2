//! DependencyTrack API CLI binary.
//!
//! A command-line interface for interacting with a DependencyTrack server.

use clap::Parser;
use dependency_track::cli::{Cli, Collection, Command, DependencyOwner, Entity, SearchKind};
use dependency_track::{BomUploadOptions, DependencyTrackClient, PrettyPrint, RecordRow};
use serde::Serialize;
use serde_json::Value;
use std::process::ExitCode;
use tabled::Table;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let Some(api_key) = cli.api_key.as_deref() else {
        eprintln!("Error: no API key given");
        eprintln!("Hint: Set DTRACK_API_KEY environment variable or pass --api-key");
        return ExitCode::FAILURE;
    };

    let client = match DependencyTrackClient::new(&cli.url, api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&client, &cli).await;
    client.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_authentication() {
                eprintln!("Hint: Check the API key and its team permissions");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &DependencyTrackClient, cli: &Cli) -> dependency_track::Result<()> {
    match &cli.command {
        Command::Search { query, kind } => handle_search(client, query, *kind, cli.json).await,
        Command::List { entity } => handle_list(client, *entity, cli.json).await,
        Command::Get { entity, id } => handle_get(client, *entity, id, cli.json).await,
        Command::Properties { uuid } => {
            let properties = client.projects().properties(uuid).await?;
            output_records(&properties, cli.json)
        }
        Command::Dependencies { owner, uuid } => {
            let detail = match owner {
                DependencyOwner::Project => client.projects().dependency(uuid).await?,
                DependencyOwner::Component => client.components().dependency(uuid).await?,
            };
            output_value(&detail, cli.json)
        }
        Command::UploadBom {
            file,
            project,
            project_name,
            project_version,
            auto_create,
        } => {
            let options = BomUploadOptions {
                project_id: project.clone(),
                project_name: project_name.clone(),
                project_version: project_version.clone(),
                auto_create: *auto_create,
            };
            let token = client.bom().upload(file, &options).await?;
            if cli.json {
                output_json(&token)
            } else {
                println!("BOM accepted, processing token: {}", token.token);
                Ok(())
            }
        }
    }
}

async fn handle_search(
    client: &DependencyTrackClient,
    query: &str,
    kind: SearchKind,
    json: bool,
) -> dependency_track::Result<()> {
    match kind {
        SearchKind::All => {
            let results = client.search(query).await?;
            if json {
                output_json(&results)
            } else {
                println!("{}", results.pretty_print());
                Ok(())
            }
        }
        SearchKind::Component => output_records(&client.components().search(query).await?, json),
        SearchKind::Project => output_records(&client.projects().search(query).await?, json),
        SearchKind::License => output_records(&client.licenses().search(query).await?, json),
        SearchKind::Vulnerability => {
            output_records(&client.search_vulnerabilities(query).await?, json)
        }
    }
}

async fn handle_list(
    client: &DependencyTrackClient,
    entity: Collection,
    json: bool,
) -> dependency_track::Result<()> {
    let records = match entity {
        Collection::Projects => client.projects().list().await?,
        Collection::Components => client.components().list().await?,
        Collection::Licenses => client.licenses().list().await?,
        Collection::ConciseLicenses => client.licenses().list_concise().await?,
    };
    output_records(&records, json)
}

async fn handle_get(
    client: &DependencyTrackClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> dependency_track::Result<()> {
    let record = match entity {
        Entity::Project => client.projects().get(id).await?,
        Entity::License => client.licenses().get(id).await?,
    };
    output_value(&record, json)
}

fn output_json<T: Serialize>(item: &T) -> dependency_track::Result<()> {
    println!("{}", serde_json::to_string_pretty(item)?);
    Ok(())
}

/// Print an arbitrary response: arrays as a table, objects as key-value pairs.
fn output_value(value: &Value, json: bool) -> dependency_track::Result<()> {
    match value {
        Value::Array(records) => output_records(records, json),
        _ if json => output_json(value),
        _ => {
            println!("{}", value.pretty_print());
            Ok(())
        }
    }
}

fn output_records(records: &[Value], json: bool) -> dependency_track::Result<()> {
    if json {
        return output_json(&records);
    }

    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    println!("{}", Table::new(rows));
    println!("\n{} records", records.len());
    Ok(())
}


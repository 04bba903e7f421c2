//! Basic example demonstrating the DependencyTrack API client.
//!
//! Run with:
//! ```
//! DTRACK_URL=http://localhost:8081 DTRACK_API_KEY=your-key cargo run --example basic
//! ```

use dependency_track::DependencyTrackClient;

#[tokio::main]
async fn main() -> dependency_track::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating DependencyTrack client...");
    let client = DependencyTrackClient::from_env()?;
    println!("Connected to: {}", client.api_base());

    // List projects
    println!("\n--- Listing Projects ---");
    let projects = client.projects().list().await?;
    println!("Found {} projects", projects.len());

    for project in projects.iter().take(10) {
        println!(
            "  - {} {} ({})",
            project["name"].as_str().unwrap_or("?"),
            project["version"].as_str().unwrap_or(""),
            project["uuid"].as_str().unwrap_or("?")
        );
    }

    // Look at the first project in detail
    if let Some(uuid) = projects.first().and_then(|p| p["uuid"].as_str()) {
        println!("\n--- Project Details ---");
        let project = client.projects().get(uuid).await?;
        println!("Project: {}", project["name"]);
        println!("  Classifier: {}", project["classifier"]);
        println!("  Active: {}", project["active"]);

        let properties = client.projects().properties(uuid).await?;
        println!("  Properties: {}", properties.len());

        println!("\n--- Dependencies ---");
        let dependencies = client.projects().dependency(uuid).await?;
        match dependencies.as_array() {
            Some(list) => {
                for dep in list.iter().take(5) {
                    println!(
                        "  - {}@{}",
                        dep["name"].as_str().unwrap_or("?"),
                        dep["version"].as_str().unwrap_or("?")
                    );
                }
            }
            None => println!("  {dependencies}"),
        }
    }

    // Search across everything
    println!("\n--- Search: openssl ---");
    let results = client.search("openssl").await?;
    println!(
        "{} components, {} projects, {} licenses, {} vulnerabilities",
        results.component.len(),
        results.project.len(),
        results.license.len(),
        results.vulnerability.len()
    );

    client.close();
    println!("\nDone!");
    Ok(())
}

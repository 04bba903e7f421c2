//! Per-resource capability objects.
//!
//! Each object borrows the [`DependencyTrackClient`] and issues exactly one
//! request per method. Records come back as raw JSON.

mod bom;
mod components;
mod licenses;
mod projects;
mod search;

pub use bom::BomApi;
pub use components::ComponentsApi;
pub use licenses::LicensesApi;
pub use projects::ProjectsApi;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::DependencyTrackClient;
use crate::error::Result;
use crate::pagination::PageParams;

/// Query for the `?searchText=` filter on list endpoints.
#[derive(Serialize)]
struct SearchText<'a> {
    #[serde(rename = "searchText")]
    search_text: &'a str,
    #[serde(flatten)]
    page: &'a PageParams,
}

/// GET a list endpoint filtered by `searchText`.
async fn get_search_text<T: DeserializeOwned>(
    client: &DependencyTrackClient,
    path: &str,
    query: &str,
    description: &str,
) -> Result<T> {
    let params = SearchText {
        search_text: query,
        page: client.page_params(),
    };
    let response = client.get_with_query(path, &params, description).await?;
    DependencyTrackClient::decode(response).await
}

/// Percent-encode a single path segment.
fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

//! Cross-resource search results.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The `results` object returned by `GET /search/{query}`.
///
/// Records are passed through exactly as the server sent them. Kinds other
/// than the four below (`service`, `vulnerablesoftware`, ...) are kept in
/// [`other`](Self::other).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching licenses.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub license: Vec<Value>,

    /// Matching projects.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project: Vec<Value>,

    /// Matching components.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub component: Vec<Value>,

    /// Matching vulnerabilities.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerability: Vec<Value>,

    /// Any other result kinds, unchanged.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A `null` kind reads as no hits.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResults {
    /// Total number of hits across all resource kinds.
    pub fn total(&self) -> usize {
        let other: usize = self
            .other
            .values()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .sum();
        self.license.len()
            + self.project.len()
            + self.component.len()
            + self.vulnerability.len()
            + other
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Envelope around [`SearchResults`].
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: SearchResults,
}

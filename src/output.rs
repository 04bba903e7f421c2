//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output and
//! [`RecordRow`] for tables, as alternatives to JSON serialization.

use serde_json::Value;
use tabled::Tabled;

use crate::SearchResults;

/// Trait for human-readable key-value output.
///
/// Used for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// Fields tried, in order, for each table column.
const ID_FIELDS: &[&str] = &["uuid", "licenseId", "vulnId", "propertyName"];
const NAME_FIELDS: &[&str] = &["name", "propertyValue", "title"];
const DETAIL_FIELDS: &[&str] = &["version", "severity", "propertyType", "source"];

/// One table row summarizing an opaque resource record.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct RecordRow {
    pub id: String,
    pub name: String,
    pub detail: String,
}

impl From<&Value> for RecordRow {
    fn from(record: &Value) -> Self {
        Self {
            id: first_field(record, ID_FIELDS),
            name: first_field(record, NAME_FIELDS),
            detail: first_field(record, DETAIL_FIELDS),
        }
    }
}

fn first_field(record: &Value, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(scalar)
        .unwrap_or_default()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl PrettyPrint for Value {
    fn pretty_print(&self) -> String {
        let Value::Object(map) = self else {
            return scalar(self).unwrap_or_else(|| self.to_string());
        };

        let row = RecordRow::from(self);
        let header = if row.name.is_empty() {
            row.id.clone()
        } else {
            format!("{} ({})", row.name, row.id)
        };
        let width = map.keys().map(String::len).max().unwrap_or(0) + 1;
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];
        for (key, value) in map {
            let rendered = match value {
                Value::Null => continue,
                Value::Array(items) => format!("[{} items]", items.len()),
                Value::Object(fields) => format!("{{{} fields}}", fields.len()),
                other => scalar(other).unwrap_or_default(),
            };
            lines.push(format!("{:<width$} {}", format!("{key}:"), rendered, width = width));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for SearchResults {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            format!("Search results: {} hits", self.total()),
            "─".repeat(30),
        ];

        let mut sections = vec![
            ("Components".to_string(), self.component.as_slice()),
            ("Projects".to_string(), self.project.as_slice()),
            ("Licenses".to_string(), self.license.as_slice()),
            ("Vulnerabilities".to_string(), self.vulnerability.as_slice()),
        ];
        sections.extend(
            self.other
                .iter()
                .filter_map(|(kind, value)| Some((kind.clone(), value.as_array()?.as_slice()))),
        );
        for (title, records) in sections {
            lines.push(format!("{title}: {}", records.len()));
            for record in records {
                let row = RecordRow::from(record);
                let label = if row.name.is_empty() { &row.id } else { &row.name };
                if row.detail.is_empty() {
                    lines.push(format!("  - {label}"));
                } else {
                    lines.push(format!("  - {label} {}", row.detail));
                }
            }
        }

        lines.join("\n")
    }
}

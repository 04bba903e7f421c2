//! DependencyTrack API model types.
//!
//! Resource records (projects, components, licenses) are kept as raw
//! [`serde_json::Value`]s; only the envelopes the client needs to look inside
//! are typed.

mod bom;
mod search;

pub use bom::*;
pub use search::*;

//! Wire types for graph descriptions.
//!
//! These mirror the JSON produced by the text-to-graph service as loosely as
//! possible: every field that can be defaulted is optional here, and
//! [`crate::normalize`] decides what is fatal.
//!
//! ```json
//! {
//!   "nodes": [{ "id": "u", "label": "User", "type": "user" }],
//!   "edges": [{ "source": "u", "target": "lb", "label": "HTTPS" }]
//! }
//! ```

use serde::Deserialize;

/// A graph description before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraph {
    pub nodes: Vec<RawNode>,

    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

/// A node before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    /// Category tag; `category` is accepted as an alternative key.
    #[serde(default, rename = "type", alias = "category")]
    pub type_tag: Option<String>,
}

/// An edge before its endpoints are resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEdge {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

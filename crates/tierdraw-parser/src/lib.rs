//! # Tierdraw Parser
//!
//! Reads graph descriptions and turns them into validated
//! [`tierdraw_core::graph::Graph`] values.
//!
//! ## Usage
//!
//! ```
//! # use tierdraw_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{
//!         "nodes": [
//!             { "id": "u", "label": "User", "type": "user" },
//!             { "id": "lb", "label": "ALB", "type": "aws.network.elb_application_load_balancer" }
//!         ],
//!         "edges": [{ "source": "u", "target": "lb", "label": "HTTPS" }]
//!     }"#;
//!
//!     let graph = parse(source)?;
//!     assert_eq!(graph.nodes().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod raw;

mod normalize;
mod span;

pub use normalize::normalize;
pub use span::Span;

use log::debug;
use serde_json::error::Category as JsonErrorCategory;

use tierdraw_core::graph::Graph;

use error::{Diagnostic, ErrorCode, ParseError};
use raw::RawGraph;

/// Parse a JSON graph description into a validated graph.
///
/// 1. **Decode** - Read the JSON text into a [`RawGraph`]
/// 2. **Normalize** - Fill defaults, check node ids, drop dangling edges
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not JSON ([`ErrorCode::E001`]),
/// is not shaped like a graph ([`ErrorCode::E100`]), or has malformed nodes
/// (see [`normalize`]).
pub fn parse(source: &str) -> Result<Graph, ParseError> {
    let raw: RawGraph =
        serde_json::from_str(source).map_err(|err| json_diagnostic(&err, Some(source)))?;
    debug!(nodes = raw.nodes.len(), edges = raw.edges.len(); "Graph description decoded");

    normalize(raw)
}

/// Validate an already decoded JSON value.
///
/// # Errors
///
/// Same as [`parse`], except that syntax errors cannot occur.
pub fn from_value(value: serde_json::Value) -> Result<Graph, ParseError> {
    let raw: RawGraph = serde_json::from_value(value).map_err(|err| json_diagnostic(&err, None))?;

    normalize(raw)
}

fn json_diagnostic(err: &serde_json::Error, source: Option<&str>) -> ParseError {
    let diag = match err.classify() {
        JsonErrorCategory::Data => Diagnostic::error(format!("input is not a graph: {err}"))
            .with_code(ErrorCode::E100)
            .with_help("expected an object with a `nodes` list and an optional `edges` list"),
        JsonErrorCategory::Syntax | JsonErrorCategory::Eof | JsonErrorCategory::Io => {
            Diagnostic::error(format!("input is not valid JSON: {err}")).with_code(ErrorCode::E001)
        }
    };

    let diag = match source {
        Some(source) if err.line() > 0 => diag.with_label(
            Span::from_line_column(source, err.line(), err.column()),
            "here",
        ),
        _ => diag,
    };

    diag.into()
}

//! Graph validation and normalization.
//!
//! Turns a [`RawGraph`] into a [`Graph`]:
//!
//! - nodes without a usable id are rejected (all of them are reported)
//! - duplicate node ids are rejected
//! - missing labels become empty strings and line breaks in labels become spaces
//! - missing or unknown type tags resolve to [`Category::Unclassified`]
//! - edges whose source or target does not name a node are dropped with a warning

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use tierdraw_core::{
    category::Category,
    graph::{Edge, Graph, Node},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result as DiagnosticResult},
    raw::{RawEdge, RawGraph, RawNode},
};

/// Validate and normalize a raw graph description.
///
/// # Errors
///
/// Returns a [`ParseError`] listing every node that has no id
/// ([`ErrorCode::E200`]) or repeats an earlier id ([`ErrorCode::E201`]).
/// Dangling edges are never an error.
pub fn normalize(raw: RawGraph) -> Result<Graph, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut nodes = Vec::with_capacity(raw.nodes.len());
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (index, raw_node) in raw.nodes.into_iter().enumerate() {
        let node = match normalize_node(index, raw_node) {
            Ok(node) => node,
            Err(diag) => {
                collector.emit(diag);
                continue;
            }
        };

        if let Some(&first) = first_seen.get(node.id()) {
            collector.emit(
                Diagnostic::error(format!("node id `{}` is defined more than once", node.id()))
                    .with_code(ErrorCode::E201)
                    .with_help(format!(
                        "node #{index} reuses the id of node #{first}; give each node a unique id"
                    )),
            );
            continue;
        }
        first_seen.insert(node.id().to_string(), index);
        nodes.push(node);
    }

    collector.finish()?;

    let known: HashSet<&str> = nodes.iter().map(Node::id).collect();
    let total_edges = raw.edges.len();
    let edges: Vec<Edge> = raw
        .edges
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw_edge)| match resolve_edge(index, raw_edge, &known) {
            Ok(edge) => Some(edge),
            Err(diag) => {
                warn!(edge_index = index; "{diag}");
                None
            }
        })
        .collect();

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        dropped_edges = total_edges - edges.len();
        "Graph normalized"
    );

    Graph::new(nodes, edges).map_err(|err| {
        ParseError::from(Diagnostic::error(err.to_string()).with_code(ErrorCode::E201))
    })
}

fn normalize_node(index: usize, raw: RawNode) -> DiagnosticResult<Node> {
    let id = match raw.id {
        Some(id) if !id.trim().is_empty() => id,
        Some(_) => {
            return Err(Diagnostic::error(format!("node #{index} has a blank id"))
                .with_code(ErrorCode::E200)
                .with_help("every node needs a non-empty `id` so edges can refer to it"));
        }
        None => {
            return Err(Diagnostic::error(format!("node #{index} has no id"))
                .with_code(ErrorCode::E200)
                .with_help("every node needs a non-empty `id` so edges can refer to it"));
        }
    };

    let category = match raw.type_tag.as_deref() {
        Some(tag) => {
            let category = Category::from_type_tag(tag);
            if category.is_unclassified() {
                debug!(node_id = id, type_tag = tag; "Unknown node type, using default tier");
            }
            category
        }
        None => {
            debug!(node_id = id; "Node has no type, using default tier");
            Category::Unclassified
        }
    };

    let label = raw.label.as_deref().map(single_line).unwrap_or_default();

    Ok(Node::new(id, label, category))
}

fn resolve_edge(index: usize, raw: RawEdge, known: &HashSet<&str>) -> DiagnosticResult<Edge> {
    let (Some(source), Some(target)) = (raw.source, raw.target) else {
        return Err(Diagnostic::warning(format!(
            "edge #{index} is missing its source or target and was dropped"
        )));
    };

    for endpoint in [&source, &target] {
        if !known.contains(endpoint.as_str()) {
            return Err(Diagnostic::warning(format!(
                "edge #{index} ({source} -> {target}) refers to unknown node `{endpoint}` and was dropped"
            )));
        }
    }

    let label = raw.label.as_deref().map(single_line).unwrap_or_default();

    Ok(Edge::new(source, target).with_label(label))
}

/// Replace every line break (`\r\n`, `\n` or `\r`) with a single space.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

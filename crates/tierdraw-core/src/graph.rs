//! The validated graph model consumed by layout and document generation.
//!
//! A [`Graph`] is an ordered list of [`Node`]s and an ordered list of
//! [`Edge`]s. Node order matters: nodes that share a tier are placed in the
//! order they appear here. A graph is built once and never mutated.

use std::collections::HashSet;

use thiserror::Error;

use crate::category::Category;

/// Errors raised while assembling a [`Graph`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node id `{0}` is defined more than once")]
    DuplicateNode(String),
}

/// A node of the input graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    label: String,
    category: Category,
}

impl Node {
    /// Creates a node.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier unique within the graph, used only to resolve edges
    /// * `label` - Display text
    /// * `category` - Classification deciding the node's tier
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// A directed, optionally labeled connection between two nodes.
///
/// Self-edges and parallel edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    target: String,
    label: String,
}

impl Edge {
    /// Creates an unlabeled edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
        }
    }

    /// Sets the display text of the edge.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the label, empty when the edge has none.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered collection of nodes and edges with unique node ids.
///
/// Edges are not checked against the node set here; stages that resolve
/// endpoints skip edges whose source or target is unknown.
///
/// # Examples
///
/// ```
/// use tierdraw_core::{
///     category::Category,
///     graph::{Edge, Graph, Node},
/// };
///
/// let graph = Graph::new(
///     vec![
///         Node::new("u", "User", Category::HumanActor),
///         Node::new("lb", "ALB", Category::LoadBalancer),
///     ],
///     vec![Edge::new("u", "lb").with_label("HTTPS")],
/// )
/// .expect("node ids are unique");
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert!(graph.contains_node("lb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Assembles a graph, rejecting duplicate node ids.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] for the first id seen twice.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut seen = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id()) {
                return Err(GraphError::DuplicateNode(node.id().to_string()));
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Returns the nodes in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the node with the given id, if any.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Checks if a node with the given id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Returns `true` when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

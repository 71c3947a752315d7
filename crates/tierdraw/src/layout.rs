//! Layout stage: absolute positions for every node of a graph.
//!
//! The only engine is [`TieredLayout`], which stacks nodes in rows by the
//! tier of their category. Its result is a [`Positions`] map from node id to
//! [`Placement`], built fresh on every call.

mod tiered;

pub use tiered::TieredLayout;

use indexmap::IndexMap;

use tierdraw_core::{
    geometry::{Bounds, Point, Size},
    graph::Node,
    identifier::DocId,
};

/// Where a single node ended up, and the document identifier it was given.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    node: &'a Node,
    doc_id: DocId,
    origin: Point,
    size: Size,
}

impl<'a> Placement<'a> {
    fn new(node: &'a Node, doc_id: DocId, origin: Point, size: Size) -> Self {
        Self {
            node,
            doc_id,
            origin,
            size,
        }
    }

    /// Returns the node that was placed.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// Returns the top-left corner of the node's box.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.origin.to_bounds(self.size)
    }
}

/// Placements keyed by node id, iterated in the order ids were allocated.
#[derive(Debug, Default)]
pub struct Positions<'a> {
    placements: IndexMap<&'a str, Placement<'a>>,
}

impl<'a> Positions<'a> {
    fn insert(&mut self, placement: Placement<'a>) {
        self.placements.insert(placement.node.id(), placement);
    }

    /// Returns the placement of the node with the given id.
    pub fn get(&self, node_id: &str) -> Option<&Placement<'a>> {
        self.placements.get(node_id)
    }

    /// Returns the document identifier of the node with the given id.
    pub fn doc_id(&self, node_id: &str) -> Option<DocId> {
        self.get(node_id).map(Placement::doc_id)
    }

    /// Iterates over placements in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement<'a>> {
        self.placements.values()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the smallest bounds containing every placed box, or `None` when nothing was placed.
    pub fn bounds(&self) -> Option<Bounds> {
        self.iter()
            .map(Placement::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

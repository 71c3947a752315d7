//! draw.io document backend.
//!
//! Produces an uncompressed `mxfile` that draw.io / diagrams.net opens and
//! edits directly:
//!
//! ```text
//! mxfile
//! └─ diagram
//!    └─ mxGraphModel
//!       └─ root
//!          ├─ mxCell id=0                  (root cell)
//!          ├─ mxCell id=1 parent=0         (default layer)
//!          ├─ mxCell vertex=1 ...          (one per node)
//!          └─ mxCell edge=1 source target  (one per resolved edge)
//! ```

mod element;
mod writer;

pub use element::Element;

use std::collections::HashSet;

use log::{debug, error, info};

use tierdraw_core::{
    graph::{Edge, Graph},
    identifier::{DocId, DocIdAllocator},
};

use crate::{
    config::DocumentConfig,
    export::{self, Exporter},
    layout::{Placement, Positions},
};

/// Style shared by every node shape.
pub const SHAPE_STYLE: &str = "rounded=1;whiteSpace=wrap;html=1;arcSize=12;";

/// Style shared by every connector.
pub const CONNECTOR_STYLE: &str = "edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;endArrow=classic;endFill=1;";

const PAGE_ID: &str = "diagram-1";

/// draw.io exporter.
#[derive(Debug, Clone, Copy)]
pub struct Drawio<'c> {
    config: &'c DocumentConfig,
}

impl<'c> Drawio<'c> {
    pub fn new(config: &'c DocumentConfig) -> Self {
        Self { config }
    }

    /// Build the document tree without serializing it.
    ///
    /// Shapes appear in allocation order, followed by one connector per edge
    /// whose endpoints were both placed, in edge order. Edges with an
    /// unplaced endpoint are left out.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::DanglingReference`] if a connector would
    /// point at an identifier that no shape in the tree carries.
    pub fn document_tree(
        &self,
        graph: &Graph,
        positions: &Positions<'_>,
        ids: &mut DocIdAllocator,
    ) -> Result<Element, export::Error> {
        let mut cells = vec![
            Element::new("mxCell").with_attribute("id", DocId::ROOT),
            Element::new("mxCell")
                .with_attribute("id", DocId::CANVAS)
                .with_attribute("parent", DocId::ROOT),
        ];
        cells.extend(positions.iter().map(shape_cell));

        let mut omitted = 0;
        for (index, edge) in graph.edges().iter().enumerate() {
            match (positions.doc_id(edge.source()), positions.doc_id(edge.target())) {
                (Some(source), Some(target)) => {
                    cells.push(connector_cell(ids.allocate(), edge, source, target));
                }
                _ => {
                    debug!(
                        edge_index = index,
                        source = edge.source(),
                        target = edge.target();
                        "Omitting connector with unplaced endpoint"
                    );
                    omitted += 1;
                }
            }
        }

        verify_references(&cells)?;
        info!(shapes = positions.len(), connectors = graph.edges().len() - omitted, omitted; "Document tree built");

        Ok(self.wrap(cells))
    }

    fn wrap(&self, cells: Vec<Element>) -> Element {
        let model = Element::new("mxGraphModel")
            .with_attribute("dx", self.config.canvas_dx())
            .with_attribute("dy", self.config.canvas_dy())
            .with_attribute("grid", 1)
            .with_attribute("gridSize", self.config.grid_size())
            .with_attribute("guides", 1)
            .with_attribute("tooltips", 1)
            .with_attribute("connect", 1)
            .with_attribute("arrows", 1)
            .with_child(Element::new("root").with_children(cells));

        Element::new("mxfile")
            .with_attribute("host", self.config.host())
            .with_attribute("agent", self.config.agent())
            .with_child(
                Element::new("diagram")
                    .with_attribute("id", PAGE_ID)
                    .with_attribute("name", self.config.page_name())
                    .with_child(model),
            )
    }
}

impl Exporter for Drawio<'_> {
    fn export(
        &self,
        graph: &Graph,
        positions: &Positions<'_>,
        ids: &mut DocIdAllocator,
    ) -> Result<String, export::Error> {
        let tree = self.document_tree(graph, positions, ids)?;

        let mut document = String::new();
        if let Err(err) = writer::write_document(&mut document, &tree) {
            error!(err:err; "Failed to serialize document");
            return Err(export::Error::Serialization(err));
        }

        Ok(document)
    }
}

fn shape_cell(placement: &Placement<'_>) -> Element {
    let origin = placement.origin();
    let size = placement.size();

    Element::new("mxCell")
        .with_attribute("id", placement.doc_id())
        .with_attribute("value", placement.node().label())
        .with_attribute("style", SHAPE_STYLE)
        .with_attribute("parent", DocId::CANVAS)
        .with_attribute("vertex", 1)
        .with_child(
            Element::new("mxGeometry")
                .with_attribute("x", origin.x())
                .with_attribute("y", origin.y())
                .with_attribute("width", size.width())
                .with_attribute("height", size.height())
                .with_attribute("as", "geometry"),
        )
}

fn connector_cell(id: DocId, edge: &Edge, source: DocId, target: DocId) -> Element {
    Element::new("mxCell")
        .with_attribute("id", id)
        .with_attribute("value", edge.label())
        .with_attribute("style", CONNECTOR_STYLE)
        .with_attribute("parent", DocId::CANVAS)
        .with_attribute("edge", 1)
        .with_attribute("source", source)
        .with_attribute("target", target)
        .with_child(
            Element::new("mxGeometry")
                .with_attribute("relative", 1)
                .with_attribute("as", "geometry"),
        )
}

/// Check that every connector's endpoints name a shape cell.
fn verify_references(cells: &[Element]) -> Result<(), export::Error> {
    let shapes: HashSet<&str> = cells
        .iter()
        .filter(|cell| cell.attribute("vertex") == Some("1"))
        .filter_map(|cell| cell.attribute("id"))
        .collect();

    for cell in cells.iter().filter(|cell| cell.attribute("edge") == Some("1")) {
        for endpoint in [cell.attribute("source"), cell.attribute("target")] {
            let resolved = endpoint.is_some_and(|id| shapes.contains(id));
            if !resolved {
                let connector = cell.attribute("id").unwrap_or_default().to_string();
                let endpoint = endpoint.unwrap_or_default().to_string();
                error!(connector, endpoint; "Connector refers to a missing shape");
                return Err(export::Error::DanglingReference {
                    connector,
                    endpoint,
                });
            }
        }
    }

    Ok(())
}

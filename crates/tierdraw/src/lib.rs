//! Tierdraw - Tiered architecture diagrams for draw.io.
//!
//! Turns a JSON graph description of a system (nodes with a type tag, edges
//! between them) into a draw.io document. Nodes are stacked in horizontal
//! rows by tier, from the people using the system at the top down to storage
//! at the bottom, and connected with orthogonal connectors.
//!
//! The pipeline is parse, then layout, then export:
//!
//! ```text
//! JSON text ─▶ tierdraw_parser::parse ─▶ Graph
//!          ─▶ TieredLayout ─▶ Positions
//!          ─▶ Drawio exporter ─▶ mxfile text
//! ```

pub mod config;
pub mod export;
pub mod layout;

mod error;
mod sink;
mod source;

pub use tierdraw_core::{category, geometry, graph, identifier};

pub use error::TierdrawError;
pub use sink::{DEFAULT_EXTENSION, FileSink, MemorySink, OutputSink};
pub use source::{FileSource, GraphSource, JsonSource};

use log::{debug, info, trace};

use tierdraw_core::{graph::Graph, identifier::DocIdAllocator};

use config::AppConfig;
use export::{Exporter, drawio::Drawio};
use layout::TieredLayout;

/// Builder for parsing graphs and rendering them as draw.io documents.
///
/// A builder holds only its configuration. Every render starts from a fresh
/// identifier allocator, so one builder can serve any number of requests and
/// identical input always yields identical output.
///
/// # Examples
///
/// ```rust
/// use tierdraw::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{
///     "nodes": [
///         {"id": "user", "label": "User", "type": "user"},
///         {"id": "alb", "label": "ALB", "type": "aws.network.elb_application_load_balancer"}
///     ],
///     "edges": [{"source": "user", "target": "alb"}]
/// }"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let graph = builder.parse(source).expect("Failed to parse");
/// let document = builder.render_drawio(&graph).expect("Failed to render");
///
/// assert!(document.starts_with("<?xml"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON graph description.
    ///
    /// # Errors
    ///
    /// Returns [`TierdrawError::Parse`] for malformed JSON, a document that is
    /// not a graph, or nodes with missing or repeated ids.
    pub fn parse(&self, source: &str) -> Result<Graph, TierdrawError> {
        info!("Parsing graph description");

        let graph = tierdraw_parser::parse(source)
            .map_err(|err| TierdrawError::new_parse_error(err, source))?;

        debug!(nodes = graph.nodes().len(), edges = graph.edges().len(); "Graph parsed successfully");
        trace!(graph:?; "Parsed graph");

        Ok(graph)
    }

    /// Lay out a graph and render it as a draw.io document.
    ///
    /// # Errors
    ///
    /// Returns [`TierdrawError::Config`] if the layout configuration is
    /// invalid and [`TierdrawError::Export`] if the document cannot be built.
    pub fn render_drawio(&self, graph: &Graph) -> Result<String, TierdrawError> {
        self.config
            .layout()
            .validate()
            .map_err(TierdrawError::Config)?;

        let mut ids = DocIdAllocator::new();

        info!(nodes = graph.nodes().len(); "Calculating tiered layout");
        let positions = TieredLayout::from_config(self.config.layout()).layout(graph, &mut ids);
        debug!(shapes = positions.len(), bounds:? = positions.bounds(); "Layout calculated");

        let document = Drawio::new(self.config.document()).export(graph, &positions, &mut ids)?;

        info!(bytes = document.len(), ids = ids.allocated(); "Document rendered successfully");
        Ok(document)
    }

    /// Fetch a graph from `source`, render it and hand the document to `sink`.
    ///
    /// If the source fails nothing is rendered and the sink is not touched.
    /// On success the sink receives the complete document exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TierdrawError::Source`] wrapping the source's error, or any
    /// error from rendering or from the sink.
    pub fn generate(
        &self,
        source: &dyn GraphSource,
        sink: &mut dyn OutputSink,
    ) -> Result<(), TierdrawError> {
        let graph = source
            .fetch_graph()
            .map_err(|err| TierdrawError::Source(Box::new(err)))?;

        let document = self.render_drawio(&graph)?;
        sink.write_document(&document)
    }
}

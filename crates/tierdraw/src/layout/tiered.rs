//! Tiered layout engine
//!
//! Nodes are bucketed into rows by [`Category::tier`], keeping their input
//! order inside each row. Rows are stacked top to bottom, each centered on
//! the same x-coordinate. Rows without nodes take no vertical space.
//!
//! ```text
//!  tier 0        [user] [browser]
//!  tier 1            [route 53]
//!  tier 2              (empty, skipped)
//!  tier 3       [web 1] [web 2] [web 3]
//! ```
//!
//! [`Category::tier`]: tierdraw_core::category::Category::tier

use log::{debug, trace};

use tierdraw_core::{
    category::TIER_COUNT,
    geometry::{Point, Size},
    graph::{Graph, Node},
    identifier::DocIdAllocator,
};

use crate::{
    config::LayoutConfig,
    layout::{Placement, Positions},
};

/// Row-per-tier layout engine.
#[derive(Debug, Clone)]
pub struct TieredLayout {
    box_size: Size,
    horizontal_pitch: f32,
    vertical_pitch: f32,
    top_margin: f32,
    center_x: f32,
}

impl TieredLayout {
    /// Create an engine with the default geometry.
    pub fn new() -> Self {
        Self::from_config(&LayoutConfig::default())
    }

    /// Create an engine from layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            box_size: Size::new(config.box_width(), config.box_height()),
            horizontal_pitch: config.horizontal_pitch(),
            vertical_pitch: config.vertical_pitch(),
            top_margin: config.top_margin(),
            center_x: config.center_x(),
        }
    }

    /// Set the size of every node box
    pub fn with_box_size(mut self, size: Size) -> Self {
        self.box_size = size;
        self
    }

    /// Set the distance between origins of neighbouring boxes in a row
    pub fn with_horizontal_pitch(mut self, pitch: f32) -> Self {
        self.horizontal_pitch = pitch;
        self
    }

    /// Set the distance between origins of consecutive rows
    pub fn with_vertical_pitch(mut self, pitch: f32) -> Self {
        self.vertical_pitch = pitch;
        self
    }

    /// Set the y-coordinate of the first row
    pub fn with_top_margin(mut self, margin: f32) -> Self {
        self.top_margin = margin;
        self
    }

    /// Set the x-coordinate rows are centered on
    pub fn with_center_x(mut self, center_x: f32) -> Self {
        self.center_x = center_x;
        self
    }

    /// X-coordinate of the first box in a row of `count` boxes.
    pub fn row_start_x(&self, count: usize) -> f32 {
        self.center_x - (count as f32 * self.horizontal_pitch) / 2.0
    }

    /// Place every node of `graph`, drawing one identifier per node from `ids`.
    ///
    /// Identifiers are drawn row by row, left to right, so they increase in
    /// reading order.
    pub fn layout<'a>(&self, graph: &'a Graph, ids: &mut DocIdAllocator) -> Positions<'a> {
        let rows = Self::partition_by_tier(graph);
        let mut positions = Positions::default();
        let mut y = self.top_margin;

        for (tier, row) in rows.iter().enumerate() {
            if row.is_empty() {
                trace!(tier; "Skipping empty tier");
                continue;
            }

            let start_x = self.row_start_x(row.len());
            debug!(tier, nodes = row.len(), start_x, y; "Placing tier");

            for (column, &node) in row.iter().enumerate() {
                let origin = Point::new(start_x + column as f32 * self.horizontal_pitch, y);
                positions.insert(Placement::new(node, ids.allocate(), origin, self.box_size));
            }

            y += self.vertical_pitch;
        }

        positions
    }

    /// Stable partition of nodes into tier rows.
    fn partition_by_tier(graph: &Graph) -> [Vec<&Node>; TIER_COUNT] {
        let mut rows: [Vec<&Node>; TIER_COUNT] = Default::default();
        for node in graph.nodes() {
            rows[node.category().tier().index()].push(node);
        }
        rows
    }
}

impl Default for TieredLayout {
    fn default() -> Self {
        Self::new()
    }
}

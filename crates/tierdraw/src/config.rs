//! Configuration types for Tierdraw document generation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and document settings.
//! - [`LayoutConfig`] - Box size, row/column pitch and placement of the tiered layout.
//! - [`DocumentConfig`] - Header attributes written into the generated document.
//!
//! # Example
//!
//! ```
//! # use tierdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.layout().validate().is_ok());
//! assert_eq!(config.document().host(), "app.diagrams.net");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and document configurations.
    pub fn new(layout: LayoutConfig, document: DocumentConfig) -> Self {
        Self { layout, document }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Geometry of the tiered layout.
///
/// Boxes are positioned by their top-left corner. Pitches are measured between
/// the origins of neighbouring boxes, so a pitch larger than the box size
/// leaves a gap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    box_width: f32,
    box_height: f32,
    horizontal_pitch: f32,
    vertical_pitch: f32,
    top_margin: f32,
    /// Every row is centered on this x-coordinate.
    center_x: f32,
}

impl LayoutConfig {
    pub fn box_width(&self) -> f32 {
        self.box_width
    }

    pub fn box_height(&self) -> f32 {
        self.box_height
    }

    pub fn horizontal_pitch(&self) -> f32 {
        self.horizontal_pitch
    }

    pub fn vertical_pitch(&self) -> f32 {
        self.vertical_pitch
    }

    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    /// Checks that every value is finite and that sizes and pitches are positive.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("horizontal_pitch", self.horizontal_pitch),
            ("vertical_pitch", self.vertical_pitch),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("layout.{name} must be a positive number, got {value}"));
            }
        }

        for (name, value) in [("top_margin", self.top_margin), ("center_x", self.center_x)] {
            if !value.is_finite() {
                return Err(format!("layout.{name} must be a finite number, got {value}"));
            }
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            box_width: 120.0,
            box_height: 80.0,
            horizontal_pitch: 180.0,
            vertical_pitch: 140.0,
            top_margin: 40.0,
            center_x: 600.0,
        }
    }
}

/// Attributes of the document header.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    host: String,
    agent: String,
    page_name: String,
    canvas_dx: u32,
    canvas_dy: u32,
    grid_size: u32,
}

impl DocumentConfig {
    /// Application the document claims to be created with.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Generator name recorded in the document.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn canvas_dx(&self) -> u32 {
        self.canvas_dx
    }

    pub fn canvas_dy(&self) -> u32 {
        self.canvas_dy
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            host: "app.diagrams.net".to_string(),
            agent: "tierdraw".to_string(),
            page_name: "Page-1".to_string(),
            canvas_dx: 1400,
            canvas_dy: 800,
            grid_size: 10,
        }
    }
}

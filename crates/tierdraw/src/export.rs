//! Export functionality for Tierdraw documents.
//!
//! This module provides the [`Exporter`] trait that turns a laid-out graph
//! into document text. It is the final stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Graph description
//!     ↓ parse / normalize
//! Graph
//!     ↓ layout
//! Positions
//!     ↓ export (this module)
//! Document text
//! ```
//!
//! # Available Backends
//!
//! - [`drawio`]: draw.io (`mxfile`) XML via [`drawio::Drawio`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`TierdrawError::Export`] at the crate boundary.
//!
//! [`TierdrawError::Export`]: crate::TierdrawError::Export

pub mod drawio;

use std::fmt;

use tierdraw_core::{graph::Graph, identifier::DocIdAllocator};

use crate::layout::Positions;

/// Abstraction for document export backends.
pub trait Exporter {
    /// Build the complete document for a laid-out graph.
    ///
    /// Identifiers for elements that the layout did not create (connectors)
    /// are drawn from `ids`, which must be the allocator the layout used.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the document tree is inconsistent or cannot
    /// be serialized. No partial output is returned.
    fn export(
        &self,
        graph: &Graph,
        positions: &Positions<'_>,
        ids: &mut DocIdAllocator,
    ) -> Result<String, Error>;
}

/// Errors that can occur during document export.
#[derive(Debug)]
pub enum Error {
    /// A connector refers to an identifier that no shape in the document carries.
    DanglingReference { connector: String, endpoint: String },
    /// Writing the document text failed.
    Serialization(fmt::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingReference {
                connector,
                endpoint,
            } => write!(
                f,
                "connector {connector} refers to missing shape {endpoint}"
            ),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DanglingReference { .. } => None,
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Serialization(err)
    }
}

//! Error types for Tierdraw operations.
//!
//! This module provides the main error type [`TierdrawError`] which wraps
//! the error conditions that can occur while turning a graph description
//! into a document.

use std::io;

use thiserror::Error;

use tierdraw_parser::error::ParseError;

/// The main error type for Tierdraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so that
/// labelled spans can be rendered against it.
#[derive(Debug, Error)]
pub enum TierdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The graph source failed; wraps the error it reported.
    #[error("Graph source error: {0}")]
    Source(#[source] Box<TierdrawError>),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TierdrawError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TierdrawError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

//! Where rendered documents go.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::TierdrawError;

/// Extension given to output paths that have none.
pub const DEFAULT_EXTENSION: &str = "drawio";

/// Receives the complete document text produced by [`DiagramBuilder::generate`].
///
/// [`DiagramBuilder::generate`]: crate::DiagramBuilder::generate
pub trait OutputSink {
    /// Store or deliver `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`TierdrawError`] if the document cannot be delivered.
    fn write_document(&mut self, document: &str) -> Result<(), TierdrawError>;
}

/// Writes the document to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink writing to `path`, adding the `.drawio` extension if the
    /// path has none.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut path = path.into();
        if path.extension().is_none() {
            path.set_extension(DEFAULT_EXTENSION);
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn write_document(&mut self, document: &str) -> Result<(), TierdrawError> {
        fs::write(&self.path, document)?;
        info!(path:? = self.path, bytes = document.len(); "Document written");
        Ok(())
    }
}

/// Keeps the last document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    document: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last document written, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn into_document(self) -> Option<String> {
        self.document
    }
}

impl OutputSink for MemorySink {
    fn write_document(&mut self, document: &str) -> Result<(), TierdrawError> {
        self.document = Some(document.to_string());
        Ok(())
    }
}

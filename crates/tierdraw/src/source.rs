//! Where graphs come from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use tierdraw_core::graph::Graph;

use crate::TierdrawError;

/// Supplies a validated graph to [`DiagramBuilder::generate`].
///
/// [`DiagramBuilder::generate`]: crate::DiagramBuilder::generate
pub trait GraphSource {
    /// Produce the graph to render.
    ///
    /// # Errors
    ///
    /// Returns a [`TierdrawError`] if the graph cannot be obtained or is invalid.
    fn fetch_graph(&self) -> Result<Graph, TierdrawError>;
}

/// A graph description held in memory as JSON text.
#[derive(Debug, Clone)]
pub struct JsonSource {
    text: String,
}

impl JsonSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl GraphSource for JsonSource {
    fn fetch_graph(&self) -> Result<Graph, TierdrawError> {
        tierdraw_parser::parse(&self.text)
            .map_err(|err| TierdrawError::new_parse_error(err, self.text.as_str()))
    }
}

/// A graph description read from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphSource for FileSource {
    fn fetch_graph(&self) -> Result<Graph, TierdrawError> {
        debug!(path:? = self.path; "Reading graph description");
        let text = fs::read_to_string(&self.path)?;
        JsonSource::new(text).fetch_graph()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_json_source() {
        let source = JsonSource::new(r#"{"nodes": [{"id": "a", "type": "database"}]}"#);

        let graph = source.fetch_graph().unwrap();

        assert_eq!(graph.nodes().len(), 1);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_json_source_keeps_text_for_diagnostics() {
        let text = r#"{"nodes": [{"label": "no id"}]}"#;

        let err = JsonSource::new(text).fetch_graph().unwrap_err();

        match err {
            TierdrawError::Parse { src, .. } => assert_eq!(src, text),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodes": [{{"id": "u", "type": "user"}}], "edges": []}}"#).unwrap();

        let graph = FileSource::new(file.path()).fetch_graph().unwrap();

        assert!(graph.contains_node("u"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));

        assert!(matches!(source.fetch_graph(), Err(TierdrawError::Io(_))));
    }
}

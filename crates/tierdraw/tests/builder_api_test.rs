//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the public API end to end: parse, render and the
//! source/sink driven `generate`.

use tierdraw::{
    DiagramBuilder, GraphSource, JsonSource, MemorySink, OutputSink, TierdrawError,
    config::AppConfig, graph::Graph,
};

const USER_AND_ALB: &str = r#"{
    "nodes": [
        {"id": "user", "label": "User", "type": "user"},
        {"id": "alb", "label": "ALB", "type": "aws.network.elb_application_load_balancer"}
    ],
    "edges": [
        {"source": "user", "target": "alb", "label": "HTTPS"}
    ]
}"#;

const USER_AND_ALB_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxfile host="app.diagrams.net" agent="tierdraw">
  <diagram id="diagram-1" name="Page-1">
    <mxGraphModel dx="1400" dy="800" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1">
      <root>
        <mxCell id="0"/>
        <mxCell id="1" parent="0"/>
        <mxCell id="2" value="User" style="rounded=1;whiteSpace=wrap;html=1;arcSize=12;" parent="1" vertex="1">
          <mxGeometry x="510" y="40" width="120" height="80" as="geometry"/>
        </mxCell>
        <mxCell id="3" value="ALB" style="rounded=1;whiteSpace=wrap;html=1;arcSize=12;" parent="1" vertex="1">
          <mxGeometry x="510" y="180" width="120" height="80" as="geometry"/>
        </mxCell>
        <mxCell id="4" value="HTTPS" style="edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;endArrow=classic;endFill=1;" parent="1" edge="1" source="2" target="3">
          <mxGeometry relative="1" as="geometry"/>
        </mxCell>
      </root>
    </mxGraphModel>
  </diagram>
</mxfile>
"#;

/// A source that always fails, for checking that nothing reaches the sink.
struct FailingSource;

impl GraphSource for FailingSource {
    fn fetch_graph(&self) -> Result<Graph, TierdrawError> {
        Err(TierdrawError::Io(std::io::Error::other("source unavailable")))
    }
}

/// A sink that counts how often it is written to.
#[derive(Default)]
struct CountingSink {
    writes: usize,
}

impl OutputSink for CountingSink {
    fn write_document(&mut self, _document: &str) -> Result<(), TierdrawError> {
        self.writes += 1;
        Ok(())
    }
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
    let _builder = DiagramBuilder::new(AppConfig::default());
}

#[test]
fn test_user_and_load_balancer_document() {
    let builder = DiagramBuilder::default();
    let graph = builder.parse(USER_AND_ALB).expect("Failed to parse graph");

    let document = builder
        .render_drawio(&graph)
        .expect("Failed to render graph");

    assert_eq!(document, USER_AND_ALB_DOCUMENT);
}

#[test]
fn test_edge_to_unknown_node_is_dropped() {
    let source = r#"{
        "nodes": [{"id": "user", "label": "User", "type": "user"}],
        "edges": [{"source": "user", "target": "ghost"}]
    }"#;

    let builder = DiagramBuilder::default();
    let graph = builder.parse(source).expect("dangling edges are not fatal");
    let document = builder.render_drawio(&graph).expect("Failed to render");

    assert_eq!(document.matches("vertex=\"1\"").count(), 1);
    assert_eq!(document.matches("edge=\"1\"").count(), 0);
    assert!(!document.contains("ghost"));
}

#[test]
fn test_missing_edge_label_is_empty_value() {
    let source = r#"{
        "nodes": [
            {"id": "web", "label": "Web", "type": "compute-fleet"},
            {"id": "db", "label": "DB", "type": "database"}
        ],
        "edges": [{"source": "web", "target": "db"}]
    }"#;

    let builder = DiagramBuilder::default();
    let graph = builder.parse(source).unwrap();
    let document = builder.render_drawio(&graph).unwrap();

    assert!(document.contains(r#"<mxCell id="4" value="" style="edgeStyle="#));
}

#[test]
fn test_empty_graph_renders_structural_cells_only() {
    let builder = DiagramBuilder::default();
    let graph = builder.parse(r#"{"nodes": []}"#).unwrap();

    let document = builder.render_drawio(&graph).unwrap();

    assert_eq!(document.matches("<mxCell ").count(), 2);
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = DiagramBuilder::default();

    let result = builder.parse("{ this is not json");

    assert!(matches!(result, Err(TierdrawError::Parse { .. })));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let graph = builder.parse(USER_AND_ALB).unwrap();
    let first = builder.render_drawio(&graph).unwrap();

    let other = builder
        .parse(r#"{"nodes": [{"id": "db", "type": "database"}]}"#)
        .unwrap();
    let _ = builder.render_drawio(&other).unwrap();

    let second = builder.render_drawio(&graph).unwrap();
    assert_eq!(first, second, "identifiers must restart for every render");
}

#[test]
fn test_generate_writes_to_sink() {
    let builder = DiagramBuilder::default();
    let mut sink = MemorySink::new();

    builder
        .generate(&JsonSource::new(USER_AND_ALB), &mut sink)
        .expect("Failed to generate");

    assert_eq!(sink.document(), Some(USER_AND_ALB_DOCUMENT));
}

#[test]
fn test_generate_with_failing_source_leaves_sink_untouched() {
    let builder = DiagramBuilder::default();
    let mut sink = CountingSink::default();

    let result = builder.generate(&FailingSource, &mut sink);

    assert!(matches!(result, Err(TierdrawError::Source(_))));
    assert_eq!(sink.writes, 0);
}

#[test]
fn test_generate_wraps_parse_errors_from_source() {
    let builder = DiagramBuilder::default();
    let mut sink = MemorySink::new();

    let err = builder
        .generate(&JsonSource::new(r#"{"nodes": [{"id": ""}]}"#), &mut sink)
        .unwrap_err();

    match err {
        TierdrawError::Source(inner) => {
            assert!(matches!(*inner, TierdrawError::Parse { .. }));
        }
        other => panic!("expected a source error, got {other:?}"),
    }
    assert_eq!(sink.document(), None);
}

#[test]
fn test_generate_writes_exactly_once() {
    let builder = DiagramBuilder::default();
    let mut sink = CountingSink::default();

    builder
        .generate(&JsonSource::new(USER_AND_ALB), &mut sink)
        .unwrap();

    assert_eq!(sink.writes, 1);
}

#[test]
fn test_invalid_layout_config_is_rejected() {
    let config: AppConfig = serde_json::from_str(r#"{"layout": {"vertical_pitch": 0}}"#)
        .expect("config should deserialize");
    let builder = DiagramBuilder::new(config);
    let graph = builder.parse(USER_AND_ALB).unwrap();

    let result = builder.render_drawio(&graph);

    assert!(matches!(result, Err(TierdrawError::Config(_))));
}

//! Integration tests for the Converter API
//!
//! These tests verify that the public API works end to end on in-memory
//! layers.

use rstviz::{
    Converter, RstVizError,
    config::{AppConfig, GraphConfig, HighlightConfig, StyleConfig},
};

const BASE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<base>
  <unit id="u1">Hello world</unit>
  <unit id="u2" alt="A photo"/>
</base>"#;

const RST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rst>
  <segments>
    <segment id="s1" xref="u1"/>
    <segment id="s2" xref="u2"/>
  </segments>
  <rst-structure>
    <span id="sp1" relation="elaboration" nucleus="s1" satellites="s2"/>
  </rst-structure>
</rst>"#;

#[test]
fn test_converter_api_exists() {
    let _converter = Converter::default();
}

#[test]
fn test_round_trip_output() {
    let base = r#"<base><unit id="u1">Hello world</unit></base>"#;
    let rst = r#"<rst>
        <segment id="s1" xref="u1"/>
        <rst-structure>
            <span id="sp1" relation="elaboration" nucleus="s1" satellites=""/>
        </rst-structure>
    </rst>"#;

    let dot = Converter::default().convert(base, rst).expect("Failed to convert");

    assert_eq!(
        dot,
        concat!(
            "digraph \"rst\" {\n",
            "    graph [rankdir=\"BT\"];\n",
            "    \"sp1\" [label=\"ELABORATION\", shape=\"plaintext\", ",
            "fontcolor=\"#4d4d4d\", fontsize=\"10\"];\n",
            "    \"s1\" [label=\"Hello world\", shape=\"box\", style=\"filled\", ",
            "fillcolor=\"#ffffff\", fontsize=\"10\"];\n",
            "    \"s1\" -> \"sp1\" [dir=\"back\"];\n",
            "}\n",
        )
    );
}

#[test]
fn test_highlight_changes_relation_style() {
    let converter = Converter::new(AppConfig::default().with_highlight("ELABORATION"));
    let dot = converter.convert(BASE, RST).expect("Failed to convert");

    assert!(dot.contains(concat!(
        "\"sp1\" [label=\"ELABORATION\", shape=\"plaintext\", ",
        "fontcolor=\"#d62728\", fontsize=\"16\"];"
    )));
}

#[test]
fn test_image_unit_style() {
    let dot = Converter::default().convert(BASE, RST).expect("Failed to convert");

    assert!(dot.contains(concat!(
        "\"s2\" [label=\"A photo\", shape=\"box\", style=\"filled\", ",
        "fillcolor=\"#fbe3b4\", fontsize=\"14\"];"
    )));
    assert!(dot.contains("\"s2\" -> \"sp1\" [dir=\"none\"];"));
}

#[test]
fn test_configured_graph_name() {
    let config = AppConfig::new(
        HighlightConfig::default(),
        StyleConfig::default(),
        GraphConfig::new("poster"),
    );
    let dot = Converter::new(config).convert(BASE, RST).unwrap();

    assert!(dot.starts_with("digraph \"poster\" {\n"));
}

#[test]
fn test_quoted_graph_name_rejected() {
    let config = AppConfig::new(
        HighlightConfig::default(),
        StyleConfig::default(),
        GraphConfig::new("a\"b"),
    );

    let err = Converter::new(config).convert(BASE, RST).unwrap_err();
    assert!(matches!(err, RstVizError::Config(_)), "unexpected error: {err}");
}

#[test]
fn test_output_is_deterministic() {
    let converter = Converter::default();

    let first = converter.convert(BASE, RST).unwrap();
    let second = converter.convert(BASE, RST).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parse_error_carries_failing_layer() {
    let rst = r#"<rst><segment id="s1" xref="missing"/><rst-structure/></rst>"#;

    match Converter::default().parse(BASE, rst) {
        Err(RstVizError::Parse { src, err }) => {
            assert_eq!(src, rst);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_malformed_base_reports_base_source() {
    let base = "<base><unit id=\"u1\">";

    match Converter::default().parse(base, RST) {
        Err(RstVizError::Parse { src, .. }) => assert_eq!(src, base),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_converter_reusability() {
    let converter = Converter::default();

    let document = converter.parse(BASE, RST).expect("Failed to parse");
    let dot = converter.render_dot(&document).expect("Failed to render");
    assert!(dot.ends_with("}\n"));

    let other = r#"<rst><segment id="x" xref="u1"/><rst-structure/></rst>"#;
    let dot = converter.convert(BASE, other).expect("Failed to convert");
    assert!(dot.contains("\"x\" [label=\"Hello world\""));
}

#[cfg(feature = "graphviz")]
mod graphviz {
    use dot_structures::Graph;
    use tempfile::tempdir;

    use rstviz::render;

    use super::*;

    #[test]
    fn test_output_is_valid_dot() {
        let dot = Converter::default().convert(BASE, RST).unwrap();

        let graph = graphviz_rust::parse(&dot).expect("DOT should parse");
        assert!(matches!(graph, Graph::DiGraph { .. }));
    }

    #[test]
    fn test_render_image_when_dot_is_installed() {
        if render::ensure_renderer_available().is_err() {
            eprintln!("dot not installed, skipping");
            return;
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let converter = Converter::default();
        let dot = converter.convert(BASE, RST).unwrap();

        converter.render_image(&dot, &path).expect("Failed to render image");

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }
}

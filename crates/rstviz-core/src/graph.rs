//! DOT graph model and writer.
//!
//! A [`Graph`] is built once from a [`Document`] and a [`Theme`] and written
//! once. Its textual form is:
//!
//! ```text
//! digraph "rst" {
//!     graph [rankdir="BT"];
//!     "sp1" [label="ELABORATION", shape="plaintext", fontcolor="#4d4d4d", fontsize="10"];
//!     "s1" [label="Hello world", shape="box", style="filled", fillcolor="#ffffff", fontsize="10"];
//!     "s1" -> "sp1" [dir="back"];
//! }
//! ```
//!
//! Relation nodes come first, then segment nodes, each group in ascending id
//! order. Edges follow the document order of the spans.

use std::fmt;

use log::{debug, warn};

use crate::{
    semantic::{Document, RelationSpan},
    theme::{Attribute, Theme},
};

/// Name used for the `digraph` when none is configured.
pub const DEFAULT_GRAPH_NAME: &str = "rst";

/// Arrowhead direction of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// `dir="back"`: the arrowhead is drawn at the participant.
    Back,
    /// `dir="none"`: no arrowhead.
    None,
}

impl EdgeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeDirection::Back => "back",
            EdgeDirection::None => "none",
        }
    }
}

/// A node declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    id: String,
    label: String,
    attributes: Vec<Attribute>,
}

impl NodeDecl {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            attributes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// An edge declaration from a participant (or title) to a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    from: String,
    to: String,
    direction: EdgeDirection,
    dashed: bool,
}

impl EdgeDecl {
    /// An edge from a nucleus-like participant.
    pub fn nucleus(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, EdgeDirection::Back, false)
    }

    /// An edge from a satellite-like participant.
    pub fn satellite(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, EdgeDirection::None, false)
    }

    /// An edge from a title cross-reference.
    pub fn title(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, EdgeDirection::None, true)
    }

    fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        direction: EdgeDirection,
        dashed: bool,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
            dashed,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }
}

/// The complete graph description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    nodes: Vec<NodeDecl>,
    edges: Vec<EdgeDecl>,
}

impl Graph {
    /// Builds the graph for `document`, styling nodes with `theme`.
    pub fn from_document(name: impl Into<String>, document: &Document, theme: &Theme) -> Self {
        let mut nodes = Vec::with_capacity(document.segments().len());

        for span in document.sorted_spans() {
            nodes.push(NodeDecl::new(
                span.id(),
                span.label(),
                theme.relation_attributes(span.style()),
            ));
        }

        for segment in document.segments().values() {
            if segment.content().is_empty() {
                warn!(segment = segment.id(), xref = segment.xref(); "Segment has empty content");
            }
            nodes.push(NodeDecl::new(
                segment.id(),
                segment.content(),
                theme.unit_attributes(segment.style()),
            ));
        }

        let edges: Vec<_> = document.spans().flat_map(span_edges).collect();

        debug!(nodes = nodes.len(), edges = edges.len(); "Graph built");

        Self {
            name: name.into(),
            nodes,
            edges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeDecl] {
        &self.edges
    }

    /// Writes the DOT text of this graph to `out`.
    pub fn write_dot<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "digraph \"{}\" {{", self.name)?;
        writeln!(out, "    graph [rankdir=\"BT\"];")?;

        for node in &self.nodes {
            write!(
                out,
                "    \"{}\" [label=\"{}\"",
                node.id,
                encode_line_breaks(&node.label)
            )?;
            for attribute in &node.attributes {
                write!(out, ", {}=\"{}\"", attribute.name(), attribute.value())?;
            }
            writeln!(out, "];")?;
        }

        for edge in &self.edges {
            write!(
                out,
                "    \"{}\" -> \"{}\" [dir=\"{}\"",
                edge.from,
                edge.to,
                edge.direction.as_str()
            )?;
            if edge.dashed {
                write!(out, ", style=\"dashed\"")?;
            }
            writeln!(out, "];")?;
        }

        writeln!(out, "}}")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dot(f)
    }
}

/// Edges contributed by one span: nucleus-like, then satellite-like, then title.
fn span_edges(span: &RelationSpan) -> Vec<EdgeDecl> {
    let kind = span.kind();
    let mut edges: Vec<_> = kind
        .nucleus_like()
        .iter()
        .map(|id| EdgeDecl::nucleus(id.as_str(), span.id()))
        .chain(
            kind.satellite_like()
                .iter()
                .map(|id| EdgeDecl::satellite(id.as_str(), span.id())),
        )
        .collect();

    if let Some(title) = span.title() {
        edges.push(EdgeDecl::title(title, span.id()));
    }

    edges
}

/// Wrapped lines are kept on one physical line with the DOT `\n` escape.
fn encode_line_breaks(label: &str) -> String {
    label.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use indexmap::IndexMap;

    use super::*;
    use crate::semantic::{
        ContentUnit, RelationStyle, Segment, SegmentKind, SpanKind, UnitStyle,
    };

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn document(spans: Vec<RelationSpan>, segments: &[(&str, &str)]) -> Document {
        let mut unit_map = BTreeMap::new();
        let mut segment_map = BTreeMap::new();
        for (segment_id, text) in segments {
            let unit_id = format!("u-{segment_id}");
            let unit = ContentUnit::new(unit_id.clone(), *text, UnitStyle::Text);
            segment_map.insert(
                segment_id.to_string(),
                Segment::resolved(*segment_id, SegmentKind::Segment, &unit),
            );
            unit_map.insert(unit_id, unit);
        }
        let span_map: IndexMap<_, _> = spans
            .into_iter()
            .map(|span| (span.id().to_string(), span))
            .collect();
        Document::new(unit_map, segment_map, span_map)
    }

    fn edge_lines(dot: &str) -> Vec<&str> {
        dot.lines()
            .map(str::trim)
            .filter(|line| line.contains("->"))
            .collect()
    }

    #[test]
    fn test_round_trip_scenario() {
        let span = RelationSpan::new(
            "sp1",
            SpanKind::Span {
                nucleus: ids(&["s1"]),
                satellites: vec![],
            },
            "elaboration",
            RelationStyle::Normal,
        );
        let doc = document(vec![span], &[("s1", "Hello world")]);
        let dot = Graph::from_document(DEFAULT_GRAPH_NAME, &doc, &Theme::default()).to_string();

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
    fn test_span_edges_nucleus_then_satellites() {
        let span = RelationSpan::new(
            "sp",
            SpanKind::Span {
                nucleus: ids(&["A", "B"]),
                satellites: ids(&["C"]),
            },
            "evidence",
            RelationStyle::Normal,
        );
        let doc = document(vec![span], &[]);
        let dot = Graph::from_document("g", &doc, &Theme::default()).to_string();

        assert_eq!(
            edge_lines(&dot),
            vec![
                "\"A\" -> \"sp\" [dir=\"back\"];",
                "\"B\" -> \"sp\" [dir=\"back\"];",
                "\"C\" -> \"sp\" [dir=\"none\"];",
            ]
        );
    }

    #[test]
    fn test_multi_span_edges_are_back() {
        let span = RelationSpan::new(
            "ms",
            SpanKind::MultiSpan {
                nuclei: ids(&["n1", "n2", "n3"]),
            },
            "joint",
            RelationStyle::Normal,
        );
        let graph = Graph::from_document("g", &document(vec![span], &[]), &Theme::default());

        assert_eq!(graph.edges().len(), 3);
        assert!(
            graph
                .edges()
                .iter()
                .all(|edge| edge.direction() == EdgeDirection::Back && !edge.is_dashed())
        );
    }

    #[test]
    fn test_mini_span_edges() {
        let span = RelationSpan::new(
            "mini",
            SpanKind::MiniSpan {
                attribuend: ids(&["m1"]),
                attribute: ids(&["m2"]),
            },
            "identification",
            RelationStyle::Normal,
        );
        let dot = Graph::from_document("g", &document(vec![span], &[]), &Theme::default())
            .to_string();

        assert_eq!(
            edge_lines(&dot),
            vec![
                "\"m1\" -> \"mini\" [dir=\"back\"];",
                "\"m2\" -> \"mini\" [dir=\"none\"];",
            ]
        );
    }

    #[test]
    fn test_title_edge_for_every_kind() {
        let kinds = [
            SpanKind::Span {
                nucleus: ids(&["a"]),
                satellites: vec![],
            },
            SpanKind::MultiSpan { nuclei: ids(&["a"]) },
            SpanKind::MiniSpan {
                attribuend: ids(&["a"]),
                attribute: vec![],
            },
        ];

        for kind in kinds {
            let tag = kind.tag_name();
            let span = RelationSpan::new("t", kind, "joint", RelationStyle::Normal).with_title("T");
            let dot = Graph::from_document("g", &document(vec![span], &[]), &Theme::default())
                .to_string();

            assert_eq!(
                edge_lines(&dot).last().copied(),
                Some("\"T\" -> \"t\" [dir=\"none\", style=\"dashed\"];"),
                "missing title edge for {tag}"
            );
        }
    }

    #[test]
    fn test_node_order_spans_then_segments_sorted() {
        let spans = ["sp2", "sp1"]
            .into_iter()
            .map(|id| {
                RelationSpan::new(
                    id,
                    SpanKind::MultiSpan { nuclei: vec![] },
                    "joint",
                    RelationStyle::Normal,
                )
            })
            .collect();
        let doc = document(spans, &[("s2", "two"), ("s1", "one")]);
        let graph = Graph::from_document("g", &doc, &Theme::default());

        let order: Vec<_> = graph.nodes().iter().map(NodeDecl::id).collect();
        assert_eq!(order, vec!["sp1", "sp2", "s1", "s2"]);
    }

    #[test]
    fn test_edges_follow_document_order() {
        let spans = vec![
            RelationSpan::new(
                "z",
                SpanKind::MultiSpan {
                    nuclei: ids(&["s1"]),
                },
                "joint",
                RelationStyle::Normal,
            ),
            RelationSpan::new(
                "a",
                SpanKind::MultiSpan {
                    nuclei: ids(&["s2"]),
                },
                "joint",
                RelationStyle::Normal,
            ),
        ];
        let graph = Graph::from_document("g", &document(spans, &[]), &Theme::default());

        let targets: Vec<_> = graph.edges().iter().map(EdgeDecl::to).collect();
        assert_eq!(targets, vec!["z", "a"]);
    }

    #[test]
    fn test_highlighted_relation_uses_highlight_style() {
        let span = RelationSpan::new(
            "sp",
            SpanKind::MultiSpan { nuclei: vec![] },
            "joint",
            RelationStyle::Highlighted,
        );
        let dot = Graph::from_document("g", &document(vec![span], &[]), &Theme::default())
            .to_string();

        assert!(dot.contains(
            "\"sp\" [label=\"JOINT\", shape=\"plaintext\", fontcolor=\"#d62728\", fontsize=\"16\"];"
        ));
    }

    #[test]
    fn test_wrapped_label_stays_on_one_line() {
        let doc = document(vec![], &[("s1", "first line\nsecond line")]);
        let dot = Graph::from_document("g", &doc, &Theme::default()).to_string();

        assert!(dot.contains("[label=\"first line\\nsecond line\""));
        assert_eq!(dot.lines().count(), 4);
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let span = RelationSpan::new(
                "sp",
                SpanKind::Span {
                    nucleus: ids(&["s1"]),
                    satellites: ids(&["s2"]),
                },
                "background",
                RelationStyle::Normal,
            )
            .with_title("s3");
            let doc = document(vec![span], &[("s1", "one"), ("s2", "two"), ("s3", "three")]);
            Graph::from_document("g", &doc, &Theme::default()).to_string()
        };

        assert_eq!(build(), build());
    }
}

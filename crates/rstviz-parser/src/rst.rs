//! RST layer reader.
//!
//! Reads `segment` and `mini-segment` elements anywhere in the document and
//! resolves each against the unit table, then reads every span-like child of
//! the `rst-structure` element in document order.

use std::collections::HashMap;

use log::{debug, info, trace};
use roxmltree::{Document, Node};

use rstviz_core::semantic::{
    RelationSpan, RelationStyle, Segment, SegmentKind, SegmentTable, SpanKind, SpanTable,
    UnitTable,
};

use crate::{
    config::IngestConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result, SourceKind},
    span::Span,
    xml,
};

const STRUCTURE_TAG: &str = "rst-structure";
const TITLE_TAG: &str = "title";

/// The three span-like elements of the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanTag {
    Span,
    MultiSpan,
    MiniSpan,
}

impl SpanTag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "span" => Some(SpanTag::Span),
            "multi-span" => Some(SpanTag::MultiSpan),
            "mini-span" => Some(SpanTag::MiniSpan),
            _ => None,
        }
    }
}

fn segment_kind(name: &str) -> Option<SegmentKind> {
    match name {
        "segment" => Some(SegmentKind::Segment),
        "mini-segment" => Some(SegmentKind::MiniSegment),
        _ => None,
    }
}

/// A `title` cross-reference, resolved against the unit table.
struct TitleRef<'a> {
    span_id: &'a str,
    xref: &'a str,
    at: Span,
}

/// One successfully read span-like element.
struct SpanRead<'a> {
    id: &'a str,
    span: RelationSpan,
    title: Option<TitleRef<'a>>,
}

/// Reads segments and relation spans of a parsed RST layer.
pub(crate) fn read_rst(
    doc: &Document<'_>,
    units: &UnitTable,
    config: &IngestConfig,
) -> std::result::Result<(SegmentTable, SpanTable), ParseError> {
    info!(highlight = config.highlight(); "Reading RST layer");

    let mut collector = DiagnosticCollector::new(SourceKind::Rst);
    let segments = read_segments(doc, units, &mut collector);

    let spans = match doc.descendants().find(|n| n.has_tag_name(STRUCTURE_TAG)) {
        Some(root) => read_spans(root, units, &segments, config, &mut collector),
        None => {
            collector.emit(
                Diagnostic::error(format!("the RST layer has no `{STRUCTURE_TAG}` element"))
                    .with_code(ErrorCode::E100)
                    .with_label(xml::tag_span(doc.root_element()), "document root")
                    .with_help(format!(
                        "wrap the span, multi-span and mini-span elements in `<{STRUCTURE_TAG}>`"
                    )),
            );
            SpanTable::new()
        }
    };

    collector.finish()?;

    debug!(segments = segments.len(), spans = spans.len(); "RST layer read");
    Ok((segments, spans))
}

fn read_segments(
    doc: &Document<'_>,
    units: &UnitTable,
    collector: &mut DiagnosticCollector,
) -> SegmentTable {
    let mut segments = SegmentTable::new();
    let mut first_seen: HashMap<&str, Span> = HashMap::new();

    for node in doc.descendants().filter(Node::is_element) {
        let Some(kind) = segment_kind(node.tag_name().name()) else {
            continue;
        };

        let (id, xref) = match (
            xml::required_attribute(node, "id"),
            xml::required_attribute(node, "xref"),
        ) {
            (Ok(id), Ok(xref)) => (id, xref),
            (Err(diag), _) | (_, Err(diag)) => {
                collector.emit(diag);
                continue;
            }
        };

        let at = xml::tag_span(node);
        if let Some(first) = first_seen.get(id) {
            collector.emit(duplicate_id(kind.tag_name(), id, at, *first));
            continue;
        }
        first_seen.insert(id, at);

        match units.get(xref) {
            Some(unit) => {
                trace!(segment = id, xref = xref; "Segment resolved");
                segments.insert(id.to_string(), Segment::resolved(id, kind, unit));
            }
            None => collector.emit(
                Diagnostic::error(format!(
                    "{} `{id}` references unknown unit `{xref}`",
                    kind.tag_name()
                ))
                .with_code(ErrorCode::E200)
                .with_label(at, "not found in the base layer")
                .with_help("check the `xref` against the unit ids of the base layer"),
            ),
        }
    }

    segments
}

fn read_spans(
    root: Node<'_, '_>,
    units: &UnitTable,
    segments: &SegmentTable,
    config: &IngestConfig,
    collector: &mut DiagnosticCollector,
) -> SpanTable {
    let mut spans = SpanTable::new();
    let mut first_seen: HashMap<&str, Span> = HashMap::new();

    for node in root.children().filter(Node::is_element) {
        let Some(tag) = SpanTag::from_name(node.tag_name().name()) else {
            debug!(tag = node.tag_name().name(); "Skipping non-span element in structure");
            continue;
        };

        let SpanRead { id, span, title } = match read_span(node, tag, config) {
            Ok(read) => read,
            Err(diag) => {
                collector.emit(diag);
                continue;
            }
        };

        let at = xml::tag_span(node);
        if let Some(first) = first_seen.get(id) {
            collector.emit(duplicate_id(span.kind().tag_name(), id, at, *first));
            continue;
        }
        first_seen.insert(id, at);

        if let Some(title) = title {
            check_title(&title, units, collector);
        }

        trace!(span = id, kind = span.kind().tag_name(), style:? = span.style(); "Span read");
        spans.insert(id.to_string(), span);
    }

    for span in spans.values() {
        for participant in span.kind().participants() {
            if !segments.contains_key(participant) && !spans.contains_key(participant) {
                let at = first_seen.get(span.id()).copied().unwrap_or_default();
                collector.emit(
                    Diagnostic::warning(format!(
                        "`{}` lists `{participant}`, which is neither a segment nor a span",
                        span.id()
                    ))
                    .with_label(at, "dangling participant"),
                );
            }
        }
    }

    spans
}

fn check_title(title: &TitleRef<'_>, units: &UnitTable, collector: &mut DiagnosticCollector) {
    if units.contains_key(title.xref) {
        return;
    }

    collector.emit(
        Diagnostic::error(format!(
            "title of `{}` references unknown unit `{}`",
            title.span_id, title.xref
        ))
        .with_code(ErrorCode::E201)
        .with_label(title.at, "not found in the base layer")
        .with_help("check the title `xref` against the unit ids of the base layer"),
    );
}

fn read_span<'a>(
    node: Node<'a, '_>,
    tag: SpanTag,
    config: &IngestConfig,
) -> Result<SpanRead<'a>> {
    let id = xml::required_attribute(node, "id")?;
    let relation = xml::required_attribute(node, "relation")?;
    let roles = |name: &str| xml::required_attribute(node, name).map(xml::id_list);

    let kind = match tag {
        SpanTag::Span => SpanKind::Span {
            nucleus: roles("nucleus")?,
            satellites: roles("satellites")?,
        },
        SpanTag::MultiSpan => SpanKind::MultiSpan {
            nuclei: roles("nuclei")?,
        },
        SpanTag::MiniSpan => SpanKind::MiniSpan {
            attribuend: roles("attribuend")?,
            attribute: roles("attribute")?,
        },
    };

    let style = RelationStyle::classify(relation, config.highlight());
    let mut span = RelationSpan::new(id, kind, relation, style);

    let title = match node.children().find(|child| child.has_tag_name(TITLE_TAG)) {
        Some(title_node) => {
            let xref = xml::required_attribute(title_node, "xref")?;
            span = span.with_title(xref);
            Some(TitleRef {
                span_id: id,
                xref,
                at: xml::tag_span(title_node),
            })
        }
        None => None,
    };

    Ok(SpanRead { id, span, title })
}

fn duplicate_id(tag: &str, id: &str, at: Span, first: Span) -> Diagnostic {
    Diagnostic::error(format!("{tag} id `{id}` is used more than once"))
        .with_code(ErrorCode::E202)
        .with_label(at, "duplicate id")
        .with_secondary_label(first, "first used here")
}

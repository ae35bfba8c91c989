//! Semantic model for an RST-annotated multimodal document.
//!
//! The model is produced once by the parser and read by the graph writer:
//!
//! - [`ContentUnit`] - a base-layer unit with its display content
//! - [`Segment`] - an RST-layer segment resolved against a content unit
//! - [`RelationSpan`] - a rhetorical relation over segments or other spans
//! - [`Document`] - the three lookup tables of one conversion

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Content units keyed by id.
pub type UnitTable = BTreeMap<String, ContentUnit>;

/// Segments and mini-segments keyed by id.
pub type SegmentTable = BTreeMap<String, Segment>;

/// Relation spans keyed by id, in document order.
pub type SpanTable = IndexMap<String, RelationSpan>;

/// Visual style of a content unit, decided by how its content was extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitStyle {
    /// Content taken from an `alt` attribute: an embedded visual element.
    Image,
    /// Word-wrapped plain text.
    Text,
}

/// A primitive unit of the base layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUnit {
    id: String,
    content: String,
    style: UnitStyle,
}

impl ContentUnit {
    /// Creates a unit with already formatted display content.
    pub fn new(id: impl Into<String>, content: impl Into<String>, style: UnitStyle) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display content; wrapped lines are separated by `'\n'`.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> UnitStyle {
        self.style
    }
}

/// Source tag a segment was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Segment,
    MiniSegment,
}

impl SegmentKind {
    /// The XML tag name for this kind.
    pub fn tag_name(self) -> &'static str {
        match self {
            SegmentKind::Segment => "segment",
            SegmentKind::MiniSegment => "mini-segment",
        }
    }
}

/// An RST-layer segment, resolved to the content of the unit it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: String,
    kind: SegmentKind,
    xref: String,
    content: String,
    style: UnitStyle,
}

impl Segment {
    /// Creates a segment that displays the content of `unit`.
    pub fn resolved(id: impl Into<String>, kind: SegmentKind, unit: &ContentUnit) -> Self {
        Self {
            id: id.into(),
            kind,
            xref: unit.id().to_string(),
            content: unit.content().to_string(),
            style: unit.style(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Id of the referenced content unit.
    pub fn xref(&self) -> &str {
        &self.xref
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> UnitStyle {
        self.style
    }
}

/// Visual style of a relation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationStyle {
    Highlighted,
    Normal,
}

impl RelationStyle {
    /// Classifies `relation` against the highlight `target`.
    ///
    /// The comparison is case-insensitive and an empty target highlights
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rstviz_core::semantic::RelationStyle;
    ///
    /// assert_eq!(
    ///     RelationStyle::classify("Elaboration", "elaboration"),
    ///     RelationStyle::Highlighted
    /// );
    /// assert_eq!(
    ///     RelationStyle::classify("elaboration", ""),
    ///     RelationStyle::Normal
    /// );
    /// ```
    pub fn classify(relation: &str, target: &str) -> Self {
        let target = target.trim();
        if !target.is_empty() && relation.to_lowercase() == target.to_lowercase() {
            RelationStyle::Highlighted
        } else {
            RelationStyle::Normal
        }
    }
}

/// Structural kind of a relation span and its participant role lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// A nucleus-satellite relation.
    Span {
        nucleus: Vec<String>,
        satellites: Vec<String>,
    },
    /// A multinuclear relation.
    MultiSpan { nuclei: Vec<String> },
    /// An attribution relation inside a segment.
    MiniSpan {
        attribuend: Vec<String>,
        attribute: Vec<String>,
    },
}

impl SpanKind {
    /// The XML tag name for this kind.
    pub fn tag_name(&self) -> &'static str {
        match self {
            SpanKind::Span { .. } => "span",
            SpanKind::MultiSpan { .. } => "multi-span",
            SpanKind::MiniSpan { .. } => "mini-span",
        }
    }

    /// Participants drawn with a back-directed edge.
    pub fn nucleus_like(&self) -> &[String] {
        match self {
            SpanKind::Span { nucleus, .. } => nucleus,
            SpanKind::MultiSpan { nuclei } => nuclei,
            SpanKind::MiniSpan { attribuend, .. } => attribuend,
        }
    }

    /// Participants drawn with an undirected edge.
    pub fn satellite_like(&self) -> &[String] {
        match self {
            SpanKind::Span { satellites, .. } => satellites,
            SpanKind::MultiSpan { .. } => &[],
            SpanKind::MiniSpan { attribute, .. } => attribute,
        }
    }

    /// All participants, nucleus-like first.
    pub fn participants(&self) -> impl Iterator<Item = &String> {
        self.nucleus_like().iter().chain(self.satellite_like())
    }
}

/// A rhetorical relation node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSpan {
    id: String,
    kind: SpanKind,
    relation: String,
    style: RelationStyle,
    title: Option<String>,
}

impl RelationSpan {
    pub fn new(
        id: impl Into<String>,
        kind: SpanKind,
        relation: impl Into<String>,
        style: RelationStyle,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            relation: relation.into(),
            style,
            title: None,
        }
    }

    /// Attaches the cross-reference of a `title` child.
    pub fn with_title(mut self, xref: impl Into<String>) -> Self {
        self.title = Some(xref.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &SpanKind {
        &self.kind
    }

    /// The relation attribute as written in the source.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Display label: the relation in upper case.
    pub fn label(&self) -> String {
        self.relation.to_uppercase()
    }

    pub fn style(&self) -> RelationStyle {
        self.style
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// The lookup tables built by one conversion.
///
/// Units and segments are keyed and ordered by id. Spans keep the order in
/// which they appear under the RST structure root, which is the order edges
/// are emitted in.
#[derive(Debug, Clone, Default)]
pub struct Document {
    units: UnitTable,
    segments: SegmentTable,
    spans: SpanTable,
}

impl Document {
    pub fn new(units: UnitTable, segments: SegmentTable, spans: SpanTable) -> Self {
        Self {
            units,
            segments,
            spans,
        }
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn segments(&self) -> &SegmentTable {
        &self.segments
    }

    /// Spans in document order.
    pub fn spans(&self) -> impl Iterator<Item = &RelationSpan> {
        self.spans.values()
    }

    /// Spans in ascending id order.
    pub fn sorted_spans(&self) -> Vec<&RelationSpan> {
        let mut spans: Vec<_> = self.spans.values().collect();
        spans.sort_by(|a, b| a.id().cmp(b.id()));
        spans
    }

    pub fn span(&self, id: &str) -> Option<&RelationSpan> {
        self.spans.get(id)
    }

    /// Returns `true` if `id` names a node of the output graph.
    pub fn has_node(&self, id: &str) -> bool {
        self.segments.contains_key(id) || self.spans.contains_key(id)
    }
}

//! Helpers shared by the base-layer and RST-layer readers.

use roxmltree::{Document, Node, ParsingOptions, TextPos};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result, SourceKind},
    span::Span,
};

/// Parses `source` into an XML tree.
///
/// Both layers are commonly exported with a DOCTYPE, so DTDs are accepted.
pub(crate) fn parse_document(
    source: &str,
    kind: SourceKind,
) -> std::result::Result<Document<'_>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(source, options).map_err(|err| {
        let offset = text_pos_offset(source, err.pos());
        let width = source[offset..].chars().next().map_or(0, char::len_utf8);
        let diagnostic = Diagnostic::error(format!("malformed XML: {err}"))
            .with_code(ErrorCode::E001)
            .with_label(Span::new(offset..offset + width), "parsing stopped here");
        ParseError::single(kind, diagnostic)
    })
}

/// The span of the start tag of `node`, which keeps labels on elements with
/// large bodies readable.
pub(crate) fn tag_span(node: Node<'_, '_>) -> Span {
    let range = node.range();
    let source = node.document().input_text();
    let end = source[range.start..range.end]
        .find('>')
        .map_or(range.end, |index| range.start + index + 1);
    Span::new(range.start..end)
}

/// Returns the value of attribute `name`, or an `E101` diagnostic.
pub(crate) fn required_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| {
        let tag = node.tag_name().name();
        let message = match node.attribute("id") {
            Some(id) => format!("`{tag}` element `{id}` has no `{name}` attribute"),
            None => format!("`{tag}` element has no `{name}` attribute"),
        };
        Diagnostic::error(message)
            .with_code(ErrorCode::E101)
            .with_label(tag_span(node), format!("missing `{name}`"))
            .with_help(format!("add a `{name}` attribute to this element"))
    })
}

/// Splits a whitespace-separated id list.
pub(crate) fn id_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Converts a 1-based row/column position into a byte offset.
fn text_pos_offset(source: &str, pos: TextPos) -> usize {
    let row = (pos.row as usize).max(1);
    let col = (pos.col as usize).max(1);

    let line_start: usize = source
        .split_inclusive('\n')
        .take(row - 1)
        .map(str::len)
        .sum();

    source[line_start..]
        .char_indices()
        .nth(col - 1)
        .map_or(source.len(), |(index, _)| line_start + index)
}

//! Base layer reader.
//!
//! Every `unit` element of the document, nested or not, becomes a
//! [`ContentUnit`]. Its display content is chosen by the first rule that
//! applies:
//!
//! 1. an `alt` attribute: the attribute text, as an image node;
//! 2. child elements: the unit's leading text, then per child either its
//!    `alt` text in parentheses or its own text, each followed by the child's
//!    tail text; wrapped and quote-substituted;
//! 3. otherwise all descendant text, wrapped and quote-substituted.

use std::collections::HashMap;

use log::{debug, info, trace};
use roxmltree::{Document, Node};

use rstviz_core::{
    semantic::{ContentUnit, UnitStyle, UnitTable},
    text,
};

use crate::{
    config::IngestConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, SourceKind},
    span::Span,
    xml,
};

const UNIT_TAG: &str = "unit";
const ALT_ATTRIBUTE: &str = "alt";

/// Reads all content units of a parsed base layer.
pub(crate) fn read_units(
    doc: &Document<'_>,
    config: &IngestConfig,
) -> Result<UnitTable, ParseError> {
    info!("Reading base layer");

    let mut collector = DiagnosticCollector::new(SourceKind::Base);
    let mut units = UnitTable::new();
    let mut first_seen: HashMap<&str, Span> = HashMap::new();

    for node in doc.descendants().filter(|n| n.has_tag_name(UNIT_TAG)) {
        let id = match xml::required_attribute(node, "id") {
            Ok(id) => id,
            Err(diag) => {
                collector.emit(diag);
                continue;
            }
        };

        if let Some(first) = first_seen.get(id) {
            collector.emit(
                Diagnostic::error(format!("unit `{id}` is defined more than once"))
                    .with_code(ErrorCode::E202)
                    .with_label(xml::tag_span(node), "duplicate unit")
                    .with_secondary_label(*first, "first defined here"),
            );
            continue;
        }
        first_seen.insert(id, xml::tag_span(node));

        let unit = extract_unit(node, id, config.wrap_width());
        trace!(unit = id, style:? = unit.style(), content = unit.content(); "Unit read");
        units.insert(id.to_string(), unit);
    }

    collector.finish()?;

    debug!(units = units.len(); "Base layer read");
    Ok(units)
}

fn extract_unit(node: Node<'_, '_>, id: &str, width: usize) -> ContentUnit {
    if let Some(alt) = node.attribute(ALT_ATTRIBUTE) {
        return ContentUnit::new(id, text::substitute_quotes(alt), UnitStyle::Image);
    }

    let raw = if node.children().any(|child| child.is_element()) {
        mixed_content(node)
    } else {
        descendant_text(node)
    };

    ContentUnit::new(id, text::format_label(&raw, width), UnitStyle::Text)
}

fn mixed_content(node: Node<'_, '_>) -> String {
    let mut content = String::from(node.text().unwrap_or_default());

    for child in node.children().filter(Node::is_element) {
        match child.attribute(ALT_ATTRIBUTE) {
            Some(alt) => {
                content.push('(');
                content.push_str(alt);
                content.push(')');
            }
            None => content.push_str(child.text().unwrap_or_default()),
        }
        content.push_str(child.tail().unwrap_or_default());
    }

    content
}

fn descendant_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

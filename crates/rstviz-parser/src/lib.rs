//! # rstviz Parser
//!
//! Reads the two XML layers of an RST-annotated multimodal document into
//! the [`rstviz_core::semantic`] model.
//!
//! ## Usage
//!
//! ```
//! # use rstviz_parser::{parse, IngestConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let base = r#"<base><unit id="u1">Hello world</unit></base>"#;
//!     let rst = r#"
//!         <rst>
//!             <segment id="s1" xref="u1"/>
//!             <rst-structure>
//!                 <span id="sp1" relation="elaboration" nucleus="s1" satellites=""/>
//!             </rst-structure>
//!         </rst>
//!     "#;
//!
//!     let document = parse(base, rst, &IngestConfig::default())?;
//!     assert_eq!(document.segments()["s1"].content(), "Hello world");
//!     Ok(())
//! }
//! ```

mod base;
mod config;
pub mod error;
mod rst;
mod span;
mod xml;

pub use config::IngestConfig;
pub use span::Span;

use log::info;

use rstviz_core::semantic::{Document, SegmentTable, SpanTable, UnitTable};

use error::ParseError;

/// Parse both layers into a [`Document`].
///
/// This is the main entry point of the crate. It runs the whole ingestion:
///
/// 1. **Base layer** - parse the XML and build the unit table
/// 2. **RST layer** - parse the XML, resolve segments against the units,
///    and read the relation structure
///
/// # Arguments
///
/// * `base_source` - XML text of the base layer
/// * `rst_source` - XML text of the RST layer
/// * `config` - Highlight target and wrap width
///
/// # Errors
///
/// Returns a [`ParseError`] for the first layer that fails. All diagnostics
/// of that layer are included; their spans point into the layer named by
/// [`ParseError::source_kind`].
pub fn parse(
    base_source: &str,
    rst_source: &str,
    config: &IngestConfig,
) -> Result<Document, ParseError> {
    let units = parse_base(base_source, config)?;
    let (segments, spans) = parse_rst(rst_source, &units, config)?;

    info!(
        units = units.len(),
        segments = segments.len(),
        spans = spans.len();
        "Document parsed"
    );

    Ok(Document::new(units, segments, spans))
}

/// Parse the base layer into its unit table.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed XML, units without an id, or
/// duplicate unit ids.
pub fn parse_base(source: &str, config: &IngestConfig) -> Result<UnitTable, ParseError> {
    let doc = xml::parse_document(source, error::SourceKind::Base)?;
    base::read_units(&doc, config)
}

/// Parse the RST layer against an already read unit table.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed XML, a missing structure root,
/// missing attributes, unresolved references, or duplicate ids.
pub fn parse_rst(
    source: &str,
    units: &UnitTable,
    config: &IngestConfig,
) -> Result<(SegmentTable, SpanTable), ParseError> {
    let doc = xml::parse_document(source, error::SourceKind::Rst)?;
    rst::read_rst(&doc, units, config)
}

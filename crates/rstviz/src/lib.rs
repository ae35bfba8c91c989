//! rstviz - Convert RST-annotated multimodal documents into Graphviz graphs.
//!
//! A document is described by two XML layers: the base layer holds the
//! content units, and the RST layer groups them into segments and relates
//! those through spans. [`Converter`] reads both layers and emits a DOT
//! digraph drawn bottom-to-top, with relation names as plain-text nodes and
//! segments as filled boxes.

pub mod config;
pub mod export;
#[cfg(feature = "graphviz")]
pub mod render;

mod error;

pub use rstviz_core::{color, graph, semantic, text, theme};

pub use error::RstVizError;

use log::{debug, info, trace};

use rstviz_parser::{IngestConfig, error::SourceKind};

use config::AppConfig;
use graph::Graph;
use semantic::Document;

/// Converter from the two XML layers to DOT text.
///
/// # Examples
///
/// ```rust
/// use rstviz::{Converter, config::AppConfig};
///
/// let base = r#"<base><unit id="u1">Hello world</unit></base>"#;
/// let rst = r#"<rst>
///     <segment id="s1" xref="u1"/>
///     <rst-structure>
///         <span id="sp1" relation="elaboration" nucleus="s1" satellites=""/>
///     </rst-structure>
/// </rst>"#;
///
/// let converter = Converter::new(AppConfig::default().with_highlight("elaboration"));
///
/// // Parse both layers to the semantic model
/// let document = converter.parse(base, rst).expect("Failed to parse");
///
/// // Emit DOT text
/// let dot = converter.render_dot(&document).expect("Failed to render");
/// assert!(dot.starts_with("digraph \"rst\" {"));
///
/// // Or in one step
/// assert_eq!(converter.convert(base, rst).unwrap(), dot);
/// ```
#[derive(Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Highlight, style and graph settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this converter was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse both layers into a semantic document.
    ///
    /// Segments are resolved against the base layer's units and every
    /// relation is classified against the configured highlight.
    ///
    /// # Errors
    ///
    /// Returns `RstVizError::Parse` carrying the text of the layer the
    /// diagnostics point into.
    pub fn parse(&self, base_source: &str, rst_source: &str) -> Result<Document, RstVizError> {
        info!(highlight = self.config.highlight().relation(); "Parsing document");

        let ingest = IngestConfig::new(self.config.highlight().relation())
            .with_wrap_width(self.config.style().wrap_width());

        let document = rstviz_parser::parse(base_source, rst_source, &ingest).map_err(|err| {
            let src = match err.source_kind() {
                SourceKind::Base => base_source,
                SourceKind::Rst => rst_source,
            };
            RstVizError::new_parse_error(err, src)
        })?;

        debug!("Document parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Render a semantic document to DOT text.
    ///
    /// # Errors
    ///
    /// Returns `RstVizError::Config` if the style section holds an invalid
    /// color or the graph name cannot be quoted.
    pub fn render_dot(&self, document: &Document) -> Result<String, RstVizError> {
        let theme = self.config.style().theme().map_err(RstVizError::Config)?;
        self.config.graph().validate().map_err(RstVizError::Config)?;

        let graph = Graph::from_document(self.config.graph().name(), document, &theme);
        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Emitting DOT"
        );

        Ok(graph.to_string())
    }

    /// Parse both layers and render the result to DOT text.
    ///
    /// # Errors
    ///
    /// See [`Converter::parse`] and [`Converter::render_dot`].
    pub fn convert(&self, base_source: &str, rst_source: &str) -> Result<String, RstVizError> {
        let document = self.parse(base_source, rst_source)?;
        self.render_dot(&document)
    }

    /// Render DOT text to an image with Graphviz.
    ///
    /// The format is taken from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns `RstVizError::RendererUnavailable` if `dot` cannot be run,
    /// and `RstVizError::Render` if it rejects the graph.
    #[cfg(feature = "graphviz")]
    pub fn render_image(
        &self,
        dot: &str,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), RstVizError> {
        render::ensure_renderer_available()?;
        render::render(dot, path.as_ref())
    }
}

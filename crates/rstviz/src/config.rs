//! Configuration types for rstviz conversion.
//!
//! This module provides configuration structures that control which relation
//! is highlighted, how nodes are styled, and how the emitted graph is named.
//! All types implement [`serde::Deserialize`] for loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`HighlightConfig`] - The relation drawn in the highlight style.
//! - [`StyleConfig`] - Colors, font sizes and the label wrap width.
//! - [`GraphConfig`] - Properties of the emitted digraph.
//!
//! # Example
//!
//! ```
//! # use rstviz::config::AppConfig;
//! let config = AppConfig::default().with_highlight("elaboration");
//! assert_eq!(config.highlight().relation(), "elaboration");
//! assert!(config.style().theme().is_ok());
//! ```

use serde::Deserialize;

use rstviz_core::{color::Color, graph::DEFAULT_GRAPH_NAME, text::DEFAULT_WRAP_WIDTH, theme::Theme};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Highlight configuration section.
    #[serde(default)]
    highlight: HighlightConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Graph configuration section.
    #[serde(default)]
    graph: GraphConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(highlight: HighlightConfig, style: StyleConfig, graph: GraphConfig) -> Self {
        Self {
            highlight,
            style,
            graph,
        }
    }

    /// Replaces the highlighted relation, as a command-line override does.
    pub fn with_highlight(mut self, relation: impl Into<String>) -> Self {
        self.highlight.relation = relation.into();
        self
    }

    /// Returns the highlight configuration.
    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

/// The relation that is drawn in the highlight style.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HighlightConfig {
    /// Relation name, compared case-insensitively. Empty highlights nothing.
    #[serde(default)]
    relation: String,
}

impl HighlightConfig {
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

/// Visual styling of the emitted nodes.
///
/// Fields that are not set fall back to the [`Theme`] defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    image_fill_color: Option<String>,
    #[serde(default)]
    text_fill_color: Option<String>,
    #[serde(default)]
    highlight_font_color: Option<String>,
    #[serde(default)]
    normal_font_color: Option<String>,
    #[serde(default)]
    image_font_size: Option<u32>,
    #[serde(default)]
    text_font_size: Option<u32>,
    #[serde(default)]
    highlight_font_size: Option<u32>,
    #[serde(default)]
    normal_font_size: Option<u32>,

    /// Column width text units are wrapped to.
    #[serde(default)]
    wrap_width: Option<usize>,
}

impl StyleConfig {
    /// Builds the [`Theme`] described by this section.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed into
    /// a valid [`Color`].
    pub fn theme(&self) -> Result<Theme, String> {
        let mut theme = Theme::default();

        if let Some(color) = parse_color("image_fill_color", &self.image_fill_color)? {
            theme = theme.with_image_fill_color(color);
        }
        if let Some(color) = parse_color("text_fill_color", &self.text_fill_color)? {
            theme = theme.with_text_fill_color(color);
        }
        if let Some(color) = parse_color("highlight_font_color", &self.highlight_font_color)? {
            theme = theme.with_highlight_font_color(color);
        }
        if let Some(color) = parse_color("normal_font_color", &self.normal_font_color)? {
            theme = theme.with_normal_font_color(color);
        }

        if let Some(size) = self.image_font_size {
            theme = theme.with_image_font_size(size);
        }
        if let Some(size) = self.text_font_size {
            theme = theme.with_text_font_size(size);
        }
        if let Some(size) = self.highlight_font_size {
            theme = theme.with_highlight_font_size(size);
        }
        if let Some(size) = self.normal_font_size {
            theme = theme.with_normal_font_size(size);
        }

        Ok(theme)
    }

    /// Returns the label wrap width, never less than one column.
    pub fn wrap_width(&self) -> usize {
        self.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH).max(1)
    }
}

fn parse_color(field: &str, value: &Option<String>) -> Result<Option<Color>, String> {
    value
        .as_deref()
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Properties of the emitted digraph.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    name: Option<String>,
}

impl GraphConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the digraph name, `rst` unless configured.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_GRAPH_NAME)
    }

    /// Checks that the name can be written inside a quoted DOT id.
    ///
    /// # Errors
    ///
    /// Returns a message naming the field when the name contains a double
    /// quote or a backslash.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name();
        if name.contains(['"', '\\']) {
            return Err(format!(
                "Invalid graph name in config: {name:?} contains a quote or backslash"
            ));
        }
        Ok(())
    }
}

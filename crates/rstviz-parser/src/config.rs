//! Options for reading the two input layers.

use rstviz_core::text::DEFAULT_WRAP_WIDTH;

/// Configuration passed into every ingestion entry point.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    highlight: String,
    wrap_width: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            highlight: String::new(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl IngestConfig {
    /// Creates a configuration that highlights `relation`.
    ///
    /// An empty relation highlights nothing.
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            highlight: relation.into(),
            ..Self::default()
        }
    }

    /// Sets the column width text units are wrapped to.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// The relation to highlight, as configured.
    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }
}

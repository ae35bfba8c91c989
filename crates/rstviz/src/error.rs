//! Error types for rstviz operations.
//!
//! This module provides the main error type [`RstVizError`] which wraps
//! the error conditions of a conversion run.

use std::io;

use thiserror::Error;

use rstviz_parser::error::ParseError;

/// The main error type for rstviz operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the text of the layer its diagnostics point
/// into, so spans can be rendered against the offending XML.
#[derive(Debug, Error)]
pub enum RstVizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Graphviz renderer `{0}` is not available on PATH")]
    RendererUnavailable(String),
}

impl RstVizError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

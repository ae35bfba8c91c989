//! The ParseError type for wrapping ingestion diagnostics.
//!
//! [`ParseError`] wraps one or more [`Diagnostic`]s raised while reading one
//! of the two input documents. All spans of its diagnostics point into that
//! document, named by [`SourceKind`].

use std::fmt;

use crate::error::Diagnostic;

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// The input document a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The base layer with the content units.
    Base,
    /// The RST layer with segments and the relation structure.
    Rst,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Base => write!(f, "base layer"),
            SourceKind::Rst => write!(f, "RST layer"),
        }
    }
}

/// Error type for the ingestion of one document.
#[derive(Debug)]
pub struct ParseError {
    source: SourceKind,
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(source: SourceKind, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            source,
            diagnostics,
        }
    }

    /// Create a parse error carrying a single diagnostic.
    pub fn single(source: SourceKind, diagnostic: Diagnostic) -> Self {
        Self::new(source, vec![diagnostic])
    }

    /// The document the diagnostics point into.
    pub fn source_kind(&self) -> SourceKind {
        self.source
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.source)?;
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

//! Collector for accumulating diagnostics while reading a document.
//!
//! Reference errors are independent of each other, so every unresolved id of
//! a document is reported in one run instead of stopping at the first.

use log::warn;

use crate::error::{Diagnostic, ParseError, SourceKind};

/// A collector for accumulating diagnostics of one document.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::new(SourceKind::Rst);
///
/// collector.emit(
///     Diagnostic::error("segment `s1` references unknown unit `u9`")
///         .with_code(ErrorCode::E200)
///         .with_label(Span::new(40..70), "not found in base layer")
/// );
///
/// let result = collector.finish();
/// ```
#[derive(Debug)]
pub struct DiagnosticCollector {
    source: SourceKind,
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector for `source`.
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
            has_errors: false,
        }
    }

    /// Emit a diagnostic to this collector.
    ///
    /// Warnings are logged immediately; they only reach the caller alongside
    /// errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        } else {
            warn!(source:% = self.source; "{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if an error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, returns `Ok(())`.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.source, self.diagnostics))
        } else {
            Ok(())
        }
    }
}

//! Error and diagnostic system for the rstviz parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled byte spans into the offending XML document
//! - Severity levels
//! - Diagnostic collector for reporting every broken reference at once
//!
//! # Example
//!
//! ```
//! # use rstviz_parser::error::{Diagnostic, ErrorCode};
//! # use rstviz_parser::Span;
//!
//! let diag = Diagnostic::error("segment `s3` references unknown unit `u-12`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(100..130), "not found in the base layer")
//!     .with_help("check the `xref` against the unit ids of the base layer");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::{ParseError, SourceKind};
pub use severity::Severity;

//! Error codes for the rstviz diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - XML syntax errors
//! - `E1xx` - Structure errors (missing elements or attributes)
//! - `E2xx` - Reference errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // XML Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The document is not well-formed XML and could not be parsed at all.
    E001,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Missing root element.
    ///
    /// The RST layer has no `rst-structure` element.
    E100,

    /// Missing required attribute.
    ///
    /// An element lacks an attribute that its kind requires, such as the
    /// `id` of a unit or the `satellites` list of a span.
    E101,

    // =========================================================================
    // Reference Errors (E2xx)
    // =========================================================================
    /// Unresolved segment cross-reference.
    ///
    /// A `segment` or `mini-segment` points at a unit id that does not exist
    /// in the base layer.
    E200,

    /// Unresolved title cross-reference.
    ///
    /// A span's `title` points at an id that is not a unit of the base
    /// layer.
    E201,

    /// Duplicate id.
    ///
    /// Two elements of the same table share an id.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed XML",
            ErrorCode::E100 => "missing root element",
            ErrorCode::E101 => "missing required attribute",
            ErrorCode::E200 => "unresolved segment reference",
            ErrorCode::E201 => "unresolved title reference",
            ErrorCode::E202 => "duplicate id",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E202.to_string(), "E202");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "malformed XML");
        assert_eq!(ErrorCode::E200.description(), "unresolved segment reference");
        assert_eq!(ErrorCode::E202.description(), "duplicate id");
    }
}

//! Error codes for the Tierdraw diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Syntax errors
//! - `E1xx` - Structure errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Invalid JSON.
    ///
    /// The input could not be read as a JSON document.
    E001,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Not a graph.
    ///
    /// The input is valid JSON but does not have the shape of a graph
    /// description: the `nodes` list is missing, or a field has the wrong type.
    E100,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Missing node id.
    ///
    /// A node has no `id`, or its `id` is blank.
    E200,

    /// Duplicate node id.
    ///
    /// Two nodes share the same `id`, so edges cannot be resolved unambiguously.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid json",
            ErrorCode::E100 => "not a graph",
            ErrorCode::E200 => "missing node id",
            ErrorCode::E201 => "duplicate node id",
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
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "invalid json");
        assert_eq!(ErrorCode::E201.description(), "duplicate node id");
    }
}

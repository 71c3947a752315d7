//! Error and diagnostic system for the Tierdraw parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source text, when one is available
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from parsing and normalization.
//!
//! # Example
//!
//! ```
//! # use tierdraw_parser::error::{Diagnostic, ErrorCode};
//!
//! let diag = Diagnostic::error("node id `db` is defined more than once")
//!     .with_code(ErrorCode::E201)
//!     .with_help("node #3 reuses the id of node #1");
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
pub use parse_error::ParseError;
pub use severity::Severity;

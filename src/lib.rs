//! # radix-convert
//!
//! Converts integer text between binary, octal, decimal and hexadecimal.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert → parse, render, convert, failure reporting
//!   ↓
//! base    → SupportedBase and its labels
//! ```
//!
//! Values are bounded by `i64`. A single leading `+` or `-` is accepted and
//! negative values render as a signed magnitude (`-ff`).

/// Foundation types: SupportedBase, display labels
pub mod base;

/// Parsing, rendering and conversion with injected error reporting
pub mod convert;

// Re-export the common entry points
pub use base::{BaseError, SupportedBase, title};
pub use convert::{
    CollectingReporter, Converter, ParseError, ParseErrorKind, Report, Reporter, TracingReporter,
    convert, parse, render, try_convert,
};

//! Foundation types for radix conversion.
//!
//! This module provides the closed set of bases the converter understands:
//! - [`SupportedBase`] - Binary, octal, decimal and hexadecimal
//! - [`title`] - Display labels, kept apart from the numeric core
//!
//! This module has NO dependencies on other radix-convert modules.

mod label;
mod radix;

pub use label::title;
pub use radix::{BaseError, SupportedBase};

//! Conversion between supported bases.
//!
//! A conversion parses the source text into an `i64` and renders it again:
//!
//! ```text
//! "ff" ──parse(Hexadecimal)──▶ 255 ──render(Decimal)──▶ "255"
//! ```
//!
//! [`try_convert`] hands the [`ParseError`] back to the caller.
//! [`Converter::convert`] reports it to its [`Reporter`] and returns `None`.

mod diagnostics;
mod parse;
mod render;

pub use diagnostics::{CollectingReporter, Report, Reporter, TracingReporter};
pub use parse::{ParseError, ParseErrorKind, parse};
pub use render::render;

use crate::base::SupportedBase;

/// Convert `text` from one base to another, returning the typed error on
/// failure.
///
/// When `from == to` the value is rendered in decimal, which yields the
/// canonical form: `try_convert("00ff", Hexadecimal, Hexadecimal)` is `"255"`.
pub fn try_convert(
    text: &str,
    from: SupportedBase,
    to: SupportedBase,
) -> Result<String, ParseError> {
    let value = parse(text, from)?;
    let target = if from == to { SupportedBase::Decimal } else { to };
    Ok(render(value, target))
}

/// Convert `text` from one base to another, logging failures through
/// `tracing`.
///
/// ```
/// use radix_convert::{SupportedBase, convert};
///
/// assert_eq!(
///     convert("ff", SupportedBase::Hexadecimal, SupportedBase::Decimal).as_deref(),
///     Some("255")
/// );
/// assert_eq!(convert("12", SupportedBase::Binary, SupportedBase::Decimal), None);
/// ```
pub fn convert(text: &str, from: SupportedBase, to: SupportedBase) -> Option<String> {
    Converter::new(TracingReporter).convert(text, from, to)
}

/// Converts text between bases and reports failures to an injected
/// [`Reporter`].
#[derive(Clone, Debug, Default)]
pub struct Converter<R = TracingReporter> {
    reporter: R,
}

impl<R: Reporter> Converter<R> {
    /// Create a converter that reports to `reporter`.
    pub const fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Get the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Convert `text` from `from` to `to`.
    ///
    /// Returns `None` if `text` is not a valid number in `from`; the failure
    /// is reported exactly once.
    pub fn convert(&self, text: &str, from: SupportedBase, to: SupportedBase) -> Option<String> {
        match try_convert(text, from, to) {
            Ok(converted) => Some(converted),
            Err(err) => {
                self.reporter.report_error("convert", &err.to_string());
                None
            }
        }
    }

    /// Render `text` in every supported base.
    ///
    /// Each entry is in its own base's radix, in [`SupportedBase::ALL`]
    /// order; the decimal shortcut of [`convert`](Self::convert) does not
    /// apply here.
    pub fn convert_all(
        &self,
        text: &str,
        from: SupportedBase,
    ) -> Option<Vec<(SupportedBase, String)>> {
        match parse(text, from) {
            Ok(value) => Some(
                SupportedBase::ALL
                    .into_iter()
                    .map(|base| (base, render(value, base)))
                    .collect(),
            ),
            Err(err) => {
                self.reporter.report_error("convert_all", &err.to_string());
                None
            }
        }
    }
}

//! Human-readable labels for supported bases.

use super::SupportedBase;

/// Get the display label for a base.
///
/// Labels are fixed English strings. Anything that needs translated
/// labels should key off [`SupportedBase`] rather than this text.
pub const fn title(base: SupportedBase) -> &'static str {
    match base {
        SupportedBase::Binary => "Binary (2)",
        SupportedBase::Octal => "Octal (8)",
        SupportedBase::Decimal => "Decimal (10)",
        SupportedBase::Hexadecimal => "Hexadecimal (16)",
    }
}

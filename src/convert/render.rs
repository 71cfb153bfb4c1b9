//! Writing integers under a radix.

use crate::base::SupportedBase;

/// Render `value` in `base`.
///
/// No prefix, lowercase letters, and a leading `-` for negative values
/// followed by the magnitude (never two's complement).
pub fn render(value: i64, base: SupportedBase) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match base {
        SupportedBase::Binary => format!("{magnitude:b}"),
        SupportedBase::Octal => format!("{magnitude:o}"),
        SupportedBase::Decimal => magnitude.to_string(),
        SupportedBase::Hexadecimal => format!("{magnitude:x}"),
    };

    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

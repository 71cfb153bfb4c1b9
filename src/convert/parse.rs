//! Reading integer text under a radix.

use std::num::IntErrorKind;

use crate::base::SupportedBase;

/// Why a text could not be read as an integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// No digits at all (empty text or a bare sign).
    #[error("no digits")]
    Empty,
    /// A character is not a digit of the radix.
    #[error("invalid digit for radix")]
    InvalidDigit,
    /// Value is above `i64::MAX`.
    #[error("value too large")]
    Overflow,
    /// Value is below `i64::MIN`.
    #[error("value too small")]
    Underflow,
}

/// Text that is not a valid integer under its declared base.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {base} number: \"{text}\" ({kind})")]
pub struct ParseError {
    /// The base the text was read under.
    pub base: SupportedBase,
    /// The offending text.
    pub text: String,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Parse `text` as a signed integer in `base`.
///
/// Accepts one optional leading `+` or `-`. Letters are case-insensitive.
/// No prefix (`0x`, `0b`) and no surrounding whitespace is allowed.
pub fn parse(text: &str, base: SupportedBase) -> Result<i64, ParseError> {
    let error = |kind| ParseError {
        base,
        text: text.to_string(),
        kind,
    };

    if matches!(text, "" | "+" | "-") {
        return Err(error(ParseErrorKind::Empty));
    }

    i64::from_str_radix(text, base.radix()).map_err(|e| {
        error(match e.kind() {
            IntErrorKind::Empty => ParseErrorKind::Empty,
            IntErrorKind::PosOverflow => ParseErrorKind::Overflow,
            IntErrorKind::NegOverflow => ParseErrorKind::Underflow,
            _ => ParseErrorKind::InvalidDigit,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_base() {
        assert_eq!(parse("101", SupportedBase::Binary), Ok(5));
        assert_eq!(parse("17", SupportedBase::Octal), Ok(15));
        assert_eq!(parse("42", SupportedBase::Decimal), Ok(42));
        assert_eq!(parse("fF", SupportedBase::Hexadecimal), Ok(255));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(parse("-1", SupportedBase::Decimal), Ok(-1));
        assert_eq!(parse("+7", SupportedBase::Octal), Ok(7));
        assert_eq!(parse("-0", SupportedBase::Binary), Ok(0));
    }

    #[test]
    fn test_parse_empty_and_bare_sign() {
        for text in ["", "+", "-"] {
            let err = parse(text, SupportedBase::Decimal).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::Empty, "{text:?}");
        }
    }

    #[test]
    fn test_parse_invalid_digit() {
        let err = parse("12", SupportedBase::Binary).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDigit);
        assert_eq!(err.base, SupportedBase::Binary);
        assert_eq!(err.text, "12");

        assert!(parse("0x1f", SupportedBase::Hexadecimal).is_err());
        assert!(parse(" 1", SupportedBase::Decimal).is_err());
        assert!(parse("--1", SupportedBase::Decimal).is_err());
    }

    #[test]
    fn test_parse_range_limits() {
        assert_eq!(parse("9223372036854775807", SupportedBase::Decimal), Ok(i64::MAX));
        assert_eq!(parse("-8000000000000000", SupportedBase::Hexadecimal), Ok(i64::MIN));

        let err = parse("8000000000000000", SupportedBase::Hexadecimal).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Overflow);

        let err = parse("-9223372036854775809", SupportedBase::Decimal).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Underflow);
    }

    #[test]
    fn test_error_message_names_base_and_text() {
        let err = parse("zz", SupportedBase::Hexadecimal).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Hexadecimal (16) number: \"zz\" (invalid digit for radix)"
        );
    }
}

//! The supported numeric bases.

use std::fmt;
use std::str::FromStr;

/// A numeric base the converter can read from and write to.
///
/// The set is closed: every base carries its radix as the discriminant,
/// so `SupportedBase::Hexadecimal as u32 == 16`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u32)]
pub enum SupportedBase {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hexadecimal = 16,
}

impl SupportedBase {
    /// Every supported base, in ascending radix order.
    pub const ALL: [SupportedBase; 4] = [
        SupportedBase::Binary,
        SupportedBase::Octal,
        SupportedBase::Decimal,
        SupportedBase::Hexadecimal,
    ];

    /// Get the radix (2, 8, 10 or 16).
    #[inline]
    pub const fn radix(self) -> u32 {
        self as u32
    }

    /// Get the display label, e.g. `"Octal (8)"`.
    #[inline]
    pub const fn title(self) -> &'static str {
        super::title(self)
    }
}

impl fmt::Display for SupportedBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Errors from building a [`SupportedBase`] out of raw input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BaseError {
    #[error("unsupported radix {0} (expected 2, 8, 10 or 16)")]
    UnsupportedRadix(u32),
    #[error("unknown base '{0}'")]
    UnknownBase(String),
}

impl TryFrom<u32> for SupportedBase {
    type Error = BaseError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            other => Err(BaseError::UnsupportedRadix(other)),
        }
    }
}

impl From<SupportedBase> for u32 {
    #[inline]
    fn from(base: SupportedBase) -> Self {
        base.radix()
    }
}

impl FromStr for SupportedBase {
    type Err = BaseError;

    /// Accepts the full name, the short name, or the radix digits,
    /// case-insensitively: `"hexadecimal"`, `"hex"` and `"16"` all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Self::Binary),
            "octal" | "oct" | "8" => Ok(Self::Octal),
            "decimal" | "dec" | "10" => Ok(Self::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Self::Hexadecimal),
            _ => Err(BaseError::UnknownBase(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_values() {
        assert_eq!(SupportedBase::Binary.radix(), 2);
        assert_eq!(SupportedBase::Octal.radix(), 8);
        assert_eq!(SupportedBase::Decimal.radix(), 10);
        assert_eq!(SupportedBase::Hexadecimal.radix(), 16);
    }

    #[test]
    fn test_all_is_sorted_and_complete() {
        let radixes: Vec<u32> = SupportedBase::ALL.iter().map(|b| b.radix()).collect();
        assert_eq!(radixes, vec![2, 8, 10, 16]);
    }

    #[test]
    fn test_try_from_radix() {
        for base in SupportedBase::ALL {
            assert_eq!(SupportedBase::try_from(base.radix()), Ok(base));
        }
        assert_eq!(
            SupportedBase::try_from(36),
            Err(BaseError::UnsupportedRadix(36))
        );
        assert!(SupportedBase::try_from(0).is_err());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("hex".parse(), Ok(SupportedBase::Hexadecimal));
        assert_eq!("Binary".parse(), Ok(SupportedBase::Binary));
        assert_eq!("OCT".parse(), Ok(SupportedBase::Octal));
        assert_eq!("10".parse(), Ok(SupportedBase::Decimal));
        assert_eq!(
            "ternary".parse::<SupportedBase>(),
            Err(BaseError::UnknownBase("ternary".to_string()))
        );
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(format!("{}", SupportedBase::Decimal), "Decimal (10)");
    }

    #[test]
    fn test_base_size() {
        assert_eq!(std::mem::size_of::<SupportedBase>(), 4);
    }
}

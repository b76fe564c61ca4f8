//! Canonical text encodings for the `string` measure.

use std::fmt;

use crate::TypeError;

/// Canonical encoding of a `string` measure.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// 7-bit ASCII, canonical name `A`.
    Ascii,
    /// UTF-8, canonical name `U8`.
    #[default]
    Utf8,
    /// UTF-16, canonical name `U16`.
    Utf16,
    /// UTF-32, canonical name `U32`.
    Utf32,
}

impl Encoding {
    /// Resolve an encoding name or alias (`ascii`, `utf-8`, `utf_16`, `U32`, ...).
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "A" | "ascii" => Some(Self::Ascii),
            "U8" | "utf-8" | "utf_8" | "utf8" => Some(Self::Utf8),
            "U16" | "utf-16" | "utf_16" | "utf16" => Some(Self::Utf16),
            "U32" | "utf-32" | "utf_32" | "utf32" => Some(Self::Utf32),
            _ => None,
        }
    }

    /// Like [`Encoding::from_alias`], failing with
    /// [`TypeError::UnsupportedEncoding`] for names outside the table.
    pub fn parse(alias: &str) -> Result<Self, TypeError> {
        Self::from_alias(alias).ok_or_else(|| TypeError::UnsupportedEncoding(alias.to_owned()))
    }

    /// Canonical name.
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Ascii => "A",
            Self::Utf8 => "U8",
            Self::Utf16 => "U16",
            Self::Utf32 => "U32",
        }
    }

    /// Size in bytes of one code unit.
    pub const fn code_unit_size(self) -> usize {
        match self {
            Self::Ascii | Self::Utf8 => 1,
            Self::Utf16 => 2,
            Self::Utf32 => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

//! Single-byte name decoding.
//!
//! Names on disk are raw bytes in a legacy 8-bit code page. Decoding never
//! fails: a byte the code page cannot map becomes [`REPLACEMENT_CHAR`].

use alloc::string::String;

/// Substitute for bytes the code page does not map.
pub const REPLACEMENT_CHAR: char = char::REPLACEMENT_CHARACTER;

/// 8-bit code page used to decode names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodePage {
    /// ISO-8859-1. Every byte maps to the code point of the same value.
    #[default]
    Latin1,
    /// 7-bit ASCII. Bytes above 0x7F are unmapped.
    Ascii,
}

impl CodePage {
    /// Map one byte, or `None` if the byte has no character here.
    #[inline]
    pub const fn decode_byte(self, b: u8) -> Option<char> {
        match self {
            Self::Latin1 => Some(b as char),
            Self::Ascii if b.is_ascii() => Some(b as char),
            Self::Ascii => None,
        }
    }
}

/// Decode a name, replacing unmapped bytes.
pub fn decode_name(bytes: &[u8], code_page: CodePage) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        out.push(code_page.decode_byte(b).unwrap_or(REPLACEMENT_CHAR));
    }
    out
}

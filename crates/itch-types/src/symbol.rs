use std::fmt;

use itch_wire::layout::SYMBOL_LEN;

use crate::error::TypeError;

/// Instrument symbol, decoded from an 8-byte space-padded wire field.
///
/// Only trailing spaces (0x20) are stripped; leading spaces are part of
/// the symbol. A field of eight spaces decodes to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Decode the raw wire field.
    ///
    /// Bytes outside ASCII are replaced with `U+FFFD` rather than failing,
    /// so a corrupt symbol never stops the decoder.
    pub fn from_wire(raw: &[u8; SYMBOL_LEN]) -> Self {
        let end = raw.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        let trimmed = &raw[..end];

        let text = if trimmed.is_ascii() {
            String::from_utf8_lossy(trimmed).into_owned()
        } else {
            trimmed
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
                .collect()
        };
        Self(text)
    }

    /// Encode into the 8-byte wire field, right-padded with spaces.
    ///
    /// # Errors
    ///
    /// - [`TypeError::SymbolTooLong`] if `symbol` is longer than 8 bytes.
    /// - [`TypeError::NonAsciiSymbol`] if `symbol` contains non-ASCII bytes.
    pub fn to_wire(symbol: &str) -> Result<[u8; SYMBOL_LEN], TypeError> {
        if let Some(&byte) = symbol.as_bytes().iter().find(|b| !b.is_ascii()) {
            return Err(TypeError::NonAsciiSymbol {
                symbol: symbol.to_string(),
                byte,
            });
        }
        if symbol.len() > SYMBOL_LEN {
            return Err(TypeError::SymbolTooLong {
                symbol: symbol.to_string(),
                len: symbol.len(),
            });
        }

        let mut raw = [b' '; SYMBOL_LEN];
        raw[..symbol.len()].copy_from_slice(symbol.as_bytes());
        Ok(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

use itch_wire::WireError;

/// Errors raised while converting between wire fields and typed values.
///
/// Decoding a field can only fail by running out of bytes, which is a
/// wrapped [`WireError`]. The remaining variants guard the encoding
/// direction, where a caller-supplied value may not fit the fixed layout.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ TypeError                                            │
/// │   ├── TimestampOutOfRange  value needs > 48 bits     │
/// │   ├── SymbolTooLong        more than 8 bytes         │
/// │   ├── NonAsciiSymbol       byte >= 0x80              │
/// │   └── Wire(WireError)      short read inside a field │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The 6-byte timestamp field cannot carry this many nanoseconds.
    #[error("timestamp {value} ns does not fit in 48 bits")]
    TimestampOutOfRange { value: u64 },

    /// A symbol is limited to 8 bytes on the wire.
    #[error("symbol {symbol:?} is {len} bytes, limit is 8")]
    SymbolTooLong { symbol: String, len: usize },

    /// Symbols are ASCII on the wire.
    #[error("symbol {symbol:?} contains non-ASCII byte {byte:#04X}")]
    NonAsciiSymbol { symbol: String, byte: u8 },

    #[error(transparent)]
    Wire(#[from] WireError),
}

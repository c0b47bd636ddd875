/// Errors from the capture-file streaming decoder.
///
/// The per-datagram decoder never errors: every byte sequence maps to a
/// [`DecodeOutcome`](crate::DecodeOutcome) or to "no frame". Errors only
/// exist where there is a reader underneath that can fail or end early.
///
/// ```text
///   DecodeError
///   ├── TruncatedStream   ← capture ended inside a length prefix or message
///   └── Io(std::io::Error) ← from the underlying AsyncRead
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The capture ended mid-record. `offset` is the byte position of the
    /// record's length prefix.
    #[error("capture truncated at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedStream {
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

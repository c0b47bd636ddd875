/// Errors raised by the low-level byte readers and the frame writer.
///
/// The frame splitter itself never returns these: an incomplete datagram
/// is a reported [`FrameEvent`](crate::FrameEvent), not an error. These
/// variants surface when a field codec is asked to read past the end of
/// a message, or when a message is too large to be framed.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A fixed-width read would run past the end of the buffer.
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Message does not fit behind a 2-byte length prefix.
    #[error("message of {len} bytes exceeds the 65535-byte frame limit")]
    FrameTooLarge { len: usize },

    /// I/O error while writing a frame.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// NOTE Summary
// UnexpectedEof carries all three numbers (where, how many, how many were left)
// because a bare "eof" is useless when staring at a hex dump of a packet.
// Io is #[error(transparent)] + #[from], so `?` on a std::io::Write call inside
// write_frame converts automatically and prints the inner error unchanged.

use std::iter::FusedIterator;

use crate::error::WireError;
use crate::layout::{LENGTH_PREFIX_LEN, MAX_MESSAGE_LEN};

/// One length-prefixed message inside a datagram.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ declared_length  (u16, big-endian, 2 bytes)      │
/// │ message          [declared_length bytes]         │
/// │ trailing bytes   (ignored, one message/datagram) │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// A `Frame` only exists for complete messages: the splitter has already
/// checked `available_length >= declared_length`, so [`bytes`](Self::bytes)
/// is always exactly `declared_length` long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    declared_length: u16,
    available_length: usize,
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Length taken from the 2-byte prefix.
    pub fn declared_length(&self) -> u16 {
        self.declared_length
    }

    /// Bytes present in the datagram after the prefix.
    pub fn available_length(&self) -> usize {
        self.available_length
    }

    /// The message bytes, `declared_length` long.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bytes after the message that the splitter skipped.
    pub fn trailing_len(&self) -> usize {
        self.available_length - usize::from(self.declared_length)
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// What the splitter found in a datagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEvent<'a> {
    /// A complete message ready for decoding.
    Complete(Frame<'a>),

    /// The prefix promised more bytes than the datagram carries.
    /// The message is never decoded.
    Incomplete {
        declared_length: u16,
        available_length: usize,
    },
}

/// Lazy, one-shot sequence of frames in a single datagram.
///
/// Yields at most one event: the feed carries one message per datagram, and
/// an incomplete frame ends the scan. Create a fresh iterator per datagram
/// with [`split`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    datagram: &'a [u8],
    done: bool,
}

/// Split a datagram into its length-prefixed frame.
///
/// - fewer than 2 bytes: no events
/// - prefix larger than the remaining bytes: one [`FrameEvent::Incomplete`]
/// - otherwise: one [`FrameEvent::Complete`]
///
/// Never panics and never allocates.
///
/// ```rust
/// use itch_wire::{FrameEvent, split};
///
/// let datagram = [0x00, 0x02, b'Z', 0x01];
/// let mut frames = split(&datagram);
/// let Some(FrameEvent::Complete(frame)) = frames.next() else { panic!() };
/// assert_eq!(frame.bytes(), &[b'Z', 0x01]);
/// assert!(frames.next().is_none());
/// ```
pub fn split(datagram: &[u8]) -> Frames<'_> {
    Frames {
        datagram,
        done: false,
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = FrameEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.done = true;

        let (prefix, rest) = self.datagram.split_first_chunk::<LENGTH_PREFIX_LEN>()?;
        let declared_length = u16::from_be_bytes(*prefix);
        let available_length = rest.len();

        match rest.get(..usize::from(declared_length)) {
            Some(bytes) => Some(FrameEvent::Complete(Frame {
                declared_length,
                available_length,
                bytes,
            })),
            None => Some(FrameEvent::Incomplete {
                declared_length,
                available_length,
            }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.datagram.len() < LENGTH_PREFIX_LEN {
            (0, Some(0))
        } else {
            (1, Some(1))
        }
    }
}

impl FusedIterator for Frames<'_> {}

/// Write `message` behind its 2-byte big-endian length prefix.
///
/// # Returns
///
/// Total number of bytes written (prefix + message).
///
/// # Errors
///
/// - [`WireError::FrameTooLarge`] if `message` is longer than 65535 bytes.
/// - [`WireError::Io`] if the writer fails.
pub fn write_frame(message: &[u8], w: &mut impl std::io::Write) -> Result<usize, WireError> {
    if message.len() > MAX_MESSAGE_LEN {
        return Err(WireError::FrameTooLarge { len: message.len() });
    }

    #[allow(clippy::cast_possible_truncation)]
    let prefix = (message.len() as u16).to_be_bytes();
    w.write_all(&prefix)?;
    w.write_all(message)?;

    Ok(LENGTH_PREFIX_LEN + message.len())
}

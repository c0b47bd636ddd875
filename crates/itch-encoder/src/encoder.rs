use itch_wire::write_frame;

use crate::error::EncodeError;
use crate::message;

/// Internal representation of a message awaiting serialization.
///
/// Field values are validated in [`ItchEncoder::messages`], not when the
/// message is added, so the `add_*` calls can chain without `?`.
#[derive(Clone, Debug)]
enum PendingMessage {
    SystemEvent { nanos: u64, event_code: u8 },
    AddOrder { nanos: u64, side: u8, symbol: String },
    Trade { nanos: u64, side: u8, symbol: String },
    ReplaceOrder { nanos: u64, side: u8, symbol: String },
    StockDirectory { symbol: String },
    DeleteOrder { nanos: u64 },
    OrderCancel { nanos: u64 },
    Raw(Vec<u8>),
}

impl PendingMessage {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::SystemEvent { nanos, event_code } => message::system_event(*nanos, *event_code),
            Self::AddOrder { nanos, side, symbol } => message::add_order(*nanos, *side, symbol),
            Self::Trade { nanos, side, symbol } => message::trade(*nanos, *side, symbol),
            Self::ReplaceOrder { nanos, side, symbol } => {
                message::replace_order(*nanos, *side, symbol)
            }
            Self::StockDirectory { symbol } => message::stock_directory(symbol),
            Self::DeleteOrder { nanos } => message::delete_order(*nanos),
            Self::OrderCancel { nanos } => message::order_cancel(*nanos),
            Self::Raw(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Builds a sequence of feed messages and serializes them either as
/// individual datagrams or as a capture stream.
///
/// ```rust
/// use itch_encoder::ItchEncoder;
///
/// let capture = ItchEncoder::new()
///     .add_system_event(0, b'O')
///     .add_stock_directory("AAPL")
///     .add_add_order(34_200_000_000_000, b'B', "AAPL")
///     .encode_capture()
///     .unwrap();
///
/// // [00 0C] + 12 bytes, [00 16] + 22 bytes, [00 24] + 36 bytes
/// assert_eq!(capture.len(), 14 + 24 + 38);
/// ```
///
/// # Output layouts
///
/// ```text
/// datagrams():      one Vec per message:  [u16 len][message]
/// encode_capture(): all of them back to back:
///   ┌───────────┬───────────┬───────────┬─────┐
///   │ [len][m0] │ [len][m1] │ [len][m2] │ ... │
///   └───────────┴───────────┴───────────┴─────┘
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItchEncoder {
    messages: Vec<PendingMessage>,
}

impl ItchEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_system_event(&mut self, nanos: u64, event_code: u8) -> &mut Self {
        self.messages.push(PendingMessage::SystemEvent { nanos, event_code });
        self
    }

    pub fn add_add_order(&mut self, nanos: u64, side: u8, symbol: &str) -> &mut Self {
        self.messages.push(PendingMessage::AddOrder {
            nanos,
            side,
            symbol: symbol.to_string(),
        });
        self
    }

    pub fn add_trade(&mut self, nanos: u64, side: u8, symbol: &str) -> &mut Self {
        self.messages.push(PendingMessage::Trade {
            nanos,
            side,
            symbol: symbol.to_string(),
        });
        self
    }

    pub fn add_replace_order(&mut self, nanos: u64, side: u8, symbol: &str) -> &mut Self {
        self.messages.push(PendingMessage::ReplaceOrder {
            nanos,
            side,
            symbol: symbol.to_string(),
        });
        self
    }

    pub fn add_stock_directory(&mut self, symbol: &str) -> &mut Self {
        self.messages.push(PendingMessage::StockDirectory {
            symbol: symbol.to_string(),
        });
        self
    }

    pub fn add_delete_order(&mut self, nanos: u64) -> &mut Self {
        self.messages.push(PendingMessage::DeleteOrder { nanos });
        self
    }

    pub fn add_order_cancel(&mut self, nanos: u64) -> &mut Self {
        self.messages.push(PendingMessage::OrderCancel { nanos });
        self
    }

    /// Append arbitrary message bytes (unknown tags, truncated messages).
    pub fn add_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.messages.push(PendingMessage::Raw(bytes.to_vec()));
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Serialize every message without framing.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::EmptyCapture`] if no messages were added.
    /// - [`EncodeError::Type`] if a timestamp or symbol is out of range.
    pub fn messages(&self) -> Result<Vec<Vec<u8>>, EncodeError> {
        if self.messages.is_empty() {
            return Err(EncodeError::EmptyCapture);
        }
        self.messages.iter().map(PendingMessage::encode).collect()
    }

    /// Serialize every message as its own length-prefixed datagram.
    ///
    /// # Errors
    ///
    /// Everything [`messages`](Self::messages) returns, plus
    /// [`EncodeError::Wire`] for a raw message over 65535 bytes.
    pub fn datagrams(&self) -> Result<Vec<Vec<u8>>, EncodeError> {
        self.messages()?
            .into_iter()
            .map(|m| datagram(&m))
            .collect()
    }

    /// Serialize all messages into one capture stream.
    ///
    /// # Errors
    ///
    /// Same as [`datagrams`](Self::datagrams).
    pub fn encode_capture(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.write_capture(&mut out)?;
        Ok(out)
    }

    /// Write the capture stream into `w`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`datagrams`](Self::datagrams), plus I/O failures from `w`.
    pub fn write_capture(&self, w: &mut impl std::io::Write) -> Result<usize, EncodeError> {
        let mut written = 0;
        for msg in self.messages()? {
            written += write_frame(&msg, w)?;
        }
        Ok(written)
    }
}

/// Frame one message as a datagram: `[u16 len][message]`.
///
/// # Errors
///
/// [`EncodeError::Wire`] if `message` is longer than 65535 bytes.
pub fn datagram(message: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(message.len() + 2);
    write_frame(message, &mut out)?;
    Ok(out)
}

use itch_wire::layout::offset;

use crate::codes::{EventCode, Side};
use crate::error::TypeError;
use crate::fields::{decode_event_code, decode_side, decode_symbol, decode_timestamp};
use crate::message_type::MessageType;
use crate::symbol::Symbol;
use crate::timestamp::Timestamp;

/// Fields shared by the order-carrying messages (add, trade, replace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderEvent {
    pub timestamp: Timestamp,
    pub side: Side,
    pub symbol: Symbol,
}

/// One decoded message.
///
/// Each variant holds only the fields meaningful to its type. `Unknown`
/// carries the raw tag and message length so unrecognized traffic can
/// still be reported.
///
/// ```text
/// ┌────────────────┬──────────────────────────────────────┐
/// │ Variant        │ Fields                               │
/// ├────────────────┼──────────────────────────────────────┤
/// │ SystemEvent    │ timestamp, event_code                │
/// │ AddOrder       │ timestamp, side, symbol              │
/// │ Trade          │ timestamp, side, symbol              │
/// │ StockDirectory │ symbol                               │
/// │ DeleteOrder    │ timestamp                            │
/// │ ReplaceOrder   │ timestamp, side, symbol              │
/// │ OrderCancel    │ timestamp                            │
/// │ Unknown        │ tag, length                          │
/// └────────────────┴──────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    SystemEvent {
        timestamp: Timestamp,
        event_code: EventCode,
    },
    AddOrder(OrderEvent),
    Trade(OrderEvent),
    StockDirectory {
        symbol: Symbol,
    },
    DeleteOrder {
        timestamp: Timestamp,
    },
    ReplaceOrder(OrderEvent),
    OrderCancel {
        timestamp: Timestamp,
    },
    Unknown {
        tag: u8,
        length: usize,
    },
}

impl Record {
    /// Decode the fields of `msg` for the given message type.
    ///
    /// This does not check minimum lengths itself; it relies on the field
    /// codecs, so a message that is too short for a field fails with
    /// [`TypeError::Wire`]. The decoder applies the per-type minimum
    /// length before calling this.
    ///
    /// # Errors
    ///
    /// [`TypeError::Wire`] if a field extends past the end of `msg`.
    pub fn decode_body(message_type: MessageType, msg: &[u8]) -> Result<Self, TypeError> {
        let record = match message_type {
            MessageType::SystemEvent => Self::SystemEvent {
                timestamp: decode_timestamp(msg, offset::TIMESTAMP)?,
                event_code: decode_event_code(msg, offset::EVENT_CODE)?,
            },
            MessageType::AddOrder => Self::AddOrder(decode_order_event(msg)?),
            MessageType::Trade => Self::Trade(decode_order_event(msg)?),
            MessageType::ReplaceOrder => Self::ReplaceOrder(decode_order_event(msg)?),
            MessageType::StockDirectory => Self::StockDirectory {
                symbol: decode_symbol(msg, offset::DIRECTORY_SYMBOL)?,
            },
            MessageType::DeleteOrder => Self::DeleteOrder {
                timestamp: decode_timestamp(msg, offset::TIMESTAMP)?,
            },
            MessageType::OrderCancel => Self::OrderCancel {
                timestamp: decode_timestamp(msg, offset::TIMESTAMP)?,
            },
            MessageType::Unknown(tag) => Self::Unknown {
                tag,
                length: msg.len(),
            },
        };
        Ok(record)
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            Self::SystemEvent { .. } => MessageType::SystemEvent,
            Self::AddOrder(_) => MessageType::AddOrder,
            Self::Trade(_) => MessageType::Trade,
            Self::StockDirectory { .. } => MessageType::StockDirectory,
            Self::DeleteOrder { .. } => MessageType::DeleteOrder,
            Self::ReplaceOrder(_) => MessageType::ReplaceOrder,
            Self::OrderCancel { .. } => MessageType::OrderCancel,
            Self::Unknown { tag, .. } => MessageType::Unknown(*tag),
        }
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::SystemEvent { timestamp, .. }
            | Self::DeleteOrder { timestamp }
            | Self::OrderCancel { timestamp } => Some(*timestamp),
            Self::AddOrder(o) | Self::Trade(o) | Self::ReplaceOrder(o) => Some(o.timestamp),
            Self::StockDirectory { .. } | Self::Unknown { .. } => None,
        }
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::AddOrder(o) | Self::Trade(o) | Self::ReplaceOrder(o) => Some(&o.symbol),
            Self::StockDirectory { symbol } => Some(symbol),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Self::AddOrder(o) | Self::Trade(o) | Self::ReplaceOrder(o) => Some(o.side),
            _ => None,
        }
    }
}

fn decode_order_event(msg: &[u8]) -> Result<OrderEvent, TypeError> {
    Ok(OrderEvent {
        timestamp: decode_timestamp(msg, offset::TIMESTAMP)?,
        side: decode_side(msg, offset::SIDE)?,
        symbol: decode_symbol(msg, offset::ORDER_SYMBOL)?,
    })
}

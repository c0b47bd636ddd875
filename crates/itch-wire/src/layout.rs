/// Size of the big-endian length prefix at the start of every datagram.
pub const LENGTH_PREFIX_LEN: usize = 2;

/// Largest message a 2-byte length prefix can describe.
pub const MAX_MESSAGE_LEN: usize = u16::MAX as usize;

/// Receive buffer size used by the transport. One UDP datagram never exceeds it.
pub const MAX_DATAGRAM_LEN: usize = 65_536;

/// Width of the nanoseconds-since-midnight timestamp field.
pub const TIMESTAMP_LEN: usize = 6;

/// Width of a space-padded instrument symbol.
pub const SYMBOL_LEN: usize = 8;

/// Message type tags as they appear in byte 0 of a message.
pub mod tag {
    pub const SYSTEM_EVENT: u8 = b'S';
    pub const ADD_ORDER: u8 = b'A';
    pub const TRADE: u8 = b'P';
    pub const STOCK_DIRECTORY: u8 = b'L';
    pub const DELETE_ORDER: u8 = b'D';
    pub const REPLACE_ORDER: u8 = b'U';
    pub const ORDER_CANCEL: u8 = b'X';
}

/// Byte offsets of the decoded fields, relative to the start of the message
/// (the type tag is offset 0; the 2-byte datagram prefix is not counted).
///
/// ```text
/// ┌────────┬────────┬──────────────────────────────────────────┐
/// │ Offset │ Width  │ Field                                    │
/// ├────────┼────────┼──────────────────────────────────────────┤
/// │ 0      │ 1      │ message type tag                         │
/// │ 1      │ 8      │ symbol (stock directory only)            │
/// │ 5      │ 6      │ timestamp, ns since midnight             │
/// │ 11     │ 1      │ event code (system event only)           │
/// │ 19     │ 1      │ side (add order / trade / replace)       │
/// │ 24     │ 8      │ symbol (add order / trade / replace)     │
/// └────────┴────────┴──────────────────────────────────────────┘
/// ```
pub mod offset {
    pub const TAG: usize = 0;
    pub const DIRECTORY_SYMBOL: usize = 1;
    pub const TIMESTAMP: usize = 5;
    pub const EVENT_CODE: usize = 11;
    pub const SIDE: usize = 19;
    pub const ORDER_SYMBOL: usize = 24;
}

/// Minimum total message length per type. A message shorter than this is
/// recognized but not decoded.
pub mod min_len {
    pub const SYSTEM_EVENT: usize = 12;
    pub const ADD_ORDER: usize = 36;
    pub const TRADE: usize = 44;
    pub const STOCK_DIRECTORY: usize = 22;
    pub const DELETE_ORDER: usize = 19;
    pub const REPLACE_ORDER: usize = 35;
    pub const ORDER_CANCEL: usize = 23;
}

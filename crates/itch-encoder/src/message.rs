use bytes::BufMut;
use itch_types::{MessageType, Symbol, TypeError};
use itch_types::timestamp::MAX_WIRE_NANOS;
use itch_wire::layout::{SYMBOL_LEN, TIMESTAMP_LEN, offset};

use crate::error::EncodeError;

// ── Message builders ──────────────────────────────────────────────────
//
// Each builder allocates a zeroed message of exactly the type's minimum
// length, stamps the tag at offset 0, and writes only the fields the
// decoder reads. Everything else (order reference, shares, price, ...)
// stays zero. Big-endian writes go through bytes::BufMut on a sub-slice,
// which is sized to the field so nothing can spill into a neighbour.

fn blank(message_type: MessageType) -> Vec<u8> {
    let len = message_type.min_len().unwrap_or(1);
    let mut msg = vec![0u8; len];
    msg[offset::TAG] = message_type.wire_id();
    msg
}

fn put_timestamp(msg: &mut [u8], nanos: u64) -> Result<(), EncodeError> {
    if nanos > MAX_WIRE_NANOS {
        return Err(TypeError::TimestampOutOfRange { value: nanos }.into());
    }
    let mut field = &mut msg[offset::TIMESTAMP..offset::TIMESTAMP + TIMESTAMP_LEN];
    field.put_uint(nanos, TIMESTAMP_LEN);
    Ok(())
}

fn put_symbol(msg: &mut [u8], at: usize, symbol: &str) -> Result<(), EncodeError> {
    let raw = Symbol::to_wire(symbol)?;
    let mut field = &mut msg[at..at + SYMBOL_LEN];
    field.put_slice(&raw);
    Ok(())
}

fn order_message(
    message_type: MessageType,
    nanos: u64,
    side: u8,
    symbol: &str,
) -> Result<Vec<u8>, EncodeError> {
    let mut msg = blank(message_type);
    put_timestamp(&mut msg, nanos)?;
    msg[offset::SIDE] = side;
    put_symbol(&mut msg, offset::ORDER_SYMBOL, symbol)?;
    Ok(msg)
}

fn timestamp_only(message_type: MessageType, nanos: u64) -> Result<Vec<u8>, EncodeError> {
    let mut msg = blank(message_type);
    put_timestamp(&mut msg, nanos)?;
    Ok(msg)
}

/// System Event (`'S'`, 12 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] if `nanos` does not fit in 48 bits.
pub fn system_event(nanos: u64, event_code: u8) -> Result<Vec<u8>, EncodeError> {
    let mut msg = timestamp_only(MessageType::SystemEvent, nanos)?;
    msg[offset::EVENT_CODE] = event_code;
    Ok(msg)
}

/// Add Order (`'A'`, 36 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] for an out-of-range timestamp or an invalid symbol.
pub fn add_order(nanos: u64, side: u8, symbol: &str) -> Result<Vec<u8>, EncodeError> {
    order_message(MessageType::AddOrder, nanos, side, symbol)
}

/// Trade (`'P'`, 44 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] for an out-of-range timestamp or an invalid symbol.
pub fn trade(nanos: u64, side: u8, symbol: &str) -> Result<Vec<u8>, EncodeError> {
    order_message(MessageType::Trade, nanos, side, symbol)
}

/// Replace Order (`'U'`, 35 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] for an out-of-range timestamp or an invalid symbol.
pub fn replace_order(nanos: u64, side: u8, symbol: &str) -> Result<Vec<u8>, EncodeError> {
    order_message(MessageType::ReplaceOrder, nanos, side, symbol)
}

/// Stock Directory (`'L'`, 22 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] if the symbol is too long or not ASCII.
pub fn stock_directory(symbol: &str) -> Result<Vec<u8>, EncodeError> {
    let mut msg = blank(MessageType::StockDirectory);
    put_symbol(&mut msg, offset::DIRECTORY_SYMBOL, symbol)?;
    Ok(msg)
}

/// Delete Order (`'D'`, 19 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] if `nanos` does not fit in 48 bits.
pub fn delete_order(nanos: u64) -> Result<Vec<u8>, EncodeError> {
    timestamp_only(MessageType::DeleteOrder, nanos)
}

/// Order Cancel (`'X'`, 23 bytes).
///
/// # Errors
///
/// [`EncodeError::Type`] if `nanos` does not fit in 48 bits.
pub fn order_cancel(nanos: u64) -> Result<Vec<u8>, EncodeError> {
    timestamp_only(MessageType::OrderCancel, nanos)
}

/// A message of `len` bytes starting with `tag`, zero-filled after it.
///
/// Useful for unknown tags and for deliberately short (truncated) known
/// messages. `len` of zero produces an empty message.
pub fn padded(tag: u8, len: usize) -> Vec<u8> {
    let mut msg = vec![0u8; len];
    if let Some(first) = msg.first_mut() {
        *first = tag;
    }
    msg
}

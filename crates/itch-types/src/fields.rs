use itch_wire::byte_order::{read_array, read_u8, read_u48_be};
use itch_wire::layout::SYMBOL_LEN;

use crate::codes::{EventCode, Side};
use crate::error::TypeError;
use crate::symbol::Symbol;
use crate::timestamp::Timestamp;

// ── Field codecs ──────────────────────────────────────────────────────
//
// Each helper reads one fixed-offset field out of a message slice. The
// bounds check happens inside itch_wire::byte_order, so a short message
// surfaces as TypeError::Wire(UnexpectedEof) instead of a panic. Callers
// pass named offsets from itch_wire::layout::offset, never literals.

/// Decode the 6-byte big-endian timestamp at `offset`.
///
/// # Errors
///
/// [`TypeError::Wire`] if the message ends before `offset + 6`.
pub fn decode_timestamp(msg: &[u8], offset: usize) -> Result<Timestamp, TypeError> {
    Ok(Timestamp::from_nanos(read_u48_be(msg, offset)?))
}

/// Decode the 8-byte space-padded symbol at `offset`.
///
/// # Errors
///
/// [`TypeError::Wire`] if the message ends before `offset + 8`.
pub fn decode_symbol(msg: &[u8], offset: usize) -> Result<Symbol, TypeError> {
    let raw: [u8; SYMBOL_LEN] = read_array(msg, offset)?;
    Ok(Symbol::from_wire(&raw))
}

/// Decode the side byte at `offset`.
///
/// # Errors
///
/// [`TypeError::Wire`] if `offset` is past the end of the message.
pub fn decode_side(msg: &[u8], offset: usize) -> Result<Side, TypeError> {
    Ok(Side::from_raw(read_u8(msg, offset)?))
}

/// Decode the event code byte at `offset`.
///
/// # Errors
///
/// [`TypeError::Wire`] if `offset` is past the end of the message.
pub fn decode_event_code(msg: &[u8], offset: usize) -> Result<EventCode, TypeError> {
    Ok(EventCode::from_raw(read_u8(msg, offset)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itch_wire::WireError;

    #[test]
    fn timestamp_at_offset() {
        let msg = [b'S', 0, 0, 0, 0, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8, b'A'];
        assert_eq!(decode_timestamp(&msg, 5).unwrap().as_nanos(), 1000);
    }

    #[test]
    fn timestamp_uses_all_six_bytes() {
        let msg = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        assert_eq!(decode_timestamp(&msg, 0).unwrap().as_nanos(), 0x0102_0304_0506);
    }

    #[test]
    fn short_message_is_an_error_not_a_panic() {
        let msg = [b'A'; 10];
        assert!(matches!(
            decode_symbol(&msg, 5),
            Err(TypeError::Wire(WireError::UnexpectedEof { offset: 5, .. }))
        ));
        assert!(decode_side(&msg, 10).is_err());
        assert!(decode_timestamp(&msg, 5).is_err());
    }

    #[test]
    fn symbol_and_side() {
        let mut msg = vec![0u8; 32];
        msg[19] = b'S';
        msg[24..32].copy_from_slice(b"QQQ     ");
        assert!(decode_side(&msg, 19).unwrap().is_sell());
        assert_eq!(decode_symbol(&msg, 24).unwrap(), "QQQ");
    }

    #[test]
    fn event_code_raw() {
        let msg = [0u8, b'Q'];
        assert_eq!(decode_event_code(&msg, 1).unwrap(), EventCode::START_OF_MARKET_HOURS);
    }
}

//! Property tests over arbitrary input.

use itch_decoder::{DatagramOutcome, DecodeOutcome, ItchDecoder};
use itch_encoder::message;
use itch_types::timestamp::{MAX_WIRE_NANOS, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};
use itch_types::{MessageType, Record, Symbol, Timestamp};
use itch_wire::byte_order::read_u64_be;
use itch_wire::{FrameEvent, split};
use proptest::prelude::*;

proptest! {
    #[test]
    fn split_yields_at_most_one_event(datagram in proptest::collection::vec(any::<u8>(), 0..512)) {
        let events: Vec<_> = split(&datagram).collect();
        prop_assert!(events.len() <= 1);

        if datagram.len() < 2 {
            prop_assert!(events.is_empty());
        } else {
            let declared = usize::from(u16::from_be_bytes([datagram[0], datagram[1]]));
            match events[0] {
                FrameEvent::Complete(frame) => {
                    prop_assert!(datagram.len() >= 2 + declared);
                    prop_assert_eq!(frame.bytes(), &datagram[2..2 + declared]);
                }
                FrameEvent::Incomplete { declared_length, available_length } => {
                    prop_assert!(datagram.len() < 2 + declared);
                    prop_assert_eq!(usize::from(declared_length), declared);
                    prop_assert_eq!(available_length, datagram.len() - 2);
                }
            }
        }
    }

    #[test]
    fn decode_never_panics(msg in proptest::collection::vec(any::<u8>(), 0..128)) {
        let outcome = ItchDecoder::classify(&msg);
        match (&outcome, msg.first()) {
            (DecodeOutcome::Empty, None) => {}
            (DecodeOutcome::Truncated { required, .. }, Some(_)) => {
                prop_assert!(msg.len() < *required);
            }
            (DecodeOutcome::Record(record), Some(&tag)) => {
                prop_assert_eq!(record.message_type(), MessageType::from_wire_id(tag));
            }
            _ => prop_assert!(false, "inconsistent outcome {:?}", outcome),
        }
        prop_assert_eq!(ItchDecoder::decode(&msg), outcome.into_record());
    }

    #[test]
    fn datagram_decoder_agrees_with_message_decoder(
        msg in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let dg = itch_encoder::datagram(&msg).unwrap();
        match ItchDecoder::decode_datagram(&dg) {
            DatagramOutcome::Frame { outcome, trailing_len, .. } => {
                prop_assert_eq!(trailing_len, 0);
                prop_assert_eq!(outcome, ItchDecoder::classify(&msg));
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn symbol_roundtrip(symbol in "([ -~]{0,7}[!-~])?") {
        // Printable ASCII with leading and inner spaces; only the last byte
        // is kept non-space, since trailing padding is stripped.
        let wire = Symbol::to_wire(&symbol).unwrap();
        let decoded = Symbol::from_wire(&wire);
        prop_assert_eq!(decoded.as_str(), symbol.as_str());
    }

    #[test]
    fn timestamp_components_match_arithmetic(ns in 0..=MAX_WIRE_NANOS) {
        let tod = Timestamp::from_nanos(ns).components();
        prop_assert_eq!(tod.hours, ns / NANOS_PER_HOUR);
        prop_assert_eq!(tod.minutes, ns % NANOS_PER_HOUR / NANOS_PER_MINUTE);
        prop_assert_eq!(tod.seconds, ns % NANOS_PER_MINUTE / NANOS_PER_SECOND);
        prop_assert_eq!(tod.millis, ns % NANOS_PER_SECOND / 1_000_000);

        let text = Timestamp::from_nanos(ns).to_string();
        let expected = format!(
            "{:02}:{:02}:{:02}.{:03}",
            tod.hours, tod.minutes, tod.seconds, tod.millis
        );
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn add_order_fields_survive_encoding(
        ns in 0..=MAX_WIRE_NANOS,
        side in any::<u8>(),
        symbol in "[A-Z]{1,8}",
    ) {
        let msg = message::add_order(ns, side, &symbol).unwrap();
        let Some(Record::AddOrder(order)) = ItchDecoder::decode(&msg) else {
            return Err(TestCaseError::fail("expected add order"));
        };
        prop_assert_eq!(order.timestamp.as_nanos(), ns);
        prop_assert_eq!(order.side.raw(), side);
        prop_assert_eq!(order.symbol.as_str(), symbol.as_str());
    }

    #[test]
    fn u64_reader_is_big_endian(value in any::<u64>()) {
        prop_assert_eq!(read_u64_be(&value.to_be_bytes(), 0).unwrap(), value);
    }
}

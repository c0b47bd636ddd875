use itch_types::{MessageType, Record};
use itch_wire::{Frame, FrameEvent, split};

/// What decoding one message produced.
///
/// Only [`Record`](DecodeOutcome::Record) carries output. The other two
/// variants say why nothing was emitted, so callers can count or log
/// them without the decoder taking a position on presentation.
///
/// ```text
/// ┌───────────┬───────────────────────────────────────────────────┐
/// │ Variant   │ When                                              │
/// ├───────────┼───────────────────────────────────────────────────┤
/// │ Record    │ known tag at or above its minimum length,         │
/// │           │ or any unknown tag (Record::Unknown)              │
/// │ Truncated │ known tag, message shorter than its minimum       │
/// │ Empty     │ zero-length message, no tag to dispatch on        │
/// └───────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    Record(Record),
    Truncated {
        message_type: MessageType,
        length: usize,
        required: usize,
    },
    Empty,
}

impl DecodeOutcome {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }
}

/// Result of running one datagram through splitter and decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatagramOutcome {
    /// Fewer than 2 bytes: no length prefix, nothing to report.
    NoFrame,

    /// Prefix larger than the datagram. The decoder was not invoked.
    Incomplete {
        declared_length: u16,
        available_length: usize,
    },

    /// A complete frame was decoded.
    Frame {
        declared_length: u16,
        trailing_len: usize,
        outcome: DecodeOutcome,
    },
}

/// Stateless message decoder.
///
/// All entry points are associated functions over borrowed bytes: nothing
/// is retained between calls, so the decoder composes with any reception
/// strategy (blocking socket loop, async capture reader, fuzzer) and is
/// safe to call from any number of threads.
///
/// ```rust
/// use itch_decoder::ItchDecoder;
/// use itch_types::Record;
///
/// let msg = [0x53, 0, 0, 0, 0, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8, 0x41];
/// let Some(Record::SystemEvent { timestamp, event_code }) = ItchDecoder::decode(&msg) else {
///     panic!("expected a system event");
/// };
/// assert_eq!(timestamp.as_nanos(), 1000);
/// assert_eq!(timestamp.to_string(), "00:00:00.000");
/// assert_eq!(event_code.raw(), b'A');
/// ```
pub struct ItchDecoder;

impl ItchDecoder {
    /// Decode one message into a record.
    ///
    /// Returns `None` for an empty message and for a known type that is
    /// shorter than its minimum length. Unknown tags produce
    /// `Record::Unknown`. Never panics.
    pub fn decode(msg: &[u8]) -> Option<Record> {
        Self::classify(msg).into_record()
    }

    /// Decode one message, keeping the reason when no record is produced.
    pub fn classify(msg: &[u8]) -> DecodeOutcome {
        let Some(&tag) = msg.first() else {
            return DecodeOutcome::Empty;
        };

        let message_type = MessageType::from_wire_id(tag);

        // Gate on the whole-message minimum so a short known message is
        // dropped as a unit, never partially populated.
        if let Some(required) = message_type.min_len()
            && msg.len() < required
        {
            return DecodeOutcome::Truncated {
                message_type,
                length: msg.len(),
                required,
            };
        }

        match Record::decode_body(message_type, msg) {
            Ok(record) => DecodeOutcome::Record(record),
            // Every field lies inside its type's minimum length, so this
            // arm is only reachable if the layout tables disagree.
            Err(_) => DecodeOutcome::Truncated {
                message_type,
                length: msg.len(),
                required: message_type.min_len().unwrap_or(msg.len()),
            },
        }
    }

    /// Decode the message inside a complete [`Frame`].
    pub fn decode_frame(frame: &Frame<'_>) -> DecodeOutcome {
        Self::classify(frame.bytes())
    }

    /// Split one datagram and decode its frame.
    ///
    /// Incomplete frames are reported and never reach the decoder.
    pub fn decode_datagram(datagram: &[u8]) -> DatagramOutcome {
        match split(datagram).next() {
            None => DatagramOutcome::NoFrame,
            Some(FrameEvent::Incomplete {
                declared_length,
                available_length,
            }) => DatagramOutcome::Incomplete {
                declared_length,
                available_length,
            },
            Some(FrameEvent::Complete(frame)) => DatagramOutcome::Frame {
                declared_length: frame.declared_length(),
                trailing_len: frame.trailing_len(),
                outcome: Self::decode_frame(&frame),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itch_encoder::message;
    use itch_types::{EventCode, Side, Timestamp};

    #[test]
    fn system_event_scenario() {
        let datagram = [
            0x00, 0x0C, 0x53, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8, 0x41,
        ];
        let outcome = ItchDecoder::decode_datagram(&datagram);
        assert_eq!(
            outcome,
            DatagramOutcome::Frame {
                declared_length: 12,
                trailing_len: 0,
                outcome: DecodeOutcome::Record(Record::SystemEvent {
                    timestamp: Timestamp::from_nanos(1000),
                    event_code: EventCode::from_raw(b'A'),
                }),
            }
        );
    }

    #[test]
    fn unknown_tag_carries_tag_and_length() {
        for len in [1, 5, 300] {
            let msg = message::padded(b'Z', len);
            assert_eq!(
                ItchDecoder::decode(&msg),
                Some(Record::Unknown {
                    tag: b'Z',
                    length: len
                })
            );
        }
    }

    #[test]
    fn empty_message_yields_nothing() {
        assert_eq!(ItchDecoder::classify(&[]), DecodeOutcome::Empty);
        assert_eq!(ItchDecoder::decode(&[]), None);
    }

    #[test]
    fn exact_minimum_decodes_one_short_does_not() {
        let messages = [
            message::system_event(5, b'Q').unwrap(),
            message::add_order(5, b'B', "AAPL").unwrap(),
            message::trade(5, b'S', "AAPL").unwrap(),
            message::stock_directory("AAPL").unwrap(),
            message::delete_order(5).unwrap(),
            message::replace_order(5, b'B', "AAPL").unwrap(),
            message::order_cancel(5).unwrap(),
        ];

        for msg in &messages {
            let message_type = MessageType::from_wire_id(msg[0]);
            assert_eq!(Some(msg.len()), message_type.min_len());

            let record = ItchDecoder::decode(msg)
                .unwrap_or_else(|| panic!("{message_type:?} at minimum length should decode"));
            assert_eq!(record.message_type(), message_type);

            let short = &msg[..msg.len() - 1];
            assert_eq!(ItchDecoder::decode(short), None);
            assert_eq!(
                ItchDecoder::classify(short),
                DecodeOutcome::Truncated {
                    message_type,
                    length: msg.len() - 1,
                    required: msg.len(),
                }
            );
        }
    }

    #[test]
    fn add_order_symbol_is_trimmed() {
        let msg = message::add_order(0, b'B', "AAPL").unwrap();
        assert_eq!(&msg[24..32], b"AAPL    ");
        let Some(Record::AddOrder(order)) = ItchDecoder::decode(&msg) else {
            panic!("expected add order");
        };
        assert_eq!(order.symbol, "AAPL");
        assert_eq!(order.side, Side::BUY);
    }

    #[test]
    fn longer_than_minimum_still_decodes() {
        let mut msg = message::order_cancel(77).unwrap();
        msg.extend_from_slice(&[0xAA; 10]);
        assert_eq!(
            ItchDecoder::decode(&msg),
            Some(Record::OrderCancel {
                timestamp: Timestamp::from_nanos(77)
            })
        );
    }

    #[test]
    fn incomplete_datagram_skips_decoder() {
        let datagram = [0x00, 0x24, b'A', 0x00, 0x00];
        assert_eq!(
            ItchDecoder::decode_datagram(&datagram),
            DatagramOutcome::Incomplete {
                declared_length: 36,
                available_length: 3
            }
        );
    }

    #[test]
    fn short_datagram_has_no_frame() {
        assert_eq!(ItchDecoder::decode_datagram(&[]), DatagramOutcome::NoFrame);
        assert_eq!(ItchDecoder::decode_datagram(&[0x00]), DatagramOutcome::NoFrame);
    }

    #[test]
    fn zero_length_frame_is_empty_outcome() {
        assert_eq!(
            ItchDecoder::decode_datagram(&[0x00, 0x00, 0xFF]),
            DatagramOutcome::Frame {
                declared_length: 0,
                trailing_len: 1,
                outcome: DecodeOutcome::Empty,
            }
        );
    }

    #[test]
    fn timestamp_wider_than_32_bits() {
        // 10:00:00 is 3.6e13 ns, well past u32::MAX.
        let nanos = 36_000_000_000_000;
        let msg = message::delete_order(nanos).unwrap();
        let record = ItchDecoder::decode(&msg).unwrap();
        assert_eq!(record.timestamp().unwrap().as_nanos(), nanos);
        assert_eq!(record.timestamp().unwrap().to_string(), "10:00:00.000");
    }
}

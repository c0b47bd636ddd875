#![no_main]

use arbitrary::Arbitrary;
use itch_decoder::ItchDecoder;
use itch_encoder::message;
use itch_types::Record;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzMessage {
    SystemEvent { nanos: u64, code: u8 },
    AddOrder { nanos: u64, side: u8, symbol: String },
    Trade { nanos: u64, side: u8, symbol: String },
    ReplaceOrder { nanos: u64, side: u8, symbol: String },
    StockDirectory { symbol: String },
    DeleteOrder { nanos: u64 },
    OrderCancel { nanos: u64 },
}

// Fuzz target: every message the encoder accepts decodes back to the
// same fields.
fuzz_target!(|input: FuzzMessage| {
    let encoded = match &input {
        FuzzMessage::SystemEvent { nanos, code } => message::system_event(*nanos, *code),
        FuzzMessage::AddOrder { nanos, side, symbol } => message::add_order(*nanos, *side, symbol),
        FuzzMessage::Trade { nanos, side, symbol } => message::trade(*nanos, *side, symbol),
        FuzzMessage::ReplaceOrder { nanos, side, symbol } => {
            message::replace_order(*nanos, *side, symbol)
        }
        FuzzMessage::StockDirectory { symbol } => message::stock_directory(symbol),
        FuzzMessage::DeleteOrder { nanos } => message::delete_order(*nanos),
        FuzzMessage::OrderCancel { nanos } => message::order_cancel(*nanos),
    };
    let Ok(msg) = encoded else { return };

    let record = ItchDecoder::decode(&msg).expect("encoded messages meet the minimum length");
    match (&input, &record) {
        (FuzzMessage::SystemEvent { nanos, code }, Record::SystemEvent { timestamp, event_code }) => {
            assert_eq!(timestamp.as_nanos(), *nanos);
            assert_eq!(event_code.raw(), *code);
        }
        (FuzzMessage::AddOrder { nanos, side, symbol }, Record::AddOrder(order))
        | (FuzzMessage::Trade { nanos, side, symbol }, Record::Trade(order))
        | (FuzzMessage::ReplaceOrder { nanos, side, symbol }, Record::ReplaceOrder(order)) => {
            assert_eq!(order.timestamp.as_nanos(), *nanos);
            assert_eq!(order.side.raw(), *side);
            assert_eq!(order.symbol.as_str(), symbol.trim_end_matches(' '));
        }
        (FuzzMessage::StockDirectory { symbol }, Record::StockDirectory { symbol: decoded }) => {
            assert_eq!(decoded.as_str(), symbol.trim_end_matches(' '));
        }
        (FuzzMessage::DeleteOrder { nanos }, Record::DeleteOrder { timestamp })
        | (FuzzMessage::OrderCancel { nanos }, Record::OrderCancel { timestamp }) => {
            assert_eq!(timestamp.as_nanos(), *nanos);
        }
        _ => panic!("type changed in roundtrip: {input:?} -> {record:?}"),
    }
});

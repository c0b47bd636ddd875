//! Shared fixtures for the ITCH integration tests, benches, and the golden
//! capture generator.
//!
//! The session fixture is a short, deterministic trading day: directory
//! entries, the market open, a handful of order events, one unknown tag,
//! one truncated message, and the close. `tests/golden/session.itch` is
//! this fixture serialized as a capture file.

use itch_encoder::ItchEncoder;
use itch_encoder::message;

/// 09:30:00.000 in nanoseconds since midnight.
pub const MARKET_OPEN_NS: u64 = 34_200_000_000_000;

/// 16:00:00.000 in nanoseconds since midnight.
pub const MARKET_CLOSE_NS: u64 = 57_600_000_000_000;

/// Path of the committed golden capture, relative to this crate.
pub const GOLDEN_SESSION: &str = "tests/golden/session.itch";

const MS: u64 = 1_000_000;

/// Build the session fixture.
///
/// ```text
///  #  tag  time            detail
///  0  S    00:00:00.000    event O
///  1  L    -               AAPL
///  2  L    -               MSFT
///  3  S    09:30:00.000    event Q
///  4  A    09:30:00.125    AAPL B
///  5  A    09:30:00.250    MSFT S
///  6  P    09:30:01.000    AAPL S
///  7  U    09:30:02.500    MSFT B
///  8  X    09:30:03.000
///  9  D    09:30:04.000
/// 10  Z    -               5 bytes, unknown
/// 11  A    -               10 bytes, truncated
/// 12  S    16:00:00.000    event M
/// 13  S    16:00:00.001    event C
/// ```
pub fn session() -> ItchEncoder {
    let mut enc = ItchEncoder::new();
    enc.add_system_event(0, b'O')
        .add_stock_directory("AAPL")
        .add_stock_directory("MSFT")
        .add_system_event(MARKET_OPEN_NS, b'Q')
        .add_add_order(MARKET_OPEN_NS + 125 * MS, b'B', "AAPL")
        .add_add_order(MARKET_OPEN_NS + 250 * MS, b'S', "MSFT")
        .add_trade(MARKET_OPEN_NS + 1000 * MS, b'S', "AAPL")
        .add_replace_order(MARKET_OPEN_NS + 2500 * MS, b'B', "MSFT")
        .add_order_cancel(MARKET_OPEN_NS + 3000 * MS)
        .add_delete_order(MARKET_OPEN_NS + 4000 * MS)
        .add_raw(b"Zjunk")
        .add_raw(&message::padded(b'A', 10))
        .add_system_event(MARKET_CLOSE_NS, b'M')
        .add_system_event(MARKET_CLOSE_NS + MS, b'C');
    enc
}

/// The session fixture as one datagram per message.
pub fn session_datagrams() -> Vec<Vec<u8>> {
    session()
        .datagrams()
        .unwrap_or_else(|e| panic!("session fixture failed to encode: {e}"))
}

/// The session fixture as a capture stream.
pub fn session_capture() -> Vec<u8> {
    session()
        .encode_capture()
        .unwrap_or_else(|e| panic!("session fixture failed to encode: {e}"))
}

/// A long synthetic feed for benchmarks: `n` messages cycling through
/// every recognized type.
pub fn synthetic_feed(n: usize) -> ItchEncoder {
    const SYMBOLS: [&str; 4] = ["AAPL", "MSFT", "GOOG", "NVDA"];
    let mut enc = ItchEncoder::new();
    for i in 0..n {
        let ts = MARKET_OPEN_NS + i as u64 * 1000;
        let sym = SYMBOLS[i % SYMBOLS.len()];
        let side = if i % 2 == 0 { b'B' } else { b'S' };
        match i % 7 {
            0 => enc.add_add_order(ts, side, sym),
            1 => enc.add_trade(ts, side, sym),
            2 => enc.add_replace_order(ts, side, sym),
            3 => enc.add_delete_order(ts),
            4 => enc.add_order_cancel(ts),
            5 => enc.add_stock_directory(sym),
            _ => enc.add_system_event(ts, b'Q'),
        };
    }
    enc
}

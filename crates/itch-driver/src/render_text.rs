use itch_types::{OrderEvent, Record};

/// Console renderer: one human-readable line per record.
///
/// Example output:
///
/// ```text
/// System Event - Time: 00:00:00.000, Event: O
/// Stock Directory - Stock: AAPL
/// Add Order - Time: 09:30:00.000, Stock: AAPL, Side: B
/// Trade - Time: 09:30:00.125, Stock: AAPL, Side: S
/// Delete Order - Time: 09:30:01.000
/// Unknown message type: Z (length: 5)
/// ```
pub struct TextRenderer;

impl TextRenderer {
    pub fn render(record: &Record) -> String {
        match record {
            Record::SystemEvent {
                timestamp,
                event_code,
            } => format!("System Event - Time: {timestamp}, Event: {event_code}"),
            Record::AddOrder(order) => Self::order_line("Add Order", order),
            Record::Trade(order) => Self::order_line("Trade", order),
            Record::ReplaceOrder(order) => Self::order_line("Replace Order", order),
            Record::StockDirectory { symbol } => format!("Stock Directory - Stock: {symbol}"),
            Record::DeleteOrder { timestamp } => format!("Delete Order - Time: {timestamp}"),
            Record::OrderCancel { timestamp } => format!("Order Cancel - Time: {timestamp}"),
            Record::Unknown { tag, length } => {
                format!("Unknown message type: {} (length: {length})", char::from(*tag))
            }
        }
    }

    /// `Raw: <hex>` echo line for a message.
    pub fn raw_line(msg: &[u8]) -> String {
        format!("Raw: {}", hex::encode(msg))
    }

    fn order_line(name: &str, order: &OrderEvent) -> String {
        format!(
            "{name} - Time: {}, Stock: {}, Side: {}",
            order.timestamp, order.symbol, order.side
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itch_types::{EventCode, Side, Symbol, Timestamp};

    fn order(nanos: u64, side: Side, symbol: &[u8; 8]) -> OrderEvent {
        OrderEvent {
            timestamp: Timestamp::from_nanos(nanos),
            side,
            symbol: Symbol::from_wire(symbol),
        }
    }

    #[test]
    fn system_event_line() {
        let record = Record::SystemEvent {
            timestamp: Timestamp::from_nanos(1000),
            event_code: EventCode::from_raw(b'A'),
        };
        assert_eq!(
            TextRenderer::render(&record),
            "System Event - Time: 00:00:00.000, Event: A"
        );
    }

    #[test]
    fn order_lines_share_a_shape() {
        let o = order(34_200_000_000_000, Side::BUY, b"AAPL    ");
        assert_eq!(
            TextRenderer::render(&Record::AddOrder(o.clone())),
            "Add Order - Time: 09:30:00.000, Stock: AAPL, Side: B"
        );
        assert_eq!(
            TextRenderer::render(&Record::Trade(o.clone())),
            "Trade - Time: 09:30:00.000, Stock: AAPL, Side: B"
        );
        assert_eq!(
            TextRenderer::render(&Record::ReplaceOrder(o)),
            "Replace Order - Time: 09:30:00.000, Stock: AAPL, Side: B"
        );
    }

    #[test]
    fn timestamp_only_lines() {
        let ts = Timestamp::from_nanos(3_723_004_000_000);
        assert_eq!(
            TextRenderer::render(&Record::DeleteOrder { timestamp: ts }),
            "Delete Order - Time: 01:02:03.004"
        );
        assert_eq!(
            TextRenderer::render(&Record::OrderCancel { timestamp: ts }),
            "Order Cancel - Time: 01:02:03.004"
        );
    }

    #[test]
    fn directory_and_unknown() {
        let dir = Record::StockDirectory {
            symbol: Symbol::from_wire(b"MSFT    "),
        };
        assert_eq!(TextRenderer::render(&dir), "Stock Directory - Stock: MSFT");
        assert_eq!(
            TextRenderer::render(&Record::Unknown { tag: b'Z', length: 5 }),
            "Unknown message type: Z (length: 5)"
        );
    }

    #[test]
    fn raw_line_is_lowercase_hex() {
        assert_eq!(TextRenderer::raw_line(&[0x53, 0x00, 0xAB]), "Raw: 5300ab");
    }
}

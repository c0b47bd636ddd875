use itch_types::{OrderEvent, Record, Timestamp};
use serde_json::{Map, Value, json};

use crate::error::DriverError;

/// JSON renderer: one compact object per record, suitable for piping into
/// `jq` or a log shipper.
///
/// Every object has a `type` key. Timestamps appear twice: raw nanoseconds
/// under `timestamp` and the formatted clock time under `time`.
///
/// ```text
/// {"type":"add_order","timestamp":34200000000000,"time":"09:30:00.000","side":"B","symbol":"AAPL"}
/// {"type":"unknown","tag":"Z","length":5}
/// ```
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a record as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Json` if serialization fails.
    pub fn render(record: &Record) -> Result<String, DriverError> {
        Ok(serde_json::to_string(&Self::to_value(record))?)
    }

    pub fn to_value(record: &Record) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!(type_key(record)));

        match record {
            Record::SystemEvent {
                timestamp,
                event_code,
            } => {
                insert_timestamp(&mut obj, *timestamp);
                obj.insert(
                    "event_code".into(),
                    json!(char::from(event_code.raw()).to_string()),
                );
                if let Some(desc) = event_code.description() {
                    obj.insert("event".into(), json!(desc));
                }
            }
            Record::AddOrder(order) | Record::Trade(order) | Record::ReplaceOrder(order) => {
                insert_order(&mut obj, order);
            }
            Record::StockDirectory { symbol } => {
                obj.insert("symbol".into(), json!(symbol.as_str()));
            }
            Record::DeleteOrder { timestamp } | Record::OrderCancel { timestamp } => {
                insert_timestamp(&mut obj, *timestamp);
            }
            Record::Unknown { tag, length } => {
                obj.insert("tag".into(), json!(char::from(*tag).to_string()));
                obj.insert("length".into(), json!(length));
            }
        }

        Value::Object(obj)
    }
}

fn type_key(record: &Record) -> &'static str {
    match record {
        Record::SystemEvent { .. } => "system_event",
        Record::AddOrder(_) => "add_order",
        Record::Trade(_) => "trade",
        Record::StockDirectory { .. } => "stock_directory",
        Record::DeleteOrder { .. } => "delete_order",
        Record::ReplaceOrder(_) => "replace_order",
        Record::OrderCancel { .. } => "order_cancel",
        Record::Unknown { .. } => "unknown",
    }
}

fn insert_timestamp(obj: &mut Map<String, Value>, ts: Timestamp) {
    obj.insert("timestamp".into(), json!(ts.as_nanos()));
    obj.insert("time".into(), json!(ts.to_string()));
}

fn insert_order(obj: &mut Map<String, Value>, order: &OrderEvent) {
    insert_timestamp(obj, order.timestamp);
    obj.insert("side".into(), json!(order.side.to_string()));
    obj.insert("symbol".into(), json!(order.symbol.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use itch_types::{EventCode, Side, Symbol};

    #[test]
    fn add_order_object() {
        let record = Record::AddOrder(OrderEvent {
            timestamp: Timestamp::from_nanos(34_200_000_000_000),
            side: Side::BUY,
            symbol: Symbol::from_wire(b"AAPL    "),
        });
        let value = JsonRenderer::to_value(&record);
        assert_eq!(value["type"], "add_order");
        assert_eq!(value["timestamp"], 34_200_000_000_000_u64);
        assert_eq!(value["time"], "09:30:00.000");
        assert_eq!(value["side"], "B");
        assert_eq!(value["symbol"], "AAPL");
    }

    #[test]
    fn system_event_carries_description_when_known() {
        let known = Record::SystemEvent {
            timestamp: Timestamp::from_nanos(0),
            event_code: EventCode::START_OF_MESSAGES,
        };
        let value = JsonRenderer::to_value(&known);
        assert_eq!(value["event_code"], "O");
        assert_eq!(value["event"], "Start of Messages");

        let odd = Record::SystemEvent {
            timestamp: Timestamp::from_nanos(0),
            event_code: EventCode::from_raw(b'A'),
        };
        assert!(JsonRenderer::to_value(&odd).get("event").is_none());
    }

    #[test]
    fn render_is_single_line() {
        let text = JsonRenderer::render(&Record::Unknown { tag: b'Z', length: 5 }).unwrap();
        assert_eq!(text, r#"{"type":"unknown","tag":"Z","length":5}"#);
    }
}

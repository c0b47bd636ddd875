use itch_types::Record;

/// Default number of messages between throughput reports.
pub const DEFAULT_STATS_INTERVAL: u64 = 1000;

/// Configuration for the feed driver.
///
/// Controls how decoded records are presented and which of them are
/// presented at all. Counting is not affected by any of these settings:
/// every complete frame counts toward throughput, shown or not.
///
/// ```text
/// ┌────────────────┬────────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                            │
/// ├────────────────┼────────────────────────────────────────────────────┤
/// │ mode           │ Text console lines or one JSON object per record   │
/// │ symbols        │ Optional allowlist of symbols to display           │
/// │ show_raw       │ Echo each complete message as hex before decoding  │
/// │ stats_interval │ Report throughput every N messages (0 = never)     │
/// └────────────────┴────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub mode: OutputMode,

    /// Symbol filter. When set, records that carry a symbol are shown only
    /// if the symbol is listed, and records without a symbol are hidden.
    pub symbols: Option<Vec<String>>,

    pub show_raw: bool,

    pub stats_interval: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            symbols: None,
            show_raw: false,
            stats_interval: DEFAULT_STATS_INTERVAL,
        }
    }
}

impl DriverConfig {
    /// Whether `record` passes the symbol filter.
    pub fn accepts(&self, record: &Record) -> bool {
        let Some(ref symbols) = self.symbols else {
            return true;
        };
        record
            .symbol()
            .is_some_and(|s| symbols.iter().any(|wanted| s == wanted.as_str()))
    }
}

/// Output format for rendered records.
///
/// ```text
/// ┌──────┬────────────────────────────────────────────────────────────┐
/// │ Mode │ Example                                                    │
/// ├──────┼────────────────────────────────────────────────────────────┤
/// │ Text │ Add Order - Time: 09:30:00.000, Stock: AAPL, Side: B       │
/// │ Json │ {"type":"add_order","timestamp":..., "symbol":"AAPL",...}  │
/// └──────┴────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

use std::fmt;

/// Buy/sell indicator, passed through exactly as it appeared on the wire.
///
/// The decoder never validates the byte: a value other than `'B'` or `'S'`
/// is kept as-is and printed as the corresponding character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Side(u8);

impl Side {
    pub const BUY: Self = Self(b'B');
    pub const SELL: Self = Self(b'S');

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_buy(self) -> bool {
        self.0 == Self::BUY.0
    }

    pub const fn is_sell(self) -> bool {
        self.0 == Self::SELL.0
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.0))
    }
}

/// System event code, passed through unvalidated.
///
/// ```text
/// ┌──────┬─────────────────────────────┐
/// │ Code │ Meaning                     │
/// ├──────┼─────────────────────────────┤
/// │ 'O'  │ Start of messages           │
/// │ 'S'  │ Start of system hours       │
/// │ 'Q'  │ Start of market hours       │
/// │ 'M'  │ End of market hours         │
/// │ 'E'  │ End of system hours         │
/// │ 'C'  │ End of messages             │
/// └──────┴─────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventCode(u8);

impl EventCode {
    pub const START_OF_MESSAGES: Self = Self(b'O');
    pub const START_OF_SYSTEM_HOURS: Self = Self(b'S');
    pub const START_OF_MARKET_HOURS: Self = Self(b'Q');
    pub const END_OF_MARKET_HOURS: Self = Self(b'M');
    pub const END_OF_SYSTEM_HOURS: Self = Self(b'E');
    pub const END_OF_MESSAGES: Self = Self(b'C');

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Description for the standard codes, `None` for anything else.
    pub fn description(self) -> Option<&'static str> {
        match self.0 {
            b'O' => Some("Start of Messages"),
            b'S' => Some("Start of System Hours"),
            b'Q' => Some("Start of Market Hours"),
            b'M' => Some("End of Market Hours"),
            b'E' => Some("End of System Hours"),
            b'C' => Some("End of Messages"),
            _ => None,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.0))
    }
}

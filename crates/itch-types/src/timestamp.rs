use std::fmt;

pub const NANOS_PER_MILLI: u64 = 1_000_000;
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u64 = 60_000_000_000;
pub const NANOS_PER_HOUR: u64 = 3_600_000_000_000;

/// Largest value the 6-byte wire field can carry.
pub const MAX_WIRE_NANOS: u64 = (1 << 48) - 1;

/// Nanoseconds since midnight.
///
/// The value is kept at full `u64` width even though the wire field is 48
/// bits, so a corrupt or misaligned decode stays visible instead of being
/// masked away.
///
/// `Display` renders `HH:MM:SS.mmm`. Hours are not wrapped at 24: a value
/// past the end of the day prints as e.g. `25:00:00.000`, which signals an
/// upstream problem rather than hiding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

/// A timestamp split into clock components. Milliseconds are truncated,
/// never rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Whether the value fits the 48-bit wire field.
    pub const fn fits_wire(self) -> bool {
        self.0 <= MAX_WIRE_NANOS
    }

    pub fn components(self) -> TimeOfDay {
        let hours = self.0 / NANOS_PER_HOUR;
        let rem = self.0 % NANOS_PER_HOUR;
        let minutes = rem / NANOS_PER_MINUTE;
        let rem = rem % NANOS_PER_MINUTE;
        let seconds = rem / NANOS_PER_SECOND;
        let millis = (rem % NANOS_PER_SECOND) / NANOS_PER_MILLI;

        TimeOfDay {
            hours,
            minutes,
            seconds,
            millis,
        }
    }
}

impl From<u64> for Timestamp {
    fn from(nanos: u64) -> Self {
        Self(nanos)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TimeOfDay {
            hours,
            minutes,
            seconds,
            millis,
        } = self.components();
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

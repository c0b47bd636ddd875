use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use itch_decoder::DecodeOutcome;
use itch_types::MessageType;

// ── Throughput ────────────────────────────────────────────────────────

/// Message counter with periodic rate reports.
///
/// Time is passed in by the caller rather than read from the clock, so
/// the same type drives a live socket loop and deterministic tests.
///
/// ```text
///   record(now) ─▶ count += 1 ─▶ count % interval == 0 ? ─▶ Some(report)
///                                                     └──▶ None
/// ```
#[derive(Clone, Debug)]
pub struct ThroughputStats {
    started: Instant,
    messages: u64,
    interval: u64,
}

impl ThroughputStats {
    /// Start counting at `started`. An `interval` of zero disables
    /// periodic reports.
    pub fn new(started: Instant, interval: u64) -> Self {
        Self {
            started,
            messages: 0,
            interval,
        }
    }

    /// Count one message. Returns a report when the count reaches a
    /// multiple of the interval.
    pub fn record(&mut self, now: Instant) -> Option<ThroughputReport> {
        self.messages += 1;
        if self.interval > 0 && self.messages % self.interval == 0 {
            Some(self.report(now))
        } else {
            None
        }
    }

    pub fn report(&self, now: Instant) -> ThroughputReport {
        ThroughputReport {
            messages: self.messages,
            elapsed: now.saturating_duration_since(self.started),
        }
    }

    pub fn finish(&self, now: Instant) -> FinalStats {
        FinalStats(self.report(now))
    }

    pub fn messages(&self) -> u64 {
        self.messages
    }
}

/// Snapshot of the counter at one point in time.
///
/// Displays as `Processed N messages, R msg/sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThroughputReport {
    pub messages: u64,
    pub elapsed: Duration,
}

impl ThroughputReport {
    /// Messages per second. Zero when no time has elapsed.
    #[allow(clippy::cast_precision_loss)]
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.messages as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for ThroughputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} messages, {:.1} msg/sec",
            self.messages,
            self.rate()
        )
    }
}

/// End-of-run summary line.
///
/// Displays as `Final stats: N messages in Tms (R msg/sec)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalStats(pub ThroughputReport);

impl fmt::Display for FinalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.0;
        write!(
            f,
            "Final stats: {} messages in {}ms ({:.1} msg/sec)",
            r.messages,
            r.elapsed.as_millis(),
            r.rate()
        )
    }
}

// ── Per-type summary ──────────────────────────────────────────────────

/// Count and byte total for one message tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeTally {
    pub messages: u64,
    pub bytes: u64,
}

/// Feed composition: per-tag counts plus the frames that produced no
/// record.
///
/// Tags are kept in byte order so reports are stable from run to run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedSummary {
    by_tag: BTreeMap<u8, TypeTally>,
    pub truncated: u64,
    pub empty: u64,
    pub incomplete: u64,
}

impl FeedSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one complete message of `len` bytes.
    pub fn observe(&mut self, len: usize, outcome: &DecodeOutcome) {
        let tag = match outcome {
            DecodeOutcome::Record(record) => record.message_type().wire_id(),
            DecodeOutcome::Truncated { message_type, .. } => {
                self.truncated += 1;
                message_type.wire_id()
            }
            DecodeOutcome::Empty => {
                self.empty += 1;
                return;
            }
        };
        let tally = self.by_tag.entry(tag).or_default();
        tally.messages += 1;
        tally.bytes += len as u64;
    }

    /// Account for a frame whose declared length exceeded the datagram.
    pub fn observe_incomplete(&mut self) {
        self.incomplete += 1;
    }

    /// Per-type tallies in tag order.
    pub fn by_type(&self) -> impl Iterator<Item = (MessageType, TypeTally)> + '_ {
        self.by_tag
            .iter()
            .map(|(&tag, &tally)| (MessageType::from_wire_id(tag), tally))
    }

    pub fn tally(&self, message_type: MessageType) -> TypeTally {
        self.by_tag
            .get(&message_type.wire_id())
            .copied()
            .unwrap_or_default()
    }

    /// Complete messages seen, including empty and truncated ones.
    pub fn total_messages(&self) -> u64 {
        self.by_tag.values().map(|t| t.messages).sum::<u64>() + self.empty
    }

    pub fn total_bytes(&self) -> u64 {
        self.by_tag.values().map(|t| t.bytes).sum()
    }
}

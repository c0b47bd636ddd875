use std::time::Instant;

use itch_decoder::{DecodeOutcome, ItchDecoder};
use itch_types::Record;
use itch_wire::{FrameEvent, split};
use tracing::{debug, warn};

use crate::config::{DriverConfig, OutputMode};
use crate::error::DriverError;
use crate::render_json::JsonRenderer;
use crate::render_text::TextRenderer;
use crate::stats::{FeedSummary, FinalStats, ThroughputReport, ThroughputStats};

/// What one datagram (or capture record) produced for the console.
///
/// `lines` go to stdout in order. `report` is set when this message
/// crossed a stats interval boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriverOutput {
    pub lines: Vec<String>,
    pub report: Option<ThroughputReport>,
}

/// Feed driver: runs splitter, decoder, filter and renderer for each
/// datagram and keeps the counters.
///
/// The decoding core is stateless; everything that accumulates (message
/// count, throughput clock, per-type summary) lives here.
///
/// ```text
/// datagram ──▶ split ──▶ Incomplete ──▶ warn!, summary.incomplete
///                   └──▶ Complete ──▶ [Raw: hex] ──▶ classify
///                                                       │
///                         Record ──▶ symbol filter ──▶ render (text | json)
///                         Truncated / Empty ──▶ debug!
///                                                       │
///                                          count ──▶ ThroughputReport?
/// ```
///
/// Every complete message is counted, whether or not it decoded to a
/// record and whether or not the filter let it through.
pub struct FeedDriver {
    config: DriverConfig,
    stats: ThroughputStats,
    summary: FeedSummary,
}

impl FeedDriver {
    pub fn new(config: DriverConfig, started: Instant) -> Self {
        let stats = ThroughputStats::new(started, config.stats_interval);
        Self {
            config,
            stats,
            summary: FeedSummary::new(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Process one received datagram.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Json` if JSON rendering fails.
    pub fn on_datagram(
        &mut self,
        datagram: &[u8],
        now: Instant,
    ) -> Result<DriverOutput, DriverError> {
        match split(datagram).next() {
            None => {
                debug!(len = datagram.len(), "datagram too short for a length prefix");
                Ok(DriverOutput::default())
            }
            Some(FrameEvent::Incomplete {
                declared_length,
                available_length,
            }) => {
                warn!(declared_length, available_length, "incomplete message");
                self.summary.observe_incomplete();
                Ok(DriverOutput::default())
            }
            Some(FrameEvent::Complete(frame)) => {
                if frame.trailing_len() > 0 {
                    debug!(
                        trailing = frame.trailing_len(),
                        "ignoring bytes after the first message"
                    );
                }
                self.on_message(frame.bytes(), now)
            }
        }
    }

    /// Process one complete message, already stripped of its length
    /// prefix. Capture-file readers call this directly.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Json` if JSON rendering fails.
    pub fn on_message(&mut self, msg: &[u8], now: Instant) -> Result<DriverOutput, DriverError> {
        let mut out = DriverOutput::default();

        if self.config.show_raw {
            out.lines.push(TextRenderer::raw_line(msg));
        }

        let outcome = ItchDecoder::classify(msg);
        self.summary.observe(msg.len(), &outcome);

        match outcome {
            DecodeOutcome::Record(record) => {
                if let Record::Unknown { tag, length } = record {
                    debug!(tag = %char::from(tag), length, "unknown message type");
                }
                if self.config.accepts(&record) {
                    out.lines.push(self.render(&record)?);
                }
            }
            DecodeOutcome::Truncated {
                message_type,
                length,
                required,
            } => {
                debug!(
                    message_type = message_type.name(),
                    length, required, "message shorter than its type's minimum"
                );
            }
            DecodeOutcome::Empty => debug!("zero-length message"),
        }

        out.report = self.stats.record(now);
        Ok(out)
    }

    fn render(&self, record: &Record) -> Result<String, DriverError> {
        match self.config.mode {
            OutputMode::Text => Ok(TextRenderer::render(record)),
            OutputMode::Json => JsonRenderer::render(record),
        }
    }

    /// Complete messages processed so far.
    pub fn messages(&self) -> u64 {
        self.stats.messages()
    }

    pub fn summary(&self) -> &FeedSummary {
        &self.summary
    }

    pub fn finish(&self, now: Instant) -> FinalStats {
        self.stats.finish(now)
    }
}

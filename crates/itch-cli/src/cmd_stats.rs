/// Implementation of `itch stats`.
///
/// Reads a capture file and prints how many messages of each type it
/// holds and how many bytes they take.
///
/// # Example output
///
/// ```text
/// File:     /tmp/feed.itch  (1214 bytes)
/// Messages: 31 total
///
/// Type                   Count   Bytes
/// ────────────────────────────────────
/// Add Order (A)             10     360
/// Delete Order (D)           4      76
/// Stock Directory (L)        3      66
/// Trade (P)                  6     264
/// System Event (S)           2      24
/// Replace Order (U)          2      70
/// Order Cancel (X)           3      69
/// Unknown (Z)                1       5
/// ────────────────────────────────────
/// Total                     31     934
///
/// Truncated: 0   Empty: 0
/// ```
use std::time::Instant;

use anyhow::{Context, Result};
use itch_decoder::{DecodeError, StreamingDecoder};
use itch_driver::FeedSummary;
use itch_types::MessageType;
use tracing::warn;

use crate::{StatsArgs, runtime};

/// Run the `itch stats` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn run(args: &StatsArgs) -> Result<()> {
    let summary = runtime()?.block_on(collect(args))?;

    let file_size = std::fs::metadata(&args.file)
        .with_context(|| format!("cannot stat {}", args.file.display()))?
        .len();

    println!("File:     {}  ({file_size} bytes)", args.file.display());
    println!("Messages: {} total", summary.total_messages());
    println!();

    let sep = "─".repeat(36);
    println!("{:<22}{:>6}{:>8}", "Type", "Count", "Bytes");
    println!("{sep}");
    for (message_type, tally) in summary.by_type() {
        let label = type_label(message_type);
        println!("{label:<22}{:>6}{:>8}", tally.messages, tally.bytes);
    }
    println!("{sep}");
    println!(
        "{:<22}{:>6}{:>8}",
        "Total",
        summary.total_messages(),
        summary.total_bytes()
    );
    println!();
    println!("Truncated: {}   Empty: {}", summary.truncated, summary.empty);

    Ok(())
}

async fn collect(args: &StatsArgs) -> Result<FeedSummary> {
    let file = tokio::fs::File::open(&args.file)
        .await
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let started = Instant::now();
    let mut summary = FeedSummary::new();
    let mut stream = StreamingDecoder::new(tokio::io::BufReader::new(file));

    while let Some(item) = stream.next().await {
        match item {
            Ok(msg) => summary.observe(msg.length, &msg.outcome),
            Err(DecodeError::TruncatedStream {
                offset,
                needed,
                available,
            }) => {
                warn!(offset, needed, available, "incomplete message at end of capture");
                break;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed reading {}", args.file.display()));
            }
        }
    }

    tracing::debug!(elapsed = ?started.elapsed(), "capture scanned");
    Ok(summary)
}

fn type_label(message_type: MessageType) -> String {
    format!(
        "{} ({})",
        message_type.name(),
        char::from(message_type.wire_id())
    )
}

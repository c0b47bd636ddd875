/// Implementation of `itch decode`.
///
/// Reads a capture file offline and prints every record exactly as
/// `itch listen` would have printed it live. Periodic throughput lines
/// are suppressed; the final count goes to the log.
use std::time::Instant;

use anyhow::{Context, Result};
use itch_decoder::{DecodeError, StreamingDecoder};
use itch_driver::FeedDriver;
use tracing::{info, warn};

use crate::{DecodeArgs, emit};

/// Run the `itch decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record cannot be
/// rendered.
pub fn run(args: &DecodeArgs) -> Result<()> {
    crate::runtime()?.block_on(decode(args))
}

async fn decode(args: &DecodeArgs) -> Result<()> {
    let file = tokio::fs::File::open(&args.file)
        .await
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let started = Instant::now();
    let mut driver = FeedDriver::new(args.output.driver_config(0), started);
    let mut stream = StreamingDecoder::new(tokio::io::BufReader::new(file));

    while let Some(item) = stream.next_frame().await {
        if args.limit.is_some_and(|limit| driver.messages() >= limit) {
            break;
        }

        match item {
            Ok(frame) => {
                let out = driver.on_message(frame.bytes, Instant::now())?;
                emit(&out);
            }
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

    let done = driver.finish(Instant::now());
    info!(
        messages = done.0.messages,
        bytes = stream.position(),
        "capture decoded"
    );
    Ok(())
}

/// Implementation of `itch replay`.
///
/// Streams a capture file and multicasts each `[u16 len][message]` record
/// as one datagram, pacing sends so a receiver on the same host keeps up.
///
/// ```text
/// capture ──▶ StreamingDecoder::next_frame ──▶ [len][msg] ──▶ send_to(group:port)
///                                                              sleep(pace-us)
/// ```
///
/// A truncated final record is logged and ends the replay; the records
/// before it have already been sent.
use std::time::Duration;

use anyhow::{Context, Result};
use itch_decoder::{DecodeError, StreamingDecoder};
use itch_wire::write_frame;
use tokio::net::UdpSocket;
use tracing::{info, warn};

use crate::{ReplayArgs, runtime};

/// Run the `itch replay` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the socket cannot be
/// created, or a send fails.
pub fn run(args: &ReplayArgs) -> Result<()> {
    runtime()?.block_on(replay(args))
}

async fn replay(args: &ReplayArgs) -> Result<()> {
    let file = tokio::fs::File::open(&args.file)
        .await
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let multicast = args.multicast();
    let std_socket = multicast
        .open_sender()
        .context("failed to create multicast sender")?;
    std_socket
        .set_nonblocking(true)
        .context("failed to make sender non-blocking")?;
    let socket = UdpSocket::from_std(std_socket).context("failed to register sender")?;
    let destination = multicast.destination();

    info!(
        file = %args.file.display(),
        destination = %destination,
        ttl = multicast.ttl,
        "replay started"
    );

    let pace = Duration::from_micros(args.pace_us);
    let mut stream = StreamingDecoder::new(tokio::io::BufReader::new(file));
    let mut datagram = Vec::with_capacity(itch_wire::layout::MAX_DATAGRAM_LEN);
    let mut sent: u64 = 0;

    while let Some(item) = stream.next_frame().await {
        if args.limit.is_some_and(|limit| sent >= limit) {
            break;
        }

        let frame = match item {
            Ok(frame) => frame,
            Err(DecodeError::TruncatedStream {
                offset,
                needed,
                available,
            }) => {
                warn!(offset, needed, available, "incomplete message in capture, stopping");
                break;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed reading {}", args.file.display()));
            }
        };

        datagram.clear();
        write_frame(frame.bytes, &mut datagram).context("failed to frame message")?;
        socket
            .send_to(&datagram, destination)
            .await
            .with_context(|| format!("send to {destination} failed"))?;
        sent += 1;

        if !pace.is_zero() {
            tokio::time::sleep(pace).await;
        }
    }

    info!(messages = sent, "replay finished");
    println!("Sent {sent} messages to {destination}");
    Ok(())
}

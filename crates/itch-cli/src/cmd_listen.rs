/// Implementation of `itch listen`.
///
/// Joins the multicast group and runs every received datagram through the
/// feed driver until `--max-messages` is reached or the process is killed.
///
/// # Example output
///
/// ```text
/// Listening for messages on 239.192.0.1:12345... (Ctrl+C to stop)
/// System Event - Time: 00:00:00.000, Event: O
/// Add Order - Time: 09:30:00.000, Stock: AAPL, Side: B
/// ...
/// Processed 1000 messages, 9873.2 msg/sec
///
/// Final stats: 1000 messages in 101ms (9873.2 msg/sec)
/// ```
use std::time::Instant;

use anyhow::{Context, Result};
use itch_driver::FeedDriver;
use itch_wire::layout::MAX_DATAGRAM_LEN;
use tracing::{error, info};

use crate::{ListenArgs, emit};

/// Run the `itch listen` command.
///
/// # Errors
///
/// Returns an error if the socket cannot be set up, if a receive fails,
/// or if a record cannot be rendered.
pub fn run(args: &ListenArgs) -> Result<()> {
    let multicast = args.multicast();
    let socket = multicast.open_receiver().with_context(|| {
        format!(
            "failed to join {} on port {}",
            multicast.group, multicast.port
        )
    })?;
    info!(group = %multicast.group, port = multicast.port, "joined multicast group");

    println!(
        "Listening for messages on {}... (Ctrl+C to stop)",
        multicast.destination()
    );

    let mut driver = FeedDriver::new(
        args.output.driver_config(args.stats_interval),
        Instant::now(),
    );
    let mut buf = vec![0u8; MAX_DATAGRAM_LEN];

    loop {
        if let Some(max) = args.max_messages
            && driver.messages() >= max
        {
            break;
        }

        let n = match socket.recv(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                error!(error = %e, "receive failed");
                return Err(e).context("receive failed");
            }
        };

        let out = driver.on_datagram(&buf[..n], Instant::now())?;
        emit(&out);
    }

    let done = driver.finish(Instant::now());
    info!(messages = done.0.messages, "listener finished");
    println!();
    println!("{done}");
    Ok(())
}

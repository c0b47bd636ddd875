#![no_main]

use std::time::Instant;

use arbitrary::Arbitrary;
use itch_driver::{DriverConfig, FeedDriver, OutputMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    datagrams: Vec<Vec<u8>>,
    json: bool,
    show_raw: bool,
    symbols: Option<Vec<String>>,
    stats_interval: u8,
}

// Fuzz target: FeedDriver over a sequence of arbitrary datagrams.
fuzz_target!(|input: FuzzInput| {
    let config = DriverConfig {
        mode: if input.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        symbols: input.symbols,
        show_raw: input.show_raw,
        stats_interval: u64::from(input.stats_interval),
    };
    let now = Instant::now();
    let mut driver = FeedDriver::new(config, now);
    for dg in &input.datagrams {
        driver.on_datagram(dg, now).expect("rendering never fails");
    }
    assert!(driver.messages() <= input.datagrams.len() as u64);
});

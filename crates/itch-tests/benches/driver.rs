use std::time::Instant;

use itch_driver::{DriverConfig, FeedDriver, OutputMode};
use itch_tests::synthetic_feed;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn run(config: &DriverConfig, datagrams: &[Vec<u8>]) -> u64 {
    let t0 = Instant::now();
    let mut driver = FeedDriver::new(config.clone(), t0);
    for dg in datagrams {
        driver.on_datagram(dg, t0).unwrap();
    }
    driver.messages()
}

fn bench_driver_modes(c: &mut Criterion) {
    let datagrams = synthetic_feed(1_000).datagrams().unwrap();
    let bytes: usize = datagrams.iter().map(Vec::len).sum();

    let configs = [
        ("text", DriverConfig::default()),
        (
            "json",
            DriverConfig {
                mode: OutputMode::Json,
                ..DriverConfig::default()
            },
        ),
        (
            "filtered",
            DriverConfig {
                symbols: Some(vec!["AAPL".to_string()]),
                ..DriverConfig::default()
            },
        ),
        (
            "raw",
            DriverConfig {
                show_raw: true,
                ..DriverConfig::default()
            },
        ),
    ];

    let mut group = c.benchmark_group("driver");
    group.throughput(Throughput::Bytes(bytes as u64));
    for (name, config) in &configs {
        group.bench_with_input(BenchmarkId::new("mode", name), config, |b, cfg| {
            b.iter(|| run(cfg, &datagrams));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_driver_modes);
criterion_main!(benches);

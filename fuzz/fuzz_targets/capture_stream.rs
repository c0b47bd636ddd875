#![no_main]

use itch_decoder::StreamingDecoder;
use libfuzzer_sys::fuzz_target;

// Fuzz target: StreamingDecoder over an arbitrary capture file.
//
// Catches bugs in:
// - Records split across reads
// - Truncated tails
// - Offset bookkeeping
fuzz_target!(|data: &[u8]| {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    runtime.block_on(async {
        let mut decoder = StreamingDecoder::new(data);
        let mut last_offset = None;
        while let Some(item) = decoder.next().await {
            let Ok(msg) = item else { break };
            assert!(last_offset.map_or(true, |prev| msg.offset > prev));
            last_offset = Some(msg.offset);
        }
        assert!(decoder.position() <= data.len() as u64);
    });
});

#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: ItchDecoder::classify on a bare message.
//
// Catches bugs in:
// - Minimum length checks per tag
// - Field offsets reaching past the buffer
// - Lossy symbol conversion
fuzz_target!(|data: &[u8]| {
    let outcome = itch_decoder::ItchDecoder::classify(data);
    if let Some(record) = outcome.record() {
        let _ = itch_driver::TextRenderer::render(record);
    }
});

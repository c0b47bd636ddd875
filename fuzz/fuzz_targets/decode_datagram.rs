#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: split and decode a whole datagram.
fuzz_target!(|data: &[u8]| {
    let _ = itch_decoder::ItchDecoder::decode_datagram(data);
});

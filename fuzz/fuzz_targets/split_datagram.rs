#![no_main]

use libfuzzer_sys::fuzz_target;
use itch_wire::{split, FrameEvent};

// Fuzz target: length-prefix splitting.
//
// Catches bugs in:
// - Slicing past the end of short datagrams
// - Declared lengths larger than the buffer
// - Trailing byte accounting
fuzz_target!(|data: &[u8]| {
    let mut frames = split(data);
    if let Some(FrameEvent::Complete(frame)) = frames.next() {
        assert_eq!(
            2 + frame.bytes().len() + frame.trailing_len(),
            data.len()
        );
    }
    assert!(frames.next().is_none());
});

//! Golden capture generator for the conformance suite.
//!
//! Writes `tests/golden/session.itch` from [`itch_tests::session`]. Run it
//! after changing the fixture, then update the inline snapshots in
//! `tests/conformance.rs` (`cargo insta review`).
//!
//! ```bash
//! cargo run --bin generate_golden -p itch-tests
//! ```

#![allow(clippy::pedantic)]

use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join(itch_tests::GOLDEN_SESSION);

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", dir.display()));
    }

    let capture = itch_tests::session_capture();
    std::fs::write(&path, &capture)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

    println!(
        "{} messages, {} bytes written to {}",
        itch_tests::session().len(),
        capture.len(),
        path.display()
    );
}

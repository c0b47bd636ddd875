#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod streaming;

pub use decoder::{DatagramOutcome, DecodeOutcome, ItchDecoder};
pub use error::DecodeError;
pub use streaming::{CaptureFrame, CaptureMessage, StreamingDecoder};

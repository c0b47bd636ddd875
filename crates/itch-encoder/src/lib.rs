#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;
pub mod message;

pub use encoder::{ItchEncoder, datagram};
pub use error::EncodeError;

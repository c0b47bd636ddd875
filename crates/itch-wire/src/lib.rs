#![warn(clippy::pedantic)]

pub mod byte_order;
pub mod error;
pub mod frame;
pub mod layout;

pub use error::WireError;
pub use frame::{Frame, FrameEvent, Frames, split, write_frame};

#![warn(clippy::pedantic)]

pub mod codes;
pub mod error;
pub mod fields;
pub mod message_type;
pub mod record;
pub mod symbol;
pub mod timestamp;

pub use codes::{EventCode, Side};
pub use error::TypeError;
pub use message_type::MessageType;
pub use record::{OrderEvent, Record};
pub use symbol::Symbol;
pub use timestamp::{TimeOfDay, Timestamp};

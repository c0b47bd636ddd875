use itch_types::TypeError;
use itch_wire::WireError;

/// Errors that can occur while building messages or capture streams.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── EmptyCapture      ← encode called with no messages added
///   ├── Type(TypeError)   ← timestamp or symbol does not fit the layout
///   └── Wire(WireError)   ← framing or I/O failure
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("no messages have been added to the encoder")]
    EmptyCapture,

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Wire(#[from] WireError),
}

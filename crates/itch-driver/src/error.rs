/// Errors that can occur while presenting decoded records.
///
/// Decoding itself never fails; the only fallible step in the driver is
/// JSON serialization.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────┐
/// │ Variant  │ Cause                                        │
/// ├──────────┼──────────────────────────────────────────────┤
/// │ Json     │ serde_json could not serialize a record      │
/// └──────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to serialize record as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

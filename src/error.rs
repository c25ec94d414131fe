//! Error types shared across the crate.
//!
//! Almost every operation here is total. The only recoverable failures are a
//! malformed `initData` payload and an unknown enum value coming from user input.

/// Errors raised while encoding or decoding the wizard initial data payload.
#[derive(Debug, thiserror::Error)]
pub enum InitialDataError {
    #[error("Invalid initial data JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when a wire value does not name any variant of an enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

/// Convenience result type used across inkstroke.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy used by configuration and loading APIs.
///
/// Per-frame operations never produce these: degenerate input renders nothing.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Invalid user-provided configuration or control-point data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StrokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

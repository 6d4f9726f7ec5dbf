use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TutorError {
    #[error("Speech capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Recognition error: {0}")]
    Recognition(String),

    #[error("Empty input")]
    EmptyInput,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for TutorError {
    fn from(e: serde_json::Error) -> Self {
        TutorError::Serialization(e.to_string())
    }
}

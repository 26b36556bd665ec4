use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Capture subsystem error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fatal error, cannot recover: {0}")]
    Fatal(String),
}

/// Errors raised while acquiring or starting a speech-recognition engine.
///
/// Runtime failures of a started engine never surface here; they arrive
/// as terminal events on the session's event stream.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No speech engine available: {reason}")]
    EngineUnavailable { reason: String },

    #[error("Engine failed to start: {0}")]
    StartFailed(String),

    #[error("Backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CaptureError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CaptureError::Backend(error)
    }
}

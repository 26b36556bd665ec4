//! Always-unavailable engine factory
//!
//! The deterministic result for headless or unsupported environments:
//! requirements never pass, so capability detection resolves to
//! `Unavailable` and controls built on it stay inert.

use fieldvoice_foundation::error::CaptureError;

use crate::engine::{EngineInfo, SpeechEngine, SpeechEngineFactory};
use crate::types::RecorderConfig;

pub struct UnavailableEngineFactory {
    reason: String,
}

impl UnavailableEngineFactory {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableEngineFactory {
    fn default() -> Self {
        Self::new("speech recognition not present in this environment")
    }
}

impl SpeechEngineFactory for UnavailableEngineFactory {
    fn engine_info(&self) -> EngineInfo {
        EngineInfo {
            id: "unavailable".to_string(),
            name: "Unavailable engine".to_string(),
            requires_network: false,
            is_local: true,
            supported_languages: Vec::new(),
        }
    }

    fn check_requirements(&self) -> Result<(), CaptureError> {
        Err(CaptureError::EngineUnavailable {
            reason: self.reason.clone(),
        })
    }

    fn create(&self, _config: &RecorderConfig) -> Result<Box<dyn SpeechEngine>, CaptureError> {
        Err(CaptureError::EngineUnavailable {
            reason: self.reason.clone(),
        })
    }
}

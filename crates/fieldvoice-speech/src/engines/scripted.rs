//! Scripted engine for tests and demos
//!
//! The factory creates engines bound to a shared slot; the cloneable
//! [`ScriptedDriver`] plays the role of the platform recognizer, pushing
//! events into whichever session is currently attached.
//!
//! One factory drives a single engine slot, so construct one factory per
//! recorder control — mirroring a backend that supports one live engine
//! at a time.

use std::sync::Arc;

use parking_lot::Mutex;

use fieldvoice_foundation::error::CaptureError;

use crate::engine::{EngineInfo, EventSender, SpeechEngine, SpeechEngineFactory};
use crate::types::{EngineEvent, RecorderConfig, ResultSegment, TranscriptEvent, DEFAULT_LANG};

#[derive(Debug, Default)]
struct DriverShared {
    sender: Option<EventSender>,
    starts: u64,
    stops: u64,
}

/// Test-side handle that feeds events to the attached session.
#[derive(Clone, Default)]
pub struct ScriptedDriver {
    shared: Arc<Mutex<DriverShared>>,
}

impl ScriptedDriver {
    /// Deliver an event to the active session. Returns `false` when no
    /// session is listening (or the session's receiver is gone).
    pub fn emit(&self, event: EngineEvent) -> bool {
        let shared = self.shared.lock();
        match &shared.sender {
            Some(sender) => sender.send(event).is_ok(),
            None => false,
        }
    }

    pub fn emit_result(&self, result_index: usize, segments: Vec<ResultSegment>) -> bool {
        self.emit(EngineEvent::Result(TranscriptEvent::new(
            result_index,
            segments,
        )))
    }

    pub fn emit_error(&self, code: &str, message: &str) -> bool {
        self.emit(EngineEvent::Error {
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    pub fn emit_end(&self) -> bool {
        self.emit(EngineEvent::End)
    }

    /// Whether a session currently holds a started engine.
    pub fn is_attached(&self) -> bool {
        self.shared.lock().sender.is_some()
    }

    /// Engine starts observed so far.
    pub fn starts(&self) -> u64 {
        self.shared.lock().starts
    }

    /// Engine stops observed so far.
    pub fn stops(&self) -> u64 {
        self.shared.lock().stops
    }
}

/// Factory for driver-fed engines.
#[derive(Default)]
pub struct ScriptedEngineFactory {
    driver: ScriptedDriver,
}

impl ScriptedEngineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn driver(&self) -> ScriptedDriver {
        self.driver.clone()
    }
}

impl SpeechEngineFactory for ScriptedEngineFactory {
    fn engine_info(&self) -> EngineInfo {
        EngineInfo {
            id: "scripted".to_string(),
            name: "Scripted engine".to_string(),
            requires_network: false,
            is_local: true,
            supported_languages: vec![DEFAULT_LANG.to_string()],
        }
    }

    fn check_requirements(&self) -> Result<(), CaptureError> {
        Ok(())
    }

    fn create(&self, config: &RecorderConfig) -> Result<Box<dyn SpeechEngine>, CaptureError> {
        Ok(Box::new(ScriptedEngine {
            shared: self.driver.shared.clone(),
            config: config.clone(),
        }))
    }
}

#[derive(Debug)]
struct ScriptedEngine {
    shared: Arc<Mutex<DriverShared>>,
    config: RecorderConfig,
}

impl SpeechEngine for ScriptedEngine {
    fn start(&mut self, events: EventSender) -> Result<(), CaptureError> {
        let mut shared = self.shared.lock();
        tracing::debug!(
            target: "capture",
            lang = %self.config.lang,
            continuous = self.config.continuous,
            interim = self.config.interim_results,
            "scripted engine started"
        );
        shared.sender = Some(events);
        shared.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        let mut shared = self.shared.lock();
        shared.sender = None;
        shared.stops += 1;
    }
}

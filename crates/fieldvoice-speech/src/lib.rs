//! Voice capture abstraction layer for FieldVoice
//!
//! This crate provides the dictation capture core: one-shot capability
//! detection, recognition session lifecycle, interim/final transcript
//! aggregation, and the recorder control a text field binds to.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod aggregator;
pub mod capability;
pub mod engine;
pub mod engines;
pub mod recorder;
pub mod session;
pub mod types;

pub use aggregator::TranscriptAggregator;
pub use capability::{Capability, EngineRegistry};
pub use engine::{EngineInfo, EventSender, SpeechEngine, SpeechEngineFactory};
pub use recorder::{RecorderStatus, TranscriptSink, VoiceRecorder};
pub use session::{RecognitionSession, SessionState};
pub use types::{
    CaptureMetrics, EngineEvent, Presentation, RecorderConfig, ResultSegment, TranscriptEvent,
    DEFAULT_LANG,
};

/// Generates unique session IDs
static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique session ID, used to correlate log lines across
/// concurrently listening recorders.
pub fn next_session_id() -> u64 {
    SESSION_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

//! Core types for voice capture

use serde::{Deserialize, Serialize};

/// Default locale for recognition sessions.
pub const DEFAULT_LANG: &str = "en-US";

/// One transcription segment inside an engine result event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSegment {
    /// Best transcript string for this segment
    pub text: String,
    /// Whether the engine will revise this segment further
    pub is_final: bool,
}

impl ResultSegment {
    /// A provisional segment, superseded by later events.
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// A segment the engine will not revise; eligible for commit.
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// A single result payload from a recognition engine.
///
/// Segments accumulate across a session; `result_index` marks where this
/// event's novel segments begin. Earlier entries were already delivered
/// by a previous event and must not be reprocessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEvent {
    pub result_index: usize,
    pub segments: Vec<ResultSegment>,
}

impl TranscriptEvent {
    pub fn new(result_index: usize, segments: Vec<ResultSegment>) -> Self {
        Self {
            result_index,
            segments,
        }
    }
}

/// Events a recognition engine delivers to its owning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Incremental recognition results (interim and/or final segments)
    Result(TranscriptEvent),
    /// Terminal engine failure (permission denied, no-speech, network)
    Error { code: String, message: String },
    /// Engine ended the session on its own
    End,
}

/// Recognition session configuration.
///
/// Mirrors the configuration surface of the underlying engine. The
/// locale is fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Keep listening across multiple utterances until stopped
    #[serde(default = "default_true")]
    pub continuous: bool,
    /// Emit provisional results for live preview
    #[serde(default = "default_true")]
    pub interim_results: bool,
    /// Locale identifier for recognition
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_true() -> bool {
    true
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            lang: default_lang(),
        }
    }
}

impl RecorderConfig {
    /// Simplified variant that only ever reports final segments.
    pub fn final_only() -> Self {
        Self {
            interim_results: false,
            ..Default::default()
        }
    }
}

/// How the host surface presents the control.
///
/// Purely presentational; the capture state machine behaves identically
/// in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presentation {
    /// Standalone affordance with captions and live preview
    #[default]
    Full,
    /// Minimal inline affordance next to a field label
    Compact,
}

/// Capture counters for logging and tests.
#[derive(Debug, Clone, Default)]
pub struct CaptureMetrics {
    /// Total engine events processed
    pub events_in: u64,
    /// Number of interim snapshot updates
    pub interim_count: u64,
    /// Number of committed (final) batches
    pub final_count: u64,
    /// Number of terminal engine errors
    pub error_count: u64,
    /// Sessions opened
    pub sessions_started: u64,
    /// Sessions closed (stop, error, or end)
    pub sessions_ended: u64,
}

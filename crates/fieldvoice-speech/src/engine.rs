//! Recognition engine abstraction
//!
//! This module defines the interface a speech-recognition backend must
//! implement. Any engine (platform API, cloud service, test double)
//! implements these traits; the rest of the crate only sees the traits.

use std::fmt::Debug;

use tokio::sync::mpsc;

use fieldvoice_foundation::error::CaptureError;

use crate::types::{EngineEvent, RecorderConfig};

/// Sending half of a session's event channel, handed to the engine at
/// start. Events must be sent in the order the engine produces them.
pub type EventSender = mpsc::UnboundedSender<EngineEvent>;

/// Metadata about a recognition engine backend.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    /// Unique identifier for the engine (e.g. "platform", "scripted")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Whether this engine requires network access
    pub requires_network: bool,

    /// Whether this engine recognizes speech locally
    pub is_local: bool,

    /// Supported locale identifiers
    pub supported_languages: Vec<String>,
}

/// One recognition engine handle.
///
/// A handle is exclusively owned by a single session for its whole
/// lifetime; it is never shared and never reused after `stop`.
pub trait SpeechEngine: Send + Debug {
    /// Begin recognition. Events flow through `events` until `stop` is
    /// called or the engine reports an error or end of its own.
    fn start(&mut self, events: EventSender) -> Result<(), CaptureError>;

    /// Stop recognition and release the underlying resources.
    ///
    /// Must be idempotent and must never panic, whatever state the
    /// handle is in. Called on every session exit path.
    fn stop(&mut self);
}

/// Factory for creating recognition engines.
pub trait SpeechEngineFactory: Send + Sync {
    /// Get engine metadata without creating an instance
    fn engine_info(&self) -> EngineInfo;

    /// Check whether the engine's requirements are met in this
    /// environment (binaries, permissions, platform capability)
    fn check_requirements(&self) -> Result<(), CaptureError>;

    /// Create a fresh engine handle configured for one session
    fn create(&self, config: &RecorderConfig) -> Result<Box<dyn SpeechEngine>, CaptureError>;
}

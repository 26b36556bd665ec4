//! The user-facing recorder control
//!
//! `VoiceRecorder` binds a capability, a configuration, and a target
//! sink into a single control a form field can own. One user-facing
//! action toggles capture; committed text is forwarded to the sink;
//! interim text is exposed only for local live display.

use tracing::{debug, warn};

use crate::capability::Capability;
use crate::session::{RecognitionSession, SessionState};
use crate::types::{CaptureMetrics, EngineEvent, Presentation, RecorderConfig};

/// Receives newly finalized text increments.
///
/// The control only ever passes the increment, never the accumulated
/// transcript; join/append semantics belong to the caller.
pub trait TranscriptSink: Send {
    fn commit(&mut self, text: &str);
}

impl<F: FnMut(&str) + Send> TranscriptSink for F {
    fn commit(&mut self, text: &str) {
        self(text)
    }
}

/// What the host surface should render for the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderStatus {
    /// No speech capability; the affordance is disabled or hidden
    Unsupported,
    Idle,
    Listening,
}

/// Voice dictation control for a single text field.
///
/// Distinct instances are fully independent: each owns its capability,
/// session slot, and sink. The session invariant is structural — the
/// slot holds at most one session, and `start` refuses to replace a
/// live one.
pub struct VoiceRecorder {
    capability: Capability,
    config: RecorderConfig,
    presentation: Presentation,
    session: Option<RecognitionSession>,
    sink: Box<dyn TranscriptSink>,
    metrics: CaptureMetrics,
}

impl VoiceRecorder {
    /// Build a control around a capability resolved by the caller.
    ///
    /// Detection happens once, before construction; the result is
    /// immutable for this instance's lifetime.
    pub fn new(
        capability: Capability,
        config: RecorderConfig,
        sink: impl TranscriptSink + 'static,
    ) -> Self {
        Self {
            capability,
            config,
            presentation: Presentation::Full,
            session: None,
            sink: Box::new(sink),
            metrics: CaptureMetrics::default(),
        }
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn is_supported(&self) -> bool {
        self.capability.is_supported()
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Listening
        } else {
            SessionState::Idle
        }
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_some()
    }

    pub fn status(&self) -> RecorderStatus {
        if !self.is_supported() {
            RecorderStatus::Unsupported
        } else if self.is_listening() {
            RecorderStatus::Listening
        } else {
            RecorderStatus::Idle
        }
    }

    /// Live partial transcript for display. Never forwarded to the sink.
    pub fn live_text(&self) -> &str {
        self.session
            .as_ref()
            .map(|session| session.live_text())
            .unwrap_or("")
    }

    pub fn metrics(&self) -> CaptureMetrics {
        self.metrics.clone()
    }

    /// Alternate between start and stop based on current state.
    pub fn toggle(&mut self) {
        if self.is_listening() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Open a session. Silent no-op when the capability is unsupported
    /// or a session is already listening.
    pub fn start(&mut self) {
        let factory = match self.capability.factory() {
            Some(factory) => factory.clone(),
            None => {
                debug!(target: "capture", "start ignored: capability unsupported");
                return;
            }
        };
        if self.session.is_some() {
            debug!(target: "capture", "start ignored: already listening");
            return;
        }

        match RecognitionSession::open(factory.as_ref(), &self.config) {
            Ok(session) => {
                self.metrics.sessions_started += 1;
                self.session = Some(session);
            }
            Err(error) => {
                // The affordance stays idle; nothing reaches the caller.
                warn!(target: "capture", %error, "failed to start recognition session");
            }
        }
    }

    /// Close the session, discarding any in-flight interim text.
    /// Idempotent; safe to call from Idle.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(target: "capture", session = session.id(), "stop requested");
            self.metrics.sessions_ended += 1;
        }
    }

    /// Drain pending engine events in arrival order, forwarding each
    /// committed batch to the sink exactly once. Returns the number of
    /// events processed. Never blocks.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;

        loop {
            let event = match self.session.as_mut().and_then(|s| s.try_next()) {
                Some(event) => event,
                None => break,
            };
            processed += 1;
            self.metrics.events_in += 1;

            match event {
                EngineEvent::Result(result) => {
                    let committed = self.session.as_mut().and_then(|s| s.apply(&result));
                    match committed {
                        Some(text) => {
                            self.metrics.final_count += 1;
                            debug!(
                                target: "capture",
                                chars = text.len(),
                                "committing finalized text"
                            );
                            self.sink.commit(&text);
                        }
                        None => {
                            self.metrics.interim_count += 1;
                        }
                    }
                }
                EngineEvent::Error { code, message } => {
                    // Terminal and swallowed: the affordance reverts to
                    // idle with no user-visible error.
                    warn!(target: "capture", %code, %message, "engine error ended session");
                    self.metrics.error_count += 1;
                    self.close_session();
                }
                EngineEvent::End => {
                    debug!(target: "capture", "engine ended session");
                    self.close_session();
                }
            }
        }

        processed
    }

    fn close_session(&mut self) {
        if self.session.take().is_some() {
            self.metrics.sessions_ended += 1;
        }
    }
}

//! Recognition session lifecycle
//!
//! A session is one bounded period of ownership over a recognition
//! engine handle, from start to its terminating event. The handle is
//! exclusively owned and released on every exit path: dropping the
//! session stops the engine, whether the drop came from an explicit
//! stop, an engine error, an engine end, or control teardown.

use tokio::sync::mpsc;
use tracing::debug;

use fieldvoice_foundation::error::CaptureError;

use crate::aggregator::TranscriptAggregator;
use crate::engine::{SpeechEngine, SpeechEngineFactory};
use crate::next_session_id;
use crate::types::{EngineEvent, RecorderConfig, TranscriptEvent};

/// State of a recorder's session slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No engine handle held
    Idle,
    /// Engine handle held and started
    Listening,
}

/// One live recognition engine handle plus its event stream.
#[derive(Debug)]
pub struct RecognitionSession {
    id: u64,
    engine: Box<dyn SpeechEngine>,
    events: mpsc::UnboundedReceiver<EngineEvent>,
    aggregator: TranscriptAggregator,
}

impl RecognitionSession {
    /// Construct a fresh engine handle, wire its event channel, and
    /// signal the engine to start.
    pub(crate) fn open(
        factory: &dyn SpeechEngineFactory,
        config: &RecorderConfig,
    ) -> Result<Self, CaptureError> {
        let mut engine = factory.create(config)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        engine.start(event_tx)?;

        let id = next_session_id();
        debug!(
            target: "capture",
            session = id,
            engine = %factory.engine_info().id,
            lang = %config.lang,
            interim = config.interim_results,
            "recognition session started"
        );

        Ok(Self {
            id,
            engine,
            events: event_rx,
            aggregator: TranscriptAggregator::new(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn live_text(&self) -> &str {
        self.aggregator.live_text()
    }

    /// Next pending engine event, if any. Never blocks.
    pub(crate) fn try_next(&mut self) -> Option<EngineEvent> {
        self.events.try_recv().ok()
    }

    pub(crate) fn apply(&mut self, event: &TranscriptEvent) -> Option<String> {
        self.aggregator.apply(event)
    }
}

impl Drop for RecognitionSession {
    fn drop(&mut self) {
        self.engine.stop();
        debug!(target: "capture", session = self.id, "recognition session released");
    }
}

//! Interim/final classification of engine result events

use crate::types::TranscriptEvent;

/// Splits each result event into a live interim snapshot and a committed
/// increment.
///
/// Interim text is a replacement snapshot, not a running log: each event
/// overwrites the previous value. Final text is returned to the caller
/// exactly once, containing only the segments marked final within that
/// event.
#[derive(Debug, Default)]
pub struct TranscriptAggregator {
    live: String,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of the most recent event's interim segments.
    pub fn live_text(&self) -> &str {
        &self.live
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Process one event and return the committed text, if any.
    ///
    /// Segments before `result_index` were already handled by a prior
    /// event and are skipped. When the event carries final segments the
    /// live snapshot is cleared, even if interim segments arrived in the
    /// same event.
    pub fn apply(&mut self, event: &TranscriptEvent) -> Option<String> {
        let mut interim = String::new();
        let mut finalized = String::new();

        for segment in event.segments.iter().skip(event.result_index) {
            if segment.is_final {
                finalized.push_str(&segment.text);
            } else {
                interim.push_str(&segment.text);
            }
        }

        if finalized.is_empty() {
            self.live = interim;
            None
        } else {
            self.live.clear();
            Some(finalized)
        }
    }
}

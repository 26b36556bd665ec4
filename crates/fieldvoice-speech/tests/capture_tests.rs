//! Recorder control and session lifecycle tests
//!
//! Tests cover:
//! - Idempotent stop and single-toggle start semantics
//! - result_index bookkeeping across sequential events
//! - Silent handling of engine errors and engine-initiated ends
//! - Capability gating and control isolation

use std::sync::{Arc, Mutex};

use fieldvoice_speech::engines::{ScriptedDriver, ScriptedEngineFactory, UnavailableEngineFactory};
use fieldvoice_speech::{
    Capability, EngineRegistry, RecorderConfig, RecorderStatus, ResultSegment, SessionState,
    VoiceRecorder,
};

/// Shared vector the sink appends committed increments to.
type Committed = Arc<Mutex<Vec<String>>>;

fn recorder_with_driver() -> (VoiceRecorder, ScriptedDriver, Committed) {
    let factory = ScriptedEngineFactory::new();
    let driver = factory.driver();
    let committed: Committed = Arc::new(Mutex::new(Vec::new()));
    let sink_log = committed.clone();
    let recorder = VoiceRecorder::new(
        Capability::Available(Arc::new(factory)),
        RecorderConfig::default(),
        move |text: &str| sink_log.lock().unwrap().push(text.to_string()),
    );
    (recorder, driver, committed)
}

// ─── Stop / Start Semantics ─────────────────────────────────────────

#[test]
fn stop_from_idle_is_a_noop() {
    let (mut recorder, driver, _committed) = recorder_with_driver();

    recorder.stop();
    recorder.stop();

    assert_eq!(recorder.state(), SessionState::Idle);
    assert_eq!(driver.stops(), 0);
}

#[test]
fn start_while_listening_creates_no_second_handle() {
    let (mut recorder, driver, _committed) = recorder_with_driver();

    recorder.start();
    recorder.start();

    assert!(recorder.is_listening());
    assert_eq!(driver.starts(), 1);
    assert_eq!(recorder.metrics().sessions_started, 1);
}

#[test]
fn toggle_alternates_between_start_and_stop() {
    let (mut recorder, driver, _committed) = recorder_with_driver();

    recorder.toggle();
    assert_eq!(recorder.status(), RecorderStatus::Listening);

    recorder.toggle();
    assert_eq!(recorder.status(), RecorderStatus::Idle);
    assert_eq!(driver.starts(), 1);
    assert_eq!(driver.stops(), 1);
}

#[test]
fn stop_releases_engine_and_discards_interim_text() {
    let (mut recorder, driver, committed) = recorder_with_driver();

    recorder.start();
    driver.emit_result(0, vec![ResultSegment::interim("half a tho")]);
    recorder.pump();
    assert_eq!(recorder.live_text(), "half a tho");

    recorder.stop();

    assert_eq!(recorder.live_text(), "");
    assert_eq!(driver.stops(), 1);
    assert!(committed.lock().unwrap().is_empty());
    // In-flight events no longer have a listening session.
    assert!(!driver.emit_end());
}

// ─── Transcript Delivery ────────────────────────────────────────────

#[test]
fn live_preview_then_single_commit() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_result(0, vec![ResultSegment::interim("hello ")]);
    recorder.pump();
    assert_eq!(recorder.live_text(), "hello ");
    assert!(committed.lock().unwrap().is_empty());

    driver.emit_result(0, vec![ResultSegment::finalized("hello world")]);
    recorder.pump();
    assert_eq!(recorder.live_text(), "");
    assert_eq!(*committed.lock().unwrap(), vec!["hello world".to_string()]);
}

#[test]
fn result_index_prevents_recommitting_prior_text() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_result(0, vec![ResultSegment::finalized("hello ")]);
    // The engine accumulates results: the second event re-lists the
    // committed segment with result_index pointing past it.
    driver.emit_result(
        1,
        vec![
            ResultSegment::finalized("hello "),
            ResultSegment::finalized("world"),
        ],
    );
    recorder.pump();

    assert_eq!(
        *committed.lock().unwrap(),
        vec!["hello ".to_string(), "world".to_string()]
    );
}

#[test]
fn mixed_event_commits_final_and_clears_live_text() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_result(0, vec![ResultSegment::interim("launch the pri")]);
    recorder.pump();

    driver.emit_result(
        0,
        vec![
            ResultSegment::finalized("launch the pricing page"),
            ResultSegment::interim("next quarter"),
        ],
    );
    recorder.pump();

    assert_eq!(
        *committed.lock().unwrap(),
        vec!["launch the pricing page".to_string()]
    );
    assert_eq!(recorder.live_text(), "");
}

#[test]
fn commits_preserve_engine_order() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_result(0, vec![ResultSegment::finalized("first ")]);
    driver.emit_result(1, vec![ResultSegment::interim("ignored")]);
    driver.emit_result(
        1,
        vec![ResultSegment::interim(""), ResultSegment::finalized("second")],
    );
    let processed = recorder.pump();

    assert_eq!(processed, 3);
    assert_eq!(
        *committed.lock().unwrap(),
        vec!["first ".to_string(), "second".to_string()]
    );
}

// ─── Capability Gating ──────────────────────────────────────────────

#[test]
fn unsupported_capability_leaves_control_inert() {
    let committed: Committed = Arc::new(Mutex::new(Vec::new()));
    let sink_log = committed.clone();
    let mut recorder = VoiceRecorder::new(
        Capability::Unavailable,
        RecorderConfig::default(),
        move |text: &str| sink_log.lock().unwrap().push(text.to_string()),
    );

    assert!(!recorder.is_supported());
    assert_eq!(recorder.status(), RecorderStatus::Unsupported);

    recorder.toggle();
    recorder.start();
    recorder.pump();

    assert_eq!(recorder.state(), SessionState::Idle);
    assert!(committed.lock().unwrap().is_empty());
}

#[test]
fn start_failure_leaves_control_idle() {
    // Capability resolved against a factory whose create() fails.
    let committed: Committed = Arc::new(Mutex::new(Vec::new()));
    let sink_log = committed.clone();
    let mut recorder = VoiceRecorder::new(
        Capability::Available(Arc::new(UnavailableEngineFactory::default())),
        RecorderConfig::default(),
        move |text: &str| sink_log.lock().unwrap().push(text.to_string()),
    );

    recorder.start();

    assert_eq!(recorder.state(), SessionState::Idle);
    assert_eq!(recorder.metrics().sessions_started, 0);
    assert!(committed.lock().unwrap().is_empty());
}

#[test]
fn registry_detection_skips_unavailable_engines() {
    let mut registry = EngineRegistry::new();
    registry.register(Arc::new(UnavailableEngineFactory::default()));
    registry.register(Arc::new(ScriptedEngineFactory::new()));

    let capability = registry.detect();
    assert!(capability.is_supported());
}

#[test]
fn registry_honors_preferred_order() {
    let mut registry = EngineRegistry::new();
    registry.register(Arc::new(ScriptedEngineFactory::new()));
    registry.register(Arc::new(UnavailableEngineFactory::default()));
    registry.set_preferred_order(vec!["unavailable".to_string(), "scripted".to_string()]);

    // The preferred engine fails its requirements check, so detection
    // falls through to the next candidate.
    let capability = registry.detect();
    assert!(capability.is_supported());
    assert_eq!(format!("{:?}", capability), "Available(\"scripted\")");
}

#[test]
fn empty_registry_detects_unavailable() {
    let registry = EngineRegistry::new();
    assert!(!registry.detect().is_supported());
}

// ─── Terminal Engine Events ─────────────────────────────────────────

#[test]
fn engine_error_resets_silently() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_result(0, vec![ResultSegment::interim("about to fa")]);
    driver.emit_error("not-allowed", "microphone permission denied");
    recorder.pump();

    // No text reaches the sink and no error surfaces to the caller;
    // the affordance simply reverts to idle.
    assert_eq!(recorder.state(), SessionState::Idle);
    assert_eq!(recorder.live_text(), "");
    assert!(committed.lock().unwrap().is_empty());
    assert_eq!(recorder.metrics().error_count, 1);
    assert_eq!(driver.stops(), 1);
}

#[test]
fn engine_end_resets_and_allows_restart() {
    let (mut recorder, driver, _committed) = recorder_with_driver();

    recorder.start();
    driver.emit_end();
    recorder.pump();
    assert_eq!(recorder.state(), SessionState::Idle);

    recorder.start();
    assert!(recorder.is_listening());
    assert_eq!(driver.starts(), 2);
}

#[test]
fn events_queued_behind_error_are_discarded() {
    let (mut recorder, driver, committed) = recorder_with_driver();
    recorder.start();

    driver.emit_error("network", "recognizer connection lost");
    driver.emit_result(0, vec![ResultSegment::finalized("too late")]);
    recorder.pump();

    assert_eq!(recorder.state(), SessionState::Idle);
    assert!(committed.lock().unwrap().is_empty());
}

// ─── Isolation ──────────────────────────────────────────────────────

#[test]
fn controls_deliver_only_to_their_own_sink() {
    let (mut title, title_driver, title_committed) = recorder_with_driver();
    let (mut notes, notes_driver, notes_committed) = recorder_with_driver();

    title.start();
    notes.start();

    title_driver.emit_result(0, vec![ResultSegment::finalized("ship it")]);
    notes_driver.emit_result(0, vec![ResultSegment::finalized("needs review first")]);
    title.pump();
    notes.pump();

    assert_eq!(*title_committed.lock().unwrap(), vec!["ship it".to_string()]);
    assert_eq!(
        *notes_committed.lock().unwrap(),
        vec!["needs review first".to_string()]
    );

    // Stopping one control never affects the other's session.
    title.stop();
    assert!(notes.is_listening());

    notes_driver.emit_result(1, vec![
        ResultSegment::finalized("needs review first"),
        ResultSegment::finalized(" then ship"),
    ]);
    notes.pump();
    assert_eq!(
        *notes_committed.lock().unwrap(),
        vec!["needs review first".to_string(), " then ship".to_string()]
    );
}

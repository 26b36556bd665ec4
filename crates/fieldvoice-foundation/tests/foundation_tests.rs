//! Foundation crate tests
//!
//! Tests cover:
//! - Error types (AppError variants, CaptureError)
//! - Error conversions between layers

use fieldvoice_foundation::error::{AppError, CaptureError};

// ─── CaptureError Tests ─────────────────────────────────────────────

#[test]
fn capture_error_engine_unavailable() {
    let err = CaptureError::EngineUnavailable {
        reason: "headless environment".to_string(),
    };
    let msg = format!("{}", err);
    assert!(msg.contains("headless environment"));
}

#[test]
fn capture_error_start_failed() {
    let err = CaptureError::StartFailed("microphone busy".to_string());
    let msg = format!("{}", err);
    assert!(msg.contains("microphone busy"));
}

#[test]
fn capture_error_from_boxed_backend_error() {
    let inner: Box<dyn std::error::Error + Send + Sync> =
        "socket closed".to_string().into();
    let err: CaptureError = inner.into();
    assert!(matches!(err, CaptureError::Backend(_)));
}

// ─── AppError Tests ─────────────────────────────────────────────────

#[test]
fn app_error_from_capture_error() {
    let capture_err = CaptureError::StartFailed("denied".to_string());
    let err: AppError = capture_err.into();
    assert!(matches!(err, AppError::Capture(_)));
}

#[test]
fn app_error_config() {
    let err = AppError::Config("lang must not be empty".to_string());
    let msg = format!("{}", err);
    assert!(msg.contains("lang must not be empty"));
}

#[test]
fn app_error_fatal() {
    let err = AppError::Fatal("event loop panicked".to_string());
    let msg = format!("{}", err);
    assert!(msg.contains("event loop panicked"));
}

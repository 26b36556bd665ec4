//! Engine backends bundled with the crate

pub mod scripted;
pub mod unavailable;

pub use scripted::{ScriptedDriver, ScriptedEngineFactory};
pub use unavailable::UnavailableEngineFactory;

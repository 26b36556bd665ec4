//! One-shot capability detection
//!
//! A recorder control resolves its speech capability exactly once, at
//! construction, by asking a registry for the first engine factory whose
//! requirements pass. Environments without any usable engine resolve to
//! [`Capability::Unavailable`] and the control stays inert.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::engine::{EngineInfo, SpeechEngineFactory};

/// Result of capability detection for one control instance.
///
/// Immutable for the control's lifetime; never recomputed.
#[derive(Clone)]
pub enum Capability {
    /// A usable engine factory was found
    Available(Arc<dyn SpeechEngineFactory>),
    /// No engine present (headless host, unsupported platform)
    Unavailable,
}

impl Capability {
    pub fn is_supported(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub(crate) fn factory(&self) -> Option<&Arc<dyn SpeechEngineFactory>> {
        match self {
            Capability::Available(factory) => Some(factory),
            Capability::Unavailable => None,
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available(factory) => f
                .debug_tuple("Available")
                .field(&factory.engine_info().id)
                .finish(),
            Capability::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Registry of engine factories with a preferred probe order.
#[derive(Default)]
pub struct EngineRegistry {
    factories: Vec<Arc<dyn SpeechEngineFactory>>,
    preferred_order: Vec<String>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new engine factory
    pub fn register(&mut self, factory: Arc<dyn SpeechEngineFactory>) {
        self.factories.push(factory);
    }

    /// Set the preferred order of engines to probe
    pub fn set_preferred_order(&mut self, order: Vec<String>) {
        self.preferred_order = order;
    }

    /// Get metadata for all registered engines
    pub fn registered_engines(&self) -> Vec<EngineInfo> {
        self.factories.iter().map(|f| f.engine_info()).collect()
    }

    /// Resolve the capability: the first factory whose requirements
    /// pass, probing the preferred order first, then registration order.
    ///
    /// No side effects and no caching; each control detects
    /// independently, once.
    pub fn detect(&self) -> Capability {
        for engine_id in &self.preferred_order {
            if let Some(factory) = self
                .factories
                .iter()
                .find(|f| f.engine_info().id == *engine_id)
            {
                if factory.check_requirements().is_ok() {
                    return Capability::Available(factory.clone());
                }
            }
        }

        for factory in &self.factories {
            match factory.check_requirements() {
                Ok(()) => return Capability::Available(factory.clone()),
                Err(reason) => {
                    debug!(
                        target: "capture",
                        engine = %factory.engine_info().id,
                        %reason,
                        "engine requirements not met"
                    );
                }
            }
        }

        Capability::Unavailable
    }
}

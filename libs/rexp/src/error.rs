//! Error types for the expression value model

use std::fmt;
use std::sync::{Arc, Weak};

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the value model and its interchange helpers.
///
/// Coercions between atomic vectors never produce these; only requests that
/// have no sensible default (converting a list to doubles, downcasting to the
/// wrong variant, decoding malformed input) do.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Stable identifier of an engine/session, usable after the engine is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineId(pub u64);

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine#{}", self.0)
    }
}

/// The part of an engine/session that an [`EngineError`] needs to know about.
///
/// Connection handling lives in the transport layer; it implements this trait
/// for whatever object owns the session.
pub trait Engine: Send + Sync {
    fn id(&self) -> EngineId;

    /// Short human-readable description (host, port, server version...).
    fn description(&self) -> String {
        self.id().to_string()
    }
}

/// Non-owning handle to the engine that raised an error.
///
/// Holding an `EngineRef` never keeps the engine alive; [`EngineRef::upgrade`]
/// returns `None` once the session has been dropped.
#[derive(Clone)]
pub struct EngineRef {
    id: EngineId,
    handle: Weak<dyn Engine>,
}

impl EngineRef {
    pub fn new<E: Engine + 'static>(engine: &Arc<E>) -> Self {
        let weak: Weak<E> = Arc::downgrade(engine);
        let handle: Weak<dyn Engine> = weak;
        Self {
            id: engine.id(),
            handle,
        }
    }

    pub fn from_dyn(engine: &Arc<dyn Engine>) -> Self {
        Self {
            id: engine.id(),
            handle: Arc::downgrade(engine),
        }
    }

    pub fn id(&self) -> EngineId {
        self.id
    }

    pub fn upgrade(&self) -> Option<Arc<dyn Engine>> {
        self.handle.upgrade()
    }

    pub fn is_alive(&self) -> bool {
        self.handle.strong_count() > 0
    }
}

impl fmt::Debug for EngineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRef")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Failure raised by the engine/session layer.
///
/// Carries the server-provided message and a back-reference to the engine it
/// came from. The value model itself never produces one.
#[derive(Error, Debug, Clone)]
#[error("{} ({})", .message, .engine.id())]
pub struct EngineError {
    message: String,
    engine: EngineRef,
}

impl EngineError {
    pub fn new(engine: EngineRef, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(engine = %engine.id(), %message, "engine error raised");
        Self { message, engine }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn engine(&self) -> &EngineRef {
        &self.engine
    }
}

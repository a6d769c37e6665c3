//! Error types for the engine seam

use thiserror::Error;

/// Engine-level errors
///
/// Script exceptions are not errors at this level; they are reported as
/// [`crate::Evaluation::Threw`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The runtime or context could not be created
    #[error("failed to initialize engine: {0}")]
    Init(#[source] rquickjs::Error),

    /// A host global could not be installed into the context
    #[error("failed to install host global '{name}': {source}")]
    Host {
        /// Name of the global being installed
        name: &'static str,
        /// Underlying engine error
        #[source]
        source: rquickjs::Error,
    },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the benchmark harness

use js_engine::{EngineError, ThrownValue};
use std::io;
use thiserror::Error;

/// Failure to load a script file into the script buffer
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("Cannot open file: {path}")]
    NotFound {
        /// Path that was opened
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Zero bytes were read, including for files that are legitimately empty
    #[error("fread failed: {path}")]
    EmptyRead {
        /// Path that was read
        path: String,
    },

    /// The read filled the buffer to capacity
    #[error("file too large: {path}")]
    TooLarge {
        /// Path that was read
        path: String,
        /// Buffer capacity in bytes
        limit: usize,
    },

    /// The file was opened but reading it failed
    #[error("read failed: {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path, .. }
            | LoadError::EmptyRead { path }
            | LoadError::TooLarge { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// Non-fatal failure of a single benchmark file
///
/// The drivers report these and move on to the next file.
#[derive(Debug, Error)]
pub enum RunError {
    /// The file could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The script threw
    #[error("uncaught exception: {0}")]
    Exception(ThrownValue),
}

/// Fatal harness errors
///
/// Binaries turn these into exit status 1.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The benchmark folder argument was not given
    #[error("Usage: {program} <benchmark folder> [optional: name]")]
    ManifestMissing {
        /// Program name for the usage line
        program: String,
    },

    /// The manifest file could not be opened or read
    #[error("Error opening file: {path}")]
    ManifestUnreadable {
        /// Manifest path
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The engine could not be created
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Writing to the console or an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Result serialization failed
    #[error("failed to format results: {0}")]
    Json(#[from] serde_json::Error),

    /// An engine command for the comparison report could not be run
    #[error("Error executing {name}: {reason}")]
    Command {
        /// Display name of the engine
        name: String,
        /// What went wrong
        reason: String,
    },
}

/// Result type for fatal harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Result of running one benchmark file
pub type FileResult<T = ()> = Result<T, RunError>;

//! Engine-neutral evaluation types
//!
//! The benchmark drivers only ever talk to an engine through
//! [`ScriptEngine`], so a run can be driven by QuickJS or by a scripted
//! engine in tests.

use std::fmt;

/// How a source text is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// Top-level script semantics, bindings land on the global object
    #[default]
    Global,
    /// ECMAScript module semantics with its own scope and static imports
    Module,
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalMode::Global => write!(f, "global"),
            EvalMode::Module => write!(f, "module"),
        }
    }
}

/// Native stack budget granted to script execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackLimit {
    /// Limit script recursion to this many bytes of native stack
    Bounded(usize),
    /// No stack check at all
    Unbounded,
}

impl StackLimit {
    /// Size in bytes as understood by QuickJS, where zero disables the check
    pub fn as_bytes(self) -> usize {
        match self {
            StackLimit::Bounded(bytes) => bytes,
            StackLimit::Unbounded => 0,
        }
    }
}

/// Snapshot of a thrown exception
///
/// All engine handles are released before this is built, so it can
/// outlive the evaluation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrownValue {
    /// Whether the thrown value is an `Error` object
    pub is_error: bool,
    /// The `stack` property, when the value is an `Error` that carries one
    pub stack: Option<String>,
    /// String conversion of the thrown value
    pub text: String,
}

impl ThrownValue {
    /// Thrown value that is not an `Error` object, e.g. `throw 42`
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            stack: None,
            text: text.into(),
        }
    }

    /// Thrown `Error` object with an optional stack trace
    pub fn error(text: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            is_error: true,
            stack,
            text: text.into(),
        }
    }

    /// Stack trace worth printing: only for `Error` objects, and only if non-empty
    pub fn stack_trace(&self) -> Option<&str> {
        if !self.is_error {
            return None;
        }
        self.stack.as_deref().filter(|stack| !stack.trim().is_empty())
    }
}

impl fmt::Display for ThrownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Outcome of a single evaluation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The script ran to completion; its value has been discarded
    Completed,
    /// The script threw
    Threw(ThrownValue),
}

impl Evaluation {
    /// Check if the evaluation completed without throwing
    pub fn is_completed(&self) -> bool {
        matches!(self, Evaluation::Completed)
    }

    /// The thrown value, if any
    pub fn thrown(&self) -> Option<&ThrownValue> {
        match self {
            Evaluation::Completed => None,
            Evaluation::Threw(thrown) => Some(thrown),
        }
    }
}

/// A script engine owning one runtime and one execution context
pub trait ScriptEngine {
    /// Parse and run `source` under `mode`
    ///
    /// `name` is the display name used in diagnostics and stack traces.
    /// Never panics on script failure; exceptions come back as
    /// [`Evaluation::Threw`].
    fn evaluate(&mut self, source: &[u8], name: &str, mode: EvalMode) -> Evaluation;

    /// Run a full garbage collection pass
    fn run_gc(&mut self);
}

impl<E: ScriptEngine + ?Sized> ScriptEngine for &mut E {
    fn evaluate(&mut self, source: &[u8], name: &str, mode: EvalMode) -> Evaluation {
        (**self).evaluate(source, name, mode)
    }

    fn run_gc(&mut self) {
        (**self).run_gc()
    }
}

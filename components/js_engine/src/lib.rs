//! Embedded JavaScript engine seam
//!
//! Provides the [`ScriptEngine`] trait the benchmark drivers evaluate
//! scripts through, and [`QuickJsEngine`], the QuickJS-backed
//! implementation that owns the runtime and context for the process.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod quickjs;

pub use engine::{EvalMode, Evaluation, ScriptEngine, StackLimit, ThrownValue};
pub use error::{EngineError, EngineResult};
pub use quickjs::{QuickJsEngine, OCTANE_STACK_LIMIT};

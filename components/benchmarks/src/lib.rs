//! Benchmark harness for the embedded JavaScript engine
//!
//! Loads benchmark scripts from disk, evaluates them through a
//! [`js_engine::ScriptEngine`], and reports exceptions and timings. It
//! includes:
//!
//! - The Octane suite runner, optionally filtered and relocated
//! - The manifest-driven SunSpider/Kraken runner with timing
//! - A cross-engine score comparison report
//!
//! # Examples
//!
//! ```rust,no_run
//! use benchmarks::{octane, BenchmarkRunner, Console, RunConfig};
//! use js_engine::QuickJsEngine;
//!
//! let engine = QuickJsEngine::new().unwrap();
//! let mut runner = BenchmarkRunner::new(engine, Console::stdio());
//! let summary = octane::run_suite(&mut runner, &RunConfig::default()).unwrap();
//! println!("{} passed, {} failed", summary.passed, summary.failed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod console;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod octane;
pub mod runner;
pub mod sunspider;

pub use config::{RunConfig, SuiteConfig};
pub use console::Console;
pub use error::{FileResult, HarnessError, HarnessResult, LoadError, RunError};
pub use loader::{ScriptBuffer, MAX_SCRIPT_SIZE};
pub use runner::{BenchmarkRunner, SuiteSummary, TimedRun};

/// Initialize diagnostics logging for a binary
///
/// The level comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

//! Benchmark runner and result types
//!
//! [`BenchmarkRunner`] owns the engine, the console, and the reusable script
//! buffer for one run, and provides the load-evaluate-report step the suite
//! drivers are built from.

use crate::console::Console;
use crate::error::{FileResult, HarnessResult, RunError};
use crate::evaluator::report_evaluation;
use crate::loader::ScriptBuffer;
use js_engine::{EvalMode, ScriptEngine};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::{Duration, Instant};

/// Timing of one benchmark evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedRun {
    /// Path of the evaluated script
    pub name: String,
    /// Evaluation time in milliseconds
    pub duration_ms: f64,
    /// Whether the script completed without throwing
    pub success: bool,
}

/// Aggregate outcome of a suite run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteSummary {
    /// Files that loaded and completed
    pub passed: usize,
    /// Files that failed to load or threw
    pub failed: usize,
    /// Files left out by a filter
    pub skipped: usize,
    /// Timed evaluations in run order
    pub runs: Vec<TimedRun>,
    /// Sum of all timed evaluations
    pub total: Duration,
}

impl SuiteSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a file's result
    pub fn record<T>(&mut self, result: &FileResult<T>) {
        match result {
            Ok(_) => self.passed += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Count a filtered-out file
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Add a timed evaluation to the total
    pub fn record_timing(&mut self, name: &str, elapsed: Duration, success: bool) {
        self.total += elapsed;
        self.runs.push(TimedRun {
            name: name.to_string(),
            duration_ms: elapsed.as_secs_f64() * 1000.0,
            success,
        });
    }

    /// Total timed evaluation in milliseconds
    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }
}

/// Drives an engine over script files
pub struct BenchmarkRunner<E, O, R> {
    engine: E,
    console: Console<O, R>,
    buffer: ScriptBuffer,
}

impl<E: ScriptEngine, O: Write, R: Write> BenchmarkRunner<E, O, R> {
    /// Create a runner with an 8 MiB script buffer
    pub fn new(engine: E, console: Console<O, R>) -> Self {
        Self {
            engine,
            console,
            buffer: ScriptBuffer::new(),
        }
    }

    /// Use a different script buffer
    pub fn with_buffer(mut self, buffer: ScriptBuffer) -> Self {
        self.buffer = buffer;
        self
    }

    /// The engine
    pub fn engine(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The console
    pub fn console(&mut self) -> &mut Console<O, R> {
        &mut self.console
    }

    /// Tear the runner down, returning the engine and console
    pub fn into_parts(self) -> (E, Console<O, R>) {
        (self.engine, self.console)
    }

    /// Load and evaluate one file, reporting any exception
    ///
    /// Load failures are returned unreported; whether they are worth a
    /// message is up to the driver.
    ///
    /// # Errors
    /// The outer error is fatal (console I/O); the inner one is the file's
    /// own failure.
    pub fn execute(&mut self, path: &str, mode: EvalMode) -> HarnessResult<FileResult> {
        if let Err(err) = self.buffer.load(path) {
            return Ok(Err(err.into()));
        }

        let evaluation = self.engine.evaluate(self.buffer.contents(), path, mode);
        Ok(match report_evaluation(self.console.out(), evaluation)? {
            None => Ok(()),
            Some(thrown) => Err(RunError::Exception(thrown)),
        })
    }

    /// Like [`Self::execute`], but reports load failures to the error stream
    pub fn execute_reported(&mut self, path: &str, mode: EvalMode) -> HarnessResult<FileResult> {
        let result = self.execute(path, mode)?;
        if let Err(RunError::Load(err)) = &result {
            writeln!(self.console.err(), "{}", err)?;
        }
        Ok(result)
    }

    /// Load and evaluate one file in global mode, timing the evaluation
    ///
    /// Prints `<path> (<seconds> seconds)` once the evaluation returns, then
    /// any exception. Loading is not timed, and a file that fails to load
    /// produces no timing line.
    pub fn execute_timed(
        &mut self,
        path: &str,
        summary: &mut SuiteSummary,
    ) -> HarnessResult<FileResult<Duration>> {
        if let Err(err) = self.buffer.load(path) {
            return Ok(Err(err.into()));
        }

        let start = Instant::now();
        let evaluation = self
            .engine
            .evaluate(self.buffer.contents(), path, EvalMode::Global);
        let elapsed = start.elapsed();

        writeln!(
            self.console.out(),
            "{} ({:.4} seconds)",
            path,
            elapsed.as_secs_f64()
        )?;
        summary.record_timing(path, elapsed, evaluation.is_completed());

        Ok(match report_evaluation(self.console.out(), evaluation)? {
            None => Ok(elapsed),
            Some(thrown) => Err(RunError::Exception(thrown)),
        })
    }

    /// Run a full garbage collection pass
    pub fn collect_garbage(&mut self) {
        self.engine.run_gc();
    }
}

/// Format timing results as JSON
pub fn format_results_json(runs: &[TimedRun]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(runs)
}

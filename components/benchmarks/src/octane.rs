//! Octane suite
//!
//! The suite is a fixed, ordered list of scripts evaluated into one shared
//! global scope, followed by a wrap-up module that drives the registered
//! benchmarks.

use crate::config::RunConfig;
use crate::error::HarnessResult;
use crate::runner::{BenchmarkRunner, SuiteSummary};
use js_engine::{EvalMode, ScriptEngine};
use std::io::Write;

/// Harness script every other Octane file registers itself with
pub const BASE_FILE: &str = "octane/base.js";

/// Benchmark scripts, in load order
pub const OCTANE_FILES: &[&str] = &[
    "octane/richards.js",
    "octane/deltablue.js",
    "octane/crypto.js",
    "octane/raytrace.js",
    "octane/earley-boyer.js",
    "octane/regexp.js",
    "octane/splay.js",
    "octane/navier-stokes.js",
    "octane/pdfjs.js",
    "octane/mandreel.js",
    "octane/gbemu-part1.js",
    "octane/gbemu-part2.js",
    "octane/code-load.js",
    "octane/box2d.js",
    "octane/zlib.js",
    "octane/zlib-data.js",
    "octane/typescript.js",
    "octane/typescript-input.js",
    "octane/typescript-compiler.js",
];

/// Module evaluated after the suite to run it and print scores
pub const WRAP_UP_MODULE: &str = "run_octane.js";

/// Run the Octane suite
///
/// The base file always runs; each benchmark file runs only if `config`
/// selects it, otherwise a `Skipping` notice is printed. The wrap-up module
/// always runs last. Failures of individual files are reported and do not
/// stop the run.
pub fn run_suite<E, O, R>(
    runner: &mut BenchmarkRunner<E, O, R>,
    config: &RunConfig,
) -> HarnessResult<SuiteSummary>
where
    E: ScriptEngine,
    O: Write,
    R: Write,
{
    let mut summary = SuiteSummary::new();

    let result = runner.execute_reported(&config.resolve(BASE_FILE), config.mode)?;
    summary.record(&result);

    for file in OCTANE_FILES {
        if !config.selects(file) {
            writeln!(runner.console().out(), "Skipping {}", file)?;
            summary.record_skip();
            continue;
        }
        let result = runner.execute_reported(&config.resolve(file), config.mode)?;
        summary.record(&result);
    }

    let result = runner.execute_reported(&config.resolve(WRAP_UP_MODULE), EvalMode::Module)?;
    summary.record(&result);

    log::info!(
        "octane run finished: {} passed, {} failed, {} skipped",
        summary.passed,
        summary.failed,
        summary.skipped
    );
    Ok(summary)
}

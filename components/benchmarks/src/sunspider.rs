//! SunSpider/Kraken style suites
//!
//! A suite folder holds a `LIST` manifest naming one benchmark per line.
//! Each benchmark `<name>` is `<name>.js`, optionally preceded by a
//! `<name>-data.js` companion that sets up its input.

use crate::config::SuiteConfig;
use crate::error::{HarnessError, HarnessResult, RunError};
use crate::runner::{format_results_json, BenchmarkRunner, SuiteSummary};
use js_engine::ScriptEngine;
use std::fs;
use std::io::Write;

/// File name of the manifest inside the suite folder
pub const MANIFEST_NAME: &str = "LIST";

/// Read the benchmark names listed in `<folder>LIST`
///
/// One name per line, line terminators stripped. Blank lines are kept as
/// (empty) names.
///
/// # Errors
/// Returns `HarnessError::ManifestUnreadable` if the manifest cannot be read.
pub fn read_manifest(folder: &str) -> HarnessResult<Vec<String>> {
    let path = format!("{}{}", folder, MANIFEST_NAME);
    let contents = fs::read_to_string(&path)
        .map_err(|source| HarnessError::ManifestUnreadable { path, source })?;

    Ok(contents.lines().map(str::to_string).collect())
}

/// Run every benchmark named in the suite's manifest
///
/// Prints one timing line per evaluated benchmark and a final
/// `Total (ms)` line. The engine is garbage collected after each benchmark.
///
/// # Errors
/// Only a missing manifest or console failure is fatal; benchmark failures
/// are reported and the run continues.
pub fn run_suite<E, O, R>(
    runner: &mut BenchmarkRunner<E, O, R>,
    config: &SuiteConfig,
) -> HarnessResult<SuiteSummary>
where
    E: ScriptEngine,
    O: Write,
    R: Write,
{
    let names = read_manifest(&config.folder)?;
    let mut summary = SuiteSummary::new();

    for name in &names {
        if config.only.as_ref().is_some_and(|only| only != name) {
            writeln!(runner.console().out(), "Skipping {}", name)?;
            summary.record_skip();
            continue;
        }

        run_benchmark(runner, &config.folder, name, &mut summary)?;
        runner.collect_garbage();
    }

    let out = runner.console().out();
    writeln!(out)?;
    writeln!(out, "Total (ms): {:.4}", summary.total_ms())?;
    if config.json {
        writeln!(out, "{}", format_results_json(&summary.runs)?)?;
    }

    Ok(summary)
}

fn run_benchmark<E, O, R>(
    runner: &mut BenchmarkRunner<E, O, R>,
    folder: &str,
    name: &str,
    summary: &mut SuiteSummary,
) -> HarnessResult<()>
where
    E: ScriptEngine,
    O: Write,
    R: Write,
{
    // Most benchmarks have no companion, so failing to load one is expected.
    // A companion that loads is timed like the benchmark itself.
    let data = format!("{}{}-data.js", folder, name);
    match runner.execute_timed(&data, summary)? {
        Ok(_) => {}
        Err(RunError::Load(err)) => log::debug!("no companion for {}: {}", name, err),
        Err(RunError::Exception(_)) => log::debug!("companion for {} threw", name),
    }

    let script = format!("{}{}.js", folder, name);
    let result = runner.execute_timed(&script, summary)?;
    if let Err(err) = &result {
        let err_stream = runner.console().err();
        if let RunError::Load(load) = err {
            writeln!(err_stream, "{}", load)?;
        }
        writeln!(err_stream, "Error executing file: {}", name)?;
    }
    summary.record(&result);

    Ok(())
}

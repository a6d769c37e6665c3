//! Filtered Octane runner
//!
//! Usage: `run-octane-filtered [path-prefix/] [filter...]`
//!
//! The base file and the wrap-up module always run; benchmark files run
//! only if a filter is a substring of their name.

use benchmarks::config::FilteredOctaneArgs;
use benchmarks::{octane, BenchmarkRunner, Console, HarnessResult, RunConfig};
use clap::Parser;
use js_engine::{QuickJsEngine, OCTANE_STACK_LIMIT};
use std::process;

fn run(config: &RunConfig) -> HarnessResult<()> {
    let engine = QuickJsEngine::new()?.with_stack_limit(OCTANE_STACK_LIMIT);
    let mut runner = BenchmarkRunner::new(engine, Console::stdio());

    let summary = octane::run_suite(&mut runner, config)?;
    runner.console().flush()?;
    log::info!("{} files skipped by filter", summary.skipped);
    Ok(())
}

fn main() {
    benchmarks::init_logging();
    let config = FilteredOctaneArgs::parse().into_config();
    log::debug!("configuration: {:?}", config);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

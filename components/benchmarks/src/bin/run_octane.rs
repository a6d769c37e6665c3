//! Octane runner
//!
//! Runs every Octane file from the working directory, then the wrap-up
//! module.

use benchmarks::config::OctaneArgs;
use benchmarks::{octane, BenchmarkRunner, Console, HarnessResult, RunConfig};
use clap::Parser;
use js_engine::{QuickJsEngine, OCTANE_STACK_LIMIT};
use std::process;

fn run(config: &RunConfig) -> HarnessResult<()> {
    let engine = QuickJsEngine::new()?.with_stack_limit(OCTANE_STACK_LIMIT);
    let mut runner = BenchmarkRunner::new(engine, Console::stdio());

    octane::run_suite(&mut runner, config)?;
    runner.console().flush()?;
    Ok(())
}

fn main() {
    benchmarks::init_logging();
    let config = OctaneArgs::parse().into_config();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

//! SunSpider/Kraken style runner
//!
//! Usage: `run-sunspider-like <benchmark folder/> [name] [--json]`
//!
//! Runs the benchmarks listed in `<benchmark folder/>LIST` with the stack
//! limit disabled, printing a timing line per benchmark and the total.

use benchmarks::config::SuiteArgs;
use benchmarks::{sunspider, BenchmarkRunner, Console, HarnessResult, SuiteConfig};
use clap::Parser;
use js_engine::{QuickJsEngine, StackLimit};
use std::process;

fn run(config: &SuiteConfig) -> HarnessResult<()> {
    let engine = QuickJsEngine::new()?.with_stack_limit(StackLimit::Unbounded);
    let mut runner = BenchmarkRunner::new(engine, Console::stdio());

    let summary = sunspider::run_suite(&mut runner, config)?;
    runner.console().flush()?;
    log::info!(
        "{} benchmarks passed, {} failed, {} skipped",
        summary.passed,
        summary.failed,
        summary.skipped
    );
    Ok(())
}

fn main() {
    benchmarks::init_logging();

    let result = SuiteArgs::parse()
        .into_config()
        .and_then(|config| run(&config));

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

//! Cross-engine comparison
//!
//! Usage: `bench-compare <name> <command> [<name> <command> ...] [--csv <file>]`
//!
//! Runs each command with `combined.js` appended, one after another, and
//! prints a Markdown table of the scores they report.

use benchmarks::compare::{parse_pairs, run_engine, Comparison};
use benchmarks::HarnessResult;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Compare benchmark scores across JavaScript engines
#[derive(Debug, Parser)]
#[command(name = "bench-compare", version)]
struct Args {
    /// Alternating engine names and commands
    #[arg(value_name = "NAME COMMAND")]
    pairs: Vec<String>,

    /// Also write the scores as CSV to this file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn run(args: Args) -> HarnessResult<()> {
    let mut comparison = Comparison::new();

    for engine in parse_pairs(&args.pairs) {
        println!("Running {}: {}", engine.name, engine.command_line());
        match run_engine(&engine) {
            Ok(scores) => {
                println!("{}: {} scores", engine.name, scores.len());
                comparison.add(engine.name, scores);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    if comparison.is_empty() {
        return Ok(());
    }

    println!("Markdown Table:");
    println!("{}", comparison.markdown_table());

    if let Some(path) = args.csv {
        fs::write(&path, comparison.csv())?;
        println!("CSV file has been saved as {}", path.display());
    }

    Ok(())
}

fn main() {
    benchmarks::init_logging();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

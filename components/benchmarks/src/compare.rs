//! Cross-engine score comparison
//!
//! Runs several engine commands over the same combined benchmark script,
//! collects the `[{ "name": ..., "result": ... }]` score array each one
//! prints, and lays the scores out side by side.

use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;

/// Script every engine command is given
pub const COMBINED_SCRIPT: &str = "combined.js";

const BENCHMARK_HEADER: &str = "Benchmark (Higher scores are better)";
const MIN_NAME_WIDTH: usize = 37;
const MIN_SCORE_WIDTH: usize = 17;
const MISSING: &str = "N/A";

/// A score as printed by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    /// Numeric score
    Number(f64),
    /// Anything else, kept verbatim
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One benchmark's score from one engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Benchmark name
    pub name: String,
    /// Reported score
    pub result: Score,
}

/// An engine to compare: display name and shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    /// Column title
    pub name: String,
    /// Shell command, without the script argument
    pub command: String,
}

impl EngineCommand {
    /// Full command line, with the combined script appended
    pub fn command_line(&self) -> String {
        format!("{} {}", self.command, COMBINED_SCRIPT)
    }
}

/// Pair up `<name> <command>` arguments, ignoring an incomplete trailing pair
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> Vec<EngineCommand> {
    args.chunks_exact(2)
        .map(|pair| EngineCommand {
            name: pair[0].as_ref().to_string(),
            command: pair[1].as_ref().to_string(),
        })
        .collect()
}

/// Extract the score array from an engine's output
///
/// Takes the first line holding a `[` with a `]` after it, from that `[`
/// to the line's last `]`. Output without one yields no scores.
///
/// # Errors
/// Returns the JSON error if the bracketed span is not a score array.
pub fn parse_scores(output: &str) -> Result<Vec<ScoreEntry>, serde_json::Error> {
    let span = output.lines().find_map(|line| {
        let start = line.find('[')?;
        let end = line.rfind(']')?;
        (end > start).then(|| &line[start..=end])
    });

    match span {
        Some(json) => serde_json::from_str(json),
        None => Ok(Vec::new()),
    }
}

/// Run an engine command through the shell and collect its scores
///
/// # Errors
/// Returns `HarnessError::Command` if the command cannot be started, exits
/// unsuccessfully, or prints an unparseable score array.
pub fn run_engine(engine: &EngineCommand) -> HarnessResult<Vec<ScoreEntry>> {
    let command_line = engine.command_line();
    log::info!("launching {}: {}", engine.name, command_line);

    let output = shell(&command_line)
        .output()
        .map_err(|err| HarnessError::Command {
            name: engine.name.clone(),
            reason: err.to_string(),
        })?;

    if !output.status.success() {
        return Err(HarnessError::Command {
            name: engine.name.clone(),
            reason: format!("{}: {}", output.status, String::from_utf8_lossy(&output.stderr).trim()),
        });
    }

    parse_scores(&String::from_utf8_lossy(&output.stdout)).map_err(|err| HarnessError::Command {
        name: engine.name.clone(),
        reason: format!("invalid score output: {}", err),
    })
}

#[cfg(unix)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

/// Scores collected per engine, in the order engines were added
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    engines: Vec<(String, Vec<ScoreEntry>)>,
}

impl Comparison {
    /// Create an empty comparison
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an engine's scores as a new column
    pub fn add(&mut self, engine: impl Into<String>, scores: Vec<ScoreEntry>) {
        self.engines.push((engine.into(), scores));
    }

    /// Number of engine columns
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engine has been added
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Benchmark names across all engines, in first-seen order
    pub fn benchmarks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, scores) in &self.engines {
            for entry in scores {
                if !names.contains(&entry.name.as_str()) {
                    names.push(&entry.name);
                }
            }
        }
        names
    }

    fn cell(scores: &[ScoreEntry], benchmark: &str) -> String {
        scores
            .iter()
            .find(|entry| entry.name == benchmark)
            .map(|entry| entry.result.to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// Render the comparison as a Markdown table
    pub fn markdown_table(&self) -> String {
        let benchmarks = self.benchmarks();
        let name_width = benchmarks
            .iter()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);
        let widths: Vec<usize> = self
            .engines
            .iter()
            .map(|(engine, scores)| {
                scores
                    .iter()
                    .map(|entry| entry.result.to_string().len())
                    .max()
                    .unwrap_or(0)
                    .max(engine.len())
                    .max(MIN_SCORE_WIDTH)
            })
            .collect();

        let mut table = format!("| {}  ", BENCHMARK_HEADER);
        for ((engine, _), width) in self.engines.iter().zip(&widths) {
            table.push_str(&format!("| {:<width$} ", engine, width = width));
        }
        table.push_str("|\n");

        table.push_str(&format!("|-{}-", "-".repeat(name_width)));
        for width in &widths {
            table.push_str(&format!("|-{}-", "-".repeat(*width)));
        }
        table.push_str("|\n");

        for benchmark in benchmarks {
            let mut row = vec![format!("| {:<width$}", benchmark, width = name_width)];
            for ((_, scores), width) in self.engines.iter().zip(&widths) {
                let cell = Self::cell(scores, benchmark);
                row.push(format!("| {:<width$}", cell, width = width));
            }
            table.push_str(&row.join(" "));
            table.push_str(" |\n");
        }

        table
    }

    /// Render the comparison as CSV
    pub fn csv(&self) -> String {
        let engines: Vec<&str> = self.engines.iter().map(|(name, _)| name.as_str()).collect();
        let mut csv = format!("Benchmark,{}\n", engines.join(","));

        for benchmark in self.benchmarks() {
            let mut row = vec![benchmark.to_string()];
            for (_, scores) in &self.engines {
                row.push(Self::cell(scores, benchmark));
            }
            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }
}

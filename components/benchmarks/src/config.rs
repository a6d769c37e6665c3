//! Run configuration and command-line parsing

use crate::error::{HarnessError, HarnessResult};
use clap::Parser;
use js_engine::EvalMode;
use std::collections::BTreeSet;

/// Which files of a fixed suite to run, and where they live
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Prepended verbatim to every file name
    pub path_prefix: String,
    /// Substring filters; empty means run everything
    pub filters: BTreeSet<String>,
    /// Mode the suite files are evaluated in
    pub mode: EvalMode,
}

impl RunConfig {
    /// Build a configuration from positional arguments
    ///
    /// The first argument is a path prefix only if it ends with `/`; every
    /// other argument is a filter.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).peekable();
        let path_prefix = match args.peek() {
            Some(first) if first.ends_with('/') => args.next().unwrap_or_default(),
            _ => String::new(),
        };

        Self {
            path_prefix,
            filters: args.collect(),
            mode: EvalMode::Global,
        }
    }

    /// Path of `file` with the prefix applied
    pub fn resolve(&self, file: &str) -> String {
        format!("{}{}", self.path_prefix, file)
    }

    /// Whether `file` passes the filters
    pub fn selects(&self, file: &str) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| file.contains(filter.as_str()))
    }
}

/// Arguments of `run-octane`
#[derive(Debug, Parser)]
#[command(name = "run-octane", version, about = "Run the full Octane suite")]
pub struct OctaneArgs {}

impl OctaneArgs {
    /// Configuration running every file from the working directory
    pub fn into_config(self) -> RunConfig {
        RunConfig::default()
    }
}

/// Arguments of `run-octane-filtered`
#[derive(Debug, Parser)]
#[command(
    name = "run-octane-filtered",
    version,
    about = "Run the Octane suite, optionally from a folder and filtered by name"
)]
pub struct FilteredOctaneArgs {
    /// Optional path prefix ending in '/', then substring filters
    #[arg(
        value_name = "PREFIX/ | FILTER",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<String>,
}

impl FilteredOctaneArgs {
    /// Resolve the positional arguments into a configuration
    pub fn into_config(self) -> RunConfig {
        RunConfig::from_args(self.args)
    }
}

/// Configuration of a manifest-driven run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Folder holding the `LIST` manifest and the scripts, including its trailing separator
    pub folder: String,
    /// Run only the benchmark with exactly this name
    pub only: Option<String>,
    /// Print the timing records as JSON after the total
    pub json: bool,
}

/// Arguments of `run-sunspider-like`
#[derive(Debug, Parser)]
#[command(
    name = "run-sunspider-like",
    version,
    about = "Run a SunSpider/Kraken style suite listed in <folder>/LIST"
)]
pub struct SuiteArgs {
    /// Benchmark folder, ending in '/'
    #[arg(value_name = "BENCHMARK_FOLDER")]
    pub folder: Option<String>,

    /// Only run the benchmark with this name
    #[arg(value_name = "NAME")]
    pub only: Option<String>,

    /// Print per-benchmark timings as JSON after the total
    #[arg(long)]
    pub json: bool,
}

impl SuiteArgs {
    /// Validate the arguments
    ///
    /// # Errors
    /// Returns `HarnessError::ManifestMissing` if no folder was given.
    pub fn into_config(self) -> HarnessResult<SuiteConfig> {
        let folder = self.folder.ok_or_else(|| HarnessError::ManifestMissing {
            program: "run-sunspider-like".to_string(),
        })?;

        Ok(SuiteConfig {
            folder,
            only: self.only,
            json: self.json,
        })
    }
}

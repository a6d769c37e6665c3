//! Octane suite driver tests

use crate::scripted_engine::ScriptedEngine;
use benchmarks::octane::{self, BASE_FILE, OCTANE_FILES, WRAP_UP_MODULE};
use benchmarks::{BenchmarkRunner, Console, RunConfig};
use js_engine::{EvalMode, ThrownValue};
use std::fs;
use tempfile::TempDir;

/// Suite folder holding every Octane file and the wrap-up module
fn suite_folder() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("octane")).unwrap();
    for file in std::iter::once(&BASE_FILE).chain(OCTANE_FILES).chain([&WRAP_UP_MODULE]) {
        fs::write(dir.path().join(file), format!("// {}\n", file)).unwrap();
    }
    let prefix = format!("{}/", dir.path().display());
    (dir, prefix)
}

fn all_files() -> Vec<String> {
    std::iter::once(BASE_FILE)
        .chain(OCTANE_FILES.iter().copied())
        .chain([WRAP_UP_MODULE])
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unfiltered_runs_everything_in_order() {
    let (_dir, prefix) = suite_folder();
    let config = RunConfig::from_args([prefix.clone()]);
    let mut runner = BenchmarkRunner::new(ScriptedEngine::new(), Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();

    let (engine, console) = runner.into_parts();
    assert_eq!(engine.evaluated_names(&prefix), all_files());
    assert_eq!(summary.passed, 21);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(console.output(), "");
    assert_eq!(console.errors(), "");
}

#[test]
fn test_wrap_up_runs_as_module() {
    let (_dir, prefix) = suite_folder();
    let config = RunConfig::from_args([prefix]);
    let mut runner = BenchmarkRunner::new(ScriptedEngine::new(), Console::captured());

    octane::run_suite(&mut runner, &config).unwrap();

    let (engine, _) = runner.into_parts();
    let (last, mode) = engine.evaluated.last().unwrap();
    assert!(last.ends_with(WRAP_UP_MODULE));
    assert_eq!(*mode, EvalMode::Module);
    assert!(engine.evaluated[..engine.evaluated.len() - 1]
        .iter()
        .all(|(_, mode)| *mode == EvalMode::Global));
}

#[test]
fn test_box2d_filter() {
    let (_dir, prefix) = suite_folder();
    let config = RunConfig::from_args([prefix.clone(), "box2d".to_string()]);
    let mut runner = BenchmarkRunner::new(ScriptedEngine::new(), Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();

    let (engine, console) = runner.into_parts();
    assert_eq!(
        engine.evaluated_names(&prefix),
        vec![BASE_FILE, "octane/box2d.js", WRAP_UP_MODULE]
    );
    assert_eq!(summary.skipped, 18);
    assert_eq!(summary.passed, 3);

    let output = console.output();
    for file in OCTANE_FILES.iter().filter(|f| **f != "octane/box2d.js") {
        assert!(output.contains(&format!("Skipping {}\n", file)), "no notice for {}", file);
    }
    assert!(!output.contains("Skipping octane/box2d.js"));
}

#[test]
fn test_any_matching_filter_selects() {
    let (_dir, prefix) = suite_folder();
    let config = RunConfig::from_args([prefix.clone(), "zlib".to_string(), "splay".to_string()]);
    let mut runner = BenchmarkRunner::new(ScriptedEngine::new(), Console::captured());

    octane::run_suite(&mut runner, &config).unwrap();

    let (engine, _) = runner.into_parts();
    assert_eq!(
        engine.evaluated_names(&prefix),
        vec![
            BASE_FILE,
            "octane/splay.js",
            "octane/zlib.js",
            "octane/zlib-data.js",
            WRAP_UP_MODULE
        ]
    );
}

#[test]
fn test_missing_files_are_reported_and_skipped_over() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("octane")).unwrap();
    fs::write(dir.path().join(BASE_FILE), "var base;").unwrap();
    fs::write(dir.path().join("octane/crypto.js"), "var crypto;").unwrap();
    let prefix = format!("{}/", dir.path().display());

    let config = RunConfig::from_args([prefix.clone()]);
    let mut runner = BenchmarkRunner::new(ScriptedEngine::new(), Console::captured());
    let summary = octane::run_suite(&mut runner, &config).unwrap();

    let (engine, console) = runner.into_parts();
    assert_eq!(
        engine.evaluated_names(&prefix),
        vec![BASE_FILE, "octane/crypto.js"]
    );
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 19);

    let errors = console.errors();
    assert!(errors.contains(&format!("Cannot open file: {}octane/richards.js\n", prefix)));
    assert!(errors.contains(&format!("Cannot open file: {}{}\n", prefix, WRAP_UP_MODULE)));
}

#[test]
fn test_exceptions_do_not_stop_the_run() {
    let (_dir, prefix) = suite_folder();
    let engine = ScriptedEngine::new()
        .throwing(
            "octane/raytrace.js",
            ThrownValue::error("Error: bad ray", Some("    at trace (raytrace.js:10)\n".to_string())),
        )
        .throwing("octane/splay.js", ThrownValue::plain("splay exploded"));
    let config = RunConfig::from_args([prefix]);
    let mut runner = BenchmarkRunner::new(engine, Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.passed, 19);
    assert_eq!(
        runner.console().output(),
        "    at trace (raytrace.js:10)\nsplay exploded\n"
    );
}

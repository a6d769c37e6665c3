//! Octane suite runs against QuickJS

use benchmarks::octane::{self, BASE_FILE, OCTANE_FILES, WRAP_UP_MODULE};
use benchmarks::{BenchmarkRunner, Console, RunConfig};
use integration_tests::SuiteDir;
use js_engine::{EvalMode, QuickJsEngine, ScriptEngine, OCTANE_STACK_LIMIT};

/// Octane folder where every benchmark registers its name with the base file
fn octane_folder() -> SuiteDir {
    let mut suite = SuiteDir::new().file(BASE_FILE, "var registered = [];\n");
    for file in OCTANE_FILES {
        let name = file.trim_start_matches("octane/").trim_end_matches(".js");
        suite = suite.file(file, &format!("registered.push('{}');\n", name));
    }
    suite.file(
        WRAP_UP_MODULE,
        "export const summary = registered.join(',');\nglobalThis.wrapUp = summary;\n",
    )
}

fn engine() -> QuickJsEngine {
    QuickJsEngine::new()
        .expect("engine creation failed")
        .with_stack_limit(OCTANE_STACK_LIMIT)
}

fn assert_global(engine: &mut QuickJsEngine, condition: &str) {
    let source = format!("if (!({})) throw new Error('failed: {}');", condition, condition.replace('\'', ""));
    let outcome = engine.evaluate(source.as_bytes(), "assert.js", EvalMode::Global);
    assert!(outcome.is_completed(), "{:?}", outcome);
}

/// Test: The full suite runs every file and the wrap-up module
#[test]
fn test_full_suite() {
    let suite = octane_folder();
    let config = RunConfig::from_args([suite.prefix()]);
    let mut runner = BenchmarkRunner::new(engine(), Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();
    assert_eq!(summary.passed, OCTANE_FILES.len() + 2);
    assert_eq!(summary.failed, 0);

    let (mut engine, console) = runner.into_parts();
    assert_eq!(console.output(), "");
    assert_global(&mut engine, "registered.length === 19");
    assert_global(&mut engine, "wrapUp.indexOf('typescript-compiler') > 0");
}

/// Test: A filter limits the run to matching files
#[test]
fn test_box2d_only() {
    let suite = octane_folder();
    let config = RunConfig::from_args([suite.prefix(), "box2d".to_string()]);
    let mut runner = BenchmarkRunner::new(engine(), Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();
    assert_eq!(summary.skipped, 18);

    let (mut engine, console) = runner.into_parts();
    let output = console.output();
    assert_eq!(output.lines().filter(|l| l.starts_with("Skipping ")).count(), 18);
    assert!(output.contains("Skipping octane/richards.js\n"));
    assert_global(&mut engine, "wrapUp === 'box2d'");
}

/// Test: A throwing benchmark is reported and the run continues
#[test]
fn test_throwing_benchmark_is_reported() {
    let suite = octane_folder().file("octane/deltablue.js", "throw 'deltablue broke';\n");
    let config = RunConfig::from_args([suite.prefix()]);
    let mut runner = BenchmarkRunner::new(engine(), Console::captured());

    let summary = octane::run_suite(&mut runner, &config).unwrap();
    assert_eq!(summary.failed, 1);

    let (mut engine, console) = runner.into_parts();
    assert_eq!(console.output(), "deltablue broke\n");
    assert_global(&mut engine, "registered.length === 18");
}

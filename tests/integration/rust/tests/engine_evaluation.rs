//! Evaluation and exception reporting through the runner with QuickJS

use benchmarks::{BenchmarkRunner, Console, LoadError, RunError, ScriptBuffer};
use integration_tests::SuiteDir;
use js_engine::{EvalMode, QuickJsEngine, ScriptEngine, OCTANE_STACK_LIMIT};

fn runner() -> BenchmarkRunner<QuickJsEngine, Vec<u8>, Vec<u8>> {
    let engine = QuickJsEngine::new()
        .expect("engine creation failed")
        .with_stack_limit(OCTANE_STACK_LIMIT);
    BenchmarkRunner::new(engine, Console::captured())
}

/// Test: A completing script prints nothing
#[test]
fn test_completed_script_is_silent() {
    let suite = SuiteDir::new().file("ok.js", "var total = 0; for (var i = 0; i < 10; i++) total += i;");
    let mut runner = runner();

    let result = runner
        .execute(&format!("{}ok.js", suite.prefix()), EvalMode::Global)
        .unwrap();

    assert!(result.is_ok());
    assert_eq!(runner.console().output(), "");
    assert_eq!(runner.console().errors(), "");
}

/// Test: Throwing a plain value prints its string form
#[test]
fn test_plain_throw_prints_string_form() {
    let suite = SuiteDir::new().file("plain.js", "throw 42;");
    let mut runner = runner();

    let result = runner
        .execute(&format!("{}plain.js", suite.prefix()), EvalMode::Global)
        .unwrap();

    assert!(matches!(result, Err(RunError::Exception(_))));
    assert_eq!(runner.console().output(), "42\n");
}

/// Test: Throwing an Error prints its stack trace
#[test]
fn test_error_throw_prints_stack() {
    let suite = SuiteDir::new().file(
        "error.js",
        "function inner() { throw new Error('deep failure'); }\nfunction outer() { inner(); }\nouter();\n",
    );
    let mut runner = runner();

    let result = runner
        .execute(&format!("{}error.js", suite.prefix()), EvalMode::Global)
        .unwrap();

    match result {
        Err(RunError::Exception(thrown)) => {
            assert!(thrown.is_error);
            assert_eq!(thrown.text, "Error: deep failure");
        }
        other => panic!("expected an exception, got {:?}", other),
    }

    let output = runner.console().output();
    assert!(output.contains("inner"), "stack missing frame: {}", output);
    assert!(output.contains("outer"), "stack missing frame: {}", output);
    assert!(
        output.contains(&format!("{}error.js:", suite.prefix())),
        "stack missing file name: {}",
        output
    );
    assert!(!output.contains("deep failure"));
}

/// Test: Non-Error objects print their string conversion
#[test]
fn test_object_throw_prints_to_string() {
    let suite = SuiteDir::new().file(
        "object.js",
        "throw { toString: function () { return 'custom failure'; } };",
    );
    let mut runner = runner();

    runner
        .execute(&format!("{}object.js", suite.prefix()), EvalMode::Global)
        .unwrap()
        .unwrap_err();

    assert_eq!(runner.console().output(), "custom failure\n");
}

/// Test: Running the same script twice gives the same outcome
#[test]
fn test_repeated_runs_are_idempotent() {
    let suite = SuiteDir::new()
        .file("pure.js", "(function () { var s = 0; for (var i = 0; i < 1000; i++) s += i; return s; })();")
        .file("fails.js", "(function () { throw new RangeError('always'); })();");
    let mut runner = runner();

    for name in ["pure.js", "fails.js"] {
        let path = format!("{}{}", suite.prefix(), name);
        let first = runner.execute(&path, EvalMode::Global).unwrap().is_ok();
        let second = runner.execute(&path, EvalMode::Global).unwrap().is_ok();
        assert_eq!(first, second, "outcome changed for {}", name);
    }
}

/// Test: Empty and oversized files are refused before evaluation
#[test]
fn test_unloadable_files_are_not_evaluated() {
    let suite = SuiteDir::new()
        .file("empty.js", "")
        .file("exact.js", "throw 'x';");
    let mut runner = runner().with_buffer(ScriptBuffer::with_capacity(10));

    let empty = runner
        .execute(&format!("{}empty.js", suite.prefix()), EvalMode::Global)
        .unwrap();
    assert!(matches!(empty, Err(RunError::Load(LoadError::EmptyRead { .. }))));

    let exact = runner
        .execute(&format!("{}exact.js", suite.prefix()), EvalMode::Global)
        .unwrap();
    assert!(matches!(exact, Err(RunError::Load(LoadError::TooLarge { .. }))));

    // Neither file reached the engine, so nothing was thrown or printed.
    assert_eq!(runner.console().output(), "");
}

/// Test: Module mode accepts export declarations
#[test]
fn test_module_mode_supports_exports() {
    let suite = SuiteDir::new().file("wrap.js", "export const done = true;\nglobalThis.wrapped = done;\n");
    let mut runner = runner();

    let path = format!("{}wrap.js", suite.prefix());
    assert!(runner.execute(&path, EvalMode::Module).unwrap().is_ok());

    let (mut engine, _) = runner.into_parts();
    let check = engine.evaluate(b"if (wrapped !== true) throw 'not wrapped';", "check.js", EvalMode::Global);
    assert!(check.is_completed());
}

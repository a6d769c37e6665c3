//! QuickJS-backed engine
//!
//! Owns one QuickJS runtime and one full context. Both are created together
//! and released together when the engine is dropped, so every exit path of a
//! driver tears the engine down.

use crate::engine::{EvalMode, Evaluation, ScriptEngine, StackLimit, ThrownValue};
use crate::error::{EngineError, EngineResult};
use rquickjs::convert::Coerced;
use rquickjs::function::Rest;
use rquickjs::{qjs, Context, Ctx, Function, Module, Object, Runtime, Value};
use std::ffi::CString;

/// Stack budget used by the Octane runners
pub const OCTANE_STACK_LIMIT: StackLimit = StackLimit::Bounded(864 * 1024);

/// Script engine backed by QuickJS
pub struct QuickJsEngine {
    // Declared before the runtime so it is freed first.
    context: Context,
    runtime: Runtime,
    stack_limit: StackLimit,
}

impl QuickJsEngine {
    /// Create a runtime and a full context with the host globals installed
    ///
    /// The stack check starts out disabled; see [`Self::with_stack_limit`].
    ///
    /// # Errors
    /// Returns `EngineError` if QuickJS fails to allocate the runtime or
    /// context, or a host global cannot be installed.
    ///
    /// # Example
    /// ```no_run
    /// use js_engine::{EvalMode, QuickJsEngine, ScriptEngine};
    ///
    /// let mut engine = QuickJsEngine::new().unwrap();
    /// let outcome = engine.evaluate(b"1 + 1", "inline.js", EvalMode::Global);
    /// assert!(outcome.is_completed());
    /// ```
    pub fn new() -> EngineResult<Self> {
        let runtime = Runtime::new().map_err(EngineError::Init)?;
        let context = Context::full(&runtime).map_err(EngineError::Init)?;
        runtime.set_max_stack_size(StackLimit::Unbounded.as_bytes());

        context.with(install_host_globals)?;
        log::debug!("QuickJS engine created");

        Ok(Self {
            context,
            runtime,
            stack_limit: StackLimit::Unbounded,
        })
    }

    /// Set the native stack budget for script execution
    pub fn with_stack_limit(mut self, limit: StackLimit) -> Self {
        self.set_stack_limit(limit);
        self
    }

    /// Change the native stack budget for script execution
    pub fn set_stack_limit(&mut self, limit: StackLimit) {
        self.runtime.set_max_stack_size(limit.as_bytes());
        self.stack_limit = limit;
        log::debug!("stack limit set to {:?}", limit);
    }

    /// Current native stack budget
    pub fn stack_limit(&self) -> StackLimit {
        self.stack_limit
    }
}

impl ScriptEngine for QuickJsEngine {
    fn evaluate(&mut self, source: &[u8], name: &str, mode: EvalMode) -> Evaluation {
        log::trace!("evaluating {} ({} bytes, {} mode)", name, source.len(), mode);

        self.context.with(|ctx| {
            let result = match mode {
                EvalMode::Global => eval_global(&ctx, source, name),
                EvalMode::Module => Module::evaluate(ctx.clone(), name, source.to_vec())
                    .and_then(|promise| promise.finish::<Value>())
                    .map(drop),
            };

            match result {
                Ok(()) => Evaluation::Completed,
                Err(rquickjs::Error::Exception) => {
                    Evaluation::Threw(snapshot_exception(&ctx, ctx.catch()))
                }
                Err(other) => Evaluation::Threw(ThrownValue::plain(other.to_string())),
            }
        })
    }

    fn run_gc(&mut self) {
        log::debug!("running garbage collection");
        self.runtime.run_gc();
    }
}

/// Evaluate a classic script in the global scope under `name`
///
/// Goes through `JS_Eval` directly so that `name` becomes the script's file
/// name in stack traces.
fn eval_global(ctx: &Ctx<'_>, source: &[u8], name: &str) -> rquickjs::Result<()> {
    // JS_Eval expects a NUL byte right after the input.
    let mut input = Vec::with_capacity(source.len() + 1);
    input.extend_from_slice(source);
    input.push(0);
    let file_name = CString::new(name.replace('\0', "")).unwrap_or_default();

    // SAFETY: `input` is NUL-terminated and outlives the call, `file_name` is
    // a valid C string, and the context pointer comes from a live `Ctx`.
    let raw = unsafe {
        qjs::JS_Eval(
            ctx.as_raw().as_ptr(),
            input.as_ptr().cast(),
            source.len() as _,
            file_name.as_ptr(),
            qjs::JS_EVAL_TYPE_GLOBAL as _,
        )
    };

    // SAFETY: `raw` was just returned by JS_Eval; the exception sentinel owns
    // nothing, any other value is owned by the wrapper and freed on drop.
    if unsafe { qjs::JS_IsException(raw) } {
        return Err(rquickjs::Error::Exception);
    }
    drop(unsafe { Value::from_raw(ctx.clone(), raw) });
    Ok(())
}

/// Copy what the reporter needs out of a thrown value, releasing the value itself
fn snapshot_exception<'js>(ctx: &Ctx<'js>, value: Value<'js>) -> ThrownValue {
    let text = match value.get::<Coerced<String>>() {
        Ok(Coerced(text)) => text,
        Err(_) => {
            // toString itself threw; drop that secondary exception
            let _ = ctx.catch();
            "<exception could not be converted to a string>".to_string()
        }
    };

    match value.as_exception() {
        Some(exception) => ThrownValue::error(text, exception.stack()),
        None => ThrownValue::plain(text),
    }
}

fn install_host_globals(ctx: Ctx<'_>) -> EngineResult<()> {
    let host_err =
        |name: &'static str| move |source: rquickjs::Error| EngineError::Host { name, source };
    let globals = ctx.globals();

    let print = Function::new(ctx.clone(), print_line).map_err(host_err("print"))?;
    globals.set("print", print).map_err(host_err("print"))?;

    let console = Object::new(ctx.clone()).map_err(host_err("console"))?;
    let console_log = Function::new(ctx.clone(), print_line).map_err(host_err("console"))?;
    console.set("log", console_log).map_err(host_err("console"))?;
    globals.set("console", console).map_err(host_err("console"))?;

    Ok(())
}

fn print_line(args: Rest<Coerced<String>>) {
    let line: Vec<String> = args.0.into_iter().map(|Coerced(s)| s).collect();
    println!("{}", line.join(" "));
}

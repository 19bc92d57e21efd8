//! Pipeline Evaluator
//!
//! This module provides the main PipelineEvaluator struct which resolves a
//! function name, validates the argument list against the function's
//! signature and dispatches to the operator implementation.

use crate::error::{EvalError, EvalResult};
use crate::function::{Function, FunctionCall};
use crate::operators::pattern::RegexCache;
use crate::options::EvaluatorOptions;
use crate::registry::FunctionRegistry;
use docpipe_types::Value;

/// The pipeline function evaluator
///
/// An evaluator holds no per-call state. It may be shared across threads;
/// the compiled-pattern cache is internally synchronized.
#[derive(Debug)]
pub struct PipelineEvaluator {
    /// Function name resolution
    registry: FunctionRegistry,
    /// Resource bounds
    options: EvaluatorOptions,
    /// Compiled patterns keyed by regex source
    regexes: RegexCache,
}

impl Default for PipelineEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineEvaluator {
    /// Create an evaluator with default options
    pub fn new() -> Self {
        Self::with_options(EvaluatorOptions::default())
    }

    /// Create an evaluator with custom options
    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self {
            registry: FunctionRegistry::standard(),
            regexes: RegexCache::new(options.regex_cache_capacity),
            options,
        }
    }

    /// Get the evaluator options
    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Get the function registry
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub(crate) fn regexes(&self) -> &RegexCache {
        &self.regexes
    }

    /// Evaluate a function call by name
    ///
    /// Fails with an internal error when the name is unknown, then with an
    /// arity error, then with a type mismatch, before the function runs.
    pub fn evaluate(&self, name: &str, args: Vec<Value>) -> EvalResult<Value> {
        let function = self.registry.get(name).inspect_err(|err| {
            log::debug!("{}", err);
        })?;
        self.evaluate_function(function, &args)
    }

    /// Evaluate a call to a resolved function
    pub fn evaluate_call(&self, call: &FunctionCall) -> EvalResult<Value> {
        self.evaluate_function(call.function, &call.args)
    }

    /// Evaluate a resolved function
    pub fn evaluate_function(&self, function: Function, args: &[Value]) -> EvalResult<Value> {
        log::trace!(
            "evaluating {} with argument types {:?}",
            function,
            args.iter().map(Value::value_type).collect::<Vec<_>>()
        );

        let result = function
            .signature()
            .check_args(args)
            .and_then(|()| self.dispatch(function, args));

        if let Err(err) = &result {
            log::debug!("{} failed [{}]: {}", function, err.code(), err);
        }
        result
    }

    /// Evaluate a function call, mapping any failure to [`Value::Unset`]
    ///
    /// This is how a pipeline stage records a failed field computation. The
    /// error is logged, not returned.
    pub fn evaluate_or_unset(&self, name: &str, args: Vec<Value>) -> Value {
        self.evaluate(name, args).unwrap_or(Value::Unset)
    }

    fn dispatch(&self, function: Function, args: &[Value]) -> EvalResult<Value> {
        match function {
            // Timestamp conversions
            Function::TimestampToUnixSeconds => {
                self.eval_timestamp_to_unix_seconds(unary(function, args)?)
            }
            Function::TimestampToUnixMillis => {
                self.eval_timestamp_to_unix_millis(unary(function, args)?)
            }
            Function::TimestampToUnixMicros => {
                self.eval_timestamp_to_unix_micros(unary(function, args)?)
            }
            Function::UnixSecondsToTimestamp => {
                self.eval_unix_seconds_to_timestamp(unary(function, args)?)
            }
            Function::UnixMillisToTimestamp => {
                self.eval_unix_millis_to_timestamp(unary(function, args)?)
            }
            Function::UnixMicrosToTimestamp => {
                self.eval_unix_micros_to_timestamp(unary(function, args)?)
            }
            Function::TimestampAdd => {
                let (ts, unit, amount) = ternary(function, args)?;
                self.eval_timestamp_add(ts, unit, amount)
            }
            Function::TimestampSub => {
                let (ts, unit, amount) = ternary(function, args)?;
                self.eval_timestamp_sub(ts, unit, amount)
            }

            // Length
            Function::ByteLength => self.eval_byte_length(unary(function, args)?),
            Function::CharLength => self.eval_char_length(unary(function, args)?),

            // Slicing
            Function::Substring => {
                let (value, position, length) = ternary(function, args)?;
                self.eval_substring(value, position, length)
            }
            Function::Reverse => self.eval_reverse(unary(function, args)?),

            // String predicates and transforms
            Function::StartsWith => {
                let (value, prefix) = binary(function, args)?;
                self.eval_starts_with(value, prefix)
            }
            Function::EndsWith => {
                let (value, suffix) = binary(function, args)?;
                self.eval_ends_with(value, suffix)
            }
            Function::StrContains => {
                let (value, needle) = binary(function, args)?;
                self.eval_str_contains(value, needle)
            }
            Function::StrConcat => self.eval_str_concat(args),
            Function::ToLower => self.eval_to_lower(unary(function, args)?),
            Function::ToUpper => self.eval_to_upper(unary(function, args)?),
            Function::Trim => self.eval_trim(unary(function, args)?),

            // Pattern matching
            Function::Like => {
                let (value, pattern) = binary(function, args)?;
                self.eval_like(value, pattern)
            }
            Function::RegexContains => {
                let (value, pattern) = binary(function, args)?;
                self.eval_regex_contains(value, pattern)
            }
            Function::RegexMatch => {
                let (value, pattern) = binary(function, args)?;
                self.eval_regex_match(value, pattern)
            }
        }
    }
}

fn unary(function: Function, args: &[Value]) -> EvalResult<&Value> {
    match args {
        [value] => Ok(value),
        _ => Err(EvalError::arity(function.name(), "1", args.len())),
    }
}

fn binary(function: Function, args: &[Value]) -> EvalResult<(&Value, &Value)> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(EvalError::arity(function.name(), "2", args.len())),
    }
}

fn ternary(function: Function, args: &[Value]) -> EvalResult<(&Value, &Value, &Value)> {
    match args {
        [first, second, third] => Ok((first, second, third)),
        _ => Err(EvalError::arity(function.name(), "3", args.len())),
    }
}

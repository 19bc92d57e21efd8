//! docpipe Evaluation Engine
//!
//! This crate evaluates the scalar functions of a document pipeline against
//! dynamically typed [`Value`]s:
//!
//! - **Timestamp functions**: Unix seconds, millis and micros conversions,
//!   timestampAdd, timestampSub
//! - **Length functions**: byteLength, charLength
//! - **Slicing**: substring, reverse
//! - **String functions**: startsWith, endsWith, strContains, strConcat,
//!   toLower, toUpper, trim
//! - **Pattern matching**: like, regexContains, regexMatch
//!
//! # Example
//!
//! ```
//! use docpipe_eval::PipelineEvaluator;
//! use docpipe_types::Value;
//!
//! let evaluator = PipelineEvaluator::new();
//! let result = evaluator
//!     .evaluate("substring", vec![Value::from("abcd"), Value::Int64(-3), Value::Int64(2)])
//!     .unwrap();
//! assert_eq!(result, Value::from("bc"));
//! ```
//!
//! # Null handling
//!
//! Only `toLower`, `toUpper`, `trim` and `reverse` map a `Null` argument to
//! `Null`. Every other function rejects `Null` with a type mismatch.

pub mod engine;
pub mod error;
pub mod function;
pub mod operators;
pub mod options;
pub mod registry;

pub use docpipe_types::{Timestamp, Value, ValueType};
pub use engine::PipelineEvaluator;
pub use error::{ErrorKind, EvalError, EvalResult};
pub use function::{Function, FunctionCall};
pub use operators::TimeUnit;
pub use options::EvaluatorOptions;
pub use registry::{FunctionRegistry, FunctionSignature, Parameter, Returns};

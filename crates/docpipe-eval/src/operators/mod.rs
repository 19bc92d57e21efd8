//! Function implementations
//!
//! This module contains the implementations of every pipeline function,
//! each as a method on [`PipelineEvaluator`](crate::PipelineEvaluator):
//!
//! - `timestamp`: Unix epoch conversions and timestamp arithmetic
//! - `string`: length, slicing, predicates, concatenation, case and trim
//! - `pattern`: like, regexContains, regexMatch

pub mod pattern;
pub mod string;
pub mod timestamp;

pub use timestamp::TimeUnit;

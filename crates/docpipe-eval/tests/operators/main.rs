//! Function integration tests for the pipeline evaluator
//!
//! These tests verify function behavior including:
//! - Correct results for every accepted argument type
//! - Null propagation for the null-tolerant transforms
//! - Type, range and pattern errors
//! - Edge cases and boundary conditions

mod pattern;
mod string;
mod timestamp;

//! docpipe diagnostics
//!
//! Stable error codes shared by the evaluator and the command-line tool, and
//! the [`Diagnostic`] type used to report them.

mod diagnostic;
mod error_code;

pub use diagnostic::*;
pub use error_code::*;

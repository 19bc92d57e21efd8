//! docpipe value model
//!
//! This crate defines the dynamically typed values a pipeline expression
//! operates on:
//! - [`Value`]: the closed set of document field values
//! - [`ValueType`]: the dynamic type tag of a value
//! - [`Timestamp`]: seconds/nanoseconds pairs restricted to years 1 through 9999

pub mod timestamp;
pub mod value;
pub mod value_type;

pub use timestamp::*;
pub use value::*;
pub use value_type::*;

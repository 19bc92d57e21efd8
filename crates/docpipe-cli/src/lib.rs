//! docpipe command-line support
//!
//! Argument literal parsing, result formatting and configuration loading
//! for the `docpipe` binary.

pub mod args;
pub mod config;

pub use args::{format_value, parse_value, parse_values};
pub use config::load_options;

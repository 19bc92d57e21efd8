//! docpipe error codes following a structured numbering system
//!
//! Error code ranges:
//! - DP0100-DP0199: Call errors (unknown function, argument count)
//! - DP0200-DP0299: Evaluation errors (type, range, pattern)
//! - DP0400-DP0499: System errors (I/O, configuration, input parsing)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a call error (0100-0199)
    pub const fn is_call_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DP{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Call errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown function")
        .with_help("Run `docpipe functions` to list the supported functions"));
    map.insert(101, ErrorInfo::new("Invalid argument count"));

    // Evaluation errors (0200-0299)
    map.insert(200, ErrorInfo::new("Type mismatch")
        .with_help("Arguments are never coerced between types"));
    map.insert(201, ErrorInfo::new("Value out of range"));
    map.insert(202, ErrorInfo::new("Invalid regular expression"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(402, ErrorInfo::new("Configuration error"));
    map.insert(403, ErrorInfo::new("Invalid argument literal")
        .with_help("Arguments are JSON literals, e.g. '\"text\"', 42, null"));

    map
});

// Call errors
pub const DP0100: ErrorCode = ErrorCode::new(100);
pub const DP0101: ErrorCode = ErrorCode::new(101);

// Evaluation errors
pub const DP0200: ErrorCode = ErrorCode::new(200);
pub const DP0201: ErrorCode = ErrorCode::new(201);
pub const DP0202: ErrorCode = ErrorCode::new(202);

// System errors
pub const DP0400: ErrorCode = ErrorCode::new(400);
pub const DP0401: ErrorCode = ErrorCode::new(401);
pub const DP0402: ErrorCode = ErrorCode::new(402);
pub const DP0403: ErrorCode = ErrorCode::new(403);

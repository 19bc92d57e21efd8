//! Evaluation errors for the pipeline evaluator

use docpipe_diagnostics::{DP0100, DP0101, DP0200, DP0201, DP0202, Diagnostic, ErrorCode};
use docpipe_types::ValueType;
use std::fmt;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating a function call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An argument's dynamic type is outside the accepted set
    #[error("{function}: expected {expected}, found {found}")]
    TypeMismatch {
        function: String,
        expected: String,
        found: ValueType,
    },

    /// An argument has the right type but lies outside the function's domain
    #[error("{function}: {message}")]
    Range { function: String, message: String },

    /// A regular expression failed to compile
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Wrong number of arguments
    #[error("{function} expects {expected} argument(s), found {found}")]
    Arity {
        function: String,
        expected: String,
        found: usize,
    },

    /// Function name outside the supported set
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },
}

/// Error taxonomy used by callers deciding how to treat a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument of an unaccepted type
    TypeMismatch,
    /// Argument outside the permissible domain
    Range,
    /// Invalid regular expression
    Pattern,
    /// Wrong argument count
    Arity,
    /// Malformed call that a well-formed pipeline never produces
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TypeMismatch => "type mismatch",
            Self::Range => "range error",
            Self::Pattern => "pattern error",
            Self::Arity => "arity error",
            Self::Internal => "internal error",
        };
        f.write_str(name)
    }
}

impl EvalError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        function: impl Into<String>,
        expected: impl Into<String>,
        found: ValueType,
    ) -> Self {
        Self::TypeMismatch {
            function: function.into(),
            expected: expected.into(),
            found,
        }
    }

    /// Create a range error
    pub fn range(function: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Range {
            function: function.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create an arity error
    pub fn arity(function: impl Into<String>, expected: impl Into<String>, found: usize) -> Self {
        Self::Arity {
            function: function.into(),
            expected: expected.into(),
            found,
        }
    }

    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Get the taxonomy of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Range { .. } => ErrorKind::Range,
            Self::InvalidPattern { .. } => ErrorKind::Pattern,
            Self::Arity { .. } => ErrorKind::Arity,
            Self::UnknownFunction { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable diagnostic code of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => DP0200,
            Self::Range { .. } => DP0201,
            Self::InvalidPattern { .. } => DP0202,
            Self::Arity { .. } => DP0101,
            Self::UnknownFunction { .. } => DP0100,
        }
    }

    /// Convert to a reportable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

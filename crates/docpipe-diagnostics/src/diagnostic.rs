//! Renderable error diagnostics

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An error message tagged with its stable code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic, taking help text from the code table
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: code.info().help.map(str::to_string),
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn to_colored_string(&self) -> String {
        use colored::Colorize;

        let mut out = format!(
            "{}{}: {}",
            "error".red().bold(),
            format!("[{}]", self.code).red().bold(),
            self.message.bold()
        );
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "= help:".cyan().bold(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

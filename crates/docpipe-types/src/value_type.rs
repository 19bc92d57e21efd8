//! Dynamic type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dynamic type of a [`Value`](crate::Value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Explicit null
    Null,
    /// Boolean
    Boolean,
    /// 64-bit signed integer
    Int64,
    /// 64-bit IEEE 754 floating point
    Double,
    /// UTF-8 string
    String,
    /// Arbitrary byte blob
    Bytes,
    /// Timestamp with nanosecond precision
    Timestamp,
    /// Result of a failed evaluation
    Unset,
}

impl ValueType {
    /// Get the display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Int64 => "Int64",
            Self::Double => "Double",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Timestamp => "Timestamp",
            Self::Unset => "Unset",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

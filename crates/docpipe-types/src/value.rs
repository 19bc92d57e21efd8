//! Runtime representation of document field values
//!
//! This module defines the [`Value`] enum consumed and produced by the
//! pipeline evaluator. Values are immutable once constructed; every
//! evaluation returns a fresh value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Timestamp, ValueType};

/// A dynamically typed document value.
///
/// `Unset` marks the outcome of a failed evaluation. It has no serialized
/// form, so it can never arrive from decoded document data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Explicit null
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Double(f64),
    /// UTF-8 string
    String(String),
    /// Arbitrary bytes, not required to be valid UTF-8
    Bytes(Vec<u8>),
    /// Timestamp within years 1 through 9999
    Timestamp(Timestamp),
    /// Outcome of a failed evaluation
    #[serde(skip)]
    Unset,
}

impl Value {
    /// Get the dynamic type of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Int64(_) => ValueType::Int64,
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
            Self::Bytes(_) => ValueType::Bytes,
            Self::Timestamp(_) => ValueType::Timestamp,
            Self::Unset => ValueType::Unset,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is the failed-evaluation marker
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Int64
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as Bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as Timestamp
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a bytes value
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Int64(i) => write!(f, "{}", i),
            Self::Double(d) => {
                // Keep doubles visually distinct from integers
                if d.is_finite() && d.fract() == 0.0 {
                    write!(f, "{:.1}", d)
                } else {
                    write!(f, "{}", d)
                }
            }
            Self::String(s) => write!(f, "{:?}", s),
            Self::Bytes(b) => {
                write!(f, "b\"")?;
                for byte in b {
                    write!(f, "\\x{:02x}", byte)?;
                }
                write!(f, "\"")
            }
            Self::Timestamp(t) => write!(f, "{}", t),
            Self::Unset => write!(f, "unset"),
        }
    }
}

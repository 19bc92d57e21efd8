//! The closed set of pipeline functions

use docpipe_types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A function the evaluator knows how to compute
///
/// Adding a variant forces every dispatch and signature `match` to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Function {
    // === Timestamp conversions ===
    TimestampToUnixSeconds,
    TimestampToUnixMillis,
    TimestampToUnixMicros,
    UnixSecondsToTimestamp,
    UnixMillisToTimestamp,
    UnixMicrosToTimestamp,
    TimestampAdd,
    TimestampSub,

    // === Length ===
    ByteLength,
    CharLength,

    // === Slicing ===
    Substring,
    Reverse,

    // === String predicates and transforms ===
    StartsWith,
    EndsWith,
    StrContains,
    StrConcat,
    ToLower,
    ToUpper,
    Trim,

    // === Pattern matching ===
    Like,
    RegexContains,
    RegexMatch,
}

impl Function {
    /// Every function, in catalogue order
    pub const ALL: [Function; 22] = [
        Self::TimestampToUnixSeconds,
        Self::TimestampToUnixMillis,
        Self::TimestampToUnixMicros,
        Self::UnixSecondsToTimestamp,
        Self::UnixMillisToTimestamp,
        Self::UnixMicrosToTimestamp,
        Self::TimestampAdd,
        Self::TimestampSub,
        Self::ByteLength,
        Self::CharLength,
        Self::Substring,
        Self::Reverse,
        Self::StartsWith,
        Self::EndsWith,
        Self::StrContains,
        Self::StrConcat,
        Self::ToLower,
        Self::ToUpper,
        Self::Trim,
        Self::Like,
        Self::RegexContains,
        Self::RegexMatch,
    ];

    /// SDK-facing name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TimestampToUnixSeconds => "timestampToUnixSeconds",
            Self::TimestampToUnixMillis => "timestampToUnixMillis",
            Self::TimestampToUnixMicros => "timestampToUnixMicros",
            Self::UnixSecondsToTimestamp => "unixSecondsToTimestamp",
            Self::UnixMillisToTimestamp => "unixMillisToTimestamp",
            Self::UnixMicrosToTimestamp => "unixMicrosToTimestamp",
            Self::TimestampAdd => "timestampAdd",
            Self::TimestampSub => "timestampSub",
            Self::ByteLength => "byteLength",
            Self::CharLength => "charLength",
            Self::Substring => "substring",
            Self::Reverse => "reverse",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::StrContains => "strContains",
            Self::StrConcat => "strConcat",
            Self::ToLower => "toLower",
            Self::ToUpper => "toUpper",
            Self::Trim => "trim",
            Self::Like => "like",
            Self::RegexContains => "regexContains",
            Self::RegexMatch => "regexMatch",
        }
    }

    /// Name used for the function in serialized pipeline stages
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::TimestampToUnixSeconds => "timestamp_to_unix_seconds",
            Self::TimestampToUnixMillis => "timestamp_to_unix_millis",
            Self::TimestampToUnixMicros => "timestamp_to_unix_micros",
            Self::UnixSecondsToTimestamp => "unix_seconds_to_timestamp",
            Self::UnixMillisToTimestamp => "unix_millis_to_timestamp",
            Self::UnixMicrosToTimestamp => "unix_micros_to_timestamp",
            Self::TimestampAdd => "timestamp_add",
            Self::TimestampSub => "timestamp_sub",
            Self::ByteLength => "byte_length",
            Self::CharLength => "char_length",
            Self::Substring => "substring",
            Self::Reverse => "reverse",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::StrContains => "str_contains",
            Self::StrConcat => "str_concat",
            Self::ToLower => "to_lower",
            Self::ToUpper => "to_upper",
            Self::Trim => "trim",
            Self::Like => "like",
            Self::RegexContains => "regex_contains",
            Self::RegexMatch => "regex_match",
        }
    }

    /// Additional names accepted for the function
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Reverse => &["strReverse", "str_reverse"],
            _ => &[],
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function applied to resolved arguments
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function to invoke
    pub function: Function,
    /// Arguments in call order
    pub args: Vec<Value>,
}

impl FunctionCall {
    /// Create a call
    pub fn new(function: Function, args: Vec<Value>) -> Self {
        Self { function, args }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

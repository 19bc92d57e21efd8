//! Timestamp operators
//!
//! Implements: timestampToUnixSeconds, timestampToUnixMillis,
//! timestampToUnixMicros, unixSecondsToTimestamp, unixMillisToTimestamp,
//! unixMicrosToTimestamp, timestampAdd, timestampSub

use crate::engine::PipelineEvaluator;
use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use crate::operators::string::mismatch;
use docpipe_types::{Timestamp, TimestampError, Value};
use std::fmt;
use std::str::FromStr;

/// Unit of a timestamp shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Get the unit name as written in a pipeline
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Length of one unit in microseconds
    pub const fn micros(&self) -> i64 {
        match self {
            Self::Microsecond => 1,
            Self::Millisecond => 1_000,
            Self::Second => 1_000_000,
            Self::Minute => 60_000_000,
            Self::Hour => 3_600_000_000,
            Self::Day => 86_400_000_000,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "microsecond" => Ok(Self::Microsecond),
            "millisecond" => Ok(Self::Millisecond),
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            _ => Err(format!(
                "unsupported time unit '{}', expected one of microsecond, millisecond, second, minute, hour, day",
                s
            )),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PipelineEvaluator {
    /// Evaluate timestampToUnixSeconds
    ///
    /// Truncates the nanosecond component.
    pub fn eval_timestamp_to_unix_seconds(&self, value: &Value) -> EvalResult<Value> {
        let ts = timestamp_arg(Function::TimestampToUnixSeconds, value)?;
        Ok(Value::Int64(ts.unix_seconds()))
    }

    /// Evaluate timestampToUnixMillis
    pub fn eval_timestamp_to_unix_millis(&self, value: &Value) -> EvalResult<Value> {
        let ts = timestamp_arg(Function::TimestampToUnixMillis, value)?;
        Ok(Value::Int64(ts.unix_millis()))
    }

    /// Evaluate timestampToUnixMicros
    pub fn eval_timestamp_to_unix_micros(&self, value: &Value) -> EvalResult<Value> {
        let ts = timestamp_arg(Function::TimestampToUnixMicros, value)?;
        Ok(Value::Int64(ts.unix_micros()))
    }

    /// Evaluate unixSecondsToTimestamp
    ///
    /// Both ends of the supported window are inclusive.
    pub fn eval_unix_seconds_to_timestamp(&self, value: &Value) -> EvalResult<Value> {
        let function = Function::UnixSecondsToTimestamp;
        let seconds = int64_arg(function, value)?;
        Timestamp::from_unix_seconds(seconds)
            .map(Value::Timestamp)
            .map_err(|e| out_of_range(function, e))
    }

    /// Evaluate unixMillisToTimestamp
    pub fn eval_unix_millis_to_timestamp(&self, value: &Value) -> EvalResult<Value> {
        let function = Function::UnixMillisToTimestamp;
        let millis = int64_arg(function, value)?;
        Timestamp::from_unix_millis(millis)
            .map(Value::Timestamp)
            .map_err(|e| out_of_range(function, e))
    }

    /// Evaluate unixMicrosToTimestamp
    ///
    /// Negative inputs are split with floor division, so the nanosecond
    /// component is never negative.
    pub fn eval_unix_micros_to_timestamp(&self, value: &Value) -> EvalResult<Value> {
        let function = Function::UnixMicrosToTimestamp;
        let micros = int64_arg(function, value)?;
        Timestamp::from_unix_micros(micros)
            .map(Value::Timestamp)
            .map_err(|e| out_of_range(function, e))
    }

    /// Evaluate timestampAdd
    pub fn eval_timestamp_add(&self, value: &Value, unit: &Value, amount: &Value) -> EvalResult<Value> {
        shift(Function::TimestampAdd, value, unit, amount)
    }

    /// Evaluate timestampSub
    pub fn eval_timestamp_sub(&self, value: &Value, unit: &Value, amount: &Value) -> EvalResult<Value> {
        shift(Function::TimestampSub, value, unit, amount)
    }
}

fn shift(function: Function, value: &Value, unit: &Value, amount: &Value) -> EvalResult<Value> {
    let ts = timestamp_arg(function, value)?;
    let unit = match unit {
        Value::String(s) => s
            .parse::<TimeUnit>()
            .map_err(|msg| EvalError::range(function.name(), msg))?,
        _ => return Err(mismatch(function, "String", unit)),
    };
    let amount = int64_arg(function, amount)?;

    let overflow = || EvalError::range(function.name(), format!("{} {}(s) overflows", amount, unit));
    let mut delta = amount.checked_mul(unit.micros()).ok_or_else(overflow)?;
    if function == Function::TimestampSub {
        delta = delta.checked_neg().ok_or_else(overflow)?;
    }

    ts.checked_add_micros(delta)
        .map(Value::Timestamp)
        .map_err(|e| out_of_range(function, e))
}

fn timestamp_arg(function: Function, value: &Value) -> EvalResult<Timestamp> {
    match value {
        Value::Timestamp(ts) => Ok(*ts),
        _ => Err(mismatch(function, "Timestamp", value)),
    }
}

fn int64_arg(function: Function, value: &Value) -> EvalResult<i64> {
    match value {
        Value::Int64(i) => Ok(*i),
        _ => Err(mismatch(function, "Int64", value)),
    }
}

fn out_of_range(function: Function, err: TimestampError) -> EvalError {
    EvalError::range(function.name(), err)
}

//! String and byte operators
//!
//! Implements: byteLength, charLength, substring, reverse, startsWith,
//! endsWith, strContains, strConcat, toLower, toUpper, trim
//!
//! Strings are indexed by Unicode code point (`char`), never by UTF-16 unit
//! or grapheme cluster. Bytes are indexed by raw byte.

use crate::engine::PipelineEvaluator;
use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use docpipe_types::Value;

impl PipelineEvaluator {
    /// Evaluate byteLength
    ///
    /// Returns the UTF-8 encoded length of a string or the raw length of a blob.
    pub fn eval_byte_length(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::String(s) => Ok(Value::Int64(s.len() as i64)),
            Value::Bytes(b) => Ok(Value::Int64(b.len() as i64)),
            _ => Err(mismatch(Function::ByteLength, "String or Bytes", value)),
        }
    }

    /// Evaluate charLength
    ///
    /// Counts code points: a character outside the Basic Multilingual Plane
    /// counts once, a combining mark counts separately.
    pub fn eval_char_length(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::String(s) => Ok(Value::Int64(s.chars().count() as i64)),
            _ => Err(mismatch(Function::CharLength, "String", value)),
        }
    }

    /// Evaluate substring
    ///
    /// A negative position counts back from the end and is clamped at the
    /// start. A length running past the end is truncated; a negative length
    /// is an error.
    pub fn eval_substring(&self, value: &Value, position: &Value, length: &Value) -> EvalResult<Value> {
        let position = match position {
            Value::Int64(p) => *p,
            _ => return Err(mismatch(Function::Substring, "Int64", position)),
        };
        let length = match length {
            Value::Int64(l) => *l,
            _ => return Err(mismatch(Function::Substring, "Int64", length)),
        };
        if length < 0 {
            return Err(EvalError::range(
                Function::Substring.name(),
                format!("length must be non-negative, got {}", length),
            ));
        }

        match value {
            Value::String(s) => {
                let (start, end) = window(s.chars().count(), position, length);
                let from = char_offset(s, start);
                let to = from + char_offset(&s[from..], end - start);
                Ok(Value::String(s[from..to].to_string()))
            }
            Value::Bytes(b) => {
                let (start, end) = window(b.len(), position, length);
                Ok(Value::Bytes(b[start..end].to_vec()))
            }
            _ => Err(mismatch(Function::Substring, "String or Bytes", value)),
        }
    }

    /// Evaluate reverse
    ///
    /// Strings are reversed by code point, so a multi-code-point grapheme is
    /// reordered internally. Bytes are reversed byte for byte.
    pub fn eval_reverse(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) => Ok(Value::String(s.chars().rev().collect())),
            Value::Bytes(b) => Ok(Value::Bytes(b.iter().rev().copied().collect())),
            _ => Err(mismatch(Function::Reverse, "String or Bytes", value)),
        }
    }

    /// Evaluate startsWith
    pub fn eval_starts_with(&self, value: &Value, prefix: &Value) -> EvalResult<Value> {
        let (s, p) = string_pair(Function::StartsWith, value, prefix)?;
        Ok(Value::Boolean(s.starts_with(p)))
    }

    /// Evaluate endsWith
    pub fn eval_ends_with(&self, value: &Value, suffix: &Value) -> EvalResult<Value> {
        let (s, sfx) = string_pair(Function::EndsWith, value, suffix)?;
        Ok(Value::Boolean(s.ends_with(sfx)))
    }

    /// Evaluate strContains
    pub fn eval_str_contains(&self, value: &Value, needle: &Value) -> EvalResult<Value> {
        let (s, n) = string_pair(Function::StrContains, value, needle)?;
        Ok(Value::Boolean(s.contains(n)))
    }

    /// Evaluate strConcat
    ///
    /// Every operand must be a string; nothing is stringified implicitly.
    pub fn eval_str_concat(&self, operands: &[Value]) -> EvalResult<Value> {
        if operands.is_empty() || operands.len() > self.options().max_concat_operands {
            return Err(EvalError::arity(
                Function::StrConcat.name(),
                format!("between 1 and {}", self.options().max_concat_operands),
                operands.len(),
            ));
        }

        let mut capacity = 0;
        for operand in operands {
            match operand {
                Value::String(s) => capacity += s.len(),
                _ => return Err(mismatch(Function::StrConcat, "String", operand)),
            }
        }

        let mut result = String::with_capacity(capacity);
        for s in operands.iter().filter_map(Value::as_str) {
            result.push_str(s);
        }
        Ok(Value::String(result))
    }

    /// Evaluate toLower
    pub fn eval_to_lower(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            _ => Err(mismatch(Function::ToLower, "String", value)),
        }
    }

    /// Evaluate toUpper
    pub fn eval_to_upper(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            _ => Err(mismatch(Function::ToUpper, "String", value)),
        }
    }

    /// Evaluate trim
    ///
    /// Strips leading and trailing Unicode whitespace.
    pub fn eval_trim(&self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) => Ok(Value::String(s.trim().to_string())),
            _ => Err(mismatch(Function::Trim, "String", value)),
        }
    }
}

pub(crate) fn mismatch(function: Function, expected: &str, found: &Value) -> EvalError {
    EvalError::type_mismatch(function.name(), expected, found.value_type())
}

pub(crate) fn string_pair<'a>(
    function: Function,
    left: &'a Value,
    right: &'a Value,
) -> EvalResult<(&'a str, &'a str)> {
    match (left, right) {
        (Value::String(l), Value::String(r)) => Ok((l, r)),
        (Value::String(_), other) | (other, _) => Err(mismatch(function, "String", other)),
    }
}

/// Resolve a (position, length) request against a sequence of `len` units
///
/// Returns the half-open unit range `[start, end)`, empty when the start lies
/// past the end. `length` must already be non-negative.
fn window(len: usize, position: i64, length: i64) -> (usize, usize) {
    let len_i = len as i64;
    let start = if position < 0 {
        len_i.saturating_add(position).max(0)
    } else {
        position
    };
    if start >= len_i {
        return (len, len);
    }
    let end = start + length.min(len_i - start);
    (start as usize, end as usize)
}

/// Byte offset of the `n`th code point, or the string length past the end
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

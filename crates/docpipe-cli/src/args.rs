//! Command-line argument literals
//!
//! Each argument is a JSON literal. Plain JSON maps onto the value model
//! directly; blobs and timestamps use the tagged form
//! `{"type": "Bytes", "value": [1, 2]}`.

use docpipe_diagnostics::{DP0403, Diagnostic};
use docpipe_types::Value;
use serde_json::Value as Json;

/// Parse one argument literal
pub fn parse_value(literal: &str) -> Result<Value, Diagnostic> {
    let json: Json = serde_json::from_str(literal)
        .map_err(|e| invalid(literal, e))?;

    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Boolean(b)),
        Json::String(s) => Ok(Value::String(s)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int64(i))
            } else if n.is_u64() {
                Err(invalid(literal, "integer does not fit in Int64"))
            } else {
                n.as_f64()
                    .map(Value::Double)
                    .ok_or_else(|| invalid(literal, "unrepresentable number"))
            }
        }
        Json::Object(_) => serde_json::from_value(json).map_err(|e| invalid(literal, e)),
        Json::Array(_) => Err(invalid(
            literal,
            "arrays are not values; use {\"type\": \"Bytes\", \"value\": [..]} for a blob",
        )),
    }
}

/// Parse every argument literal, stopping at the first invalid one
pub fn parse_values<S: AsRef<str>>(literals: &[S]) -> Result<Vec<Value>, Diagnostic> {
    literals.iter().map(|l| parse_value(l.as_ref())).collect()
}

fn invalid(literal: &str, reason: impl std::fmt::Display) -> Diagnostic {
    Diagnostic::error(DP0403, format!("invalid argument `{}`: {}", literal, reason))
}

/// Render a result for the terminal
///
/// With `json` set the tagged serde form is printed instead.
pub fn format_value(value: &Value, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(value.to_string())
    }
}

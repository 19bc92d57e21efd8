//! Pattern matching operators
//!
//! Implements: like, regexContains, regexMatch
//!
//! Patterns are parsed with `regex-syntax` and compiled with the
//! `regex-automata` meta engine. Whole-value anchoring is applied to the
//! parsed pattern, never by editing its text, so flags and comments inside
//! the pattern cannot interact with the anchors. Compiled patterns are cached
//! per evaluator.

use crate::engine::PipelineEvaluator;
use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use crate::operators::string::string_pair;
use docpipe_types::Value;
use parking_lot::Mutex;
use regex_automata::meta::{self, Regex};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};
use std::collections::HashMap;

/// How a compiled pattern is positioned against the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchoring {
    /// Match anywhere in the value
    Unanchored,
    /// Match the whole value
    WholeValue,
}

/// Bounded cache of compiled patterns
///
/// When full, the cache is cleared before the next insert.
#[derive(Debug)]
pub(crate) struct RegexCache {
    capacity: usize,
    entries: Mutex<HashMap<(Anchoring, String), Regex>>,
}

impl RegexCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the compiled form of `source`, compiling it on a miss
    ///
    /// `pattern` is the user-supplied text reported in errors.
    pub(crate) fn get_or_compile(
        &self,
        source: &str,
        anchoring: Anchoring,
        pattern: &str,
        size_limit: usize,
    ) -> EvalResult<Regex> {
        if let Some(regex) = self.entries.lock().get(&(anchoring, source.to_string())) {
            return Ok(regex.clone());
        }

        log::debug!("compiling {:?} pattern {:?}", anchoring, source);
        let regex = compile(source, anchoring, size_limit)
            .map_err(|message| EvalError::invalid_pattern(pattern, message))?;

        if self.capacity > 0 {
            let mut entries = self.entries.lock();
            if entries.len() >= self.capacity {
                entries.clear();
            }
            entries.insert((anchoring, source.to_string()), regex.clone());
        }
        Ok(regex)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

fn compile(source: &str, anchoring: Anchoring, size_limit: usize) -> Result<Regex, String> {
    let hir = ParserBuilder::new()
        .build()
        .parse(source)
        .map_err(|e| e.to_string())?;
    let hir = match anchoring {
        Anchoring::Unanchored => hir,
        Anchoring::WholeValue => {
            Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)])
        }
    };
    Regex::builder()
        .configure(meta::Config::new().nfa_size_limit(Some(size_limit)))
        .build_from_hir(&hir)
        .map_err(|e| e.to_string())
}

impl PipelineEvaluator {
    /// Evaluate like
    ///
    /// `%` matches any run of code points, `_` exactly one. The match is
    /// anchored at both ends and case-sensitive.
    pub fn eval_like(&self, value: &Value, pattern: &Value) -> EvalResult<Value> {
        let (s, p) = string_pair(Function::Like, value, pattern)?;
        let regex = self.compile(&like_to_regex(p), Anchoring::WholeValue, p)?;
        Ok(Value::Boolean(regex.is_match(s)))
    }

    /// Evaluate regexContains
    ///
    /// True when any substring matches the pattern.
    pub fn eval_regex_contains(&self, value: &Value, pattern: &Value) -> EvalResult<Value> {
        let (s, p) = string_pair(Function::RegexContains, value, pattern)?;
        let regex = self.compile(p, Anchoring::Unanchored, p)?;
        Ok(Value::Boolean(regex.is_match(s)))
    }

    /// Evaluate regexMatch
    ///
    /// True only when the whole value matches the pattern.
    pub fn eval_regex_match(&self, value: &Value, pattern: &Value) -> EvalResult<Value> {
        let (s, p) = string_pair(Function::RegexMatch, value, pattern)?;
        let regex = self.compile(p, Anchoring::WholeValue, p)?;
        Ok(Value::Boolean(regex.is_match(s)))
    }

    fn compile(&self, source: &str, anchoring: Anchoring, pattern: &str) -> EvalResult<Regex> {
        self.regexes()
            .get_or_compile(source, anchoring, pattern, self.options().regex_size_limit)
    }
}

/// Translate a LIKE pattern into regex syntax
///
/// The result is unanchored; callers compile it with
/// [`Anchoring::WholeValue`]. `\` escapes the next character; a trailing lone
/// `\` is literal.
pub(crate) fn like_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("(?s)");

    let mut chars = pattern.chars();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        match c {
            '%' => out.push_str(".*"),
            '_' => out.push('.'),
            '\\' => {
                let literal = chars.next().unwrap_or('\\');
                out.push_str(&regex::escape(literal.encode_utf8(&mut buf)));
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out
}

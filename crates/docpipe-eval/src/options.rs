//! Evaluator configuration

use serde::{Deserialize, Serialize};

/// Default compiled-regex size limit (10 MiB)
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Default number of compiled patterns kept per evaluator
pub const DEFAULT_REGEX_CACHE_CAPACITY: usize = 64;

/// Default upper bound on `strConcat` operands
pub const DEFAULT_MAX_CONCAT_OPERANDS: usize = 10_000;

/// Tunables for a [`PipelineEvaluator`](crate::PipelineEvaluator)
///
/// None of these change the result of a successful evaluation; they bound
/// the resources a single call may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorOptions {
    /// Size limit for a compiled regular expression, in bytes
    pub regex_size_limit: usize,
    /// Compiled patterns cached per evaluator; 0 disables the cache
    pub regex_cache_capacity: usize,
    /// Maximum number of `strConcat` operands
    pub max_concat_operands: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
            max_concat_operands: DEFAULT_MAX_CONCAT_OPERANDS,
        }
    }
}

impl EvaluatorOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiled-regex size limit
    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }

    /// Set the regex cache capacity
    pub fn with_regex_cache_capacity(mut self, capacity: usize) -> Self {
        self.regex_cache_capacity = capacity;
        self
    }

    /// Set the maximum number of `strConcat` operands
    pub fn with_max_concat_operands(mut self, max: usize) -> Self {
        self.max_concat_operands = max;
        self
    }
}

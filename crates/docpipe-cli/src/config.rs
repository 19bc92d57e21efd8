//! Evaluator configuration files

use docpipe_diagnostics::{DP0401, DP0402, Diagnostic};
use docpipe_eval::EvaluatorOptions;
use std::fs;
use std::path::Path;

const CONFIG_KEYS: &str = "regex_size_limit, regex_cache_capacity, max_concat_operands";

/// Load evaluator options from a TOML file
///
/// Missing keys keep their defaults; unknown keys are rejected.
pub fn load_options(path: &Path) -> Result<EvaluatorOptions, Diagnostic> {
    let text = fs::read_to_string(path).map_err(|e| {
        Diagnostic::error(DP0401, format!("cannot read {}: {}", path.display(), e))
            .with_help("Check the path passed to --config")
    })?;
    let options: EvaluatorOptions = toml::from_str(&text).map_err(|e| {
        Diagnostic::error(DP0402, format!("invalid config {}: {}", path.display(), e.message()))
            .with_help(format!("Supported keys: {}", CONFIG_KEYS))
    })?;
    log::debug!("loaded evaluator options from {}: {:?}", path.display(), options);
    Ok(options)
}

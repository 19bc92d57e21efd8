//! Pattern Function Tests
//!
//! Tests for: like, regexContains, regexMatch

use docpipe_eval::{ErrorKind, EvalError, PipelineEvaluator, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn evaluator() -> PipelineEvaluator {
    PipelineEvaluator::new()
}

fn matches(name: &str, value: &str, pattern: &str) -> bool {
    match evaluator().evaluate(name, vec![Value::from(value), Value::from(pattern)]) {
        Ok(Value::Boolean(b)) => b,
        other => panic!("{}({:?}, {:?}) returned {:?}", name, value, pattern, other),
    }
}

// ============================================================================
// like
// ============================================================================

#[rstest]
#[case("hello", "hello", true)]
#[case("hello", "h%", true)]
#[case("hello", "%llo", true)]
#[case("hello", "%ll%", true)]
#[case("hello", "h_llo", true)]
#[case("hello", "h_lo", false)]
#[case("hello", "%", true)]
#[case("", "%", true)]
#[case("", "_", false)]
#[case("hello", "Hello", false)]
#[case("hello", "hell", false)]
#[case("a.c", "a.c", true)]
#[case("abc", "a.c", false)]
#[case("a+b", "a+b", true)]
#[case("你好", "_好", true)]
#[case("🀄", "_", true)]
#[case("", "%hi%", false)]
#[case("", "", true)]
#[case("a", "", false)]
fn test_like(#[case] value: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(matches("like", value, pattern), expected);
}

#[rstest]
#[case("50%", r"50\%", true)]
#[case("500", r"50\%", false)]
#[case("a_c", r"a\_c", true)]
#[case("abc", r"a\_c", false)]
#[case(r"a\c", r"a\\c", true)]
#[case(r"ends\", r"ends\", true)]
fn test_like_escape(#[case] value: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(matches("like", value, pattern), expected);
}

#[test]
fn test_like_rejects_non_strings() {
    let err = evaluator()
        .evaluate("like", vec![Value::Null, Value::from("%")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

// ============================================================================
// regexContains / regexMatch
// ============================================================================

#[test]
fn test_contains_versus_match() {
    assert!(matches("regexContains", "yummy good food", "good"));
    assert!(!matches("regexMatch", "yummy good food", "good"));
    assert!(matches("regexMatch", "yummy good food", ".*good.*"));
}

#[rstest]
#[case("abc123", r"\d+", true, false)]
#[case("123", r"\d+", true, true)]
#[case("abc", "a|abc", true, true)]
#[case("", "", true, true)]
#[case("xyz", "^y", false, false)]
#[case("line1\nline2", "line2", true, false)]
#[case("a", "(?x)a # letter a", true, true)]
#[case("ab", "(?x)a # letter a", true, false)]
#[case("a\nb", "(?m)a$", true, false)]
fn test_regex_functions(
    #[case] value: &str,
    #[case] pattern: &str,
    #[case] contains: bool,
    #[case] full: bool,
) {
    assert_eq!(matches("regexContains", value, pattern), contains);
    assert_eq!(matches("regexMatch", value, pattern), full);
}

#[rstest]
#[case("regexContains", "(")]
#[case("regexMatch", "(")]
#[case("regexContains", "[a-")]
#[case("regexMatch", "a)|(b")]
#[case("regexContains", r"(a)\1")]
#[case("regexMatch", r"(a)\1")]
fn test_invalid_pattern(#[case] name: &str, #[case] pattern: &str) {
    let err = evaluator()
        .evaluate(name, vec![Value::from("abc"), Value::from(pattern)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Pattern);
    assert!(matches!(err, EvalError::InvalidPattern { pattern: ref p, .. } if p == pattern));
}

#[test]
fn test_repeated_pattern_uses_cache() {
    let evaluator = evaluator();
    for _ in 0..3 {
        let result = evaluator
            .evaluate("regexMatch", vec![Value::from("abc"), Value::from("[a-c]+")])
            .unwrap();
        assert_eq!(result, Value::Boolean(true));
    }
}

//! String Function Tests
//!
//! Tests for: byteLength, charLength, substring, reverse, startsWith, endsWith,
//! strContains, strConcat, toLower, toUpper, trim

use docpipe_eval::{ErrorKind, EvalError, PipelineEvaluator, Value, ValueType};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Test Helpers
// ============================================================================

fn evaluator() -> PipelineEvaluator {
    PipelineEvaluator::new()
}

fn eval(name: &str, args: Vec<Value>) -> Value {
    evaluator().evaluate(name, args).unwrap()
}

fn eval_err(name: &str, args: Vec<Value>) -> EvalError {
    evaluator().evaluate(name, args).unwrap_err()
}

fn s(value: &str) -> Value {
    Value::from(value)
}

fn b(value: &[u8]) -> Value {
    Value::bytes(value.to_vec())
}

// ============================================================================
// byteLength / charLength
// ============================================================================

#[rstest]
#[case(s("abc"), 3)]
#[case(s("你好世界"), 12)]
#[case(s(""), 0)]
#[case(b(&[]), 0)]
#[case(b(&[0x00, 0xff, 0x10]), 3)]
fn test_byte_length(#[case] value: Value, #[case] expected: i64) {
    assert_eq!(eval("byteLength", vec![value]), Value::Int64(expected));
}

#[rstest]
#[case(Value::Null, ValueType::Null)]
#[case(Value::Int64(123), ValueType::Int64)]
#[case(Value::Boolean(true), ValueType::Boolean)]
fn test_byte_length_type_mismatch(#[case] value: Value, #[case] found: ValueType) {
    assert_eq!(
        eval_err("byteLength", vec![value]),
        EvalError::type_mismatch("byteLength", "String or Bytes", found)
    );
}

#[rstest]
#[case("abc", 3)]
#[case("你好世界", 4)]
#[case("", 0)]
#[case("🀄", 1)]
#[case("e\u{301}", 2)]
fn test_char_length(#[case] value: &str, #[case] expected: i64) {
    assert_eq!(eval("charLength", vec![s(value)]), Value::Int64(expected));
}

#[test]
fn test_char_length_rejects_bytes() {
    let err = eval_err("charLength", vec![b(b"abc")]);
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

// ============================================================================
// substring
// ============================================================================

#[rstest]
#[case("abcd", -3, 2, "bc")]
#[case("abcd", 0, 4, "abcd")]
#[case("abcd", 1, 100, "bcd")]
#[case("abcd", -100, 2, "ab")]
#[case("abcd", 4, 1, "")]
#[case("abcd", 10, 1, "")]
#[case("abcd", 1, 0, "")]
#[case("你好世界", 1, 2, "好世")]
#[case("", 0, 5, "")]
fn test_substring_string(
    #[case] value: &str,
    #[case] position: i64,
    #[case] length: i64,
    #[case] expected: &str,
) {
    let result = eval(
        "substring",
        vec![s(value), Value::Int64(position), Value::Int64(length)],
    );
    assert_eq!(result, s(expected));
}

#[rstest]
#[case(&[1, 2, 3, 4], -3, 2, &[2, 3])]
#[case(&[1, 2, 3, 4], 2, 10, &[3, 4])]
#[case(&[1, 2, 3, 4], 4, 1, &[])]
fn test_substring_bytes(
    #[case] value: &[u8],
    #[case] position: i64,
    #[case] length: i64,
    #[case] expected: &[u8],
) {
    let result = eval(
        "substring",
        vec![b(value), Value::Int64(position), Value::Int64(length)],
    );
    assert_eq!(result, b(expected));
}

#[test]
fn test_substring_bytes_by_byte_not_code_point() {
    // "é" is two bytes in UTF-8; slicing bytes may split it.
    let result = eval(
        "substring",
        vec![b("é".as_bytes()), Value::Int64(0), Value::Int64(1)],
    );
    assert_eq!(result, b(&[0xc3]));
}

#[test]
fn test_substring_negative_length_is_range_error() {
    let err = eval_err(
        "substring",
        vec![s("abc"), Value::Int64(0), Value::Int64(-1)],
    );
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[rstest]
#[case(vec![Value::Null, Value::Int64(0), Value::Int64(1)])]
#[case(vec![s("abc"), s("0"), Value::Int64(1)])]
#[case(vec![s("abc"), Value::Int64(0), Value::Double(1.0)])]
fn test_substring_type_mismatch(#[case] args: Vec<Value>) {
    assert_eq!(eval_err("substring", args).kind(), ErrorKind::TypeMismatch);
}

// ============================================================================
// reverse
// ============================================================================

#[rstest]
#[case(s("abc"), s("cba"))]
#[case(s("你好"), s("好你"))]
#[case(s(""), s(""))]
#[case(b(&[1, 2, 3]), b(&[3, 2, 1]))]
#[case(Value::Null, Value::Null)]
fn test_reverse(#[case] value: Value, #[case] expected: Value) {
    assert_eq!(eval("reverse", vec![value]), expected);
}

#[test]
fn test_reverse_alias() {
    assert_eq!(eval("strReverse", vec![s("ab")]), s("ba"));
}

#[test]
fn test_reverse_does_not_preserve_graphemes() {
    // The combining accent moves in front of the base letter.
    assert_eq!(eval("reverse", vec![s("e\u{301}x")]), s("x\u{301}e"));
}

// ============================================================================
// startsWith / endsWith / strContains
// ============================================================================

#[rstest]
#[case("startsWith", "search", "sea", true)]
#[case("startsWith", "search", "arch", false)]
#[case("startsWith", "search", "", true)]
#[case("endsWith", "search", "arch", true)]
#[case("endsWith", "search", "sea", false)]
#[case("endsWith", "", "", true)]
#[case("strContains", "search", "ear", true)]
#[case("strContains", "search", "x", false)]
#[case("strContains", "search", "", true)]
fn test_string_predicates(
    #[case] name: &str,
    #[case] value: &str,
    #[case] operand: &str,
    #[case] expected: bool,
) {
    assert_eq!(eval(name, vec![s(value), s(operand)]), Value::Boolean(expected));
}

#[rstest]
#[case("startsWith")]
#[case("endsWith")]
#[case("strContains")]
fn test_string_predicates_reject_non_strings(#[case] name: &str) {
    assert_eq!(eval_err(name, vec![s("a"), Value::Null]).kind(), ErrorKind::TypeMismatch);
    assert_eq!(eval_err(name, vec![b(b"a"), s("a")]).kind(), ErrorKind::TypeMismatch);
}

// ============================================================================
// strConcat
// ============================================================================

#[test]
fn test_str_concat() {
    assert_eq!(eval("strConcat", vec![s("foo"), s(" "), s("bar")]), s("foo bar"));
    assert_eq!(eval("strConcat", vec![s("foo"), s("bar")]), s("foobar"));
    assert_eq!(eval("strConcat", vec![s("foo")]), s("foo"));
    assert_eq!(eval("strConcat", vec![s(""), s(""), s("")]), s(""));
}

#[test]
fn test_str_concat_many_operands() {
    let args = vec![s("ab"); 500];
    assert_eq!(eval("strConcat", args), s(&"ab".repeat(500)));
}

#[test]
fn test_str_concat_rejects_non_string() {
    assert_eq!(
        eval_err("strConcat", vec![s("foo"), Value::Int64(42), s("bar")]),
        EvalError::type_mismatch("strConcat", "String", ValueType::Int64)
    );
}

#[test]
fn test_str_concat_requires_an_operand() {
    assert_eq!(eval_err("strConcat", vec![]).kind(), ErrorKind::Arity);
}

// ============================================================================
// toLower / toUpper / trim
// ============================================================================

#[rstest]
#[case("toLower", "HeLLo", "hello")]
#[case("toUpper", "HeLLo", "HELLO")]
#[case("toUpper", "straße", "STRASSE")]
#[case("trim", "  x y \t\n", "x y")]
#[case("trim", "\u{3000}x\u{a0}", "x")]
#[case("trim", "", "")]
fn test_transforms(#[case] name: &str, #[case] value: &str, #[case] expected: &str) {
    assert_eq!(eval(name, vec![s(value)]), s(expected));
}

#[rstest]
#[case("toLower")]
#[case("toUpper")]
#[case("trim")]
fn test_transforms_propagate_null(#[case] name: &str) {
    assert_eq!(eval(name, vec![Value::Null]), Value::Null);
}

#[rstest]
#[case("toLower")]
#[case("toUpper")]
#[case("trim")]
fn test_transforms_reject_bytes(#[case] name: &str) {
    assert_eq!(eval_err(name, vec![b(b"A")]).kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_transforms_are_idempotent() {
    for (name, value) in [("toLower", "MiXeD"), ("toUpper", "MiXeD"), ("trim", "  pad  ")] {
        let once = eval(name, vec![s(value)]);
        let twice = eval(name, vec![once.clone()]);
        assert_eq!(once, twice, "{}", name);
    }
}

//! Timestamp Function Tests
//!
//! Tests for: timestampToUnixSeconds, timestampToUnixMillis,
//! timestampToUnixMicros, unixSecondsToTimestamp, unixMillisToTimestamp,
//! unixMicrosToTimestamp, timestampAdd, timestampSub

use docpipe_eval::{ErrorKind, PipelineEvaluator, Timestamp, Value};
use docpipe_types::{MAX_SECONDS, MIN_SECONDS};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn evaluator() -> PipelineEvaluator {
    PipelineEvaluator::new()
}

fn ts(seconds: i64, nanos: u32) -> Value {
    Value::Timestamp(Timestamp::new(seconds, nanos).unwrap())
}

fn eval(name: &str, args: Vec<Value>) -> Value {
    evaluator().evaluate(name, args).unwrap()
}

fn eval_kind(name: &str, args: Vec<Value>) -> ErrorKind {
    evaluator().evaluate(name, args).unwrap_err().kind()
}

// ============================================================================
// Conversions to Unix time
// ============================================================================

#[rstest]
#[case(ts(1_741_380_235, 0), 1_741_380_235)]
#[case(ts(1_741_380_235, 999_999_999), 1_741_380_235)]
#[case(ts(-1, 500_000_000), -1)]
#[case(ts(MIN_SECONDS, 0), MIN_SECONDS)]
#[case(ts(MAX_SECONDS, 0), MAX_SECONDS)]
fn test_timestamp_to_unix_seconds(#[case] value: Value, #[case] expected: i64) {
    assert_eq!(eval("timestampToUnixSeconds", vec![value]), Value::Int64(expected));
}

#[test]
fn test_timestamp_to_unix_millis_and_micros() {
    let value = ts(1_741_380_235, 123_456_789);
    assert_eq!(
        eval("timestampToUnixMillis", vec![value.clone()]),
        Value::Int64(1_741_380_235_123)
    );
    assert_eq!(
        eval("timestampToUnixMicros", vec![value]),
        Value::Int64(1_741_380_235_123_456)
    );
    assert_eq!(
        eval("timestampToUnixMicros", vec![ts(-1, 990_000_000)]),
        Value::Int64(-10_000)
    );
}

#[rstest]
#[case(Value::Int64(0))]
#[case(Value::Null)]
#[case(Value::from("2025-01-01T00:00:00Z"))]
fn test_timestamp_argument_required(#[case] value: Value) {
    assert_eq!(eval_kind("timestampToUnixSeconds", vec![value]), ErrorKind::TypeMismatch);
}

// ============================================================================
// Conversions from Unix time
// ============================================================================

#[rstest]
#[case(0, ts(0, 0))]
#[case(1_741_380_235, ts(1_741_380_235, 0))]
#[case(MIN_SECONDS, ts(MIN_SECONDS, 0))]
#[case(MAX_SECONDS, ts(MAX_SECONDS, 0))]
fn test_unix_seconds_to_timestamp(#[case] seconds: i64, #[case] expected: Value) {
    assert_eq!(eval("unixSecondsToTimestamp", vec![Value::Int64(seconds)]), expected);
}

#[rstest]
#[case(MIN_SECONDS - 1)]
#[case(MAX_SECONDS + 1)]
#[case(i64::MIN)]
#[case(i64::MAX)]
fn test_unix_seconds_out_of_range(#[case] seconds: i64) {
    assert_eq!(
        eval_kind("unixSecondsToTimestamp", vec![Value::Int64(seconds)]),
        ErrorKind::Range
    );
}

#[rstest]
#[case(-10_000, ts(-1, 990_000_000))]
#[case(-1, ts(-1, 999_999_000))]
#[case(1_741_380_235_123_000, ts(1_741_380_235, 123_000_000))]
#[case(0, ts(0, 0))]
fn test_unix_micros_to_timestamp(#[case] micros: i64, #[case] expected: Value) {
    assert_eq!(eval("unixMicrosToTimestamp", vec![Value::Int64(micros)]), expected);
}

#[rstest]
#[case(-1, ts(-1, 999_000_000))]
#[case(1_500, ts(1, 500_000_000))]
#[case(1_741_380_235_123, ts(1_741_380_235, 123_000_000))]
fn test_unix_millis_to_timestamp(#[case] millis: i64, #[case] expected: Value) {
    assert_eq!(eval("unixMillisToTimestamp", vec![Value::Int64(millis)]), expected);
}

#[test]
fn test_unix_micros_out_of_range() {
    assert_eq!(
        eval_kind("unixMicrosToTimestamp", vec![Value::Int64(i64::MAX)]),
        ErrorKind::Range
    );
}

#[test]
fn test_int64_argument_required() {
    assert_eq!(
        eval_kind("unixSecondsToTimestamp", vec![Value::Double(1.0)]),
        ErrorKind::TypeMismatch
    );
}

// ============================================================================
// timestampAdd / timestampSub
// ============================================================================

#[rstest]
#[case("microsecond", 1, ts(100, 1_000))]
#[case("millisecond", 1, ts(100, 1_000_000))]
#[case("second", 1, ts(101, 0))]
#[case("minute", 1, ts(160, 0))]
#[case("hour", 1, ts(3_700, 0))]
#[case("day", 1, ts(86_500, 0))]
#[case("second", -101, ts(-1, 0))]
fn test_timestamp_add(#[case] unit: &str, #[case] amount: i64, #[case] expected: Value) {
    let result = eval(
        "timestampAdd",
        vec![ts(100, 0), Value::from(unit), Value::Int64(amount)],
    );
    assert_eq!(result, expected);
}

#[test]
fn test_timestamp_sub_inverts_add() {
    let start = ts(1_741_380_235, 123_456_789);
    let added = eval(
        "timestampAdd",
        vec![start.clone(), Value::from("hour"), Value::Int64(36)],
    );
    let back = eval("timestampSub", vec![added, Value::from("hour"), Value::Int64(36)]);
    assert_eq!(back, start);
}

#[test]
fn test_timestamp_sub_hour() {
    let result = eval(
        "timestampSub",
        vec![ts(1_741_380_235, 7), Value::from("hour"), Value::Int64(1)],
    );
    assert_eq!(result, ts(1_741_376_635, 7));
}

#[rstest]
#[case("week", 1)]
#[case("DAY", 1)]
#[case("day", i64::MAX)]
#[case("second", MAX_SECONDS)]
fn test_timestamp_add_range_errors(#[case] unit: &str, #[case] amount: i64) {
    assert_eq!(
        eval_kind(
            "timestampAdd",
            vec![ts(MAX_SECONDS, 0), Value::from(unit), Value::Int64(amount)]
        ),
        ErrorKind::Range
    );
}

#[test]
fn test_timestamp_sub_below_minimum() {
    assert_eq!(
        eval_kind(
            "timestampSub",
            vec![ts(MIN_SECONDS, 0), Value::from("microsecond"), Value::Int64(1)]
        ),
        ErrorKind::Range
    );
}

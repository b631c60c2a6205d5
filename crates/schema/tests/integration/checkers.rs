//! Leaf checkers driven through the prelude.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;
use tessel_schema::prelude::*;

fn at() -> Path {
    Path::from("<path>")
}

// ── Absent values ───────────────────────────────────────────────────────────

#[rstest]
#[case::constant(constant("foo").boxed(), r#"<path>: expected "foo", got nothing"#)]
#[case::boolean(boolean().boxed(), "<path>: expected bool, got nothing")]
#[case::int(int().boxed(), "<path>: expected int, got nothing")]
#[case::uint(uint().boxed(), "<path>: expected uint, got nothing")]
#[case::force_int(force_int().boxed(), "<path>: expected number, got nothing")]
#[case::force_uint(force_uint().boxed(), "<path>: expected uint, got nothing")]
#[case::float(float().boxed(), "<path>: expected float, got nothing")]
#[case::string(string().boxed(), "<path>: expected string, got nothing")]
#[case::non_empty(non_empty_string("").boxed(), "<path>: expected non-empty string, got nothing")]
#[case::url(url().boxed(), "<path>: expected url string, got nothing")]
#[case::regexp(simple_regexp().boxed(), "<path>: expected regexp string, got nothing")]
#[case::uuid(uuid().boxed(), "<path>: expected uuid, got nothing")]
#[case::time(time().boxed(), "<path>: expected string or time value, got nothing")]
#[case::duration(time_duration().boxed(), "<path>: expected string or time duration, got nothing")]
#[case::size(size().boxed(), "<path>: expected string, got nothing")]
fn absent_value_is_reported_as_nothing(#[case] checker: BoxedChecker, #[case] message: &str) {
    let err = checker.coerce(&Value::Nothing, &at()).unwrap_err();
    assert!(err.is_missing());
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case::scalars(stringified())]
#[case::with_inner(stringified_with(int()))]
fn stringified_rejects_absence_as_unexpected(#[case] checker: Stringified) {
    let err = checker.coerce(&Value::Nothing, &at()).unwrap_err();
    assert!(!err.is_missing());
    assert_eq!(err.to_string(), "<path>: unexpected value nothing");
}

#[rstest]
#[case::nil(nil("").boxed(), Value::Nothing)]
#[case::any(any().boxed(), Value::Nothing)]
#[case::time(time().boxed(), Value::Time(zero_time()))]
#[case::duration(time_duration().boxed(), Value::Duration(Duration::ZERO))]
fn tolerant_checkers(#[case] checker: BoxedChecker, #[case] expected: Value) {
    let input = if expected.is_nothing() {
        Value::Nothing
    } else {
        Value::from("")
    };
    assert_eq!(checker.coerce(&input, &at()).unwrap(), expected);
}

// ── Error texture ──────────────────────────────────────────────────────────

#[test]
fn error_messages() {
    let err = int().coerce(&Value::Float(4.5), &at()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<path>: expected int, got float(4.5)");

    let err = size().coerce(&Value::from("3W"), &at()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"invalid multiplier suffix "W", expected one of MGTPEZY"#);

    let err = stringified()
        .coerce(&Value::list([1_i64, 2]), &at())
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<path>: unexpected value [1, 2]");
}

// ── Normalization ──────────────────────────────────────────────────────────

#[test]
fn force_int_truncates() {
    assert_eq!(
        force_int().coerce_root(&Value::Float(42.66)).unwrap(),
        Value::Int(42)
    );
    assert!(force_uint().coerce_root(&Value::Int(-1)).is_err());
}

#[test]
fn sizes_become_megabytes() {
    let limits = string_map(size());
    let input = Value::map([("memory", "4G"), ("disk", "1.5T"), ("swap", "512")]);
    assert_eq!(
        limits.coerce_root(&input).unwrap(),
        Value::map([("memory", 4096_u64), ("disk", 1_572_864), ("swap", 512)])
    );
}

#[test]
fn alternatives_pick_first_match() {
    let port = nil("port").or(int()).or(stringified());
    assert_eq!(port.coerce_root(&Value::Nothing).unwrap(), Value::Nothing);
    assert_eq!(port.coerce_root(&Value::from("80")).unwrap(), Value::Int(80));
    assert_eq!(
        port.coerce_root(&Value::Float(1.5)).unwrap(),
        Value::from("1.5")
    );
    let err = port.coerce(&Value::list([1_i64]), &at()).unwrap_err();
    assert_eq!(err.to_string(), "<path>: unexpected value [1]");
}

#[test]
fn checkers_are_shared_between_threads() {
    let checker = std::sync::Arc::new(list(int()));
    let handles: Vec<_> = (0..4_i64)
        .map(|n| {
            let checker = std::sync::Arc::clone(&checker);
            std::thread::spawn(move || checker.coerce_root(&Value::list([n.to_string()])))
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap().unwrap();
        assert_eq!(out, Value::list([n as i64]));
    }
}

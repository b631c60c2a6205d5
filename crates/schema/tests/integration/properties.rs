//! Property-based tests.

use proptest::prelude::*;
// Both preludes export `any`; bare `any` is proptest's, the checker is qualified.
use proptest::prelude::any;
use tessel_schema::checkers;
use tessel_schema::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nothing),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        (-1e12..1e12_f64).prop_map(Value::Float),
        "[a-z0-9 .:/+-]{0,12}".prop_map(Value::from),
        prop_oneof![
            Just("true"),
            Just("0"),
            Just("-17"),
            Just("3.25"),
            Just("18G"),
            Just("1h 30m"),
            Just("2016-10-09T12:34:56Z"),
            Just("http://example.com/a"),
            Just("6216dfc3-6e82-408f-9f74-8565e63e6158"),
            Just("^a+$"),
            Just(""),
        ]
        .prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-c]{1,2}", inner), 0..4).prop_map(Value::map),
        ]
    })
}

fn idempotent_checkers() -> Vec<BoxedChecker> {
    vec![
        constant("true").boxed(),
        nil("").boxed(),
        checkers::any().boxed(),
        boolean().boxed(),
        int().boxed(),
        uint().boxed(),
        force_int().boxed(),
        force_uint().boxed(),
        float().boxed(),
        string().boxed(),
        non_empty_string("").boxed(),
        url().boxed(),
        simple_regexp().boxed(),
        uuid().boxed(),
        time().boxed(),
        time_duration().boxed(),
        stringified().boxed(),
        stringified_with(time_duration()).boxed(),
        list(force_int()).boxed(),
        map(stringified(), boolean()).boxed(),
        string_map(checkers::any()).boxed(),
        nil("").or(int()).or(string()).boxed(),
        field_map(
            fields! { "a" => int(), "b" => stringified() },
            defaults! { "a" => 1, "b" => omit },
        )
        .boxed(),
    ]
}

// ============================================================================
// IDEMPOTENCE: coerce(coerce(x)) == coerce(x)
// ============================================================================

proptest! {
    #[test]
    fn coercion_is_idempotent(input in value()) {
        for checker in idempotent_checkers() {
            if let Ok(once) = checker.coerce_root(&input) {
                let twice = checker.coerce_root(&once);
                prop_assert!(twice.is_ok(), "{checker:?} rejected its own output {once:?}");
                prop_assert_eq!(twice.unwrap(), once);
            }
        }
    }

    #[test]
    fn coercion_is_deterministic(input in value()) {
        for checker in idempotent_checkers() {
            let first = checker.coerce_root(&input).map_err(|e| e.to_string());
            let second = checker.coerce_root(&input).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
    }
}

// ============================================================================
// PATHS: rendering and error prefixes
// ============================================================================

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(PathSegment::Key),
        (0..100_usize).prop_map(PathSegment::Index),
    ]
}

proptest! {
    #[test]
    fn path_rendering(segments in prop::collection::vec(segment(), 0..6)) {
        let mut expected = String::new();
        for (i, seg) in segments.iter().enumerate() {
            match seg {
                PathSegment::Key(k) if i == 0 => expected.push_str(k),
                PathSegment::Key(k) => expected.push_str(&format!(".{k}")),
                PathSegment::Index(n) => expected.push_str(&format!("[{n}]")),
            }
        }
        let path: Path = segments.into_iter().collect();
        prop_assert_eq!(path.to_string(), expected);
    }

    #[test]
    fn errors_are_prefixed_unless_root(segments in prop::collection::vec(segment(), 0..4)) {
        let path: Path = segments.into_iter().collect();
        let err = int().coerce(&Value::Nothing, &path).unwrap_err();
        let message = err.to_string();
        if path.is_root() {
            prop_assert_eq!(message, "expected int, got nothing");
        } else {
            prop_assert_eq!(message, format!("{path}: expected int, got nothing"));
        }
    }

    #[test]
    fn list_errors_point_at_first_bad_index(items in prop::collection::vec(any::<i64>(), 0..8), bad in 0..8_usize) {
        let mut values: Vec<Value> = items.iter().copied().map(Value::Int).collect();
        let bad = bad.min(values.len());
        values.insert(bad, Value::Bool(true));
        let err = list(int()).coerce_root(&Value::List(values)).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("[{bad}]: expected int, got bool(true)"));
    }
}

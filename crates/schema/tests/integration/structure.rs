//! Nested schemas: field maps, field map sets, lists and maps together.

use pretty_assertions::assert_eq;
use tessel_schema::prelude::*;

fn at() -> Path {
    Path::from("<path>")
}

fn database() -> FieldMapSet {
    field_map_set(
        "type",
        vec![
            strict_field_map(
                fields! {
                    "type" => constant("mysql"),
                    "host" => non_empty_string("host"),
                    "port" => int(),
                },
                defaults! {
                    "port" => 3306,
                },
            ),
            strict_field_map(
                fields! {
                    "type" => constant("sqlite"),
                    "path" => non_empty_string("path"),
                    "wal" => boolean(),
                },
                defaults! {
                    "wal" => omit,
                },
            ),
        ],
    )
}

fn service() -> FieldMap {
    field_map(
        fields! {
            "name" => non_empty_string("service name"),
            "endpoints" => list(url()),
            "timeout" => time_duration(),
            "limits" => string_map(size()),
            "database" => database(),
        },
        defaults! {
            "timeout" => "30s",
            "limits" => omit,
        },
    )
}

#[test]
fn coerces_nested_document() {
    let input = Value::map([
        ("name", Value::from("billing")),
        ("endpoints", Value::list(["http://a.local", "http://b.local:81"])),
        (
            "database",
            Value::map([("type", "mysql"), ("host", "db"), ("port", "3307")]),
        ),
        ("ignored", Value::Bool(true)),
    ]);

    let out = service().coerce_root(&input).unwrap();

    assert_eq!(
        out.get("timeout"),
        Some(&Value::Duration(std::time::Duration::from_secs(30)))
    );
    assert!(out.get("limits").is_none());
    assert!(out.get("ignored").is_none());
    assert_eq!(
        out.get("database"),
        Some(&Value::map([
            ("type", Value::from("mysql")),
            ("host", Value::from("db")),
            ("port", Value::Int(3307)),
        ]))
    );
    let endpoints: Vec<&str> = out
        .get("endpoints")
        .and_then(Value::as_list)
        .unwrap()
        .iter()
        .filter_map(Value::as_url)
        .map(|u| u.as_str())
        .collect();
    assert_eq!(endpoints, ["http://a.local", "http://b.local:81"]);
}

#[test]
fn nested_failures_carry_full_path() {
    let input = Value::map([
        ("name", Value::from("billing")),
        ("endpoints", Value::list(["http://a.local", ":::"])),
        ("database", Value::map([("type", "sqlite"), ("path", "/tmp/db")])),
    ]);
    let err = service().coerce_root(&input).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"endpoints[1]: expected valid url, got string(":::")"#
    );

    let input = Value::map([
        ("name", Value::from("billing")),
        ("endpoints", Value::List(vec![])),
        ("limits", Value::map([("memory", 3_i64)])),
        ("database", Value::map([("type", "sqlite"), ("path", "/tmp/db")])),
    ]);
    let err = service().coerce_root(&input).unwrap_err();
    assert_eq!(err.to_string(), "limits.memory: expected string, got int(3)");
}

#[test]
fn selector_and_strictness_inside_set() {
    let err = database()
        .coerce(&Value::map([("type", "pgsql")]), &at())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"<path>.type: expected supported selector, got string("pgsql")"#
    );

    let err = database()
        .coerce(
            &Value::map([("type", "sqlite"), ("path", "/tmp/db"), ("host", "x")]),
            &at(),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), r#"<path>: unknown key "host" (value "x")"#);

    let out = database()
        .coerce(&Value::map([("type", "sqlite"), ("path", "/tmp/db")]), &at())
        .unwrap();
    assert_eq!(
        out,
        Value::map([("type", "sqlite"), ("path", "/tmp/db")])
    );
}

#[test]
fn field_map_from_the_basic_example() {
    let map = field_map(
        fields! {
            "a" => constant("A"),
            "b" => constant("B"),
            "c" => constant("C"),
        },
        defaults! {
            "b" => omit,
            "c" => "C",
        },
    );
    assert_eq!(
        map.coerce(&Value::map([("a", "A")]), &at()).unwrap(),
        Value::map([("a", "A"), ("c", "C")])
    );
}

#[test]
fn maps_with_typed_keys() {
    let ports = map(int(), boolean());
    let input = Value::map([("80", "true"), ("443", "0")]);
    assert_eq!(
        ports.coerce(&input, &at()).unwrap(),
        Value::map([(80_i64, true), (443, false)])
    );
    let err = ports
        .coerce(&Value::map([("80", "maybe")]), &at())
        .unwrap_err();
    assert_eq!(err.to_string(), r#"<path>.80: expected bool, got string("maybe")"#);
}

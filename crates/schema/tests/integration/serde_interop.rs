//! Decoding documents with serde and coercing them.

use pretty_assertions::assert_eq;
use serde_json::json;
use tessel_schema::prelude::*;

fn server() -> FieldMap {
    strict_field_map(
        fields! {
            "host" => string(),
            "port" => int(),
            "started" => time(),
            "tags" => list(stringified()),
        },
        defaults! {
            "port" => 8080,
            "started" => "",
            "tags" => omit,
        },
    )
}

#[test]
fn decode_coerce_encode() {
    let raw: Value = serde_json::from_str(
        r#"{"host": "localhost", "port": "9000", "started": "2016-10-09T12:34:56Z", "tags": [1, true, "x"]}"#,
    )
    .unwrap();
    let out = server().coerce_root(&raw).unwrap();
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({
            "host": "localhost",
            "port": 9000,
            "started": "2016-10-09T12:34:56Z",
            "tags": ["1", "true", "x"],
        })
    );
}

#[test]
fn defaults_are_encoded() {
    let raw = Value::from(json!({"host": "localhost"}));
    let out = server().coerce_root(&raw).unwrap();
    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        r#"{"host":"localhost","port":8080,"started":"0001-01-01T00:00:00Z"}"#
    );
}

#[test]
fn null_fields_are_absent_values() {
    let raw: Value = serde_json::from_str(r#"{"host": null}"#).unwrap();
    let err = server().coerce_root(&raw).unwrap_err();
    assert_eq!(err.to_string(), "host: expected string, got nothing");
}

#[test]
fn unknown_keys_in_decoded_documents() {
    let raw: Value = serde_json::from_str(r#"{"host": "h", "debug": [1]}"#).unwrap();
    let err = server().coerce_root(&raw).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"unknown key "debug" (value [1])"#);
}

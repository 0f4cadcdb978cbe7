//! Wire shape tests for the serialized form of Error and Errors.

use errata::{Error, Errors};
use serde_json::json;

#[test]
fn test_canonical_wire_shape() {
    let mut errors = Errors::new();
    errors
        .add_field_error("username", Error::new("[required]", "username is required"))
        .add_general_error(
            Error::new("[blocked]", "account is blocked").with_data("until", json!("2026-09-01")),
        );

    let serialized = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        serialized,
        json!({
            "fieldErrors": {
                "username": [
                    { "code": "[required]", "message": "username is required" }
                ]
            },
            "generalErrors": [
                {
                    "code": "[blocked]",
                    "message": "account is blocked",
                    "data": { "until": "2026-09-01" }
                }
            ]
        })
    );
}

#[test]
fn test_empty_collection_serializes_to_empty_object() {
    let errors = Errors::new();
    assert_eq!(serde_json::to_value(&errors).unwrap(), json!({}));
}

#[test]
fn test_empty_buckets_are_suppressed() {
    let errors = Errors::general(Error::new("[blocked]", "account is blocked"));

    let serialized = serde_json::to_value(&errors).unwrap();
    let object = serialized.as_object().unwrap();
    assert!(!object.contains_key("fieldErrors"));
    assert!(object.contains_key("generalErrors"));
}

#[test]
fn test_templating_values_stay_off_the_wire() {
    let error = Error::new("[tooShort]", "must be at least {0} characters")
        .with_value(json!(8));

    let serialized = serde_json::to_value(&error).unwrap();
    assert_eq!(
        serialized,
        json!({ "code": "[tooShort]", "message": "must be at least {0} characters" })
    );
}

#[test]
fn test_absent_message_and_data_are_suppressed() {
    let error = Error::from_code("[blocked]");
    assert_eq!(serde_json::to_value(&error).unwrap(), json!({ "code": "[blocked]" }));
}

#[test]
fn test_round_trip() {
    let mut errors = Errors::new();
    errors
        .add_field_error(
            "username",
            Error::new("[required]", "username is required").with_data("hint", json!("use email")),
        )
        .add_field_error("email", Error::new("[invalid]", "email is invalid"))
        .add_general_error(Error::new("[blocked]", "account is blocked"));

    let serialized = serde_json::to_string(&errors).unwrap();
    let deserialized: Errors = serde_json::from_str(&serialized).unwrap();

    assert_eq!(deserialized, errors);
}

#[test]
fn test_round_trip_drops_templating_values() {
    let errors = Errors::field(
        "username",
        Error::new("[tooShort]", "must be at least {0} characters").with_value(json!(8)),
    );

    let serialized = serde_json::to_string(&errors).unwrap();
    let deserialized: Errors = serde_json::from_str(&serialized).unwrap();

    // Structurally equal once the local-only values are taken out.
    let expected = Errors::field(
        "username",
        Error::new("[tooShort]", "must be at least {0} characters"),
    );
    assert_eq!(deserialized, expected);
    assert!(deserialized.field_errors()["username"][0].values.is_empty());
}

#[test]
fn test_deserialize_empty_object() {
    let errors: Errors = serde_json::from_str("{}").unwrap();
    assert!(errors.is_empty());
}

#[test]
fn test_deserialize_preserves_field_order() {
    let payload = r#"{
        "fieldErrors": {
            "zeta": [ { "code": "[invalid]" } ],
            "alpha": [ { "code": "[required]" } ]
        }
    }"#;

    let errors: Errors = serde_json::from_str(payload).unwrap();
    let fields: Vec<&String> = errors.field_errors().keys().collect();
    assert_eq!(fields, vec!["zeta", "alpha"]);
}

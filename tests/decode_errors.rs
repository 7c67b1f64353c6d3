use graph_models::models::{Application, Event, User, WindowsUpdateForBusinessConfiguration};
use graph_models::{DecodeError, parse};

#[test]
fn wrong_json_type_names_the_field() {
    let err = parse::<User>(r#"{"displayName": 42}"#).expect_err("number for a string");
    assert_eq!(err.field_path().as_deref(), Some("displayName"));
    assert!(matches!(
        err.root_cause(),
        DecodeError::UnexpectedType { expected: "string", found: "number" }
    ));
    assert_eq!(err.to_string(), "field `displayName`: expected string, found number");
}

#[test]
fn nested_failures_report_the_full_path() {
    let err = parse::<Application>(
        r#"{"passwordCredentials": [{"keyId": "7f1c6e4a-0000-4000-8000-000000000000"}, {"keyId": "nope"}]}"#,
    )
    .expect_err("bad uuid");
    assert_eq!(err.field_path().as_deref(), Some("passwordCredentials.1.keyId"));
    assert!(matches!(
        err.root_cause(),
        DecodeError::InvalidFormat { kind: "UUID", .. }
    ));
}

#[test]
fn malformed_primitives_are_errors() {
    let err = parse::<Event>(r#"{"isAllDay": "yes"}"#).expect_err("bool");
    assert_eq!(err.field_path().as_deref(), Some("isAllDay"));

    let err = parse::<User>(r#"{"createdDateTime": "yesterday"}"#).expect_err("timestamp");
    assert!(matches!(
        err.root_cause(),
        DecodeError::InvalidFormat { kind: "timestamp", .. }
    ));

    let err = parse::<Application>(r#"{"logo": "***"}"#).expect_err("base64");
    assert_eq!(err.field_path().as_deref(), Some("logo"));

    let err = parse::<WindowsUpdateForBusinessConfiguration>(
        r#"{"featureUpdatesPauseStartDate": "2024-02-30"}"#,
    )
    .expect_err("date");
    assert!(matches!(err.root_cause(), DecodeError::InvalidFormat { kind: "date", .. }));
}

#[test]
fn integers_must_fit() {
    let err = parse::<Event>(r#"{"reminderMinutesBeforeStart": 4294967296}"#).expect_err("i32");
    assert!(matches!(err.root_cause(), DecodeError::OutOfRange { .. }));

    let err = parse::<Event>(r#"{"reminderMinutesBeforeStart": 1.5}"#).expect_err("fraction");
    assert!(matches!(
        err.root_cause(),
        DecodeError::UnexpectedType { expected: "integer", found: "number" }
    ));

    let err = parse::<Event>(r#"{"reminderMinutesBeforeStart": 1e300}"#).expect_err("huge");
    assert!(matches!(err.root_cause(), DecodeError::OutOfRange { .. }));
}

#[test]
fn integral_floats_read_as_integers() {
    let event: Event = parse(r#"{"reminderMinutesBeforeStart": 15.0}"#).expect("parse");
    assert_eq!(event.reminder_minutes_before_start(), Some(&15));

    let event: Event = parse(r#"{"reminderMinutesBeforeStart": -2.0}"#).expect("parse");
    assert_eq!(event.reminder_minutes_before_start(), Some(&-2));
}

#[test]
fn payload_must_be_an_object() {
    assert!(matches!(
        parse::<User>("[1, 2]"),
        Err(DecodeError::UnexpectedType { expected: "object", found: "array" })
    ));
    assert!(matches!(
        parse::<User>("null"),
        Err(DecodeError::UnexpectedType { expected: "object", found: "null" })
    ));
    assert!(matches!(parse::<User>("{not json"), Err(DecodeError::Json(_))));
}

#[test]
fn collections_must_be_arrays() {
    let err = parse::<User>(r#"{"businessPhones": "+1 555"}"#).expect_err("string for array");
    assert_eq!(err.field_path().as_deref(), Some("businessPhones"));
    assert!(matches!(
        err.root_cause(),
        DecodeError::UnexpectedType { expected: "array", .. }
    ));
}

use graph_models::models::{AnyEntity, CustomSecurityAttributeValue, User};
use graph_models::{Parsable, parse, serialize_object};
use serde_json::{Value, json};

#[test]
fn unknown_properties_survive_a_round_trip() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.user",
        "id": "u1",
        "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
        "displayName": "Ada",
        "futureProperty": { "nested": [1, 2, 3] },
        "anotherOne": null
    });
    let user: User = parse(&payload.to_string()).expect("parse");

    let keys: Vec<&str> = user.additional_data().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["@odata.context", "futureProperty", "anotherOne"]);

    // Modeled properties come first on the way out, unknown ones keep their order after them
    let encoded = serialize_object(&user).expect("serialize");
    assert_eq!(encoded, payload);
    let order: Vec<&str> = encoded.as_object().expect("object").keys().map(String::as_str).collect();
    assert_eq!(
        order,
        vec!["id", "@odata.type", "displayName", "@odata.context", "futureProperty", "anotherOne"]
    );
}

#[test]
fn additional_data_lives_on_the_root_model() {
    let mut user = User::new();
    user.additional_data_mut()
        .insert("extension_abc_costCenter".into(), json!("42"));
    assert_eq!(
        user.base().base().additional_data().get("extension_abc_costCenter"),
        Some(&json!("42"))
    );

    let entity = AnyEntity::from(user);
    assert_eq!(entity.additional_data().len(), 1);
    let encoded = serialize_object(&entity).expect("serialize");
    assert_eq!(encoded["extension_abc_costCenter"], "42");
}

#[test]
fn open_types_keep_everything_in_additional_data() {
    let payload = json!({
        "Engineering": {
            "@odata.type": "#microsoft.graph.customSecurityAttributeValue",
            "Project": "Baker"
        }
    });
    let attrs: CustomSecurityAttributeValue = parse(&payload.to_string()).expect("parse");
    assert_eq!(attrs.additional_data().get("Engineering"), payload.get("Engineering"));
    assert_eq!(serialize_object(&attrs).expect("serialize"), payload);
}

#[test]
fn null_modeled_properties_read_as_unset() {
    let user: User = parse(r#"{"displayName": null, "accountEnabled": null, "businessPhones": null}"#)
        .expect("parse");
    assert_eq!(user.display_name(), None);
    assert_eq!(user.account_enabled(), None);
    assert_eq!(user.business_phones(), None);
    assert!(user.additional_data().is_empty());

    let encoded = serialize_object(&user).expect("serialize");
    assert_eq!(encoded, json!({ "@odata.type": "#microsoft.graph.user" }));
}

#[test]
fn null_collection_items_are_skipped() {
    let user: User = parse(r#"{"businessPhones": ["+1 555", null, "+1 556"]}"#).expect("parse");
    assert_eq!(
        user.business_phones().cloned(),
        Some(vec!["+1 555".to_string(), "+1 556".to_string()])
    );
}

#[test]
fn unknown_enum_strings_read_as_unset() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.event",
        "importance": "extreme",
        "showAs": "busy"
    });
    let event: graph_models::models::Event = parse(&payload.to_string()).expect("parse");
    assert_eq!(event.importance(), None);
    assert!(event.show_as().is_some());
    // Unknown member is dropped, not kept as additional data
    assert_eq!(event.additional_data().get("importance"), None::<&Value>);
}

use graph_models::WireEnum;
use graph_models::models::{
    AttendeeType, AutomaticUpdateMode, BodyType, CalendarColor, Enablement, FreeBusyStatus,
    Importance, NativeAuthenticationApisEnabled, OnlineMeetingProviderType, ResponseType, Sensitivity, WindowsDeliveryOptimizationMode,
    WindowsUpdateForBusinessUpdateWeeks, WindowsUpdateType,
};
use graph_models::serialize_values;

fn assert_members_round_trip<E: WireEnum + PartialEq + std::fmt::Debug>(members: &[E]) {
    for member in members {
        let wire = member.to_string();
        assert_eq!(E::parse(&wire), Some(*member), "{wire} did not parse back");
    }
    assert_eq!(E::parse("definitelyNotAMember"), None);
}

#[test]
fn attendee_type_strings() {
    assert_eq!(AttendeeType::Optional.to_string(), "optional");
    assert_eq!(AttendeeType::parse("optional"), Some(AttendeeType::Optional));
    assert_eq!(AttendeeType::parse("bogus"), None);
    // Matching is exact
    assert_eq!(AttendeeType::parse("Optional"), None);
    assert!(!AttendeeType::is_multi_value());
}

#[test]
fn every_single_valued_enum_round_trips() {
    assert_members_round_trip(AttendeeType::ALL);
    assert_members_round_trip(ResponseType::ALL);
    assert_members_round_trip(Importance::ALL);
    assert_members_round_trip(Sensitivity::ALL);
    assert_members_round_trip(FreeBusyStatus::ALL);
    assert_members_round_trip(BodyType::ALL);
    assert_members_round_trip(OnlineMeetingProviderType::ALL);
    assert_members_round_trip(CalendarColor::ALL);
    assert_members_round_trip(NativeAuthenticationApisEnabled::ALL);
    assert_members_round_trip(Enablement::ALL);
    assert_members_round_trip(AutomaticUpdateMode::ALL);
    assert_members_round_trip(WindowsUpdateType::ALL);
    assert_members_round_trip(WindowsDeliveryOptimizationMode::ALL);
}

#[test]
fn wire_names_keep_service_casing() {
    assert_eq!(ResponseType::TentativelyAccepted.as_str(), "tentativelyAccepted");
    assert_eq!(FreeBusyStatus::UnknownFutureValue.as_str(), "unknownFutureValue");
    assert_eq!(
        AutomaticUpdateMode::AutoInstallAndRebootWithoutEndUserControl.to_string(),
        "autoInstallAndRebootWithoutEndUserControl"
    );
}

#[test]
fn serialize_values_keeps_order_and_length() {
    let values = [Importance::High, Importance::Low, Importance::High];
    assert_eq!(serialize_values(&values), vec!["high", "low", "high"]);
    assert!(serialize_values::<Importance>(&[]).is_empty());
}

#[test]
fn enums_serialize_with_serde_as_wire_strings() {
    let json = serde_json::to_string(&[BodyType::Html, BodyType::Text]).expect("serialize");
    assert_eq!(json, r#"["html","text"]"#);

    let weeks = WindowsUpdateForBusinessUpdateWeeks::FIRST_WEEK
        | WindowsUpdateForBusinessUpdateWeeks::THIRD_WEEK;
    assert_eq!(
        serde_json::to_string(&weeks).expect("serialize"),
        r#""firstWeek,thirdWeek""#
    );
}

#[test]
fn flags_join_in_declaration_order() {
    type Weeks = WindowsUpdateForBusinessUpdateWeeks;
    assert!(Weeks::is_multi_value());

    let set = Weeks::FOURTH_WEEK | Weeks::FIRST_WEEK;
    assert_eq!(set.to_string(), "firstWeek,fourthWeek");
    assert_eq!(Weeks::parse("fourthWeek,firstWeek"), Some(set));
    assert_eq!(Weeks::parse("everyWeek"), Some(Weeks::EVERY_WEEK));

    for (flag, name) in Weeks::WIRE_NAMES {
        assert_eq!(flag.to_string(), *name);
        assert_eq!(Weeks::parse(name), Some(*flag));
    }
}

#[test]
fn one_bad_flag_token_discards_the_value() {
    type Weeks = WindowsUpdateForBusinessUpdateWeeks;
    assert_eq!(Weeks::parse("firstWeek,fifthWeek"), None);
    assert_eq!(Weeks::parse("firstWeek,"), None);
    assert_eq!(Weeks::parse(",firstWeek"), None);
}

#[test]
fn empty_flag_string_is_the_empty_set() {
    type Weeks = WindowsUpdateForBusinessUpdateWeeks;
    assert_eq!(Weeks::empty().to_string(), "");
    assert_eq!(Weeks::parse(""), Some(Weeks::empty()));
}

#[test]
fn flag_members_are_powers_of_two() {
    let bits: Vec<u32> = WindowsUpdateForBusinessUpdateWeeks::WIRE_NAMES
        .iter()
        .map(|(flag, _)| flag.bits())
        .collect();
    assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64]);
}

use pulsebase_types::prelude::*;

#[test]
fn instant_conversion_is_idempotent() {
    // second-aligned instants survive millis -> iso -> millis unchanged
    let inputs = [
        TimeSpec::from(1_620_000_000_000i64),
        TimeSpec::from("2021-05-03T01:20:00Z"),
        TimeSpec::from("2021-05-03T04:20:00+03:00"),
    ];
    for input in inputs {
        let first = input.instant().expect("instant");
        let again = TimeSpec::from(first.to_iso().as_str())
            .instant()
            .expect("instant");
        assert_eq!(first, again);
    }
}

#[test]
fn unparseable_strings_pass_through_as_expressions() {
    assert_eq!(TimeSpec::from("now"), TimeSpec::Expr("now".into()));
    assert_eq!(
        TimeSpec::from("current_day"),
        TimeSpec::Expr("current_day".into())
    );
    assert_eq!(TimeSpec::from("now").instant(), None);
    assert_eq!(TimeSpec::from("now").as_expr(), Some("now"));
}

#[test]
fn iso_form_is_seconds_precision_utc() {
    let ts = Timestamp(1_620_004_800_123);
    assert_eq!(ts.to_iso(), "2021-05-03T01:20:00Z");
    assert_eq!(ts.to_utc().timestamp_millis(), 1_620_004_800_123);
}

#[test]
fn normalize_defaults_to_now() {
    let before = Timestamp::now().0;
    let normalized = TimeSpec::normalize(None);
    let after = Timestamp::now().0;
    let ms = normalized.instant().expect("instant").0;
    assert!(ms >= before && ms <= after);
}

#[test]
fn from_value_accepts_numbers_strings_and_null_only() {
    let ms = TimeSpec::from_value(&serde_json::json!(1000)).expect("number");
    assert_eq!(ms, TimeSpec::Millis(1000));

    let iso = TimeSpec::from_value(&serde_json::json!("2021-05-03T01:20:00Z")).expect("string");
    assert_eq!(iso, TimeSpec::Millis(1_620_004_800_000));

    assert!(TimeSpec::from_value(&serde_json::json!(null)).is_ok());

    let err = TimeSpec::from_value(&serde_json::json!(true)).expect_err("bool rejected");
    assert_eq!(err.0.code, pulsebase_errors::codes::TIME_INVALID);
    let err = TimeSpec::from_value(&serde_json::json!(["now"])).expect_err("array rejected");
    assert_eq!(err.0.code, pulsebase_errors::codes::TIME_INVALID);
}

#[test]
fn timestamp_decodes_from_millis_or_iso() {
    let from_num: Timestamp = serde_json::from_value(serde_json::json!(1000)).expect("millis");
    assert_eq!(from_num, Timestamp(1000));

    let from_iso: Timestamp =
        serde_json::from_value(serde_json::json!("2021-05-03T01:20:00Z")).expect("iso");
    assert_eq!(from_iso, Timestamp(1_620_004_800_000));

    assert!(serde_json::from_value::<Timestamp>(serde_json::json!("not a date")).is_err());

    assert_eq!(
        serde_json::to_value(Timestamp(1000)).expect("encode"),
        serde_json::json!(1000)
    );
}

#[test]
fn severity_parses_names_and_codes() {
    assert_eq!(Severity::parse("WARNING").expect("name"), Severity::Warning);
    assert_eq!(Severity::parse("critical").expect("case"), Severity::Critical);
    assert_eq!(Severity::parse("7").expect("numeral"), Severity::Fatal);
    assert_eq!(Severity::from_code(0).expect("code"), Severity::Undefined);
    assert!(Severity::parse("SHOUTING").is_err());
    assert!(Severity::from_code(8).is_err());
    assert!(Severity::Critical > Severity::Warning);
}

#[test]
fn severity_wire_form_is_numeric_but_decodes_names_too() {
    assert_eq!(
        serde_json::to_value(Severity::Major).expect("encode"),
        serde_json::json!(5)
    );
    let from_num: Severity = serde_json::from_value(serde_json::json!(5)).expect("number");
    assert_eq!(from_num, Severity::Major);
    let from_name: Severity = serde_json::from_value(serde_json::json!("MAJOR")).expect("name");
    assert_eq!(from_name, Severity::Major);
}

use std::collections::HashMap;

use pulsebase_client::prelude::*;

#[test]
fn sample_comparison_is_time_only() {
    let a = Sample::new(Timestamp(1000), 100.0);
    let b = Sample::new(Timestamp(2000), 1.0).with_version("collector", "ok");
    let c = Sample::deleted(Timestamp(1000));

    assert!(a < b);
    assert!(b > a);
    assert_eq!(a, c); // value and version are ignored
    assert!(a <= c && a >= c);
}

#[test]
fn tags_mutation_after_construction_does_not_leak() {
    let mut source = HashMap::new();
    source.insert("host".to_string(), "web01".to_string());

    let entity = Entity::new("e1").with_tags(&source);
    let series = Series::new("e1", "m1").with_tags(&source);
    let property = Property::new("disk", "e1").with_key(&source);

    source.insert("host".to_string(), "changed".to_string());
    source.insert("extra".to_string(), "x".to_string());

    assert_eq!(entity.tags.get("host").map(String::as_str), Some("web01"));
    assert_eq!(entity.tags.len(), 1);
    assert_eq!(series.tags.get("host").map(String::as_str), Some("web01"));
    assert_eq!(property.key.get("host").map(String::as_str), Some("web01"));
}

#[test]
fn absent_tags_normalize_to_an_empty_map() {
    let mut entity = Entity::new("e1");
    entity.set_tags(None);
    assert!(entity.tags.is_empty());

    let mut metric = Metric::new("m1");
    metric.set_tags(None);
    assert!(metric.tags.is_empty());

    let mut property = Property::new("disk", "e1");
    property.set_key(None);
    property.set_tags(None);
    assert!(property.key.is_empty());
    assert!(property.tags.is_empty());
}

#[test]
fn series_projections_sort_and_collapse_duplicates() {
    let mut series = Series::new("e1", "m1");
    series.add_value(Timestamp(3000), 3.0);
    series.add_value(Timestamp(1000), 1.0);
    series.add_value(Timestamp(2000), 2.0);
    series.add_value(Timestamp(1000), 10.0); // later occurrence wins

    assert_eq!(
        series.times(),
        vec![Timestamp(1000), Timestamp(2000), Timestamp(3000)]
    );
    assert_eq!(series.values(), vec![Some(10.0), Some(2.0), Some(3.0)]);
    // the raw data is left untouched
    assert_eq!(series.data.len(), 4);
}

#[test]
fn series_key_is_the_identity_triple() {
    let mut tags = HashMap::new();
    tags.insert("host".to_string(), "web01".to_string());

    let a = Series::new("e1", "m1").with_tags(&tags);
    let b = Series::new("e1", "m1").with_tags(&tags);
    let c = Series::new("e1", "m1");

    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());
}

#[test]
fn message_identity_is_the_dedup_tuple() {
    let message = Message::new("web01")
        .with_type("backup")
        .with_source("cron")
        .with_date(Timestamp(1000));
    assert_eq!(
        message.identity(),
        ("web01", Some(Timestamp(1000)), Some("backup"), Some("cron"))
    );
}

#[test]
fn enum_parse_accepts_known_names_only() {
    assert_eq!(DataType::parse("float").expect("parse"), DataType::Float);
    assert_eq!(
        InvalidAction::parse("RAISE_ERROR").expect("parse"),
        InvalidAction::RaiseError
    );
    assert_eq!(
        InterpolateKind::parse("previous").expect("parse"),
        InterpolateKind::Previous
    );
    assert_eq!(
        HistoryType::parse("repeat").expect("parse"),
        HistoryType::Repeat
    );

    let err = DataType::parse("BIGNUM").expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::SCHEMA_VALIDATION);
}

#[test]
fn metric_bounds_are_validated_at_set_time() {
    assert!(Metric::new("m1").with_bounds(0.0, 100.0).is_ok());
    let err = Metric::new("m1").with_bounds(5.0, 1.0).expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::SCHEMA_VALIDATION);
}

use chrono::{TimeZone, Utc};
use pulsebase_client::prelude::*;
use pulsebase_client::wire;
use serde_json::json;

#[test]
fn period_rejects_zero_count() {
    let err = Period::new(0, TimeUnit::Hour).expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::SCHEMA_VALIDATION);
    assert!(Period::new(15, TimeUnit::Minute).is_ok());
}

#[test]
fn enum_membership_is_checked_at_parse_time() {
    assert_eq!(TimeUnit::parse("second").expect("parse"), TimeUnit::Second);
    assert_eq!(
        AggregateType::parse("percentile_99").expect("parse"),
        AggregateType::Percentile99
    );
    assert_eq!(
        Interpolation::parse("STEP").expect("parse"),
        Interpolation::Step
    );

    for bad in ["FORTNIGHT", "AVERAGE", ""] {
        let err = AggregateType::parse(bad).expect_err("rejected");
        assert_eq!(err.code(), pulsebase_errors::codes::SCHEMA_VALIDATION);
    }
}

#[test]
fn aggregate_requires_at_least_one_type() {
    let period = Period::new(1, TimeUnit::Second).expect("period");
    let err = Aggregate::new(period, Vec::new()).expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::SCHEMA_VALIDATION);

    let parsed = Aggregate::parse(period, &["AVG", "MAX"]).expect("parse");
    assert_eq!(parsed.types, vec![AggregateType::Avg, AggregateType::Max]);
    assert!(Aggregate::parse(period, &["AVG", "NOPE"]).is_err());
}

#[test]
fn threshold_and_working_minutes_validate_bounds() {
    assert!(Threshold::new(Some(0.0), Some(10.0)).is_ok());
    assert!(Threshold::new(None, Some(10.0)).is_ok());
    assert!(Threshold::new(Some(11.0), Some(10.0)).is_err());

    assert!(WorkingMinutes::new(540, 1080).is_ok());
    assert!(WorkingMinutes::new(1080, 540).is_err());
}

#[test]
fn full_aggregate_element_serializes_camel_case() {
    let period = Period::new(5, TimeUnit::Minute).expect("period");
    let aggregate = Aggregate::new(period, vec![AggregateType::ThresholdCount])
        .expect("aggregate")
        .with_interpolate(Interpolation::Linear)
        .with_threshold(Threshold::new(Some(0.0), Some(95.0)).expect("threshold"))
        .with_calendar("us-business")
        .with_working_minutes(WorkingMinutes::new(540, 1080).expect("minutes"))
        .with_counter(false);
    let body = wire::to_wire(&aggregate).expect("encode");
    assert_eq!(
        body,
        json!({
            "period": { "count": 5, "unit": "MINUTE" },
            "types": ["THRESHOLD_COUNT"],
            "interpolate": "LINEAR",
            "threshold": { "min": 0.0, "max": 95.0 },
            "calendar": { "name": "us-business" },
            "workingMinutes": { "start": 540, "end": 1080 },
            "counter": "false"
        })
    );
}

#[test]
fn rate_and_group_elements_serialize_canonically() {
    let period = Period::new(1, TimeUnit::Minute).expect("period");
    let rate = Rate::new().with_period(period).with_counter(true);
    assert_eq!(
        wire::to_wire(&rate).expect("encode"),
        json!({ "period": { "count": 1, "unit": "MINUTE" }, "counter": "true" })
    );

    let group = Group::new(AggregateType::Sum)
        .with_interpolate(Interpolation::None)
        .with_truncate(true);
    assert_eq!(
        wire::to_wire(&group).expect("encode"),
        json!({ "type": "SUM", "interpolate": "NONE", "truncate": "true" })
    );
}

#[test]
fn time_bounds_store_canonical_millis() {
    let start = Utc.with_ymd_and_hms(2021, 5, 3, 1, 20, 0).unwrap();
    let query = SeriesQuery::new("e1", "m1")
        .with_start_time(start)
        .with_end_time("now");

    let body = wire::to_wire(&query).expect("encode");
    assert_eq!(body["startTime"], json!(1_620_004_800_000i64));
    assert_eq!(body["endTime"], json!("now"));

    // stored millis surface lazily as a structured datetime
    assert_eq!(query.start_datetime(), Some(start));
    assert_eq!(query.end_datetime(), None);
}

#[test]
fn transformations_attach_independently() {
    let period = Period::new(1, TimeUnit::Hour).expect("period");
    let query = SeriesQuery::new("e1", "m1")
        .with_start_time(0i64)
        .with_end_time(1000i64)
        .with_group(Group::new(AggregateType::Avg))
        .with_rate(Rate::new().with_counter(false));
    let body = wire::to_wire(&query).expect("encode");
    assert!(body.get("aggregate").is_none());
    assert_eq!(body["group"], json!({ "type": "AVG" }));
    assert_eq!(body["rate"], json!({ "counter": "false" }));

    let aggregated = SeriesQuery::new("e1", "m1")
        .with_aggregate(Aggregate::new(period, vec![AggregateType::Avg]).expect("aggregate"));
    let body = wire::to_wire(&aggregated).expect("encode");
    assert!(body.get("group").is_none());
    assert!(body.get("rate").is_none());
    assert!(body.get("aggregate").is_some());
}

#[test]
fn alerts_query_serializes_filters() {
    let query = AlertsQuery::new()
        .with_entities(vec!["web01".to_string()])
        .with_severities(vec![Severity::Critical, Severity::Fatal])
        .with_min_severity(Severity::Warning)
        .with_acknowledged(false);
    let body = wire::to_wire(&query).expect("encode");
    assert_eq!(
        body,
        json!({
            "entities": ["web01"],
            "severities": [6, 7],
            "minSeverity": 3,
            "acknowledged": "false"
        })
    );
}

#[test]
fn alert_update_and_delete_require_ids() {
    assert!(AlertUpdate::new(Vec::new(), true).is_err());
    assert!(AlertDelete::new(Vec::new()).is_err());

    let update = AlertUpdate::new(vec![11, 12], true).expect("update");
    assert_eq!(
        wire::to_wire(&update).expect("encode"),
        json!({ "ids": [11, 12], "acknowledged": "true" })
    );
}

#[test]
fn properties_and_messages_queries_omit_unset_fields() {
    let properties = PropertiesQuery::new("web01", "disk");
    assert_eq!(
        wire::to_wire(&properties).expect("encode"),
        json!({ "entity": "web01", "type": "disk" })
    );

    let messages = MessagesQuery::new("web01")
        .with_type("backup")
        .with_severity(Severity::Normal)
        .with_limit(10);
    assert_eq!(
        wire::to_wire(&messages).expect("encode"),
        json!({ "entity": "web01", "type": "backup", "severity": 2, "limit": 10 })
    );
}

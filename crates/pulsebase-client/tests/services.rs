use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pulsebase_client::prelude::*;
use serde_json::{json, Value};

enum StubReply {
    Json(Value),
    Text(String),
    Status(u16, String),
}

struct StubExec {
    calls: Mutex<Vec<ApiRequest>>,
    reply: StubReply,
}

impl StubExec {
    fn json(value: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: StubReply::Json(value),
        })
    }

    fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: StubReply::Text(text.to_string()),
        })
    }

    fn status(status: u16, content: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: StubReply::Status(status, content.to_string()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn last_call(&self) -> ApiRequest {
        self.calls
            .lock()
            .expect("calls lock")
            .last()
            .expect("at least one call")
            .clone()
    }
}

#[async_trait]
impl HttpExec for StubExec {
    async fn request(&self, request: ApiRequest) -> Result<ApiContent, NetError> {
        self.calls.lock().expect("calls lock").push(request);
        match &self.reply {
            StubReply::Json(value) => Ok(ApiContent::Json(value.clone())),
            StubReply::Text(text) => Ok(ApiContent::Text(text.clone())),
            StubReply::Status(status, content) => {
                Err(NetError::server_status(*status, content.clone()))
            }
        }
    }
}

#[tokio::test]
async fn insert_with_empty_data_fails_before_any_transport_call() {
    let stub = StubExec::json(json!({}));
    let client = TsdClient::new(stub.clone());

    let full = Series::new("e1", "m1").with_samples([Sample::new(Timestamp(1000), 5.0)]);
    let empty = Series::new("e2", "m1");

    let err = client
        .series()
        .insert(&[full, empty])
        .await
        .expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::DATA_PARSE);
    assert_eq!(err.field(), Some("data"));
    let dev = err.into_inner().message_dev.expect("dev message");
    assert!(dev.contains("e2:m1"));
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn series_query_posts_one_batched_body() {
    let stub = StubExec::json(json!([]));
    let client = TsdClient::new(stub.clone());

    let q1 = SeriesQuery::new("e1", "m1")
        .with_start_time(0i64)
        .with_end_time(1000i64);
    let q2 = SeriesQuery::new("e2", "m1")
        .with_start_time(0i64)
        .with_end_time(1000i64);
    let result = client.series().query(&[q1, q2]).await.expect("query");
    assert!(result.is_empty());

    assert_eq!(stub.call_count(), 1);
    let call = stub.last_call();
    assert_eq!(call.method.as_str(), "POST");
    assert_eq!(call.path, "series/query");
    assert_eq!(
        call.body.expect("body"),
        json!([
            { "entity": "e1", "metric": "m1", "startTime": 0, "endTime": 1000 },
            { "entity": "e2", "metric": "m1", "startTime": 0, "endTime": 1000 }
        ])
    );
}

#[tokio::test]
async fn series_query_decodes_the_response_array_in_order() {
    let stub = StubExec::json(json!([
        { "entity": "e1", "metric": "m1", "data": [ { "t": 1000, "v": 5 } ] },
        { "entity": "e1", "metric": "m1", "tags": { "host": "web01" }, "data": [] }
    ]));
    let client = TsdClient::new(stub.clone());

    let query = SeriesQuery::new("e1", "m1").with_start_time(0i64);
    let series = client.series().query(&[query]).await.expect("query");

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].data.len(), 1);
    assert_eq!(series[0].data[0].time, Timestamp(1000));
    assert_eq!(series[0].data[0].value, Some(5.0));
    assert_eq!(
        series[1].tags.get("host").map(String::as_str),
        Some("web01")
    );
}

#[tokio::test]
async fn server_errors_surface_status_and_raw_body() {
    let stub = StubExec::status(500, "boom");
    let client = TsdClient::new(stub.clone());

    let err = client
        .series()
        .query(&[SeriesQuery::new("e1", "m1")])
        .await
        .expect_err("propagated");
    assert_eq!(err.code(), pulsebase_errors::codes::NET_SERVER_STATUS);
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.content(), Some("boom"));

    // the same propagation path covers every service
    let err = client
        .messages()
        .insert(&[Message::new("e1")])
        .await
        .expect_err("propagated");
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let stub = StubExec::text("OK");
    let client = TsdClient::new(stub.clone());

    let err = client
        .series()
        .query(&[SeriesQuery::new("e1", "m1")])
        .await
        .expect_err("rejected");
    assert_eq!(err.code(), pulsebase_errors::codes::WIRE_DECODE);
}

#[tokio::test]
async fn property_type_query_returns_raw_strings() {
    let stub = StubExec::json(json!(["disk", "network", "process"]));
    let client = TsdClient::new(stub.clone());

    let types = client
        .properties()
        .type_query("web01")
        .await
        .expect("types");
    assert_eq!(types, vec!["disk", "network", "process"]);

    let call = stub.last_call();
    assert_eq!(call.method.as_str(), "GET");
    assert_eq!(call.path, "properties/web01/types");
    assert!(call.body.is_none());
}

#[tokio::test]
async fn properties_round_trip_through_the_batched_endpoints() {
    let stub = StubExec::json(json!([
        {
            "type": "disk",
            "entity": "web01",
            "key": { "mount": "/" },
            "tags": { "fs": "ext4" },
            "date": 1_620_004_800_000i64
        }
    ]));
    let client = TsdClient::new(stub.clone());

    let found = client
        .properties()
        .query(&[PropertiesQuery::new("web01", "disk")])
        .await
        .expect("query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].type_, "disk");
    assert_eq!(found[0].key.get("mount").map(String::as_str), Some("/"));
    assert_eq!(found[0].date, Some(Timestamp(1_620_004_800_000)));

    client.properties().delete(&found).await.expect("delete");
    let call = stub.last_call();
    assert_eq!(call.path, "properties/delete");
    let body = call.body.expect("body");
    assert_eq!(body[0]["type"], json!("disk"));
    assert_eq!(body[0]["key"], json!({ "mount": "/" }));
}

#[tokio::test]
async fn alerts_flow_updates_and_queries() {
    let stub = StubExec::json(json!([
        { "id": 11, "rule": "cpu-high", "entity": "web01", "severity": 6, "acknowledged": "false" }
    ]));
    let client = TsdClient::new(stub.clone());

    let alerts = client
        .alerts()
        .query(&[AlertsQuery::new().with_min_severity(Severity::Warning)])
        .await
        .expect("query");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Some(Severity::Critical));

    let ids: Vec<i64> = alerts.iter().filter_map(|a| a.id).collect();
    client
        .alerts()
        .update(&[AlertUpdate::new(ids, true).expect("update")])
        .await
        .expect("update call");

    let call = stub.last_call();
    assert_eq!(call.path, "alerts/update");
    assert_eq!(
        call.body.expect("body"),
        json!([ { "ids": [11], "acknowledged": "true" } ])
    );
}

#[tokio::test]
async fn message_stats_decode_as_series() {
    let stub = StubExec::json(json!([
        { "entity": "web01", "metric": "message-count", "data": [ { "t": 1000, "v": 3 } ] }
    ]));
    let client = TsdClient::new(stub.clone());

    let stats = client
        .messages()
        .stats_query(&[MessagesQuery::new("web01")])
        .await
        .expect("stats");
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].metric, "message-count");
    assert_eq!(stats[0].data[0].value, Some(3.0));

    assert_eq!(stub.last_call().path, "messages/stats/query");
}

#[tokio::test]
async fn meta_service_addresses_resources_by_name() {
    let stub = StubExec::json(json!({
        "name": "web01",
        "enabled": "true",
        "tags": {},
        "lastInsertDate": "2021-05-03T01:20:00Z"
    }));
    let client = TsdClient::new(stub.clone());

    let entity = client.meta().entity("web01").await.expect("entity");
    assert_eq!(entity.name, "web01");
    assert_eq!(entity.enabled, Some(true));
    assert_eq!(entity.last_insert_date, Some(Timestamp(1_620_004_800_000)));

    client
        .meta()
        .update_entity(&entity)
        .await
        .expect("update");
    let call = stub.last_call();
    assert_eq!(call.method.as_str(), "PATCH");
    assert_eq!(call.path, "entities/web01");
    // tags stay present even when empty, so clears reach the server
    assert_eq!(call.body.expect("body")["tags"], json!({}));
}

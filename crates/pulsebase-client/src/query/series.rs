use std::collections::HashMap;

use chrono::{DateTime, Utc};
use pulsebase_types::prelude::TimeSpec;
use serde::Serialize;

use crate::query::transform::{Aggregate, Group, Rate};

/// One element of the batched `series/query` body. Entity, metric, and the
/// date bounds form the filter; `aggregate`/`group`/`rate` attach
/// independently. Time bounds are stored canonically as epoch millis (server
/// expressions pass through as strings).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesQuery {
    pub entity: String,
    pub metric: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub last: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_group: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub versioned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl SeriesQuery {
    pub fn new(entity: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            metric: metric.into(),
            tags: HashMap::new(),
            start_time: None,
            end_time: None,
            limit: None,
            last: None,
            cache: None,
            entity_group: None,
            entities: Vec::new(),
            versioned: None,
            value_filter: None,
            aggregate: None,
            group: None,
            rate: None,
            request_id: None,
        }
    }

    pub fn with_tags(mut self, tags: &HashMap<String, String>) -> Self {
        self.tags = tags.clone();
        self
    }

    pub fn with_start_time(mut self, start: impl Into<TimeSpec>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    pub fn with_end_time(mut self, end: impl Into<TimeSpec>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_last(mut self, last: bool) -> Self {
        self.last = Some(last);
        self
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_entity_group(mut self, group: impl Into<String>) -> Self {
        self.entity_group = Some(group.into());
        self
    }

    pub fn with_entities(mut self, entities: impl IntoIterator<Item = String>) -> Self {
        self.entities = entities.into_iter().collect();
        self
    }

    pub fn with_versioned(mut self, versioned: bool) -> Self {
        self.versioned = Some(versioned);
        self
    }

    pub fn with_value_filter(mut self, expression: impl Into<String>) -> Self {
        self.value_filter = Some(expression.into());
        self
    }

    pub fn with_aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The stored millis bound, viewed as a structured datetime.
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_ref().and_then(TimeSpec::datetime)
    }

    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        self.end_time.as_ref().and_then(TimeSpec::datetime)
    }
}

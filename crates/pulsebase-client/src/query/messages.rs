use std::collections::HashMap;

use pulsebase_types::prelude::{Severity, TimeSpec};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    pub entity: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl MessagesQuery {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            type_: None,
            source: None,
            severity: None,
            tags: HashMap::new(),
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
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
}

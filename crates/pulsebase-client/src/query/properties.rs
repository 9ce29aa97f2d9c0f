use std::collections::HashMap;

use pulsebase_types::prelude::TimeSpec;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesQuery {
    pub entity: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub key: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl PropertiesQuery {
    pub fn new(entity: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            type_: type_.into(),
            start_time: None,
            end_time: None,
            key: HashMap::new(),
            key_expression: None,
            limit: None,
        }
    }

    pub fn with_start_time(mut self, start: impl Into<TimeSpec>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    pub fn with_end_time(mut self, end: impl Into<TimeSpec>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    pub fn with_key(mut self, key: &HashMap<String, String>) -> Self {
        self.key = key.clone();
        self
    }

    pub fn with_key_expression(mut self, expression: impl Into<String>) -> Self {
        self.key_expression = Some(expression.into());
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

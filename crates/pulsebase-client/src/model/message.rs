use std::collections::HashMap;

use pulsebase_types::prelude::{Severity, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub persist: Option<bool>,
}

impl Message {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            type_: None,
            source: None,
            entity: entity.into(),
            date: None,
            severity: None,
            tags: HashMap::new(),
            message: None,
            persist: None,
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

    pub fn with_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = Some(persist);
        self
    }

    pub fn with_tags(mut self, tags: &HashMap<String, String>) -> Self {
        self.set_tags(Some(tags));
        self
    }

    /// Stores an owned copy; absent input becomes an empty-but-present map.
    pub fn set_tags(&mut self, tags: Option<&HashMap<String, String>>) {
        self.tags = tags.cloned().unwrap_or_default();
    }

    /// The server dedup identity.
    pub fn identity(&self) -> (&str, Option<Timestamp>, Option<&str>, Option<&str>) {
        (
            &self.entity,
            self.date,
            self.type_.as_deref(),
            self.source.as_deref(),
        )
    }
}

use std::collections::HashMap;

use pulsebase_types::prelude::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolateKind {
    Linear,
    Previous,
}

impl InterpolateKind {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown interpolation: {text}")))
    }
}

/// A monitored source system. `tags` is always emitted on the wire (an empty
/// map means "clear tags", which the server must be able to see).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<InterpolateKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_insert_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            enabled: None,
            interpolate: None,
            time_zone: None,
            tags: HashMap::new(),
            last_insert_date: None,
            created_date: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_interpolate(mut self, interpolate: InterpolateKind) -> Self {
        self.interpolate = Some(interpolate);
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
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
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityGroup {
    pub name: String,
    /// Membership rule, evaluated lazily server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub enabled: Option<bool>,
}

impl EntityGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: None,
            tags: HashMap::new(),
            enabled: None,
        }
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn set_tags(&mut self, tags: Option<&HashMap<String, String>>) {
        self.tags = tags.cloned().unwrap_or_default();
    }
}

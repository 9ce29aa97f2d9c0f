use std::collections::HashMap;

use pulsebase_types::prelude::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;
use crate::model::entity::InterpolateKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Short,
    Integer,
    Long,
    Float,
    Double,
    Decimal,
}

impl DataType {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown data type: {text}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimePrecision {
    Seconds,
    Milliseconds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidAction {
    None,
    Discard,
    Transform,
    RaiseError,
}

impl InvalidAction {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown invalid-action: {text}")))
    }
}

/// Server-side storage and validation policy for one measurement channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
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
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_precision: Option<TimePrecision>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub persistent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_action: Option<InvalidAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_retention_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_insert_date: Option<Timestamp>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub versioned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<InterpolateKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            enabled: None,
            data_type: None,
            time_precision: None,
            persistent: None,
            filter: None,
            min_value: None,
            max_value: None,
            invalid_action: None,
            description: None,
            retention_days: None,
            series_retention_days: None,
            last_insert_date: None,
            tags: HashMap::new(),
            versioned: None,
            interpolate: None,
            units: None,
            time_zone: None,
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

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    pub fn with_versioned(mut self, versioned: bool) -> Self {
        self.versioned = Some(versioned);
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_bounds(mut self, min_value: f64, max_value: f64) -> Result<Self, ClientError> {
        if min_value > max_value {
            return Err(ClientError::validation(&format!(
                "min_value {min_value} exceeds max_value {max_value}"
            )));
        }
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        Ok(self)
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

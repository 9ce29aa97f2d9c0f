use pulsebase_types::prelude::{Severity, TimeSpec};
use serde::Serialize;

use crate::errors::ClientError;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severities: Vec<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub acknowledged: Option<bool>,
}

impl AlertsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(mut self, entities: impl IntoIterator<Item = String>) -> Self {
        self.entities = entities.into_iter().collect();
        self
    }

    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item = String>) -> Self {
        self.metrics = metrics.into_iter().collect();
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = String>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    pub fn with_severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities = severities.into_iter().collect();
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    pub fn with_acknowledged(mut self, acknowledged: bool) -> Self {
        self.acknowledged = Some(acknowledged);
        self
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertHistoryQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl AlertHistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(mut self, entities: impl IntoIterator<Item = String>) -> Self {
        self.entities = entities.into_iter().collect();
        self
    }

    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item = String>) -> Self {
        self.metrics = metrics.into_iter().collect();
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = String>) -> Self {
        self.rules = rules.into_iter().collect();
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

/// Acknowledgement toggle for a batch of open alerts.
#[derive(Clone, Debug, Serialize)]
pub struct AlertUpdate {
    pub ids: Vec<i64>,
    #[serde(with = "crate::wire::bool_str")]
    pub acknowledged: bool,
}

impl AlertUpdate {
    pub fn new(ids: Vec<i64>, acknowledged: bool) -> Result<Self, ClientError> {
        if ids.is_empty() {
            return Err(ClientError::validation("alert update requires ids"));
        }
        Ok(Self { ids, acknowledged })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AlertDelete {
    pub ids: Vec<i64>,
}

impl AlertDelete {
    pub fn new(ids: Vec<i64>) -> Result<Self, ClientError> {
        if ids.is_empty() {
            return Err(ClientError::validation("alert delete requires ids"));
        }
        Ok(Self { ids })
    }
}

//! Server-side transformation elements of the series query DSL. Option
//! validation happens at construction time, never at the server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown time unit: {text}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateType {
    Detail,
    Count,
    Min,
    Max,
    Avg,
    Sum,
    #[serde(rename = "PERCENTILE_999")]
    Percentile999,
    #[serde(rename = "PERCENTILE_995")]
    Percentile995,
    #[serde(rename = "PERCENTILE_99")]
    Percentile99,
    #[serde(rename = "PERCENTILE_95")]
    Percentile95,
    #[serde(rename = "PERCENTILE_90")]
    Percentile90,
    #[serde(rename = "PERCENTILE_75")]
    Percentile75,
    #[serde(rename = "PERCENTILE_50")]
    Percentile50,
    Median,
    StandardDeviation,
    First,
    Last,
    Delta,
    Wavg,
    Wtavg,
    ThresholdCount,
    ThresholdDuration,
    ThresholdPercent,
}

impl AggregateType {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown aggregate type: {text}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpolation {
    None,
    Linear,
    Step,
}

impl Interpolation {
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let upper = text.trim().to_ascii_uppercase();
        serde_json::from_value(Value::String(upper))
            .map_err(|_| ClientError::validation(&format!("unknown interpolation: {text}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Period {
    pub count: u64,
    pub unit: TimeUnit,
}

impl Period {
    pub fn new(count: u64, unit: TimeUnit) -> Result<Self, ClientError> {
        if count == 0 {
            return Err(ClientError::validation("period count must be positive"));
        }
        Ok(Self { count, unit })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Threshold {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Threshold {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, ClientError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(ClientError::validation(&format!(
                    "threshold min {lo} exceeds max {hi}"
                )));
            }
        }
        Ok(Self { min, max })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WorkingMinutes {
    pub start: u32,
    pub end: u32,
}

impl WorkingMinutes {
    pub fn new(start: u32, end: u32) -> Result<Self, ClientError> {
        if start > end {
            return Err(ClientError::validation(&format!(
                "working minutes start {start} after end {end}"
            )));
        }
        Ok(Self { start, end })
    }
}

/// Wire shape: `{"period": {...}, "types": [...], ...}`; optional members
/// are omitted entirely when unset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub period: Period,
    pub types: Vec<AggregateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Interpolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Calendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_minutes: Option<WorkingMinutes>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub counter: Option<bool>,
}

impl Aggregate {
    pub fn new(period: Period, types: Vec<AggregateType>) -> Result<Self, ClientError> {
        if types.is_empty() {
            return Err(ClientError::validation(
                "aggregate requires at least one type",
            ));
        }
        Ok(Self {
            period,
            types,
            interpolate: None,
            threshold: None,
            calendar: None,
            working_minutes: None,
            counter: None,
        })
    }

    /// Convenience for string inputs; each name is validated here.
    pub fn parse(period: Period, type_names: &[&str]) -> Result<Self, ClientError> {
        let types = type_names
            .iter()
            .map(|name| AggregateType::parse(name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(period, types)
    }

    pub fn with_interpolate(mut self, interpolate: Interpolation) -> Self {
        self.interpolate = Some(interpolate);
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_calendar(mut self, name: impl Into<String>) -> Self {
        self.calendar = Some(Calendar { name: name.into() });
        self
    }

    pub fn with_working_minutes(mut self, working_minutes: WorkingMinutes) -> Self {
        self.working_minutes = Some(working_minutes);
        self
    }

    pub fn with_counter(mut self, counter: bool) -> Self {
        self.counter = Some(counter);
        self
    }
}

/// Wire shape: `{"period": {...}, "counter"?: "true"|"false"}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Rate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub counter: Option<bool>,
}

impl Rate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_counter(mut self, counter: bool) -> Self {
        self.counter = Some(counter);
        self
    }
}

/// Wire shape: `{"type": "...", "interpolate"?, "truncate"?, "period"?}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Group {
    #[serde(rename = "type")]
    pub type_: AggregateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Interpolation>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::bool_str_opt"
    )]
    pub truncate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Group {
    pub fn new(type_: AggregateType) -> Self {
        Self {
            type_,
            interpolate: None,
            truncate: None,
            period: None,
        }
    }

    pub fn with_interpolate(mut self, interpolate: Interpolation) -> Self {
        self.interpolate = Some(interpolate);
        self
    }

    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = Some(truncate);
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }
}

use std::cmp::Ordering;

use pulsebase_types::prelude::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One timestamped observation. Wire form:
/// `{"t": <epoch-millis>, "v": <number|null|"NaN">, "version": {...}}`,
/// `version` omitted when absent. A `NaN` value marks a deleted sample and
/// round-trips distinctly from `null`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "t")]
    pub time: Timestamp,
    #[serde(rename = "v", default, with = "crate::wire::sample_value")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<SampleVersion>,
}

impl Sample {
    pub fn new(time: impl Into<Timestamp>, value: f64) -> Self {
        Self {
            time: time.into(),
            value: Some(value),
            version: None,
        }
    }

    /// The deleted-value sentinel.
    pub fn deleted(time: impl Into<Timestamp>) -> Self {
        Self {
            time: time.into(),
            value: Some(f64::NAN),
            version: None,
        }
    }

    pub fn with_version(
        mut self,
        source: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        self.version = Some(SampleVersion {
            source: Some(source.into()),
            status: Some(status.into()),
        });
        self
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.value, Some(v) if v.is_nan())
    }
}

// comparison is by time only; value and version are ignored
impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl Eq for Sample {}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

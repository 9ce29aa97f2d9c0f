use std::collections::{BTreeMap, HashMap};

use pulsebase_types::prelude::Timestamp;
use serde::{Deserialize, Serialize};

use crate::model::sample::Sample;

/// The samples for one (entity, metric, tags) triple. `data` is not required
/// to arrive pre-sorted; the projections below order it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub entity: String,
    pub metric: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub data: Vec<Sample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_insert_date: Option<Timestamp>,
}

impl Series {
    pub fn new(entity: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            metric: metric.into(),
            tags: HashMap::new(),
            data: Vec::new(),
            last_insert_date: None,
        }
    }

    pub fn with_tags(mut self, tags: &HashMap<String, String>) -> Self {
        self.set_tags(Some(tags));
        self
    }

    /// Stores an owned copy; absent input becomes an empty-but-present map.
    pub fn set_tags(&mut self, tags: Option<&HashMap<String, String>>) {
        self.tags = tags.cloned().unwrap_or_default();
    }

    pub fn with_samples(mut self, samples: impl IntoIterator<Item = Sample>) -> Self {
        self.data.extend(samples);
        self
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.data.push(sample);
    }

    pub fn add_value(&mut self, time: impl Into<Timestamp>, value: f64) {
        self.data.push(Sample::new(time, value));
    }

    /// Identity tuple; two series with equal keys address the same stored data.
    pub fn key(&self) -> (&str, &str, BTreeMap<&str, &str>) {
        let tags = self
            .tags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        (&self.entity, &self.metric, tags)
    }

    /// Chronological view; duplicate timestamps collapse to the latest
    /// occurrence in insertion order.
    fn chronological(&self) -> Vec<&Sample> {
        let mut sorted: Vec<&Sample> = self.data.iter().collect();
        sorted.sort_by_key(|s| s.time);
        let mut out: Vec<&Sample> = Vec::with_capacity(sorted.len());
        for sample in sorted {
            match out.last_mut() {
                Some(prev) if prev.time == sample.time => *prev = sample,
                _ => out.push(sample),
            }
        }
        out
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.chronological().into_iter().map(|s| s.value).collect()
    }

    pub fn times(&self) -> Vec<Timestamp> {
        self.chronological().into_iter().map(|s| s.time).collect()
    }
}

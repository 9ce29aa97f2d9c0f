use std::collections::{BTreeMap, HashMap};

use pulsebase_types::prelude::Timestamp;
use serde::{Deserialize, Serialize};

/// Key-value record attached to an entity. Identified by (entity, type, key);
/// the server keeps the last write per identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "type")]
    pub type_: String,
    pub entity: String,
    #[serde(default)]
    pub key: HashMap<String, String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

impl Property {
    pub fn new(type_: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            entity: entity.into(),
            key: HashMap::new(),
            tags: HashMap::new(),
            date: None,
        }
    }

    pub fn with_key(mut self, key: &HashMap<String, String>) -> Self {
        self.set_key(Some(key));
        self
    }

    pub fn with_tags(mut self, tags: &HashMap<String, String>) -> Self {
        self.set_tags(Some(tags));
        self
    }

    pub fn with_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Stores an owned copy; absent input becomes an empty-but-present map.
    pub fn set_key(&mut self, key: Option<&HashMap<String, String>>) {
        self.key = key.cloned().unwrap_or_default();
    }

    /// Stores an owned copy; absent input becomes an empty-but-present map.
    pub fn set_tags(&mut self, tags: Option<&HashMap<String, String>>) {
        self.tags = tags.cloned().unwrap_or_default();
    }

    pub fn id(&self) -> (&str, &str, BTreeMap<&str, &str>) {
        let key = self
            .key
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        (&self.entity, &self.type_, key)
    }
}

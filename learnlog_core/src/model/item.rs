use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub type Attributes = HashMap<String, Value>;

/// A catalog entry a learner can interact with.
///
/// `attributes` is owned by each record and starts out empty; `created_at`
/// is the local wall-clock time without any offset attached.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ItemRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default = "local_now")]
    pub created_at: NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl ItemRecord {
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            attributes: Attributes::new(),
            created_at: local_now(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

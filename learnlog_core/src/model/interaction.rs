use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A learner's interaction with an item, e.g. a `"view"`.
///
/// `created_at` is only set when the caller supplies it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InteractionLog {
    pub id: i64,
    pub learner_id: i64,
    pub item_id: i64,
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl InteractionLog {
    pub fn new(id: i64, learner_id: i64, item_id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn created_at_defaults_to_none() {
        let log = InteractionLog::new(1, 1, 1, "view");
        assert_eq!(log.created_at, None);
        assert_eq!(serde_json::to_value(&log).unwrap()["created_at"], json!(null));
    }

    #[test]
    fn created_at_from_caller() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let log = InteractionLog::new(2, 7, 3, "complete").with_created_at(ts);
        assert_eq!(log.created_at, Some(ts));
        assert_eq!(log.kind, "complete");
    }

    #[test]
    fn deserialize_without_created_at() {
        let missing: InteractionLog = serde_json::from_value(json!({
            "id": 3, "learner_id": 4, "item_id": 5, "kind": "view"
        }))
        .unwrap();
        let null: InteractionLog = serde_json::from_value(json!({
            "id": 3, "learner_id": 4, "item_id": 5, "kind": "view", "created_at": null
        }))
        .unwrap();
        assert_eq!(missing, InteractionLog::new(3, 4, 5, "view"));
        assert_eq!(missing, null);
    }
}

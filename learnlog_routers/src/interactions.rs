use learnlog_core::model::InteractionLog;
use log::trace;
use serde::Deserialize;

/// Query string accepted when listing interactions, e.g. `?item_id=5`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InteractionQuery {
    pub item_id: Option<i64>,
}

impl InteractionQuery {
    pub fn apply(&self, interactions: &[InteractionLog]) -> Vec<InteractionLog> {
        match self.item_id {
            Some(item_id) => filter_by_item_id(interactions, item_id),
            None => interactions.to_vec(),
        }
    }
}

/// Interactions whose `item_id` equals `item_id`, in input order.
pub fn filter_by_item_id(interactions: &[InteractionLog], item_id: i64) -> Vec<InteractionLog> {
    let matched: Vec<InteractionLog> = interactions
        .iter()
        .filter(|i| i.item_id == item_id)
        .cloned()
        .collect();
    trace!(
        "{} of {} interactions match item {}",
        matched.len(),
        interactions.len(),
        item_id
    );
    matched
}

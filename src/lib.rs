pub use learnlog_core::{config, log::init_log4rs, model, Attributes, InteractionLog, ItemRecord};
pub use learnlog_routers as routers;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routers::InteractionQuery;

    #[test]
    fn interactions_for_an_item() {
        let item = ItemRecord::new(5, "Ownership", "moves and borrows");
        let interactions = [
            InteractionLog::new(1, 1, item.id, "view"),
            InteractionLog::new(2, 1, 6, "view"),
            InteractionLog::new(3, 2, item.id, "complete"),
        ];

        let query = InteractionQuery {
            item_id: Some(item.id),
        };
        let r = query.apply(&interactions);
        assert_eq!(r, [interactions[0].clone(), interactions[2].clone()]);
        assert!(r.iter().all(|i| i.created_at.is_none()));
    }
}

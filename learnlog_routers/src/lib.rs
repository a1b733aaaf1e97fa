//! Helpers used by the HTTP layer to shape records before responding.
//! Handlers themselves live with the application.

pub mod interactions;

pub use interactions::{filter_by_item_id, InteractionQuery};

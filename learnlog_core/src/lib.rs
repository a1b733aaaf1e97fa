pub mod config;
pub mod log;
pub mod model;

pub use model::{Attributes, InteractionLog, ItemRecord};

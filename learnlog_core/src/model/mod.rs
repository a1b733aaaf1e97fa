pub mod interaction;
pub mod item;

pub use interaction::InteractionLog;
pub use item::{Attributes, ItemRecord};

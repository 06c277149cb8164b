//! Chat card payload — wire model and rendering.

pub mod model;
pub mod render;

pub use model::CardMessage;
pub use render::{card_message, render};

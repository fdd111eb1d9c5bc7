pub mod bindings;
pub mod chrome;
pub mod dom_effects;
pub mod reveal;

pub use bindings::{page_category, ViewBindings};

pub mod analytics;
pub mod config;
pub mod dom;
pub mod icons;

pub mod chrome;
pub mod dom_effect;
pub mod modal;
pub mod site_config;

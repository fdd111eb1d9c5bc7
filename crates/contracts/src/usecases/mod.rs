pub mod common;
pub mod u501_load_catalog;

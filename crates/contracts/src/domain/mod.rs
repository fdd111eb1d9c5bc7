pub mod a001_service_category;
pub mod a002_service;

pub mod a002_service;

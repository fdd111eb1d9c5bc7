pub mod aggregate;
pub mod view_model;

pub use aggregate::{CatalogDocument, ServiceRecord};
pub use view_model::{ServiceCardModel, ServiceDetailModel};

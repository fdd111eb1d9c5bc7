pub mod card;
pub mod catalog;
pub mod details_modal;

pub use card::ServiceCard;
pub use catalog::ServiceCatalogPage;
pub use details_modal::ServiceDetailsModal;

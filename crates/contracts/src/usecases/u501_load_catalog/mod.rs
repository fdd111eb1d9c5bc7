pub mod error;
pub mod state;

pub use error::CatalogError;
pub use state::{LoadState, RegionVisibility, EMPTY_MESSAGE, ERROR_MESSAGE};

use crate::usecases::common::UseCaseMetadata;

pub struct LoadCatalog;

impl UseCaseMetadata for LoadCatalog {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "load_catalog"
    }

    fn display_name() -> &'static str {
        "Service catalog"
    }

    fn description() -> &'static str {
        "Загрузка JSON-каталога категории и отображение карточек услуг"
    }
}

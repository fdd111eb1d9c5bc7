use super::error::CatalogError;
use crate::domain::a002_service::{CatalogDocument, ServiceRecord};

pub const EMPTY_MESSAGE: &str = "No services are currently available in this category.";
pub const ERROR_MESSAGE: &str = "Unable to load services at this time. Please try again later.";

/// Состояние загрузки каталога
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<ServiceRecord>),
    Empty,
    Failed(CatalogError),
}

/// Видимость трёх областей страницы: индикатор загрузки, список, сообщение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionVisibility {
    pub loading: bool,
    pub list: bool,
    pub empty: bool,
}

impl LoadState {
    /// Разобрать результат запроса; пустой или отсутствующий `services` — не ошибка
    pub fn from_outcome(outcome: Result<CatalogDocument, CatalogError>) -> Self {
        match outcome {
            Ok(doc) => {
                let services = doc.into_services();
                if services.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Ready(services)
                }
            }
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn visibility(&self) -> RegionVisibility {
        match self {
            LoadState::Loading => RegionVisibility {
                loading: true,
                list: false,
                empty: false,
            },
            LoadState::Ready(_) => RegionVisibility {
                loading: false,
                list: true,
                empty: false,
            },
            LoadState::Empty | LoadState::Failed(_) => RegionVisibility {
                loading: false,
                list: false,
                empty: true,
            },
        }
    }

    /// Текст в области пустого состояния
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Failed(_) => Some(ERROR_MESSAGE),
            LoadState::Loading | LoadState::Ready(_) => None,
        }
    }

    pub fn services(&self) -> &[ServiceRecord] {
        match self {
            LoadState::Ready(services) => services,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> CatalogDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_initial_state_shows_only_loading() {
        let v = LoadState::default().visibility();
        assert_eq!(
            v,
            RegionVisibility {
                loading: true,
                list: false,
                empty: false
            }
        );
    }

    #[test]
    fn test_zero_services_shows_empty_and_hides_list() {
        for json in [r#"{"services":[]}"#, "{}"] {
            let state = LoadState::from_outcome(Ok(doc(json)));
            assert_eq!(state, LoadState::Empty);
            let v = state.visibility();
            assert!(!v.list);
            assert!(!v.loading);
            assert!(v.empty);
            assert_eq!(state.message(), Some(EMPTY_MESSAGE));
        }
    }

    #[test]
    fn test_failures_show_error_and_no_cards() {
        for err in [
            CatalogError::Status(404),
            CatalogError::Network("offline".into()),
            CatalogError::Parse("expected value".into()),
        ] {
            let state = LoadState::from_outcome(Err(err));
            let v = state.visibility();
            assert!(!v.loading);
            assert!(!v.list);
            assert!(v.empty);
            assert_eq!(state.message(), Some(ERROR_MESSAGE));
            assert!(state.services().is_empty());
        }
    }

    #[test]
    fn test_malformed_json_maps_to_parse_error() {
        let err: CatalogError = serde_json::from_str::<CatalogDocument>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_services_render_in_order() {
        let state = LoadState::from_outcome(Ok(doc(
            r#"{"services":[{"name":"One"},{"name":"Two"},{"name":"Three"}]}"#,
        )));
        let names: Vec<_> = state.services().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["One", "Two", "Three"]);
        assert!(state.visibility().list);
        assert_eq!(state.message(), None);
    }
}

//! Состояние единственного модального окна с подробностями услуги.
//!
//! Закрыто → Открыто (любое `Open`) → Закрыто (любой способ закрытия).
//! Повторное `Open` при открытом окне просто заменяет запись.

use crate::domain::a002_service::ServiceRecord;
use crate::shared::dom_effect::DomEffect;

/// Способ закрытия окна. Все три ведут в один и тот же переход.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Overlay,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open(ServiceRecord),
    Dismiss(DismissTrigger),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ServiceRecord),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn record(&self) -> Option<&ServiceRecord> {
        match self {
            ModalState::Open(record) => Some(record),
            ModalState::Closed => None,
        }
    }

    /// Применить событие, вернуть эффекты для DOM
    pub fn apply(&mut self, event: ModalEvent) -> Vec<DomEffect> {
        match event {
            ModalEvent::Open(record) => {
                *self = ModalState::Open(record);
                vec![DomEffect::LockScroll]
            }
            ModalEvent::Dismiss(_) => {
                if self.is_open() {
                    *self = ModalState::Closed;
                    vec![DomEffect::UnlockScroll]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service::ServiceDetailModel;
    use crate::shared::site_config::SiteConfig;

    fn service(name: &str, benefits: &[&str]) -> ServiceRecord {
        ServiceRecord {
            name: name.to_string(),
            benefits: Some(benefits.iter().map(|b| b.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_locks_scroll() {
        let mut state = ModalState::default();
        let effects = state.apply(ModalEvent::Open(service("A", &[])));
        assert!(state.is_open());
        assert_eq!(effects, vec![DomEffect::LockScroll]);
    }

    #[test]
    fn test_each_trigger_closes() {
        for trigger in [
            DismissTrigger::CloseButton,
            DismissTrigger::Overlay,
            DismissTrigger::Escape,
        ] {
            let mut state = ModalState::Open(service("A", &[]));
            let effects = state.apply(ModalEvent::Dismiss(trigger));
            assert_eq!(state, ModalState::Closed, "{trigger:?}");
            assert_eq!(effects, vec![DomEffect::UnlockScroll]);
        }
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let mut state = ModalState::Closed;
        assert!(state.apply(ModalEvent::Dismiss(DismissTrigger::Escape)).is_empty());
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_reopen_replaces_record_without_leftovers() {
        let cfg = SiteConfig::default();
        let mut state = ModalState::Closed;
        state.apply(ModalEvent::Open(service("A", &["a1", "a2", "a3"])));
        state.apply(ModalEvent::Open(service("B", &["b1"])));

        let shown = ServiceDetailModel::build(state.record().unwrap(), &cfg);
        assert_eq!(shown.title, "B");
        assert_eq!(shown.benefits, vec!["b1".to_string()]);
    }
}

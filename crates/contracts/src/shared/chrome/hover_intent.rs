use crate::shared::dom_effect::{DomEffect, Hook};

pub const ACTIVE_CLASS: &str = "active";

/// Задержка закрытия пункта мега-меню.
///
/// Уход курсора планирует закрытие с номером поколения; любой новый вход
/// увеличивает поколение, поэтому устаревший таймер ничего не закроет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverIntent {
    active: bool,
    hovered: bool,
    generation: u64,
}

impl HoverIntent {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn enter(&mut self, item: usize) -> Vec<DomEffect> {
        self.hovered = true;
        self.generation += 1;
        let mut effects = vec![DomEffect::CancelMenuRelease { item }];
        if !self.active {
            self.active = true;
            effects.push(DomEffect::add_class(Hook::MegaMenuItem(item), ACTIVE_CLASS));
        }
        effects
    }

    pub fn leave(&mut self, item: usize, delay_ms: u32) -> Vec<DomEffect> {
        self.hovered = false;
        self.generation += 1;
        vec![DomEffect::ScheduleMenuRelease {
            item,
            generation: self.generation,
            delay_ms,
        }]
    }

    pub fn release_elapsed(&mut self, item: usize, generation: u64) -> Vec<DomEffect> {
        if generation != self.generation || self.hovered || !self.active {
            return Vec::new();
        }
        self.active = false;
        vec![DomEffect::remove_class(Hook::MegaMenuItem(item), ACTIVE_CLASS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled_generation(effects: &[DomEffect]) -> u64 {
        match effects {
            [DomEffect::ScheduleMenuRelease { generation, .. }] => *generation,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_enter_activates_immediately() {
        let mut h = HoverIntent::default();
        let effects = h.enter(0);
        assert!(h.is_active());
        assert!(effects.contains(&DomEffect::add_class(Hook::MegaMenuItem(0), ACTIVE_CLASS)));
    }

    #[test]
    fn test_leave_then_elapsed_deactivates() {
        let mut h = HoverIntent::default();
        h.enter(1);
        let generation = scheduled_generation(&h.leave(1, 200));
        let effects = h.release_elapsed(1, generation);
        assert!(!h.is_active());
        assert_eq!(
            effects,
            vec![DomEffect::remove_class(Hook::MegaMenuItem(1), ACTIVE_CLASS)]
        );
    }

    #[test]
    fn test_reenter_cancels_pending_release() {
        let mut h = HoverIntent::default();
        h.enter(0);
        let stale = scheduled_generation(&h.leave(0, 200));
        let effects = h.enter(0);

        assert_eq!(effects, vec![DomEffect::CancelMenuRelease { item: 0 }]);
        assert!(h.release_elapsed(0, stale).is_empty());
        assert!(h.is_active());
    }

    #[test]
    fn test_only_latest_leave_counts() {
        let mut h = HoverIntent::default();
        h.enter(0);
        let first = scheduled_generation(&h.leave(0, 200));
        h.enter(0);
        let second = scheduled_generation(&h.leave(0, 200));

        assert!(h.release_elapsed(0, first).is_empty());
        assert!(!h.release_elapsed(0, second).is_empty());
    }
}

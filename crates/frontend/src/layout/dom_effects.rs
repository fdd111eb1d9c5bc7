use crate::layout::bindings::ViewBindings;
use crate::shared::dom::{set_scroll_lock, smooth_scroll_to};
use contracts::shared::dom_effect::DomEffect;

/// Execute a DOM effect produced by one of the reducers.
///
/// Class effects need the page bindings; components that own no bindings
/// (the detail modal) pass `None`. Timer effects belong to the chrome runtime
/// and are ignored here.
pub fn apply(effect: &DomEffect, bindings: Option<&ViewBindings>) {
    match effect {
        DomEffect::SetClass { hook, class, on } => {
            let Some(el) = bindings.and_then(|b| b.hook(*hook)) else {
                return;
            };
            let classes = el.class_list();
            let result = if *on {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(e) = result {
                log::warn!("failed to set class {} on {:?}: {:?}", class, hook, e);
            }
        }
        DomEffect::LockScroll => set_scroll_lock(true),
        DomEffect::UnlockScroll => set_scroll_lock(false),
        DomEffect::ScrollTo { top } => smooth_scroll_to(*top),
        DomEffect::ScheduleMenuRelease { .. } | DomEffect::CancelMenuRelease { .. } => {
            log::debug!("timer effect outside chrome runtime: {:?}", effect);
        }
    }
}

pub fn apply_all(effects: &[DomEffect], bindings: Option<&ViewBindings>) {
    for effect in effects {
        apply(effect, bindings);
    }
}

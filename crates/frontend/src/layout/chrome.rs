//! Page chrome: header scroll state, mega-menu hover intent, mobile menu,
//! back-to-top and anchor smooth-scroll.
//!
//! Listeners translate DOM events into [`ChromeEvent`]s; all decisions are made
//! by [`ChromeState`] and come back as [`DomEffect`]s executed here.

use crate::layout::bindings::ViewBindings;
use crate::layout::dom_effects;
use crate::shared::dom::{document, listen, scroll_offset};
use contracts::shared::chrome::{fragment_target, ChromeEvent, ChromeState};
use contracts::shared::dom_effect::DomEffect;
use contracts::shared::site_config::SiteConfig;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub struct ChromeRuntime {
    bindings: Rc<ViewBindings>,
    config: SiteConfig,
    state: RefCell<ChromeState>,
    release_timers: RefCell<HashMap<usize, Timeout>>,
    frame_pending: Cell<bool>,
}

impl ChromeRuntime {
    pub fn new(bindings: Rc<ViewBindings>, config: SiteConfig) -> Rc<Self> {
        let state = ChromeState::new(bindings.mega_menu_items.len());
        Rc::new(Self {
            bindings,
            config,
            state: RefCell::new(state),
            release_timers: RefCell::new(HashMap::new()),
            frame_pending: Cell::new(false),
        })
    }

    pub fn dispatch(self: &Rc<Self>, event: ChromeEvent) {
        // borrow is released before effects run: timers dispatch back into us
        let effects = self.state.borrow_mut().apply(event, &self.config);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self: &Rc<Self>, effect: DomEffect) {
        match effect {
            DomEffect::ScheduleMenuRelease {
                item,
                generation,
                delay_ms,
            } => {
                let this = Rc::clone(self);
                let timeout = Timeout::new(delay_ms, move || {
                    this.dispatch(ChromeEvent::MenuReleaseElapsed { item, generation });
                });
                // replacing an older timer drops it, which cancels it
                self.release_timers.borrow_mut().insert(item, timeout);
            }
            DomEffect::CancelMenuRelease { item } => {
                self.release_timers.borrow_mut().remove(&item);
            }
            other => dom_effects::apply(&other, Some(&self.bindings)),
        }
    }

    /// Coalesce scroll events into one update per animation frame.
    fn schedule_scroll_update(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }
        let this = Rc::clone(self);
        let callback = Closure::once_into_js(move || {
            this.frame_pending.set(false);
            this.dispatch(ChromeEvent::Scrolled {
                offset: scroll_offset(),
            });
        });
        let requested = web_sys::window()
            .map(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !requested {
            self.frame_pending.set(false);
            self.dispatch(ChromeEvent::Scrolled {
                offset: scroll_offset(),
            });
        }
    }
}

/// Wire every chrome behavior whose hook points exist on the page.
pub fn install(bindings: Rc<ViewBindings>, config: SiteConfig) -> Rc<ChromeRuntime> {
    let runtime = ChromeRuntime::new(bindings, config);
    let b = &runtime.bindings;

    if b.header.is_some() || b.back_to_top.is_some() {
        if let Some(window) = web_sys::window() {
            let rt = Rc::clone(&runtime);
            listen(&window, "scroll", move |_| rt.schedule_scroll_update());
        }
        // page may be restored mid-scroll
        runtime.dispatch(ChromeEvent::Scrolled {
            offset: scroll_offset(),
        });
    }

    for (item, el) in b.mega_menu_items.iter().enumerate() {
        let rt = Rc::clone(&runtime);
        listen(el, "mouseenter", move |_| {
            rt.dispatch(ChromeEvent::MenuEnter { item })
        });
        let rt = Rc::clone(&runtime);
        listen(el, "mouseleave", move |_| {
            rt.dispatch(ChromeEvent::MenuLeave { item })
        });
    }

    install_mobile_menu(&runtime);

    if let Some(button) = &b.back_to_top {
        let rt = Rc::clone(&runtime);
        listen(button, "click", move |ev| {
            ev.prevent_default();
            rt.dispatch(ChromeEvent::BackToTop);
        });
    }

    install_anchor_scroll(&runtime);

    log::debug!(
        "chrome: header={} mega_menu={} mobile_menu={} back_to_top={} anchors={}",
        b.header.is_some(),
        b.mega_menu_items.len(),
        b.mobile_menu.is_some(),
        b.back_to_top.is_some(),
        b.anchor_links.len()
    );

    runtime
}

fn install_mobile_menu(runtime: &Rc<ChromeRuntime>) {
    let b = &runtime.bindings;
    if b.mobile_menu.is_none() {
        return;
    }

    if let Some(toggle) = &b.mobile_menu_toggle {
        let rt = Rc::clone(runtime);
        listen(toggle, "click", move |_| rt.dispatch(ChromeEvent::MobileMenuOpen));
    }
    if let Some(close) = &b.mobile_menu_close {
        let rt = Rc::clone(runtime);
        listen(close, "click", move |_| rt.dispatch(ChromeEvent::MobileMenuClose));
    }
    if let Some(overlay) = &b.mobile_menu_overlay {
        let rt = Rc::clone(runtime);
        listen(overlay, "click", move |_| rt.dispatch(ChromeEvent::MobileMenuClose));
    }
    for link in &b.mobile_menu_links {
        let rt = Rc::clone(runtime);
        listen(link, "click", move |_| rt.dispatch(ChromeEvent::MobileMenuClose));
    }
}

fn install_anchor_scroll(runtime: &Rc<ChromeRuntime>) {
    for link in &runtime.bindings.anchor_links {
        let rt = Rc::clone(runtime);
        let anchor = link.clone();
        listen(link, "click", move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_target(&href) else {
                return;
            };
            let Some(target) = document().and_then(|d| d.get_element_by_id(&id)) else {
                return;
            };
            ev.prevent_default();
            let target_top = target.get_bounding_client_rect().top() + scroll_offset();
            let header_height = rt.bindings.header_height();
            rt.dispatch(ChromeEvent::AnchorActivated {
                target_top,
                header_height,
            });
        });
    }
}

use super::anchor::anchor_scroll_top;
use super::hover_intent::HoverIntent;
use crate::shared::dom_effect::{DomEffect, Hook};
use crate::shared::site_config::SiteConfig;

const SCROLLED_CLASS: &str = "scrolled";
const VISIBLE_CLASS: &str = "visible";
const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq)]
pub enum ChromeEvent {
    /// Текущее вертикальное смещение окна
    Scrolled { offset: f64 },
    MenuEnter { item: usize },
    MenuLeave { item: usize },
    MenuReleaseElapsed { item: usize, generation: u64 },
    MobileMenuOpen,
    /// Кнопка закрытия, клик по подложке или переход по ссылке меню
    MobileMenuClose,
    BackToTop,
    /// `target_top` — абсолютная позиция цели в документе
    AnchorActivated { target_top: f64, header_height: f64 },
}

/// Состояние обвязки страницы.
///
/// Каждое поведение независимо; эффекты выдаются только при смене состояния,
/// поэтому повторные события безопасны.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeState {
    header_scrolled: bool,
    back_to_top_visible: bool,
    mobile_menu_open: bool,
    menus: Vec<HoverIntent>,
}

impl ChromeState {
    pub fn new(menu_items: usize) -> Self {
        Self {
            menus: vec![HoverIntent::default(); menu_items],
            ..Default::default()
        }
    }

    pub fn header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn menu(&self, item: usize) -> Option<&HoverIntent> {
        self.menus.get(item)
    }

    pub fn apply(&mut self, event: ChromeEvent, config: &SiteConfig) -> Vec<DomEffect> {
        match event {
            ChromeEvent::Scrolled { offset } => self.on_scroll(offset, config),
            ChromeEvent::MenuEnter { item } => self
                .menus
                .get_mut(item)
                .map(|m| m.enter(item))
                .unwrap_or_default(),
            ChromeEvent::MenuLeave { item } => self
                .menus
                .get_mut(item)
                .map(|m| m.leave(item, config.mega_menu_close_delay_ms))
                .unwrap_or_default(),
            ChromeEvent::MenuReleaseElapsed { item, generation } => self
                .menus
                .get_mut(item)
                .map(|m| m.release_elapsed(item, generation))
                .unwrap_or_default(),
            ChromeEvent::MobileMenuOpen => self.set_mobile_menu(true),
            ChromeEvent::MobileMenuClose => self.set_mobile_menu(false),
            ChromeEvent::BackToTop => vec![DomEffect::ScrollTo { top: 0.0 }],
            ChromeEvent::AnchorActivated {
                target_top,
                header_height,
            } => vec![DomEffect::ScrollTo {
                top: anchor_scroll_top(target_top, header_height, config.anchor_scroll_margin),
            }],
        }
    }

    fn on_scroll(&mut self, offset: f64, config: &SiteConfig) -> Vec<DomEffect> {
        let mut effects = Vec::new();

        let scrolled = offset > config.header_scroll_threshold;
        if scrolled != self.header_scrolled {
            self.header_scrolled = scrolled;
            effects.push(DomEffect::SetClass {
                hook: Hook::Header,
                class: SCROLLED_CLASS,
                on: scrolled,
            });
        }

        let visible = offset > config.back_to_top_threshold;
        if visible != self.back_to_top_visible {
            self.back_to_top_visible = visible;
            effects.push(DomEffect::SetClass {
                hook: Hook::BackToTop,
                class: VISIBLE_CLASS,
                on: visible,
            });
        }

        effects
    }

    fn set_mobile_menu(&mut self, open: bool) -> Vec<DomEffect> {
        if self.mobile_menu_open == open {
            return Vec::new();
        }
        self.mobile_menu_open = open;
        vec![
            DomEffect::SetClass {
                hook: Hook::MobileMenu,
                class: ACTIVE_CLASS,
                on: open,
            },
            DomEffect::SetClass {
                hook: Hook::MobileMenuOverlay,
                class: ACTIVE_CLASS,
                on: open,
            },
            if open {
                DomEffect::LockScroll
            } else {
                DomEffect::UnlockScroll
            },
        ]
    }
}

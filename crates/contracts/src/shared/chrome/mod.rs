//! Поведение "обвязки" страницы: шапка, мега-меню, мобильное меню,
//! кнопка "наверх" и плавная прокрутка к якорям.

pub mod anchor;
pub mod hover_intent;
pub mod state;

pub use anchor::{anchor_scroll_top, fragment_target};
pub use hover_intent::HoverIntent;
pub use state::{ChromeEvent, ChromeState};

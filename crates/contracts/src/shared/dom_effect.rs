//! Словарь DOM-эффектов.
//!
//! Редьюсеры (`chrome`, `modal`) не трогают DOM напрямую: они возвращают
//! список эффектов, а исполняет их фронтенд. Так логику можно тестировать
//! без браузера.

/// Точка привязки на странице, к которой применяется эффект
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Header,
    /// Пункт мега-меню по порядку в документе
    MegaMenuItem(usize),
    MobileMenu,
    MobileMenuOverlay,
    BackToTop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomEffect {
    /// Добавить (`on = true`) или снять CSS-класс
    SetClass {
        hook: Hook,
        class: &'static str,
        on: bool,
    },
    /// Запретить прокрутку страницы (`body { overflow: hidden }`)
    LockScroll,
    UnlockScroll,
    /// Плавная прокрутка окна к абсолютной позиции
    ScrollTo { top: f64 },
    /// Запланировать закрытие пункта мега-меню
    ScheduleMenuRelease {
        item: usize,
        generation: u64,
        delay_ms: u32,
    },
    /// Отменить запланированное закрытие пункта мега-меню
    CancelMenuRelease { item: usize },
}

impl DomEffect {
    pub fn add_class(hook: Hook, class: &'static str) -> Self {
        DomEffect::SetClass {
            hook,
            class,
            on: true,
        }
    }

    pub fn remove_class(hook: Hook, class: &'static str) -> Self {
        DomEffect::SetClass {
            hook,
            class,
            on: false,
        }
    }
}

//! Общие типы и чистая логика сайта: категории, каталог услуг,
//! модели отображения и редьюсеры состояния интерфейса.
//!
//! Крейт не зависит от браузера; всё, что здесь есть, тестируется нативно.

pub mod domain;
pub mod shared;
pub mod usecases;

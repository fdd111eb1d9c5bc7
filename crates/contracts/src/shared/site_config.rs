use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Настройки интерактивной части сайта.
///
/// Все пороги и константы собраны здесь, чтобы страница могла переопределить
/// любое поле через встроенный JSON (`<script id="site-config">`).
/// Отсутствующие поля берутся из [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Смещение прокрутки, после которого шапка получает класс `scrolled`
    pub header_scroll_threshold: f64,
    /// Смещение прокрутки, после которого показывается кнопка "наверх"
    pub back_to_top_threshold: f64,
    /// Задержка закрытия мега-меню после ухода курсора, мс
    pub mega_menu_close_delay_ms: u32,
    /// Дополнительный отступ при плавной прокрутке к якорю
    pub anchor_scroll_margin: f64,
    /// Шаг каскадной задержки анимации карточек, мс
    pub card_stagger_ms: u32,
    pub placeholder_image: String,
    /// Куда ведёт кнопка "Book Now"
    pub booking_url: String,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    /// CSS-класс наблюдаемых элементов
    pub target_class: String,
    /// CSS-класс, который добавляется при первом появлении во вьюпорте
    pub revealed_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            back_to_top_threshold: 500.0,
            mega_menu_close_delay_ms: 200,
            anchor_scroll_margin: 20.0,
            card_stagger_ms: 100,
            placeholder_image: "images/placeholder-service.jpg".to_string(),
            booking_url: "contact.html".to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_class: "animate-on-scroll".to_string(),
            revealed_class: "animated".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteConfig {
    /// Разобрать конфигурацию из JSON. Пустая строка означает настройки по умолчанию.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.header_scroll_threshold, 50.0);
        assert_eq!(cfg.back_to_top_threshold, 500.0);
        assert_eq!(cfg.card_stagger_ms, 100);
        assert_eq!(cfg.reveal.revealed_class, "animated");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"backToTopThreshold": 800, "bookingUrl": "booking.html", "reveal": {"threshold": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(cfg.back_to_top_threshold, 800.0);
        assert_eq!(cfg.booking_url, "booking.html");
        assert_eq!(cfg.reveal.threshold, 0.25);
        assert_eq!(cfg.reveal.target_class, "animate-on-scroll");
        assert_eq!(cfg.header_scroll_threshold, 50.0);
    }

    #[test]
    fn test_blank_input_is_default() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}

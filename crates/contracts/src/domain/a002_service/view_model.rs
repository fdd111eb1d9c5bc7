//! Модели отображения услуги: карточка в списке и содержимое модального окна.
//!
//! Строятся из [`ServiceRecord`] без изменения исходных данных; отсутствующие
//! необязательные поля дают `None`, и соответствующий элемент не рисуется.

use super::aggregate::ServiceRecord;
use crate::shared::site_config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCardModel {
    pub index: usize,
    pub name: String,
    pub image_url: String,
    pub badge: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    /// Задержка анимации появления: `index * card_stagger_ms`
    pub delay_ms: u32,
}

impl ServiceCardModel {
    pub fn build(index: usize, service: &ServiceRecord, config: &SiteConfig) -> Self {
        let step = u64::from(config.card_stagger_ms);
        let delay = (index as u64).saturating_mul(step).min(u64::from(u32::MAX)) as u32;

        Self {
            index,
            name: service.name.clone(),
            image_url: image_or_placeholder(service, config),
            badge: service.badge().map(str::to_string),
            duration: service.duration().map(str::to_string),
            price: service.price_display().map(str::to_string),
            description: service.description().map(str::to_string),
            delay_ms: delay,
        }
    }

    /// Разделитель между длительностью и ценой нужен только если есть оба элемента
    pub fn show_divider(&self) -> bool {
        self.duration.is_some() && self.price.is_some()
    }

    pub fn has_meta(&self) -> bool {
        self.duration.is_some() || self.price.is_some()
    }

    pub fn image_style(&self) -> String {
        background_image_style(&self.image_url)
    }

    pub fn animation_style(&self) -> String {
        format!("animation-delay: {}ms", self.delay_ms)
    }
}

/// Построить модели карточек для всего каталога, сохраняя исходный порядок.
pub fn build_cards(services: &[ServiceRecord], config: &SiteConfig) -> Vec<ServiceCardModel> {
    services
        .iter()
        .enumerate()
        .map(|(i, s)| ServiceCardModel::build(i, s, config))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetailModel {
    pub title: String,
    pub image_url: String,
    pub badge: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    /// Пустой список означает, что блок преимуществ скрыт
    pub benefits: Vec<String>,
}

impl ServiceDetailModel {
    pub fn build(service: &ServiceRecord, config: &SiteConfig) -> Self {
        Self {
            title: service.name.clone(),
            image_url: image_or_placeholder(service, config),
            badge: service.badge().map(str::to_string),
            duration: service.duration().map(str::to_string),
            price: service.price_display().map(str::to_string),
            description: service.description().map(str::to_string),
            full_description: service.full_description().map(str::to_string),
            benefits: service.benefits().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn show_benefits(&self) -> bool {
        !self.benefits.is_empty()
    }

    pub fn image_style(&self) -> String {
        background_image_style(&self.image_url)
    }
}

fn image_or_placeholder(service: &ServiceRecord, config: &SiteConfig) -> String {
    service
        .image()
        .map(str::to_string)
        .unwrap_or_else(|| config.placeholder_image.clone())
}

/// URL из данных подставляется в `url('...')`, поэтому кавычки и переводы строк экранируются.
pub fn background_image_style(url: &str) -> String {
    let escaped = url
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace(['\n', '\r'], "");
    format!("background-image: url('{}')", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ServiceRecord {
        ServiceRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cards_keep_order_and_stagger() {
        let cfg = SiteConfig::default();
        let services: Vec<_> = ["A", "B", "C", "D"].iter().map(|n| record(n)).collect();
        let cards = build_cards(&services, &cfg);

        assert_eq!(cards.len(), 4);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.name, services[i].name);
            assert_eq!(card.delay_ms, i as u32 * cfg.card_stagger_ms);
        }
        assert_eq!(cards[2].animation_style(), "animation-delay: 200ms");
    }

    #[test]
    fn test_no_price_means_no_price_item_and_no_divider() {
        let mut s = record("Lash Lift");
        s.duration = Some("45 min".into());
        let card = ServiceCardModel::build(0, &s, &SiteConfig::default());

        assert_eq!(card.duration.as_deref(), Some("45 min"));
        assert_eq!(card.price, None);
        assert!(!card.show_divider());
        assert!(card.has_meta());
    }

    #[test]
    fn test_price_only_has_no_divider() {
        let mut s = record("Brow Wax");
        s.price = Some("$20".into());
        let card = ServiceCardModel::build(0, &s, &SiteConfig::default());
        assert!(!card.show_divider());
        assert_eq!(card.price.as_deref(), Some("$20"));
    }

    #[test]
    fn test_price_label_wins_and_enables_divider() {
        let mut s = record("Bridal Package");
        s.duration = Some("3 hours".into());
        s.price = Some("$300".into());
        s.price_label = Some("From $300".into());
        let card = ServiceCardModel::build(0, &s, &SiteConfig::default());
        assert_eq!(card.price.as_deref(), Some("From $300"));
        assert!(card.show_divider());
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let cfg = SiteConfig::default();
        let card = ServiceCardModel::build(0, &record("Pedicure"), &cfg);
        assert_eq!(card.image_url, cfg.placeholder_image);
        assert!(card.badge.is_none());
        assert!(card.description.is_none());
        assert!(!card.has_meta());
    }

    #[test]
    fn test_image_style_escapes_quotes() {
        let mut s = record("Odd");
        s.image = Some("images/it's.jpg".into());
        let card = ServiceCardModel::build(0, &s, &SiteConfig::default());
        assert_eq!(card.image_style(), "background-image: url('images/it\\'s.jpg')");
    }

    #[test]
    fn test_detail_model_hides_empty_blocks() {
        let detail = ServiceDetailModel::build(&record("Express Facial"), &SiteConfig::default());
        assert!(detail.full_description.is_none());
        assert!(!detail.show_benefits());
    }

    #[test]
    fn test_facials_scenario_card() {
        let doc: crate::domain::a002_service::CatalogDocument = serde_json::from_str(
            r#"{"services":[{"name":"Deep Cleanse Facial","duration":"60 min","price":"$89"}]}"#,
        )
        .unwrap();
        let services = doc.into_services();
        let cards = build_cards(&services, &SiteConfig::default());

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Deep Cleanse Facial");
        assert_eq!(cards[0].duration.as_deref(), Some("60 min"));
        assert!(cards[0].show_divider());
        assert_eq!(cards[0].price.as_deref(), Some("$89"));
    }
}

use serde::{Deserialize, Serialize};

/// Категория услуг салона. Каждой категории соответствует своя страница
/// и свой JSON-каталог.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Facials,
    Massage,
    BodyTreatments,
    Nails,
    Hair,
    Waxing,
    Laser,
    LashesBrows,
    Makeup,
    Packages,
}

/// Статическое описание категории: заголовки для страницы и путь к каталогу.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub key: &'static str,
    pub data_source: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

impl ServiceCategory {
    /// Получить ключ категории (значение атрибута `data-category`)
    pub fn key(&self) -> &'static str {
        self.descriptor().key
    }

    /// Путь к JSON-каталогу категории
    pub fn data_source(&self) -> &'static str {
        self.descriptor().data_source
    }

    pub fn descriptor(&self) -> CategoryDescriptor {
        match self {
            ServiceCategory::Facials => CategoryDescriptor {
                key: "facials",
                data_source: "data/facials.json",
                title: "Facial Treatments",
                subtitle: "Radiant skin, tailored to you",
                description: "From deep cleansing to anti-aging rituals, our facials are customised to your skin type and goals.",
                badge: "Skin Care",
            },
            ServiceCategory::Massage => CategoryDescriptor {
                key: "massage",
                data_source: "data/massage.json",
                title: "Massage Therapy",
                subtitle: "Release tension, restore balance",
                description: "Swedish, deep tissue and hot stone massages delivered by experienced therapists.",
                badge: "Relaxation",
            },
            ServiceCategory::BodyTreatments => CategoryDescriptor {
                key: "body-treatments",
                data_source: "data/body-treatments.json",
                title: "Body Treatments",
                subtitle: "Polish, detox and renew",
                description: "Scrubs, wraps and contouring treatments that leave skin smooth and nourished.",
                badge: "Body Care",
            },
            ServiceCategory::Nails => CategoryDescriptor {
                key: "nails",
                data_source: "data/nails.json",
                title: "Nail Services",
                subtitle: "Manicures and pedicures with a finishing touch",
                description: "Classic, gel and nail art services in a relaxed, hygienic setting.",
                badge: "Nail Care",
            },
            ServiceCategory::Hair => CategoryDescriptor {
                key: "hair",
                data_source: "data/hair.json",
                title: "Hair Styling",
                subtitle: "Cuts, colour and care",
                description: "Precision cuts, colour services and restorative treatments for every hair type.",
                badge: "Hair Care",
            },
            ServiceCategory::Waxing => CategoryDescriptor {
                key: "waxing",
                data_source: "data/waxing.json",
                title: "Waxing Services",
                subtitle: "Smooth results, gentle technique",
                description: "Face and body waxing using low-temperature wax suited to sensitive skin.",
                badge: "Hair Removal",
            },
            ServiceCategory::Laser => CategoryDescriptor {
                key: "laser",
                data_source: "data/laser.json",
                title: "Laser Treatments",
                subtitle: "Advanced technology, lasting results",
                description: "Laser hair removal and skin rejuvenation performed by certified technicians.",
                badge: "Advanced",
            },
            ServiceCategory::LashesBrows => CategoryDescriptor {
                key: "lashes-brows",
                data_source: "data/lashes-brows.json",
                title: "Lashes & Brows",
                subtitle: "Frame your features",
                description: "Lash extensions, lifts, tints and brow shaping for a defined, natural look.",
                badge: "Beauty",
            },
            ServiceCategory::Makeup => CategoryDescriptor {
                key: "makeup",
                data_source: "data/makeup.json",
                title: "Makeup Artistry",
                subtitle: "Looks for every occasion",
                description: "Day, evening and special-event makeup applied by professional artists.",
                badge: "Makeup",
            },
            ServiceCategory::Packages => CategoryDescriptor {
                key: "packages",
                data_source: "data/packages.json",
                title: "Spa Packages",
                subtitle: "Curated experiences, better value",
                description: "Combined treatments designed for a complete day of pampering, alone or together.",
                badge: "Best Value",
            },
        }
    }

    /// Получить все категории
    pub fn all() -> [ServiceCategory; 10] {
        [
            ServiceCategory::Facials,
            ServiceCategory::Massage,
            ServiceCategory::BodyTreatments,
            ServiceCategory::Nails,
            ServiceCategory::Hair,
            ServiceCategory::Waxing,
            ServiceCategory::Laser,
            ServiceCategory::LashesBrows,
            ServiceCategory::Makeup,
            ServiceCategory::Packages,
        ]
    }

    /// Парсинг из ключа страницы. Регистр и пробелы по краям игнорируются.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::all().into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_complete_descriptor() {
        for category in ServiceCategory::all() {
            let d = category.descriptor();
            assert!(!d.title.is_empty(), "{category} title");
            assert!(!d.subtitle.is_empty(), "{category} subtitle");
            assert!(!d.description.is_empty(), "{category} description");
            assert!(!d.badge.is_empty(), "{category} badge");
            assert_eq!(d.data_source, format!("data/{}.json", d.key));
        }
    }

    #[test]
    fn test_from_key_resolves_all_keys() {
        for category in ServiceCategory::all() {
            assert_eq!(ServiceCategory::from_key(category.key()), Some(category));
        }
        let keys: HashSet<_> = ServiceCategory::all().iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_from_key_normalizes_and_rejects_unknown() {
        assert_eq!(ServiceCategory::from_key(" Laser "), Some(ServiceCategory::Laser));
        assert_eq!(ServiceCategory::from_key("tattoo"), None);
        assert_eq!(ServiceCategory::from_key(""), None);
    }

    #[test]
    fn test_serde_uses_page_keys() {
        let json = serde_json::to_string(&ServiceCategory::LashesBrows).unwrap();
        assert_eq!(json, "\"lashes-brows\"");
        let parsed: ServiceCategory = serde_json::from_str("\"body-treatments\"").unwrap();
        assert_eq!(parsed, ServiceCategory::BodyTreatments);
    }
}

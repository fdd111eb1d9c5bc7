use serde::{Deserialize, Serialize};

/// Услуга из JSON-каталога категории.
///
/// Идентификатора нет: ключом служит позиция в массиве `services`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    /// Текст цены, заменяющий `price` (например, "From $120")
    #[serde(default)]
    pub price_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
}

/// Документ каталога: `{ "services": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub services: Option<Vec<ServiceRecord>>,
}

/// Пустая строка в данных считается отсутствующим значением.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl ServiceRecord {
    pub fn image(&self) -> Option<&str> {
        present(&self.image)
    }

    pub fn badge(&self) -> Option<&str> {
        present(&self.badge)
    }

    pub fn duration(&self) -> Option<&str> {
        present(&self.duration)
    }

    /// Отображаемая цена: `priceLabel` имеет приоритет над `price`
    pub fn price_display(&self) -> Option<&str> {
        present(&self.price_label).or_else(|| present(&self.price))
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn full_description(&self) -> Option<&str> {
        present(&self.full_description)
    }

    /// Непустые пункты списка преимуществ, в исходном порядке
    pub fn benefits(&self) -> Vec<&str> {
        self.benefits
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|b| !b.trim().is_empty())
            .collect()
    }
}

impl CatalogDocument {
    pub fn into_services(self) -> Vec<ServiceRecord> {
        self.services.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let doc: CatalogDocument = serde_json::from_str(
            r#"{"services":[{
                "name": "Hydra Glow",
                "image": "images/hydra.jpg",
                "badge": "Popular",
                "duration": "75 min",
                "price": "$120",
                "priceLabel": "From $120",
                "description": "Short",
                "fullDescription": "Long",
                "benefits": ["Hydration", "Glow"]
            }]}"#,
        )
        .unwrap();
        let services = doc.into_services();
        assert_eq!(services.len(), 1);
        let s = &services[0];
        assert_eq!(s.name, "Hydra Glow");
        assert_eq!(s.price_display(), Some("From $120"));
        assert_eq!(s.full_description(), Some("Long"));
        assert_eq!(s.benefits(), vec!["Hydration", "Glow"]);
    }

    #[test]
    fn test_missing_services_is_empty() {
        let doc: CatalogDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.into_services().is_empty());
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let s = ServiceRecord {
            name: "Brow Tint".into(),
            price: Some("".into()),
            price_label: Some("  ".into()),
            benefits: Some(vec!["".into()]),
            ..Default::default()
        };
        assert_eq!(s.price_display(), None);
        assert!(s.benefits().is_empty());
    }

    #[test]
    fn test_price_falls_back_when_label_missing() {
        let s = ServiceRecord {
            name: "Gel Manicure".into(),
            price: Some("$45".into()),
            ..Default::default()
        };
        assert_eq!(s.price_display(), Some("$45"));
    }

    #[test]
    fn test_name_is_required() {
        let parsed: Result<CatalogDocument, _> =
            serde_json::from_str(r#"{"services":[{"price":"$10"}]}"#);
        assert!(parsed.is_err());
    }
}

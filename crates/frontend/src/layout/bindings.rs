use crate::shared::dom::{by_id, query_all};
use contracts::domain::a001_service_category::ServiceCategory;
use contracts::shared::dom_effect::Hook;
use web_sys::{Document, HtmlAnchorElement, HtmlElement};

const CATEGORY_ATTR: &str = "data-category";

/// DOM hook points of the static page, looked up once at startup.
///
/// Every field is optional: a page without a mobile menu simply gets no
/// mobile menu behavior.
pub struct ViewBindings {
    pub header: Option<HtmlElement>,
    pub mega_menu_items: Vec<HtmlElement>,
    pub mobile_menu_toggle: Option<HtmlElement>,
    pub mobile_menu: Option<HtmlElement>,
    pub mobile_menu_overlay: Option<HtmlElement>,
    pub mobile_menu_close: Option<HtmlElement>,
    pub mobile_menu_links: Vec<HtmlAnchorElement>,
    pub back_to_top: Option<HtmlElement>,
    pub anchor_links: Vec<HtmlAnchorElement>,
    /// Mount point of the service catalog and its detail modal
    pub services_app: Option<HtmlElement>,
}

impl ViewBindings {
    pub fn bind(document: &Document) -> Self {
        Self {
            header: by_id(document, "header"),
            mega_menu_items: query_all(document, ".has-mega-menu"),
            mobile_menu_toggle: by_id(document, "mobile-menu-toggle"),
            mobile_menu: by_id(document, "mobile-menu"),
            mobile_menu_overlay: by_id(document, "mobile-menu-overlay"),
            mobile_menu_close: by_id(document, "mobile-menu-close"),
            mobile_menu_links: query_all(document, "#mobile-menu a"),
            back_to_top: by_id(document, "back-to-top"),
            anchor_links: query_all(document, "a[href^=\"#\"]"),
            services_app: by_id(document, "services-app"),
        }
    }

    pub fn hook(&self, hook: Hook) -> Option<&HtmlElement> {
        match hook {
            Hook::Header => self.header.as_ref(),
            Hook::MegaMenuItem(i) => self.mega_menu_items.get(i),
            Hook::MobileMenu => self.mobile_menu.as_ref(),
            Hook::MobileMenuOverlay => self.mobile_menu_overlay.as_ref(),
            Hook::BackToTop => self.back_to_top.as_ref(),
        }
    }

    pub fn header_height(&self) -> f64 {
        self.header
            .as_ref()
            .map(|h| f64::from(h.offset_height()))
            .unwrap_or(0.0)
    }
}

/// Category of the current page from `<html data-category>`, falling back to `<body>`.
pub fn page_category(document: &Document) -> Option<ServiceCategory> {
    let from_root = document
        .document_element()
        .and_then(|root| root.get_attribute(CATEGORY_ATTR));
    let raw = from_root.or_else(|| document.body().and_then(|b| b.get_attribute(CATEGORY_ATTR)))?;

    let category = ServiceCategory::from_key(&raw);
    if category.is_none() {
        log::warn!("unknown page category: {:?}", raw);
    }
    category
}

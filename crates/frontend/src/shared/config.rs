use crate::shared::dom::by_id;
use contracts::shared::site_config::SiteConfig;
use web_sys::{Document, Element};

const CONFIG_SCRIPT_ID: &str = "site-config";

/// Read `<script type="application/json" id="site-config">` if the page has one.
///
/// Invalid JSON is reported and replaced by the defaults so the rest of the
/// page keeps working.
pub fn load_site_config(document: &Document) -> SiteConfig {
    let Some(script) = by_id::<Element>(document, CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("site config loaded from #{}", CONFIG_SCRIPT_ID);
            config
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            SiteConfig::default()
        }
    }
}

use crate::domain::a002_service::ui::ServiceCatalogPage;
use crate::layout::{chrome, page_category, reveal, ViewBindings};
use crate::shared::{analytics, config, dom};
use contracts::domain::a001_service_category::ServiceCategory;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App(category: ServiceCategory, config: SiteConfig) -> impl IntoView {
    // Provide the site config to the catalog, cards and modal via context.
    provide_context(config);

    view! {
        <ServiceCatalogPage category=category />
    }
}

/// Bind the static page. Each subsystem is wired independently; a missing
/// hook point only disables its own feature.
pub fn boot() {
    let Some(document) = dom::document() else {
        log::warn!("no document available, nothing to bind");
        return;
    };

    let config = config::load_site_config(&document);
    let bindings = Rc::new(ViewBindings::bind(&document));

    chrome::install(Rc::clone(&bindings), config.clone());
    reveal::install(&document, &config.reveal);
    analytics::install(&document);

    let Some(mount) = bindings.services_app.clone() else {
        log::debug!("no #services-app on this page, catalog skipped");
        return;
    };
    let Some(category) = page_category(&document) else {
        log::warn!("#services-app present but the page has no known data-category");
        return;
    };

    log::info!("mounting {} catalog", category);
    leptos::mount::mount_to(mount, move || view! { <App category=category config=config /> })
        .forget();
}

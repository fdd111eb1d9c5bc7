use super::card::ServiceCard;
use super::details_modal::ServiceDetailsModal;
use crate::domain::a002_service::api::fetch_catalog;
use crate::layout::dom_effects;
use contracts::domain::a001_service_category::ServiceCategory;
use contracts::domain::a002_service::{ServiceCardModel, ServiceRecord};
use contracts::shared::modal::{DismissTrigger, ModalEvent, ModalState};
use contracts::shared::site_config::SiteConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_load_catalog::{LoadCatalog, LoadState};
use leptos::prelude::*;

/// Category page body: hero, loading/list/empty regions and the shared detail modal.
#[component]
#[allow(non_snake_case)]
pub fn ServiceCatalogPage(category: ServiceCategory) -> impl IntoView {
    let config = StoredValue::new(use_context::<SiteConfig>().unwrap_or_default());
    let descriptor = category.descriptor();
    let state = RwSignal::new(LoadState::Loading);
    let modal = RwSignal::new(ModalState::Closed);

    let path = category.data_source();
    wasm_bindgen_futures::spawn_local(async move {
        log::debug!("{}: fetching {}", LoadCatalog::full_name(), path);
        let outcome = fetch_catalog(path).await;
        match &outcome {
            Ok(doc) => log::debug!(
                "{}: {} services for {}",
                LoadCatalog::full_name(),
                doc.services.as_ref().map_or(0, Vec::len),
                category
            ),
            Err(e) => log::error!("{}: {} ({})", LoadCatalog::full_name(), e, path),
        }
        state.set(LoadState::from_outcome(outcome));
    });

    let dispatch_modal = move |event: ModalEvent| {
        let mut effects = Vec::new();
        modal.update(|m| effects = m.apply(event));
        dom_effects::apply_all(&effects, None);
    };

    let open_details = Callback::new(move |service: ServiceRecord| {
        dispatch_modal(ModalEvent::Open(service));
    });
    let dismiss = Callback::new(move |trigger: DismissTrigger| {
        dispatch_modal(ModalEvent::Dismiss(trigger));
    });

    let visibility = move || state.with(|s| s.visibility());
    let booking_url = config.with_value(|c| c.booking_url.clone());

    // the whole list is rebuilt whenever the load state changes
    let cards = move || {
        state.with(|s| {
            s.services()
                .iter()
                .enumerate()
                .map(|(index, service)| {
                    let card = config.with_value(|c| ServiceCardModel::build(index, service, c));
                    view! {
                        <ServiceCard
                            card=card
                            service=service.clone()
                            on_details=open_details
                            booking_url=booking_url.clone()
                        />
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="category-hero">
            <span class="category-badge">{descriptor.badge}</span>
            <h1 class="category-title">{descriptor.title}</h1>
            <p class="category-subtitle">{descriptor.subtitle}</p>
            <p class="category-description">{descriptor.description}</p>
        </section>

        <div
            class="services-loading"
            style:display=move || if visibility().loading { "flex" } else { "none" }
        >
            <div class="spinner"></div>
            <p>"Loading services..."</p>
        </div>

        <div
            class="services-grid"
            style:display=move || if visibility().list { "grid" } else { "none" }
        >
            {cards}
        </div>

        <div
            class="services-empty"
            style:display=move || if visibility().empty { "block" } else { "none" }
        >
            <p>{move || state.with(|s| s.message().unwrap_or_default())}</p>
        </div>

        <ServiceDetailsModal state=modal on_dismiss=dismiss />
    }
}

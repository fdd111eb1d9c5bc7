use crate::shared::analytics;
use crate::shared::icons::icon;
use contracts::domain::a002_service::{ServiceCardModel, ServiceRecord};
use leptos::prelude::*;

/// One service card. `service` is captured here so "View Details" opens
/// exactly the record this card was rendered from.
#[component]
pub fn ServiceCard(
    card: ServiceCardModel,
    service: ServiceRecord,
    /// Opens the shared detail modal
    on_details: Callback<ServiceRecord>,
    #[prop(into)] booking_url: String,
) -> impl IntoView {
    let card_style = card.animation_style();
    let image_style = card.image_style();
    let show_divider = card.show_divider();
    let has_meta = card.has_meta();
    let track_event = format!("book_now:{}", card.name);

    let ServiceCardModel {
        name,
        badge,
        duration,
        price,
        description,
        ..
    } = card;

    view! {
        <article class="service-card" style=card_style>
            <div class="service-card-image" style=image_style>
                {badge.map(|b| view! { <span class="service-badge">{b}</span> })}
            </div>
            <div class="service-card-content">
                <h3 class="service-card-title">{name}</h3>
                {has_meta.then(|| view! {
                    <div class="service-meta">
                        {duration.map(|d| view! {
                            <span class="service-meta-item service-duration">{icon("clock")}{d}</span>
                        })}
                        {show_divider.then(|| view! { <span class="service-meta-divider"></span> })}
                        {price.map(|p| view! {
                            <span class="service-meta-item service-price">{icon("tag")}{p}</span>
                        })}
                    </div>
                })}
                {description.map(|d| view! { <p class="service-description">{d}</p> })}
            </div>
            <div class="service-card-footer">
                <a
                    href=booking_url
                    class="btn btn-primary"
                    on:click=move |_| analytics::track(&track_event)
                >
                    "Book Now"
                </a>
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| on_details.run(service.clone())
                >
                    "View Details"
                </button>
            </div>
        </article>
    }
}

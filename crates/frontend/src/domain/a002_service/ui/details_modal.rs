use crate::shared::icons::icon;
use contracts::domain::a002_service::ServiceDetailModel;
use contracts::shared::modal::{DismissTrigger, ModalState};
use contracts::shared::site_config::SiteConfig;
use leptos::ev;
use leptos::prelude::*;

/// Shared service detail modal.
///
/// The element stays mounted; visibility follows `state`. Close button,
/// overlay click and Escape all report through `on_dismiss`.
#[component]
pub fn ServiceDetailsModal(
    state: RwSignal<ModalState>,
    on_dismiss: Callback<DismissTrigger>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<SiteConfig>().unwrap_or_default());
    let is_open = move || state.with(|s| s.is_open());

    // Handle Escape key
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && state.with_untracked(|s| s.is_open()) {
            on_dismiss.run(DismissTrigger::Escape);
        }
    });
    on_cleanup(move || escape.remove());

    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection dragged out of the content does not dismiss.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_dismiss.run(DismissTrigger::Overlay);
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let booking_url = config.with_value(|c| c.booking_url.clone());

    // rebuilt from scratch for every record, so nothing from a previous
    // selection (e.g. benefit items) survives
    let content = move || {
        let detail = state.with(|s| {
            s.record()
                .map(|r| config.with_value(|c| ServiceDetailModel::build(r, c)))
        })?;
        let image_style = detail.image_style();
        let show_benefits = detail.show_benefits();
        let has_meta = detail.duration.is_some() || detail.price.is_some();
        let ServiceDetailModel {
            title,
            badge,
            duration,
            price,
            description,
            full_description,
            benefits,
            ..
        } = detail;
        let booking_url = booking_url.clone();

        Some(view! {
            <div class="modal-image" style=image_style>
                {badge.map(|b| view! { <span class="modal-badge">{b}</span> })}
            </div>
            <div class="modal-body">
                <h2 class="modal-title">{title}</h2>
                {has_meta.then(|| view! {
                    <div class="modal-meta">
                        {duration.map(|d| view! {
                            <span class="modal-duration">{icon("clock")}{d}</span>
                        })}
                        {price.map(|p| view! {
                            <span class="modal-price">{icon("tag")}{p}</span>
                        })}
                    </div>
                })}
                {description.map(|d| view! { <p class="modal-description">{d}</p> })}
                {full_description.map(|text| view! {
                    <div class="modal-full-description">
                        <h3>"About This Treatment"</h3>
                        <p>{text}</p>
                    </div>
                })}
                {show_benefits.then(|| view! {
                    <div class="modal-benefits">
                        <h3>"Benefits"</h3>
                        <ul class="modal-benefits-list">
                            {benefits
                                .into_iter()
                                .map(|b| view! { <li>{icon("check")}<span>{b}</span></li> })
                                .collect_view()}
                        </ul>
                    </div>
                })}
                <a href=booking_url class="btn btn-primary modal-book">"Book This Treatment"</a>
            </div>
        })
    };

    view! {
        <div
            class="modal"
            class:active=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open()).to_string()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal-content" on:click=stop_propagation>
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| on_dismiss.run(DismissTrigger::CloseButton)
                >
                    {icon("x")}
                </button>
                {content}
            </div>
        </div>
    }
}

use crate::shared::dom::query_all;
use contracts::shared::site_config::RevealConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-shot reveal animations.
///
/// Each target gets the revealed class on its first intersection and is then
/// unobserved, so the animation never replays.
pub fn install(document: &Document, config: &RevealConfig) {
    let targets = query_all::<Element>(document, &format!(".{}", config.target_class));
    if targets.is_empty() {
        return;
    }

    let revealed_class = config.revealed_class.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(&revealed_class);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            callback.forget();
            log::debug!("reveal: observing {} elements", targets.len());
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            for target in &targets {
                let _ = target.class_list().add_1(&config.revealed_class);
            }
        }
    }
}

//! Click tracking hooks.
//!
//! There is no analytics backend: events only go to the console log.

use crate::shared::dom::{listen, query_all};
use web_sys::{Document, Element};

const TRACK_ATTR: &str = "data-track";

pub fn track(event: &str) {
    log::info!("track: {}", event);
}

/// Track clicks on every `[data-track]` element of the static page.
pub fn install(document: &Document) {
    let targets = query_all::<Element>(document, &format!("[{}]", TRACK_ATTR));
    for el in &targets {
        let name = el.get_attribute(TRACK_ATTR).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        listen(el, "click", move |_| track(&name));
    }
    if !targets.is_empty() {
        log::debug!("analytics: {} tracked elements", targets.len());
    }
}

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Window};

use super::{bootstrap, dom};
use crate::config::Selectors;
use crate::scroll::ScrollState;

/// Same-page anchors scroll smoothly to just below the navbar; any other
/// href navigates as usual.
pub fn bind_smooth_links(
    window: &Window,
    document: &Document,
    selectors: &Selectors,
    scroll: &ScrollState,
) -> Vec<EventListener> {
    dom::query_all(document, &selectors.smooth_links)
        .into_iter()
        .map(|link| {
            let window = window.clone();
            let document = document.clone();
            let scroll = scroll.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if !href.starts_with('#') {
                        return;
                    }
                    event.prevent_default();
                    if let Some(target) = dom::query(&document, &href) {
                        let top = scroll.anchor_target(dom::offset_top(&target));
                        dom::smooth_scroll_to(&window, top);
                    }
                },
            )
        })
        .collect()
}

/// Hides the expanded mobile menu, if it is expanded.
pub fn close_mobile_menu(document: &Document, selectors: &Selectors) {
    let Some(collapse) = dom::query(document, &selectors.navbar_collapse) else {
        return;
    };
    if collapse.class_list().contains("show") {
        bootstrap::hide_collapse(&collapse);
    }
}

pub fn bind_menu_close(document: &Document, selectors: &Selectors) -> Vec<EventListener> {
    let selectors = Rc::new(selectors.clone());
    let mut listeners: Vec<EventListener> = dom::query_all(document, &selectors.nav_links)
        .into_iter()
        .map(|link| {
            let document = document.clone();
            let selectors = selectors.clone();
            EventListener::new(&link, "click", move |_| close_mobile_menu(&document, &selectors))
        })
        .collect();

    let escape_document = document.clone();
    listeners.push(EventListener::new(document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| key.key() == "Escape")
            .unwrap_or(false);
        if is_escape {
            close_mobile_menu(&escape_document, &selectors);
        }
    }));
    listeners
}

pub fn init_tooltips(document: &Document, selectors: &Selectors) {
    let triggers: Vec<Element> = dom::query_all(document, &selectors.tooltips);
    for trigger in &triggers {
        bootstrap::init_tooltip(trigger);
    }
    if !triggers.is_empty() {
        log::debug!("initialised {} tooltips", triggers.len());
    }
}

//! Interactivity for the Amora Events static site, compiled to WebAssembly.
//!
//! The modules at the crate root hold the page behaviour as plain Rust that
//! runs and tests anywhere; `web` binds it to the live DOM.

pub mod config;
pub mod contact;
pub mod counter;
pub mod error;
pub mod notification;
pub mod pipeline;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use gloo_events::EventListener;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use crate::notification::Severity;
    use crate::web::Site;

    thread_local! {
        static SITE: RefCell<Option<Site>> = RefCell::new(None);
    }

    fn mount_now() {
        let mounted = Site::mount_current();
        SITE.with(|site| *site.borrow_mut() = mounted);
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", |_| mount_now()).forget();
        } else {
            mount_now();
        }
    }

    /// Drops every listener, observer and mounted component.
    #[wasm_bindgen]
    pub fn teardown() {
        SITE.with(|site| site.borrow_mut().take());
    }

    /// Page-script entry point for an ad-hoc notice, e.g.
    /// `show_notification("Saved", "success")`.
    #[wasm_bindgen]
    pub fn show_notification(message: &str, severity: Option<String>) {
        let severity = severity.as_deref().map(Severity::from).unwrap_or_default();
        SITE.with(|site| {
            if let Some(site) = site.borrow().as_ref() {
                site.notify(message, severity);
            }
        });
    }

    /// Ramps `element`'s text from 0 to `target`.
    #[wasm_bindgen]
    pub fn animate_counter(element: Element, target: f64, duration_ms: Option<u32>) {
        SITE.with(|site| {
            if let Some(site) = site.borrow().as_ref() {
                site.animate_counter(element, target, duration_ms);
            }
        });
    }
}

//! Small DOM helpers shared by the page bindings.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollToOptions, Window,
};

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            log::debug!("invalid selector {selector:?}");
            None
        }
    }
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub(crate) fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_top()))
        .unwrap_or(0.0)
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_else(|_| {
        window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| f64::from(root.scroll_top()))
            .unwrap_or(0.0)
    })
}

pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[allow(deprecated)]
pub(crate) fn smooth_scroll_to(window: &Window, top: f64) {
    let mut options = ScrollToOptions::new();
    options.top(top).behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Current value of an `<input>` or `<textarea>`.
pub(crate) fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }
}

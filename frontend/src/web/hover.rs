use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element};

use super::dom;

pub const BUTTON_LIFT_PX: u32 = 3;
pub const CARD_LIFT_PX: u32 = 8;

/// Raises every matching element by `lift_px` while hovered.
pub fn bind_lift(document: &Document, selector: &str, lift_px: u32) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for element in dom::query_all(document, selector) {
        let element: Rc<Element> = Rc::new(element);
        let raised = format!("translateY(-{lift_px}px)");
        listeners.push(EventListener::new(&element, "mouseenter", {
            let element = element.clone();
            move |_| dom::set_style(&element, "transform", &raised)
        }));
        listeners.push(EventListener::new(&element, "mouseleave", {
            let element = element.clone();
            move |_| dom::set_style(&element, "transform", "translateY(0)")
        }));
    }
    listeners
}

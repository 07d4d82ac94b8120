//! Bindings to the handful of Bootstrap widgets the page pokes at. Bootstrap
//! itself is loaded by the page; when it is missing the calls fail softly.

use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Object, Reflect};
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Collapse;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(method)]
    fn hide(this: &Collapse);

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

pub(crate) fn hide_collapse(element: &Element) {
    let options = Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("toggle"), &JsValue::FALSE);
    match Collapse::new(element, &options) {
        Ok(collapse) => collapse.hide(),
        Err(err) => log::debug!("bootstrap collapse unavailable: {:?}", err),
    }
}

pub(crate) fn init_tooltip(element: &Element) {
    if let Err(err) = Tooltip::new(element) {
        log::debug!("bootstrap tooltip unavailable: {:?}", err);
    }
}

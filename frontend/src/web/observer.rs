use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Function};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::reveal::{OneShot, RevealAction, RevealKind};

type Targets = Rc<RefCell<Vec<(Element, OneShot)>>>;

/// An `IntersectionObserver` whose targets fire once and are then unobserved.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    targets: Targets,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn new(
        init: Option<&IntersectionObserverInit>,
        on_trigger: impl Fn(&Element, Vec<RevealAction>) + 'static,
    ) -> Result<Self, JsValue> {
        let targets: Targets = Rc::new(RefCell::new(Vec::new()));
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
            let targets = targets.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let triggered = {
                        let mut targets = targets.borrow_mut();
                        let Some(pos) = targets.iter().position(|(el, _)| *el == target) else {
                            continue;
                        };
                        let shot = &mut targets[pos].1;
                        let fired = shot.on_intersection(entry.is_intersecting());
                        if shot.state().is_terminal() {
                            targets.swap_remove(pos);
                        }
                        fired
                    };
                    if let Some(actions) = triggered {
                        observer.unobserve(&target);
                        on_trigger(&target, actions);
                    }
                }
            }
        });
        let function: &Function = callback.as_ref().unchecked_ref();
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(function, init)?,
            None => IntersectionObserver::new(function)?,
        };
        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }

    pub fn watch(&self, element: Element, kind: RevealKind) {
        let mut shot = OneShot::new(kind);
        shot.observe();
        self.observer.observe(&element);
        self.targets.borrow_mut().push((element, shot));
    }

    /// Targets that have not fired yet.
    pub fn watching(&self) -> usize {
        self.targets.borrow().len()
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[allow(deprecated)]
pub(crate) fn observer_init(threshold: f64, root_margin: &str) -> IntersectionObserverInit {
    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(threshold)).root_margin(root_margin);
    init
}

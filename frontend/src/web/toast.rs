use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::{Document, Element};

use super::dom;
use crate::notification::{Notice, NoticeId, ToastHost, EXIT_ANIMATION};

/// Draws each notice as a fixed-position div appended to `<body>`.
pub struct DomToastHost {
    document: Document,
    elements: RefCell<HashMap<NoticeId, Element>>,
}

impl DomToastHost {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            elements: RefCell::new(HashMap::new()),
        }
    }
}

impl ToastHost for DomToastHost {
    fn mount(&self, id: NoticeId, notice: &Notice) {
        let Some(body) = self.document.body() else {
            log::debug!("no <body>, dropping notice {:?}", notice.text);
            return;
        };
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(err) => {
                log::warn!("could not create notice element: {:?}", err);
                return;
            }
        };
        element.set_class_name(&notice.severity.class_name());
        element.set_text_content(Some(&notice.text));
        let _ = element.set_attribute("style", &notice.inline_style());
        if body.append_child(&element).is_ok() {
            self.elements.borrow_mut().insert(id, element);
        }
    }

    fn begin_exit(&self, id: NoticeId) {
        if let Some(element) = self.elements.borrow().get(&id) {
            dom::set_style(element, "animation", EXIT_ANIMATION);
        }
    }

    fn unmount(&self, id: NoticeId) {
        if let Some(element) = self.elements.borrow_mut().remove(&id) {
            element.remove();
        }
    }
}

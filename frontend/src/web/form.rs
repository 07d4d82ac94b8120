use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement};

use super::dom;
use crate::config::{FormSettings, Selectors};
use crate::contact::{ContactFormController, FormSurface, SubmitOutcome};
use crate::validation::{flags_invalid_on_blur, ContactSubmission};

/// The contact form as found in the page markup.
pub struct DomContactForm {
    form: HtmlFormElement,
    name: Option<Element>,
    email: Option<Element>,
    message: Option<Element>,
    submit: Option<HtmlButtonElement>,
}

impl DomContactForm {
    pub fn find(document: &Document, selectors: &Selectors) -> Option<Self> {
        let form = document
            .get_element_by_id(&selectors.contact_form_id)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let submit = form
            .query_selector(&selectors.submit_button)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Some(Self {
            name: document.get_element_by_id(&selectors.name_field_id),
            email: document.get_element_by_id(&selectors.email_field_id),
            message: document.get_element_by_id(&selectors.message_field_id),
            submit,
            form,
        })
    }

    fn value_of(field: &Option<Element>) -> String {
        field.as_ref().and_then(dom::field_value).unwrap_or_default()
    }
}

impl FormSurface for DomContactForm {
    fn read(&self) -> ContactSubmission {
        ContactSubmission {
            name: Self::value_of(&self.name),
            email: Self::value_of(&self.email),
            message: Self::value_of(&self.message),
        }
    }

    fn submit_label(&self) -> String {
        self.submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_submit_control(&self, enabled: bool, label: &str) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
            button.set_text_content(Some(label));
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

/// Hooks the controller to the form's submit event.
pub fn bind_submit(form: &DomContactForm, controller: ContactFormController) -> EventListener {
    EventListener::new_with_options(
        &form.form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if let SubmitOutcome::Rejected(err) = controller.submit() {
                log::debug!("submission rejected: {}", err);
            }
        },
    )
}

/// Blur flags an empty control as invalid, focus clears the flag.
pub fn bind_field_checks(
    document: &Document,
    selectors: &Selectors,
    settings: &FormSettings,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for control in dom::query_all(document, &selectors.form_controls) {
        let control = Rc::new(control);
        let invalid_class = settings.invalid_class.clone();
        listeners.push(EventListener::new(&control, "blur", {
            let control = control.clone();
            let invalid_class = invalid_class.clone();
            move |_| {
                let value = dom::field_value(&control).unwrap_or_default();
                dom::toggle_class(&control, &invalid_class, flags_invalid_on_blur(&value));
            }
        }));
        listeners.push(EventListener::new(&control, "focus", {
            let control = control.clone();
            move |_| dom::toggle_class(&control, &invalid_class, false)
        }));
    }
    listeners
}

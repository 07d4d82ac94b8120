use std::cell::Cell;
use std::rc::Rc;

use crate::config::FormSettings;
use crate::error::ValidationError;
use crate::notification::NotificationService;
use crate::scheduler::{SharedScheduler, TaskId};
use crate::validation::{validate, ContactSubmission};

/// The parts of the contact form the controller reads and writes.
pub trait FormSurface {
    fn read(&self) -> ContactSubmission;
    fn submit_label(&self) -> String;
    fn set_submit_control(&self, enabled: bool, label: &str);
    fn reset_fields(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; an error notice is showing and nothing else changed.
    Rejected(ValidationError),
    /// The submit control is busy until the task completes.
    Sending(TaskId),
    /// A previous submission has not completed yet.
    Busy,
}

/// Runs the simulated submission: validate, go busy, wait, confirm, reset.
#[derive(Clone)]
pub struct ContactFormController {
    surface: Rc<dyn FormSurface>,
    notices: NotificationService,
    scheduler: SharedScheduler,
    settings: FormSettings,
    sending: Rc<Cell<bool>>,
}

impl ContactFormController {
    pub fn new(
        surface: Rc<dyn FormSurface>,
        notices: NotificationService,
        scheduler: SharedScheduler,
        settings: FormSettings,
    ) -> Self {
        Self {
            surface,
            notices,
            scheduler,
            settings,
            sending: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    pub fn submit(&self) -> SubmitOutcome {
        if self.sending.get() {
            return SubmitOutcome::Busy;
        }
        let submission = self.surface.read();
        if let Err(err) = validate(&submission) {
            log::debug!("contact form rejected: {:?}", err);
            self.notices.error(err.to_string());
            return SubmitOutcome::Rejected(err);
        }

        let original_label = self.surface.submit_label();
        self.surface.set_submit_control(false, &self.settings.busy_label);
        self.sending.set(true);

        let surface = self.surface.clone();
        let notices = self.notices.clone();
        let sending = self.sending.clone();
        let success_message = self.settings.success_message.clone();
        let task = self.scheduler.after(
            self.settings.submit_delay_ms,
            Box::new(move || {
                notices.success(success_message);
                surface.reset_fields();
                surface.set_submit_control(true, &original_label);
                sending.set(false);
            }),
        );
        SubmitOutcome::Sending(task)
    }
}

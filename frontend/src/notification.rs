use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ToastSettings;
use crate::scheduler::SharedScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#D4A5A5",
            Severity::Success => "#A8D5BA",
            Severity::Error => "#E8A8A8",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

impl From<&str> for Severity {
    /// Unknown names fall back to `Info`.
    fn from(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

/// Animation applied when a notice starts leaving.
pub const EXIT_ANIMATION: &str = "slideInLeft 0.3s ease-out reverse";

impl Notice {
    /// Inline style of the notice element.
    pub fn inline_style(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.1); \
             z-index: 9999; animation: slideInRight 0.3s ease-out; \
             font-family: 'Poppins', sans-serif; font-weight: 500; max-width: 400px;",
            self.severity.background()
        )
    }
}

/// Where notices are drawn. The browser host builds a fixed-position div.
pub trait ToastHost {
    fn mount(&self, id: NoticeId, notice: &Notice);
    fn begin_exit(&self, id: NoticeId);
    fn unmount(&self, id: NoticeId);
}

struct Inner {
    host: Rc<dyn ToastHost>,
    scheduler: SharedScheduler,
    settings: ToastSettings,
    next_id: Cell<u64>,
    // oldest first
    live: RefCell<VecDeque<NoticeId>>,
}

impl Inner {
    fn is_live(&self, id: NoticeId) -> bool {
        self.live.borrow().contains(&id)
    }

    fn remove(&self, id: NoticeId) {
        let removed = {
            let mut live = self.live.borrow_mut();
            let before = live.len();
            live.retain(|other| *other != id);
            live.len() != before
        };
        if removed {
            self.host.unmount(id);
        }
    }
}

/// Transient, self-dismissing notices. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct NotificationService {
    inner: Rc<Inner>,
}

impl NotificationService {
    pub fn new(
        host: Rc<dyn ToastHost>,
        scheduler: SharedScheduler,
        settings: ToastSettings,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                scheduler,
                settings,
                next_id: Cell::new(0),
                live: RefCell::new(VecDeque::new()),
            }),
        }
    }

    pub fn visible(&self) -> Vec<NoticeId> {
        self.inner.live.borrow().iter().copied().collect()
    }

    pub fn notify(&self, text: impl Into<String>, severity: Severity) -> NoticeId {
        let inner = &self.inner;
        let id = NoticeId(inner.next_id.get() + 1);
        inner.next_id.set(id.0);

        let max = inner.settings.max_visible;
        if max > 0 {
            loop {
                let oldest = {
                    let live = inner.live.borrow();
                    if live.len() < max {
                        None
                    } else {
                        live.front().copied()
                    }
                };
                match oldest {
                    Some(oldest) => {
                        log::debug!("evicting notice {:?} to stay within {}", oldest, max);
                        inner.remove(oldest);
                    }
                    None => break,
                }
            }
        }

        let notice = Notice {
            text: text.into(),
            severity,
        };
        inner.live.borrow_mut().push_back(id);
        inner.host.mount(id, &notice);

        let exit_ms = inner.settings.exit_ms;
        let weak = Rc::downgrade(inner);
        inner.scheduler.after(
            inner.settings.lifetime_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                if inner.is_live(id) {
                    inner.host.begin_exit(id);
                }
                let weak = Rc::downgrade(&inner);
                inner.scheduler.after(
                    exit_ms,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.remove(id);
                        }
                    }),
                );
            }),
        );
        id
    }

    pub fn info(&self, text: impl Into<String>) -> NoticeId {
        self.notify(text, Severity::Info)
    }

    pub fn success(&self, text: impl Into<String>) -> NoticeId {
        self.notify(text, Severity::Success)
    }

    pub fn error(&self, text: impl Into<String>) -> NoticeId {
        self.notify(text, Severity::Error)
    }
}

//! Browser bindings: DOM adapters for the platform-neutral core.

mod app;
mod bootstrap;
mod dom;
mod form;
mod hover;
mod navigation;
mod observer;
mod scroll_top;
mod timers;
mod toast;
mod viewport;

pub use app::{load_config, Site};
pub use form::{bind_field_checks, bind_submit, DomContactForm};
pub use navigation::bind_smooth_links;
pub use observer::OneShotObserver;
pub use scroll_top::{ScrollToTopButton, ScrollToTopProps, ScrollTopSignal};
pub use timers::TimerScheduler;
pub use toast::DomToastHost;
pub use viewport::ViewportBinding;

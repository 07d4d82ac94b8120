use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element, IntersectionObserverInit, Window};
use yew::AppHandle;

use super::dom;
use super::form::{self, DomContactForm};
use super::hover::{self, BUTTON_LIFT_PX, CARD_LIFT_PX};
use super::navigation;
use super::observer::{observer_init, OneShotObserver};
use super::scroll_top::{ScrollToTopButton, ScrollToTopProps, ScrollTopSignal};
use super::timers::TimerScheduler;
use super::toast::DomToastHost;
use super::viewport::ViewportBinding;
use crate::config::{CounterSettings, RevealSettings, SiteConfig, CONFIG_ELEMENT_ID};
use crate::contact::ContactFormController;
use crate::counter::{parse_target, CounterAnimator};
use crate::notification::{NoticeId, NotificationService, Severity};
use crate::pipeline::ViewportReactionPipeline;
use crate::reveal::{RevealAction, RevealKind};
use crate::scheduler::{SharedScheduler, TaskId};
use crate::scroll::ScrollState;

/// Everything the page enhancement keeps alive. Dropping it removes every
/// listener, disconnects every observer and unmounts the scroll-to-top button.
pub struct Site {
    scheduler: SharedScheduler,
    counter: CounterSettings,
    notices: NotificationService,
    _listeners: Vec<EventListener>,
    _observers: Vec<OneShotObserver>,
    scroll_top: Option<MountedButton>,
}

struct MountedButton {
    app: AppHandle<ScrollToTopButton>,
    host: Element,
}

/// Reads the optional JSON override block, falling back to defaults.
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{}, using defaults", err);
        SiteConfig::default()
    })
}

impl Site {
    pub fn mount_current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let config = load_config(&document);
        Some(Self::mount(window, document, config))
    }

    pub fn mount(window: Window, document: Document, config: SiteConfig) -> Self {
        let scheduler: SharedScheduler = Rc::new(TimerScheduler::new());
        let selectors = &config.selectors;
        let scroll = ScrollState::new(config.scroll.clone());
        let mut listeners = Vec::new();

        listeners.extend(navigation::bind_smooth_links(&window, &document, selectors, &scroll));

        let scroll_top = ScrollTopSignal::new();
        let viewport = Rc::new(ViewportBinding::new(
            window.clone(),
            document.clone(),
            selectors.clone(),
            ViewportReactionPipeline::new(scroll),
            scroll_top.clone(),
        ));
        listeners.push(EventListener::new(&window, "scroll", {
            let viewport = viewport.clone();
            move |_| viewport.on_scroll()
        }));

        let observers = watch_one_shots(&document, &config, &scheduler);

        let notices = NotificationService::new(
            Rc::new(DomToastHost::new(document.clone())),
            scheduler.clone(),
            config.toast.clone(),
        );
        match DomContactForm::find(&document, selectors) {
            Some(contact) => {
                let contact = Rc::new(contact);
                let controller = ContactFormController::new(
                    contact.clone(),
                    notices.clone(),
                    scheduler.clone(),
                    config.form.clone(),
                );
                listeners.push(form::bind_submit(&contact, controller));
            }
            None => log::debug!("no #{} on this page", selectors.contact_form_id),
        }
        listeners.extend(form::bind_field_checks(&document, selectors, &config.form));

        listeners.extend(hover::bind_lift(&document, &selectors.buttons, BUTTON_LIFT_PX));
        listeners.extend(hover::bind_lift(&document, &selectors.cards, CARD_LIFT_PX));
        listeners.extend(navigation::bind_menu_close(&document, selectors));

        viewport.on_load();
        let button = mount_scroll_top(&document, scroll_top);
        navigation::init_tooltips(&document, selectors);

        log::info!("site enhancements loaded");
        Self {
            scheduler,
            counter: config.counter.clone(),
            notices,
            _listeners: listeners,
            _observers: observers,
            scroll_top: button,
        }
    }

    pub fn notify(&self, message: &str, severity: Severity) -> NoticeId {
        self.notices.notify(message, severity)
    }

    /// Starts a counter on `element`. Non-finite targets are refused.
    pub fn animate_counter(
        &self,
        element: Element,
        target: f64,
        duration_ms: Option<u32>,
    ) -> Option<TaskId> {
        if !target.is_finite() {
            log::warn!("refusing to count to {}", target);
            return None;
        }
        Some(start_counter(
            &self.scheduler,
            &self.counter,
            element,
            target,
            duration_ms.unwrap_or(self.counter.duration_ms),
        ))
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        // an AppHandle left to drop keeps its component rendered
        if let Some(MountedButton { app, host }) = self.scroll_top.take() {
            app.destroy();
            host.remove();
        }
    }
}

fn start_counter(
    scheduler: &SharedScheduler,
    settings: &CounterSettings,
    element: Element,
    target: f64,
    duration_ms: u32,
) -> TaskId {
    let render = move |text: &str| element.set_text_content(Some(text));
    CounterAnimator::animate(scheduler.as_ref(), target, duration_ms, settings.tick_ms, render)
}

fn apply_reveal(
    element: &Element,
    actions: Vec<RevealAction>,
    reveal: &RevealSettings,
    scheduler: &SharedScheduler,
    counter: &CounterSettings,
) {
    for action in actions {
        match action {
            RevealAction::AddClass => dom::toggle_class(element, &reveal.revealed_class, true),
            RevealAction::SwapSource(src) => {
                let _ = element.set_attribute("src", &src);
            }
            RevealAction::MarkLoaded => dom::toggle_class(element, &reveal.loaded_class, true),
            RevealAction::StartCounter {
                target,
                duration_ms,
            } => {
                start_counter(scheduler, counter, element.clone(), target, duration_ms);
            }
        }
    }
}

/// Builds the reveal, lazy-image and counter observers. A browser without
/// `IntersectionObserver` simply gets none of these effects.
fn watch_one_shots(
    document: &Document,
    config: &SiteConfig,
    scheduler: &SharedScheduler,
) -> Vec<OneShotObserver> {
    let selectors = &config.selectors;
    let reveal_init = observer_init(config.reveal.threshold, &config.reveal.root_margin);
    let make = |init: Option<&IntersectionObserverInit>| {
        let reveal = config.reveal.clone();
        let counter = config.counter.clone();
        let scheduler = scheduler.clone();
        OneShotObserver::new(init, move |element, actions| {
            apply_reveal(element, actions, &reveal, &scheduler, &counter)
        })
    };

    let mut observers = Vec::new();
    match make(Some(&reveal_init)) {
        Ok(observer) => {
            for card in dom::query_all(document, &selectors.reveal_targets) {
                observer.watch(card, RevealKind::FadeIn);
            }
            for el in dom::query_all(document, &selectors.counters) {
                let target = el.get_attribute("data-counter");
                let Some(target) = target.as_deref().and_then(parse_target) else {
                    log::debug!("counter without numeric data-counter skipped");
                    continue;
                };
                let duration_ms = el
                    .get_attribute("data-counter-duration")
                    .and_then(|raw| raw.trim().parse::<u32>().ok())
                    .unwrap_or(config.counter.duration_ms);
                observer.watch(el, RevealKind::Counter { target, duration_ms });
            }
            log::debug!("revealing {} elements on scroll", observer.watching());
            observers.push(observer);
        }
        Err(err) => log::warn!("IntersectionObserver unavailable: {:?}", err),
    }

    match make(None) {
        Ok(observer) => {
            for img in dom::query_all(document, &selectors.lazy_images) {
                let src = img.get_attribute("data-src").filter(|src| !src.is_empty());
                observer.watch(img, RevealKind::LazyImage { src });
            }
            log::debug!("{} lazy images waiting", observer.watching());
            observers.push(observer);
        }
        Err(err) => log::warn!("lazy image loading disabled: {:?}", err),
    }
    observers
}

fn mount_scroll_top(document: &Document, signal: ScrollTopSignal) -> Option<MountedButton> {
    let body = document.body()?;
    let host = document.create_element("div").ok()?;
    body.append_child(&host).ok()?;
    let props = ScrollToTopProps { signal };
    let app =
        yew::Renderer::<ScrollToTopButton>::with_root_and_props(host.clone(), props).render();
    Some(MountedButton { app, host })
}

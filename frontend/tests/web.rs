#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use amora_frontend::config::{FormSettings, Selectors, SiteConfig};
use amora_frontend::contact::ContactFormController;
use amora_frontend::notification::{NotificationService, Severity};
use amora_frontend::pipeline::ViewportReactionPipeline;
use amora_frontend::scheduler::VirtualScheduler;
use amora_frontend::scroll::{NavbarShadow, ScrollState};
use amora_frontend::web::{
    bind_field_checks, bind_smooth_links, bind_submit, load_config, DomContactForm, DomToastHost,
    ScrollToTopButton, ScrollToTopProps, ScrollTopSignal, Site, TimerScheduler, ViewportBinding,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

const PIXEL_GIF: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Puts `html` in a fresh `<div>` at the very top of the body.
fn fixture(html: &str) -> Element {
    let document = document();
    let body = document.body().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    body.insert_before(&root, body.first_child().as_ref()).unwrap();
    root
}

fn by_id<T: JsCast>(id: &str) -> T {
    document().get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn style_of(element: &Element, property: &str) -> String {
    let html = element.dyn_ref::<HtmlElement>().unwrap();
    html.style().get_property_value(property).unwrap()
}

/// How the browser serialises `value` once set as an inline style.
fn normalized(property: &str, value: &str) -> String {
    let scratch = document().create_element("div").unwrap();
    let html = scratch.dyn_ref::<HtmlElement>().unwrap();
    html.style().set_property(property, value).unwrap();
    style_of(&scratch, property)
}

fn fire(element: &Element, kind: &str) {
    element.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

fn scroll_to(top: f64) {
    window().scroll_to_with_x_and_y(0.0, top);
}

#[wasm_bindgen_test]
fn config_block_overrides_defaults() {
    let document = document();
    let script = document.create_element("script").unwrap();
    script.set_id("site-config");
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"scroll": {"navbar_threshold": 40}}"#));
    document.body().unwrap().append_child(&script).unwrap();

    let config = load_config(&document);
    assert_eq!(config.scroll.navbar_threshold, 40.0);
    assert_eq!(config.form, SiteConfig::default().form);
    script.remove();
}

#[wasm_bindgen_test]
async fn notice_is_drawn_then_removed() {
    let document = document();
    let mut settings = SiteConfig::default().toast;
    settings.lifetime_ms = 20;
    settings.exit_ms = 10;
    let notices = NotificationService::new(
        Rc::new(DomToastHost::new(document.clone())),
        Rc::new(TimerScheduler::new()),
        settings,
    );

    notices.notify("Please fill in all fields", Severity::Error);
    let drawn = document.query_selector(".notification-error").unwrap().unwrap();
    assert_eq!(drawn.text_content().as_deref(), Some("Please fill in all fields"));

    TimeoutFuture::new(100).await;
    assert!(document.query_selector(".notification-error").unwrap().is_none());
}

#[wasm_bindgen_test]
fn scrolling_restyles_navbar_links_and_parallax() {
    let root = fixture(
        r##"
        <nav id="vp-nav">
            <a class="nav-link" href="#vp-home">Home</a>
            <a class="nav-link" href="#vp-about">About</a>
        </nav>
        <div id="vp-near" data-vp-parallax style="height: 50px"></div>
        <section id="vp-home" style="height: 2000px"></section>
        <section id="vp-about" style="height: 2000px"></section>
        <div id="vp-far" data-vp-parallax style="height: 50px"></div>
        <div style="height: 3000px"></div>
        "##,
    );
    let selectors = Selectors {
        navbar: "#vp-nav".to_string(),
        nav_links: "#vp-nav .nav-link".to_string(),
        sections: "section[id^=\"vp-\"]".to_string(),
        parallax: "[data-vp-parallax]".to_string(),
        ..Selectors::default()
    };
    let signal = ScrollTopSignal::new();
    let binding = ViewportBinding::new(
        window(),
        document(),
        selectors,
        ViewportReactionPipeline::new(ScrollState::default()),
        signal.clone(),
    );
    let navbar = by_id::<Element>("vp-nav");

    scroll_to(0.0);
    binding.on_scroll();
    assert_eq!(
        style_of(&navbar, "box-shadow"),
        normalized("box-shadow", NavbarShadow::Default.css())
    );
    assert!(!signal.is_visible());
    assert!(style_of(&by_id("vp-near"), "transform").starts_with("translateY("));
    assert_eq!(style_of(&by_id("vp-far"), "transform"), "");

    let about_top = f64::from(by_id::<HtmlElement>("vp-about").offset_top());
    scroll_to(about_top - 100.0);
    binding.on_scroll();
    assert_eq!(
        style_of(&navbar, "box-shadow"),
        normalized("box-shadow", NavbarShadow::Emphasized.css())
    );
    assert!(signal.is_visible());
    let active = root.query_selector_all("#vp-nav .nav-link.active").unwrap();
    assert_eq!(active.length(), 1);
    let link = active.item(0).unwrap().dyn_into::<Element>().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("#vp-about"));

    scroll_to(0.0);
    root.remove();
}

#[wasm_bindgen_test]
async fn scroll_to_top_button_follows_its_signal() {
    let host = fixture("");
    let signal = ScrollTopSignal::new();
    let props = ScrollToTopProps {
        signal: signal.clone(),
    };
    let app =
        yew::Renderer::<ScrollToTopButton>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(20).await;

    let button = host.query_selector("button.scroll-to-top").unwrap().unwrap();
    let style = || button.get_attribute("style").unwrap_or_default();
    assert!(style().contains("display: none"));

    signal.set(true);
    TimeoutFuture::new(20).await;
    assert!(style().contains("display: flex"));

    signal.set(false);
    TimeoutFuture::new(20).await;
    assert!(style().contains("display: none"));

    app.destroy();
    host.remove();
}

#[wasm_bindgen_test]
async fn reveal_lazy_load_and_counters_fire_once() {
    let root = fixture(&format!(
        r#"
        <div id="ob-card" class="ob-card"
             style="position: fixed; top: 0; left: 0; width: 100px; height: 60px"></div>
        <img id="ob-img" class="ob-img" data-src="{PIXEL_GIF}"
             style="position: fixed; top: 0; left: 120px; width: 20px; height: 20px">
        <span id="ob-count" data-ob-counter data-counter="3" data-counter-duration="32"
              style="position: fixed; top: 0; left: 160px">0</span>
        <span id="ob-nan" data-ob-counter data-counter="NaN"
              style="position: fixed; top: 0; left: 200px">0</span>
        "#
    ));
    let config = SiteConfig {
        selectors: Selectors {
            reveal_targets: ".ob-card".to_string(),
            lazy_images: ".ob-img[data-src]".to_string(),
            counters: "[data-ob-counter]".to_string(),
            ..Selectors::default()
        },
        ..SiteConfig::default()
    };
    let site = Site::mount(window(), document(), config);
    TimeoutFuture::new(200).await;

    let card = by_id::<Element>("ob-card");
    assert!(card.class_list().contains("fade-in"));
    let img = by_id::<Element>("ob-img");
    assert_eq!(img.get_attribute("src").as_deref(), Some(PIXEL_GIF));
    assert!(img.class_list().contains("loaded"));
    assert_eq!(by_id::<Element>("ob-count").text_content().as_deref(), Some("3"));
    assert_eq!(by_id::<Element>("ob-nan").text_content().as_deref(), Some("0"));

    let card_style = card.dyn_ref::<HtmlElement>().unwrap().style();
    card_style.set_property("top", "-5000px").unwrap();
    TimeoutFuture::new(100).await;
    card_style.set_property("top", "0").unwrap();
    TimeoutFuture::new(100).await;
    assert!(card.class_list().contains("fade-in"));

    assert!(document().query_selector("button.scroll-to-top").unwrap().is_some());
    drop(site);
    assert!(document().query_selector("button.scroll-to-top").unwrap().is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn contact_form_goes_busy_then_resets() {
    let root = fixture(
        r#"
        <form id="cf-form">
            <input id="cf-name">
            <input id="cf-email">
            <textarea id="cf-message"></textarea>
            <button type="submit" class="submit-btn">Send Message</button>
        </form>
        "#,
    );
    let selectors = Selectors {
        contact_form_id: "cf-form".to_string(),
        name_field_id: "cf-name".to_string(),
        email_field_id: "cf-email".to_string(),
        message_field_id: "cf-message".to_string(),
        ..Selectors::default()
    };
    let scheduler = VirtualScheduler::new();
    let notices = NotificationService::new(
        Rc::new(DomToastHost::new(document())),
        Rc::new(scheduler.clone()),
        SiteConfig::default().toast,
    );
    let form = Rc::new(DomContactForm::find(&document(), &selectors).unwrap());
    let controller = ContactFormController::new(
        form.clone(),
        notices,
        Rc::new(scheduler.clone()),
        FormSettings::default(),
    );
    let _submit = bind_submit(&form, controller);
    let button = root
        .query_selector(".submit-btn")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlButtonElement>()
        .unwrap();

    by_id::<HtmlInputElement>("cf-name").set_value("Mia");
    by_id::<HtmlInputElement>("cf-email").set_value("mia@example");
    by_id::<HtmlTextAreaElement>("cf-message").set_value("A June wedding");
    button.click();
    assert!(!button.disabled());
    let error = document().query_selector(".notification-error").unwrap().unwrap();
    assert_eq!(
        error.text_content().as_deref(),
        Some("Please enter a valid email address")
    );

    by_id::<HtmlInputElement>("cf-email").set_value("mia@example.com");
    button.click();
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Sending..."));

    scheduler.advance(1500);
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Send Message"));
    assert_eq!(by_id::<HtmlInputElement>("cf-name").value(), "");
    assert_eq!(by_id::<HtmlTextAreaElement>("cf-message").value(), "");
    let success = document().query_selector(".notification-success").unwrap().unwrap();
    assert_eq!(
        success.text_content(),
        Some(FormSettings::default().success_message)
    );

    scheduler.advance(4300);
    assert!(document().query_selector(".notification").unwrap().is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn blur_flags_empty_controls_and_focus_clears() {
    let root = fixture(r#"<input id="fc-field" class="fc-control">"#);
    let selectors = Selectors {
        form_controls: ".fc-control".to_string(),
        ..Selectors::default()
    };
    let _checks = bind_field_checks(&document(), &selectors, &FormSettings::default());
    let field = by_id::<HtmlInputElement>("fc-field");

    fire(&field, "blur");
    assert!(field.class_list().contains("is-invalid"));
    fire(&field, "focus");
    assert!(!field.class_list().contains("is-invalid"));

    field.set_value("   ");
    fire(&field, "blur");
    assert!(field.class_list().contains("is-invalid"));

    field.set_value("Mia");
    fire(&field, "focus");
    fire(&field, "blur");
    assert!(!field.class_list().contains("is-invalid"));
    root.remove();
}

#[wasm_bindgen_test]
async fn anchor_click_lands_just_below_the_navbar() {
    let root = fixture(
        r##"
        <a id="ss-link" class="ss-link" href="#ss-target">Contact</a>
        <div style="height: 1500px"></div>
        <section id="ss-target" style="height: 200px"></section>
        <div style="height: 3000px"></div>
        "##,
    );
    let selectors = Selectors {
        smooth_links: ".ss-link".to_string(),
        ..Selectors::default()
    };
    let _links = bind_smooth_links(&window(), &document(), &selectors, &ScrollState::default());

    scroll_to(0.0);
    by_id::<HtmlElement>("ss-link").click();
    TimeoutFuture::new(1500).await;

    let target_top = f64::from(by_id::<HtmlElement>("ss-target").offset_top());
    let offset = window().scroll_y().unwrap();
    assert!(
        (offset - (target_top - 80.0)).abs() < 2.0,
        "scrolled to {offset}, section at {target_top}"
    );

    scroll_to(0.0);
    root.remove();
}

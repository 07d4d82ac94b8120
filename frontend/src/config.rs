use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional JSON block a page can use to override these values.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Every tunable of the page behaviour. Pages override any subset through a
/// `<script id="site-config" type="application/json">` block.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollSettings,
    pub reveal: RevealSettings,
    pub form: FormSettings,
    pub toast: ToastSettings,
    pub counter: CounterSettings,
    pub selectors: Selectors,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub navbar_threshold: f64,
    pub scroll_top_threshold: f64,
    /// How far above a section's top the page may be and still count it as current.
    pub section_lead: f64,
    /// Space left above an anchor target for the fixed navbar.
    pub anchor_offset: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            scroll_top_threshold: 300.0,
            section_lead: 200.0,
            anchor_offset: 80.0,
            parallax_factor: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: String,
    pub revealed_class: String,
    pub loaded_class: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            revealed_class: "fade-in".to_string(),
            loaded_class: "loaded".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub submit_delay_ms: u32,
    pub busy_label: String,
    pub success_message: String,
    pub invalid_class: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            busy_label: "Sending...".to_string(),
            success_message: "Thank you! Your message has been sent successfully.".to_string(),
            invalid_class: "is-invalid".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    pub lifetime_ms: u32,
    pub exit_ms: u32,
    /// 0 means unbounded.
    pub max_visible: usize,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            lifetime_ms: 4000,
            exit_ms: 300,
            max_visible: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub smooth_links: String,
    pub nav_links: String,
    pub sections: String,
    pub reveal_targets: String,
    pub lazy_images: String,
    pub parallax: String,
    pub counters: String,
    pub contact_form_id: String,
    pub name_field_id: String,
    pub email_field_id: String,
    pub message_field_id: String,
    pub submit_button: String,
    pub form_controls: String,
    pub buttons: String,
    pub cards: String,
    pub navbar_collapse: String,
    pub tooltips: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar-custom".to_string(),
            smooth_links: ".smooth-scroll".to_string(),
            nav_links: ".navbar-nav .nav-link".to_string(),
            sections: "section[id]".to_string(),
            reveal_targets: ".ethics-card".to_string(),
            lazy_images: "img[data-src]".to_string(),
            parallax: "[data-parallax]".to_string(),
            counters: "[data-counter]".to_string(),
            contact_form_id: "contactForm".to_string(),
            name_field_id: "name".to_string(),
            email_field_id: "email".to_string(),
            message_field_id: "message".to_string(),
            submit_button: ".submit-btn".to_string(),
            form_controls: ".form-control".to_string(),
            buttons: ".btn".to_string(),
            cards: ".service-card, .partner-card, .mission-vision-card".to_string(),
            navbar_collapse: ".navbar-collapse".to_string(),
            tooltips: "[data-bs-toggle=\"tooltip\"]".to_string(),
        }
    }
}

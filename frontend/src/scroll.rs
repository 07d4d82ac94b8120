//! Pure scroll-derived signals: navbar emphasis, scroll-to-top visibility,
//! the current section and parallax shifts.

use crate::config::ScrollSettings;

pub const NAVBAR_SHADOW_DEFAULT: &str = "0 4px 15px rgba(212, 165, 165, 0.1)";
pub const NAVBAR_SHADOW_EMPHASIZED: &str = "0 8px 25px rgba(212, 165, 165, 0.15)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarShadow {
    Default,
    Emphasized,
}

impl NavbarShadow {
    pub fn css(self) -> &'static str {
        match self {
            NavbarShadow::Default => NAVBAR_SHADOW_DEFAULT,
            NavbarShadow::Emphasized => NAVBAR_SHADOW_EMPHASIZED,
        }
    }
}

/// A section's id and its top position in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    settings: ScrollSettings,
}

impl ScrollState {
    pub fn new(settings: ScrollSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn navbar_shadow(&self, offset: f64) -> NavbarShadow {
        if offset > self.settings.navbar_threshold {
            NavbarShadow::Emphasized
        } else {
            NavbarShadow::Default
        }
    }

    pub fn scroll_top_visible(&self, offset: f64) -> bool {
        offset > self.settings.scroll_top_threshold
    }

    /// Walks sections in document order without stopping early, so the last
    /// section whose lead-adjusted top has been reached wins.
    pub fn active_section<'a>(
        &self,
        sections: &'a [SectionBounds],
        offset: f64,
    ) -> Option<&'a str> {
        let mut current = None;
        for section in sections {
            if offset >= section.top - self.settings.section_lead {
                current = Some(section.id.as_str());
            }
        }
        current
    }

    /// Vertical translation for a parallax element, or `None` while it is more
    /// than one viewport height away (the element is then left untouched).
    pub fn parallax_shift(
        &self,
        offset: f64,
        element_top: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        let distance = offset - element_top;
        if distance > -viewport_height && distance < viewport_height {
            Some(distance * self.settings.parallax_factor)
        } else {
            None
        }
    }

    /// Scroll position that puts an anchor target just below the fixed navbar.
    pub fn anchor_target(&self, target_top: f64) -> f64 {
        target_top - self.settings.anchor_offset
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}

/// A nav link is active iff it points at the current section.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

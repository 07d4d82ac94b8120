use crate::scroll::{link_is_active, NavbarShadow, ScrollState, SectionBounds};

/// What a scroll handler read from the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub offset: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionBounds>,
    /// Document-space top of each parallax element, in document order.
    pub parallax_tops: Vec<f64>,
}

/// Style/class mutations to apply for one scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReaction {
    pub navbar: NavbarShadow,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
    /// One entry per parallax element; `None` leaves it untouched.
    pub parallax: Vec<Option<f64>>,
}

impl ScrollReaction {
    pub fn link_is_active(&self, href: &str) -> bool {
        link_is_active(href, self.active_section.as_deref())
    }
}

/// The one per-page owner of the scroll thresholds. Built once at mount and
/// fed every scroll event.
#[derive(Debug, Clone, Default)]
pub struct ViewportReactionPipeline {
    scroll: ScrollState,
}

impl ViewportReactionPipeline {
    pub fn new(scroll: ScrollState) -> Self {
        Self { scroll }
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn react(&self, snapshot: &ViewportSnapshot) -> ScrollReaction {
        let offset = snapshot.offset;
        ScrollReaction {
            navbar: self.scroll.navbar_shadow(offset),
            scroll_top_visible: self.scroll.scroll_top_visible(offset),
            active_section: self
                .scroll
                .active_section(&snapshot.sections, offset)
                .map(str::to_string),
            parallax: snapshot
                .parallax_tops
                .iter()
                .map(|top| self.scroll.parallax_shift(offset, *top, snapshot.viewport_height))
                .collect(),
        }
    }
}

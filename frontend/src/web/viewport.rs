use web_sys::{Document, Element, Window};

use super::dom;
use super::scroll_top::ScrollTopSignal;
use crate::config::Selectors;
use crate::pipeline::{ScrollReaction, ViewportReactionPipeline, ViewportSnapshot};
use crate::scroll::{link_is_active, SectionBounds};

/// Reads page geometry for the pipeline and writes its reaction back.
/// Sections, links and parallax elements are looked up on every event so
/// markup added after load is picked up.
pub struct ViewportBinding {
    window: Window,
    document: Document,
    selectors: Selectors,
    pipeline: ViewportReactionPipeline,
    scroll_top: ScrollTopSignal,
}

impl ViewportBinding {
    pub fn new(
        window: Window,
        document: Document,
        selectors: Selectors,
        pipeline: ViewportReactionPipeline,
        scroll_top: ScrollTopSignal,
    ) -> Self {
        Self {
            window,
            document,
            selectors,
            pipeline,
            scroll_top,
        }
    }

    pub fn on_scroll(&self) {
        let parallax = dom::query_all(&self.document, &self.selectors.parallax);
        let snapshot = ViewportSnapshot {
            offset: dom::scroll_offset(&self.window),
            viewport_height: dom::viewport_height(&self.window),
            sections: self.sections(),
            parallax_tops: parallax.iter().map(dom::offset_top).collect(),
        };
        let reaction = self.pipeline.react(&snapshot);
        self.apply(&reaction, &parallax);
    }

    /// Link highlighting and the scroll-to-top button for a page opened
    /// part way down. The navbar and parallax wait for the first scroll.
    pub fn on_load(&self) {
        let offset = dom::scroll_offset(&self.window);
        let sections = self.sections();
        let scroll = self.pipeline.scroll_state();
        let current = scroll.active_section(&sections, offset);
        self.highlight_links(|href| link_is_active(href, current));
        self.scroll_top.set(scroll.scroll_top_visible(offset));
    }

    fn sections(&self) -> Vec<SectionBounds> {
        dom::query_all(&self.document, &self.selectors.sections)
            .into_iter()
            .filter_map(|section| {
                let id = section.id();
                (!id.is_empty()).then(|| SectionBounds::new(id, dom::offset_top(&section)))
            })
            .collect()
    }

    fn apply(&self, reaction: &ScrollReaction, parallax: &[Element]) {
        if let Some(navbar) = dom::query(&self.document, &self.selectors.navbar) {
            dom::set_style(&navbar, "box-shadow", reaction.navbar.css());
        }
        self.highlight_links(|href| reaction.link_is_active(href));
        self.scroll_top.set(reaction.scroll_top_visible);
        for (element, shift) in parallax.iter().zip(&reaction.parallax) {
            if let Some(shift) = shift {
                dom::set_style(element, "transform", &format!("translateY({shift}px)"));
            }
        }
    }

    fn highlight_links(&self, is_active: impl Fn(&str) -> bool) {
        for link in dom::query_all(&self.document, &self.selectors.nav_links) {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::toggle_class(&link, "active", is_active(&href));
        }
    }
}

//! One-shot visibility state for reveal-on-scroll, lazy images and counters.

/// What happens to an element the first time it becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealKind {
    FadeIn,
    LazyImage { src: Option<String> },
    Counter { target: f64, duration_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveState {
    Idle,
    Observing,
    Triggered,
    Revealed,
    Loaded,
}

impl ObserveState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ObserveState::Revealed | ObserveState::Loaded)
    }
}

/// Work the caller must perform once an element triggers. After this the
/// element is unobserved for good.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealAction {
    AddClass,
    SwapSource(String),
    MarkLoaded,
    StartCounter { target: f64, duration_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct OneShot {
    kind: RevealKind,
    state: ObserveState,
}

impl OneShot {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            state: ObserveState::Idle,
        }
    }

    pub fn state(&self) -> ObserveState {
        self.state
    }

    pub fn observe(&mut self) {
        if self.state == ObserveState::Idle {
            self.state = ObserveState::Observing;
        }
    }

    /// Feeds one intersection report. Returns the actions only on the first
    /// intersecting report while observing; later reports are ignored.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<Vec<RevealAction>> {
        if self.state != ObserveState::Observing || !is_intersecting {
            return None;
        }
        self.state = ObserveState::Triggered;
        let actions = match &self.kind {
            RevealKind::FadeIn => vec![RevealAction::AddClass],
            RevealKind::LazyImage { src } => {
                let mut actions = Vec::with_capacity(2);
                if let Some(src) = src {
                    actions.push(RevealAction::SwapSource(src.clone()));
                }
                actions.push(RevealAction::MarkLoaded);
                actions
            }
            RevealKind::Counter {
                target,
                duration_ms,
            } => vec![RevealAction::StartCounter {
                target: *target,
                duration_ms: *duration_ms,
            }],
        };
        self.state = match self.kind {
            RevealKind::LazyImage { .. } => ObserveState::Loaded,
            _ => ObserveState::Revealed,
        };
        Some(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_triggers_once() {
        let mut card = OneShot::new(RevealKind::FadeIn);
        card.observe();
        assert_eq!(card.on_intersection(false), None);
        assert_eq!(card.state(), ObserveState::Observing);
        assert_eq!(card.on_intersection(true), Some(vec![RevealAction::AddClass]));
        assert_eq!(card.state(), ObserveState::Revealed);

        // leaving and re-entering changes nothing
        assert_eq!(card.on_intersection(false), None);
        assert_eq!(card.on_intersection(true), None);
        assert!(card.state().is_terminal());
    }

    #[test]
    fn idle_elements_ignore_reports() {
        let mut card = OneShot::new(RevealKind::FadeIn);
        assert_eq!(card.on_intersection(true), None);
        assert_eq!(card.state(), ObserveState::Idle);
    }

    #[test]
    fn lazy_image_swaps_then_loads() {
        let mut img = OneShot::new(RevealKind::LazyImage {
            src: Some("/img/hero.jpg".to_string()),
        });
        img.observe();
        assert_eq!(
            img.on_intersection(true),
            Some(vec![
                RevealAction::SwapSource("/img/hero.jpg".to_string()),
                RevealAction::MarkLoaded
            ])
        );
        assert_eq!(img.state(), ObserveState::Loaded);
    }

    #[test]
    fn lazy_image_without_source_is_still_loaded() {
        let mut img = OneShot::new(RevealKind::LazyImage { src: None });
        img.observe();
        assert_eq!(img.on_intersection(true), Some(vec![RevealAction::MarkLoaded]));
        assert_eq!(img.on_intersection(true), None);
    }

    #[test]
    fn counter_starts_on_first_sight() {
        let mut counter = OneShot::new(RevealKind::Counter {
            target: 250.0,
            duration_ms: 2000,
        });
        counter.observe();
        counter.observe();
        assert_eq!(
            counter.on_intersection(true),
            Some(vec![RevealAction::StartCounter {
                target: 250.0,
                duration_ms: 2000
            }])
        );
    }
}

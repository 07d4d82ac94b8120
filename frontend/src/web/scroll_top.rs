use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::dom;

const BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; \
    background: linear-gradient(135deg, #D4A5A5 0%, #E8C4C4 100%); color: white; border: none; \
    width: 50px; height: 50px; border-radius: 50%; cursor: pointer; align-items: center; \
    justify-content: center; font-size: 1.2rem; box-shadow: 0 4px 15px rgba(212, 165, 165, 0.3); \
    transition: all 0.3s ease; z-index: 999;";

#[derive(Default)]
struct SignalState {
    visible: bool,
    listener: Option<Callback<bool>>,
}

/// Carries the scroll pipeline's visibility verdict into the mounted button.
#[derive(Clone, Default)]
pub struct ScrollTopSignal {
    state: Rc<RefCell<SignalState>>,
}

impl ScrollTopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn set(&self, visible: bool) {
        let listener = {
            let mut state = self.state.borrow_mut();
            if state.visible == visible {
                return;
            }
            state.visible = visible;
            state.listener.clone()
        };
        if let Some(listener) = listener {
            listener.emit(visible);
        }
    }

    fn subscribe(&self, listener: Option<Callback<bool>>) {
        self.state.borrow_mut().listener = listener;
    }
}

impl PartialEq for ScrollTopSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollToTopProps {
    pub signal: ScrollTopSignal,
}

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button(props: &ScrollToTopProps) -> Html {
    let visible = use_state(|| props.signal.is_visible());
    let lifted = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |signal: &ScrollTopSignal| {
                visible.set(signal.is_visible());
                signal.subscribe(Some(Callback::from(move |now: bool| visible.set(now))));
                let signal = signal.clone();
                move || signal.subscribe(None)
            },
            props.signal.clone(),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            dom::smooth_scroll_to(&window, 0.0);
        }
    });
    let onmouseenter = {
        let lifted = lifted.clone();
        Callback::from(move |_: MouseEvent| lifted.set(true))
    };
    let onmouseleave = {
        let lifted = lifted.clone();
        Callback::from(move |_: MouseEvent| lifted.set(false))
    };

    let style = format!(
        "{} display: {}; transform: {};",
        BASE_STYLE,
        if *visible { "flex" } else { "none" },
        if *lifted { "translateY(-5px)" } else { "translateY(0)" },
    );

    html! {
        <button
            class="scroll-to-top"
            aria-label="Scroll to top"
            style={style}
            onclick={onclick}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

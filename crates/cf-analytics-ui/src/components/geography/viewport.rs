//! Viewport tracking for the mobile layout switch.

use crate::core::breakpoints::{Layout, width_from_px};
use gloo::events::EventListener;
use gloo::utils::window;
use yew::functional::hook;
use yew::prelude::*;

/// Current [`Layout`], recomputed on every `resize` while the caller is mounted.
#[hook]
pub(super) fn use_layout() -> Layout {
    let layout = use_state_eq(current_layout);
    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |_| {
                layout.set(current_layout());
                let handler = EventListener::new(&window(), "resize", move |_event| {
                    layout.set(current_layout());
                });
                move || drop(handler)
            },
            (),
        );
    }
    *layout
}

fn current_layout() -> Layout {
    let width = window().inner_width().ok().and_then(|w| w.as_f64());
    Layout::for_width(width_from_px(width))
}

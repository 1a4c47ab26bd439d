//! Theme provider: owns the light/dark mode and hands it to descendants via context.
//!
//! # Design
//! - The initial mode is resolved once when the provider mounts.
//! - Mode changes go through a reducer; a toggle flips and persists the
//!   current state. OS preference changes only apply while nothing is persisted.
//! - Every mode change rewrites the `dark-mode` / `light-mode` class on the
//!   document root.

use crate::app::preferences::{
    load_initial_theme, load_persisted_theme, persist_theme, prefers_dark_query,
};
use crate::core::theme::{RootClasses, ThemeColors, ThemeMode, ThemeToggle, follow_system};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use std::rc::Rc;
use yew::functional::hook;
use yew::prelude::*;

/// Theme value shared with every component under [`ThemeProvider`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ThemeContext {
    pub(crate) mode: ThemeMode,
    pub(crate) toggle: Callback<()>,
}

impl ThemeContext {
    pub(crate) const fn is_dark_mode(&self) -> bool {
        self.mode.is_dark()
    }

    /// `"dark"` or `"light"`.
    pub(crate) const fn theme(&self) -> &'static str {
        self.mode.as_str()
    }

    pub(crate) const fn colors(&self) -> ThemeColors {
        ThemeColors::for_mode(self.mode)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ThemeState(ThemeMode);

enum ThemeAction {
    /// Explicit user toggle; persisted.
    Toggle,
    /// OS preference change; never persisted.
    System(ThemeMode),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ThemeAction::Toggle => {
                let toggle = ThemeToggle::from_current(self.0);
                persist_theme(toggle.persist);
                toggle.next
            }
            ThemeAction::System(mode) => mode,
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeProviderProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(ThemeProvider)]
pub(crate) fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(|| ThemeState(load_initial_theme()));
    let mode = state.0;

    use_effect_with_deps(
        move |mode| {
            apply_root_classes(*mode);
            || ()
        },
        mode,
    );

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = prefers_dark_query().map(|query| {
                    let target = query.clone();
                    EventListener::new(&query, "change", move |_event| {
                        let persisted = load_persisted_theme();
                        if let Some(next) = follow_system(persisted.as_deref(), target.matches()) {
                            state.dispatch(ThemeAction::System(next));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(ThemeAction::Toggle))
    };

    let context = ThemeContext { mode, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Read the theme context.
///
/// # Panics
/// Panics when called outside a [`ThemeProvider`]; that is a wiring bug, not a runtime state.
#[hook]
pub(crate) fn use_theme() -> ThemeContext {
    match use_context::<ThemeContext>() {
        Some(context) => context,
        None => panic!("use_theme must be used within a ThemeProvider"),
    }
}

fn apply_root_classes(mode: ThemeMode) {
    let classes = RootClasses::for_mode(mode);
    let Some(root) = window().document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let list = root.class_list();
    if list.add_1(classes.add).is_err() || list.remove_1(classes.remove).is_err() {
        console::warn!("failed to update theme classes on document root", mode.as_str());
    }
}

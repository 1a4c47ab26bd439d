//! Empty state panel for data-less sections.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Render the optional description only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("no-data", props.class.clone())}>
            <p>{props.title.clone()}</p>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}

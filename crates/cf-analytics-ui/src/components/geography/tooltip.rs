//! Hover panel showing both series for one country.

use crate::core::aggregate::CountryAggregate;
use crate::core::theme::ThemeColors;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(super) struct CombinedTooltipProps {
    pub(super) active: bool,
    #[prop_or_default]
    pub(super) payload: Option<CountryAggregate>,
    pub(super) colors: ThemeColors,
    pub(super) requests_label: AttrValue,
    pub(super) bandwidth_label: AttrValue,
    pub(super) format_number: Callback<u64, String>,
    pub(super) format_bytes: Callback<u64, String>,
    /// Absolute placement inside the chart container.
    #[prop_or_default]
    pub(super) position: AttrValue,
}

/// Hover panel for the dual bar chart; renders nothing without an active payload.
#[function_component(CombinedTooltip)]
pub(super) fn combined_tooltip(props: &CombinedTooltipProps) -> Html {
    let Some(country) = props.payload.as_ref().filter(|_| props.active) else {
        return html! {};
    };
    let colors = props.colors;
    let panel_style = format!(
        "position: absolute; pointer-events: none; {} background-color: {}; padding: 12px; \
         border: 1px solid {}; border-radius: 8px; box-shadow: {};",
        props.position, colors.background, colors.border, colors.shadow
    );
    let row_style = format!(
        "display: flex; align-items: center; margin: 0 0 4px 0; color: {};",
        colors.text_secondary
    );

    html! {
        <div class="chart-tooltip" role="tooltip" style={panel_style}>
            <p style={format!("margin: 0 0 8px 0; font-weight: 600; color: {};", colors.text)}>
                {country.country.clone()}
            </p>
            <div style={row_style.clone()}>
                {swatch(colors.requests)}
                <span>
                    {format!("{}: {}", props.requests_label, props.format_number.emit(country.requests))}
                </span>
            </div>
            <div style={row_style}>
                {swatch(colors.bandwidth)}
                <span>
                    {format!("{}: {}", props.bandwidth_label, props.format_bytes.emit(country.bytes))}
                </span>
            </div>
        </div>
    }
}

fn swatch(color: &str) -> Html {
    let style = format!(
        "width: 12px; height: 12px; background-color: {color}; border-radius: 2px; \
         margin-right: 8px; flex-shrink: 0;"
    );
    html! { <div style={style}></div> }
}

//! Country shading block with a requests legend.
//!
//! # Design
//! - Tiles are keyed by country name and shaded from the shared [`ColorScale`].
//! - Map geometry is not drawn; the tiles stand in for regions.

use crate::core::aggregate::CountryAggregate;
use crate::core::color::ColorScale;
use crate::core::theme::ThemeColors;
use yew::prelude::*;

const LEGEND_STEPS: usize = 5;

#[derive(Properties, PartialEq)]
pub(super) struct WorldMapProps {
    pub(super) countries: Vec<CountryAggregate>,
    pub(super) scale: ColorScale,
    pub(super) max_requests: u64,
    pub(super) colors: ThemeColors,
    pub(super) legend_caption: AttrValue,
    pub(super) format_number: Callback<u64, String>,
    pub(super) format_bytes: Callback<u64, String>,
    #[prop_or_default]
    pub(super) is_mobile: bool,
}

#[function_component(WorldMap)]
pub(super) fn world_map(props: &WorldMapProps) -> Html {
    let colors = props.colors;
    let tile_min = if props.is_mobile { "88px" } else { "120px" };
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat(auto-fill, minmax({tile_min}, 1fr)); gap: 6px;"
    );

    let tiles = props.countries.iter().map(|country| {
        let fill = props.scale.color(country.requests);
        let title = format!(
            "{}: {} / {}",
            country.country,
            props.format_number.emit(country.requests),
            props.format_bytes.emit(country.bytes)
        );
        let style = format!(
            "background-color: {fill}; border: 1px solid {}; border-radius: 4px; padding: 6px 8px;",
            colors.border
        );
        html! {
            <div class="map-region" key={country.country.clone()} data-country={country.country.clone()} title={title} style={style}>
                <span class="map-region-name">{country.country.clone()}</span>
            </div>
        }
    });

    let legend_bar = format!(
        "height: 8px; border-radius: 4px; background: {};",
        props.scale.css_gradient(LEGEND_STEPS)
    );
    let legend_text = format!("display: flex; justify-content: space-between; font-size: 12px; color: {};", colors.text_secondary);

    html! {
        <div class={classes!("world-map", props.is_mobile.then_some("world-map-compact"))}>
            <div class="map-regions" style={grid_style}>{for tiles}</div>
            <div class="map-legend" aria-label={props.legend_caption.clone()}>
                <span style={format!("font-size: 12px; color: {};", colors.text_secondary)}>
                    {props.legend_caption.clone()}
                </span>
                <div style={legend_bar}></div>
                <div style={legend_text}>
                    <span>{props.format_number.emit(0)}</span>
                    <span>{props.format_number.emit(props.max_requests)}</span>
                </div>
            </div>
        </div>
    }
}

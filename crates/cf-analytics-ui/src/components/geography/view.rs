//! Geography statistics section.
//!
//! # Design
//! - The summary is derived once per payload and shared by chart, map and table.
//! - A payload that is not an account array is logged and rendered as empty.

use super::bar_chart::CountryBarChart;
use super::country_table::CountryTable;
use super::viewport::use_layout;
use super::world_map::WorldMap;
use crate::app::theme::use_theme;
use crate::components::atoms::EmptyState;
use crate::core::aggregate::GeographySummary;
use crate::core::color::ColorScale;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{GeographyLabels, TableHeaders};
use gloo::console;
use serde_json::Value;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GeographyStatsProps {
    pub(crate) data: Rc<Value>,
    pub(crate) format_number: Callback<u64, String>,
    pub(crate) format_bytes: Callback<u64, String>,
}

#[function_component(GeographyStats)]
pub(crate) fn geography_stats(props: &GeographyStatsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let theme = use_theme();
    let layout = use_layout();
    let summary = use_memo(
        |data: &Rc<Value>| {
            let (summary, error) = GeographySummary::from_value(data);
            if let Some(err) = error {
                console::warn!("geography payload rejected", err.to_string());
            }
            summary
        },
        props.data.clone(),
    );

    let labels = GeographyLabels::from_bundle(&bundle);
    let colors = theme.colors();

    let header = html! {
        <div class="card-header">
            <h3>{labels.title.clone()}</h3>
            <p class="muted">{labels.subtitle.clone()}</p>
        </div>
    };

    if summary.is_empty() {
        return html! {
            <section class="card geography-stats">
                {header}
                <EmptyState title={labels.no_data} />
            </section>
        };
    }

    let scale = ColorScale::for_theme(summary.max_requests, theme.mode);
    let headers = TableHeaders::for_layout(&bundle, layout);

    html! {
        <section class={classes!("card", "geography-stats", layout.gap_class())}>
            {header}
            <div class="geography-chart">
                <h4>{labels.traffic_by_country}</h4>
                <CountryBarChart
                    countries={summary.top.clone()}
                    colors={colors}
                    requests_label={labels.requests.clone()}
                    bandwidth_label={labels.bandwidth.clone()}
                    format_number={props.format_number.clone()}
                    format_bytes={props.format_bytes.clone()}
                />
            </div>
            <WorldMap
                countries={summary.countries.clone()}
                scale={scale}
                max_requests={summary.max_requests}
                colors={colors}
                legend_caption={labels.map_legend}
                format_number={props.format_number.clone()}
                format_bytes={props.format_bytes.clone()}
                is_mobile={layout.is_mobile()}
            />
            <div class="geography-table">
                <h4>{labels.detailed_stats}</h4>
                <CountryTable
                    summary={summary.clone()}
                    headers={headers}
                    mode={theme.mode}
                    colors={colors}
                    scale={scale}
                    format_number={props.format_number.clone()}
                    format_bytes={props.format_bytes.clone()}
                />
            </div>
        </section>
    }
}

//! Ranked country table with rank badges and request share.

use crate::core::aggregate::GeographySummary;
use crate::core::color::{ColorScale, RankBadgeStyle};
use crate::core::theme::{ThemeColors, ThemeMode};
use crate::models::TableHeaders;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(super) struct CountryTableProps {
    pub(super) summary: Rc<GeographySummary>,
    pub(super) headers: TableHeaders,
    pub(super) mode: ThemeMode,
    pub(super) colors: ThemeColors,
    pub(super) scale: ColorScale,
    pub(super) format_number: Callback<u64, String>,
    pub(super) format_bytes: Callback<u64, String>,
}

/// One row per top country; shares are of the top-country total.
#[function_component(CountryTable)]
pub(super) fn country_table(props: &CountryTableProps) -> Html {
    let summary = &props.summary;
    let rows = summary.top.iter().enumerate().map(|(index, country)| {
        let badge = RankBadgeStyle::new(
            country.requests,
            summary.max_requests,
            props.mode,
            &props.scale,
            props.colors.border,
        );
        html! {
            <tr key={country.country.clone()}>
                <td>
                    <span class="rank-badge" style={badge.css()}>{index + 1}</span>
                </td>
                <td class="country-name">
                    {country.country.clone()}
                    <span class="muted">{format!(" ({}%)", summary.share_label(country.requests))}</span>
                </td>
                <td class="num">{props.format_number.emit(country.requests)}</td>
                <td class="num">{props.format_bytes.emit(country.bytes)}</td>
            </tr>
        }
    });

    html! {
        <table class="country-table">
            <thead>
                <tr>
                    <th>{props.headers.rank.clone()}</th>
                    <th>{props.headers.country.clone()}</th>
                    <th class="num">{props.headers.requests.clone()}</th>
                    <th class="num">{props.headers.bandwidth.clone()}</th>
                </tr>
            </thead>
            <tbody>{for rows}</tbody>
        </table>
    }
}

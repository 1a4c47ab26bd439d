//! SVG dual-axis bar chart for the top countries.
//!
//! # Design
//! - Geometry comes from [`BarChartLayout`]; this component only paints it.
//! - Each category band is the hover/focus target and drives the shared tooltip.
//! - The SVG scales uniformly with its container width, so text keeps its proportions.

use super::tooltip::CombinedTooltip;
use crate::core::aggregate::CountryAggregate;
use crate::core::chart::{BarChartLayout, ChartFrame, Rect};
use crate::core::theme::ThemeColors;
use yew::prelude::*;

const TICK_FONT_SIZE: &str = "12";
const BAR_RADIUS: f64 = 4.0;

#[derive(Properties, PartialEq)]
pub(super) struct CountryBarChartProps {
    pub(super) countries: Vec<CountryAggregate>,
    pub(super) colors: ThemeColors,
    pub(super) requests_label: AttrValue,
    pub(super) bandwidth_label: AttrValue,
    pub(super) format_number: Callback<u64, String>,
    pub(super) format_bytes: Callback<u64, String>,
}

#[function_component(CountryBarChart)]
pub(super) fn country_bar_chart(props: &CountryBarChartProps) -> Html {
    let hovered = use_state_eq(|| None::<usize>);
    let layout = use_memo(
        |countries: &Vec<CountryAggregate>| {
            BarChartLayout::compute(countries, &ChartFrame::default())
        },
        props.countries.clone(),
    );
    let colors = props.colors;
    let frame = layout.frame;
    let plot = layout.plot;

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };
    let on_blur = {
        let hovered = hovered.clone();
        Callback::from(move |_: FocusEvent| hovered.set(None))
    };

    let grid_stroke = colors.grid.unwrap_or("currentColor");
    let grid = layout.request_ticks.iter().map(|tick| {
        html! {
            <line
                x1={plot.left.to_string()}
                x2={plot.right().to_string()}
                y1={tick.y.to_string()}
                y2={tick.y.to_string()}
                stroke={grid_stroke}
                stroke-dasharray="3 3"
                opacity="0.3"
            />
        }
    });
    let ticks = layout.request_ticks.iter().map(|tick| {
        html! {
            <text
                x={(plot.left - 8.0).to_string()}
                y={tick.y.to_string()}
                text-anchor="end"
                dominant-baseline="middle"
                font-size={TICK_FONT_SIZE}
                fill={colors.text_secondary}>
                {props.format_number.emit(tick.value)}
            </text>
        }
    });

    let groups = layout.groups.iter().map(|group| {
        let country = &props.countries[group.index];
        let index = group.index;
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let on_focus = {
            let hovered = hovered.clone();
            Callback::from(move |_: FocusEvent| hovered.set(Some(index)))
        };
        let label_y = plot.bottom() + 12.0;
        html! {
            <g class="bar-group" key={country.country.clone()}>
                <rect
                    class="bar-band"
                    x={group.band.x.to_string()}
                    y={group.band.y.to_string()}
                    width={group.band.width.to_string()}
                    height={group.band.height.to_string()}
                    fill={if *hovered == Some(index) { "rgba(127,127,127,0.12)" } else { "transparent" }}
                    tabindex="0"
                    aria-label={country.country.clone()}
                    onmouseenter={on_enter}
                    onfocus={on_focus}
                />
                {bar(group.requests, colors.requests)}
                {bar(group.bytes, colors.bandwidth)}
                <text
                    x={group.label_x.to_string()}
                    y={label_y.to_string()}
                    transform={format!("rotate(-45 {} {})", group.label_x, label_y)}
                    text-anchor="end"
                    font-size={TICK_FONT_SIZE}
                    fill={colors.text_secondary}>
                    {country.country.clone()}
                </text>
            </g>
        }
    });

    let axis_mid = plot.top + plot.height / 2.0;
    let left_caption_x = frame.margins.left;
    let right_caption_x = frame.width - frame.margins.right;

    let hovered_index = *hovered;
    let hovered_country = hovered_index.and_then(|index| props.countries.get(index).cloned());
    let tooltip_position = hovered_index
        .and_then(|index| layout.groups.get(index))
        .map(|group| {
            let left_pct = group.label_x / frame.width * 100.0;
            AttrValue::from(format!(
                "left: {left_pct:.1}%; top: 16px; transform: translateX(-50%);"
            ))
        })
        .unwrap_or_default();

    html! {
        <div class="bar-chart" style="position: relative; width: 100%;" onmouseleave={on_leave} onfocusout={on_blur}>
            <svg
                viewBox={format!("0 0 {} {}", frame.width, frame.height)}
                style="display: block; width: 100%; height: auto;"
                role="img">
                <g class="grid">{for grid}</g>
                <g class="axis axis-left">
                    <line
                        x1={plot.left.to_string()}
                        x2={plot.left.to_string()}
                        y1={plot.top.to_string()}
                        y2={plot.bottom().to_string()}
                        stroke={colors.text_secondary}
                    />
                    {for ticks}
                    <text
                        x={left_caption_x.to_string()}
                        y={axis_mid.to_string()}
                        transform={format!("rotate(-90 {left_caption_x} {axis_mid})")}
                        text-anchor="middle"
                        fill={colors.text_secondary}>
                        {props.requests_label.clone()}
                    </text>
                </g>
                <g class="axis axis-right">
                    <text
                        x={right_caption_x.to_string()}
                        y={axis_mid.to_string()}
                        transform={format!("rotate(90 {right_caption_x} {axis_mid})")}
                        text-anchor="middle"
                        fill={colors.text_secondary}>
                        {props.bandwidth_label.clone()}
                    </text>
                </g>
                <line
                    x1={plot.left.to_string()}
                    x2={plot.right().to_string()}
                    y1={plot.bottom().to_string()}
                    y2={plot.bottom().to_string()}
                    stroke={colors.text_secondary}
                />
                <g class="bars">{for groups}</g>
            </svg>
            <CombinedTooltip
                active={hovered_index.is_some()}
                payload={hovered_country}
                colors={colors}
                requests_label={props.requests_label.clone()}
                bandwidth_label={props.bandwidth_label.clone()}
                format_number={props.format_number.clone()}
                format_bytes={props.format_bytes.clone()}
                position={tooltip_position}
            />
        </div>
    }
}

/// Bar with rounded top corners.
fn bar(rect: Rect, fill: &'static str) -> Html {
    if rect.height <= 0.0 {
        return html! {};
    }
    let r = BAR_RADIUS.min(rect.width / 2.0).min(rect.height);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let path = format!(
        "M{x},{bottom} L{x},{top_r} Q{x},{y} {x_r},{y} L{right_r},{y} Q{right},{y} {right},{top_r} L{right},{bottom} Z",
        bottom = y + h,
        top_r = y + r,
        x_r = x + r,
        right_r = x + w - r,
        right = x + w,
    );
    html! { <path class="bar" d={path} fill={fill} /> }
}

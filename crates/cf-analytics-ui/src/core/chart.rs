//! Geometry for the dual-axis country bar chart.
//!
//! Requests are drawn against the left axis and bytes against an independent
//! right axis, so both series fill the plot regardless of their units. All
//! coordinates are SVG user units inside a `viewBox` of the frame size.

use crate::core::aggregate::CountryAggregate;

/// Number of ticks on the requests axis (including zero).
pub const REQUEST_TICKS: u64 = 5;

/// Outer margins around the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

/// Fixed chart dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// `viewBox` width.
    pub width: f64,
    /// `viewBox` height.
    pub height: f64,
    /// Outer margins.
    pub margins: Margins,
    /// Width reserved for the left tick labels.
    pub left_axis: f64,
    /// Width reserved for the right axis caption.
    pub right_axis: f64,
    /// Height reserved for the rotated country labels.
    pub label_band: f64,
    /// Upper bound for a single bar's width.
    pub max_bar_width: f64,
    /// Gap between the two bars of a category.
    pub bar_gap: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 380.0,
            margins: Margins {
                top: 15.0,
                right: 30.0,
                bottom: 30.0,
                left: 20.0,
            },
            left_axis: 60.0,
            right_axis: 20.0,
            label_band: 80.0,
            max_bar_width: 60.0,
            bar_gap: 4.0,
        }
    }
}

/// Inner plotting rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl PlotArea {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (the zero line).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Tick on the requests axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value.
    pub value: u64,
    /// Vertical position.
    pub y: f64,
}

/// One category band with its two bars.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    /// Index into the charted slice.
    pub index: usize,
    /// Category band (full plot height), used as the hover target.
    pub band: Rect,
    /// Requests bar (left axis).
    pub requests: Rect,
    /// Bytes bar (right axis).
    pub bytes: Rect,
    /// Anchor for the rotated country label.
    pub label_x: f64,
}

/// Computed chart geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
    /// Frame used for the computation.
    pub frame: ChartFrame,
    /// Plotting rectangle.
    pub plot: PlotArea,
    /// Upper bound of the requests axis.
    pub requests_axis_max: u64,
    /// Upper bound of the bytes axis.
    pub bytes_axis_max: u64,
    /// Requests axis ticks, bottom to top.
    pub request_ticks: Vec<AxisTick>,
    /// One group per charted country.
    pub groups: Vec<BarGroup>,
}

impl BarChartLayout {
    /// Lay out `countries` inside `frame`.
    #[must_use]
    pub fn compute(countries: &[CountryAggregate], frame: &ChartFrame) -> Self {
        let m = frame.margins;
        let left = m.left + frame.left_axis;
        let top = m.top;
        let plot = PlotArea {
            left,
            top,
            width: (frame.width - m.right - frame.right_axis - left).max(0.0),
            height: (frame.height - m.bottom - frame.label_band - top).max(0.0),
        };

        let max_requests = countries.iter().map(|c| c.requests).max().unwrap_or(0);
        let max_bytes = countries.iter().map(|c| c.bytes).max().unwrap_or(0);
        let (requests_axis_max, request_step) = nice_axis(max_requests, REQUEST_TICKS);
        let (bytes_axis_max, _) = nice_axis(max_bytes, REQUEST_TICKS);

        let request_ticks = (0..=requests_axis_max / request_step)
            .map(|i| {
                let value = i * request_step;
                AxisTick {
                    value,
                    y: plot.bottom() - scaled(value, requests_axis_max, plot.height),
                }
            })
            .collect();

        let groups = if countries.is_empty() {
            Vec::new()
        } else {
            let band_width = plot.width / count_f64(countries.len());
            let bar_width = (band_width * 0.8 / 2.0 - frame.bar_gap / 2.0)
                .min(frame.max_bar_width)
                .max(0.0);
            countries
                .iter()
                .enumerate()
                .map(|(index, country)| {
                    let band_x = band_width.mul_add(count_f64(index), plot.left);
                    let start = band_x + (band_width - 2.0 * bar_width - frame.bar_gap) / 2.0;
                    let bar = |x: f64, value: u64, axis_max: u64| {
                        let height = scaled(value, axis_max, plot.height);
                        Rect {
                            x,
                            y: plot.bottom() - height,
                            width: bar_width,
                            height,
                        }
                    };
                    BarGroup {
                        index,
                        band: Rect {
                            x: band_x,
                            y: plot.top,
                            width: band_width,
                            height: plot.height,
                        },
                        requests: bar(start, country.requests, requests_axis_max),
                        bytes: bar(
                            start + bar_width + frame.bar_gap,
                            country.bytes,
                            bytes_axis_max,
                        ),
                        label_x: band_x + band_width / 2.0,
                    }
                })
                .collect()
        };

        Self {
            frame: *frame,
            plot,
            requests_axis_max,
            bytes_axis_max,
            request_ticks,
            groups,
        }
    }
}

/// Round `max` up to a readable axis bound; returns `(bound, step)`.
///
/// Steps are 1, 2 or 5 times a power of ten. A zero maximum yields `(1, 1)`.
#[must_use]
pub fn nice_axis(max: u64, ticks: u64) -> (u64, u64) {
    if max == 0 {
        return (1, 1);
    }
    let intervals = ticks.saturating_sub(1).max(1);
    let raw_step = max.div_ceil(intervals);
    let mut magnitude = 1u64;
    while magnitude <= raw_step / 10 {
        magnitude *= 10;
    }
    let step = [1u64, 2, 5, 10]
        .iter()
        .map(|factor| factor.saturating_mul(magnitude))
        .find(|step| *step >= raw_step)
        .unwrap_or(raw_step);
    (step.saturating_mul(intervals), step)
}

#[allow(clippy::cast_precision_loss)]
fn scaled(value: u64, axis_max: u64, extent: f64) -> f64 {
    if axis_max == 0 {
        0.0
    } else {
        (value as f64 / axis_max as f64).min(1.0) * extent
    }
}

#[allow(clippy::cast_precision_loss)]
const fn count_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, requests: u64, bytes: u64) -> CountryAggregate {
        CountryAggregate {
            country: name.to_string(),
            requests,
            bytes,
            threats: 0,
        }
    }

    #[test]
    fn nice_axis_rounds_to_readable_steps() {
        assert_eq!(nice_axis(0, 5), (1, 1));
        assert_eq!(nice_axis(3, 5), (4, 1));
        assert_eq!(nice_axis(150, 5), (200, 50));
        assert_eq!(nice_axis(1_000, 5), (2_000, 500));
        assert_eq!(nice_axis(37_000, 5), (40_000, 10_000));
    }

    #[test]
    fn bars_scale_against_their_own_axis() {
        let frame = ChartFrame::default();
        let layout = BarChartLayout::compute(
            &[country("US", 200, 10), country("DE", 100, 40)],
            &frame,
        );
        assert_eq!(layout.requests_axis_max, 200);
        assert_eq!(layout.bytes_axis_max, 40);
        let us = &layout.groups[0];
        let de = &layout.groups[1];
        assert!((us.requests.height - layout.plot.height).abs() < 1e-9);
        assert!((de.requests.height - layout.plot.height / 2.0).abs() < 1e-9);
        assert!((de.bytes.height - layout.plot.height).abs() < 1e-9);
        assert!((us.bytes.y + us.bytes.height - layout.plot.bottom()).abs() < 1e-9);
        assert!(us.bytes.x > us.requests.x);
        assert!(de.band.x >= us.band.x + us.band.width - 1e-9);
    }

    #[test]
    fn bar_width_is_capped() {
        let frame = ChartFrame::default();
        let layout = BarChartLayout::compute(&[country("US", 1, 1)], &frame);
        assert!((layout.groups[0].requests.width - frame.max_bar_width).abs() < 1e-9);
    }

    #[test]
    fn zero_series_produce_flat_bars() {
        let layout = BarChartLayout::compute(&[country("US", 0, 0)], &ChartFrame::default());
        assert_eq!(layout.requests_axis_max, 1);
        assert!(layout.groups[0].requests.height.abs() < f64::EPSILON);
        assert_eq!(layout.request_ticks.len(), 2);
    }

    #[test]
    fn ticks_run_bottom_to_top() {
        let layout = BarChartLayout::compute(&[country("US", 150, 1)], &ChartFrame::default());
        let values: Vec<u64> = layout.request_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 50, 100, 150, 200]);
        assert!((layout.request_ticks[0].y - layout.plot.bottom()).abs() < 1e-9);
        assert!((layout.request_ticks[4].y - layout.plot.top).abs() < 1e-9);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let layout = BarChartLayout::compute(&[], &ChartFrame::default());
        assert!(layout.groups.is_empty());
    }
}

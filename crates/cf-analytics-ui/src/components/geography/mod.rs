//! Geography statistics: dual-axis chart, map shading and ranked table over one summary.

mod bar_chart;
mod country_table;
mod tooltip;
mod view;
mod viewport;
mod world_map;

pub(crate) use view::GeographyStats;

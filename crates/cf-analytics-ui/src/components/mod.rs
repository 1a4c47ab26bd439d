//! Yew components for the dashboard.
pub(crate) mod atoms;
pub(crate) mod geography;

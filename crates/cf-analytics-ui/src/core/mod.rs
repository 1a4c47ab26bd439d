//! Core, DOM-free primitives and helpers for the Web UI.
pub mod aggregate;
pub mod breakpoints;
pub mod chart;
pub mod color;
pub mod format;
pub mod theme;

//! grouped-bar-chart: layout engine for grouped bar charts.
//!
//! Input is a list of periods, each holding points, each holding one or more
//! values. The crate computes a deterministic geometry for every bar (plus
//! axes, an optional trend line and tooltips) and hands it to a pluggable
//! `Renderer`. Layout math in [`core`] is renderer-agnostic; [`api`] wires it
//! to sizing, configuration and the render lifecycle.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, GroupedBarChart};
pub use error::{ChartError, ChartResult};

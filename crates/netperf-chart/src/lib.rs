// File: crates/netperf-chart/src/lib.rs
// Summary: Library entry point; exports the dataset, layout and rendering API.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod report;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{render, ChartRenderer, PlotFrame, RenderOptions};
pub use dataset::{Dataset, Measurements, Metric, Row};
pub use error::{ChartError, Result};
pub use layout::{format_value, group_offsets, Bar, ChartLayout};
pub use report::{default_groups, render_report, render_report_with, MetricGroup, ReportConfig};
pub use series::{default_series, SeriesKey, SeriesSpec};
pub use theme::Theme;

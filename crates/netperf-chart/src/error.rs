// File: crates/netperf-chart/src/error.rs
// Summary: Error type shared by dataset lookups, layout and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no dataset row for server {server:?} with client count {client_count}")]
    MissingRow { server: String, client_count: u32 },
    #[error("duplicate dataset row for server {server:?} with client count {client_count}")]
    DuplicateRow { server: String, client_count: u32 },
    #[error("unknown metric column {metric:?}")]
    MissingMetric { metric: String },
    #[error("series label {label:?} is not of the form <server>-<clientCount>")]
    InvalidSeriesLabel { label: String },
    #[error("unknown color name {name:?}")]
    UnknownColor { name: String },
    #[error("chart needs at least one metric and one series")]
    EmptyChart,
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

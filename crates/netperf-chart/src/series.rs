// File: crates/netperf-chart/src/series.rs
// Summary: Series labels (`<server>-<clientCount>`) and their display styling.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::palette;

/// Separator between server and client count in a series label.
pub const LABEL_SEPARATOR: char = '-';

/// The `(server, client_count)` pair a series label decodes to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    pub server: String,
    pub client_count: u32,
}

impl FromStr for SeriesKey {
    type Err = ChartError;

    fn from_str(label: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidSeriesLabel { label: label.to_string() };
        let mut parts = label.split(LABEL_SEPARATOR);
        let (server, count) = match (parts.next(), parts.next(), parts.next()) {
            (Some(s), Some(c), None) if !s.is_empty() => (s, c),
            _ => return Err(invalid()),
        };
        let client_count = count.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { server: server.to_string(), client_count })
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.server, LABEL_SEPARATOR, self.client_count)
    }
}

/// One legend entry: label plus the fill color used for all of its bars.
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub label: String,
    pub color: skia::Color,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), color }
    }

    /// Build from a CSS color name, e.g. `SeriesSpec::named("SA4-50", "skyblue")`.
    pub fn named(label: impl Into<String>, color: &str) -> Result<Self> {
        Ok(Self::new(label, palette::named(color)?))
    }

    pub fn key(&self) -> Result<SeriesKey> {
        self.label.parse()
    }
}

/// The four server/client configurations, in legend order.
pub fn default_series() -> Vec<SeriesSpec> {
    [
        ("SA4-50", (135, 206, 235)), // skyblue
        ("SA4-75", (0, 0, 128)),     // navy
        ("S8-50", (250, 128, 114)),  // salmon
        ("S8-75", (139, 0, 0)),      // darkred
    ]
    .into_iter()
    .map(|(label, (r, g, b))| SeriesSpec::new(label, skia::Color::from_rgb(r, g, b)))
    .collect()
}

// File: crates/netperf-chart/src/axis.rs
// Summary: Axis models: category axis (one slot per metric) and zero-based value axis.

use crate::grid::nice_ticks;

/// Headroom above the tallest bar so value labels and the legend fit.
const HEADROOM: f64 = 1.12;
const TARGET_TICKS: usize = 6;

/// Categorical x axis: slot `i` is centered on `i` and spans `i - 0.5 ..= i + 0.5`.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub label: String,
    pub tick_labels: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, tick_labels: Vec<String>) -> Self {
        Self { label: label.into(), tick_labels }
    }
    pub fn min(&self) -> f64 { -0.5 }
    pub fn max(&self) -> f64 { self.tick_labels.len() as f64 - 0.5 }
}

/// Linear value axis starting at zero.
#[derive(Clone, Debug)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ValueAxis {
    /// Zero-based axis whose last tick clears `data_max` with some headroom.
    pub fn fit(label: impl Into<String>, data_max: f64) -> Self {
        let ticks = nice_ticks(data_max * HEADROOM, TARGET_TICKS);
        let max = ticks.last().copied().unwrap_or(1.0);
        Self { label: label.into(), min: 0.0, max, ticks }
    }
}

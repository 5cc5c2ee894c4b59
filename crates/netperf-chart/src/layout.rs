// File: crates/netperf-chart/src/layout.rs
// Summary: Grouped bar layout: per-series offsets, bar heights from the dataset, value labels.
// Notes:
// - Everything here is in data space (x = metric slot, y = measured value).
//   Conversion to points happens in `chart.rs`.

use log::debug;
use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::dataset::{Dataset, Metric};
use crate::error::{ChartError, Result};
use crate::grid::linspace;
use crate::series::{SeriesKey, SeriesSpec};
use crate::types::GROUP_WIDTH;

/// Fraction of the tallest bar used to lift value labels off the bar top.
pub const LABEL_LIFT: f64 = 0.01;

pub const X_LABEL: &str = "Metric";
pub const Y_LABEL: &str = "Value";
pub const LEGEND_TITLE: &str = "Server-Client";

/// Offsets of `count` contiguous bars of equal width, centered on zero,
/// filling `total_width`.
pub fn group_offsets(count: usize, total_width: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let bar = total_width / count as f64;
    linspace(-total_width / 2.0 + bar / 2.0, total_width / 2.0 - bar / 2.0, count)
}

/// Value label text: shortest representation that round-trips, always with a
/// fractional part (`127.0`, `0.1`, `92.595`).
pub fn format_value(v: f64) -> String {
    format!("{v:?}")
}

#[derive(Clone, Debug)]
pub struct Bar {
    pub metric_index: usize,
    pub series_index: usize,
    /// Bar center on the category axis.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: skia::Color,
    pub label: String,
    /// Baseline of the value label, in data units.
    pub label_y: f64,
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Fully resolved chart geometry for one metric group.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub title: String,
    pub metrics: Vec<Metric>,
    pub base_positions: Vec<f64>,
    pub offsets: Vec<f64>,
    pub bar_width: f64,
    /// Metric-major: all series for metric 0, then metric 1, ...
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
    pub legend_title: String,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
}

impl ChartLayout {
    /// Resolve metrics and series against `dataset` and compute bar geometry.
    /// Fails before anything is drawn if a metric or series row is missing.
    pub fn build<S: AsRef<str>>(
        category: &str,
        metric_names: &[S],
        dataset: &Dataset,
        series: &[SeriesSpec],
    ) -> Result<Self> {
        let metrics = metric_names
            .iter()
            .map(|m| Metric::from_column(m.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if metrics.is_empty() || series.is_empty() {
            return Err(ChartError::EmptyChart);
        }

        let base_positions: Vec<f64> = (0..metrics.len()).map(|i| i as f64).collect();
        let offsets = group_offsets(series.len(), GROUP_WIDTH);
        let bar_width = GROUP_WIDTH / series.len() as f64;

        // values[series][metric]
        let mut values = Vec::with_capacity(series.len());
        for spec in series {
            let key: SeriesKey = spec.label.parse()?;
            let row = dataset.row(&key.server, key.client_count)?;
            values.push(metrics.iter().map(|&m| row.value(m)).collect::<Vec<f64>>());
        }

        // Lift is shared by every label in the chart: 1% of the tallest bar overall,
        // not of each series' own tallest bar as the earlier script computed it.
        let max_height = values
            .iter()
            .flatten()
            .copied()
            .fold(0.0f64, f64::max);
        let lift = max_height * LABEL_LIFT;

        let mut bars = Vec::with_capacity(metrics.len() * series.len());
        for (mi, &base) in base_positions.iter().enumerate() {
            for (si, spec) in series.iter().enumerate() {
                let height = values[si][mi];
                bars.push(Bar {
                    metric_index: mi,
                    series_index: si,
                    x: base + offsets[si],
                    width: bar_width,
                    height,
                    color: spec.color,
                    label: format_value(height),
                    label_y: height + lift,
                });
            }
        }

        let legend = series
            .iter()
            .map(|s| LegendEntry { label: s.label.clone(), color: s.color })
            .collect();
        let tick_labels = metrics.iter().map(|m| m.short_label()).collect();

        debug!(
            "layout {category}: {} metrics x {} series, bar width {bar_width:.3}, max {max_height}",
            metrics.len(),
            series.len()
        );

        Ok(Self {
            title: format!("{category} Performance Analysis"),
            metrics,
            base_positions,
            offsets,
            bar_width,
            bars,
            legend,
            legend_title: LEGEND_TITLE.to_string(),
            x_axis: CategoryAxis::new(X_LABEL, tick_labels),
            y_axis: ValueAxis::fit(Y_LABEL, max_height),
        })
    }

    /// Bar for a given series label and metric, if both are part of this chart.
    pub fn bar(&self, series_label: &str, metric: Metric) -> Option<&Bar> {
        let si = self.legend.iter().position(|l| l.label == series_label)?;
        let mi = self.metrics.iter().position(|&m| m == metric)?;
        self.bars.get(mi * self.legend.len() + si)
    }

    pub fn max_height(&self) -> f64 {
        self.bars.iter().map(|b| b.height).fold(0.0, f64::max)
    }
}

// File: crates/netperf-chart/src/report.rs
// Summary: Metric groups and the driver that renders one PNG per group.

use std::path::PathBuf;

use log::info;

use crate::chart::{ChartRenderer, RenderOptions};
use crate::dataset::{Dataset, Metric};
use crate::error::Result;
use crate::layout::ChartLayout;
use crate::series::{default_series, SeriesSpec};

/// A named set of related metric columns charted together.
#[derive(Clone, Debug)]
pub struct MetricGroup {
    pub name: String,
    pub metrics: Vec<Metric>,
}

impl MetricGroup {
    pub fn new(name: impl Into<String>, metrics: Vec<Metric>) -> Self {
        Self { name: name.into(), metrics }
    }

    pub fn file_name(&self) -> String {
        format!("{}_Performance_Analysis.png", self.name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.column_name()).collect()
    }
}

/// RTT, Input and Output groups. EMA columns are in the dataset but not charted.
pub fn default_groups() -> Vec<MetricGroup> {
    vec![
        MetricGroup::new(
            "RTT",
            vec![Metric::RttAverage, Metric::Rtt95thPercentile, Metric::RttMaximum, Metric::RttMinimum],
        ),
        MetricGroup::new("Input", vec![Metric::InputAverage, Metric::InputMaximum]),
        MetricGroup::new("Output", vec![Metric::OutputAverage, Metric::OutputMaximum]),
    ]
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub options: RenderOptions,
    pub groups: Vec<MetricGroup>,
    pub series: Vec<SeriesSpec>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            options: RenderOptions::default(),
            groups: default_groups(),
            series: default_series(),
        }
    }
}

/// Render every group in order, one file each. Stops at the first failure;
/// files already written for earlier groups are kept.
pub fn render_report(dataset: &Dataset, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    render_report_with(dataset, config, |_| {})
}

/// As `render_report`, calling `on_saved` after each file is written.
pub fn render_report_with<F>(dataset: &Dataset, config: &ReportConfig, mut on_saved: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&std::path::Path),
{
    let renderer = ChartRenderer::new(config.options.clone());
    let mut written = Vec::with_capacity(config.groups.len());
    for group in &config.groups {
        let layout = ChartLayout::build(&group.name, &group.column_names(), dataset, &config.series)?;
        let path = config.output_dir.join(group.file_name());
        renderer.render_to_png(&layout, &path)?;
        info!("{}: {} bars -> {}", layout.title, layout.bars.len(), path.display());
        on_saved(&path);
        written.push(path);
    }
    Ok(written)
}

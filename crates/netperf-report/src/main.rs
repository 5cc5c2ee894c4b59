// File: crates/netperf-report/src/main.rs
// Summary: Renders the RTT/Input/Output grouped bar charts for the embedded measurements.

use anyhow::{Context, Result};
use log::info;
use netperf_chart::{render_report_with, Dataset, ReportConfig};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let dataset = Dataset::builtin();
    let config = ReportConfig::default();
    info!(
        "rendering {} charts for {} rows into {}",
        config.groups.len(),
        dataset.rows().len(),
        config.output_dir.display()
    );

    render_report_with(&dataset, &config, |path| {
        let name = path.file_name().unwrap_or(path.as_os_str());
        println!("Chart saved: {}", name.to_string_lossy());
    })
    .context("failed to render performance charts")?;

    println!("All charts generated and saved.");
    Ok(())
}

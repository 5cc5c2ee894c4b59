// File: crates/netperf-chart/tests/layout.rs
// Purpose: Grouped bar geometry: bar counts, offsets, heights and ordering.

use netperf_chart::{default_groups, default_series, group_offsets, ChartLayout, Dataset, Metric, SeriesSpec};

fn build(category: &str, metrics: &[&str], series: &[SeriesSpec]) -> ChartLayout {
    ChartLayout::build(category, metrics, &Dataset::builtin(), series).expect("layout")
}

#[test]
fn bar_count_is_metrics_times_series() {
    let dataset = Dataset::builtin();
    let series = default_series();
    for group in default_groups() {
        let layout = ChartLayout::build(&group.name, &group.column_names(), &dataset, &series).expect("layout");
        assert_eq!(layout.bars.len(), group.metrics.len() * series.len(), "group {}", group.name);
    }
}

#[test]
fn offsets_are_symmetric_and_contiguous() {
    for k in 1..=6 {
        let offsets = group_offsets(k, 0.8);
        assert_eq!(offsets.len(), k);
        let sum: f64 = offsets.iter().sum();
        assert!(sum.abs() < 1e-12, "k={k} sum={sum}");
        for i in 0..k {
            assert!((offsets[i] + offsets[k - 1 - i]).abs() < 1e-12, "k={k} i={i}");
        }
        let w = 0.8 / k as f64;
        for pair in offsets.windows(2) {
            assert!((pair[1] - pair[0] - w).abs() < 1e-12, "bars must touch without overlap");
        }
        // outer edges span exactly the group width
        assert!((offsets[0] - w / 2.0 + 0.4).abs() < 1e-12);
        assert!((offsets[k - 1] + w / 2.0 - 0.4).abs() < 1e-12);
    }
    assert!(group_offsets(0, 0.8).is_empty());
    assert_eq!(group_offsets(1, 0.8), vec![0.0]);
}

#[test]
fn bar_positions_follow_base_plus_offset() {
    let layout = build("RTT", &["RTT_Average(ms)", "RTT_Maximum(ms)"], &default_series());
    assert_eq!(layout.base_positions, vec![0.0, 1.0]);
    assert!((layout.bar_width - 0.2).abs() < 1e-12);
    for bar in &layout.bars {
        let expected = layout.base_positions[bar.metric_index] + layout.offsets[bar.series_index];
        assert_eq!(bar.x, expected);
        assert_eq!(bar.width, layout.bar_width);
    }
}

#[test]
fn bar_height_matches_dataset_value() {
    let layout = build("RTT", &["RTT_Average(ms)", "RTT_95th_Percentile(ms)"], &default_series());
    let bar = layout.bar("S8-50", Metric::RttAverage).expect("bar");
    assert_eq!(bar.height, 92.595);
    assert_eq!(bar.label, "92.595");

    let dataset = Dataset::builtin();
    for spec in default_series() {
        let key = spec.key().expect("key");
        let row = dataset.row(&key.server, key.client_count).expect("row");
        for &metric in &layout.metrics {
            assert_eq!(layout.bar(&spec.label, metric).expect("bar").height, row.value(metric));
        }
    }
}

#[test]
fn input_average_heights_in_series_order() {
    let series = ["SA4-50", "SA4-75", "S8-50", "S8-75"]
        .into_iter()
        .map(|l| SeriesSpec::named(l, "gray").expect("color"))
        .collect::<Vec<_>>();
    let layout = build("Input", &["Input_Mb_Average", "Input_Mb_Maximum"], &series);

    let avg: Vec<f64> = layout.bars.iter().filter(|b| b.metric_index == 0).map(|b| b.height).collect();
    assert_eq!(avg, vec![0.085, 0.105, 0.085, 0.10]);
    let max: Vec<f64> = layout.bars.iter().filter(|b| b.metric_index == 1).map(|b| b.height).collect();
    assert_eq!(max, vec![0.19, 0.87, 0.17, 0.185]);
}

#[test]
fn reordering_series_moves_bars_but_keeps_values() {
    let forward = default_series();
    let mut reversed = forward.clone();
    reversed.reverse();
    let metrics = ["Output_Mb_Average", "Output_Mb_Maximum"];
    let a = build("Output", &metrics, &forward);
    let b = build("Output", &metrics, &reversed);

    for spec in &forward {
        for &metric in &a.metrics {
            let ba = a.bar(&spec.label, metric).expect("bar a");
            let bb = b.bar(&spec.label, metric).expect("bar b");
            assert_eq!(ba.height, bb.height);
            assert_eq!(ba.color, bb.color);
            // mirrored around the metric's base position
            let base = a.base_positions[ba.metric_index];
            assert!((ba.x - base + (bb.x - base)).abs() < 1e-12);
        }
    }
}

#[test]
fn value_labels_sit_above_bars_by_one_percent_of_tallest() {
    let layout = build("RTT", &["RTT_Average(ms)", "RTT_Maximum(ms)", "RTT_Minimum(ms)"], &default_series());
    let max = layout.max_height();
    assert_eq!(max, 128.0);
    for bar in &layout.bars {
        assert!((bar.label_y - (bar.height + max * 0.01)).abs() < 1e-9);
    }
    assert!(layout.y_axis.max >= max * 1.12);
    assert_eq!(layout.y_axis.min, 0.0);
}

#[test]
fn titles_ticks_and_legend() {
    let layout = build("RTT", &["RTT_Average(ms)", "RTT_95th_Percentile(ms)"], &default_series());
    assert_eq!(layout.title, "RTT Performance Analysis");
    assert_eq!(layout.x_axis.tick_labels, vec!["Average(ms)", "95th Percentile(ms)"]);
    let labels: Vec<&str> = layout.legend.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["SA4-50", "SA4-75", "S8-50", "S8-75"]);
}

// File: crates/netperf-chart/tests/dataset.rs
// Purpose: Embedded table contents, metric names and label formatting.

use std::collections::HashSet;

use netperf_chart::grid::{linspace, nice_ticks};
use netperf_chart::palette;
use netperf_chart::{default_series, format_value, Dataset, Metric, SeriesKey};
use strum::IntoEnumIterator;

#[test]
fn builtin_table_has_four_unique_rows() {
    let ds = Dataset::builtin();
    assert_eq!(ds.rows().len(), 4);
    let keys: HashSet<(String, u32)> = ds.rows().iter().map(|r| (r.server.clone(), r.client_count)).collect();
    assert_eq!(keys.len(), 4);
    // Re-validating through the checked constructor must succeed.
    Dataset::new(ds.rows().to_vec()).expect("builtin rows are unique");

    let sa4_75 = ds.row("SA4", 75).expect("row");
    assert_eq!(sa4_75.value(Metric::InputMaximum), 0.87);
    assert_eq!(sa4_75.value(Metric::InputEma), 0.0);
    assert_eq!(sa4_75.value(Metric::Rtt95thPercentile), 113.625);
}

#[test]
fn every_column_name_round_trips() {
    let names: Vec<&str> = Metric::iter().map(|m| m.column_name()).collect();
    assert_eq!(names.len(), 11);
    for m in Metric::iter() {
        assert_eq!(Metric::from_column(m.column_name()).expect("parse"), m);
        assert_eq!(m.to_string(), m.column_name());
    }
    assert!(Metric::from_column("rtt_average(ms)").is_err(), "column names are case sensitive");
}

#[test]
fn short_labels_stay_distinct() {
    let labels: HashSet<String> = Metric::iter().map(Metric::short_label).collect();
    assert_eq!(labels.len(), 11);
    assert_eq!(Metric::RttAverage.short_label(), "Average(ms)");
    assert_eq!(Metric::Rtt95thPercentile.short_label(), "95th Percentile(ms)");
    assert_eq!(Metric::InputAverage.short_label(), "Input Average");
    assert_eq!(Metric::OutputMaximum.short_label(), "Output Maximum");
}

#[test]
fn value_labels_use_shortest_round_trip_form() {
    assert_eq!(format_value(92.595), "92.595");
    assert_eq!(format_value(0.10), "0.1");
    assert_eq!(format_value(127.0), "127.0");
    assert_eq!(format_value(0.0), "0.0");
    assert_eq!(format_value(0.085), "0.085");
    assert_eq!(format_value(104.125), "104.125");
}

#[test]
fn series_keys_parse_and_display() {
    let key: SeriesKey = "SA4-75".parse().expect("parse");
    assert_eq!(key, SeriesKey { server: "SA4".into(), client_count: 75 });
    assert_eq!(key.to_string(), "SA4-75");
}

#[test]
fn spacing_helpers() {
    assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());

    let ticks = nice_ticks(143.36, 6);
    assert_eq!(ticks.first(), Some(&0.0));
    assert!(*ticks.last().expect("ticks") >= 143.36);
    assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0]);

    let small = nice_ticks(0.9744, 6);
    assert!(*small.last().expect("ticks") >= 0.9744);
    assert!(small.len() <= 8);
}

#[test]
fn default_series_use_the_named_colors() {
    let series = default_series();
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["SA4-50", "SA4-75", "S8-50", "S8-75"]);
    for (spec, name) in series.iter().zip(["skyblue", "navy", "salmon", "darkred"]) {
        assert_eq!(spec.color, palette::named(name).expect("known color"), "{}", spec.label);
    }
}

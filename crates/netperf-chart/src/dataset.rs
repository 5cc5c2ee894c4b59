// File: crates/netperf-chart/src/dataset.rs
// Summary: Typed in-memory measurement table (server, client count, per-metric values).

use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::error::{ChartError, Result};

/// Numeric measurement columns. Every row carries a value for each of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, EnumString)]
pub enum Metric {
    #[strum(serialize = "Input_Mb_Average")]
    InputAverage,
    #[strum(serialize = "Input_Mb_EMA")]
    InputEma,
    #[strum(serialize = "Input_Mb_Maximum")]
    InputMaximum,
    #[strum(serialize = "Output_Mb_Average")]
    OutputAverage,
    #[strum(serialize = "Output_Mb_EMA")]
    OutputEma,
    #[strum(serialize = "Output_Mb_Maximum")]
    OutputMaximum,
    #[strum(serialize = "RTT_95th_Percentile(ms)")]
    Rtt95thPercentile,
    #[strum(serialize = "RTT_Average(ms)")]
    RttAverage,
    #[strum(serialize = "RTT_EMA(ms)")]
    RttEma,
    #[strum(serialize = "RTT_Maximum(ms)")]
    RttMaximum,
    #[strum(serialize = "RTT_Minimum(ms)")]
    RttMinimum,
}

impl Metric {
    /// Column name as it appears in the measurement table header.
    pub fn column_name(self) -> &'static str {
        self.into()
    }

    /// Resolve a column name, failing with `MissingMetric` for anything else.
    pub fn from_column(name: &str) -> Result<Self> {
        Metric::from_str(name).map_err(|_| ChartError::MissingMetric { metric: name.to_string() })
    }

    /// Shortened axis label: drops the `RTT_`/`Mb_` prefixes and turns underscores into spaces.
    pub fn short_label(self) -> String {
        self.column_name()
            .replace("RTT_", "")
            .replace("Mb_", "")
            .replace("_ms)", ")")
            .replace('_', " ")
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One value per metric column. Throughput in Mb, round-trip times in ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub input_average: f64,
    pub input_ema: f64,
    pub input_maximum: f64,
    pub output_average: f64,
    pub output_ema: f64,
    pub output_maximum: f64,
    pub rtt_95th_percentile: f64,
    pub rtt_average: f64,
    pub rtt_ema: f64,
    pub rtt_maximum: f64,
    pub rtt_minimum: f64,
}

impl Measurements {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::InputAverage => self.input_average,
            Metric::InputEma => self.input_ema,
            Metric::InputMaximum => self.input_maximum,
            Metric::OutputAverage => self.output_average,
            Metric::OutputEma => self.output_ema,
            Metric::OutputMaximum => self.output_maximum,
            Metric::Rtt95thPercentile => self.rtt_95th_percentile,
            Metric::RttAverage => self.rtt_average,
            Metric::RttEma => self.rtt_ema,
            Metric::RttMaximum => self.rtt_maximum,
            Metric::RttMinimum => self.rtt_minimum,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub server: String,
    pub client_count: u32,
    pub values: Measurements,
}

impl Row {
    pub fn new(server: impl Into<String>, client_count: u32, values: Measurements) -> Self {
        Self { server: server.into(), client_count, values }
    }

    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        self.values.get(metric)
    }
}

/// Ordered rows, unique on `(server, client_count)`.
#[derive(Clone, Debug)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, rejecting repeated `(server, client_count)` pairs.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            let dup = rows[..i]
                .iter()
                .any(|r| r.server == row.server && r.client_count == row.client_count);
            if dup {
                return Err(ChartError::DuplicateRow {
                    server: row.server.clone(),
                    client_count: row.client_count,
                });
            }
        }
        Ok(Self { rows })
    }

    /// The measurement table the report is built from.
    pub fn builtin() -> Self {
        let rows = vec![
            Row::new("S8", 50, Measurements {
                input_average: 0.085,
                input_ema: 0.005,
                input_maximum: 0.17,
                output_average: 4.225,
                output_ema: 0.59,
                output_maximum: 18.545,
                rtt_95th_percentile: 96.5,
                rtt_average: 92.595,
                rtt_ema: 94.965,
                rtt_maximum: 125.5,
                rtt_minimum: 62.5,
            }),
            Row::new("S8", 75, Measurements {
                input_average: 0.10,
                input_ema: 0.01,
                input_maximum: 0.185,
                output_average: 6.385,
                output_ema: 0.65,
                output_maximum: 24.15,
                rtt_95th_percentile: 104.125,
                rtt_average: 90.48,
                rtt_ema: 93.865,
                rtt_maximum: 127.0,
                rtt_minimum: 61.0,
            }),
            Row::new("SA4", 50, Measurements {
                input_average: 0.085,
                input_ema: 0.005,
                input_maximum: 0.19,
                output_average: 4.33,
                output_ema: 0.09,
                output_maximum: 20.585,
                rtt_95th_percentile: 96.575,
                rtt_average: 84.465,
                rtt_ema: 88.4,
                rtt_maximum: 114.0,
                rtt_minimum: 53.0,
            }),
            Row::new("SA4", 75, Measurements {
                input_average: 0.105,
                input_ema: 0.0,
                input_maximum: 0.87,
                output_average: 6.48,
                output_ema: 0.02,
                output_maximum: 28.99,
                rtt_95th_percentile: 113.625,
                rtt_average: 92.62,
                rtt_ema: 81.1,
                rtt_maximum: 128.0,
                rtt_minimum: 48.0,
            }),
        ];
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Exact match on both fields.
    pub fn row(&self, server: &str, client_count: u32) -> Result<&Row> {
        self.rows
            .iter()
            .find(|r| r.server == server && r.client_count == client_count)
            .ok_or_else(|| ChartError::MissingRow { server: server.to_string(), client_count })
    }
}

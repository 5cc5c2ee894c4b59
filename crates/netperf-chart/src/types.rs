// File: crates/netperf-chart/src/types.rs
// Summary: Shared types and constants (figure size, resolution, paddings).

/// Default figure width in inches.
pub const WIDTH_IN: f32 = 12.0;
/// Default figure height in inches.
pub const HEIGHT_IN: f32 = 8.0;
/// Default output resolution.
pub const DPI: f32 = 300.0;
/// Drawing unit: all layout lengths and font sizes are in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Total width of one metric's bar group, in x-axis units (one unit per metric).
pub const GROUP_WIDTH: f64 = 0.8;

/// Figure margins around the plot panel, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
}

impl Default for Insets {
    // Bottom leaves room for 45° tick labels plus the axis title.
    fn default() -> Self {
        Self::new(64.0, 18.0, 40.0, 120.0)
    }
}

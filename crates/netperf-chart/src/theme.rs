// File: crates/netperf-chart/src/theme.rs
// Summary: Color themes for figure, panel, grid, text and legend.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub figure_background: skia::Color,
    pub panel_background: skia::Color,
    pub grid: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub value_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// Gray panel with white grid lines, in the style of R's ggplot2.
    pub fn ggplot() -> Self {
        Self {
            figure_background: skia::Color::from_argb(255, 255, 255, 255),
            panel_background: skia::Color::from_argb(255, 0xe5, 0xe5, 0xe5),
            grid: skia::Color::from_argb(255, 255, 255, 255),
            tick: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            tick_label: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            axis_label: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            title: skia::Color::from_argb(255, 0x1a, 0x1a, 0x1a),
            value_label: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 0xe5, 0xe5, 0xe5),
            legend_border: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
        }
    }

    /// White panel, light gray grid, dark text.
    pub fn classic() -> Self {
        Self {
            figure_background: skia::Color::from_argb(255, 255, 255, 255),
            panel_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            value_label: skia::Color::from_argb(255, 20, 20, 30),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ggplot()
    }
}

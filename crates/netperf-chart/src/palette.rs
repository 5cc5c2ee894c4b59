// File: crates/netperf-chart/src/palette.rs
// Summary: Named color lookup for series styling.

use skia_safe as skia;

use crate::error::{ChartError, Result};

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("skyblue", (135, 206, 235)),
    ("navy", (0, 0, 128)),
    ("salmon", (250, 128, 114)),
    ("darkred", (139, 0, 0)),
    ("steelblue", (70, 130, 180)),
    ("seagreen", (46, 139, 87)),
    ("darkorange", (255, 140, 0)),
    ("gray", (128, 128, 128)),
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
];

/// Look up a CSS color name (case-insensitive).
pub fn named(name: &str) -> Result<skia::Color> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, (r, g, b))| skia::Color::from_rgb(r, g, b))
        .ok_or_else(|| ChartError::UnknownColor { name: name.to_string() })
}

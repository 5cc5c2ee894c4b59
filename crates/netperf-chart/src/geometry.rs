// File: crates/netperf-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for point-space layout.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Area left inside a `width` x `height` box after removing `insets`.
    pub fn inset(width: f32, height: f32, insets: &Insets) -> Self {
        let right = (width - insets.right).max(insets.left + 1.0);
        let bottom = (height - insets.bottom).max(insets.top + 1.0);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

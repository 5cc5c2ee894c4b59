// File: crates/netperf-chart/src/scale.rs
// Summary: Data-to-point transforms for the x (category) and y (value) axes.

/// Maps a data interval linearly onto a pixel/point interval.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
    /// Length in points of a data-space span.
    #[inline]
    pub fn span_px(&self, dv: f64) -> f32 {
        (dv / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
}

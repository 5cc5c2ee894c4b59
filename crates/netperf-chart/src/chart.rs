// File: crates/netperf-chart/src/chart.rs
// Summary: Grouped bar chart renderer; headless PNG output through Skia CPU raster surfaces.

use std::path::Path;

use log::{debug, info, warn};
use skia_safe as skia;

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::layout::ChartLayout;
use crate::scale::LinearScale;
use crate::series::SeriesSpec;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, DPI, HEIGHT_IN, POINTS_PER_INCH, WIDTH_IN};

const TITLE_SIZE: f32 = 16.0;
const AXIS_LABEL_SIZE: f32 = 14.0;
const TICK_LABEL_SIZE: f32 = 12.0;
const VALUE_TICK_SIZE: f32 = 10.0;
const VALUE_LABEL_SIZE: f32 = 9.0;
const LEGEND_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 3.5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is font dependent; tests turn it off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_in: WIDTH_IN,
            height_in: HEIGHT_IN,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round().max(1.0) as i32,
            (self.height_in * self.dpi).round().max(1.0) as i32,
        )
    }

    /// Figure size in points, the unit all drawing uses.
    pub fn point_size(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Pixels per point.
    pub fn scale(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }
}

/// Panel rectangle and data-to-point transforms for one layout.
#[derive(Clone, Copy, Debug)]
pub struct PlotFrame {
    pub panel: RectF,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotFrame {
    /// Point-space rectangle covered by a bar of `width` centered at `x`, rising from zero to `height`.
    pub fn bar_rect(&self, x: f64, width: f64, height: f64) -> RectF {
        let half = self.x.span_px(width) * 0.5;
        let cx = self.x.to_px(x);
        let y0 = self.y.to_px(0.0);
        let y1 = self.y.to_px(height);
        RectF::from_ltrb(cx - half, y0.min(y1), cx + half, y0.max(y1))
    }
}

/// One raster surface per render call. Dropping it releases the pixels, so no
/// canvas state outlives the call that created it.
struct DrawingContext {
    surface: skia::Surface,
}

impl DrawingContext {
    fn new(opts: &RenderOptions) -> Result<Self> {
        let (width, height) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        let s = opts.scale();
        surface.canvas().scale((s, s));
        Ok(Self { surface })
    }

    fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    fn encode_png(mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

pub struct ChartRenderer {
    pub opts: RenderOptions,
    text: TextShaper,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    pub fn frame(&self, layout: &ChartLayout) -> PlotFrame {
        let (w, h) = self.opts.point_size();
        let panel = RectF::inset(w, h, &self.opts.insets);
        PlotFrame {
            panel,
            x: LinearScale::new(layout.x_axis.min(), layout.x_axis.max(), panel.left, panel.right),
            y: LinearScale::new(layout.y_axis.min, layout.y_axis.max, panel.bottom, panel.top),
        }
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, layout: &ChartLayout) -> Result<Vec<u8>> {
        let mut ctx = DrawingContext::new(&self.opts)?;
        let frame = self.frame(layout);
        let canvas = ctx.canvas();
        let theme = &self.opts.theme;

        canvas.clear(theme.figure_background);
        let mut panel = skia::Paint::default();
        panel.set_color(theme.panel_background);
        canvas.draw_rect(frame.panel.to_skia(), &panel);

        draw_grid(canvas, &frame, layout, theme);
        draw_bars(canvas, &frame, layout);

        if self.opts.draw_labels {
            self.draw_value_labels(canvas, &frame, layout);
            self.draw_axes(canvas, &frame, layout);
            self.draw_legend(canvas, &frame, layout);
        }

        ctx.encode_png()
    }

    /// Render to a PNG file at `output_png_path`. The image is fully encoded
    /// before the file is created; a failed write removes the partial file.
    pub fn render_to_png(&self, layout: &ChartLayout, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(layout)?;
        let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        if let Err(source) = std::fs::write(path, &bytes) {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    warn!("could not remove partial {}: {e}", path.display());
                }
            }
            return Err(io_err(source));
        }
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn draw_value_labels(&self, canvas: &skia::Canvas, frame: &PlotFrame, layout: &ChartLayout) {
        let color = self.opts.theme.value_label;
        for bar in &layout.bars {
            let anchor = (frame.x.to_px(bar.x), frame.y.to_px(bar.label_y));
            self.text
                .draw_aligned(canvas, &bar.label, anchor, VALUE_LABEL_SIZE, color, HAlign::Center, VAlign::Bottom);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, frame: &PlotFrame, layout: &ChartLayout) {
        let theme = &self.opts.theme;
        let p = &frame.panel;
        let (_, h) = self.opts.point_size();

        let mut tick = skia::Paint::default();
        tick.set_anti_alias(true);
        tick.set_color(theme.tick);
        tick.set_stroke_width(0.8);

        // Value axis: ticks and labels on the left edge.
        for &v in &layout.y_axis.ticks {
            let y = frame.y.to_px(v);
            canvas.draw_line((p.left - TICK_LEN, y), (p.left, y), &tick);
            let label = format_tick(v);
            self.text.draw_aligned(
                canvas,
                &label,
                (p.left - TICK_LEN - 2.0, y),
                VALUE_TICK_SIZE,
                theme.tick_label,
                HAlign::Right,
                VAlign::Middle,
            );
        }

        // Category axis: one tick per metric, labels rotated 45° and right-aligned to the tick.
        for (i, label) in layout.x_axis.tick_labels.iter().enumerate() {
            let x = frame.x.to_px(layout.base_positions[i]);
            canvas.draw_line((x, p.bottom), (x, p.bottom + TICK_LEN), &tick);
            self.text.draw_rotated(
                canvas,
                label,
                (x, p.bottom + TICK_LEN + 2.0),
                -45.0,
                TICK_LABEL_SIZE,
                theme.tick_label,
                HAlign::Right,
                VAlign::Top,
            );
        }

        let cx = (p.left + p.right) * 0.5;
        self.text.draw_aligned(
            canvas,
            &layout.title,
            (cx, p.top * 0.5),
            TITLE_SIZE,
            theme.title,
            HAlign::Center,
            VAlign::Middle,
        );
        self.text.draw_aligned(
            canvas,
            &layout.x_axis.label,
            (cx, h - 6.0),
            AXIS_LABEL_SIZE,
            theme.axis_label,
            HAlign::Center,
            VAlign::Bottom,
        );
        self.text.draw_rotated(
            canvas,
            &layout.y_axis.label,
            (6.0, (p.top + p.bottom) * 0.5),
            -90.0,
            AXIS_LABEL_SIZE,
            theme.axis_label,
            HAlign::Center,
            VAlign::Top,
        );
    }

    fn draw_legend(&self, canvas: &skia::Canvas, frame: &PlotFrame, layout: &ChartLayout) {
        if layout.legend.is_empty() {
            return;
        }
        let theme = &self.opts.theme;
        let row_h = LEGEND_SIZE * 1.5;
        let swatch = (LEGEND_SIZE * 1.6, LEGEND_SIZE * 0.7);
        let pad = LEGEND_SIZE * 0.5;

        let title_w = self.text.measure_width(&layout.legend_title, LEGEND_SIZE);
        let entries_w = layout
            .legend
            .iter()
            .map(|e| self.text.measure_width(&e.label, LEGEND_SIZE))
            .fold(0.0f32, f32::max)
            + swatch.0
            + pad;
        let box_w = title_w.max(entries_w) + pad * 2.0;
        let box_h = row_h * (layout.legend.len() as f32 + 1.0) + pad * 2.0;

        let right = frame.panel.right - pad;
        let top = frame.panel.top + pad;
        let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);
        let rrect = skia::RRect::new_rect_xy(rect, 3.0, 3.0);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_rrect(rrect, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(0.8);
        border.set_color(theme.legend_border);
        canvas.draw_rrect(rrect, &border);

        let mut y = top + pad + row_h * 0.5;
        self.text.draw_aligned(
            canvas,
            &layout.legend_title,
            (rect.center_x(), y),
            LEGEND_SIZE,
            theme.axis_label,
            HAlign::Center,
            VAlign::Middle,
        );

        let mut swatch_paint = skia::Paint::default();
        swatch_paint.set_anti_alias(true);
        let left = rect.left + pad;
        for entry in &layout.legend {
            y += row_h;
            swatch_paint.set_color(entry.color);
            let r = skia::Rect::from_ltrb(left, y - swatch.1 * 0.5, left + swatch.0, y + swatch.1 * 0.5);
            canvas.draw_rect(r, &swatch_paint);
            self.text.draw_aligned(
                canvas,
                &entry.label,
                (left + swatch.0 + pad, y),
                LEGEND_SIZE,
                theme.axis_label,
                HAlign::Left,
                VAlign::Middle,
            );
        }
    }
}

/// Build the layout for one metric group and write it to `output_path`.
/// Nothing is written if any metric or series row cannot be resolved.
pub fn render<S: AsRef<str>>(
    category: &str,
    metrics: &[S],
    dataset: &Dataset,
    series: &[SeriesSpec],
    output_path: impl AsRef<Path>,
    opts: &RenderOptions,
) -> Result<()> {
    let layout = ChartLayout::build(category, metrics, dataset, series)?;
    ChartRenderer::new(opts.clone()).render_to_png(&layout, output_path.as_ref())?;
    info!("rendered {} ({} bars)", layout.title, layout.bars.len());
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn draw_grid(canvas: &skia::Canvas, frame: &PlotFrame, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let p = &frame.panel;
    // horizontals at value ticks
    for &v in &layout.y_axis.ticks {
        let y = frame.y.to_px(v);
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }
    // verticals at metric slots
    for &x in &layout.base_positions {
        let x = frame.x.to_px(x);
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, frame: &PlotFrame, layout: &ChartLayout) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for bar in &layout.bars {
        body.set_color(bar.color);
        let r = frame.bar_rect(bar.x, bar.width, bar.height);
        canvas.draw_rect(r.to_skia(), &body);
    }
}

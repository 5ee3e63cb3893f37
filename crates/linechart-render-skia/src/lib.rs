// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for chart layouts; headless PNG output.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use linechart_core::{ChartLayout, Color, Renderer, Segment};

pub mod text;
pub mod theme;

pub use text::TextShaper;
pub use theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    pub font_size: f32,
    pub line_width: f32,
    pub draw_labels: bool,
    pub draw_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            font_size: 12.0,
            line_width: 2.0,
            draw_labels: true,
            draw_markers: true,
        }
    }
}

/// Rasterizes each frame it is handed and keeps the latest one as PNG bytes.
pub struct SkiaRenderer {
    options: RenderOptions,
    shaper: TextShaper,
    last_png: Option<Vec<u8>>,
}

impl SkiaRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, shaper: TextShaper::new(), last_png: None }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    /// PNG bytes of the most recent frame, if any.
    pub fn last_png(&self) -> Option<&[u8]> {
        self.last_png.as_deref()
    }

    /// Render `layout` into an in-memory PNG.
    pub fn render_to_png_bytes(&self, layout: &ChartLayout) -> Result<Vec<u8>> {
        let width = layout.viewport.width.round().max(1.0) as i32;
        let height = layout.viewport.height.round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.options.theme.background);

        self.draw_axes(canvas, layout);
        self.draw_series(canvas, layout);
        if self.options.draw_markers {
            self.draw_markers(canvas, layout);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(width, height, bytes = data.as_bytes().len(), "rasterized chart frame");
        Ok(data.as_bytes().to_vec())
    }

    /// Render `layout` to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, layout: &ChartLayout, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(layout)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_axes(&self, canvas: &skia::Canvas, layout: &ChartLayout) {
        let theme = &self.options.theme;
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        for axis in [&layout.x_axis, &layout.y_axis] {
            draw_segment(canvas, &axis.line, &axis_paint);
            for tick in &axis.ticks {
                draw_segment(canvas, tick, &tick_paint);
            }
            if self.options.draw_labels {
                for label in &axis.labels {
                    self.shaper.draw_anchored(
                        canvas,
                        &label.text,
                        (label.position.x as f32, label.position.y as f32),
                        label.anchor,
                        self.options.font_size,
                        theme.axis_label,
                    );
                }
            }
        }
    }

    // Paths arrive back-to-front, so drawing in order leaves the first series on top.
    fn draw_series(&self, canvas: &skia::Canvas, layout: &ChartLayout) {
        for series in &layout.series {
            let mut points = series.points.iter().filter(|p| p.is_finite());
            let Some(first) = points.next() else { continue };
            let mut path = skia::Path::new();
            path.move_to((first.x as f32, first.y as f32));
            for p in points {
                path.line_to((p.x as f32, p.y as f32));
            }

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(self.options.line_width);
            stroke.set_color(to_skia(series.color));
            canvas.draw_path(&path, &stroke);
        }
    }

    fn draw_markers(&self, canvas: &skia::Canvas, layout: &ChartLayout) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.0);
        outline.set_color(self.options.theme.marker_outline);

        for marker in &layout.markers {
            let radius = (marker.size / 2.0) as f32;
            let center = (marker.position.x as f32 + radius, marker.position.y as f32 + radius);
            fill.set_color(to_skia(marker.color));
            canvas.draw_circle(center, radius, &fill);
            canvas.draw_circle(center, radius, &outline);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer for SkiaRenderer {
    fn render(&mut self, layout: &ChartLayout) -> Result<()> {
        self.last_png = Some(self.render_to_png_bytes(layout)?);
        Ok(())
    }
}

fn draw_segment(canvas: &skia::Canvas, segment: &Segment, paint: &skia::Paint) {
    canvas.draw_line(
        (segment.start.x as f32, segment.start.y as f32),
        (segment.end.x as f32, segment.end.y as f32),
        paint,
    );
}

pub fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

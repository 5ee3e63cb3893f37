// File: crates/linechart-core/src/transform.rs
// Summary: Affine data-space -> pixel-space transform built from chart bounds and viewport geometry.

use crate::context::ChartContext;
use crate::geometry::{PixelPoint, Rect, Size};

/// Maps data coordinates into viewport pixels.
///
/// X grows to the right, Y is flipped so larger data values sit higher on
/// screen. The minimum corner of the data bounds lands on the plot
/// rectangle's bottom-left corner and the maximum on its top-right. A zero
/// domain (or range) collapses every x (or y) onto that bottom-left corner
/// instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    plot: Rect,
    x_scale: f64,
    y_scale: f64,
    x_offset: f64,
    y_offset: f64,
}

impl Transform {
    pub fn build(context: &ChartContext, viewport: Size, edge_margin: f64) -> Self {
        let plot_w = (viewport.width - 2.0 * edge_margin).max(0.0);
        let plot_h = (viewport.height - 2.0 * edge_margin).max(0.0);
        let plot = Rect::from_ltwh(edge_margin, edge_margin, plot_w, plot_h);

        let domain = context.domain();
        let range = context.range();

        let (x_scale, x_offset) = if domain > 0.0 {
            let scale = plot_w / domain;
            (scale, edge_margin - context.x_min() * scale)
        } else {
            (0.0, edge_margin)
        };
        let (y_scale, y_offset) = if range > 0.0 {
            let scale = -plot_h / range;
            (scale, edge_margin + plot_h - context.y_min() * scale)
        } else {
            (0.0, edge_margin + plot_h)
        };

        Self { plot, x_scale, y_scale, x_offset, y_offset }
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(x * self.x_scale + self.x_offset, y * self.y_scale + self.y_offset)
    }

    #[inline]
    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.x_scale + self.x_offset
    }

    #[inline]
    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.y_scale + self.y_offset
    }

    /// Where the axis lines cross: data `(0, 0)` clamped into the plot rectangle.
    pub fn origin(&self) -> PixelPoint {
        self.plot.clamp(self.apply(0.0, 0.0))
    }

    pub fn plot_rect(&self) -> Rect { self.plot }
    pub fn x_scale(&self) -> f64 { self.x_scale }
    pub fn y_scale(&self) -> f64 { self.y_scale }
    pub fn x_offset(&self) -> f64 { self.x_offset }
    pub fn y_offset(&self) -> f64 { self.y_offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: PixelPoint, b: PixelPoint) -> bool {
        a.approx_eq(&b, EPS)
    }

    fn build(points: &[(f64, f64)]) -> Transform {
        let ctx = ChartContext::from_coordinates(points.iter().copied());
        Transform::build(&ctx, Size::new(100.0, 100.0), 20.0)
    }

    #[test]
    fn maps_max_corner_to_top_right() {
        let t = build(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        assert!(close(t.apply(2.0, 4.0), PixelPoint::new(80.0, 20.0)));
        assert!(close(t.apply(0.0, 0.0), PixelPoint::new(20.0, 80.0)));
        assert_eq!(t.plot_rect(), Rect::from_ltrb(20.0, 20.0, 80.0, 80.0));
    }

    #[test]
    fn offsets_match_negative_minimum_form() {
        // For min <= 0: xOffset = |min| / domain * plotW + E, yOffset = plotH - |min| / range * plotH + E
        let t = build(&[(-3.0, -1.0), (1.0, 3.0)]);
        assert!((t.x_offset() - (3.0 / 4.0 * 60.0 + 20.0)).abs() < EPS);
        assert!((t.y_offset() - (60.0 - 1.0 / 4.0 * 60.0 + 20.0)).abs() < EPS);
        assert!(close(t.origin(), t.apply(0.0, 0.0)));
    }

    #[test]
    fn all_negative_x_puts_origin_past_the_plot() {
        let t = build(&[(-3.0, 1.0), (-1.0, 2.0)]);
        assert!(close(t.apply(-3.0, 1.0), PixelPoint::new(20.0, 80.0)));
        assert!(close(t.apply(-1.0, 2.0), PixelPoint::new(80.0, 20.0)));
        // x = 0 sits half a plot width beyond the right edge
        assert!((t.apply_x(0.0) - 110.0).abs() < EPS);
        assert!(!t.plot_rect().contains(t.apply(0.0, 1.5)));
        assert_eq!(t.origin().x, 80.0);
    }

    #[test]
    fn all_positive_minimum_stays_on_corner() {
        let t = build(&[(10.0, 100.0), (20.0, 300.0)]);
        assert!(close(t.apply(10.0, 100.0), PixelPoint::new(20.0, 80.0)));
        assert!(close(t.apply(20.0, 300.0), PixelPoint::new(80.0, 20.0)));
        assert!(close(t.origin(), PixelPoint::new(20.0, 80.0)));
    }

    #[test]
    fn degenerate_bounds_anchor_at_margin() {
        let t = build(&[(5.0, 5.0)]);
        assert_eq!(t.x_scale(), 0.0);
        assert_eq!(t.y_scale(), 0.0);
        assert!(close(t.apply(5.0, 5.0), PixelPoint::new(20.0, 80.0)));
    }

    #[test]
    fn empty_chart_is_finite() {
        let t = build(&[]);
        let p = t.apply(0.0, 0.0);
        assert!(p.is_finite());
        assert!(close(p, PixelPoint::new(20.0, 80.0)));
    }

    #[test]
    fn viewport_smaller_than_margins_collapses_plot() {
        let ctx = ChartContext::from_coordinates([(0.0, 0.0), (1.0, 1.0)]);
        let t = Transform::build(&ctx, Size::new(30.0, 30.0), 20.0);
        assert_eq!(t.plot_rect().width(), 0.0);
        assert!(t.apply(1.0, 1.0).is_finite());
    }
}

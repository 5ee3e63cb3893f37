// File: crates/linechart-core/src/layout.rs
// Summary: Geometric result of a layout pass (axis lines, ticks, labels, series paths, markers) and the per-axis layout.

use tracing::trace;

use crate::axis::{AxisContext, AxisKind, AxisPolicy};
use crate::geometry::{PixelPoint, Rect, Segment, Size};
use crate::sync::MarkerId;
use crate::transform::Transform;
use crate::types::{Color, LayoutOptions};
use crate::value::AxisValue;

/// Which point of the label's text box sits on `AxisLabel::position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Below an X tick: horizontally centered, text hanging down.
    TopCenter,
    /// Left of a Y tick: right-aligned, vertically centered.
    RightMiddle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub position: PixelPoint,
    pub text: String,
    pub anchor: LabelAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub kind: AxisKind,
    pub line: Segment,
    pub ticks: Vec<Segment>,
    pub labels: Vec<AxisLabel>,
}

/// One series' pixel polyline, stroked in the order given.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    /// Registration index of the series.
    pub index: usize,
    pub name: String,
    pub color: Color,
    pub points: Vec<PixelPoint>,
}

/// Marker state handed to the renderer; `changed` is set only when this pass moved it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFrame {
    pub id: MarkerId,
    /// Top-left corner of the marker box.
    pub position: PixelPoint,
    pub size: f64,
    pub color: Color,
    pub changed: bool,
}

/// Everything a rendering collaborator needs for one frame.
///
/// `series` is in reverse registration order so the first registered series
/// is stroked last (on top); `markers` stay in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub viewport: Size,
    pub plot_rect: Rect,
    pub origin: PixelPoint,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub series: Vec<SeriesPath>,
    pub markers: Vec<MarkerFrame>,
}

impl ChartLayout {
    /// Number of markers this pass actually moved.
    pub fn updated_markers(&self) -> usize {
        self.markers.iter().filter(|m| m.changed).count()
    }
}

/// Axis line, tick segments and labels for one axis.
///
/// X ticks hang below the X axis line, Y ticks extend left of the Y axis
/// line; each label sits `label_gap` past its tick's outer end.
pub fn layout_axis<T, P>(
    policy: &P,
    axis: &AxisContext<'_>,
    transform: &Transform,
    options: &LayoutOptions,
) -> AxisLayout
where
    T: AxisValue,
    P: AxisPolicy<T> + ?Sized,
{
    let plot = transform.plot_rect();
    let origin = transform.origin();
    let kind = axis.kind();
    let line = match kind {
        AxisKind::X => Segment::new(
            PixelPoint::new(plot.left, origin.y),
            PixelPoint::new(plot.right, origin.y),
        ),
        AxisKind::Y => Segment::new(
            PixelPoint::new(origin.x, plot.bottom),
            PixelPoint::new(origin.x, plot.top),
        ),
    };

    let count = policy.tick_count(axis);
    let mut ticks = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    let reach = options.tick_length;
    for index in 0..count {
        let value = policy.value_at(axis, index);
        let coordinate = policy.coordinate_of(&value);
        let (inner, outer, label_at, anchor) = match kind {
            AxisKind::X => {
                let px = transform.apply_x(coordinate);
                (
                    PixelPoint::new(px, origin.y),
                    PixelPoint::new(px, origin.y + reach),
                    PixelPoint::new(px, origin.y + reach + options.label_gap),
                    LabelAnchor::TopCenter,
                )
            }
            AxisKind::Y => {
                let py = transform.apply_y(coordinate);
                (
                    PixelPoint::new(origin.x, py),
                    PixelPoint::new(origin.x - reach, py),
                    PixelPoint::new(origin.x - reach - options.label_gap, py),
                    LabelAnchor::RightMiddle,
                )
            }
        };
        if !inner.is_finite() {
            trace!(axis = ?kind, index, coordinate, "skipping non-finite tick");
            continue;
        }
        if policy.should_draw_tick(axis, &value) {
            ticks.push(Segment::new(inner, outer));
        }
        if policy.should_draw_label(axis, &value) {
            labels.push(AxisLabel { position: label_at, text: policy.label_text(axis, &value), anchor });
        }
    }
    trace!(axis = ?kind, candidates = count, ticks = ticks.len(), labels = labels.len(), "axis layout");

    AxisLayout { kind, line, ticks, labels }
}

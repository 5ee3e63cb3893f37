// File: crates/linechart-core/src/axis.rs
// Summary: Axis policy capability (tick enumeration, coordinate mapping, visibility, labels) and its evaluation context.

use std::sync::Arc;

use crate::context::ChartContext;
use crate::value::AxisValue;

mod category;
mod date;
mod numeric;

pub use category::CategoryAxis;
pub use date::DateAxis;
pub use numeric::NumericAxis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

/// Everything a policy may consult during one layout pass for one axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisContext<'a> {
    kind: AxisKind,
    chart: &'a ChartContext,
    plot_length: f64,
}

impl<'a> AxisContext<'a> {
    pub fn new(kind: AxisKind, chart: &'a ChartContext, plot_length: f64) -> Self {
        Self { kind, chart, plot_length }
    }

    pub fn kind(&self) -> AxisKind { self.kind }
    pub fn chart(&self) -> &'a ChartContext { self.chart }

    /// Pixels available along this axis inside the plot rectangle.
    pub fn plot_length(&self) -> f64 { self.plot_length }

    /// `(min, max)` data coordinates of this axis.
    pub fn bounds(&self) -> (f64, f64) {
        match self.kind {
            AxisKind::X => (self.chart.x_min(), self.chart.x_max()),
            AxisKind::Y => (self.chart.y_min(), self.chart.y_max()),
        }
    }

    pub fn span(&self) -> f64 {
        match self.kind {
            AxisKind::X => self.chart.domain(),
            AxisKind::Y => self.chart.range(),
        }
    }

    /// Coordinate where the perpendicular axis line crosses this axis, when it
    /// lies inside the bounds. Always `0` for a linear layout.
    pub fn origin(&self) -> Option<f64> {
        let (min, max) = self.bounds();
        (min <= 0.0 && max >= 0.0).then_some(0.0)
    }

    /// True if `coordinate` is where the perpendicular axis line is drawn.
    pub fn is_origin(&self, coordinate: f64) -> bool {
        match self.origin() {
            Some(origin) => (coordinate - origin).abs() <= 1e-9 * self.span().max(1.0),
            None => false,
        }
    }
}

/// Tick/label provider for one axis whose values are of type `T`.
///
/// Implementations must be deterministic for a fixed [`AxisContext`]: the
/// layout pass calls `tick_count` once and then `value_at` for each index.
pub trait AxisPolicy<T: AxisValue>: Send + Sync {
    /// Number of candidate ticks for this pass.
    fn tick_count(&self, axis: &AxisContext<'_>) -> usize;

    /// Value of the `index`-th candidate tick, `index < tick_count`.
    fn value_at(&self, axis: &AxisContext<'_>, index: usize) -> T;

    /// Map a value into the coordinate basis the chart context is built in.
    fn coordinate_of(&self, value: &T) -> f64 {
        value.coordinate()
    }

    fn should_draw_tick(&self, _axis: &AxisContext<'_>, _value: &T) -> bool {
        true
    }

    fn should_draw_label(&self, _axis: &AxisContext<'_>, _value: &T) -> bool {
        true
    }

    fn label_text(&self, axis: &AxisContext<'_>, value: &T) -> String;
}

/// Formatter for numeric tick labels.
#[derive(Clone, Default)]
pub enum LabelFormatter {
    /// Decimal places derived from the tick step.
    #[default]
    Default,
    /// Custom formatter callback over the tick coordinate.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl LabelFormatter {
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "LabelFormatter::Default"),
            Self::Custom(_) => write!(f, "LabelFormatter::Custom(..)"),
        }
    }
}

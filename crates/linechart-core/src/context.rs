// File: crates/linechart-core/src/context.rs
// Summary: Chart context: data-space bounds aggregated over every loaded entry.

use crate::series::Entry;
use crate::value::AxisValue;

/// Min/max of every entry's x and y coordinates.
///
/// Empty input anchors all four bounds at `0`, giving a degenerate,
/// axis-only chart rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartContext {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    len: usize,
}

impl ChartContext {
    /// Aggregate bounds over entries whose values know their own coordinates.
    pub fn create<'a, Tx, Ty, I>(entries: I) -> Self
    where
        Tx: AxisValue + 'a,
        Ty: AxisValue + 'a,
        I: IntoIterator<Item = &'a Entry<Tx, Ty>>,
    {
        Self::from_coordinates(entries.into_iter().map(|e| (e.x.coordinate(), e.y.coordinate())))
    }

    /// Aggregate bounds over already-mapped `(x, y)` coordinates.
    pub fn from_coordinates<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut len = 0usize;
        for (x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            len += 1;
        }
        if len == 0 {
            return Self::default();
        }
        Self { x_min, x_max, y_min, y_max, len }
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }

    /// `x_max - x_min`; never negative.
    pub fn domain(&self) -> f64 { (self.x_max - self.x_min).max(0.0) }
    /// `y_max - y_min`; never negative.
    pub fn range(&self) -> f64 { (self.y_max - self.y_min).max(0.0) }

    /// Number of entries the bounds were computed from.
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn contains_x(&self, x: f64) -> bool { x >= self.x_min && x <= self.x_max }
    pub fn contains_y(&self, y: f64) -> bool { y >= self.y_min && y <= self.y_max }
}

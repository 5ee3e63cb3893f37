// File: crates/linechart-core/src/axis/numeric.rs
// Summary: Default numeric axis policy: nice-step ticks, origin suppression, step-derived labels.

use num_traits::Float;

use super::{AxisContext, AxisPolicy, LabelFormatter};
use crate::ticks::{format_tick, NiceTicks, DEFAULT_TARGET_TICKS, MAX_TARGET_TICKS};
use crate::value::AxisValue;

/// Policy for any floating point axis.
///
/// Ticks sit on `{1, 2, 5} x 10^n` multiples inside the axis bounds. When the
/// perpendicular axis line crosses inside the bounds, the tick and label at
/// that coordinate are both suppressed (the axis line already marks it).
#[derive(Clone, Debug)]
pub struct NumericAxis {
    target_ticks: usize,
    suppress_origin: bool,
    formatter: LabelFormatter,
}

impl NumericAxis {
    pub fn new() -> Self {
        Self {
            target_ticks: DEFAULT_TARGET_TICKS,
            suppress_origin: true,
            formatter: LabelFormatter::Default,
        }
    }

    /// Aim for about `target_ticks` ticks, clamped to [`MAX_TARGET_TICKS`].
    pub fn with_target_ticks(mut self, target_ticks: usize) -> Self {
        self.target_ticks = target_ticks.min(MAX_TARGET_TICKS);
        self
    }

    pub fn with_origin_suppression(mut self, suppress: bool) -> Self {
        self.suppress_origin = suppress;
        self
    }

    pub fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn target_ticks(&self) -> usize { self.target_ticks }

    fn ticks(&self, axis: &AxisContext<'_>) -> NiceTicks {
        let (min, max) = axis.bounds();
        NiceTicks::new(min, max, self.target_ticks)
    }

    fn visible(&self, axis: &AxisContext<'_>, coordinate: f64) -> bool {
        !(self.suppress_origin && axis.is_origin(coordinate))
    }
}

impl Default for NumericAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AxisPolicy<T> for NumericAxis
where
    T: Float + AxisValue + Send + Sync,
{
    fn tick_count(&self, axis: &AxisContext<'_>) -> usize {
        self.ticks(axis).len()
    }

    fn value_at(&self, axis: &AxisContext<'_>, index: usize) -> T {
        T::from(self.ticks(axis).value_at(index)).unwrap_or_else(T::zero)
    }

    fn should_draw_tick(&self, axis: &AxisContext<'_>, value: &T) -> bool {
        self.visible(axis, value.coordinate())
    }

    fn should_draw_label(&self, axis: &AxisContext<'_>, value: &T) -> bool {
        self.visible(axis, value.coordinate())
    }

    fn label_text(&self, axis: &AxisContext<'_>, value: &T) -> String {
        let coordinate = value.coordinate();
        match &self.formatter {
            LabelFormatter::Default => format_tick(coordinate, &self.ticks(axis)),
            LabelFormatter::Custom(format) => format(coordinate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisKind;
    use crate::context::ChartContext;

    fn values(policy: &NumericAxis, axis: &AxisContext<'_>) -> Vec<f64> {
        let n = AxisPolicy::<f64>::tick_count(policy, axis);
        (0..n).map(|i| AxisPolicy::<f64>::value_at(policy, axis, i)).collect()
    }

    #[test]
    fn origin_tick_and_label_suppressed_when_in_bounds() {
        let ctx = ChartContext::from_coordinates([(-2.0, -1.0), (2.0, 3.0)]);
        let policy = NumericAxis::new();
        for kind in [AxisKind::X, AxisKind::Y] {
            let axis = AxisContext::new(kind, &ctx, 200.0);
            assert!(!policy.should_draw_tick(&axis, &0.0f64));
            assert!(!policy.should_draw_label(&axis, &0.0f64));
            assert!(policy.should_draw_tick(&axis, &1.0f64));
        }
    }

    #[test]
    fn nothing_suppressed_when_origin_out_of_bounds() {
        let ctx = ChartContext::from_coordinates([(-3.0, 1.0), (-1.0, 2.0)]);
        let policy = NumericAxis::new();
        let axis = AxisContext::new(AxisKind::X, &ctx, 60.0);
        let ticks = values(&policy, &axis);
        assert!(!ticks.is_empty());
        for v in ticks {
            assert!(policy.should_draw_tick(&axis, &v));
            assert!(policy.should_draw_label(&axis, &v));
        }
    }

    #[test]
    fn suppression_can_be_disabled() {
        let ctx = ChartContext::from_coordinates([(0.0, 0.0), (4.0, 4.0)]);
        let policy = NumericAxis::new().with_origin_suppression(false);
        let axis = AxisContext::new(AxisKind::Y, &ctx, 60.0);
        assert!(policy.should_draw_tick(&axis, &0.0f64));
    }

    #[test]
    fn labels_use_step_decimals() {
        let ctx = ChartContext::from_coordinates([(0.0, 0.0), (2.0, 4.0)]);
        let policy = NumericAxis::new();
        let x = AxisContext::new(AxisKind::X, &ctx, 60.0);
        assert_eq!(values(&policy, &x), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(policy.label_text(&x, &1.5f64), "1.5");
        assert_eq!(policy.label_text(&x, &1.0f64), "1.0");
        let y = AxisContext::new(AxisKind::Y, &ctx, 60.0);
        assert_eq!(policy.label_text(&y, &3.0f64), "3");
    }

    #[test]
    fn oversized_target_is_clamped() {
        let ctx = ChartContext::from_coordinates([(0.0, 0.0), (1.0, 1.0)]);
        let policy = NumericAxis::new().with_target_ticks(1_000_000_000);
        assert_eq!(policy.target_ticks(), MAX_TARGET_TICKS);
        let x = AxisContext::new(AxisKind::X, &ctx, 60.0);
        // step 0.02 over [0, 1]
        assert_eq!(AxisPolicy::<f64>::tick_count(&policy, &x), 51);
    }

    #[test]
    fn custom_formatter_and_f32_values() {
        let ctx = ChartContext::from_coordinates([(0.0, 0.0), (100.0, 1.0)]);
        let policy = NumericAxis::new()
            .with_target_ticks(2)
            .with_formatter(LabelFormatter::custom(|v| format!("{v}%")));
        let x = AxisContext::new(AxisKind::X, &ctx, 60.0);
        assert_eq!(AxisPolicy::<f32>::tick_count(&policy, &x), 3);
        let v: f32 = policy.value_at(&x, 1);
        assert_eq!(v, 50.0);
        assert_eq!(policy.label_text(&x, &v), "50%");
    }
}

// File: crates/linechart-core/src/axis/category.rs
// Summary: Categorical axis policy over category indices.

use super::{AxisContext, AxisPolicy};

/// One tick per category index inside the bounds, labelled by name.
///
/// The tick mark at index 0 is dropped when the perpendicular axis line sits
/// there, but its label is kept so the first category stays named.
#[derive(Clone, Debug, Default)]
pub struct CategoryAxis {
    names: Vec<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn first_index(axis: &AxisContext<'_>) -> Option<(usize, usize)> {
        let (min, max) = axis.bounds();
        if !min.is_finite() || !max.is_finite() || max < 0.0 {
            return None;
        }
        let first = min.max(0.0).ceil();
        let last = max.floor();
        (last >= first).then(|| (first as usize, (last - first) as usize + 1))
    }
}

impl AxisPolicy<usize> for CategoryAxis {
    fn tick_count(&self, axis: &AxisContext<'_>) -> usize {
        Self::first_index(axis).map_or(0, |(_, count)| count)
    }

    fn value_at(&self, axis: &AxisContext<'_>, index: usize) -> usize {
        Self::first_index(axis).map_or(index, |(first, _)| first + index)
    }

    fn should_draw_tick(&self, axis: &AxisContext<'_>, value: &usize) -> bool {
        !axis.is_origin(*value as f64)
    }

    fn label_text(&self, _axis: &AxisContext<'_>, value: &usize) -> String {
        self.names.get(*value).cloned().unwrap_or_else(|| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisKind;
    use crate::context::ChartContext;

    #[test]
    fn one_tick_per_category() {
        let ctx = ChartContext::from_coordinates([(0.0, 3.0), (1.0, 5.0), (2.0, 4.0)]);
        let axis = AxisContext::new(AxisKind::X, &ctx, 300.0);
        let policy = CategoryAxis::new(["q1", "q2", "q3"]);
        assert_eq!(policy.tick_count(&axis), 3);
        let values: Vec<usize> = (0..3).map(|i| policy.value_at(&axis, i)).collect();
        assert_eq!(values, vec![0, 1, 2]);
        assert_eq!(policy.label_text(&axis, &1), "q2");
    }

    #[test]
    fn origin_drops_tick_but_keeps_label() {
        let ctx = ChartContext::from_coordinates([(0.0, 1.0), (2.0, 2.0)]);
        let axis = AxisContext::new(AxisKind::X, &ctx, 300.0);
        let policy = CategoryAxis::new(["a", "b", "c"]);
        assert!(!policy.should_draw_tick(&axis, &0));
        assert!(policy.should_draw_label(&axis, &0));
        assert!(policy.should_draw_tick(&axis, &1));
    }

    #[test]
    fn unnamed_indices_fall_back_to_numbers() {
        let ctx = ChartContext::from_coordinates([(3.0, 1.0), (4.0, 1.0)]);
        let axis = AxisContext::new(AxisKind::X, &ctx, 300.0);
        let policy = CategoryAxis::new(["only"]);
        assert_eq!(policy.value_at(&axis, 0), 3);
        assert_eq!(policy.label_text(&axis, &4), "4");
    }
}

// File: crates/linechart-core/src/axis/date.rs
// Summary: Calendar-date axis policy: day-step ticks and strftime labels.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tracing::trace;

use super::{AxisContext, AxisPolicy};
use crate::error::{ChartError, ChartResult};
use crate::ticks::{nice_step, NiceTicks, DEFAULT_TARGET_TICKS, MAX_TARGET_TICKS};
use crate::value::date_from_coordinate;

/// Candidate tick steps, in days, for spans up to a few years.
const DAY_STEPS: [f64; 9] = [1.0, 2.0, 7.0, 14.0, 30.0, 61.0, 91.0, 182.0, 365.0];
const DAYS_PER_YEAR: f64 = 365.0;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Policy for `NaiveDate` axes. Coordinates are days since 1970-01-01.
///
/// Ticks are whole multiples of the day step counted from 1970-01-01, not
/// calendar boundaries: weekly ticks fall on Thursdays, and the 30/61/91/182/365
/// day steps do not line up with month or year starts.
///
/// There is no meaningful origin for dates, so nothing is suppressed.
#[derive(Clone, Debug)]
pub struct DateAxis {
    target_ticks: usize,
    format: String,
}

impl DateAxis {
    pub fn new() -> Self {
        Self { target_ticks: DEFAULT_TARGET_TICKS, format: DEFAULT_DATE_FORMAT.to_string() }
    }

    /// Use a `strftime` pattern for labels; rejects patterns chrono cannot parse.
    pub fn with_format(mut self, format: impl Into<String>) -> ChartResult<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidConfiguration(format!("invalid date format {format:?}")));
        }
        self.format = format;
        Ok(self)
    }

    /// Aim for about `target_ticks` ticks, clamped to [`MAX_TARGET_TICKS`].
    pub fn with_target_ticks(mut self, target_ticks: usize) -> Self {
        self.target_ticks = target_ticks.min(MAX_TARGET_TICKS);
        self
    }

    fn ticks(&self, axis: &AxisContext<'_>) -> NiceTicks {
        let (min, max) = axis.bounds();
        match day_step(max - min, self.target_ticks) {
            Some(step) => NiceTicks::with_step(min, max, step),
            None if max == min => NiceTicks::with_step(min, max, 1.0),
            None => NiceTicks::empty(),
        }
    }
}

impl Default for DateAxis {
    fn default() -> Self {
        Self::new()
    }
}

/// Closest calendar-ish step to `span / target`; whole years (of 365 days) past one year.
fn day_step(span: f64, target: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return None;
    }
    let ideal = span / target.min(MAX_TARGET_TICKS) as f64;
    if ideal > DAYS_PER_YEAR {
        let years = nice_step(span / DAYS_PER_YEAR, target)?.max(1.0).round();
        return Some(years * DAYS_PER_YEAR);
    }
    let mut best = DAY_STEPS[0];
    for candidate in DAY_STEPS.iter().copied().skip(1) {
        if (candidate - ideal).abs() <= (best - ideal).abs() {
            best = candidate;
        }
    }
    Some(best)
}

impl AxisPolicy<NaiveDate> for DateAxis {
    fn tick_count(&self, axis: &AxisContext<'_>) -> usize {
        self.ticks(axis).len()
    }

    /// Coordinates outside chrono's date range come back as `NaiveDate::MIN`.
    fn value_at(&self, axis: &AxisContext<'_>, index: usize) -> NaiveDate {
        let coordinate = self.ticks(axis).value_at(index);
        date_from_coordinate(coordinate).unwrap_or_else(|| {
            trace!(index, coordinate, "date tick outside representable range");
            NaiveDate::MIN
        })
    }

    fn label_text(&self, _axis: &AxisContext<'_>, value: &NaiveDate) -> String {
        value.format(&self.format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use crate::axis::AxisKind;
    use crate::context::ChartContext;
    use crate::series::Entry;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_ticks_over_a_month() {
        let entries = [Entry::new(day(2024, 1, 1), 1.0), Entry::new(day(2024, 2, 5), 2.0)];
        let ctx = ChartContext::create(&entries);
        let axis = AxisContext::new(AxisKind::X, &ctx, 400.0);
        let policy = DateAxis::new();
        let n = policy.tick_count(&axis);
        assert!(n >= 4, "expected weekly ticks, got {n}");
        let dates: Vec<NaiveDate> = (0..n).map(|i| policy.value_at(&axis, i)).collect();
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
        assert!(dates.iter().all(|d| *d >= day(2024, 1, 1) && *d <= day(2024, 2, 5)));
    }

    #[test]
    fn weekly_ticks_count_from_the_epoch() {
        let entries = [Entry::new(day(2024, 1, 1), 1.0), Entry::new(day(2024, 2, 5), 2.0)];
        let ctx = ChartContext::create(&entries);
        let axis = AxisContext::new(AxisKind::X, &ctx, 400.0);
        let policy = DateAxis::new();
        let n = policy.tick_count(&axis);
        // 1970-01-01 was a Thursday
        assert!((0..n).all(|i| policy.value_at(&axis, i).weekday() == Weekday::Thu));
    }

    #[test]
    fn unrepresentable_coordinates_fall_back_to_min_date() {
        let ctx = ChartContext::from_coordinates([(1e12, 0.0), (1e12, 1.0)]);
        let axis = AxisContext::new(AxisKind::X, &ctx, 100.0);
        let policy = DateAxis::new();
        assert_eq!(policy.tick_count(&axis), 1);
        assert_eq!(policy.value_at(&axis, 0), NaiveDate::MIN);
    }

    #[test]
    fn huge_target_is_clamped() {
        assert_eq!(DateAxis::new().with_target_ticks(usize::MAX).target_ticks, MAX_TARGET_TICKS);
        assert_eq!(day_step(3650.0, usize::MAX), day_step(3650.0, MAX_TARGET_TICKS));
    }

    #[test]
    fn labels_follow_format() {
        let entries = [Entry::new(day(2024, 3, 9), 0.0)];
        let ctx = ChartContext::create(&entries);
        let axis = AxisContext::new(AxisKind::X, &ctx, 100.0);
        let policy = DateAxis::new().with_format("%d/%m").unwrap();
        assert_eq!(policy.tick_count(&axis), 1);
        let only = policy.value_at(&axis, 0);
        assert_eq!(only, day(2024, 3, 9));
        assert_eq!(policy.label_text(&axis, &only), "09/03");
        assert!(policy.should_draw_tick(&axis, &only));
    }

    #[test]
    fn bad_format_fails_fast() {
        let err = DateAxis::new().with_format("%Q%").unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfiguration(_)));
    }

    #[test]
    fn long_spans_use_whole_years() {
        assert_eq!(day_step(3650.0, 5), Some(2.0 * 365.0));
        assert_eq!(day_step(10.0, 5), Some(2.0));
    }
}

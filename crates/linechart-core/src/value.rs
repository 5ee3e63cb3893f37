// File: crates/linechart-core/src/value.rs
// Summary: Mapping of axis value types (numbers, dates, category indices) onto real coordinates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A value that can sit on a chart axis.
///
/// `coordinate` must be finite for every value a chart is fed, and must be
/// monotonic with the type's ordering so bounds and tick order agree.
pub trait AxisValue: Clone + PartialOrd {
    fn coordinate(&self) -> f64;
}

macro_rules! impl_numeric_axis_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl AxisValue for $t {
                #[inline]
                fn coordinate(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_axis_value!(f32, f64, i32, i64, u32, usize);

/// Days since the Unix epoch.
impl AxisValue for NaiveDate {
    fn coordinate(&self) -> f64 {
        f64::from(self.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

/// Seconds since the Unix epoch, millisecond resolution.
impl AxisValue for NaiveDateTime {
    fn coordinate(&self) -> f64 {
        self.and_utc().timestamp_millis() as f64 / 1000.0
    }
}

/// Seconds since the Unix epoch, millisecond resolution.
impl AxisValue for DateTime<Utc> {
    fn coordinate(&self) -> f64 {
        self.timestamp_millis() as f64 / 1000.0
    }
}

/// Inverse of the `NaiveDate` coordinate; `None` outside chrono's representable range.
pub(crate) fn date_from_coordinate(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let days = days.round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    (days as i32)
        .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

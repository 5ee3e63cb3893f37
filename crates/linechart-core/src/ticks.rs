// File: crates/linechart-core/src/ticks.rs
// Summary: "Nice" tick step selection ({1, 2, 5} x 10^n) and tick enumeration over a span.

/// Default number of ticks the nice-step search aims for.
pub const DEFAULT_TARGET_TICKS: usize = 5;

/// Largest tick target honored; larger targets are clamped to this.
pub const MAX_TARGET_TICKS: usize = 64;

/// Hard cap on ticks enumerated over one span, whatever the step.
pub const MAX_TICK_COUNT: usize = 1024;

/// Relative tolerance (in units of the step) for boundary and zero snapping.
const STEP_TOLERANCE: f64 = 1e-9;

/// Pick the step from `{1, 2, 5, 10} x 10^floor(log10(span / target))`
/// closest to `span / target`. Ties go to the larger step.
///
/// Returns `None` for a non-finite or non-positive span, or a zero target.
/// Targets above [`MAX_TARGET_TICKS`] are clamped.
pub fn nice_step(span: f64, target: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return None;
    }
    let ideal = span / target.min(MAX_TARGET_TICKS) as f64;
    let base = 10f64.powf(ideal.log10().floor());
    if !base.is_finite() || base <= 0.0 {
        return None;
    }
    let mut best = base;
    for multiple in [2.0, 5.0, 10.0] {
        let candidate = base * multiple;
        // candidates ascend, so `<=` hands ties to the larger one
        if (candidate - ideal).abs() <= (best - ideal).abs() {
            best = candidate;
        }
    }
    Some(best)
}

/// Evenly spaced ticks at multiples of a nice step inside `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceTicks {
    first: f64,
    step: f64,
    count: usize,
}

impl NiceTicks {
    pub fn new(min: f64, max: f64, target: usize) -> Self {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Self::empty();
        }
        if max == min {
            return Self { first: min, step: 0.0, count: 1 };
        }
        match nice_step(max - min, target) {
            Some(step) => Self::with_step(min, max, step),
            None => Self::empty(),
        }
    }

    /// Ticks at every multiple of a caller-chosen `step` inside `[min, max]`,
    /// truncated to the first [`MAX_TICK_COUNT`].
    pub fn with_step(min: f64, max: f64, step: f64) -> Self {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Self::empty();
        }
        if max == min {
            return Self { first: min, step: 0.0, count: 1 };
        }
        if !step.is_finite() || step <= 0.0 {
            return Self::empty();
        }
        let first = (min / step - STEP_TOLERANCE).ceil() * step;
        let steps = ((max - first) / step + STEP_TOLERANCE).floor();
        if steps < 0.0 {
            return Self::empty();
        }
        let count = (steps.min((MAX_TICK_COUNT - 1) as f64) as usize).saturating_add(1);
        Self { first, step, count }
    }

    pub const fn empty() -> Self {
        Self { first: 0.0, step: 0.0, count: 0 }
    }

    pub fn len(&self) -> usize { self.count }
    pub fn is_empty(&self) -> bool { self.count == 0 }
    pub fn step(&self) -> f64 { self.step }

    /// Tick value at `index`; values within tolerance of zero come back as exactly `0.0`.
    pub fn value_at(&self, index: usize) -> f64 {
        let value = self.first + self.step * index as f64;
        if value.abs() <= self.step * STEP_TOLERANCE {
            0.0
        } else {
            value
        }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.value_at(i))
    }

    /// Decimal places needed to print every tick distinctly, or `None` for a zero step.
    pub fn decimals(&self) -> Option<usize> {
        if self.step <= 0.0 {
            return None;
        }
        let exp = self.step.log10().floor();
        Some(if exp < 0.0 { (-exp) as usize } else { 0 })
    }
}

/// Format `value` with the decimals implied by `ticks`, or its shortest form for a single tick.
pub fn format_tick(value: f64, ticks: &NiceTicks) -> String {
    match ticks.decimals() {
        Some(decimals) => format!("{value:.decimals$}"),
        None => format!("{value}"),
    }
}

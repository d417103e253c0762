//! Axis domains: declared bounds and their resolution against data.
//!
//! A chart declares each axis as an [`AxisDomain`] of two [`AxisBound`]s.
//! `Auto` bounds are only turned into numbers when the chart is laid out,
//! by [`AxisDomain::resolve`], which also picks evenly spaced "nice" ticks.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of intervals aimed for when choosing a tick step.
pub const TICK_COUNT: usize = 5;

/// Upper limit on generated ticks; beyond it only the bounds are ticked.
pub const MAX_TICKS: usize = 1000;

/// One end of an axis domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisBound {
    /// Derived from the data
    Auto,
    /// Fixed value
    Value(f64),
}

impl AxisBound {
    /// Fixed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Whether this bound follows the data.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Declared lower and upper bound of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    /// Lower bound
    pub min: AxisBound,
    /// Upper bound
    pub max: AxisBound,
}

/// Compute the declared domain of one axis.
///
/// An explicit minimum always wins. Without one the axis starts at zero
/// unless `auto_enabled`, in which case it follows the data. The maximum is
/// explicit or automatic.
#[must_use]
pub fn compute_domain(
    auto_enabled: bool,
    explicit_min: Option<f64>,
    explicit_max: Option<f64>,
) -> AxisDomain {
    let min = match explicit_min {
        Some(v) => AxisBound::Value(v),
        None if auto_enabled => AxisBound::Auto,
        None => AxisBound::Value(0.0),
    };
    let max = explicit_max.map_or(AxisBound::Auto, AxisBound::Value);
    AxisDomain { min, max }
}

/// A domain with concrete bounds and tick positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDomain {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Tick values inside `[min, max]`, ascending
    pub ticks: Vec<f64>,
}

impl ResolvedDomain {
    /// Domain whose only ticks are its finite bounds.
    fn bounds_only(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ticks: bounds_ticks(min, max),
        }
    }

    /// `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map `value` linearly onto `[start, end]`.
    ///
    /// Values outside the domain map outside the range; clipping is the
    /// painter's job. A zero-width domain maps everything to the middle.
    #[must_use]
    pub fn scale(&self, value: f64, start: f32, end: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() {
            return (start + end) / 2.0;
        }
        let t = ((value - self.min) / span) as f32;
        (end - start).mul_add(t, start)
    }
}

impl AxisDomain {
    /// Resolve `Auto` bounds against the data extent.
    ///
    /// Auto bounds snap outward to the tick step. Without data they default
    /// to `[0, 1]`. A collapsed range is widened on its automatic side(s).
    ///
    /// Two fixed bounds that do not form a range are kept as given, with a
    /// single tick at the minimum and a warning. This includes the implicit
    /// zero baseline paired with a negative explicit maximum, which resolves
    /// to `min = 0, max < 0`.
    ///
    /// A span too wide to represent (infinite or NaN bounds, or bounds whose
    /// difference overflows) is not subdivided: the finite bounds become the
    /// only ticks.
    #[must_use]
    pub fn resolve(&self, extent: Option<(f64, f64)>, allow_decimals: bool) -> ResolvedDomain {
        let (data_lo, data_hi) = extent.unwrap_or((0.0, 1.0));
        let mut lo = self.min.value().unwrap_or(data_lo);
        let mut hi = self.max.value().unwrap_or(data_hi);

        if hi <= lo {
            match (self.min.is_auto(), self.max.is_auto()) {
                (true, true) => {
                    lo -= 1.0;
                    hi += 1.0;
                }
                (false, true) => hi = lo + 1.0,
                (true, false) => lo = hi - 1.0,
                (false, false) => {}
            }
        }

        if hi <= lo {
            warn!(min = lo, max = hi, "fixed axis bounds do not form a range");
            return ResolvedDomain {
                min: lo,
                max: hi,
                ticks: if lo.is_finite() { vec![lo] } else { Vec::new() },
            };
        }
        if !(hi - lo).is_finite() {
            warn!(min = lo, max = hi, "axis span is not finite, ticking bounds only");
            return ResolvedDomain::bounds_only(lo, hi);
        }

        let step = nice_step(hi - lo, TICK_COUNT, allow_decimals);
        if self.min.is_auto() {
            lo = snap(lo, step, f64::floor);
        }
        if self.max.is_auto() {
            hi = snap(hi, step, f64::ceil);
        }
        if !(hi - lo).is_finite() {
            warn!(min = lo, max = hi, "snapped axis span is not finite, ticking bounds only");
            return ResolvedDomain::bounds_only(lo, hi);
        }

        ResolvedDomain {
            min: lo,
            max: hi,
            ticks: ticks_between(lo, hi, step),
        }
    }
}

/// Step of roughly `span / count`, rounded to 1, 2 or 5 × 10ⁿ.
#[must_use]
pub fn nice_step(span: f64, count: usize, allow_decimals: bool) -> f64 {
    let raw = span / count.max(1) as f64;
    let step = if raw > 0.0 && raw.is_finite() {
        let power = 10f64.powf(raw.log10().floor());
        let error = raw / power;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        factor * power
    } else {
        1.0
    };
    if allow_decimals {
        step
    } else {
        step.ceil().max(1.0)
    }
}

fn snap(value: f64, step: f64, round: fn(f64) -> f64) -> f64 {
    // tolerate float noise so 0.30000000000000004 stays on 0.3
    let q = value / step;
    let nearest = q.round();
    let units = if (q - nearest).abs() < 1e-9 {
        nearest
    } else {
        round(q)
    };
    clean(units * step, step)
}

fn bounds_ticks(lo: f64, hi: f64) -> Vec<f64> {
    [lo, hi].into_iter().filter(|v| v.is_finite()).collect()
}

fn ticks_between(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = snap(lo, step, f64::ceil);
    let count = ((hi - first) / step + 1e-9).floor();
    if !count.is_finite() || count >= MAX_TICKS as f64 {
        return bounds_ticks(lo, hi);
    }
    if count < 0.0 {
        return Vec::new();
    }
    (0..=count as usize)
        .map(|i| clean((i as f64).mul_add(step, first), step))
        .collect()
}

/// Round to the number of decimals the step can express.
fn clean(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).clamp(0.0, 12.0) as i32;
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== compute_domain Tests =====

    #[test]
    fn test_non_auto_baseline_is_zero() {
        let d = compute_domain(false, None, None);
        assert_eq!(d.min, AxisBound::Value(0.0));
        assert_eq!(d.max, AxisBound::Auto);
    }

    #[test]
    fn test_auto_min() {
        let d = compute_domain(true, None, None);
        assert_eq!(d.min, AxisBound::Auto);
        assert_eq!(d.max, AxisBound::Auto);
    }

    #[test]
    fn test_explicit_min_wins_over_auto() {
        let d = compute_domain(true, Some(5.0), None);
        assert_eq!(d.min, AxisBound::Value(5.0));
        assert_eq!(d.max, AxisBound::Auto);
    }

    #[test]
    fn test_explicit_max() {
        let d = compute_domain(false, None, Some(10.0));
        assert_eq!(d.max, AxisBound::Value(10.0));
    }

    // ===== nice_step Tests =====

    #[test]
    fn test_nice_step_values() {
        assert_eq!(nice_step(10.0, 5, true), 2.0);
        assert_eq!(nice_step(100.0, 5, true), 20.0);
        assert_eq!(nice_step(7.0, 5, true), 1.0);
        assert_eq!(nice_step(1.0, 5, true), 0.2);
        assert_eq!(nice_step(40.0, 5, true), 10.0);
        assert_eq!(nice_step(0.0, 5, true), 1.0);
    }

    #[test]
    fn test_nice_step_integer_only() {
        assert_eq!(nice_step(1.0, 5, false), 1.0);
        assert_eq!(nice_step(100.0, 5, false), 20.0);
    }

    // ===== resolve Tests =====

    #[test]
    fn test_resolve_auto_snaps_outward() {
        let d = compute_domain(true, None, None);
        let r = d.resolve(Some((3.0, 97.0)), true);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 100.0);
        assert_eq!(r.ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_resolve_zero_baseline() {
        let d = compute_domain(false, None, None);
        let r = d.resolve(Some((40.0, 47.0)), true);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 50.0);
    }

    #[test]
    fn test_resolve_explicit_bounds_kept_exactly() {
        let d = compute_domain(true, Some(5.0), Some(17.0));
        let r = d.resolve(Some((0.0, 100.0)), true);
        assert_eq!(r.min, 5.0);
        assert_eq!(r.max, 17.0);
        assert!(r.ticks.iter().all(|t| (5.0..=17.0).contains(t)));
    }

    #[test]
    fn test_resolve_empty_data() {
        let r = compute_domain(true, None, None).resolve(None, true);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 1.0);
    }

    #[test]
    fn test_resolve_degenerate_widens() {
        let r = compute_domain(true, None, None).resolve(Some((4.0, 4.0)), true);
        assert!(r.min < 4.0);
        assert!(r.max > 4.0);
    }

    #[test]
    fn test_resolve_explicit_min_above_data() {
        let r = compute_domain(false, Some(10.0), None).resolve(Some((1.0, 2.0)), true);
        assert_eq!(r.min, 10.0);
        assert!(r.max > 10.0);
    }

    #[test]
    fn test_resolve_fractional_ticks_are_clean() {
        let r = compute_domain(true, None, None).resolve(Some((0.1, 0.9)), true);
        assert_eq!(r.ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_resolve_integer_ticks() {
        let r = compute_domain(true, None, None).resolve(Some((0.0, 2.0)), false);
        assert!(r.ticks.iter().all(|t| t.fract() == 0.0));
    }

    #[test]
    fn test_resolve_zero_baseline_with_negative_max() {
        let r = compute_domain(false, None, Some(-5.0)).resolve(Some((-20.0, -10.0)), true);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, -5.0);
        assert_eq!(r.ticks, vec![0.0]);
        // no visible range; everything lands mid-axis
        assert_eq!(r.scale(-10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_resolve_overflowing_span_ticks_bounds() {
        let r = compute_domain(false, Some(-1e308), Some(1e308)).resolve(Some((1.0, 2.0)), true);
        assert_eq!(r.min, -1e308);
        assert_eq!(r.max, 1e308);
        assert_eq!(r.ticks, vec![-1e308, 1e308]);
        assert_eq!(r.scale(0.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_resolve_infinite_bounds() {
        let r = compute_domain(false, None, Some(f64::INFINITY)).resolve(Some((1.0, 2.0)), true);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.ticks, vec![0.0]);

        let r = compute_domain(false, Some(f64::NEG_INFINITY), None).resolve(None, false);
        assert_eq!(r.ticks, vec![1.0]);

        let r = compute_domain(false, Some(f64::NAN), Some(3.0)).resolve(None, true);
        assert_eq!(r.ticks, vec![3.0]);
    }

    #[test]
    fn test_resolve_huge_auto_extent() {
        let r = compute_domain(true, None, None).resolve(Some((-f64::MAX, f64::MAX)), true);
        assert!(r.ticks.len() <= MAX_TICKS);
        assert!(r.ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_ticks_between_caps_count() {
        assert_eq!(ticks_between(0.0, 1e9, 1.0), vec![0.0, 1e9]);
        assert_eq!(ticks_between(0.0, 4.0, 1.0).len(), 5);
    }

    #[test]
    fn test_scale() {
        let r = ResolvedDomain {
            min: 0.0,
            max: 10.0,
            ticks: vec![],
        };
        assert_eq!(r.scale(5.0, 0.0, 100.0), 50.0);
        assert_eq!(r.scale(0.0, 100.0, 0.0), 100.0);
        assert_eq!(r.scale(20.0, 0.0, 100.0), 200.0);
        assert!(r.contains(10.0));
        assert!(!r.contains(10.5));
    }

    #[test]
    fn test_scale_zero_span() {
        let r = ResolvedDomain {
            min: 3.0,
            max: 3.0,
            ticks: vec![3.0],
        };
        assert_eq!(r.scale(3.0, 0.0, 10.0), 5.0);
    }

    // ===== Property Tests =====

    proptest! {
        #[test]
        fn prop_auto_domain_contains_data(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let r = compute_domain(true, None, None).resolve(Some((lo, hi)), true);
            prop_assert!(r.min <= lo);
            prop_assert!(r.max >= hi);
        }

        #[test]
        fn prop_auto_bounds_are_tick_aligned(a in -1000.0f64..1000.0, span in 0.5f64..1000.0) {
            let r = compute_domain(true, None, None).resolve(Some((a, a + span)), true);
            prop_assert!(!r.ticks.is_empty());
            prop_assert!((r.ticks[0] - r.min).abs() < 1e-6);
            prop_assert!((r.ticks[r.ticks.len() - 1] - r.max).abs() < 1e-6);
            for pair in r.ticks.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }

        #[test]
        fn prop_resolve_ticks_bounded_for_any_explicit_bounds(
            lo in prop::num::f64::ANY,
            hi in prop::num::f64::ANY,
            decimals in any::<bool>(),
        ) {
            let r = compute_domain(false, Some(lo), Some(hi)).resolve(Some((0.0, 1.0)), decimals);
            prop_assert!(r.ticks.len() <= MAX_TICKS);
        }

        #[test]
        fn prop_non_auto_baseline_ignores_data(lo in 0.0f64..100.0, span in 0.0f64..100.0) {
            prop_assert_eq!(
                compute_domain(false, None, None),
                AxisDomain { min: AxisBound::Value(0.0), max: AxisBound::Auto }
            );
            let r = compute_domain(false, None, None).resolve(Some((lo, lo + span)), true);
            prop_assert_eq!(r.min, 0.0);
        }
    }
}

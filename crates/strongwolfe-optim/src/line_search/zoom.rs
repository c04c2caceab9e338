//! Sectioning ("zoom") phase.
//!
//! Given a bracket known to contain a strong Wolfe point, repeatedly picks a
//! trial inside it and replaces one endpoint until a trial is accepted.
//! Throughout, `lo` is the endpoint with the lower recorded value and the
//! interval between `lo` and `hi` contains an acceptable step.

use super::{
    params::{LineSearchParams, MAX_UPDATE_ITERATIONS, STAGNATION_RATIO, STAGNATION_TRIALS},
    result::Termination,
    trial::{select_trial_value, TrialPoint},
    Outcome, Probe,
};
use log::{debug, trace};
use strongwolfe_core::{
    conditions::WolfeConditions,
    objective::LineObjective,
    types::{constants, Scalar},
};

/// Shrinks `[lo, hi]` until a strong Wolfe point is found or the budget runs
/// out.
pub(super) fn zoom<T, O>(
    params: &LineSearchParams<T>,
    conditions: &WolfeConditions<T>,
    probe: &mut Probe<'_, T, O>,
    mut lo: TrialPoint<T>,
    mut hi: TrialPoint<T>,
) -> Outcome<T>
where
    T: Scalar,
    O: LineObjective<T>,
{
    let alpha_min = params.alpha_min();
    let gradient_tolerance = params.gradient_tolerance();
    let stagnation_ratio = <T as Scalar>::from_f64(STAGNATION_RATIO);

    debug!(
        "zoom: bracket lo = {} (f = {}), hi = {} (f = {})",
        lo.alpha, lo.value, hi.alpha, hi.value
    );

    let mut reference_length = T::zero();
    let mut trials = 0usize;
    let mut last: Option<TrialPoint<T>> = None;

    for _ in 1..MAX_UPDATE_ITERATIONS {
        probe.zoom_iterations += 1;

        let length = (hi.alpha - lo.alpha).abs();
        if trials == 0 {
            reference_length = length;
        }
        let stalled = trials > STAGNATION_TRIALS
            && ((length - reference_length) / reference_length).abs() < stagnation_ratio;

        let candidate = if stalled {
            None
        } else {
            Some(select_trial_value(&lo, &hi)).filter(|alpha| alpha.is_finite())
        };
        let mut alpha_j = match candidate {
            Some(alpha) => {
                trials += 1;
                alpha
            }
            None => {
                trials = 0;
                (hi.alpha + lo.alpha).abs() * constants::half::<T>()
            }
        };
        // Interpolation may extrapolate past the bracket
        alpha_j = alpha_j.min(params.alpha_max);

        if alpha_j < alpha_min {
            debug!("zoom: trial {alpha_j} below floor, returning {alpha_min}");
            return Outcome::unevaluated(alpha_min, Termination::MinimumStep);
        }

        let point = probe.point(alpha_j);
        trace!(
            "zoom: alpha = {}, f = {}, slope = {}",
            point.alpha,
            point.value,
            point.slope
        );

        if !conditions.sufficient_decrease(point.alpha, point.value) || point.value >= lo.value {
            hi = point;
        } else {
            if conditions.curvature(point.slope) {
                return Outcome::evaluated(point, Termination::StrongWolfe);
            }
            if point.slope * (hi.alpha - lo.alpha) >= T::zero() {
                hi = lo;
            }
            lo = point;
        }

        last = Some(point);
        if point.slope.abs() <= gradient_tolerance {
            debug!("zoom: slope {} below tolerance at {}", point.slope, point.alpha);
            return Outcome::evaluated(point, Termination::Stationary);
        }
    }

    match last {
        Some(point) => Outcome::evaluated(point, Termination::BudgetExhausted),
        None => Outcome::unevaluated(lo.alpha, Termination::BudgetExhausted),
    }
}

//! Integration tests for strongwolfe-optim
//!
//! These tests drive the line search through its public API only, on
//! scalar objectives and on multivariate costs restricted to a ray.

use approx::assert_relative_eq;
use nalgebra::DVector;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use strongwolfe_optim::{
    line_search::ALPHA_MIN, CostFunction, CountingObjective, FnObjective, LineObjective,
    LineSearchError, LineSearchParams, RayObjective, StrongWolfeLineSearch, Termination,
};

/// f(x) = ½ xᵀ diag(weights) x
#[derive(Debug)]
struct DiagonalQuadratic {
    weights: DVector<f64>,
}

impl CostFunction<f64> for DiagonalQuadratic {
    fn cost(&self, x: &DVector<f64>) -> f64 {
        0.5 * x.component_mul(&self.weights).dot(x)
    }

    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        x.component_mul(&self.weights)
    }
}

/// f(x) = Σ exp(xᵢ) + ½‖x‖², smooth and strictly convex
#[derive(Debug)]
struct ExpQuadratic;

impl CostFunction<f64> for ExpQuadratic {
    fn cost(&self, x: &DVector<f64>) -> f64 {
        x.iter().map(|xi| xi.exp()).sum::<f64>() + 0.5 * x.norm_squared()
    }

    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        x.map(|xi| xi.exp() + xi)
    }
}

/// Objective recording every step at which its value was requested.
#[derive(Debug)]
struct RecordingObjective<O> {
    inner: O,
    steps: RefCell<Vec<f64>>,
}

impl<O: LineObjective<f64>> LineObjective<f64> for RecordingObjective<O> {
    fn value(&self, alpha: f64) -> f64 {
        self.steps.borrow_mut().push(alpha);
        self.inner.value(alpha)
    }

    fn slope(&self, alpha: f64) -> f64 {
        self.inner.slope(alpha)
    }
}

#[test]
fn test_simple_quadratic_accepts_unit_step() {
    // φ(α) = α² − 2α from φ(0) = 0, φ'(0) = −2
    let phi = CountingObjective::new(FnObjective::new(
        |a: f64| a * a - 2.0 * a,
        |a: f64| 2.0 * a - 2.0,
    ));
    let line_search = StrongWolfeLineSearch::builder(&phi, 0.0, -2.0)
        .c1(1e-3)
        .c2(0.9)
        .alpha0(1.0)
        .build()
        .unwrap();

    let result = line_search.search_with_result();

    assert!(result.step_size >= 0.9 && result.step_size <= 1.1);
    assert!(line_search.conditions().is_satisfied(
        result.step_size,
        phi.inner.value(result.step_size),
        phi.inner.slope(result.step_size),
    ));
    assert!(result.function_evals <= 5);
    assert_eq!(phi.counts().0, result.function_evals);
    assert_eq!(phi.counts().1, result.slope_evals);
}

#[test]
fn test_infinite_values_force_halving() {
    // Finite only up to α = 50
    let phi = RecordingObjective {
        inner: FnObjective::new(
            |a: f64| if a <= 50.0 { (a - 10.0).powi(2) } else { f64::INFINITY },
            |a: f64| 2.0 * (a - 10.0),
        ),
        steps: RefCell::new(Vec::new()),
    };
    let line_search = StrongWolfeLineSearch::builder(&phi, 100.0, -20.0)
        .alpha0(100.0)
        .build()
        .unwrap();

    let result = line_search.search_with_result();

    let steps = phi.steps.borrow();
    assert_eq!(steps[0], 100.0);
    let first_finite = steps
        .iter()
        .copied()
        .find(|&a| phi.inner.value(a).is_finite())
        .unwrap();
    assert!(first_finite <= 50.0);

    assert_eq!(result.termination, Termination::StrongWolfe);
    assert_relative_eq!(result.step_size, 10.0, epsilon = 1e-6);
}

#[test]
fn test_infinite_everywhere_stops_at_floor() {
    let phi = FnObjective::new(|_: f64| f64::INFINITY, |_: f64| f64::NAN);
    let line_search = StrongWolfeLineSearch::builder(phi, 1.0, -1.0)
        .build()
        .unwrap();

    let result = line_search.search_with_result();

    assert_eq!(result.termination, Termination::MinimumStep);
    assert_eq!(result.step_size, ALPHA_MIN);
    assert_eq!(result.value, None);
    assert_eq!(result.slope_evals, 0);
}

#[test]
fn test_nan_values_are_backed_off() {
    // φ(α) = −ln(3 − α) − α is NaN past α = 3
    let phi = FnObjective::new(
        |a: f64| -(3.0 - a).ln() - a,
        |a: f64| 1.0 / (3.0 - a) - 1.0,
    );
    let (f0, slope0) = (-(3.0f64).ln(), 1.0 / 3.0 - 1.0);
    let line_search = StrongWolfeLineSearch::builder(phi, f0, slope0)
        .alpha0(8.0)
        .build()
        .unwrap();

    let result = line_search.search_with_result();

    assert!(result.converged());
    assert!(result.step_size < 3.0);
    let (value, slope) = (result.value.unwrap(), result.slope.unwrap());
    assert!(line_search.conditions().is_satisfied(result.step_size, value, slope));
}

#[test]
fn test_ray_objective_on_diagonal_quadratic() {
    let cost_fn = DiagonalQuadratic {
        weights: DVector::from_vec(vec![1.0, 2.0, 4.0]),
    };
    let origin = DVector::from_element(3, 1.0);
    let direction = -cost_fn.gradient(&origin);
    let ray = RayObjective::new(&cost_fn, origin, direction).unwrap();
    let (f0, slope0) = ray.initial();

    let line_search = StrongWolfeLineSearch::builder(&ray, f0, slope0)
        .c1(1e-4)
        .c2(0.9)
        .build()
        .unwrap();
    let result = line_search.search_with_result();

    assert!(result.converged());
    // Exact minimizer along −g is gᵀg / gᵀAg = 21 / 73
    assert_relative_eq!(result.step_size, 21.0 / 73.0, epsilon = 1e-6);
    let next = ray.point_at(result.step_size);
    assert!(cost_fn.cost(&next) < f0);
}

#[test]
fn test_ray_objective_on_exp_quadratic() {
    let cost_fn = ExpQuadratic;
    let origin = DVector::from_vec(vec![1.0, -0.5, 2.0, 0.0]);
    let direction = -cost_fn.gradient(&origin);
    let ray = RayObjective::new(&cost_fn, origin, direction).unwrap();
    let (f0, slope0) = ray.initial();

    let line_search = StrongWolfeLineSearch::builder(&ray, f0, slope0)
        .c1(1e-4)
        .c2(0.1)
        .build()
        .unwrap();
    let result = line_search.search_with_result();

    assert!(result.converged());
    let alpha = result.step_size;
    assert!(line_search.conditions().is_satisfied_within(
        alpha,
        ray.value(alpha),
        ray.slope(alpha),
        1e-6,
    ));
}

#[test]
fn test_ray_objective_dimension_mismatch() {
    let cost_fn = ExpQuadratic;
    let err = RayObjective::new(
        &cost_fn,
        DVector::from_element(3, 0.0),
        DVector::from_element(2, 1.0),
    )
    .unwrap_err();

    assert_eq!(err, LineSearchError::dimension_mismatch(3, 2));
}

#[test]
fn test_search_is_bit_identical_across_calls() {
    let phi = FnObjective::new(
        |a: f64| (a - 1.3).powi(4) + 0.1 * (3.0 * a).sin(),
        |a: f64| 4.0 * (a - 1.3).powi(3) + 0.3 * (3.0 * a).cos(),
    );
    let f0 = phi.value(0.0);
    let slope0 = phi.slope(0.0);

    let build = || {
        StrongWolfeLineSearch::builder(&phi, f0, slope0)
            .c1(1e-4)
            .c2(0.4)
            .alpha_max(50.0)
            .build()
            .unwrap()
    };

    let first = build().search_with_result();
    let second = build().search_with_result();
    let third = build().search();

    assert_eq!(first, second);
    assert_eq!(first.step_size.to_bits(), third.to_bits());
}

#[test]
fn test_builder_reports_offending_parameter() {
    let phi = FnObjective::new(|a: f64| a * a, |a: f64| 2.0 * a);
    let parameter_of = |result: Result<StrongWolfeLineSearch<f64, _>, LineSearchError>| {
        result.unwrap_err().parameter().map(str::to_owned)
    };

    assert_eq!(
        parameter_of(StrongWolfeLineSearch::builder(&phi, f64::NAN, -1.0).build()),
        Some("f0".to_owned())
    );
    assert_eq!(
        parameter_of(StrongWolfeLineSearch::builder(&phi, 1.0, 0.0).build()),
        Some("slope0".to_owned())
    );
    assert_eq!(
        parameter_of(StrongWolfeLineSearch::builder(&phi, 1.0, -1.0).c1(0.0).build()),
        Some("c1".to_owned())
    );
    assert_eq!(
        parameter_of(
            StrongWolfeLineSearch::builder(&phi, 1.0, -1.0)
                .c1(0.5)
                .c2(0.4)
                .build()
        ),
        Some("c2".to_owned())
    );
    assert_eq!(
        parameter_of(StrongWolfeLineSearch::builder(&phi, 1.0, -1.0).alpha_max(1e-3).build()),
        Some("alpha_max".to_owned())
    );
    assert_eq!(
        parameter_of(StrongWolfeLineSearch::builder(&phi, 1.0, -1.0).alpha0(0.0).build()),
        Some("alpha0".to_owned())
    );
}

#[test]
fn test_error_message_names_parameter_and_value() {
    let phi = FnObjective::new(|a: f64| a * a, |a: f64| 2.0 * a);
    let err = StrongWolfeLineSearch::builder(phi, 1.0, -1.0)
        .c1(1.5)
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid line search configuration: c1 = 1.5 (sufficient decrease constant must lie in (0, 1))"
    );
}

#[test]
fn test_new_from_params_matches_builder() {
    let phi = FnObjective::new(|a: f64| (a - 2.0).powi(2), |a: f64| 2.0 * (a - 2.0));

    let mut params = LineSearchParams::new(4.0, -4.0);
    params.c2 = 0.1;
    params.alpha_max = 10.0;
    let from_params = StrongWolfeLineSearch::new(&phi, params).unwrap();
    let from_builder = StrongWolfeLineSearch::builder(&phi, 4.0, -4.0)
        .c2(0.1)
        .alpha_max(10.0)
        .build()
        .unwrap();

    assert_eq!(from_params.params(), from_builder.params());
    assert_eq!(
        from_params.search_with_result(),
        from_builder.search_with_result()
    );
}

#[test]
fn test_single_precision() {
    let phi = FnObjective::new(|a: f32| (a - 2.0).powi(2), |a: f32| 2.0 * (a - 2.0));
    let line_search = StrongWolfeLineSearch::builder(phi, 4.0f32, -4.0)
        .c2(0.1)
        .build()
        .unwrap();

    let result = line_search.search_with_result();
    assert!(result.converged());
    assert_relative_eq!(result.step_size, 2.0f32, epsilon = 1e-3);
}

#[cfg(feature = "serde")]
#[test]
fn test_params_and_result_serde() {
    let phi = FnObjective::new(|a: f64| a * a - 2.0 * a, |a: f64| 2.0 * a - 2.0);
    let line_search = StrongWolfeLineSearch::builder(phi, 0.0, -2.0)
        .c2(0.9)
        .build()
        .unwrap();

    let params_json = serde_json::to_string(line_search.params()).unwrap();
    let params: LineSearchParams<f64> = serde_json::from_str(&params_json).unwrap();
    assert_eq!(&params, line_search.params());

    let result = line_search.search_with_result();
    let result_json = serde_json::to_value(&result).unwrap();
    assert_eq!(result_json["termination"], "StrongWolfe");
    assert_eq!(result_json["step_size"], 1.0);
}

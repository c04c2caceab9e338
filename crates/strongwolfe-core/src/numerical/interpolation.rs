//! Polynomial interpolation minimizers used to pick line search trial steps.
//!
//! Each helper fits a low-degree polynomial to function values and/or
//! derivatives at two or three step lengths and returns the abscissa of its
//! minimizer. They are pure closed-form computations.
//!
//! # Degenerate input
//!
//! No input validation is done. Coincident abscissas, a vanishing leading
//! coefficient or a negative cubic discriminant produce an infinite, NaN or
//! out-of-bracket result instead of an error. Callers are expected to guard
//! the returned value (step floors, bisection fallback).

use crate::types::{constants, Scalar};

/// Minimizer of the quadratic q with q(a) = fa, q'(a) = da and q(b) = fb.
///
/// q(x) = fa + da (x − a) + c (x − a)², c = (fb − fa − da (b − a)) / (b − a)²,
/// whose stationary point is a − da / (2c).
pub fn quadratic_minimum<T: Scalar>(a: T, b: T, fa: T, fb: T, da: T) -> T {
    let h = b - a;
    let curvature = fb - fa - da * h;
    a - da * h * h / (constants::two::<T>() * curvature)
}

/// Minimizer of the quadratic matching slopes `da` at `a` and `db` at `b`.
///
/// This is the secant step: the root of the linear interpolant of the
/// derivative.
pub fn secant_minimum<T: Scalar>(a: T, b: T, da: T, db: T) -> T {
    a - da * (b - a) / (db - da)
}

/// Vertex of the parabola through `(a, fa)`, `(b, fb)` and `(c, fc)`.
pub fn three_point_minimum<T: Scalar>(a: T, b: T, c: T, fa: T, fb: T, fc: T) -> T {
    let ba = b - a;
    let bc = b - c;
    let numerator = ba * ba * (fb - fc) - bc * bc * (fb - fa);
    let denominator = ba * (fb - fc) - bc * (fb - fa);
    b - constants::half::<T>() * numerator / denominator
}

/// Minimizer of the cubic matching value and slope at both `u` and `v`.
///
/// Uses the scaled form of the Moré–Thuente formula so that the
/// discriminant does not overflow when slopes are large.
pub fn cubic_minimum<T: Scalar>(u: T, v: T, fu: T, fv: T, du: T, dv: T) -> T {
    let d = v - u;
    let theta = constants::three::<T>() * (fu - fv) / d + du + dv;
    let s = theta.abs().max(du.abs()).max(dv.abs());
    let a = theta / s;
    let mut gamma = s * (a * a - (du / s) * (dv / s)).sqrt();
    if v < u {
        gamma = -gamma;
    }
    let p = gamma - du + theta;
    let q = gamma - du + gamma + dv;
    u + (p / q) * d
}

//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun (7.1.26) coefficients.
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;
const P: f64 = 0.327_591_1;

/// Error function for non-negative arguments, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error is 1.5e-7.
#[inline]
fn erf_non_negative<T: Float>(z: T) -> T {
    let one = T::one();
    let t = one / (one + T::from(P).unwrap() * z);

    // Horner's method
    let poly = T::from(A1).unwrap()
        + t * (T::from(A2).unwrap()
            + t * (T::from(A3).unwrap() + t * (T::from(A4).unwrap() + t * T::from(A5).unwrap())));

    one - poly * t * (-z * z).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) as `0.5 * (1 + sign(x) * erf(|x| / √2))`.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x. The sign split makes the
/// function antisymmetric: `norm_cdf(-x) + norm_cdf(x) == 1` up to rounding.
///
/// # Examples
/// ```
/// use payoff_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let z = x.abs() / T::from(std::f64::consts::SQRT_2).unwrap();
    let erf = erf_non_negative(z);

    if x < T::zero() {
        half * (T::one() - erf)
    } else {
        half * (T::one() + erf)
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use payoff_models::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}

//! Special functions that the distribution families share.
//!
//! Incomplete gamma/beta functions, `erfc` and its inverse, and digamma come
//! from `statrs::function`; everything here is either missing there or needs a
//! tail-accurate form.

use statrs::function::beta::beta_reg;
use statrs::function::erf::erfc;
use statrs::function::gamma::{gamma_lr, gamma_ur};

use crate::math::LN_SQRT_2PI;

/// Tail probabilities below this are recomputed in log space.
const LOG_TAIL_SWITCH: f64 = 1e-280;
const FRACTION_EPS: f64 = 1e-15;
const FRACTION_MAX_ITER: usize = 1_000;
const FRACTION_TINY: f64 = 1e-300;

/// Stirling-series coefficients `B_{2k} / (2k (2k-1))`, k = 1..10.
const STIRLING: [f64; 10] = [
    8.333_333_333_333_333e-2,
    -2.777_777_777_777_778e-3,
    7.936_507_936_507_937e-4,
    -5.952_380_952_380_952e-4,
    8.417_508_417_508_418e-4,
    -1.917_526_917_526_918e-3,
    6.410_256_410_256_410e-3,
    -2.955_065_359_477_124e-2,
    1.796_443_723_688_307e-1,
    -1.392_432_216_905_90,
];

/// Natural log of the gamma function for `x > 0`.
///
/// Arguments below 7 are shifted up with `Γ(x) = Γ(x+n) / (x (x+1) ... (x+n-1))`
/// so the Stirling series always runs where it is accurate to near machine
/// precision. Returns `+∞` for `x <= 0` and NaN for NaN.
pub fn loggam(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::INFINITY;
    }
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }

    let mut shift = 0.0;
    let mut x0 = x;
    while x0 < 7.0 {
        shift += x0.ln();
        x0 += 1.0;
    }

    let x2 = 1.0 / (x0 * x0);
    let mut series = STIRLING[9];
    for &c in STIRLING[..9].iter().rev() {
        series = series * x2 + c;
    }
    series / x0 + LN_SQRT_2PI + (x0 - 0.5) * x0.ln() - x0 - shift
}

/// `ln B(a, b)`.
#[inline]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    loggam(a) + loggam(b) - loggam(a + b)
}

/// `ln k!`.
#[inline]
pub fn ln_factorial(k: u64) -> f64 {
    if k < 2 { 0.0 } else { loggam(k as f64 + 1.0) }
}

/// `ln C(n, k)` for `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// `ln Φ(z)` for the standard normal cdf, accurate far into the lower tail.
pub fn log_ndtr(z: f64) -> f64 {
    let t = z * std::f64::consts::FRAC_1_SQRT_2;
    if z > 6.0 {
        (-0.5 * erfc(t)).ln_1p()
    } else if z > -37.0 {
        (0.5 * erfc(-t)).ln()
    } else {
        // Φ(z) = φ(z)/(-z) * (1 - 1/z² + 3/z⁴ - 15/z⁶ + ...)
        let w = 1.0 / (z * z);
        let series =
            1.0 - w * (1.0 - 3.0 * w * (1.0 - 5.0 * w * (1.0 - 7.0 * w * (1.0 - 9.0 * w))));
        -0.5 * z * z - LN_SQRT_2PI - (-z).ln() + series.ln()
    }
}

/// `a ln x - x - ln Γ(a)`, the common prefactor of both incomplete gamma tails.
fn ln_gamma_prefix(a: f64, x: f64) -> f64 {
    a * x.ln() - x - loggam(a)
}

/// Series for `P(a, x) / prefix`; converges quickly for `x < a + 1`.
fn gamma_p_series(a: f64, x: f64) -> f64 {
    let mut ap = a;
    let mut term = 1.0 / a;
    let mut sum = term;
    for _ in 0..FRACTION_MAX_ITER {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * FRACTION_EPS {
            break;
        }
    }
    sum
}

/// Modified Lentz continued fraction for `Q(a, x) / prefix`; converges
/// quickly for `x > a + 1`.
fn gamma_q_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / FRACTION_TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=FRACTION_MAX_ITER {
        let i = i as f64;
        let an = -i * (i - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < FRACTION_TINY {
            d = FRACTION_TINY;
        }
        c = b + an / c;
        if c.abs() < FRACTION_TINY {
            c = FRACTION_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < FRACTION_EPS {
            break;
        }
    }
    h
}

/// `ln Q(a, x)`: log of the regularized upper incomplete gamma function.
///
/// Stays finite where `Q` itself underflows, e.g. `ln Q(2, 800) = ln 801 - 800`.
pub fn ln_gamma_q(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return f64::NEG_INFINITY;
    }
    let q = gamma_ur(a, x);
    if q > LOG_TAIL_SWITCH || x < a + 1.0 {
        return q.ln();
    }
    ln_gamma_prefix(a, x) + gamma_q_fraction(a, x).ln()
}

/// `ln P(a, x)`: log of the regularized lower incomplete gamma function.
pub fn ln_gamma_p(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }
    let p = gamma_lr(a, x);
    if p > LOG_TAIL_SWITCH || x >= a + 1.0 {
        return p.ln();
    }
    ln_gamma_prefix(a, x) + gamma_p_series(a, x).ln()
}

/// Continued fraction of `I_x(a, b)`; converges quickly for
/// `x < (a + 1) / (a + b + 2)`.
fn beta_fraction(a: f64, b: f64, x: f64) -> f64 {
    let guard = |v: f64| if v.abs() < FRACTION_TINY { FRACTION_TINY } else { v };
    let (qab, qap, qam) = (a + b, a + 1.0, a - 1.0);
    let mut c = 1.0;
    let mut d = 1.0 / guard(1.0 - qab * x / qap);
    let mut h = d;
    for m in 1..=FRACTION_MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;
        let even = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / guard(1.0 + even * d);
        c = guard(1.0 + even / c);
        h *= d * c;
        let odd = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / guard(1.0 + odd * d);
        c = guard(1.0 + odd / c);
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < FRACTION_EPS {
            break;
        }
    }
    h
}

/// `ln I_x(a, b)` with `x` given as `ln x` and `ln(1 - x)`.
///
/// Callers whose `x` would underflow (the Student-t tail at huge `|z|`) pass
/// the logs directly.
pub(crate) fn ln_inc_beta_parts(a: f64, b: f64, ln_x: f64, ln_1mx: f64) -> f64 {
    if ln_x == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if ln_1mx == f64::NEG_INFINITY {
        return 0.0;
    }
    let x = ln_x.exp();
    if x < (a + 1.0) / (a + b + 2.0) {
        a * ln_x + b * ln_1mx - a.ln() - ln_beta(a, b) + beta_fraction(a, b, x).ln()
    } else {
        (-beta_reg(b, a, ln_1mx.exp())).ln_1p()
    }
}

/// `ln I_x(a, b)`: log of the regularized incomplete beta function.
pub fn ln_inc_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if x >= 1.0 {
        return 0.0;
    }
    let direct = beta_reg(a, b, x);
    if direct > LOG_TAIL_SWITCH {
        return direct.ln();
    }
    ln_inc_beta_parts(a, b, x.ln(), (-x).ln_1p())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::function::gamma::ln_gamma;

    #[test]
    fn test_loggam_matches_reference() {
        for &x in &[1e-8, 1e-3, 0.1, 0.5, 1.5, 2.5, 3.0, 6.9, 7.0, 10.0, 55.5, 171.0, 1e4, 1e10] {
            let got = loggam(x);
            let want = ln_gamma(x);
            assert!(
                (got - want).abs() <= 1e-12 * want.abs().max(1.0),
                "x={}: {} vs {}",
                x,
                got,
                want
            );
        }
    }

    #[test]
    fn test_loggam_factorials_and_poles() {
        assert_eq!(loggam(1.0), 0.0);
        assert_eq!(loggam(2.0), 0.0);
        assert_relative_eq!(loggam(11.0), 3_628_800f64.ln(), max_relative = 1e-14);
        assert_relative_eq!(loggam(0.5), std::f64::consts::PI.sqrt().ln(), max_relative = 1e-13);
        assert!(loggam(0.0).is_infinite());
        assert!(loggam(-1.0).is_infinite());
        assert!(loggam(f64::NAN).is_nan());
        // No overflow where Γ itself overflows.
        assert!(loggam(1e300).is_finite());
    }

    #[test]
    fn test_ln_choose() {
        assert_relative_eq!(ln_choose(10, 3), 120f64.ln(), max_relative = 1e-13);
        assert_eq!(ln_choose(5, 0), 0.0);
        assert_eq!(ln_choose(5, 5), 0.0);
        assert_relative_eq!(ln_beta(2.0, 3.0), (1.0f64 / 12.0).ln(), max_relative = 1e-13);
    }

    #[test]
    fn test_log_ndtr_regions() {
        assert_relative_eq!(log_ndtr(0.0), 0.5f64.ln(), max_relative = 1e-15);
        let p = 0.5 * erfc(2.0 * std::f64::consts::FRAC_1_SQRT_2);
        assert_relative_eq!(log_ndtr(-2.0), p.ln(), max_relative = 1e-13);
        assert!(log_ndtr(10.0) < 0.0 && log_ndtr(10.0) > -1e-20);

        // Continuity across the asymptotic switch.
        let a = log_ndtr(-36.999_999);
        let b = log_ndtr(-37.000_001);
        assert!((a - b).abs() < 1e-3, "{} vs {}", a, b);

        // Deep tail stays finite and follows -z²/2.
        let deep = log_ndtr(-1e3);
        assert!(deep.is_finite());
        assert_relative_eq!(deep, -5e5 - LN_SQRT_2PI - 1e3f64.ln(), max_relative = 1e-9);
    }

    #[test]
    fn test_ln_gamma_expansions_match_direct() {
        for &(a, x) in &[(0.5, 0.2), (2.0, 2.5), (7.5, 1.0), (30.0, 12.0)] {
            let series = ln_gamma_prefix(a, x) + gamma_p_series(a, x).ln();
            assert_relative_eq!(series, gamma_lr(a, x).ln(), max_relative = 1e-12);
        }
        for &(a, x) in &[(0.5, 2.0), (2.0, 40.0), (30.0, 60.0), (10.0, 25.0)] {
            let fraction = ln_gamma_prefix(a, x) + gamma_q_fraction(a, x).ln();
            assert_relative_eq!(fraction, gamma_ur(a, x).ln(), max_relative = 1e-12);
        }
        assert_eq!(ln_gamma_q(2.0, 0.0), 0.0);
        assert_eq!(ln_gamma_p(2.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(ln_gamma_q(2.0, f64::INFINITY), f64::NEG_INFINITY);
        assert_eq!(ln_gamma_p(2.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_ln_gamma_tails_past_underflow() {
        // Q(2, x) = (1 + x) e^{-x} exactly.
        assert_relative_eq!(ln_gamma_q(2.0, 800.0), 801f64.ln() - 800.0, max_relative = 1e-13);
        assert_relative_eq!(ln_gamma_q(1.0, 5000.0), -5000.0, max_relative = 1e-14);
        // P(1, x) = 1 - e^{-x} ~ x for tiny x; P(a, x) ~ x^a / Γ(a+1).
        assert_relative_eq!(ln_gamma_p(1.0, 1e-200), -200.0 * 10f64.ln(), max_relative = 1e-12);
        let want = 40.0 * 1e-9f64.ln() - loggam(41.0);
        assert_relative_eq!(ln_gamma_p(40.0, 1e-9), want, max_relative = 1e-12);
    }

    #[test]
    fn test_ln_inc_beta_tail() {
        for &(a, b, x) in &[(2.0f64, 3.0f64, 0.1f64), (0.5, 0.5, 0.3), (5.0, 1.5, 0.9), (1.5, 0.5, 1e-40)] {
            let parts = ln_inc_beta_parts(a, b, x.ln(), (-x).ln_1p());
            assert_relative_eq!(parts, beta_reg(a, b, x).ln(), max_relative = 1e-11);
        }
        // I_x(1, b) = 1 - (1-x)^b ~ b x.
        assert_relative_eq!(ln_inc_beta(1.0, 3.0, 1e-320), (3e-320f64).ln(), max_relative = 1e-3);
        assert_relative_eq!(
            ln_inc_beta(2.0, 1.0, 1e-200),
            -400.0 * 10f64.ln(),
            max_relative = 1e-12
        );
        // Parts form reaches x far below the smallest double.
        let ln_x = -2000.0;
        let got = ln_inc_beta_parts(2.0, 1.0, ln_x, 0.0);
        assert_relative_eq!(got, 2.0 * ln_x, max_relative = 1e-12);
        assert_eq!(ln_inc_beta(2.0, 3.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(ln_inc_beta(2.0, 3.0, 1.0), 0.0);
    }
}

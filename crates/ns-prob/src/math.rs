//! Small numerically-stable math utilities used across probability code.

/// Euler–Mascheroni constant.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Natural log of `sqrt(2π)`.
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Natural log of π.
pub const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Stable sigmoid: `1 / (1 + exp(-x))`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    let e = (-x.abs()).exp();
    let recip = 1.0 / (1.0 + e);
    // x >= 0: recip; x < 0: exp(x)/(1+exp(x)) = e*recip
    if x >= 0.0 { recip } else { e * recip }
}

/// Stable `log(sigmoid(x))`.
#[inline]
pub fn log_sigmoid(x: f64) -> f64 {
    // log(sigmoid(x)) = -log(1 + exp(-x))
    if x >= 0.0 { -(-x).exp().ln_1p() } else { x - x.exp().ln_1p() }
}

/// Stable `log(1 - exp(x))` for `x <= 0`.
///
/// Mächler (2012): `ln(-expm1(x))` near zero, `ln_1p(-exp(x))` further out.
#[inline]
pub fn log1mexp(x: f64) -> f64 {
    if x > -std::f64::consts::LN_2 { (-x.exp_m1()).ln() } else { (-x.exp()).ln_1p() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_bounds_and_symmetry() {
        for x in [-50.0, -10.0, -1.0, 0.0, 1.0, 10.0, 50.0] {
            let s = sigmoid(x);
            assert!((0.0..=1.0).contains(&s), "sigmoid({})={}", x, s);
            assert!((s + sigmoid(-x) - 1.0).abs() < 1e-15, "sigmoid symmetry failed at {}", x);
        }
    }

    #[test]
    fn test_log_sigmoid_matches_naive_moderate_values() {
        for x in [-10.0, -2.0, -0.1, 0.0, 0.1, 2.0, 10.0] {
            let naive = sigmoid(x).ln();
            assert!((naive - log_sigmoid(x)).abs() < 1e-12, "x={}", x);
        }
    }

    #[test]
    fn test_log1mexp_both_branches() {
        for x in [-1e-10, -0.01, -0.5, -0.7, -1.0, -5.0, -40.0] {
            let naive = (1.0 - f64::exp(x)).ln();
            let stable = log1mexp(x);
            assert!(
                (naive - stable).abs() <= 1e-6 * naive.abs().max(1e-300),
                "x={}: {} vs {}",
                x,
                naive,
                stable
            );
        }
        // Naive form rounds to ln(1) = 0 here.
        assert!(log1mexp(-50.0) < 0.0);
        assert_eq!(log1mexp(0.0), f64::NEG_INFINITY);
    }
}

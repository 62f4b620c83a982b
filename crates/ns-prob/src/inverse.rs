//! Monotone root finding for quantile functions without a closed form.

use ns_core::{Error, Result};

const MAX_ITER: usize = 1000;
const MAX_EXPANSIONS: usize = 2100;
const REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Validate a probability argument of `ppf`/`isf`.
pub(crate) fn check_probability(q: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::Validation(format!("q must be in [0,1], got {}", q)));
    }
    Ok(())
}

/// Solve `g(x) = 0` for a non-decreasing `g` on `[lo, hi]`.
///
/// Either end may be infinite; the bracket is then grown geometrically from
/// `x0`. Newton steps with derivative `dg` are taken while they stay inside the
/// bracket, otherwise the bracket is bisected (geometrically when it spans
/// orders of magnitude on the positive axis).
pub(crate) fn solve_increasing(
    g: impl Fn(f64) -> f64,
    dg: impl Fn(f64) -> f64,
    x0: f64,
    lo: f64,
    hi: f64,
) -> Result<f64> {
    if !x0.is_finite() {
        return Err(Error::Computation(format!("root finder started from {}", x0)));
    }
    let (mut lo, mut hi) = (lo, hi);

    if hi.is_infinite() {
        let mut step = x0.abs().max(1.0);
        let mut probe = x0.max(lo);
        let mut n = 0;
        while g(probe) < 0.0 {
            lo = probe;
            probe += step;
            step *= 2.0;
            n += 1;
            if n > MAX_EXPANSIONS || !probe.is_finite() {
                return Err(bracket_failure(x0));
            }
        }
        hi = probe;
    }
    if lo.is_infinite() {
        let mut step = x0.abs().max(1.0);
        let mut probe = x0.min(hi);
        let mut n = 0;
        while g(probe) > 0.0 {
            hi = probe;
            probe -= step;
            step *= 2.0;
            n += 1;
            if n > MAX_EXPANSIONS || !probe.is_finite() {
                return Err(bracket_failure(x0));
            }
        }
        lo = probe;
    }

    let mut x = x0.clamp(lo, hi);
    for _ in 0..MAX_ITER {
        let gx = g(x);
        if gx == 0.0 {
            return Ok(x);
        }
        if gx.is_nan() {
            return Err(Error::Computation(format!("root finder evaluated NaN at x={}", x)));
        }
        if gx < 0.0 {
            lo = x;
        } else {
            hi = x;
        }
        if hi - lo <= REL_TOL * lo.abs().max(hi.abs()) {
            return Ok(0.5 * (lo + hi));
        }

        let d = dg(x);
        let newton = x - gx / d;
        let next = if d.is_finite() && d > 0.0 && newton > lo && newton < hi {
            newton
        } else if lo > 0.0 && hi > 16.0 * lo {
            (lo * hi).sqrt()
        } else if lo == 0.0 && hi > 0.0 {
            hi / 16.0
        } else {
            0.5 * (lo + hi)
        };

        if (next - x).abs() <= REL_TOL * next.abs() {
            return Ok(next);
        }
        x = next;
    }

    log::warn!("root finder did not converge within {MAX_ITER} iterations (x0={x0})");
    Err(Error::Convergence(format!(
        "quantile search did not converge within {} iterations",
        MAX_ITER
    )))
}

fn bracket_failure(x0: f64) -> Error {
    log::warn!("root finder could not bracket a root starting from x0={x0}");
    Error::Computation(format!("could not bracket quantile starting from {}", x0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_root() {
        let r = solve_increasing(|x| x * x * x - 27.0, |x| 3.0 * x * x, 1.0, 0.0, 10.0).unwrap();
        assert!((r - 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_expands_unbounded_brackets() {
        let r = solve_increasing(|x| x - 1e6, |_| 1.0, 0.0, f64::NEG_INFINITY, f64::INFINITY)
            .unwrap();
        assert!((r - 1e6).abs() < 1e-8);
        let r = solve_increasing(|x| x + 5e5, |_| 1.0, 3.0, f64::NEG_INFINITY, f64::INFINITY)
            .unwrap();
        assert!((r + 5e5).abs() < 1e-8);
    }

    #[test]
    fn test_bisection_when_derivative_useless() {
        // Step function derivative: Newton never applies.
        let r = solve_increasing(|x| x.powi(3) - 0.001, |_| 0.0, 0.9, 0.0, 1.0).unwrap();
        assert!((r - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_roots_near_zero() {
        let target = 1e-200;
        let r = solve_increasing(|x| x - target, |_| f64::NAN, 1.0, 0.0, 1.0).unwrap();
        assert!((r / target - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(check_probability(-0.1).is_err());
        assert!(check_probability(1.1).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }
}

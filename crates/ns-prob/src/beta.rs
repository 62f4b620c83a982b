//! Beta distribution.

use ns_core::Result;
use rand::RngCore;
use statrs::function::beta::beta_reg;
use statrs::function::gamma::digamma;

use crate::engine::Engine;
use crate::gamma::{ln_standard_gamma, standard_gamma};
use crate::inverse::{check_probability, solve_increasing};
use crate::math::sigmoid;
use crate::params;
use crate::special::{ln_beta, ln_inc_beta};
use crate::traits::{Continuous, Sample};

/// Regularized incomplete beta `I_x(a, b)` with the endpoints handled.
#[inline]
pub(crate) fn inc_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        beta_reg(a, b, x)
    }
}

/// Beta(`a`, `b`) distribution.
///
/// Support: `0 <= x <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    a: f64,
    b: f64,
}

impl Beta {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        params::positive("a", a)?;
        params::positive("b", b)?;
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    fn mean(&self) -> f64 {
        self.a / (self.a + self.b)
    }
}

impl Sample for Beta {
    type Value = f64;

    /// `Ga / (Ga + Gb)` with `Ga ~ Gamma(a)`, `Gb ~ Gamma(b)`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        if self.a.min(self.b) < 1.0 {
            // Ga/(Ga+Gb) = sigmoid(ln Ga - ln Gb); immune to both draws underflowing.
            let la = ln_standard_gamma(engine, self.a)?;
            let lb = ln_standard_gamma(engine, self.b)?;
            return Ok(sigmoid(la - lb));
        }
        let ga = standard_gamma(engine, self.a)?;
        let gb = standard_gamma(engine, self.b)?;
        Ok(ga / (ga + gb))
    }
}

impl Continuous for Beta {
    fn logpdf(&self, x: f64) -> f64 {
        let (a, b) = (self.a, self.b);
        if !(0.0..=1.0).contains(&x) {
            return f64::NEG_INFINITY;
        }

        let ln_norm = -ln_beta(a, b);
        if x == 0.0 {
            if a < 1.0 {
                return f64::INFINITY;
            }
            if a > 1.0 {
                return f64::NEG_INFINITY;
            }
            // a == 1: x term is 0.
            return ln_norm;
        }
        if x == 1.0 {
            if b < 1.0 {
                return f64::INFINITY;
            }
            if b > 1.0 {
                return f64::NEG_INFINITY;
            }
            return ln_norm;
        }

        ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        inc_beta(self.a, self.b, x)
    }

    fn sf(&self, x: f64) -> f64 {
        // I_{1-x}(b, a), exact in the upper tail.
        inc_beta(self.b, self.a, 1.0 - x)
    }

    fn logcdf(&self, x: f64) -> f64 {
        ln_inc_beta(self.a, self.b, x)
    }

    fn logsf(&self, x: f64) -> f64 {
        ln_inc_beta(self.b, self.a, 1.0 - x)
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q == 0.0 || q == 1.0 {
            return Ok(q);
        }
        solve_increasing(|x| self.cdf(x) - q, |x| self.pdf(x), self.mean(), 0.0, 1.0)
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q == 0.0 || q == 1.0 {
            return Ok(1.0 - q);
        }
        // Upper quantiles are solved on the mirrored variable 1 - X ~ Beta(b, a),
        // where they sit near zero and keep full relative precision.
        let mirrored = Beta { a: self.b, b: self.a };
        Ok(1.0 - mirrored.ppf(q)?)
    }

    fn entropy(&self) -> f64 {
        let (a, b) = (self.a, self.b);
        ln_beta(a, b) - (a - 1.0) * digamma(a) - (b - 1.0) * digamma(b)
            + (a + b - 2.0) * digamma(a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform() {
        let d = Beta::new(1.0, 1.0).unwrap();
        for x in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert!((d.logpdf(x) - 0.0).abs() < 1e-12, "x={}", x);
            assert_relative_eq!(d.cdf(x), x, epsilon = 1e-12);
        }
        assert_eq!(d.entropy(), 0.0);
    }

    #[test]
    fn test_symmetry_when_a_equals_b() {
        let d = Beta::new(2.0, 2.0).unwrap();
        assert!((d.logpdf(0.2) - d.logpdf(0.8)).abs() < 1e-12);
        assert_relative_eq!(d.cdf(0.3), d.sf(0.7), epsilon = 1e-14);
        assert_relative_eq!(d.ppf(0.5).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_quantiles() {
        for &(a, b) in &[(0.5, 0.5), (2.0, 5.0), (0.1, 3.0), (40.0, 2.0)] {
            let d = Beta::new(a, b).unwrap();
            for &q in &[1e-6, 0.05, 0.5, 0.95, 1.0 - 1e-6] {
                let x = d.ppf(q).unwrap();
                assert!((d.cdf(x) - q).abs() < 1e-9, "a={a} b={b} q={q}");
                let y = d.isf(q).unwrap();
                assert!((d.sf(y) - q).abs() < 1e-9, "a={a} b={b} isf q={q}");
            }
        }
    }

    #[test]
    fn test_out_of_support() {
        let d = Beta::new(2.0, 3.0).unwrap();
        let lp = d.logpdf(-0.1);
        assert!(lp.is_infinite() && lp.is_sign_negative());
        assert_eq!(d.cdf(1.5), 1.0);
        assert_eq!(d.sf(-0.5), 1.0);
    }

    #[test]
    fn test_log_tails() {
        // I_x(5, 2) ~ 6 x^5 as x -> 0.
        let d = Beta::new(5.0, 2.0).unwrap();
        assert_eq!(d.cdf(1e-100), 0.0);
        let lower = -500.0 * 10f64.ln() + 6f64.ln();
        assert_relative_eq!(d.logcdf(1e-100), lower, max_relative = 1e-12);
        assert_relative_eq!(d.logsf(0.3), d.sf(0.3).ln(), max_relative = 1e-12);
        assert_relative_eq!(d.logcdf(0.8), d.cdf(0.8).ln(), max_relative = 1e-12);
        assert_eq!(d.logsf(1.0), f64::NEG_INFINITY);
        assert_eq!(d.logcdf(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_small_parameter_sampling_stays_in_support() {
        let d = Beta::new(1e-3, 1e-3).unwrap();
        let mut eng = Engine::seed_from_u64(8);
        for _ in 0..10_000 {
            let x = d.sample(&mut eng).unwrap();
            assert!((0.0..=1.0).contains(&x), "x={x}");
        }
    }

    #[test]
    fn test_sample_mean() {
        let d = Beta::new(2.0, 6.0).unwrap();
        let mut eng = Engine::seed_from_u64(12);
        let n = 100_000;
        let mean = (0..n).map(|_| d.sample(&mut eng).unwrap()).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 0.25, max_relative = 0.01);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Beta::new(0.0, 1.0).is_err());
        assert!(Beta::new(1.0, 0.0).is_err());
    }
}

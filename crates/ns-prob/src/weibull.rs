//! Weibull distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::{log1mexp, EULER_GAMMA};
use crate::params;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_exponential;

/// Weibull distribution with shape `k` and scale `lambda`.
///
/// Support: `x >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    k: f64,
    lambda: f64,
}

impl Weibull {
    pub fn new(k: f64, lambda: f64) -> Result<Self> {
        params::positive("k", k)?;
        params::positive("lambda", lambda)?;
        Ok(Self { k, lambda })
    }

    pub fn shape(&self) -> f64 {
        self.k
    }

    pub fn scale(&self) -> f64 {
        self.lambda
    }

    /// Cumulative hazard `(x/λ)^k`.
    #[inline]
    fn hazard(&self, x: f64) -> f64 {
        (x / self.lambda).powf(self.k)
    }
}

impl Sample for Weibull {
    type Value = f64;

    /// `λ · E^{1/k}` with `E` standard exponential.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.lambda * standard_exponential(engine).powf(1.0 / self.k))
    }
}

impl Continuous for Weibull {
    fn logpdf(&self, x: f64) -> f64 {
        let (k, lambda) = (self.k, self.lambda);
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            if k < 1.0 {
                return f64::INFINITY;
            }
            if k > 1.0 {
                return f64::NEG_INFINITY;
            }
            // k == 1 => exponential with rate 1/lambda
            return -lambda.ln();
        }

        let x_over_l = x / lambda;
        k.ln() - lambda.ln() + (k - 1.0) * x_over_l.ln() - x_over_l.powf(k)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -(-self.hazard(x)).exp_m1() }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 { f64::NEG_INFINITY } else { log1mexp(-self.hazard(x)) }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 { 1.0 } else { (-self.hazard(x)).exp() }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -self.hazard(x) }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.lambda * (-(-q).ln_1p()).powf(1.0 / self.k))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.lambda * (-q.ln()).powf(1.0 / self.k))
    }

    fn entropy(&self) -> f64 {
        EULER_GAMMA * (1.0 - 1.0 / self.k) + (self.lambda / self.k).ln() + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weibull_k1_matches_exponential() {
        let rate = 2.0;
        let w = Weibull::new(1.0, 1.0 / rate).unwrap();
        let e = crate::exponential::Exponential::new(rate).unwrap();
        for x in [0.0, 0.7, 3.0] {
            assert!((w.logpdf(x) - e.logpdf(x)).abs() < 1e-12, "x={x}");
            assert_relative_eq!(w.sf(x), e.sf(x), max_relative = 1e-14);
        }
        assert_relative_eq!(w.entropy(), e.entropy(), epsilon = 1e-14);
    }

    #[test]
    fn test_out_of_support() {
        let w = Weibull::new(2.0, 1.0).unwrap();
        let lp = w.logpdf(-0.1);
        assert!(lp.is_infinite() && lp.is_sign_negative());
        assert_eq!(w.cdf(-1.0), 0.0);
        assert_eq!(w.sf(-1.0), 1.0);
    }

    #[test]
    fn test_quantiles() {
        let w = Weibull::new(0.6, 3.0).unwrap();
        for &q in &[1e-12, 0.1, 0.5, 0.9] {
            assert_relative_eq!(w.cdf(w.ppf(q).unwrap()), q, max_relative = 1e-12);
            assert_relative_eq!(w.sf(w.isf(q).unwrap()), q, max_relative = 1e-12);
        }
        // Median: λ (ln 2)^{1/k}
        assert_relative_eq!(
            w.ppf(0.5).unwrap(),
            3.0 * std::f64::consts::LN_2.powf(1.0 / 0.6),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_sample_mean() {
        // k = 2: mean = λ √π / 2
        let w = Weibull::new(2.0, 1.5).unwrap();
        let mut eng = Engine::seed_from_u64(61);
        let n = 100_000;
        let mean = (0..n).map(|_| w.sample(&mut eng).unwrap()).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 1.5 * std::f64::consts::PI.sqrt() / 2.0, max_relative = 0.01);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Weibull::new(0.0, 1.0).is_err());
        assert!(Weibull::new(1.0, 0.0).is_err());
    }
}

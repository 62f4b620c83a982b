//! Logistic distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::{log_sigmoid, sigmoid};
use crate::params;
use crate::traits::{Continuous, Sample};

/// Logistic distribution with location `loc` and scale `scale`; the cdf is
/// the sigmoid of `(x - loc) / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    loc: f64,
    scale: f64,
}

impl Logistic {
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        params::finite("loc", loc)?;
        params::positive("scale", scale)?;
        Ok(Self { loc, scale })
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    fn z(&self, x: f64) -> f64 {
        (x - self.loc) / self.scale
    }
}

/// `ln(q / (1 - q))`.
#[inline]
fn logit(q: f64) -> f64 {
    q.ln() - (-q).ln_1p()
}

impl Sample for Logistic {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.loc + self.scale * logit(engine.next_f64_open01()))
    }
}

impl Continuous for Logistic {
    fn logpdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        log_sigmoid(z) + log_sigmoid(-z) - self.scale.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        sigmoid(self.z(x))
    }

    fn logcdf(&self, x: f64) -> f64 {
        log_sigmoid(self.z(x))
    }

    fn sf(&self, x: f64) -> f64 {
        sigmoid(-self.z(x))
    }

    fn logsf(&self, x: f64) -> f64 {
        log_sigmoid(-self.z(x))
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc + self.scale * logit(q))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * logit(q))
    }

    fn entropy(&self) -> f64 {
        self.scale.ln() + 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_values() {
        let d = Logistic::new(0.0, 1.0).unwrap();
        assert_relative_eq!(d.pdf(0.0), 0.25, epsilon = 1e-15);
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(d.sf(40.0), (-40.0f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(d.logcdf(-800.0), -800.0, max_relative = 1e-15);
        assert!(d.logpdf(1000.0).is_finite());
    }

    #[test]
    fn test_quantiles() {
        let d = Logistic::new(-1.0, 0.5).unwrap();
        for &q in &[1e-15, 0.25, 0.5, 0.9] {
            assert_relative_eq!(d.cdf(d.ppf(q).unwrap()), q, max_relative = 1e-12);
            assert_relative_eq!(d.sf(d.isf(q).unwrap()), q, max_relative = 1e-12);
        }
        assert_relative_eq!(d.ppf(0.5).unwrap(), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_sample_variance() {
        // Var = scale² π² / 3
        let d = Logistic::new(0.0, 1.0).unwrap();
        let mut eng = Engine::seed_from_u64(89);
        let n = 200_000;
        let xs: Vec<f64> = (0..n).map(|_| d.sample(&mut eng).unwrap()).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02, "mean={mean}");
        assert_relative_eq!(var, std::f64::consts::PI.powi(2) / 3.0, max_relative = 0.02);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Logistic::new(0.0, 0.0).is_err());
    }
}

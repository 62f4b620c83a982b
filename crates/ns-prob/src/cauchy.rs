//! Cauchy distribution.

use std::f64::consts::PI;

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::LN_PI;
use crate::params;
use crate::traits::{Continuous, Sample};

/// Standard Cauchy variate `tan(π(U - ½))`.
pub fn standard_cauchy<R: RngCore>(engine: &mut Engine<R>) -> f64 {
    (PI * (engine.next_f64_open01() - 0.5)).tan()
}

/// Standard Cauchy quantile, accurate in both tails.
fn standard_ppf(q: f64) -> f64 {
    if q == 0.0 {
        f64::NEG_INFINITY
    } else if q == 1.0 {
        f64::INFINITY
    } else if q < 0.5 {
        // tan(π(q - ½)) = -cot(πq)
        -1.0 / (PI * q).tan()
    } else {
        1.0 / (PI * (1.0 - q)).tan()
    }
}

/// Cauchy distribution with location `loc` and scale `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    loc: f64,
    scale: f64,
}

impl Cauchy {
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
}

impl Sample for Cauchy {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.loc + self.scale * standard_cauchy(engine))
    }
}

impl Continuous for Cauchy {
    fn logpdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        -LN_PI - self.scale.ln() - (z * z).ln_1p()
    }

    /// `atan2(1, -z) / π`, which stays relative-accurate as `z → -∞`.
    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        1.0f64.atan2(-z) / PI
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        1.0f64.atan2(z) / PI
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc + self.scale * standard_ppf(q))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * standard_ppf(q))
    }

    fn entropy(&self) -> f64 {
        (4.0 * PI * self.scale).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_values() {
        let d = Cauchy::new(0.0, 1.0).unwrap();
        assert_relative_eq!(d.pdf(0.0), 1.0 / PI, epsilon = 1e-15);
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(d.cdf(1.0), 0.75, epsilon = 1e-15);
        assert_relative_eq!(d.ppf(0.75).unwrap(), 1.0, epsilon = 1e-14);
        assert_eq!(d.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(d.ppf(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_tails_keep_relative_precision() {
        let d = Cauchy::new(0.0, 1.0).unwrap();
        // P(X > 1e10) ≈ 1/(π·1e10)
        assert_relative_eq!(d.sf(1e10), 1.0 / (PI * 1e10), max_relative = 1e-12);
        assert_relative_eq!(d.cdf(-1e10), 1.0 / (PI * 1e10), max_relative = 1e-12);
        assert_relative_eq!(d.isf(1e-12).unwrap(), 1.0 / (PI * 1e-12), max_relative = 1e-9);
    }

    #[test]
    fn test_location_scale() {
        let d = Cauchy::new(3.0, 2.0).unwrap();
        assert_relative_eq!(d.ppf(0.5).unwrap(), 3.0, epsilon = 1e-14);
        assert_relative_eq!(d.isf(0.25).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(d.entropy(), (8.0 * PI).ln(), epsilon = 1e-15);
    }

    #[test]
    fn test_sample_median() {
        let d = Cauchy::new(-1.0, 0.5).unwrap();
        let mut eng = Engine::seed_from_u64(5);
        let mut xs: Vec<f64> = (0..50_001).map(|_| d.sample(&mut eng).unwrap()).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert!((xs[25_000] + 1.0).abs() < 0.02, "median={}", xs[25_000]);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Cauchy::new(0.0, 0.0).is_err());
        assert!(Cauchy::new(f64::NAN, 1.0).is_err());
        assert!(Cauchy::new(0.0, 1.0).unwrap().ppf(1.5).is_err());
    }
}

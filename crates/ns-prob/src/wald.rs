//! Wald (inverse Gaussian) distribution.

use std::f64::consts::PI;

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::normal::ndtr;
use crate::params;
use crate::special::log_ndtr;
use crate::traits::Sample;
use crate::ziggurat::standard_normal;

/// Wald distribution with mean `mean` and shape (scale) `scale`.
///
/// Density and tail functions are inherent methods; quantiles and entropy
/// have no closed form and are not provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wald {
    mean: f64,
    scale: f64,
}

impl Wald {
    pub fn new(mean: f64, scale: f64) -> Result<Self> {
        params::positive("mean", mean)?;
        params::positive("scale", scale)?;
        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn logpdf(&self, x: f64) -> f64 {
        if !x.is_finite() || x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let (mu, lambda) = (self.mean, self.scale);
        let d = x - mu;
        0.5 * (lambda / (2.0 * PI * x * x * x)).ln() - lambda * d * d / (2.0 * mu * mu * x)
    }

    pub fn pdf(&self, x: f64) -> f64 {
        self.logpdf(x).exp()
    }

    /// `(√(λ/x) (x/μ - 1), √(λ/x) (x/μ + 1))` and the weight `ln e^{2λ/μ}`.
    fn cdf_terms(&self, x: f64) -> (f64, f64, f64) {
        let r = (self.scale / x).sqrt();
        let ratio = x / self.mean;
        (r * (ratio - 1.0), r * (ratio + 1.0), 2.0 * self.scale / self.mean)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        let (a, b, w) = self.cdf_terms(x);
        // e^{2λ/μ} Φ(-b) overflows separately; combine in log space.
        (ndtr(a) + (w + log_ndtr(-b)).exp()).min(1.0)
    }

    pub fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        let (a, b, w) = self.cdf_terms(x);
        (ndtr(-a) - (w + log_ndtr(-b)).exp()).max(0.0)
    }
}

impl Sample for Wald {
    type Value = f64;

    /// Michael, Schucany & Haas (1976): root of the quadratic in a χ²(1)
    /// variate, then a coin flip between the two roots.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let (mu, lambda) = (self.mean, self.scale);
        let n = standard_normal(engine);
        let y = mu * n * n;
        if y == 0.0 {
            return Ok(mu);
        }
        // μ + μ/(2λ) (y - s) rewritten as μ·4λy/(s + y)², which keeps the
        // small root positive for large y.
        let s = (4.0 * lambda * y + y * y).sqrt();
        let x = mu * 4.0 * lambda * y / ((s + y) * (s + y));
        let u = engine.next_f64_half_open01();
        if u <= mu / (mu + x) { Ok(x) } else { Ok(mu * mu / x) }
    }
}

//! Normal (Gaussian) distribution.

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

use ns_core::Result;
use rand::RngCore;
use statrs::function::erf::{erfc, erfc_inv};

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::LN_SQRT_2PI;
use crate::params;
use crate::special::log_ndtr;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_normal;

/// Standard normal cdf `Φ(z)`.
#[inline]
pub(crate) fn ndtr(z: f64) -> f64 {
    0.5 * erfc(-z * FRAC_1_SQRT_2)
}

/// Standard normal quantile `Φ⁻¹(q)` for `q` in `[0, 1]`.
#[inline]
pub(crate) fn ndtri(q: f64) -> f64 {
    if q == 0.0 {
        return f64::NEG_INFINITY;
    }
    if q == 1.0 {
        return f64::INFINITY;
    }
    -SQRT_2 * erfc_inv(2.0 * q)
}

/// Normal distribution `N(mu, sigma)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        params::finite("mu", mu)?;
        params::positive("sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    /// `N(0, 1)`.
    pub fn standard() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    fn z(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl Sample for Normal {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.mu + self.sigma * standard_normal(engine))
    }
}

impl Continuous for Normal {
    /// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
    fn logpdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        -0.5 * z * z - self.sigma.ln() - LN_SQRT_2PI
    }

    fn cdf(&self, x: f64) -> f64 {
        ndtr(self.z(x))
    }

    fn logcdf(&self, x: f64) -> f64 {
        log_ndtr(self.z(x))
    }

    fn sf(&self, x: f64) -> f64 {
        ndtr(-self.z(x))
    }

    fn logsf(&self, x: f64) -> f64 {
        log_ndtr(-self.z(x))
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.mu + self.sigma * ndtri(q))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        // Φ⁻¹(1 - q) = -Φ⁻¹(q), evaluated from q directly.
        Ok(self.mu - self.sigma * ndtri(q))
    }

    fn entropy(&self) -> f64 {
        0.5 * (2.0 * PI * std::f64::consts::E * self.sigma * self.sigma).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_at_zero() {
        let d = Normal::standard();
        assert!((d.logpdf(0.0) + LN_SQRT_2PI).abs() < 1e-12);
        assert_relative_eq!(d.pdf(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-15);
        assert!((d.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!(d.ppf(0.5).unwrap().abs() < 1e-15);
    }

    #[test]
    fn test_symmetry() {
        let d = Normal::new(0.0, 2.0).unwrap();
        assert!((d.logpdf(1.3) - d.logpdf(-1.3)).abs() < 1e-12);
        assert_relative_eq!(d.cdf(-1.3), d.sf(1.3), epsilon = 1e-16);
        assert_relative_eq!(d.ppf(0.1).unwrap(), -d.ppf(0.9).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_known_quantiles() {
        let d = Normal::standard();
        assert_relative_eq!(d.ppf(0.975).unwrap(), 1.959_963_984_540_054, epsilon = 1e-12);
        assert_relative_eq!(d.isf(0.025).unwrap(), 1.959_963_984_540_054, epsilon = 1e-12);
        assert_relative_eq!(d.isf(1e-300).unwrap(), 37.206_355_328_485_134, max_relative = 1e-10);
        assert_eq!(d.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(d.ppf(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_tails() {
        let d = Normal::standard();
        // sf keeps relative precision where 1 - cdf would be 0.
        assert_relative_eq!(d.sf(10.0), 7.619_853_024_160_527e-24, max_relative = 1e-12);
        assert!(d.logsf(40.0).is_finite());
        assert!(d.logcdf(-40.0) < -800.0);
    }

    #[test]
    fn test_entropy() {
        let d = Normal::new(3.0, 1.0).unwrap();
        assert_relative_eq!(d.entropy(), 1.418_938_533_204_672_7, epsilon = 1e-14);
    }

    #[test]
    fn test_invalid_sigma() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }
}

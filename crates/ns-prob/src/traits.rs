//! Capability traits implemented by the distribution value types.
//!
//! A distribution is constructed once with validated parameters
//! (`Gamma::new(shape, scale)?`) and then sampled or evaluated any number of
//! times without re-validation.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;

/// Draw variates from a distribution.
pub trait Sample {
    /// Variate type (`f64` for continuous, `u64` for counts).
    type Value;

    /// Draw one variate, consuming uniforms from `engine`.
    ///
    /// Fails only when a rejection loop exhausts the engine's budget or the
    /// variate is not representable.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<Self::Value>;
}

/// Analytic functions of a continuous univariate distribution.
///
/// Density and probability functions never fail: outside the support they
/// return 0 (or −∞ in log form). Quantiles fail for `q` outside `[0, 1]`.
pub trait Continuous {
    /// Log-density at `x`.
    fn logpdf(&self, x: f64) -> f64;

    /// Density at `x`.
    fn pdf(&self, x: f64) -> f64 {
        self.logpdf(x).exp()
    }

    /// `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// `ln P(X <= x)`.
    fn logcdf(&self, x: f64) -> f64 {
        self.cdf(x).ln()
    }

    /// `P(X > x)`, evaluated without forming `1 - cdf(x)` where that cancels.
    fn sf(&self, x: f64) -> f64;

    /// `ln P(X > x)`.
    fn logsf(&self, x: f64) -> f64 {
        self.sf(x).ln()
    }

    /// Quantile function, the inverse of [`Continuous::cdf`].
    fn ppf(&self, q: f64) -> Result<f64>;

    /// Inverse of [`Continuous::sf`].
    fn isf(&self, q: f64) -> Result<f64>;

    /// Differential entropy in nats.
    fn entropy(&self) -> f64;
}

/// Probability functions of a distribution over non-negative integers.
pub trait Discrete {
    /// Log-probability of `k`.
    fn logpmf(&self, k: u64) -> f64;

    /// Probability of `k`.
    fn pmf(&self, k: u64) -> f64 {
        self.logpmf(k).exp()
    }

    /// `P(K <= k)`.
    fn cdf(&self, k: u64) -> f64;

    /// `ln P(K <= k)`.
    fn logcdf(&self, k: u64) -> f64 {
        self.cdf(k).ln()
    }

    /// `P(K > k)`.
    fn sf(&self, k: u64) -> f64;

    /// `ln P(K > k)`.
    fn logsf(&self, k: u64) -> f64 {
        self.sf(k).ln()
    }
}

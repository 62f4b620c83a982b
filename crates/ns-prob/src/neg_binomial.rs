//! Negative binomial distribution.

use ns_core::Result;
use rand::RngCore;

use crate::beta::inc_beta;
use crate::engine::Engine;
use crate::gamma::standard_gamma;
use crate::params;
use crate::poisson::sample_poisson;
use crate::special::{ln_factorial, loggam};
use crate::traits::{Discrete, Sample};

/// Negative binomial parameterized by `n` (successes, real-valued) and `p`.
///
/// PMF (counting failures `k` before `n` successes):
/// `P(K=k) = C(k+n-1, k) * (1-p)^k * p^n`
///
/// - `n > 0`
/// - `0 < p < 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    n: f64,
    p: f64,
}

impl NegativeBinomial {
    pub fn new(n: f64, p: f64) -> Result<Self> {
        params::positive("n", n)?;
        params::open_unit("p", p)?;
        Ok(Self { n, p })
    }

    pub fn n(&self) -> f64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Sample for NegativeBinomial {
    type Value = u64;

    /// Gamma–Poisson mixture: `Poisson(Gamma(n, (1-p)/p))`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        let rate = standard_gamma(engine, self.n)? * (1.0 - self.p) / self.p;
        sample_poisson(engine, rate)
    }
}

impl Discrete for NegativeBinomial {
    fn logpmf(&self, k: u64) -> f64 {
        let kf = k as f64;
        let ln_coeff = loggam(kf + self.n) - loggam(self.n) - ln_factorial(k);
        ln_coeff + self.n * self.p.ln() + kf * (-self.p).ln_1p()
    }

    fn cdf(&self, k: u64) -> f64 {
        inc_beta(self.n, k as f64 + 1.0, self.p)
    }

    fn sf(&self, k: u64) -> f64 {
        inc_beta(k as f64 + 1.0, self.n, 1.0 - self.p)
    }
}

//! Rayleigh distribution.

use std::f64::consts::LN_2;

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::{log1mexp, EULER_GAMMA};
use crate::params;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_exponential;

/// Rayleigh distribution with scale `sigma`: `p(x) = x/σ² exp(-x²/2σ²)`, `x >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    pub fn new(sigma: f64) -> Result<Self> {
        params::positive("sigma", sigma)?;
        Ok(Self { sigma })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// `x² / 2σ²`, the negated log-survival.
    #[inline]
    fn half_sq(&self, x: f64) -> f64 {
        let z = x / self.sigma;
        0.5 * z * z
    }
}

impl Sample for Rayleigh {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.sigma * (2.0 * standard_exponential(engine)).sqrt())
    }
}

impl Continuous for Rayleigh {
    fn logpdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        x.ln() - 2.0 * self.sigma.ln() - self.half_sq(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -(-self.half_sq(x)).exp_m1() }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 { f64::NEG_INFINITY } else { log1mexp(-self.half_sq(x)) }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 { 1.0 } else { (-self.half_sq(x)).exp() }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -self.half_sq(x) }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.sigma * (-2.0 * (-q).ln_1p()).sqrt())
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.sigma * (-2.0 * q.ln()).sqrt())
    }

    fn entropy(&self) -> f64 {
        1.0 + self.sigma.ln() - 0.5 * LN_2 + 0.5 * EULER_GAMMA
    }
}

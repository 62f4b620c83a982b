//! Exponential distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::log1mexp;
use crate::params;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_exponential;

/// Exponential distribution with rate `rate` (mean `1/rate`).
///
/// Support: `x >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self> {
        params::positive("rate", rate)?;
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Sample for Exponential {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(standard_exponential(engine) / self.rate)
    }
}

impl Continuous for Exponential {
    fn logpdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        self.rate.ln() - self.rate * x
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -(-self.rate * x).exp_m1() }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 { f64::NEG_INFINITY } else { log1mexp(-self.rate * x) }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 { 1.0 } else { (-self.rate * x).exp() }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -self.rate * x }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(-(-q).ln_1p() / self.rate)
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(-q.ln() / self.rate)
    }

    fn entropy(&self) -> f64 {
        1.0 - self.rate.ln()
    }
}

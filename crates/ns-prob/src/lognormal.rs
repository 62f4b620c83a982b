//! Log-normal distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::normal::Normal;
use crate::traits::{Continuous, Sample};

/// Log-normal distribution: `ln X ~ Normal(mu, sigma)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    log: Normal,
}

impl LogNormal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        Ok(Self { log: Normal::new(mu, sigma)? })
    }

    pub fn mu(&self) -> f64 {
        self.log.mu()
    }

    pub fn sigma(&self) -> f64 {
        self.log.sigma()
    }
}

impl Sample for LogNormal {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.log.sample(engine)?.exp())
    }
}

impl Continuous for LogNormal {
    fn logpdf(&self, x: f64) -> f64 {
        if !x.is_finite() || x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let lx = x.ln();
        self.log.logpdf(lx) - lx
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { self.log.cdf(x.ln()) }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 { f64::NEG_INFINITY } else { self.log.logcdf(x.ln()) }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 { 1.0 } else { self.log.sf(x.ln()) }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { self.log.logsf(x.ln()) }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        Ok(self.log.ppf(q)?.exp())
    }

    fn isf(&self, q: f64) -> Result<f64> {
        Ok(self.log.isf(q)?.exp())
    }

    fn entropy(&self) -> f64 {
        self.log.entropy() + self.log.mu()
    }
}

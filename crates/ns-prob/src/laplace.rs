//! Laplace (double exponential) distribution.

use std::f64::consts::LN_2;

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::params;
use crate::traits::{Continuous, Sample};

/// Laplace distribution with location `loc` and scale `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    loc: f64,
    scale: f64,
}

impl Laplace {
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

    /// Standardized lower quantile; `1 - q` is taken only where it is exact.
    fn standard_ppf(q: f64) -> f64 {
        if q <= 0.5 { (2.0 * q).ln() } else { -(2.0 * (1.0 - q)).ln() }
    }
}

impl Sample for Laplace {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.loc + self.scale * Self::standard_ppf(engine.next_f64_open01()))
    }
}

impl Continuous for Laplace {
    fn logpdf(&self, x: f64) -> f64 {
        -LN_2 - self.scale.ln() - ((x - self.loc) / self.scale).abs()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z < 0.0 { 0.5 * z.exp() } else { 1.0 - 0.5 * (-z).exp() }
    }

    fn logcdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z < 0.0 { z - LN_2 } else { (-0.5 * (-z).exp()).ln_1p() }
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z > 0.0 { 0.5 * (-z).exp() } else { 1.0 - 0.5 * z.exp() }
    }

    fn logsf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z > 0.0 { -z - LN_2 } else { (-0.5 * z.exp()).ln_1p() }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc + self.scale * Self::standard_ppf(q))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * Self::standard_ppf(q))
    }

    fn entropy(&self) -> f64 {
        1.0 + (2.0 * self.scale).ln()
    }
}

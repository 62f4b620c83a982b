//! Gumbel (type I extreme value, maximum) distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::{log1mexp, EULER_GAMMA};
use crate::params;
use crate::traits::{Continuous, Sample};

/// Gumbel distribution with location `loc` and scale `scale`:
/// `cdf(x) = exp(-exp(-(x - loc)/scale))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gumbel {
    loc: f64,
    scale: f64,
}

impl Gumbel {
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

    /// `exp(-z)`, the negated log-cdf.
    #[inline]
    fn neg_logcdf(&self, x: f64) -> f64 {
        (-(x - self.loc) / self.scale).exp()
    }
}

impl Sample for Gumbel {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let u = engine.next_f64_open01();
        Ok(self.loc - self.scale * (-u.ln()).ln())
    }
}

impl Continuous for Gumbel {
    fn logpdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        -self.scale.ln() - z - (-z).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        (-self.neg_logcdf(x)).exp()
    }

    fn logcdf(&self, x: f64) -> f64 {
        -self.neg_logcdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        -(-self.neg_logcdf(x)).exp_m1()
    }

    fn logsf(&self, x: f64) -> f64 {
        log1mexp(-self.neg_logcdf(x))
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * (-q.ln()).ln())
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * (-(-q).ln_1p()).ln())
    }

    fn entropy(&self) -> f64 {
        self.scale.ln() + EULER_GAMMA + 1.0
    }
}

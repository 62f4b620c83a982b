//! Pareto type II (Lomax) distribution with unit scale.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::log1mexp;
use crate::params;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_exponential;

/// Lomax distribution with shape `a`: `p(x) = a / (1 + x)^{a+1}` on `x >= 0`.
///
/// `X + 1` is classical Pareto with minimum 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    a: f64,
}

impl Pareto {
    pub fn new(a: f64) -> Result<Self> {
        params::positive("a", a)?;
        Ok(Self { a })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// `ln sf(x) = -a ln(1 + x)`.
    #[inline]
    fn log_survival(&self, x: f64) -> f64 {
        -self.a * x.ln_1p()
    }
}

impl Sample for Pareto {
    type Value = f64;

    /// `exp(E / a) - 1`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok((standard_exponential(engine) / self.a).exp_m1())
    }
}

impl Continuous for Pareto {
    fn logpdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        self.a.ln() - (self.a + 1.0) * x.ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { -self.log_survival(x).exp_m1() }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 { f64::NEG_INFINITY } else { log1mexp(self.log_survival(x)) }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 { 1.0 } else { self.log_survival(x).exp() }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { self.log_survival(x) }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok((-(-q).ln_1p() / self.a).exp_m1())
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok((-q.ln() / self.a).exp_m1())
    }

    fn entropy(&self) -> f64 {
        1.0 + 1.0 / self.a - self.a.ln()
    }
}

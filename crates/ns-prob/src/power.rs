//! Power-function distribution on `[0, 1]`.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::log1mexp;
use crate::params;
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_exponential;

/// Power distribution with exponent `a`: `p(x) = a x^{a-1}`, `cdf(x) = x^a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power {
    a: f64,
}

impl Power {
    pub fn new(a: f64) -> Result<Self> {
        params::positive("a", a)?;
        Ok(Self { a })
    }

    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Sample for Power {
    type Value = f64;

    /// `(1 - exp(-E))^{1/a}`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok((-(-standard_exponential(engine)).exp_m1()).powf(1.0 / self.a))
    }
}

impl Continuous for Power {
    fn logpdf(&self, x: f64) -> f64 {
        let a = self.a;
        if !(0.0..=1.0).contains(&x) {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            if a < 1.0 {
                return f64::INFINITY;
            }
            if a > 1.0 {
                return f64::NEG_INFINITY;
            }
            return 0.0;
        }
        a.ln() + (a - 1.0) * x.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            x.powf(self.a)
        }
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            f64::NEG_INFINITY
        } else if x >= 1.0 {
            0.0
        } else {
            self.a * x.ln()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            1.0
        } else if x >= 1.0 {
            0.0
        } else {
            -(self.a * x.ln()).exp_m1()
        }
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            f64::NEG_INFINITY
        } else {
            log1mexp(self.a * x.ln())
        }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(q.powf(1.0 / self.a))
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(((-q).ln_1p() / self.a).exp())
    }

    fn entropy(&self) -> f64 {
        1.0 - 1.0 / self.a - self.a.ln()
    }
}

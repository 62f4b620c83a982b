//! Fisher–Snedecor F and noncentral F distributions.

use ns_core::{Error, Result};
use rand::RngCore;
use statrs::function::gamma::digamma;

use crate::beta::{inc_beta, Beta};
use crate::chi_square::{ln_chi_square, NoncentralChiSquare};
use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::math::log_sigmoid;
use crate::params;
use crate::special::{ln_beta, ln_inc_beta_parts};
use crate::traits::{Continuous, Sample};

/// Exponentiates a log-space F draw. Tiny degrees of freedom push the ratio
/// past the largest double, which is reported instead of returned as `inf`.
fn ratio_from_ln(ln_ratio: f64, d1: f64, d2: f64) -> Result<f64> {
    let x = ln_ratio.exp();
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::Computation(format!(
            "F draw overflows f64 (d1={}, d2={}, ln x={})",
            d1, d2, ln_ratio
        )))
    }
}

/// F distribution with `d1` numerator and `d2` denominator degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherF {
    d1: f64,
    d2: f64,
}

impl FisherF {
    pub fn new(d1: f64, d2: f64) -> Result<Self> {
        params::positive("d1", d1)?;
        params::positive("d2", d2)?;
        Ok(Self { d1, d2 })
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// `ln(d2 / (d1 x))`; both beta arguments are sigmoids of it.
    fn ln_odds(&self, x: f64) -> f64 {
        self.d2.ln() - self.d1.ln() - x.ln()
    }

    /// Lower quantile from `Y = d1 X / (d1 X + d2) ~ Beta(d1/2, d2/2)`.
    fn lower_quantile(&self, q: f64) -> Result<f64> {
        let y = Beta::new(0.5 * self.d1, 0.5 * self.d2)?.ppf(q)?;
        Ok(self.d2 / self.d1 * y / (1.0 - y))
    }

    /// Upper quantile from `W = d2 / (d2 + d1 X) ~ Beta(d2/2, d1/2)`.
    fn upper_quantile(&self, q: f64) -> Result<f64> {
        let w = Beta::new(0.5 * self.d2, 0.5 * self.d1)?.ppf(q)?;
        Ok(self.d2 / self.d1 * (1.0 - w) / w)
    }
}

impl Sample for FisherF {
    type Value = f64;

    /// `(χ²(d1)/d1) / (χ²(d2)/d2)`, formed as a difference of logs.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let ln_num = ln_chi_square(engine, self.d1)? - self.d1.ln();
        let ln_den = ln_chi_square(engine, self.d2)? - self.d2.ln();
        ratio_from_ln(ln_num - ln_den, self.d1, self.d2)
    }
}

impl Continuous for FisherF {
    fn logpdf(&self, x: f64) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        let a = 0.5 * d1;
        let ln_norm = 0.5 * (d1 * d1.ln() + d2 * d2.ln()) - ln_beta(a, 0.5 * d2);
        if x == 0.0 {
            if d1 < 2.0 {
                return f64::INFINITY;
            }
            if d1 > 2.0 {
                return f64::NEG_INFINITY;
            }
            return ln_norm - 0.5 * (d1 + d2) * d2.ln();
        }
        ln_norm + (a - 1.0) * x.ln() - 0.5 * (d1 + d2) * (d2 + d1 * x).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let v = self.d1 * x;
        inc_beta(0.5 * self.d1, 0.5 * self.d2, v / (v + self.d2))
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        inc_beta(0.5 * self.d2, 0.5 * self.d1, self.d2 / (self.d2 + self.d1 * x))
    }

    fn logcdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        // d1 x / (d1 x + d2) = sigmoid(-r)
        let r = self.ln_odds(x);
        ln_inc_beta_parts(0.5 * self.d1, 0.5 * self.d2, log_sigmoid(-r), log_sigmoid(r))
    }

    fn logsf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let r = self.ln_odds(x);
        ln_inc_beta_parts(0.5 * self.d2, 0.5 * self.d1, log_sigmoid(r), log_sigmoid(-r))
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q > 0.5 { self.upper_quantile(1.0 - q) } else { self.lower_quantile(q) }
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q > 0.5 { self.lower_quantile(1.0 - q) } else { self.upper_quantile(q) }
    }

    fn entropy(&self) -> f64 {
        let (a, b) = (0.5 * self.d1, 0.5 * self.d2);
        (self.d2 / self.d1).ln() + ln_beta(a, b) + (1.0 - a) * digamma(a) - (1.0 + b) * digamma(b)
            + (a + b) * digamma(a + b)
    }
}

/// Noncentral F with degrees of freedom `d1`, `d2` and noncentrality `nc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoncentralF {
    numerator: NoncentralChiSquare,
    d2: f64,
}

impl NoncentralF {
    pub fn new(d1: f64, d2: f64, nc: f64) -> Result<Self> {
        params::positive("d2", d2)?;
        Ok(Self { numerator: NoncentralChiSquare::new(d1, nc)?, d2 })
    }

    pub fn d1(&self) -> f64 {
        self.numerator.df()
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    pub fn nc(&self) -> f64 {
        self.numerator.nc()
    }
}

impl Sample for NoncentralF {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let ln_num = self.numerator.ln_sample(engine)? - self.d1().ln();
        let ln_den = ln_chi_square(engine, self.d2)? - self.d2.ln();
        ratio_from_ln(ln_num - ln_den, self.d1(), self.d2)
    }
}

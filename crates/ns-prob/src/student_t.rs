//! Student-t distribution.

use std::f64::consts::LN_2;

use ns_core::{Error, Result};
use rand::RngCore;
use statrs::function::gamma::digamma;

use crate::beta::inc_beta;
use crate::chi_square::ln_chi_square;
use crate::engine::Engine;
use crate::inverse::{check_probability, solve_increasing};
use crate::math::{log_sigmoid, LN_PI};
use crate::normal::ndtri;
use crate::params;
use crate::special::{ln_beta, ln_inc_beta_parts, loggam};
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_normal;

/// Standard Student-t variate `N / sqrt(χ²(df) / df)`.
///
/// The magnitude is built in log space since χ² underflows for tiny `df`;
/// a draw beyond the largest double is an [`Error::Computation`].
pub fn standard_t<R: RngCore>(engine: &mut Engine<R>, df: f64) -> Result<f64> {
    let n = standard_normal(engine);
    let ln_chi2 = ln_chi_square(engine, df)?;
    let t = (n.abs().ln() - 0.5 * (ln_chi2 - df.ln())).exp().copysign(n);
    if t.is_finite() {
        Ok(t)
    } else {
        Err(Error::Computation(format!("t draw overflows f64 (df={})", df)))
    }
}

/// Student-t distribution with `df` degrees of freedom, location `loc` and scale `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: f64,
    loc: f64,
    scale: f64,
}

impl StudentT {
    pub fn new(df: f64, loc: f64, scale: f64) -> Result<Self> {
        params::positive("df", df)?;
        params::finite("loc", loc)?;
        params::positive("scale", scale)?;
        Ok(Self { df, loc, scale })
    }

    /// Standard form: `loc = 0`, `scale = 1`.
    pub fn standard(df: f64) -> Result<Self> {
        Self::new(df, 0.0, 1.0)
    }

    pub fn df(&self) -> f64 {
        self.df
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn standard_logpdf(&self, z: f64) -> f64 {
        let nu = self.df;
        let a = loggam(0.5 * (nu + 1.0)) - loggam(0.5 * nu);
        let b = -0.5 * (nu.ln() + LN_PI);
        a + b - 0.5 * (nu + 1.0) * (z * z / nu).ln_1p()
    }

    /// `P(T <= -|z|)` for the standard t.
    fn lower_tail(&self, z: f64) -> f64 {
        let nu = self.df;
        let z2 = z * z;
        if z2 < 1.0 {
            // Near the center ν/(ν+z²) rounds to 1; use the complementary form.
            0.5 - 0.5 * inc_beta(0.5, 0.5 * nu, z2 / (nu + z2))
        } else {
            0.5 * inc_beta(0.5 * nu, 0.5, nu / (nu + z2))
        }
    }

    fn standard_cdf(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        let tail = self.lower_tail(z);
        if z <= 0.0 { tail } else { 1.0 - tail }
    }

    /// `ln P(T <= z)`, finite for every finite `z`.
    fn standard_logcdf(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        if z > 0.0 {
            return (-self.lower_tail(z)).ln_1p();
        }
        if z * z < 1.0 {
            return self.lower_tail(z).ln();
        }
        // ν/(ν+z²) = sigmoid(r), kept in logs so that z² may overflow.
        let r = self.df.ln() - 2.0 * (-z).ln();
        -LN_2 + ln_inc_beta_parts(0.5 * self.df, 0.5, log_sigmoid(r), log_sigmoid(-r))
    }

    /// Standard quantile for `q <= 0.5`, solved on `(-∞, 0]`.
    fn lower_quantile(&self, q: f64) -> Result<f64> {
        if q == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if q == 0.5 {
            return Ok(0.0);
        }
        let x0 = ndtri(q);
        solve_increasing(
            |z| self.lower_tail(z) - q,
            |z| self.standard_logpdf(z).exp(),
            x0,
            f64::NEG_INFINITY,
            0.0,
        )
    }

    /// Standard quantile for any `q` in `[0, 1]`; `1 - q` is exact for `q >= 0.5`.
    fn standard_ppf(&self, q: f64) -> Result<f64> {
        if q > 0.5 { Ok(-self.lower_quantile(1.0 - q)?) } else { self.lower_quantile(q) }
    }
}

impl Sample for StudentT {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.loc + self.scale * standard_t(engine, self.df)?)
    }
}

impl Continuous for StudentT {
    fn logpdf(&self, x: f64) -> f64 {
        self.standard_logpdf((x - self.loc) / self.scale) - self.scale.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        self.standard_cdf((x - self.loc) / self.scale)
    }

    fn sf(&self, x: f64) -> f64 {
        self.standard_cdf((self.loc - x) / self.scale)
    }

    fn logcdf(&self, x: f64) -> f64 {
        self.standard_logcdf((x - self.loc) / self.scale)
    }

    fn logsf(&self, x: f64) -> f64 {
        self.standard_logcdf((self.loc - x) / self.scale)
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc + self.scale * self.standard_ppf(q)?)
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        Ok(self.loc - self.scale * self.standard_ppf(q)?)
    }

    fn entropy(&self) -> f64 {
        let nu = self.df;
        let h = 0.5 * (nu + 1.0) * (digamma(0.5 * (nu + 1.0)) - digamma(0.5 * nu))
            + 0.5 * nu.ln()
            + ln_beta(0.5 * nu, 0.5);
        h + self.scale.ln()
    }
}

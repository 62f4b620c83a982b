//! Chi-square and noncentral chi-square distributions.

use std::f64::consts::LN_2;

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::gamma::{ln_standard_gamma, standard_gamma, Gamma};
use crate::params;
use crate::poisson::sample_poisson;
use crate::traits::{Continuous, Sample};

/// One draw from χ²(`df`) as `2 · Gamma(df/2, 1)`.
pub(crate) fn sample_chi_square<R: RngCore>(engine: &mut Engine<R>, df: f64) -> Result<f64> {
    Ok(2.0 * standard_gamma(engine, 0.5 * df)?)
}

/// `ln` of a χ²(`df`) draw; finite even when the draw itself underflows.
pub(crate) fn ln_chi_square<R: RngCore>(engine: &mut Engine<R>, df: f64) -> Result<f64> {
    Ok(LN_2 + ln_standard_gamma(engine, 0.5 * df)?)
}

/// Chi-square distribution with `df` degrees of freedom.
///
/// Identical to Gamma(`df/2`, scale 2); all analytic functions delegate there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    df: f64,
    gamma: Gamma,
}

impl ChiSquare {
    pub fn new(df: f64) -> Result<Self> {
        params::positive("df", df)?;
        Ok(Self { df, gamma: Gamma::new(0.5 * df, 2.0)? })
    }

    pub fn df(&self) -> f64 {
        self.df
    }
}

impl Sample for ChiSquare {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        sample_chi_square(engine, self.df)
    }
}

impl Continuous for ChiSquare {
    fn logpdf(&self, x: f64) -> f64 {
        self.gamma.logpdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.gamma.sf(x)
    }

    fn logcdf(&self, x: f64) -> f64 {
        self.gamma.logcdf(x)
    }

    fn logsf(&self, x: f64) -> f64 {
        self.gamma.logsf(x)
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        self.gamma.ppf(q)
    }

    fn isf(&self, q: f64) -> Result<f64> {
        self.gamma.isf(q)
    }

    fn entropy(&self) -> f64 {
        self.gamma.entropy()
    }
}

/// Noncentral chi-square with `df` degrees of freedom and noncentrality `nc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoncentralChiSquare {
    df: f64,
    nc: f64,
}

impl NoncentralChiSquare {
    pub fn new(df: f64, nc: f64) -> Result<Self> {
        params::positive("df", df)?;
        params::non_negative("nc", nc)?;
        Ok(Self { df, nc })
    }

    pub fn df(&self) -> f64 {
        self.df
    }

    pub fn nc(&self) -> f64 {
        self.nc
    }

    /// Same mixture as [`Sample::sample`], returned as `ln` of the draw.
    pub(crate) fn ln_sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        if self.nc == 0.0 {
            return ln_chi_square(engine, self.df);
        }
        let k = sample_poisson(engine, 0.5 * self.nc)?;
        ln_chi_square(engine, self.df + 2.0 * k as f64)
    }
}

impl Sample for NoncentralChiSquare {
    type Value = f64;

    /// Poisson mixture: `k ~ Poisson(nc/2)`, then `χ²(df + 2k)`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        if self.nc == 0.0 {
            return sample_chi_square(engine, self.df);
        }
        let k = sample_poisson(engine, 0.5 * self.nc)?;
        sample_chi_square(engine, self.df + 2.0 * k as f64)
    }
}

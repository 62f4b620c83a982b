//! Gamma distribution.

use ns_core::Result;
use rand::RngCore;
use statrs::function::gamma::{digamma, gamma_lr, gamma_ur};

use crate::engine::{rejection_exhausted, Engine};
use crate::inverse::{check_probability, solve_increasing};
use crate::normal::ndtri;
use crate::params;
use crate::special::{ln_gamma_p, ln_gamma_q, loggam};
use crate::traits::{Continuous, Sample};
use crate::ziggurat::standard_normal;

/// One draw from Gamma(`shape`, 1). `shape` must be finite and > 0.
///
/// Marsaglia & Tsang (2000) squeeze for `shape >= 1`; below that the draw is
/// boosted from Gamma(`shape + 1`) and corrected by `U^(1/shape)`.
pub fn standard_gamma<R: RngCore>(engine: &mut Engine<R>, shape: f64) -> Result<f64> {
    if shape >= 1.0 {
        marsaglia_tsang(engine, shape)
    } else {
        Ok(ln_standard_gamma(engine, shape)?.exp())
    }
}

/// `ln` of a Gamma(`shape`, 1) draw.
///
/// For small shapes the variate itself underflows long before its logarithm
/// does, so ratios of gamma draws are formed in log space.
pub(crate) fn ln_standard_gamma<R: RngCore>(engine: &mut Engine<R>, shape: f64) -> Result<f64> {
    if shape >= 1.0 {
        return Ok(marsaglia_tsang(engine, shape)?.ln());
    }
    let boosted = marsaglia_tsang(engine, shape + 1.0)?;
    Ok(boosted.ln() + engine.next_f64_open01().ln() / shape)
}

fn marsaglia_tsang<R: RngCore>(engine: &mut Engine<R>, shape: f64) -> Result<f64> {
    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    let budget = engine.max_rejections();
    for _ in 0..budget {
        let (x, v) = loop {
            let x = standard_normal(engine);
            let v = 1.0 + c * x;
            if v > 0.0 {
                break (x, v);
            }
        };
        let v = v * v * v;
        let u = engine.next_f64_open01();
        let x2 = x * x;
        if u < 1.0 - 0.0331 * x2 * x2 || u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
            return Ok(d * v);
        }
    }
    Err(rejection_exhausted("gamma", budget))
}

/// Gamma distribution with `shape` (k) and `scale` (θ).
///
/// Parameterization:
/// - `shape > 0`
/// - `scale > 0` (rate is `1/scale`)
/// Support: `x >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        params::positive("shape", shape)?;
        params::positive("scale", scale)?;
        Ok(Self { shape, scale })
    }

    /// Gamma(`shape`, 1/`rate`).
    pub fn with_rate(shape: f64, rate: f64) -> Result<Self> {
        params::positive("rate", rate)?;
        Self::new(shape, 1.0 / rate)
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Log-density of the unit-scale distribution.
    fn standard_logpdf(&self, y: f64) -> f64 {
        let k = self.shape;
        if y < 0.0 {
            return f64::NEG_INFINITY;
        }
        if y == 0.0 {
            if k < 1.0 {
                return f64::INFINITY;
            }
            if k > 1.0 {
                return f64::NEG_INFINITY;
            }
            // shape == 1 => exponential
            return 0.0;
        }
        if y.is_infinite() {
            return f64::NEG_INFINITY;
        }
        (k - 1.0) * y.ln() - y - loggam(k)
    }

    fn standard_cdf(&self, y: f64) -> f64 {
        if y <= 0.0 {
            0.0
        } else if y.is_infinite() {
            1.0
        } else {
            gamma_lr(self.shape, y)
        }
    }

    fn standard_sf(&self, y: f64) -> f64 {
        if y <= 0.0 {
            1.0
        } else if y.is_infinite() {
            0.0
        } else {
            gamma_ur(self.shape, y)
        }
    }

    /// Starting point for the quantile search; `lower` is the lower-tail mass.
    fn initial_guess(&self, lower: f64, upper: f64) -> f64 {
        let k = self.shape;
        let z = if lower < upper { ndtri(lower) } else { -ndtri(upper) };
        let t = 1.0 - 1.0 / (9.0 * k) + z / (3.0 * k.sqrt());
        let wilson_hilferty = k * t * t * t;
        // Small-x expansion P(k, y) ≈ y^k / Γ(k+1).
        let small = ((lower.ln() + loggam(k + 1.0)) / k).exp();
        if wilson_hilferty > 0.0 && (k >= 1.0 || small > wilson_hilferty) {
            wilson_hilferty
        } else if small.is_finite() && small > 0.0 {
            small
        } else {
            k
        }
    }
}

impl Sample for Gamma {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        Ok(self.scale * standard_gamma(engine, self.shape)?)
    }
}

impl Continuous for Gamma {
    fn logpdf(&self, x: f64) -> f64 {
        self.standard_logpdf(x / self.scale) - self.scale.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        self.standard_cdf(x / self.scale)
    }

    fn sf(&self, x: f64) -> f64 {
        self.standard_sf(x / self.scale)
    }

    fn logcdf(&self, x: f64) -> f64 {
        ln_gamma_p(self.shape, x / self.scale)
    }

    fn logsf(&self, x: f64) -> f64 {
        ln_gamma_q(self.shape, x / self.scale)
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q == 0.0 {
            return Ok(0.0);
        }
        if q == 1.0 {
            return Ok(f64::INFINITY);
        }
        let y = solve_increasing(
            |y| self.standard_cdf(y) - q,
            |y| self.standard_logpdf(y).exp(),
            self.initial_guess(q, 1.0 - q),
            0.0,
            f64::INFINITY,
        )?;
        Ok(y * self.scale)
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q == 0.0 {
            return Ok(f64::INFINITY);
        }
        if q == 1.0 {
            return Ok(0.0);
        }
        let y = solve_increasing(
            |y| q - self.standard_sf(y),
            |y| self.standard_logpdf(y).exp(),
            self.initial_guess(1.0 - q, q),
            0.0,
            f64::INFINITY,
        )?;
        Ok(y * self.scale)
    }

    fn entropy(&self) -> f64 {
        let k = self.shape;
        k + self.scale.ln() + loggam(k) + (1.0 - k) * digamma(k)
    }
}

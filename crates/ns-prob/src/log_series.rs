//! Logarithmic series distribution.

use ns_core::Result;
use rand::RngCore;

use crate::engine::{rejection_exhausted, Engine};
use crate::params;
use crate::traits::Sample;

/// Log-series distribution on `{1, 2, ...}`:
/// `P(k) = -p^k / (k ln(1 - p))`, `0 < p < 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSeries {
    p: f64,
    /// `-1 / ln(1 - p)`, the normalizing constant.
    norm: f64,
}

impl LogSeries {
    pub fn new(p: f64) -> Result<Self> {
        params::open_unit("p", p)?;
        Ok(Self { p, norm: -1.0 / (-p).ln_1p() })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn logpmf(&self, k: u64) -> f64 {
        if k == 0 {
            return f64::NEG_INFINITY;
        }
        let kf = k as f64;
        kf * self.p.ln() - kf.ln() + self.norm.ln()
    }

    pub fn pmf(&self, k: u64) -> f64 {
        self.logpmf(k).exp()
    }
}

impl Sample for LogSeries {
    type Value = u64;

    /// Sequential inversion: walk the partial sums until they pass `U`.
    ///
    /// Terms follow `P(k+1) = P(k) · p k / (k+1)`. Once a term no longer
    /// changes the running sum the remaining mass is below `f64` resolution
    /// and the current `k` is returned.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        let u = engine.next_f64_open01();
        let mut k = 1u64;
        let mut term = self.p * self.norm;
        let mut cum = term;
        let budget = engine.max_rejections();
        for _ in 0..budget {
            if u <= cum {
                return Ok(k);
            }
            term *= self.p * k as f64 / (k + 1) as f64;
            k += 1;
            let next = cum + term;
            if next == cum {
                return Ok(k);
            }
            cum = next;
        }
        Err(rejection_exhausted("logseries", budget))
    }
}

//! Geometric distribution (failures before the first success).

use ns_core::{Error, Result};
use rand::RngCore;

use crate::engine::Engine;
use crate::params;
use crate::traits::{Discrete, Sample};

/// Geometric distribution on `{0, 1, 2, ...}` with success probability `p`.
///
/// `P(K=k) = p (1-p)^k`, mean `(1-p)/p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
    /// `ln(1 - p)`, always negative.
    ln_q: f64,
}

impl Geometric {
    pub fn new(p: f64) -> Result<Self> {
        params::open_unit("p", p)?;
        Ok(Self { p, ln_q: (-p).ln_1p() })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Shannon entropy in nats.
    pub fn entropy(&self) -> f64 {
        let q = 1.0 - self.p;
        -(q * self.ln_q + self.p * self.p.ln()) / self.p
    }
}

impl Sample for Geometric {
    type Value = u64;

    /// Inverse cdf: `floor(ln U / ln(1-p))`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        let k = (engine.next_f64_open01().ln() / self.ln_q).floor();
        if k >= u64::MAX as f64 {
            return Err(Error::Computation(format!(
                "geometric draw {} does not fit in u64 (p={})",
                k, self.p
            )));
        }
        Ok(k as u64)
    }
}

impl Discrete for Geometric {
    fn logpmf(&self, k: u64) -> f64 {
        self.p.ln() + k as f64 * self.ln_q
    }

    fn cdf(&self, k: u64) -> f64 {
        -((k as f64 + 1.0) * self.ln_q).exp_m1()
    }

    fn sf(&self, k: u64) -> f64 {
        ((k as f64 + 1.0) * self.ln_q).exp()
    }

    fn logsf(&self, k: u64) -> f64 {
        (k as f64 + 1.0) * self.ln_q
    }
}

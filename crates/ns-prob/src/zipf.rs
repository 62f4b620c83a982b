//! Zipf (zeta) distribution.

use ns_core::{Error, Result};
use rand::RngCore;

use crate::engine::{rejection_exhausted, Engine};
use crate::traits::Sample;

/// Zipf distribution on `{1, 2, ...}` with exponent `a > 1`: `P(k) ∝ k^{-a}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zipf {
    a: f64,
}

impl Zipf {
    pub fn new(a: f64) -> Result<Self> {
        if !a.is_finite() || a <= 1.0 {
            return Err(Error::Validation(format!("a must be finite and > 1, got {}", a)));
        }
        Ok(Self { a })
    }

    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Sample for Zipf {
    type Value = u64;

    /// Devroye (1986), "Non-Uniform Random Variate Generation", X.6: rejection
    /// from the continuous Pareto majorant `floor(U^{-1/(a-1)})`.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        let am1 = self.a - 1.0;
        let b = 2f64.powf(am1);
        let budget = engine.max_rejections();
        for _ in 0..budget {
            let u = engine.next_f64_open01();
            let v = engine.next_f64_open01();
            let x = u.powf(-1.0 / am1).floor();
            // Candidates beyond u64 carry negligible mass; redraw.
            if !(x >= 1.0 && x < u64::MAX as f64) {
                continue;
            }
            let t = (1.0 + 1.0 / x).powf(am1);
            if v * x * (t - 1.0) / (b - 1.0) <= t / b {
                return Ok(x as u64);
            }
        }
        Err(rejection_exhausted("zipf", budget))
    }
}

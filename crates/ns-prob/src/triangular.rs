//! Triangular distribution.

use ns_core::{Error, Result};
use rand::RngCore;

use crate::engine::Engine;
use crate::inverse::check_probability;
use crate::params;
use crate::traits::{Continuous, Sample};

/// Triangular distribution on `[left, right]` with peak at `mode`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    left: f64,
    mode: f64,
    right: f64,
}

impl Triangular {
    /// Requires `left <= mode <= right` and `left < right`.
    pub fn new(left: f64, mode: f64, right: f64) -> Result<Self> {
        params::finite("left", left)?;
        params::finite("mode", mode)?;
        params::finite("right", right)?;
        if !(left <= mode && mode <= right) {
            return Err(Error::Validation(format!(
                "mode must lie in [left, right], got left={} mode={} right={}",
                left, mode, right
            )));
        }
        if left == right {
            return Err(Error::Validation(format!(
                "left must be < right, got {} == {}",
                left, right
            )));
        }
        Ok(Self { left, mode, right })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Probability mass left of the mode.
    fn split(&self) -> f64 {
        (self.mode - self.left) / self.width()
    }

    fn density(&self, x: f64) -> f64 {
        let (l, m, r) = (self.left, self.mode, self.right);
        if !(l..=r).contains(&x) {
            0.0
        } else if x < m {
            2.0 * (x - l) / (self.width() * (m - l))
        } else if x > m {
            2.0 * (r - x) / (self.width() * (r - m))
        } else {
            2.0 / self.width()
        }
    }

    /// Inverse of the cdf for `q` below the split.
    fn rising(&self, q: f64) -> f64 {
        self.left + (q * (self.mode - self.left) * self.width()).sqrt()
    }

    /// Inverse of the sf for `p` below `1 - split`.
    fn falling(&self, p: f64) -> f64 {
        self.right - (p * (self.right - self.mode) * self.width()).sqrt()
    }
}

impl Sample for Triangular {
    type Value = f64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let u = engine.next_f64_half_open01();
        if u <= self.split() { Ok(self.rising(u)) } else { Ok(self.falling(1.0 - u)) }
    }
}

impl Continuous for Triangular {
    fn logpdf(&self, x: f64) -> f64 {
        self.density(x).ln()
    }

    fn pdf(&self, x: f64) -> f64 {
        self.density(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        let (l, m, r) = (self.left, self.mode, self.right);
        if x <= l {
            0.0
        } else if x <= m {
            (x - l) * (x - l) / (self.width() * (m - l))
        } else if x < r {
            1.0 - (r - x) * (r - x) / (self.width() * (r - m))
        } else {
            1.0
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let (l, m, r) = (self.left, self.mode, self.right);
        if x >= r {
            0.0
        } else if x >= m {
            (r - x) * (r - x) / (self.width() * (r - m))
        } else if x > l {
            1.0 - (x - l) * (x - l) / (self.width() * (m - l))
        } else {
            1.0
        }
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q <= self.split() { Ok(self.rising(q)) } else { Ok(self.falling(1.0 - q)) }
    }

    fn isf(&self, q: f64) -> Result<f64> {
        check_probability(q)?;
        if q <= 1.0 - self.split() { Ok(self.falling(q)) } else { Ok(self.rising(1.0 - q)) }
    }

    fn entropy(&self) -> f64 {
        0.5 + (0.5 * self.width()).ln()
    }
}

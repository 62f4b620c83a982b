//! Hypergeometric distribution.

use ns_core::{Error, Result};
use rand::RngCore;

use crate::engine::{rejection_exhausted, Engine};
use crate::special::{ln_choose, loggam};
use crate::traits::{Discrete, Sample};

/// Samples of at most this many items (or leaving at most this many) use the
/// urn walk; larger ones use ratio-of-uniforms.
const URN_WALK_MAX: u64 = 10;

/// Stadlober's HRUA constants: `2 sqrt(2/e)` and `3 - 2 sqrt(3/e)`.
const HRUA_D1: f64 = 1.715_527_769_921_413_5;
const HRUA_D2: f64 = 0.898_916_162_058_898_8;

/// Number of good items in `nsample` draws without replacement from an urn
/// holding `ngood` good and `nbad` bad items.
///
/// Support: `max(0, nsample - nbad) <= k <= min(nsample, ngood)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypergeometric {
    ngood: u64,
    nbad: u64,
    nsample: u64,
}

impl Hypergeometric {
    pub fn new(ngood: u64, nbad: u64, nsample: u64) -> Result<Self> {
        let total = ngood.checked_add(nbad).ok_or_else(|| {
            Error::Validation(format!("ngood + nbad overflows u64 ({} + {})", ngood, nbad))
        })?;
        if nsample > total {
            return Err(Error::Validation(format!(
                "nsample must be <= ngood + nbad ({}), got {}",
                total, nsample
            )));
        }
        Ok(Self { ngood, nbad, nsample })
    }

    pub fn ngood(&self) -> u64 {
        self.ngood
    }

    pub fn nbad(&self) -> u64 {
        self.nbad
    }

    pub fn nsample(&self) -> u64 {
        self.nsample
    }

    fn total(&self) -> u64 {
        self.ngood + self.nbad
    }

    /// Smallest value in the support.
    pub fn min_k(&self) -> u64 {
        self.nsample.saturating_sub(self.nbad)
    }

    /// Largest value in the support.
    pub fn max_k(&self) -> u64 {
        self.nsample.min(self.ngood)
    }

    fn mode(&self) -> u64 {
        let (g, s, n) = (self.ngood as f64, self.nsample as f64, self.total() as f64);
        let m = ((s + 1.0) * (g + 1.0) / (n + 2.0)).floor() as u64;
        m.clamp(self.min_k(), self.max_k())
    }

    /// `Σ pmf(j)` from `k` away from the mode, down to `min_k` or up to
    /// `max_k`. Terms shrink monotonically, so the sum stops once they no
    /// longer register.
    fn tail_sum(&self, k: u64, downward: bool) -> f64 {
        let (g, b, s) = (self.ngood as f64, self.nbad as f64, self.nsample as f64);
        let mut term = self.pmf(k);
        let mut sum = term;
        let mut j = k;
        while term > sum * f64::EPSILON {
            let jf = j as f64;
            if downward {
                if j == self.min_k() {
                    break;
                }
                term *= jf * (b - s + jf) / ((g - jf + 1.0) * (s - jf + 1.0));
                j -= 1;
            } else {
                if j == self.max_k() {
                    break;
                }
                term *= (g - jf) * (s - jf) / ((jf + 1.0) * (b - s + jf + 1.0));
                j += 1;
            }
            sum += term;
        }
        sum.clamp(0.0, 1.0)
    }
}

/// Urn walk (HYP): draw `sample` items one at a time, tracking how many of
/// the scarcer colour remain. Returns the number of good items drawn.
fn urn_walk<R: RngCore>(engine: &mut Engine<R>, ngood: u64, nbad: u64, sample: u64) -> u64 {
    let total = ngood + nbad;
    let d1 = (total - sample) as f64;
    let d2 = ngood.min(nbad);

    let mut remaining_minor = d2 as f64;
    let mut k = sample;
    while remaining_minor > 0.0 && k > 0 {
        let u = engine.next_f64_half_open01();
        remaining_minor -= (u + remaining_minor / (d1 + k as f64)).floor();
        k -= 1;
    }
    let minor_drawn = d2 - remaining_minor as u64;
    if ngood > nbad { sample - minor_drawn } else { minor_drawn }
}

/// `ln` of the unnormalized pmf of drawing `z` scarce items in a sample of
/// `m` from an urn of `minor` scarce and `major` plentiful items.
fn ln_weight(z: f64, m: f64, minor: f64, major: f64) -> f64 {
    loggam(z + 1.0) + loggam(minor - z + 1.0) + loggam(m - z + 1.0) + loggam(major - m + z + 1.0)
}

/// Ratio-of-uniforms with a Cauchy-like hat (HRUA, Stadlober 1989) for `m`
/// draws, `m <= total / 2`. Returns the number of scarce items drawn.
fn hrua<R: RngCore>(engine: &mut Engine<R>, minor: u64, major: u64, m: u64) -> Result<u64> {
    let total = (minor + major) as f64;
    let (minor, major, m) = (minor as f64, major as f64, m as f64);
    let p = minor / total;
    let mean = m * p + 0.5;
    let sd = (m * (total - m) * p * (1.0 - p) / (total - 1.0) + 0.5).sqrt();
    let width = HRUA_D1 * sd + HRUA_D2;
    let mode = ((m + 1.0) * (minor + 1.0) / (total + 2.0)).floor();
    let ln_peak = ln_weight(mode, m, minor, major);
    // Beyond 16 sd the hat carries no mass at double precision.
    let upper = (m.min(minor) + 1.0).min((mean + 16.0 * sd).floor());

    let budget = engine.max_rejections();
    for _ in 0..budget {
        let x = engine.next_f64_open01();
        let y = engine.next_f64_half_open01();
        let w = mean + width * (y - 0.5) / x;
        if w < 0.0 || w >= upper {
            continue;
        }
        let z = w.floor();
        let t = ln_peak - ln_weight(z, m, minor, major);
        if x * (4.0 - x) - 3.0 <= t {
            return Ok(z as u64);
        }
        if x * (x - t) >= 1.0 {
            continue;
        }
        if 2.0 * x.ln() <= t {
            return Ok(z as u64);
        }
    }
    Err(rejection_exhausted("hypergeometric", budget))
}

impl Sample for Hypergeometric {
    type Value = u64;

    /// Both methods run over the smaller of the sample and its complement;
    /// good items in the sample are then `ngood` minus those left in the urn.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        let complement = self.total() - self.nsample;
        let m = self.nsample.min(complement);
        let good_in_m = if m <= URN_WALK_MAX {
            urn_walk(engine, self.ngood, self.nbad, m)
        } else {
            let (minor, major) = (self.ngood.min(self.nbad), self.ngood.max(self.nbad));
            let minor_drawn = hrua(engine, minor, major, m)?;
            if self.ngood > self.nbad { m - minor_drawn } else { minor_drawn }
        };
        if m < self.nsample { Ok(self.ngood - good_in_m) } else { Ok(good_in_m) }
    }
}

impl Discrete for Hypergeometric {
    fn logpmf(&self, k: u64) -> f64 {
        if k < self.min_k() || k > self.max_k() {
            return f64::NEG_INFINITY;
        }
        ln_choose(self.ngood, k) + ln_choose(self.nbad, self.nsample - k)
            - ln_choose(self.total(), self.nsample)
    }

    /// Summed outward from `k` on whichever side of the mode it lies.
    fn cdf(&self, k: u64) -> f64 {
        if k < self.min_k() {
            return 0.0;
        }
        if k >= self.max_k() {
            return 1.0;
        }
        if k <= self.mode() { self.tail_sum(k, true) } else { 1.0 - self.tail_sum(k + 1, false) }
    }

    fn sf(&self, k: u64) -> f64 {
        if k < self.min_k() {
            return 1.0;
        }
        if k >= self.max_k() {
            return 0.0;
        }
        if k >= self.mode() { self.tail_sum(k + 1, false) } else { 1.0 - self.tail_sum(k, true) }
    }
}

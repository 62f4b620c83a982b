//! Sampling engine: the uniform source every sampler draws from.
//!
//! [`Engine`] wraps any [`rand::RngCore`] and adds the interval-specific real
//! conversions the samplers need, plus the rejection budget that bounds every
//! accept/reject loop. Engines are plain values: reproducibility and
//! parallelism come from owning independent engines, never from shared state.

use ns_core::{Error, Result, SamplerConfig, DEFAULT_MAX_REJECTIONS};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// 2^-53
const F64_EPS_53: f64 = 1.0 / 9_007_199_254_740_992.0;
/// 2^-52
const F64_EPS_52: f64 = 1.0 / 4_503_599_627_370_496.0;
/// 2^-24
const F32_EPS_24: f32 = 1.0 / 16_777_216.0;
/// 2^-23
const F32_EPS_23: f32 = 1.0 / 8_388_608.0;

/// A seeded uniform source with a rejection budget.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    rng: R,
    max_rejections: u64,
}

impl Engine<StdRng> {
    /// Engine over the default generator, seeded from `seed`.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Engine built from a validated [`SamplerConfig`].
    pub fn from_config(config: &SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seed_from_u64(config.seed).with_max_rejections(config.max_rejections))
    }

    /// Restart the stream from `seed`. The rejection budget is kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<R: RngCore> Engine<R> {
    /// Wrap a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, max_rejections: DEFAULT_MAX_REJECTIONS }
    }

    /// Replace the rejection budget. A zero budget is raised to one draw.
    pub fn with_max_rejections(mut self, max_rejections: u64) -> Self {
        self.max_rejections = max_rejections.max(1);
        self
    }

    /// Candidate draws a single rejection-sampled variate may consume.
    #[inline]
    pub fn max_rejections(&self) -> u64 {
        self.max_rejections
    }

    /// Underlying generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the engine, returning the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform on `[0, 1]` with 53-bit resolution.
    #[inline]
    pub fn next_f64_closed01(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / 9_007_199_254_740_991.0)
    }

    /// Uniform on `[0, 1)` with 53-bit resolution.
    #[inline]
    pub fn next_f64_half_open01(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_EPS_53
    }

    /// Uniform on `(0, 1)`: never 0, never 1.
    #[inline]
    pub fn next_f64_open01(&mut self) -> f64 {
        ((self.next_u64() >> 12) as f64 + 0.5) * F64_EPS_52
    }

    /// Uniform on `[0, 1]` with 24-bit resolution.
    #[inline]
    pub fn next_f32_closed01(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_215.0)
    }

    /// Uniform on `[0, 1)` with 24-bit resolution.
    #[inline]
    pub fn next_f32_half_open01(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * F32_EPS_24
    }

    /// Uniform on `(0, 1)`: never 0, never 1.
    #[inline]
    pub fn next_f32_open01(&mut self) -> f32 {
        ((self.next_u32() >> 9) as f32 + 0.5) * F32_EPS_23
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

/// Error returned when a rejection loop runs out of budget.
pub(crate) fn rejection_exhausted(family: &str, budget: u64) -> Error {
    log::warn!("{family}: rejection sampler exhausted its budget of {budget} draws");
    Error::Convergence(format!("{family} sampler rejected {budget} consecutive candidates"))
}

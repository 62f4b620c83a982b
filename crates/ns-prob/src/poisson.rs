//! Poisson distribution.

use ns_core::{Error, Result};
use rand::RngCore;
use statrs::function::gamma::{gamma_lr, gamma_ur};

use crate::engine::{rejection_exhausted, Engine};
use crate::params;
use crate::special::{ln_factorial, loggam};
use crate::traits::{Discrete, Sample};

/// Largest rate accepted; draws stay far below `u64::MAX`.
pub const POISSON_LAM_MAX: f64 = 1.0e18;

/// Rates below this use multiplication inversion, at or above it PTRS.
const PTRS_THRESHOLD: f64 = 10.0;

/// One Poisson(`lam`) draw for `lam >= 0` (0 yields 0).
///
/// Used directly by mixtures (negative binomial, noncentral chi-square) whose
/// inner rate can legitimately be zero.
pub(crate) fn sample_poisson<R: RngCore>(engine: &mut Engine<R>, lam: f64) -> Result<u64> {
    if lam == 0.0 {
        return Ok(0);
    }
    if !(lam > 0.0 && lam <= POISSON_LAM_MAX) {
        return Err(Error::Computation(format!(
            "Poisson rate {} is outside the representable range (0, {:e}]",
            lam, POISSON_LAM_MAX
        )));
    }
    if lam < PTRS_THRESHOLD { Ok(multiplication(engine, lam)) } else { ptrs(engine, lam) }
}

/// Count uniforms until their running product drops below `exp(-lam)`.
fn multiplication<R: RngCore>(engine: &mut Engine<R>, lam: f64) -> u64 {
    let limit = (-lam).exp();
    let mut k = 0;
    let mut prod = engine.next_f64_open01();
    while prod > limit {
        k += 1;
        prod *= engine.next_f64_open01();
    }
    k
}

/// Hörmann (1993), "The transformed rejection method for generating Poisson
/// random variables" (PTRS).
fn ptrs<R: RngCore>(engine: &mut Engine<R>, lam: f64) -> Result<u64> {
    let slam = lam.sqrt();
    let loglam = lam.ln();
    let b = 0.931 + 2.53 * slam;
    let a = -0.059 + 0.02483 * b;
    let inv_alpha = 1.1239 + 1.1328 / (b - 3.4);
    let v_r = 0.9277 - 3.6224 / (b - 2.0);

    let budget = engine.max_rejections();
    for _ in 0..budget {
        let u = engine.next_f64_open01() - 0.5;
        let v = engine.next_f64_open01();
        let us = 0.5 - u.abs();
        let k = ((2.0 * a / us + b) * u + lam + 0.43).floor();

        if us >= 0.07 && v <= v_r {
            return Ok(k as u64);
        }
        if k < 0.0 || (us < 0.013 && v > us) {
            continue;
        }
        if v.ln() + inv_alpha.ln() - (a / (us * us) + b).ln()
            <= -lam + k * loglam - loggam(k + 1.0)
        {
            return Ok(k as u64);
        }
    }
    Err(rejection_exhausted("poisson", budget))
}

/// Poisson distribution with rate `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// `0 < lambda <= POISSON_LAM_MAX`.
    pub fn new(lambda: f64) -> Result<Self> {
        params::positive("lambda", lambda)?;
        if lambda > POISSON_LAM_MAX {
            return Err(Error::Validation(format!(
                "lambda must be <= {:e}, got {}",
                POISSON_LAM_MAX, lambda
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Sample for Poisson {
    type Value = u64;

    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<u64> {
        sample_poisson(engine, self.lambda)
    }
}

impl Discrete for Poisson {
    /// `log P(k) = k ln λ - λ - ln k!`
    fn logpmf(&self, k: u64) -> f64 {
        k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k)
    }

    fn cdf(&self, k: u64) -> f64 {
        gamma_ur(k as f64 + 1.0, self.lambda)
    }

    fn sf(&self, k: u64) -> f64 {
        gamma_lr(k as f64 + 1.0, self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_k0() {
        let d = Poisson::new(2.0).unwrap();
        assert_relative_eq!(d.logpmf(0), -2.0, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(0), (-2.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_cdf_is_partial_sum() {
        let d = Poisson::new(3.7).unwrap();
        let mut acc = 0.0;
        for k in 0..15 {
            acc += d.pmf(k);
            assert_relative_eq!(d.cdf(k), acc, max_relative = 1e-11);
            assert_relative_eq!(d.sf(k) + d.cdf(k), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_moments_both_regimes() {
        let mut eng = Engine::seed_from_u64(31);
        for &lam in &[0.7, 4.0, 10.0, 55.5, 1e4] {
            let d = Poisson::new(lam).unwrap();
            let n = 200_000;
            let xs: Vec<f64> = (0..n).map(|_| d.sample(&mut eng).unwrap() as f64).collect();
            let mean = xs.iter().sum::<f64>() / n as f64;
            let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
            assert!((mean - lam).abs() < 5.0 * (lam / n as f64).sqrt(), "lam={lam} mean={mean}");
            assert_relative_eq!(var, lam, max_relative = 0.03);
        }
    }

    #[test]
    fn test_ptrs_frequencies_match_pmf() {
        let d = Poisson::new(25.0).unwrap();
        let mut eng = Engine::seed_from_u64(77);
        let n = 400_000;
        let mut counts = vec![0usize; 80];
        for _ in 0..n {
            let k = d.sample(&mut eng).unwrap() as usize;
            if k < counts.len() {
                counts[k] += 1;
            }
        }
        for k in 15..35u64 {
            let expected = d.pmf(k) * n as f64;
            let got = counts[k as usize] as f64;
            assert!((got - expected).abs() < 5.0 * expected.sqrt(), "k={k}: {got} vs {expected}");
        }
    }

    #[test]
    fn test_zero_rate_helper() {
        let mut eng = Engine::seed_from_u64(1);
        assert_eq!(sample_poisson(&mut eng, 0.0).unwrap(), 0);
        assert!(sample_poisson(&mut eng, f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_params() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(2e18).is_err());
    }
}

//! von Mises (circular normal) distribution.

use std::f64::consts::{PI, TAU};

use ns_core::{Error, Result};
use rand::RngCore;

use crate::engine::{rejection_exhausted, Engine};
use crate::params;
use crate::traits::Sample;
use crate::ziggurat::standard_normal;

/// Below this concentration the distribution is uniform on the circle to
/// double precision.
const KAPPA_UNIFORM: f64 = 1e-8;
/// Below this, `s` uses its second-order expansion in `kappa`.
const KAPPA_SMALL: f64 = 1e-5;
/// Above this, a wrapped normal with variance `1/kappa` is exact to double
/// precision.
const KAPPA_NORMAL: f64 = 1e6;

/// von Mises distribution on `[-π, π]` with mean direction `mu` and
/// concentration `kappa`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMises {
    mu: f64,
    kappa: f64,
}

impl VonMises {
    pub fn new(mu: f64, kappa: f64) -> Result<Self> {
        params::finite("mu", mu)?;
        params::non_negative("kappa", kappa)?;
        Ok(Self { mu, kappa })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn kappa(&self) -> f64 {
        self.kappa
    }
}

/// Map an angle onto `[-π, π]`.
fn wrap(theta: f64) -> f64 {
    let m = (theta.abs() + PI).rem_euclid(TAU) - PI;
    if theta < 0.0 { -m } else { m }
}

impl Sample for VonMises {
    type Value = f64;

    /// Best & Fisher (1979), "Efficient simulation of the von Mises
    /// distribution": rejection from a wrapped Cauchy envelope.
    fn sample<R: RngCore>(&self, engine: &mut Engine<R>) -> Result<f64> {
        let kappa = self.kappa;
        if kappa < KAPPA_UNIFORM {
            return Ok(PI * (2.0 * engine.next_f64_half_open01() - 1.0));
        }
        if kappa > KAPPA_NORMAL {
            return Ok(wrap(self.mu + standard_normal(engine) / kappa.sqrt()));
        }

        let s = if kappa < KAPPA_SMALL {
            1.0 / kappa + kappa
        } else {
            let r = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
            let rho = (r - (2.0 * r).sqrt()) / (2.0 * kappa);
            (1.0 + rho * rho) / (2.0 * rho)
        };

        let budget = engine.max_rejections();
        let mut accepted = None;
        for _ in 0..budget {
            let z = (PI * engine.next_f64_half_open01()).cos();
            let w = (1.0 + s * z) / (s + z);
            let y = kappa * (s - w);
            let v = engine.next_f64_open01();
            if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
                accepted = Some(w);
                break;
            }
        }
        let w = accepted.ok_or_else(|| rejection_exhausted("vonmises", budget))?;

        // |W| can exceed 1 by rounding.
        let mut theta = w.clamp(-1.0, 1.0).acos();
        if engine.next_f64_half_open01() < 0.5 {
            theta = -theta;
        }
        let out = wrap(theta + self.mu);
        if out.is_nan() {
            return Err(Error::Computation(format!(
                "von Mises draw is NaN (mu={}, kappa={})",
                self.mu, kappa
            )));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Mean resultant length `I1(κ)/I0(κ)` by trapezoid quadrature.
    fn bessel_ratio(kappa: f64) -> f64 {
        let n = 20_000;
        let h = PI / n as f64;
        let (mut i0, mut i1) = (0.0, 0.0);
        for j in 0..=n {
            let t = j as f64 * h;
            let w = if j == 0 || j == n { 0.5 } else { 1.0 };
            let e = (kappa * (t.cos() - 1.0)).exp();
            i0 += w * e;
            i1 += w * e * t.cos();
        }
        i1 / i0
    }

    fn circular_moments(d: &VonMises, seed: u64, n: usize) -> (f64, f64) {
        let mut eng = Engine::seed_from_u64(seed);
        let (mut c, mut s) = (0.0, 0.0);
        for _ in 0..n {
            let x = d.sample(&mut eng).unwrap();
            assert!((-PI..=PI).contains(&x), "x={x}");
            c += x.cos();
            s += x.sin();
        }
        (s.atan2(c), (c * c + s * s).sqrt() / n as f64)
    }

    #[test]
    fn test_mean_direction_and_concentration() {
        for &(mu, kappa) in &[(0.5, 2.0), (-2.8, 0.3), (3.0, 40.0)] {
            let d = VonMises::new(mu, kappa).unwrap();
            let (dir, r) = circular_moments(&d, 139, 100_000);
            assert_relative_eq!(r, bessel_ratio(kappa), epsilon = 0.01);
            if kappa > 1.0 {
                assert!((wrap(dir - mu)).abs() < 0.02, "mu={mu} dir={dir}");
            }
        }
    }

    #[test]
    fn test_extreme_concentrations() {
        let uniform = VonMises::new(1.0, 0.0).unwrap();
        let (_, r) = circular_moments(&uniform, 149, 100_000);
        assert!(r < 0.01, "r={r}");

        let tight = VonMises::new(PI - 1e-4, 1e8).unwrap();
        let mut eng = Engine::seed_from_u64(151);
        for _ in 0..1000 {
            let x = tight.sample(&mut eng).unwrap();
            assert!((-PI..=PI).contains(&x));
            assert!(wrap(x - tight.mu()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_wrap() {
        assert_relative_eq!(wrap(PI + 0.5), -PI + 0.5, epsilon = 1e-15);
        assert_relative_eq!(wrap(-PI - 0.5), PI - 0.5, epsilon = 1e-15);
        assert_relative_eq!(wrap(0.25), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_params() {
        assert!(VonMises::new(0.0, -1.0).is_err());
        assert!(VonMises::new(f64::INFINITY, 1.0).is_err());
    }
}

//! Ziggurat samplers for the standard normal and standard exponential.
//!
//! Marsaglia & Tsang (2000), "The Ziggurat Method for Generating Random
//! Variables". The density is covered by `N` strips of equal area `v`: strip 0
//! is the base rectangle `[0, r] x [0, f(r)]` plus the tail beyond `r`, strip
//! `i > 0` is the rectangle `[0, x[i]] x [f(x[i]), f(x[i+1])]`.
//!
//! One `u64` per attempt feeds everything: the low bits pick the strip (and the
//! normal's sign), the top 53 bits the horizontal offset.

use std::sync::OnceLock;

use rand::RngCore;

use crate::engine::Engine;

const NORMAL_STRIPS: usize = 128;
const NORMAL_R: f64 = 3.442_619_855_899;
const NORMAL_V: f64 = 9.912_563_035_262_17e-3;

const EXP_STRIPS: usize = 256;
const EXP_R: f64 = 7.697_117_470_131_049_72;
const EXP_V: f64 = 3.949_659_822_581_572e-3;

/// 2^-53
const OFFSET_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Strip geometry for one density.
///
/// `x[0]` is the virtual width of the base strip (`v / f(r)`), `x[1] = r`,
/// `x[N] = 0`. `f[i] = f(x[i])` with `f[0]` unused. `ratio[i] = x[i+1] / x[i]`
/// is the fast-accept threshold on the unit offset.
struct Table<const N: usize> {
    x: Vec<f64>,
    f: Vec<f64>,
    ratio: Vec<f64>,
}

impl<const N: usize> Table<N> {
    fn build(r: f64, v: f64, density: impl Fn(f64) -> f64, inverse: impl Fn(f64) -> f64) -> Self {
        let mut x = vec![0.0; N + 1];
        x[0] = v / density(r);
        x[1] = r;
        for i in 1..N - 1 {
            x[i + 1] = inverse(v / x[i] + density(x[i]));
        }
        x[N] = 0.0;

        let f: Vec<f64> = x.iter().map(|&xi| density(xi)).collect();
        let ratio = (0..N).map(|i| x[i + 1] / x[i]).collect();
        Self { x, f, ratio }
    }
}

struct Tables {
    normal: Table<NORMAL_STRIPS>,
    exponential: Table<EXP_STRIPS>,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let normal = Table::build(
            NORMAL_R,
            NORMAL_V,
            |x| (-0.5 * x * x).exp(),
            |y| (-2.0 * y.ln()).sqrt(),
        );
        let exponential = Table::build(EXP_R, EXP_V, |x| (-x).exp(), |y| -y.ln());
        log::debug!(
            "ziggurat tables built ({NORMAL_STRIPS} normal strips, {EXP_STRIPS} exponential strips)"
        );
        Tables { normal, exponential }
    })
}

/// Build the shared tables now instead of on first draw. Idempotent.
pub fn init() {
    tables();
}

/// One draw from N(0, 1).
pub fn standard_normal<R: RngCore>(engine: &mut Engine<R>) -> f64 {
    let t = &tables().normal;
    loop {
        let bits = engine.next_u64();
        let i = (bits & (NORMAL_STRIPS as u64 - 1)) as usize;
        let negative = bits & 0x80 != 0;
        let u = (bits >> 11) as f64 * OFFSET_SCALE;
        let x = u * t.x[i];

        let accepted = if u < t.ratio[i] {
            Some(x)
        } else if i == 0 {
            Some(normal_tail(engine))
        } else {
            let y = t.f[i] + engine.next_f64_half_open01() * (t.f[i + 1] - t.f[i]);
            (y < (-0.5 * x * x).exp()).then_some(x)
        };

        if let Some(z) = accepted {
            return if negative { -z } else { z };
        }
    }
}

/// Marsaglia's tail draw for `|z| > r`.
fn normal_tail<R: RngCore>(engine: &mut Engine<R>) -> f64 {
    loop {
        let a = -engine.next_f64_open01().ln() / NORMAL_R;
        let b = -engine.next_f64_open01().ln();
        if b + b >= a * a {
            return NORMAL_R + a;
        }
    }
}

/// One draw from Exp(1).
pub fn standard_exponential<R: RngCore>(engine: &mut Engine<R>) -> f64 {
    let t = &tables().exponential;
    loop {
        let bits = engine.next_u64();
        let i = (bits & (EXP_STRIPS as u64 - 1)) as usize;
        let u = (bits >> 11) as f64 * OFFSET_SCALE;
        let x = u * t.x[i];

        if u < t.ratio[i] {
            return x;
        }
        if i == 0 {
            // Memoryless tail: shift a fresh exponential past r.
            return EXP_R - engine.next_f64_open01().ln();
        }
        let y = t.f[i] + engine.next_f64_half_open01() * (t.f[i + 1] - t.f[i]);
        if y < (-x).exp() {
            return x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        let t = &tables().normal;
        assert_eq!(t.x.len(), NORMAL_STRIPS + 1);
        for i in 1..NORMAL_STRIPS {
            assert!(t.x[i] > t.x[i + 1], "normal x not decreasing at {i}");
        }
        // The recursion should close near the mode.
        assert!(t.x[NORMAL_STRIPS - 1] < 0.3);

        let e = &tables().exponential;
        for i in 1..EXP_STRIPS {
            assert!(e.x[i] > e.x[i + 1], "exponential x not decreasing at {i}");
        }
        assert!(e.x[EXP_STRIPS - 1] < 0.1);
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        let first = tables() as *const Tables;
        init();
        assert_eq!(first, tables() as *const Tables);
    }

    #[test]
    fn test_normal_moments() {
        let mut eng = Engine::seed_from_u64(1);
        let n = 400_000;
        let xs: Vec<f64> = (0..n).map(|_| standard_normal(&mut eng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
        let kurt = xs.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n as f64 / (var * var);
        assert!(mean.abs() < 0.01, "mean={mean}");
        assert!((var - 1.0).abs() < 0.01, "var={var}");
        assert!((kurt - 3.0).abs() < 0.05, "kurtosis={kurt}");
    }

    #[test]
    fn test_normal_reaches_tail() {
        let mut eng = Engine::seed_from_u64(2);
        let n = 1_000_000;
        let tail = (0..n).filter(|_| standard_normal(&mut eng).abs() > NORMAL_R).count();
        // P(|Z| > 3.4426) ~ 5.76e-4
        let expected = 5.76e-4 * n as f64;
        assert!((tail as f64 - expected).abs() < 5.0 * expected.sqrt(), "tail={tail}");
    }

    #[test]
    fn test_exponential_moments_and_tail() {
        let mut eng = Engine::seed_from_u64(3);
        let n = 400_000;
        let xs: Vec<f64> = (0..n).map(|_| standard_exponential(&mut eng)).collect();
        assert!(xs.iter().all(|&x| x >= 0.0));
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
        assert!((mean - 1.0).abs() < 0.01, "mean={mean}");
        assert!((var - 1.0).abs() < 0.02, "var={var}");

        // P(X > 3) = e^-3
        let frac = xs.iter().filter(|&&x| x > 3.0).count() as f64 / n as f64;
        assert!((frac - (-3.0f64).exp()).abs() < 2e-3, "frac={frac}");
    }
}

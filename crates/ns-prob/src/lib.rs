//! Probability distributions for NextStat: random variates and analytic
//! functions.
//!
//! This crate hosts:
//! - a sampling [`engine::Engine`] layered over any `rand::RngCore`
//! - ziggurat samplers for the standard normal and exponential
//! - special functions (`loggam`, `log_ndtr`, stable log/exp helpers)
//! - one module per distribution family, each a validated value type
//!   implementing [`traits::Sample`] and [`traits::Continuous`] or
//!   [`traits::Discrete`]
//! - a flat `<distribution>_<operation>` catalogue in [`distributions`]
//!
//! ```
//! use ns_prob::prelude::*;
//!
//! let mut engine = Engine::seed_from_u64(42);
//! let gamma = Gamma::new(2.0, 1.5)?;
//! let x = gamma.sample(&mut engine)?;
//! assert!(x > 0.0);
//! assert!((gamma.cdf(gamma.ppf(0.3)?) - 0.3).abs() < 1e-12);
//! # Ok::<(), ns_core::Error>(())
//! ```

pub mod math;
pub mod beta;
pub mod cauchy;
pub mod chi_square;
pub mod distributions;
pub mod engine;
pub mod exponential;
pub mod fisher;
pub mod gamma;
pub mod geometric;
pub mod gumbel;
pub mod hypergeometric;
mod inverse;
pub mod laplace;
pub mod log_series;
pub mod logistic;
pub mod lognormal;
pub mod neg_binomial;
pub mod normal;
mod params;
pub mod pareto;
pub mod poisson;
pub mod power;
pub mod rayleigh;
pub mod special;
pub mod student_t;
pub mod traits;
pub mod triangular;
pub mod von_mises;
pub mod wald;
pub mod weibull;
pub mod ziggurat;
pub mod zipf;

/// Engine, capability traits and every distribution type.
pub mod prelude {
    pub use crate::beta::Beta;
    pub use crate::cauchy::Cauchy;
    pub use crate::chi_square::{ChiSquare, NoncentralChiSquare};
    pub use crate::engine::Engine;
    pub use crate::exponential::Exponential;
    pub use crate::fisher::{FisherF, NoncentralF};
    pub use crate::gamma::Gamma;
    pub use crate::geometric::Geometric;
    pub use crate::gumbel::Gumbel;
    pub use crate::hypergeometric::Hypergeometric;
    pub use crate::laplace::Laplace;
    pub use crate::log_series::LogSeries;
    pub use crate::logistic::Logistic;
    pub use crate::lognormal::LogNormal;
    pub use crate::neg_binomial::NegativeBinomial;
    pub use crate::normal::Normal;
    pub use crate::pareto::Pareto;
    pub use crate::poisson::Poisson;
    pub use crate::power::Power;
    pub use crate::rayleigh::Rayleigh;
    pub use crate::student_t::StudentT;
    pub use crate::traits::{Continuous, Discrete, Sample};
    pub use crate::triangular::Triangular;
    pub use crate::von_mises::VonMises;
    pub use crate::wald::Wald;
    pub use crate::weibull::Weibull;
    pub use crate::zipf::Zipf;
}

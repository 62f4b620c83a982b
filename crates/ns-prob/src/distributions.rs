//! Flat `<distribution>_<operation>` catalogue.
//!
//! One-liner wrappers over the per-family value types: each call validates
//! its parameters, builds the distribution and evaluates one operation.
//! Callers evaluating many points with fixed parameters should hold the value
//! type (`Gamma::new(..)?`) instead and skip the repeated validation.
//!
//! `rvs` functions take the engine first; all others take the point (`x`,
//! `k` or `q`) first, then the parameters.

use ns_core::Result;
use rand::RngCore;

use crate::engine::Engine;
use crate::prelude::*;

/// pdf, logpdf, cdf, logcdf, sf, logsf, ppf and isf for a [`Continuous`] type.
macro_rules! continuous_fns {
    ($ty:ident ($($p:ident),+), $pdf:ident, $logpdf:ident, $cdf:ident, $logcdf:ident,
     $sf:ident, $logsf:ident, $ppf:ident, $isf:ident) => {
        #[doc = concat!("Density of [`", stringify!($ty), "`] at `x`.")]
        pub fn $pdf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.pdf(x))
        }

        #[doc = concat!("Log-density of [`", stringify!($ty), "`] at `x`.")]
        pub fn $logpdf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logpdf(x))
        }

        #[doc = concat!("`P(X <= x)` for [`", stringify!($ty), "`].")]
        pub fn $cdf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.cdf(x))
        }

        #[doc = concat!("`ln P(X <= x)` for [`", stringify!($ty), "`].")]
        pub fn $logcdf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logcdf(x))
        }

        #[doc = concat!("`P(X > x)` for [`", stringify!($ty), "`].")]
        pub fn $sf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.sf(x))
        }

        #[doc = concat!("`ln P(X > x)` for [`", stringify!($ty), "`].")]
        pub fn $logsf(x: f64, $($p: f64),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logsf(x))
        }

        #[doc = concat!("Quantile of [`", stringify!($ty), "`]; `q` must be in `[0, 1]`.")]
        pub fn $ppf(q: f64, $($p: f64),+) -> Result<f64> {
            $ty::new($($p),+)?.ppf(q)
        }

        #[doc = concat!("Inverse survival function of [`", stringify!($ty), "`].")]
        pub fn $isf(q: f64, $($p: f64),+) -> Result<f64> {
            $ty::new($($p),+)?.isf(q)
        }
    };
}

/// pmf, logpmf, cdf, logcdf, sf and logsf for a [`Discrete`] type.
macro_rules! discrete_fns {
    ($ty:ident ($($p:ident: $t:ty),+), $pmf:ident, $logpmf:ident, $cdf:ident, $logcdf:ident,
     $sf:ident, $logsf:ident) => {
        #[doc = concat!("Probability of `k` under [`", stringify!($ty), "`].")]
        pub fn $pmf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.pmf(k))
        }

        #[doc = concat!("Log-probability of `k` under [`", stringify!($ty), "`].")]
        pub fn $logpmf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logpmf(k))
        }

        #[doc = concat!("`P(K <= k)` for [`", stringify!($ty), "`].")]
        pub fn $cdf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.cdf(k))
        }

        #[doc = concat!("`ln P(K <= k)` for [`", stringify!($ty), "`].")]
        pub fn $logcdf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logcdf(k))
        }

        #[doc = concat!("`P(K > k)` for [`", stringify!($ty), "`].")]
        pub fn $sf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.sf(k))
        }

        #[doc = concat!("`ln P(K > k)` for [`", stringify!($ty), "`].")]
        pub fn $logsf(k: u64, $($p: $t),+) -> Result<f64> {
            Ok($ty::new($($p),+)?.logsf(k))
        }
    };
}

// ---------------------------------------------------------------------------
// Special functions and initialization
// ---------------------------------------------------------------------------

/// `ln Γ(x)` for `x > 0`.
pub fn loggam(x: f64) -> f64 {
    crate::special::loggam(x)
}

/// Build the ziggurat tables now rather than on the first normal or
/// exponential draw. Calling it again is a no-op.
pub fn ziggurat_init() {
    crate::ziggurat::init();
}

// ---------------------------------------------------------------------------
// Exponential
// ---------------------------------------------------------------------------

/// Standard exponential variate (rate 1).
pub fn std_exp_rvs<R: RngCore>(engine: &mut Engine<R>) -> Result<f64> {
    Ok(crate::ziggurat::standard_exponential(engine))
}

pub fn exp_rvs<R: RngCore>(engine: &mut Engine<R>, lambda: f64) -> Result<f64> {
    Exponential::new(lambda)?.sample(engine)
}

continuous_fns!(Exponential(lambda), exp_pdf, exp_logpdf, exp_cdf, exp_logcdf, exp_sf, exp_logsf,
    exp_ppf, exp_isf);

pub fn exp_entropy(lambda: f64) -> Result<f64> {
    Ok(Exponential::new(lambda)?.entropy())
}

// ---------------------------------------------------------------------------
// Gaussian
// ---------------------------------------------------------------------------

/// Standard normal variate.
pub fn std_gaussian_rvs<R: RngCore>(engine: &mut Engine<R>) -> Result<f64> {
    Ok(crate::ziggurat::standard_normal(engine))
}

pub fn gaussian_rvs<R: RngCore>(engine: &mut Engine<R>, mu: f64, sigma: f64) -> Result<f64> {
    Normal::new(mu, sigma)?.sample(engine)
}

continuous_fns!(Normal(mu, sigma), gaussian_pdf, gaussian_logpdf, gaussian_cdf, gaussian_logcdf,
    gaussian_sf, gaussian_logsf, gaussian_ppf, gaussian_isf);

/// Entropy depends only on the scale.
pub fn gaussian_entropy(sigma: f64) -> Result<f64> {
    Ok(Normal::new(0.0, sigma)?.entropy())
}

// ---------------------------------------------------------------------------
// Gamma, Beta, Chi-square, F
// ---------------------------------------------------------------------------

/// Gamma(`shape`, 1) variate.
pub fn std_gamma_rvs<R: RngCore>(engine: &mut Engine<R>, shape: f64) -> Result<f64> {
    Gamma::new(shape, 1.0)?.sample(engine)
}

pub fn gamma_rvs<R: RngCore>(engine: &mut Engine<R>, shape: f64, scale: f64) -> Result<f64> {
    Gamma::new(shape, scale)?.sample(engine)
}

continuous_fns!(Gamma(shape, scale), gamma_pdf, gamma_logpdf, gamma_cdf, gamma_logcdf, gamma_sf,
    gamma_logsf, gamma_ppf, gamma_isf);

pub fn gamma_entropy(shape: f64, scale: f64) -> Result<f64> {
    Ok(Gamma::new(shape, scale)?.entropy())
}

pub fn beta_rvs<R: RngCore>(engine: &mut Engine<R>, a: f64, b: f64) -> Result<f64> {
    Beta::new(a, b)?.sample(engine)
}

continuous_fns!(Beta(a, b), beta_pdf, beta_logpdf, beta_cdf, beta_logcdf, beta_sf, beta_logsf,
    beta_ppf, beta_isf);

pub fn beta_entropy(a: f64, b: f64) -> Result<f64> {
    Ok(Beta::new(a, b)?.entropy())
}

pub fn chisquare_rvs<R: RngCore>(engine: &mut Engine<R>, df: f64) -> Result<f64> {
    ChiSquare::new(df)?.sample(engine)
}

continuous_fns!(ChiSquare(df), chisquare_pdf, chisquare_logpdf, chisquare_cdf, chisquare_logcdf,
    chisquare_sf, chisquare_logsf, chisquare_ppf, chisquare_isf);

pub fn chisquare_entropy(df: f64) -> Result<f64> {
    Ok(ChiSquare::new(df)?.entropy())
}

pub fn noncentral_chisquare_rvs<R: RngCore>(
    engine: &mut Engine<R>,
    df: f64,
    nc: f64,
) -> Result<f64> {
    NoncentralChiSquare::new(df, nc)?.sample(engine)
}

pub fn f_rvs<R: RngCore>(engine: &mut Engine<R>, d1: f64, d2: f64) -> Result<f64> {
    FisherF::new(d1, d2)?.sample(engine)
}

continuous_fns!(FisherF(d1, d2), f_pdf, f_logpdf, f_cdf, f_logcdf, f_sf, f_logsf, f_ppf, f_isf);

pub fn f_entropy(d1: f64, d2: f64) -> Result<f64> {
    Ok(FisherF::new(d1, d2)?.entropy())
}

pub fn noncentral_f_rvs<R: RngCore>(
    engine: &mut Engine<R>,
    d1: f64,
    d2: f64,
    nc: f64,
) -> Result<f64> {
    NoncentralF::new(d1, d2, nc)?.sample(engine)
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

pub fn negative_binomial_rvs<R: RngCore>(engine: &mut Engine<R>, n: f64, p: f64) -> Result<u64> {
    NegativeBinomial::new(n, p)?.sample(engine)
}

discrete_fns!(NegativeBinomial(n: f64, p: f64), negative_binomial_pmf, negative_binomial_logpmf,
    negative_binomial_cdf, negative_binomial_logcdf, negative_binomial_sf, negative_binomial_logsf);

pub fn poisson_rvs<R: RngCore>(engine: &mut Engine<R>, lambda: f64) -> Result<u64> {
    Poisson::new(lambda)?.sample(engine)
}

discrete_fns!(Poisson(lambda: f64), poisson_pmf, poisson_logpmf, poisson_cdf, poisson_logcdf,
    poisson_sf, poisson_logsf);

pub fn geometric_rvs<R: RngCore>(engine: &mut Engine<R>, p: f64) -> Result<u64> {
    Geometric::new(p)?.sample(engine)
}

discrete_fns!(Geometric(p: f64), geometric_pmf, geometric_logpmf, geometric_cdf, geometric_logcdf,
    geometric_sf, geometric_logsf);

pub fn geometric_entropy(p: f64) -> Result<f64> {
    Ok(Geometric::new(p)?.entropy())
}

pub fn hypergeometric_rvs<R: RngCore>(
    engine: &mut Engine<R>,
    ngood: u64,
    nbad: u64,
    nsample: u64,
) -> Result<u64> {
    Hypergeometric::new(ngood, nbad, nsample)?.sample(engine)
}

discrete_fns!(Hypergeometric(ngood: u64, nbad: u64, nsample: u64), hypergeometric_pmf,
    hypergeometric_logpmf, hypergeometric_cdf, hypergeometric_logcdf, hypergeometric_sf,
    hypergeometric_logsf);

pub fn zipf_rvs<R: RngCore>(engine: &mut Engine<R>, a: f64) -> Result<u64> {
    Zipf::new(a)?.sample(engine)
}

pub fn logseries_rvs<R: RngCore>(engine: &mut Engine<R>, p: f64) -> Result<u64> {
    LogSeries::new(p)?.sample(engine)
}

pub fn logseries_pmf(k: u64, p: f64) -> Result<f64> {
    Ok(LogSeries::new(p)?.pmf(k))
}

pub fn logseries_logpmf(k: u64, p: f64) -> Result<f64> {
    Ok(LogSeries::new(p)?.logpmf(k))
}

// ---------------------------------------------------------------------------
// Location-scale and heavy-tailed families
// ---------------------------------------------------------------------------

/// Standard Cauchy variate.
pub fn std_cauchy_rvs<R: RngCore>(engine: &mut Engine<R>) -> Result<f64> {
    Ok(crate::cauchy::standard_cauchy(engine))
}

pub fn cauchy_rvs<R: RngCore>(engine: &mut Engine<R>, loc: f64, scale: f64) -> Result<f64> {
    Cauchy::new(loc, scale)?.sample(engine)
}

continuous_fns!(Cauchy(loc, scale), cauchy_pdf, cauchy_logpdf, cauchy_cdf, cauchy_logcdf,
    cauchy_sf, cauchy_logsf, cauchy_ppf, cauchy_isf);

pub fn cauchy_entropy(scale: f64) -> Result<f64> {
    Ok(Cauchy::new(0.0, scale)?.entropy())
}

/// Standard Student-t variate.
pub fn std_t_rvs<R: RngCore>(engine: &mut Engine<R>, df: f64) -> Result<f64> {
    StudentT::standard(df)?.sample(engine)
}

pub fn t_rvs<R: RngCore>(engine: &mut Engine<R>, df: f64, loc: f64, scale: f64) -> Result<f64> {
    StudentT::new(df, loc, scale)?.sample(engine)
}

continuous_fns!(StudentT(df, loc, scale), t_pdf, t_logpdf, t_cdf, t_logcdf, t_sf, t_logsf, t_ppf,
    t_isf);

/// Entropy of the standard (unit-scale) Student-t.
pub fn t_entropy(df: f64) -> Result<f64> {
    Ok(StudentT::standard(df)?.entropy())
}

pub fn laplace_rvs<R: RngCore>(engine: &mut Engine<R>, loc: f64, scale: f64) -> Result<f64> {
    Laplace::new(loc, scale)?.sample(engine)
}

continuous_fns!(Laplace(loc, scale), laplace_pdf, laplace_logpdf, laplace_cdf, laplace_logcdf,
    laplace_sf, laplace_logsf, laplace_ppf, laplace_isf);

pub fn laplace_entropy(loc: f64, scale: f64) -> Result<f64> {
    Ok(Laplace::new(loc, scale)?.entropy())
}

pub fn gumbel_rvs<R: RngCore>(engine: &mut Engine<R>, loc: f64, scale: f64) -> Result<f64> {
    Gumbel::new(loc, scale)?.sample(engine)
}

continuous_fns!(Gumbel(loc, scale), gumbel_pdf, gumbel_logpdf, gumbel_cdf, gumbel_logcdf,
    gumbel_sf, gumbel_logsf, gumbel_ppf, gumbel_isf);

pub fn gumbel_entropy(loc: f64, scale: f64) -> Result<f64> {
    Ok(Gumbel::new(loc, scale)?.entropy())
}

pub fn logistic_rvs<R: RngCore>(engine: &mut Engine<R>, loc: f64, scale: f64) -> Result<f64> {
    Logistic::new(loc, scale)?.sample(engine)
}

continuous_fns!(Logistic(loc, scale), logistic_pdf, logistic_logpdf, logistic_cdf,
    logistic_logcdf, logistic_sf, logistic_logsf, logistic_ppf, logistic_isf);

pub fn logistic_entropy(loc: f64, scale: f64) -> Result<f64> {
    Ok(Logistic::new(loc, scale)?.entropy())
}

pub fn lognormal_rvs<R: RngCore>(engine: &mut Engine<R>, mu: f64, sigma: f64) -> Result<f64> {
    LogNormal::new(mu, sigma)?.sample(engine)
}

continuous_fns!(LogNormal(mu, sigma), lognormal_pdf, lognormal_logpdf, lognormal_cdf,
    lognormal_logcdf, lognormal_sf, lognormal_logsf, lognormal_ppf, lognormal_isf);

pub fn lognormal_entropy(mu: f64, sigma: f64) -> Result<f64> {
    Ok(LogNormal::new(mu, sigma)?.entropy())
}

// ---------------------------------------------------------------------------
// Positive-support shape families
// ---------------------------------------------------------------------------

/// Pareto II (Lomax) variate with unit scale.
pub fn pareto_rvs<R: RngCore>(engine: &mut Engine<R>, a: f64) -> Result<f64> {
    Pareto::new(a)?.sample(engine)
}

continuous_fns!(Pareto(a), pareto_pdf, pareto_logpdf, pareto_cdf, pareto_logcdf, pareto_sf,
    pareto_logsf, pareto_ppf, pareto_isf);

pub fn pareto_entropy(a: f64) -> Result<f64> {
    Ok(Pareto::new(a)?.entropy())
}

pub fn weibull_rvs<R: RngCore>(engine: &mut Engine<R>, k: f64, lambda: f64) -> Result<f64> {
    Weibull::new(k, lambda)?.sample(engine)
}

continuous_fns!(Weibull(k, lambda), weibull_pdf, weibull_logpdf, weibull_cdf, weibull_logcdf,
    weibull_sf, weibull_logsf, weibull_ppf, weibull_isf);

pub fn weibull_entropy(k: f64, lambda: f64) -> Result<f64> {
    Ok(Weibull::new(k, lambda)?.entropy())
}

pub fn power_rvs<R: RngCore>(engine: &mut Engine<R>, a: f64) -> Result<f64> {
    Power::new(a)?.sample(engine)
}

continuous_fns!(Power(a), power_pdf, power_logpdf, power_cdf, power_logcdf, power_sf, power_logsf,
    power_ppf, power_isf);

pub fn power_entropy(a: f64) -> Result<f64> {
    Ok(Power::new(a)?.entropy())
}

pub fn rayleigh_rvs<R: RngCore>(engine: &mut Engine<R>, sigma: f64) -> Result<f64> {
    Rayleigh::new(sigma)?.sample(engine)
}

continuous_fns!(Rayleigh(sigma), rayleigh_pdf, rayleigh_logpdf, rayleigh_cdf, rayleigh_logcdf,
    rayleigh_sf, rayleigh_logsf, rayleigh_ppf, rayleigh_isf);

pub fn rayleigh_entropy(sigma: f64) -> Result<f64> {
    Ok(Rayleigh::new(sigma)?.entropy())
}

pub fn wald_rvs<R: RngCore>(engine: &mut Engine<R>, mean: f64, scale: f64) -> Result<f64> {
    Wald::new(mean, scale)?.sample(engine)
}

pub fn wald_pdf(x: f64, mean: f64, scale: f64) -> Result<f64> {
    Ok(Wald::new(mean, scale)?.pdf(x))
}

pub fn wald_logpdf(x: f64, mean: f64, scale: f64) -> Result<f64> {
    Ok(Wald::new(mean, scale)?.logpdf(x))
}

pub fn wald_cdf(x: f64, mean: f64, scale: f64) -> Result<f64> {
    Ok(Wald::new(mean, scale)?.cdf(x))
}

pub fn wald_sf(x: f64, mean: f64, scale: f64) -> Result<f64> {
    Ok(Wald::new(mean, scale)?.sf(x))
}

// ---------------------------------------------------------------------------
// Bounded and circular families
// ---------------------------------------------------------------------------

pub fn triangular_rvs<R: RngCore>(
    engine: &mut Engine<R>,
    left: f64,
    mode: f64,
    right: f64,
) -> Result<f64> {
    Triangular::new(left, mode, right)?.sample(engine)
}

continuous_fns!(Triangular(left, mode, right), triangular_pdf, triangular_logpdf, triangular_cdf,
    triangular_logcdf, triangular_sf, triangular_logsf, triangular_ppf, triangular_isf);

pub fn triangular_entropy(left: f64, mode: f64, right: f64) -> Result<f64> {
    Ok(Triangular::new(left, mode, right)?.entropy())
}

pub fn vonmises_rvs<R: RngCore>(engine: &mut Engine<R>, mu: f64, kappa: f64) -> Result<f64> {
    VonMises::new(mu, kappa)?.sample(engine)
}

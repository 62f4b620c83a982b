use criterion::{Criterion, criterion_group, criterion_main};
use ns_prob::prelude::*;
use std::hint::black_box;

fn bench_analytic(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();

    let normal = Normal::new(0.0, 1.3).unwrap();
    c.bench_function("normal_logpdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += normal.logpdf(x);
            }
            black_box(acc)
        })
    });

    let t = StudentT::new(7.0, 0.0, 1.3).unwrap();
    c.bench_function("student_t_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += t.cdf(x);
            }
            black_box(acc)
        })
    });

    let ks: Vec<u64> = (0..10_000).map(|i| (i % 30) as u64).collect();
    let poisson = Poisson::new(3.2).unwrap();
    c.bench_function("poisson_logpmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &k in &ks {
                acc += poisson.logpmf(k);
            }
            black_box(acc)
        })
    });

    let qs: Vec<f64> = (0..1_000).map(|i| ((i as f64) + 0.5) / 1_000.0).collect();
    let gamma = Gamma::new(2.2, 3.3).unwrap();
    c.bench_function("gamma_ppf_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &q in &qs {
                acc += gamma.ppf(q).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("gaussian_ppf_facade_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &q in &qs {
                acc += ns_prob::distributions::gaussian_ppf(q, 0.0, 1.0).unwrap();
            }
            black_box(acc)
        })
    });
}

fn bench_sampling(c: &mut Criterion) {
    ns_prob::distributions::ziggurat_init();

    c.bench_function("std_normal_rvs_10k", |b| {
        let mut engine = Engine::seed_from_u64(1);
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..10_000 {
                acc += ns_prob::ziggurat::standard_normal(&mut engine);
            }
            black_box(acc)
        })
    });

    for &(name, shape) in &[("gamma_rvs_shape_0.5_10k", 0.5), ("gamma_rvs_shape_4_10k", 4.0)] {
        let gamma = Gamma::new(shape, 1.0).unwrap();
        c.bench_function(name, |b| {
            let mut engine = Engine::seed_from_u64(2);
            b.iter(|| {
                let mut acc = 0.0;
                for _ in 0..10_000 {
                    acc += gamma.sample(&mut engine).unwrap();
                }
                black_box(acc)
            })
        });
    }

    for &(name, lambda) in &[("poisson_rvs_mult_10k", 4.0), ("poisson_rvs_ptrs_10k", 250.0)] {
        let poisson = Poisson::new(lambda).unwrap();
        c.bench_function(name, |b| {
            let mut engine = Engine::seed_from_u64(3);
            b.iter(|| {
                let mut acc = 0u64;
                for _ in 0..10_000 {
                    acc += poisson.sample(&mut engine).unwrap();
                }
                black_box(acc)
            })
        });
    }

    let hyper = Hypergeometric::new(600, 400, 120).unwrap();
    c.bench_function("hypergeometric_rvs_10k", |b| {
        let mut engine = Engine::seed_from_u64(4);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..10_000 {
                acc += hyper.sample(&mut engine).unwrap();
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_analytic, bench_sampling);
criterion_main!(benches);

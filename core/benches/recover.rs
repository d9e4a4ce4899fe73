use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use num_traits::Zero;

use math::field;
use shamir_core::params::default_modulus;
use shamir_core::shamir::{find_actual_secret, reconstruct_secret, Share};

const CONFIGURATIONS: &[(usize, usize)] = &[(2, 4), (3, 6), (4, 8)];

fn build_shares(
    coefficients: &[BigUint],
    count: usize,
    modulus: &BigUint,
) -> Vec<Share> {
    (1..=count as u32)
        .map(|x| {
            let x = BigUint::from(x);
            let mut y = BigUint::zero();
            for coefficient in coefficients.iter().rev() {
                y = field::add(
                    &field::multiply(&y, &x, modulus),
                    coefficient,
                    modulus,
                );
            }
            Share::new(x, y)
        })
        .collect()
}

fn fixed_coefficients(length: usize) -> Vec<BigUint> {
    (0..length as u32)
        .map(|i| BigUint::from(1_234_567u32 + 1_000 * i))
        .collect()
}

fn bench_consensus(c: &mut Criterion) {
    let modulus = default_modulus();
    let mut group = c.benchmark_group("consensus");

    for &(threshold, count) in CONFIGURATIONS {
        // 1. Fixed shares with the last one corrupted
        let coefficients = fixed_coefficients(threshold);
        let mut shares = build_shares(&coefficients, count, &modulus);
        shares[count - 1].y = field::add(
            &shares[count - 1].y,
            &BigUint::from(1u32),
            &modulus,
        );

        group.bench_function(format!("{threshold}-of-{count}"), |b| {
            b.iter(|| {
                // 2. Vote across every combination
                let secret = find_actual_secret(
                    black_box(&shares),
                    black_box(threshold),
                    &modulus,
                )
                .expect("honest majority reaches consensus");
                assert_eq!(secret, coefficients[0]);
            });
        });
    }

    group.finish();
}

fn bench_single_reconstruction(c: &mut Criterion) {
    let modulus = default_modulus();
    let mut group = c.benchmark_group("reconstruction");

    for &(threshold, count) in CONFIGURATIONS {
        let coefficients = fixed_coefficients(threshold);
        let shares = build_shares(&coefficients, count, &modulus);

        group.bench_function(format!("{threshold}-shares"), |b| {
            b.iter(|| {
                let secret = reconstruct_secret(
                    black_box(&shares[..threshold]),
                    &modulus,
                )
                .expect("distinct abscissae interpolate");
                assert_eq!(secret, coefficients[0]);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_consensus, bench_single_reconstruction);
criterion_main!(benches);

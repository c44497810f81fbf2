//! # Avalanche Tests
//!
//! Statistical diffusion checks for every algorithm tag: flipping one input
//! bit should flip close to half of the output bits.
//!
//! Run with: cargo test --package kismet_hash --test avalanche_test

use kismet_hash::{avalanche_32, avalanche_64, MixAlgorithm};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_every_32_bit_algorithm_avalanches() {
    for algorithm in MixAlgorithm::ALL {
        let report = avalanche_32(algorithm, 512, 7);
        println!(
            "{algorithm:>16}: index {:.3} seed {:.3}",
            report.index_bias, report.seed_bias
        );
        assert!(
            report.worst_deviation() < 0.12,
            "{algorithm} diffuses poorly: {report:?}"
        );
    }
}

#[test]
fn test_every_64_bit_algorithm_avalanches_on_index() {
    for algorithm in MixAlgorithm::ALL {
        let report = avalanche_64(algorithm, 256, 7);
        assert!(
            (report.index_bias - 0.5).abs() < 0.1,
            "{algorithm} index diffusion: {report:?}"
        );
    }
}

#[test]
fn test_64_bit_seed_diffusion() {
    for algorithm in MixAlgorithm::ALL {
        let report = avalanche_64(algorithm, 256, 7);
        assert!((report.seed_bias - 0.5).abs() < 0.1, "{algorithm}: {report:?}");
    }
}

#[test]
fn test_random_inputs_avalanche() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    for algorithm in MixAlgorithm::ALL {
        let mix = algorithm.mixer32();
        let mut flipped = 0u64;
        let mut trials = 0u64;

        for _ in 0..400 {
            let index: u32 = rng.gen();
            let seed: u32 = rng.gen();
            let bit = rng.gen_range(0..32);
            let base = mix(index, seed);
            flipped += u64::from((base ^ mix(index ^ (1 << bit), seed)).count_ones());
            trials += 32;
        }

        let bias = flipped as f64 / trials as f64;
        assert!((bias - 0.5).abs() < 0.12, "{algorithm}: {bias:.3}");
    }
}

#[test]
fn test_outputs_cover_both_halves() {
    // crude uniformity: the top bit should be set about half the time
    for algorithm in MixAlgorithm::ALL {
        let high = (0..4096u32)
            .filter(|&i| algorithm.mix32(i, 99) & 0x8000_0000 != 0)
            .count();
        assert!((1600..2500).contains(&high), "{algorithm}: {high}/4096");
    }
}

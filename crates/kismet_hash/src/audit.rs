//! # Avalanche Audit
//!
//! Measures how many output bits flip when one input bit flips. A good mixer
//! sits near 0.5 for both the index and the seed.
//!
//! Sample inputs are themselves drawn by lookup (a `BalancedMix` stream over
//! the sample number), so an audit is reproducible and needs no RNG.

use crate::algorithm::MixAlgorithm;
use crate::mix32::{self, fmix32};
use crate::mix64::{self, fmix64};

/// Average fraction of output bits flipped per single-bit input flip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvalancheReport {
    /// The audited algorithm.
    pub algorithm: MixAlgorithm,
    /// Output width in bits (32 or 64).
    pub width: u32,
    /// Mean flipped fraction when flipping index bits.
    pub index_bias: f64,
    /// Mean flipped fraction when flipping seed bits.
    pub seed_bias: f64,
    /// Number of `(index, seed)` pairs sampled.
    pub samples: u32,
}

impl AvalancheReport {
    /// Largest distance of either bias from the ideal 0.5.
    #[must_use]
    pub fn worst_deviation(&self) -> f64 {
        (self.index_bias - 0.5).abs().max((self.seed_bias - 0.5).abs())
    }
}

fn sample_pair_32(sample: u32, stream: u32) -> (u32, u32) {
    let index = mix32::balanced_mix(sample, fmix32(stream));
    let seed = mix32::balanced_mix(index, fmix32(stream ^ 0xA5A5_A5A5));
    (index, seed)
}

fn sample_pair_64(sample: u32, stream: u32) -> (u64, u64) {
    let index = mix64::balanced_mix(u64::from(sample), fmix64(u64::from(stream)));
    let seed = mix64::balanced_mix(index, fmix64(u64::from(stream) ^ 0xA5A5_A5A5));
    (index, seed)
}

/// Audits the 32-bit mixer of `algorithm` over `samples` input pairs.
#[must_use]
pub fn avalanche_32(algorithm: MixAlgorithm, samples: u32, stream: u32) -> AvalancheReport {
    let mix = algorithm.mixer32();
    let mut index_flips = 0u64;
    let mut seed_flips = 0u64;

    for sample in 0..samples {
        let (index, seed) = sample_pair_32(sample, stream);
        let base = mix(index, seed);
        for bit in 0..32 {
            index_flips += u64::from((base ^ mix(index ^ (1 << bit), seed)).count_ones());
            seed_flips += u64::from((base ^ mix(index, seed ^ (1 << bit))).count_ones());
        }
    }

    finish(algorithm, 32, samples, index_flips, seed_flips)
}

/// Audits the 64-bit mixer of `algorithm` over `samples` input pairs.
#[must_use]
pub fn avalanche_64(algorithm: MixAlgorithm, samples: u32, stream: u32) -> AvalancheReport {
    let mix = algorithm.mixer64();
    let mut index_flips = 0u64;
    let mut seed_flips = 0u64;

    for sample in 0..samples {
        let (index, seed) = sample_pair_64(sample, stream);
        let base = mix(index, seed);
        for bit in 0..64 {
            index_flips += u64::from((base ^ mix(index ^ (1 << bit), seed)).count_ones());
            seed_flips += u64::from((base ^ mix(index, seed ^ (1 << bit))).count_ones());
        }
    }

    finish(algorithm, 64, samples, index_flips, seed_flips)
}

fn finish(
    algorithm: MixAlgorithm,
    width: u32,
    samples: u32,
    index_flips: u64,
    seed_flips: u64,
) -> AvalancheReport {
    // flips per (sample, input bit, output bit)
    let trials = f64::from(samples.max(1)) * f64::from(width) * f64::from(width);
    AvalancheReport {
        algorithm,
        width,
        index_bias: index_flips as f64 / trials,
        seed_bias: seed_flips as f64 / trials,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_is_reproducible() {
        let a = avalanche_32(MixAlgorithm::BalancedMix, 64, 1);
        let b = avalanche_32(MixAlgorithm::BalancedMix, 64, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_balanced_mix_avalanches() {
        let report = avalanche_32(MixAlgorithm::BalancedMix, 256, 0);
        assert!(report.worst_deviation() < 0.05, "{report:?}");
    }

    #[test]
    fn test_zero_samples_reports_zero() {
        let report = avalanche_64(MixAlgorithm::BitScramble, 0, 0);
        assert_eq!(report.index_bias, 0.0);
        assert_eq!(report.samples, 0);
    }
}

//! # 32-bit Mixers
//!
//! Integer scramblers that turn an `(index, seed)` pair into a well-diffused
//! `u32`. Every function here is a `const fn` over wrapping arithmetic, so the
//! output is identical on every platform and in every build profile.
//!
//! Callers normally reach these through [`MixAlgorithm`](crate::MixAlgorithm)
//! rather than by name.

/// Golden-ratio multiplier (`2^32 / phi`).
pub const GOLDEN: u32 = 0x9E37_79B9;

/// First finalization multiplier (MurmurHash3 `c1`).
pub const FINAL1: u32 = 0x85EB_CA6B;

/// Second finalization multiplier (MurmurHash3 `c2`).
pub const FINAL2: u32 = 0xC2B2_AE35;

/// ChaCha "expand 32-byte k" constant words.
pub const CHACHA_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646E, 0x7962_2D32, 0x6B20_6574];

/// ChaCha quarter-round rotation amounts.
const CHACHA_ROTATIONS: [u32; 4] = [16, 12, 8, 7];

/// Signature shared by every 32-bit mixer.
pub type Mixer32 = fn(u32, u32) -> u32;

/// Circular left shift.
#[inline]
#[must_use]
pub const fn rotate_left(value: u32, bits: u32) -> u32 {
    value.rotate_left(bits)
}

/// Multiply/xor-shift scrambler with an additive seed.
#[inline]
#[must_use]
pub const fn bit_scramble(index: u32, seed: u32) -> u32 {
    let mut m = index.wrapping_mul(GOLDEN);
    m = m.wrapping_add(seed);
    m ^= m >> 8;
    m = m.wrapping_add(FINAL1);
    m ^= m << 8;
    m = m.wrapping_mul(FINAL2);
    m ^= m >> 8;
    m
}

/// Xor-seeded two-multiply finalizer. The default algorithm.
///
/// Note that `(0, 0)` is a fixed point: every step maps zero to zero.
#[inline]
#[must_use]
pub const fn balanced_mix(index: u32, seed: u32) -> u32 {
    let mut m = index ^ seed;
    m = m.wrapping_mul(FINAL1);
    m ^= m >> 13;
    m = m.wrapping_mul(FINAL2);
    m ^= m >> 16;
    m
}

/// Rotate-xor scrambler.
#[inline]
#[must_use]
pub const fn rotational_mix(index: u32, seed: u32) -> u32 {
    let mut m = index.wrapping_mul(GOLDEN).wrapping_add(seed);
    m ^= rotate_left(m, 5);
    m = m.wrapping_mul(FINAL2);
    m ^= rotate_left(m, 13);
    m ^= m >> 16;
    m
}

/// One ChaCha quarter round over four words, folded to a single word.
#[inline]
const fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> u32 {
    let [r1, r2, r3, r4] = CHACHA_ROTATIONS;

    a = a.wrapping_add(b);
    d = rotate_left(d ^ a, r1);
    c = c.wrapping_add(d);
    b = rotate_left(b ^ c, r2);
    a = a.wrapping_add(b);
    d = rotate_left(d ^ a, r3);
    c = c.wrapping_add(d);
    b = rotate_left(b ^ c, r4);

    a ^ b ^ c ^ d
}

/// Initial ChaCha words derived from the raw inputs.
///
/// The seed must reach `d` non-linearly, or its high bits cancel against the
/// copy arriving through `a += b`.
#[inline]
const fn chacha_words(index: u32, seed: u32) -> [u32; 4] {
    let [c0, c1, c2, c3] = CHACHA_CONSTANTS;
    [
        c0.wrapping_add(index),
        c1.wrapping_add(seed),
        c2 ^ index ^ seed,
        c3 ^ index.wrapping_mul(GOLDEN) ^ (seed ^ (seed >> 16)).wrapping_mul(FINAL1),
    ]
}

/// Single ChaCha quarter round seeded from `index` and `seed`.
#[inline]
#[must_use]
pub const fn chacha_simple(index: u32, seed: u32) -> u32 {
    let [a, b, c, d] = chacha_words(index, seed);
    quarter_round(a, b, c, d)
}

/// [`chacha_simple`] with an extra index/seed cross-term folded into `c`.
///
/// The multiplier is forced odd so the step stays a bijection on `c`.
#[inline]
#[must_use]
pub const fn chacha_advanced(index: u32, seed: u32) -> u32 {
    let [a, b, c, d] = chacha_words(index, seed);
    let cross = (index.wrapping_mul(GOLDEN) ^ seed) | 1;
    quarter_round(a, b, c.wrapping_mul(cross), d)
}

/// MurmurHash3 32-bit finalizer. Bijective.
#[inline]
#[must_use]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(FINAL1);
    h ^= h >> 13;
    h = h.wrapping_mul(FINAL2);
    h ^= h >> 16;
    h
}

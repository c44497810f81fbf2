//! # 64-bit Mixers
//!
//! Wide counterparts of [`mix32`](crate::mix32). Same structure, wider
//! constants and shift amounts.

/// Golden-ratio multiplier (`2^64 / phi`).
pub const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// First finalization multiplier (MurmurHash3 `fmix64`).
pub const FINAL1: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Second finalization multiplier (MurmurHash3 `fmix64`).
pub const FINAL2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// ChaCha constant words, each repeated into both halves.
pub const CHACHA_CONSTANTS: [u64; 4] = [
    0x6170_7865_6170_7865,
    0x3320_646E_3320_646E,
    0x7962_2D32_7962_2D32,
    0x6B20_6574_6B20_6574,
];

const CHACHA_ROTATIONS: [u32; 4] = [32, 24, 16, 7];

/// Signature shared by every 64-bit mixer.
pub type Mixer64 = fn(u64, u64) -> u64;

/// Circular left shift.
#[inline]
#[must_use]
pub const fn rotate_left(value: u64, bits: u32) -> u64 {
    value.rotate_left(bits)
}

/// Multiply/xor-shift scrambler with an additive seed.
#[inline]
#[must_use]
pub const fn bit_scramble(index: u64, seed: u64) -> u64 {
    let mut m = index.wrapping_mul(GOLDEN);
    m = m.wrapping_add(seed);
    m ^= m >> 17;
    m = m.wrapping_add(FINAL1);
    m ^= m << 21;
    m = m.wrapping_mul(FINAL2);
    m ^= m >> 13;
    m
}

/// Xor-seeded two-multiply finalizer. The default algorithm.
#[inline]
#[must_use]
pub const fn balanced_mix(index: u64, seed: u64) -> u64 {
    let mut m = index ^ seed;
    m = m.wrapping_mul(FINAL1);
    m ^= m >> 29;
    m = m.wrapping_mul(FINAL2);
    m ^= m >> 32;
    m
}

/// Rotate-xor scrambler.
#[inline]
#[must_use]
pub const fn rotational_mix(index: u64, seed: u64) -> u64 {
    let mut m = index.wrapping_mul(GOLDEN).wrapping_add(seed);
    m ^= rotate_left(m, 17);
    m = m.wrapping_mul(FINAL2);
    m ^= rotate_left(m, 41);
    m ^= m >> 33;
    m
}

#[inline]
const fn quarter_round(mut a: u64, mut b: u64, mut c: u64, mut d: u64) -> u64 {
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

#[inline]
const fn chacha_words(index: u64, seed: u64) -> [u64; 4] {
    let [c0, c1, c2, c3] = CHACHA_CONSTANTS;
    [
        c0.wrapping_add(index),
        c1.wrapping_add(seed),
        c2 ^ index ^ seed,
        c3 ^ index.wrapping_mul(GOLDEN) ^ (seed ^ (seed >> 32)).wrapping_mul(FINAL1),
    ]
}

/// Single ChaCha quarter round seeded from `index` and `seed`.
#[inline]
#[must_use]
pub const fn chacha_simple(index: u64, seed: u64) -> u64 {
    let [a, b, c, d] = chacha_words(index, seed);
    quarter_round(a, b, c, d)
}

/// [`chacha_simple`] with an odd index/seed cross-term multiplied into `c`.
#[inline]
#[must_use]
pub const fn chacha_advanced(index: u64, seed: u64) -> u64 {
    let [a, b, c, d] = chacha_words(index, seed);
    let cross = (index.wrapping_mul(GOLDEN) ^ seed) | 1;
    quarter_round(a, b, c.wrapping_mul(cross), d)
}

/// MurmurHash3 64-bit finalizer. Bijective.
#[inline]
#[must_use]
pub const fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(FINAL1);
    h ^= h >> 33;
    h = h.wrapping_mul(FINAL2);
    h ^= h >> 33;
    h
}

//! Deterministic hashing based on splitmix64/32. No stateful RNG in inner loops:
//! every cell derives its value from its own coordinates and the seed.

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[inline]
pub fn splitmix32(mut x: u32) -> u32 {
    x = x.wrapping_add(0x9E3779B9);
    let mut z = x;
    z = (z ^ (z >> 16)).wrapping_mul(0x7FEB352D);
    z = (z ^ (z >> 15)).wrapping_mul(0x846CA68B);
    z ^ (z >> 16)
}

/// Fold a 64-bit user seed and a per-stage salt into a 32-bit hash seed.
#[inline]
pub fn seed_u32(seed: u64, salt: u64) -> u32 {
    splitmix64(seed ^ salt) as u32
}

#[inline]
pub fn hash2(ix: u32, iy: u32, seed: u32) -> u32 {
    let mut h = seed ^ 0x9E3779B9;
    h = splitmix32(h ^ ix.wrapping_mul(0x85EBCA6B));
    h = splitmix32(h ^ iy.wrapping_mul(0xC2B2AE35));
    h
}

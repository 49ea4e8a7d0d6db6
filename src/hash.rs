//! 32-bit hashers usable with [`HyperLogLog`](crate::HyperLogLog).
//!
//! Any type implementing [`hash32::Hasher`] and [`Default`] can be plugged in
//! as the estimator's hash function, e.g. [`hash32::Murmur3Hasher`].
//! Estimates are only comparable between estimators using the same hasher.

use std::hash::Hasher;

use wyhash::WyHash;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1 hasher (multiply, then xor each byte).
#[derive(Debug, Clone, Copy)]
pub struct Fnv1Hasher {
    state: u32,
}

impl Default for Fnv1Hasher {
    #[inline]
    fn default() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1Hasher {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(FNV_PRIME);
            self.state ^= u32::from(byte);
        }
    }
}

impl hash32::Hasher for Fnv1Hasher {
    #[inline]
    fn finish32(&self) -> u32 {
        self.state
    }
}

/// 32-bit FNV-1a hasher (xor, then multiply each byte).
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher {
    state: u32,
}

impl Default for Fnv1aHasher {
    #[inline]
    fn default() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u32::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

impl hash32::Hasher for Fnv1aHasher {
    #[inline]
    fn finish32(&self) -> u32 {
        self.state
    }
}

/// Adapter folding the 64-bit output of [`WyHash`] into 32 bits.
#[derive(Default)]
pub struct WyHash32(WyHash);

impl Hasher for WyHash32 {
    #[inline]
    fn finish(&self) -> u64 {
        self.0.finish()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
}

impl hash32::Hasher for WyHash32 {
    #[inline]
    fn finish32(&self) -> u32 {
        let h = self.0.finish();
        ((h >> 32) ^ h) as u32
    }
}

/// Hash `bytes` with a fresh instance of `H`.
#[inline]
pub(crate) fn hash_bytes<H: hash32::Hasher + Default>(bytes: &[u8]) -> u32 {
    let mut hasher = H::default();
    hasher.write(bytes);
    hasher.finish32()
}

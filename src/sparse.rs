//! ## Sparse representation
//! Stores only non-zero registers as `index -> rank` entries, so memory grows
//! with the number of touched registers instead of the register count.

use std::mem::size_of;

use hashbrown::HashMap;

use crate::representation::{inverse_pow2, RepresentationTrait};

/// Sparse representation container
#[derive(Clone, Debug, Default)]
pub(crate) struct Sparse {
    registers: HashMap<u32, u8>,
}

impl Sparse {
    /// Iterate over non-zero registers as `(index, rank)` pairs
    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.registers.iter().map(|(&idx, &rank)| (idx, rank))
    }
}

impl RepresentationTrait for Sparse {
    #[inline]
    fn register(&self, idx: u32) -> u8 {
        self.registers.get(&idx).copied().unwrap_or(0)
    }

    #[inline]
    fn update(&mut self, idx: u32, rank: u8) -> bool {
        if rank == 0 {
            return false;
        }
        let entry = self.registers.entry(idx).or_insert(0);
        if rank > *entry {
            *entry = rank;
            return true;
        }
        false
    }

    #[inline]
    fn len(&self) -> usize {
        self.registers.len()
    }

    fn harmonic_sum(&self, m: usize) -> (f64, usize) {
        let zeros = m - self.registers.len();
        let sum = self
            .registers
            .values()
            .fold(zeros as f64, |acc, &rank| acc + inverse_pow2(rank));
        (sum, zeros)
    }

    /// Approximate heap usage: one `(u32, u8)` slot plus one control byte per bucket.
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + self.registers.capacity() * (size_of::<(u32, u8)>() + 1)
    }
}

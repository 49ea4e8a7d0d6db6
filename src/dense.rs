//! ## Dense representation
//! Stores every register as one byte, `m` bytes in total.

use std::mem::{size_of, size_of_val};

use crate::representation::{inverse_pow2, RepresentationTrait};
use crate::sparse::Sparse;

/// Dense representation container
#[derive(Clone, Debug)]
pub(crate) struct Dense {
    registers: Box<[u8]>,
}

impl Dense {
    /// Create `m` zero registers
    pub(crate) fn new(m: usize) -> Self {
        Self {
            registers: vec![0u8; m].into_boxed_slice(),
        }
    }

    /// Expand sparse registers into `m` dense registers
    pub(crate) fn from_sparse(sparse: &Sparse, m: usize) -> Self {
        let mut dense = Self::new(m);
        for (idx, rank) in sparse.iter() {
            dense.registers[idx as usize] = rank;
        }
        dense
    }
}

impl RepresentationTrait for Dense {
    #[inline]
    fn register(&self, idx: u32) -> u8 {
        self.registers[idx as usize]
    }

    #[inline]
    fn update(&mut self, idx: u32, rank: u8) -> bool {
        let register = &mut self.registers[idx as usize];
        if rank > *register {
            *register = rank;
            return true;
        }
        false
    }

    #[inline]
    fn len(&self) -> usize {
        self.registers.iter().filter(|&&rank| rank != 0).count()
    }

    fn harmonic_sum(&self, _m: usize) -> (f64, usize) {
        self.registers
            .iter()
            .fold((0.0, 0), |(sum, zeros), &rank| {
                (sum + inverse_pow2(rank), zeros + usize::from(rank == 0))
            })
    }

    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(&*self.registers)
    }
}

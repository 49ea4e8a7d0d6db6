use enum_dispatch::enum_dispatch;

use crate::dense::Dense;
use crate::sparse::Sparse;

/// Storage representations of the estimator's registers.
#[derive(Clone, Debug)]
#[enum_dispatch]
pub(crate) enum Representation {
    Sparse(Sparse),
    Dense(Dense),
}

/// Representation trait which must be implemented by all representations.
///
/// Every representation models the same logical sequence of `m` registers,
/// where absent registers read as zero.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationTrait {
    /// Return rank stored in register `idx`
    fn register(&self, idx: u32) -> u8;
    /// Raise register `idx` to `rank` if `rank` is greater than its value.
    /// Returns whether the register changed.
    fn update(&mut self, idx: u32, rank: u8) -> bool;
    /// Return number of non-zero registers
    fn len(&self) -> usize;
    /// Return `Σ 2^(-register)` over all `m` registers and number of zero registers
    fn harmonic_sum(&self, m: usize) -> (f64, usize);
    /// Return memory size of the representation
    fn size_of(&self) -> usize;
}

/// Public tag of the representation currently used by an estimator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepresentationKind {
    Sparse,
    Dense,
}

impl Representation {
    #[inline]
    pub(crate) fn kind(&self) -> RepresentationKind {
        match self {
            Representation::Sparse(_) => RepresentationKind::Sparse,
            Representation::Dense(_) => RepresentationKind::Dense,
        }
    }
}

/// Return `2^(-rank)`
#[inline]
pub(crate) fn inverse_pow2(rank: u8) -> f64 {
    1.0 / ((1u64 << rank) as f64)
}

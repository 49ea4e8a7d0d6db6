//! HyperLogLog estimator allows to estimate number of distinct values
//! in a stream and is defined by the requested relative error `err`:
//! - `err`: relative error bound in [0.00001..0.01] range, which defines
//!   precision `k = ceil(log2((1.04 / err)^2))` and `m = 2^k` registers.
//! - `H`: 32-bit hasher type, [`Fnv1Hasher`] by default.
//!
//! # Insertion
//!
//! Every value is hashed into 32 bits. The high `k` bits select a register,
//! the rank is the position of the lowest set bit among the low `32 - k` bits
//! (capped at `32 - k + 1`), and the register keeps the maximum rank seen.
//!
//! # Estimation
//!
//! Raw estimate is `alpha * m^2 / Σ 2^(-register)`, corrected by:
//! - linear counting `m * ln(m / V)` when the raw estimate is `<= 2.5 * m`
//!   and `V > 0` registers are still zero;
//! - `-2^32 * ln(1 - E / 2^32)` when the raw estimate exceeds `2^32 / 30`.
//!
//! # Data storage format
//! Registers start in the sparse representation, storing only non-zero
//! registers, and move to the dense representation of `m` bytes once more
//! than `m / 32` registers are set, the point where the hash map
//! would outgrow the dense array.
//!
//! Expected error for common bounds:
//!   err = 0.01:  k = 14, m = 16384 registers
//!   err = 0.005: k = 16, m = 65536 registers
//!   err = 0.001: k = 21, m = 2097152 registers

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use tracing::debug;

use crate::dense::Dense;
use crate::error::Error;
use crate::hash::{hash_bytes, Fnv1Hasher};
use crate::representation::{Representation, RepresentationKind, RepresentationTrait};
use crate::sparse::Sparse;

/// Smallest accepted relative error bound
pub const MIN_ERROR: f64 = 0.00001;
/// Largest accepted relative error bound
pub const MAX_ERROR: f64 = 0.01;
/// Smallest accepted precision (16 registers)
pub const MIN_PRECISION: u8 = 4;
/// Largest precision, all 32 hash bits select the register
pub const MAX_PRECISION: u8 = 32;

/// Sparse representation is kept while at most `m / SPARSE_DIVISOR` registers are non-zero.
const SPARSE_DIVISOR: usize = 32;
/// Size of the 32-bit hash space
const TWO_POW_32: f64 = 4_294_967_296.0;
/// Raw estimates above this value get the large range correction
const LARGE_RANGE_THRESHOLD: f64 = (1.0 / 30.0) * TWO_POW_32;

/// Ensure that only 64-bit architecture is being used.
#[cfg(target_pointer_width = "64")]
pub struct HyperLogLog<H: hash32::Hasher + Default = Fnv1Hasher> {
    /// Number of hash bits selecting the register
    precision: u8,
    /// Bias correction constant for `2^precision` registers
    alpha: f64,
    /// Register storage
    representation: Representation,
    _hasher: PhantomData<H>,
}

impl<H: hash32::Hasher + Default> HyperLogLog<H> {
    /// Creates new estimator with relative error bound `err`.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `err` is in
    /// `[MIN_ERROR, MAX_ERROR]`.
    pub fn new(err: f64) -> Result<Self, Error> {
        if !(MIN_ERROR..=MAX_ERROR).contains(&err) {
            return Err(Error::InvalidParameter {
                name: "err",
                value: err,
                min: MIN_ERROR,
                max: MAX_ERROR,
            });
        }
        Self::with_precision(precision_for_error(err))
    }

    /// Creates new estimator with `2^precision` registers.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `precision` is in
    /// `[MIN_PRECISION, MAX_PRECISION]`.
    pub fn with_precision(precision: u8) -> Result<Self, Error> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Error::InvalidParameter {
                name: "precision",
                value: f64::from(precision),
                min: f64::from(MIN_PRECISION),
                max: f64::from(MAX_PRECISION),
            });
        }

        let m = 1usize << precision;
        let alpha = alpha(m);
        debug!(precision, registers = m, alpha, "created hyperloglog estimator");

        Ok(Self {
            precision,
            alpha,
            representation: Sparse::default().into(),
            _hasher: PhantomData,
        })
    }

    /// Add a value, hashed from its byte representation
    #[inline]
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, value: &T) {
        self.add_hash(hash_bytes::<H>(value.as_ref()));
    }

    /// Add a precomputed 32-bit hash.
    ///
    /// Hashes must come from the same function `H` used for all other values,
    /// otherwise the estimate is meaningless.
    #[inline]
    pub fn add_hash(&mut self, hash: u32) {
        let rank_bits = self.rank_bits();
        let rank = (hash.trailing_zeros().min(u32::from(rank_bits)) + 1) as u8;
        // `precision >= 4` so the shift is always below 32
        let idx = hash >> rank_bits;

        if self.representation.update(idx, rank) {
            self.upgrade_if_needed();
        }
    }

    /// Return cardinality estimate
    pub fn count(&self) -> usize {
        let registers = self.register_count();
        let m = registers as f64;
        let (sum, zeros) = self.representation.harmonic_sum(registers);
        let mut estimate = self.alpha * m * m / sum;

        if estimate <= 2.5 * m {
            // With no zero registers the raw estimate is kept
            if zeros > 0 {
                estimate = m * (m / zeros as f64).ln();
            }
        } else if estimate > LARGE_RANGE_THRESHOLD && estimate < TWO_POW_32 {
            estimate = -TWO_POW_32 * (1.0 - estimate / TWO_POW_32).ln();
        }

        estimate as usize
    }

    /// Return number of registers `m`
    #[inline]
    pub fn register_count(&self) -> usize {
        1 << self.precision
    }

    /// Return number of hash bits selecting the register
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Return number of low hash bits scanned for the rank
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        32 - self.precision
    }

    /// Return bias correction constant
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Return rank stored in register `idx`, or `None` when out of range
    #[inline]
    pub fn register(&self, idx: usize) -> Option<u8> {
        (idx < self.register_count()).then(|| self.representation.register(idx as u32))
    }

    /// Return whether no value has been added yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.representation.len() == 0
    }

    /// Return representation type of the estimator
    #[inline]
    pub fn representation(&self) -> RepresentationKind {
        self.representation.kind()
    }

    /// Return memory size of the estimator
    #[inline]
    pub fn size_of(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<Representation>()
            + self.representation.size_of()
    }

    /// Move from sparse to dense representation once sparse stops paying off
    fn upgrade_if_needed(&mut self) {
        let m = self.register_count();
        let Representation::Sparse(sparse) = &self.representation else {
            return;
        };
        if sparse.len() <= m / SPARSE_DIVISOR {
            return;
        }

        let dense = Dense::from_sparse(sparse, m);
        debug!(
            registers = m,
            non_zero = sparse.len(),
            "upgrading hyperloglog to dense representation"
        );
        self.representation = dense.into();
    }
}

impl<H: hash32::Hasher + Default> Clone for HyperLogLog<H> {
    fn clone(&self) -> Self {
        Self {
            precision: self.precision,
            alpha: self.alpha,
            representation: self.representation.clone(),
            _hasher: PhantomData,
        }
    }
}

impl<H: hash32::Hasher + Default> PartialEq for HyperLogLog<H> {
    /// Estimators are equal when they hold the same logical registers
    fn eq(&self, rhs: &Self) -> bool {
        if self.precision != rhs.precision {
            return false;
        }
        let (lhs, rhs) = (&self.representation, &rhs.representation);
        lhs.len() == rhs.len()
            && (0..self.register_count())
                .all(|idx| lhs.register(idx as u32) == rhs.register(idx as u32))
    }
}

impl<H: hash32::Hasher + Default> Debug for HyperLogLog<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ representation: {:?}, estimate: {}, size: {} }}",
            self.representation(),
            self.count(),
            self.size_of()
        )
    }
}

/// Precision for relative error bound `err`, capped at `MAX_PRECISION`
#[inline]
fn precision_for_error(err: f64) -> u8 {
    let m = 1.04 / err;
    (m * m).log2().ceil().min(f64::from(MAX_PRECISION)) as u8
}

/// Parameter for bias correction
#[inline]
pub(crate) fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

//! `hll-estimator` is a Rust crate designed to estimate the number of distinct values in a stream
//! or dataset within a chosen relative error bound.
//!
//! This library implements HyperLogLog over 32-bit hashes with linear counting for small
//! cardinalities and a large range correction near the limit of the 32-bit hash space.
//!
//! ```
//! use hll_estimator::HyperLogLog;
//!
//! let mut hll: HyperLogLog = HyperLogLog::new(0.01).unwrap();
//! hll.add("first visitor");
//! hll.add("second visitor");
//! hll.add("first visitor");
//! assert_eq!(hll.count(), 2);
//! ```
mod dense;
pub mod error;
pub mod estimator;
pub mod hash;
mod representation;
mod sparse;

pub use error::Error;
pub use estimator::HyperLogLog;
pub use hash::{Fnv1Hasher, Fnv1aHasher, WyHash32};
pub use representation::RepresentationKind;

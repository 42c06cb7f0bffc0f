//! Fair-partition arithmetic over a fixed total and bucket count
//!
//! A [`Partition`] divides `total` items across `buckets` buckets by
//! placing the boundary of bucket `i` at `floor(total / buckets * i)`.
//! Boundaries computed this way give every bucket either
//! `floor(total / buckets)` or one more item, and the bucket sizes sum
//! to the total exactly.
//!
//! The quotient is never evaluated in floating point. Boundary math
//! widens both operands to `u128` and multiplies before dividing, so
//! the floor of the real-valued product is exact even for totals that
//! would lose precision as IEEE doubles.

use crate::Error;
use num_traits::{NumCast, PrimInt, Unsigned};
use serde::Serialize;
use std::ops::Range;

/// Types that can be used as item totals and bucket counts
pub trait Count: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> Count for T {}

/// Widen a count into the 128-bit space used for boundary arithmetic.
#[inline(always)]
fn to_wide<T: Count>(value: T) -> u128 {
    value
        .to_u128()
        .expect("unsigned primitive counts always fit in 128 bits")
}

/// Narrow an exact boundary value back into the count type.
#[inline(always)]
fn from_wide<T: Count>(value: u128) -> T {
    NumCast::from(value).expect("boundary values never exceed the partitioned total")
}

/// Fair division of an item total across a fixed number of buckets
///
/// A `Partition` holds nothing but the validated pair of counts;
/// boundaries and sizes are computed on demand. Bucket `i` owns the
/// item indices `boundary(i) .. boundary(i + 1)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Partition<T: Count> {
    /// Total number of items shared by all buckets
    total: T,
    /// Number of buckets dividing the total, always nonzero
    buckets: T,
}

impl<T: Count> Partition<T> {
    /// Divide `total` items across `buckets` buckets.
    ///
    /// Returns [`Error::ZeroBuckets`] when `buckets` is zero. A total
    /// of zero is valid and yields empty buckets.
    pub fn new(total: T, buckets: T) -> Result<Self, Error> {
        if buckets.is_zero() {
            Err(Error::ZeroBuckets)
        } else {
            Ok(Self { total, buckets })
        }
    }

    /// Build a [`Partition`] from a bucket count that is already known
    /// to be nonzero, without the possibility of failure.
    ///
    /// Used by the rebalancer and the range splitter.
    pub(crate) fn from_validated(total: T, buckets: T) -> Self {
        debug_assert!(!buckets.is_zero());
        Self { total, buckets }
    }

    /// Total number of items covered by this partition.
    pub fn total(&self) -> T {
        self.total
    }

    /// Number of buckets dividing the total.
    pub fn buckets(&self) -> T {
        self.buckets
    }

    /// First item index owned by the `index`-th bucket,
    /// `floor(total / buckets * index)` computed exactly.
    ///
    /// Boundaries are defined for `index` in `[0, buckets]`; the first
    /// boundary is zero and the last equals the total.
    ///
    /// Panics if the bucket index is out of range, or if `total` and
    /// `index` are together wide enough to overflow the 128-bit
    /// intermediate product.
    #[inline(always)]
    pub fn boundary(&self, index: T) -> T {
        assert!(index <= self.buckets);
        let scaled = to_wide(self.total)
            .checked_mul(to_wide(index))
            .expect("boundary products fit in 128 bits for totals up to 64 bits");
        from_wide(scaled / to_wide(self.buckets))
    }

    /// Number of items owned by the `index`-th bucket.
    ///
    /// Every size is either `total / buckets` or one more, and the
    /// sizes of all buckets sum to the total exactly.
    ///
    /// Panics if the bucket index is out of range.
    pub fn size(&self, index: T) -> T {
        assert!(index < self.buckets);
        self.boundary(index + T::one()) - self.boundary(index)
    }

    /// Item index range owned by the `index`-th bucket.
    ///
    /// Consecutive ranges tile `[0, total)` with no gaps and no
    /// overlap.
    ///
    /// Panics if the bucket index is out of range.
    pub fn range(&self, index: T) -> Range<T> {
        assert!(index < self.buckets);
        self.boundary(index)..self.boundary(index + T::one())
    }

    /// All bucket boundaries in increasing order.
    ///
    /// The result holds `buckets + 1` values, starting at zero and
    /// ending at the total.
    ///
    /// Panics if the bucket count cannot be materialized as a `usize`
    /// collection length.
    pub fn boundaries(&self) -> Vec<T> {
        let buckets = self
            .buckets
            .to_usize()
            .expect("materialized partitions have usize-sized bucket counts");
        let mut result = Vec::with_capacity(buckets.saturating_add(1));
        let mut index = T::zero();
        loop {
            result.push(self.boundary(index));
            if index == self.buckets {
                break;
            }
            index = index + T::one();
        }
        result
    }

    /// All bucket sizes in index order.
    ///
    /// Panics if the bucket count cannot be materialized as a `usize`
    /// collection length.
    pub fn sizes(&self) -> Vec<T> {
        let buckets = self
            .buckets
            .to_usize()
            .expect("materialized partitions have usize-sized bucket counts");
        let mut result = Vec::with_capacity(buckets);
        let mut index = T::zero();
        while index < self.buckets {
            result.push(self.size(index));
            index = index + T::one();
        }
        result
    }
}

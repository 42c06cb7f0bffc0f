#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]

mod err;
mod partition;
mod rebalance;
mod share;

pub use err::Error;
pub use partition::{Count, Partition};
pub use rebalance::rebalance;
pub use share::WorkSplit;

/// Compute one fair-partition boundary.
///
/// Returns the first item index owned by the `index`-th of `buckets`
/// buckets dividing `total` items, `floor(total / buckets * index)`
/// computed exactly. Equivalent to building a [`Partition`] and calling
/// [`Partition::boundary()`].
///
/// Returns [`Error::ZeroBuckets`] when `buckets` is zero. Panics if the
/// bucket index is out of range.
pub fn partition_boundary<T: Count>(total: T, buckets: T, index: T) -> Result<T, Error> {
    Ok(Partition::new(total, buckets)?.boundary(index))
}

/// Divide `problem_size` work items across `workers` workers.
///
/// Equivalent to [`WorkSplit::new()`]. The returned split reports both
/// per-worker share sizes and per-worker index ranges.
///
/// Returns [`Error::ZeroBuckets`] when `workers` is zero.
pub fn split_range<T: Count>(problem_size: T, workers: T) -> Result<WorkSplit<T>, Error> {
    WorkSplit::new(problem_size, workers)
}

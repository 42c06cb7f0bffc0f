//! Redistribution of elements across unevenly sized arrays

use crate::partition::Partition;

/// Rebalance element counts across a set of arrays.
///
/// Target sizes come from the fair partition of the total element count
/// across `arrays.len()` buckets, computed once up front. The pass
/// visits each array once as a source, in index order. A source holding
/// more than its target sheds `min(surplus, deficit)` trailing elements
/// to each undersized array met in index order, recomputing its surplus
/// as it shrinks.
///
/// Element order is preserved except at the seams: oversized arrays
/// give up elements from their tail, and receiving arrays append them
/// in the same order. The total element count is conserved exactly, and
/// no transfer ever pushes an array past its target size.
///
/// An empty slice is left untouched.
pub fn rebalance<E>(arrays: &mut [Vec<E>]) {
    if arrays.is_empty() {
        return;
    }
    let total: usize = arrays.iter().map(Vec::len).sum();
    let plan = Partition::from_validated(total, arrays.len());

    for source in 0..arrays.len() {
        if arrays[source].len() > plan.size(source) {
            for target in 0..arrays.len() {
                if arrays[target].len() < plan.size(target) {
                    // The surplus shrinks with every transfer and the outer
                    // check keeps it nonnegative for the whole inner scan.
                    let surplus = arrays[source].len() - plan.size(source);
                    let deficit = plan.size(target) - arrays[target].len();
                    let transfer = surplus.min(deficit);
                    let moved = arrays[source].split_off(arrays[source].len() - transfer);
                    arrays[target].extend(moved);
                }
            }
        }
    }
}

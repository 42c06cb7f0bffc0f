//! Fuzzer for the array rebalancer.
//!
//! Builds an array collection from arbitrary lengths, rebalances it, and
//! checks the result against the fair-partition plan computed separately.

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitx::Partition;

#[derive(Clone, Debug, Arbitrary)]
struct Layout {
    // One entry per array; values are taken modulo a small cap
    lengths: Vec<u16>,
}

const MAX_ARRAYS: usize = 64;
const MAX_LEN: usize = 256;

fuzz_target!(|layout: Layout| {
    // Elements are tagged with their array of origin and position, so
    // they stay unique across the whole collection.
    let mut arrays: Vec<Vec<u32>> = layout
        .lengths
        .iter()
        .take(MAX_ARRAYS)
        .enumerate()
        .map(|(index, &len)| {
            (0..(len as usize) % MAX_LEN)
                .map(|item| ((index as u32) << 16) | item as u32)
                .collect()
        })
        .collect();

    let originals = arrays.clone();
    let total: usize = arrays.iter().map(Vec::len).sum();

    splitx::rebalance(&mut arrays);

    if arrays.is_empty() {
        return;
    }

    // A single pass always lands exactly on the plan sizes, since every
    // oversized source finds enough deficit to drain into.
    let plan = Partition::new(total, arrays.len()).unwrap();
    let lengths: Vec<usize> = arrays.iter().map(Vec::len).collect();
    assert_eq!(lengths, plan.sizes());

    // No element lost or duplicated
    let mut before: Vec<u32> = originals.iter().flatten().copied().collect();
    let mut after: Vec<u32> = arrays.iter().flatten().copied().collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);

    // Every array keeps its surviving prefix untouched
    for (original, rebalanced) in originals.iter().zip(&arrays) {
        let kept = original.len().min(rebalanced.len());
        assert_eq!(original[..kept], rebalanced[..kept]);
    }
});

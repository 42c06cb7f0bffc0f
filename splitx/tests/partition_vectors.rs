//! Boundary and size vectors for the fair-partition arithmetic

use splitx::{Error, Partition};

#[test]
fn boundary_tables() {
    let partition = Partition::new(21_u64, 5).unwrap();
    assert_eq!(partition.boundaries(), vec![0, 4, 8, 12, 16, 21]);
    assert_eq!(partition.sizes(), vec![4, 4, 4, 4, 5]);

    let partition = Partition::new(19_u64, 5).unwrap();
    assert_eq!(partition.boundaries(), vec![0, 3, 7, 11, 15, 19]);
    assert_eq!(partition.sizes(), vec![3, 4, 4, 4, 4]);
}

#[test]
fn invariant_grid() {
    // Sizes sum to the total and stay within one of each other for
    // every pair in a small grid, including totals below the bucket
    // count.
    for total in 0_u64..=64 {
        for buckets in 1_u64..=17 {
            let partition = Partition::new(total, buckets).unwrap();

            let sizes = partition.sizes();
            assert_eq!(sizes.len() as u64, buckets);
            assert_eq!(sizes.iter().sum::<u64>(), total);
            let smallest = *sizes.iter().min().unwrap();
            let largest = *sizes.iter().max().unwrap();
            assert!(largest - smallest <= 1);

            let boundaries = partition.boundaries();
            assert_eq!(boundaries.len() as u64, buckets + 1);
            assert_eq!(boundaries[0], 0);
            assert_eq!(*boundaries.last().unwrap(), total);
            assert!(boundaries.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}

#[test]
fn ranges_match_boundary_pairs() {
    let partition = Partition::new(1024_u32, 28).unwrap();
    let boundaries = partition.boundaries();
    for index in 0..28 {
        let range = partition.range(index);
        assert_eq!(range.start, boundaries[index as usize]);
        assert_eq!(range.end, boundaries[index as usize + 1]);
        assert_eq!(range.end - range.start, partition.size(index));
    }
}

#[test]
fn wide_totals_stay_exact() {
    // floor(1e18 / 3) in 64-bit float arithmetic lands on
    // 333333333333333312; the exact quotient ends in ...333.
    let partition = Partition::new(1_000_000_000_000_000_000_u64, 3).unwrap();
    assert_eq!(partition.boundary(0), 0);
    assert_eq!(partition.boundary(1), 333_333_333_333_333_333);
    assert_eq!(partition.boundary(2), 666_666_666_666_666_666);
    assert_eq!(partition.boundary(3), 1_000_000_000_000_000_000);
    assert_eq!(
        partition.sizes().iter().sum::<u64>(),
        1_000_000_000_000_000_000
    );
}

#[test]
fn u64_max_total_stays_exact() {
    let total = u64::MAX;
    let partition = Partition::new(total, 7).unwrap();
    assert_eq!(partition.sizes().iter().sum::<u64>(), total);
    assert_eq!(partition.boundary(7), total);
}

#[test]
fn single_bucket_takes_everything() {
    let partition = Partition::new(9_u8, 1).unwrap();
    assert_eq!(partition.sizes(), vec![9]);
    assert_eq!(partition.range(0), 0..9);
}

#[test]
fn zero_buckets_rejected() {
    assert!(matches!(Partition::new(5_u32, 0), Err(Error::ZeroBuckets)));
    assert!(matches!(Partition::new(0_u32, 0), Err(Error::ZeroBuckets)));
    assert!(matches!(
        splitx::partition_boundary(5_u32, 0, 0),
        Err(Error::ZeroBuckets)
    ));
}

#[test]
fn convenience_boundary_matches_instance() {
    let partition = Partition::new(21_u64, 5).unwrap();
    for index in 0..=5 {
        assert_eq!(
            splitx::partition_boundary(21_u64, 5, index).unwrap(),
            partition.boundary(index)
        );
    }
}

#[test]
fn reports_its_parameters() {
    let partition = Partition::new(42_u16, 6).unwrap();
    assert_eq!(partition.total(), 42);
    assert_eq!(partition.buckets(), 6);
}

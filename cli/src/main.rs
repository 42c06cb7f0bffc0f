use splitx::WorkSplit;
use strum::IntoEnumIterator;

#[derive(Debug, strum::Display, strum::EnumIter)]
enum Scenario {
    RebalanceArrays,
    SplitRange,
}

fn main() {
    for scenario in Scenario::iter() {
        println!("== {} ==", scenario);
        match scenario {
            Scenario::RebalanceArrays => rebalance_arrays(),
            Scenario::SplitRange => split_range(),
        }
        println!();
    }
}

fn rebalance_arrays() {
    // Create sample data
    let mut arrays = vec![
        vec![3, 5],
        vec![3, 6, 9, 7],
        vec![6, 9, 2, 7, 5, 2, 1, 2],
        vec![1, 4, 3],
        vec![4, 2, 5, 1],
    ];
    println!("before: {:?}", arrays);

    // Redistribute the tails of oversized arrays
    splitx::rebalance(&mut arrays);
    println!("after:  {:?}", arrays);
}

fn split_range() {
    // Divide a 1024-item workload across 28 workers
    match WorkSplit::new(1024_u32, 28) {
        Ok(split) => {
            println!("shares: {:?}", split.shares());
            println!("ranges: {:?}", split.ranges());
        }
        Err(err) => println!("split failed: {}", err),
    }
}

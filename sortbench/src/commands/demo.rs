use clap::Parser;
use seqsort::Algorithm;

use crate::report;

/// The fixed datasets every run of the demo sorts.
pub const DATASETS: [&[i32]; 3] = [
    &[42, 7, 13, 99, 1, 56],
    &[87, 23, 45, 12, 67, 34, 89, 5],
    &[9, 2, 7, 1, 4, 8, 3, 6, 5],
];

/// Sort the built-in sample datasets
#[derive(Parser)]
pub struct DemoArgs {}

impl DemoArgs {
    pub fn run(&self, algorithm: Algorithm) -> anyhow::Result<()> {
        for (i, numbers) in DATASETS.into_iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Original numbers: {:?}", numbers);
            let (sorted, elapsed) = report::timed_sort(algorithm, numbers)?;
            println!("Sorted numbers: {:?}", sorted);
            println!("Time taken: {}", report::format_millis(elapsed));
        }
        Ok(())
    }
}

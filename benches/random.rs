use std::ops::Range;

use harness::{bench, black_box, Bencher};
use rand::prelude::*;
use rand::rngs::SmallRng;

const LEN: usize = 1_000_000;
const RANGE: Range<usize> = 0..10000;

#[bench]
fn bench(bencher: &Bencher) {
    // prepare the inputs
    let mut rng = SmallRng::seed_from_u64(42);
    let list = black_box((0..LEN).map(|_| rng.gen_range(RANGE)).collect::<Vec<_>>());
    let checksum = list.iter().sum::<usize>();
    // timing
    let sorted = bencher.time(|| seqsort::sort(&list)).unwrap();
    // check the result
    assert!(seqsort::is_sorted(&sorted));
    assert_eq!(sorted.iter().sum::<usize>(), checksum);
    bencher.add_stat("len", sorted.len());
}

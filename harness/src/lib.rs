//! Timing harness for the seqsort benchmarks.
//!
//! A benchmark file holds one function annotated with [`bench`]. The function is
//! invoked once per iteration; all but the last iteration are warmups, and only
//! the closure passed to [`Bencher::time`] in the last one is reported.

mod bencher;
mod record;

pub use bencher::{measure, BenchArgs, BenchTimer, Bencher};
pub use harness_macros::bench;
pub use record::{StatPrintFormat, Value};
pub use std::hint::black_box;

#[doc(hidden)]
pub struct BenchTarget {
    pub crate_name: &'static str,
    pub file: &'static str,
    pub name: Option<&'static str>,
    pub oneshot: bool,
}

#[doc(hidden)]
pub fn run(target: BenchTarget, bench_fn: fn(&Bencher)) {
    let mut runner = bencher::SingleBenchmarkRunner::new(target, bench_fn);
    if let Err(e) = runner.run() {
        panic!("{}", e)
    }
}

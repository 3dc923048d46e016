use std::fmt::Debug;

use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seqsort::Algorithm;

use crate::{
    data::{self, DataKind},
    report,
};

/// Time seqsort against the standard library sort on random data
#[derive(Parser)]
pub struct RandomArgs {
    /// Number of values to generate
    pub n: usize,
    /// Kind of values to generate
    #[arg(short, long, value_enum, default_value = "whole")]
    pub kind: DataKind,
    /// Seed for the generator. Drawn from the thread RNG when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Do not print the arrays themselves
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl RandomArgs {
    pub fn run(&self, algorithm: Algorithm) -> anyhow::Result<()> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!("Generating {:?} data with seed {}", self.kind, seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        if !self.run_kind(self.kind, &mut rng, algorithm)? {
            anyhow::bail!("seqsort disagrees with the standard library sort");
        }
        Ok(())
    }

    fn run_kind(
        &self,
        kind: DataKind,
        rng: &mut SmallRng,
        algorithm: Algorithm,
    ) -> anyhow::Result<bool> {
        match kind {
            DataKind::Whole => {
                let data = data::whole_numbers(rng, self.n);
                self.compare("Integer", data, algorithm, |v| v.sort())
            }
            DataKind::Floats => {
                let data = data::floats(rng, self.n);
                self.compare("Float", data, algorithm, |v| v.sort_by(f64::total_cmp))
            }
            DataKind::Strings => {
                let data = data::strings(rng, self.n);
                self.compare("String", data, algorithm, |v| v.sort())
            }
            DataKind::All => {
                let mut matched = true;
                for (i, kind) in [DataKind::Whole, DataKind::Floats, DataKind::Strings]
                    .into_iter()
                    .enumerate()
                {
                    if i > 0 {
                        println!();
                    }
                    matched &= self.run_kind(kind, rng, algorithm)?;
                }
                Ok(matched)
            }
        }
    }

    fn compare<T: PartialOrd + Clone + Debug>(
        &self,
        label: &str,
        data: Vec<T>,
        algorithm: Algorithm,
        std_sort: impl FnOnce(&mut Vec<T>),
    ) -> anyhow::Result<bool> {
        println!("=== {} Benchmark (n={}) ===", label, self.n);
        if !self.quiet {
            println!("Original array: {:?}", data);
        }

        let mut baseline = data.clone();
        let ((), std_time) = harness::measure(|| std_sort(&mut baseline));
        if !self.quiet {
            println!("Std sorted array: {:?}", baseline);
        }
        println!(
            "Std sort: {:?} - Correct: {}",
            std_time,
            seqsort::is_sorted(&baseline)
        );

        let (sorted, time) = report::timed_sort(algorithm, &data)?;
        if !self.quiet {
            println!("Seqsort array: {:?}", sorted);
        }
        println!(
            "Seqsort ({:?}): {:?} - Correct: {}",
            algorithm,
            time,
            seqsort::is_sorted(&sorted)
        );

        Ok(report::print_comparison(&report::mismatches(
            &baseline, &sorted,
        )))
    }
}

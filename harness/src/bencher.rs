use std::{
    cell::{Cell, RefCell},
    path::Path,
    time::{Duration, Instant},
};

use clap::Parser;

use crate::{
    record::{Record, StatPrintFormat},
    BenchTarget, Value,
};

#[derive(Parser, Debug)]
pub struct BenchArgs {
    #[arg(long, default_value = "false")]
    pub bench: bool,
    #[arg(short = 'n', long, default_value = "1")]
    /// Number of iterations to run
    pub iterations: usize,
    /// How the statistics of the timing iteration are printed
    #[arg(long, value_enum, default_value = "table")]
    pub stat_format: StatPrintFormat,
    #[arg(long)]
    #[doc(hidden)]
    /// Overwrite benchmark name
    pub overwrite_benchmark_name: Option<String>,
    #[arg(long)]
    #[doc(hidden)]
    /// Overwrite crate name
    pub overwrite_crate_name: Option<String>,
}

/// Measures the wall-clock time of `f`.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

pub struct Bencher {
    elapsed: Cell<Option<Duration>>,
    timers: Cell<usize>,
    stats: RefCell<Vec<(String, Value)>>,
}

pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        self.bencher.elapsed.set(Some(self.start_time.elapsed()));
        self.bencher.timers.set(self.bencher.timers.get() + 1);
    }
}

impl Bencher {
    fn new() -> Self {
        Self {
            elapsed: Cell::new(None),
            timers: Cell::new(0),
            stats: RefCell::new(vec![]),
        }
    }

    fn reset(&self) {
        self.elapsed.set(None);
        self.timers.set(0);
        self.stats.borrow_mut().clear();
    }

    /// Starts the timed region. It ends when the returned guard is dropped.
    pub fn start_timing(&self) -> BenchTimer<'_> {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    /// Times `f` and hands back its result.
    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Reports an extra value next to `time` for this iteration.
    pub fn add_stat(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.stats.borrow_mut().push((name.into(), value.into()));
    }

    fn take_elapsed(&self) -> anyhow::Result<Duration> {
        match (self.timers.get(), self.elapsed.get()) {
            (1, Some(elapsed)) => Ok(elapsed),
            (0, _) | (_, None) => anyhow::bail!("No benchmark timer detected"),
            (n, _) => anyhow::bail!("{} benchmark timers detected, expected exactly one", n),
        }
    }
}

pub(crate) struct SingleBenchmarkRunner {
    crate_name: &'static str,
    name: String,
    oneshot: bool,
    bencher: Bencher,
    benchmark: fn(&Bencher),
}

impl SingleBenchmarkRunner {
    pub(crate) fn new(target: BenchTarget, benchmark: fn(&Bencher)) -> Self {
        let name = match target.name {
            Some(name) => name.to_owned(),
            None => Path::new(target.file)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("bench")
                .to_owned(),
        };
        Self {
            crate_name: target.crate_name,
            name,
            oneshot: target.oneshot,
            bencher: Bencher::new(),
            benchmark,
        }
    }

    fn run_once(&mut self) -> anyhow::Result<Duration> {
        self.bencher.reset();
        (self.benchmark)(&self.bencher);
        self.bencher.take_elapsed()
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        let args = BenchArgs::parse();
        self.run_with(&args)
    }

    fn run_with(&mut self, args: &BenchArgs) -> anyhow::Result<()> {
        let iterations = if self.oneshot { 1 } else { args.iterations };
        if iterations == 0 {
            anyhow::bail!("At least one iteration is required");
        }
        let name = args
            .overwrite_benchmark_name
            .clone()
            .unwrap_or_else(|| self.name.clone());
        let crate_name = args
            .overwrite_crate_name
            .clone()
            .unwrap_or_else(|| self.crate_name.to_owned());
        log::debug!("running {crate_name}/{name} for {iterations} iteration(s)");
        for i in 0..iterations {
            let is_timing_iteration = i == iterations - 1;
            let (start_label, end_label) = if !is_timing_iteration {
                (
                    format!("warmup {} ", i + 1),
                    format!("completed warmup {}", i + 1),
                )
            } else {
                ("".to_owned(), "PASSED".to_owned())
            };
            eprintln!(
                "===== {} {} starting {}=====",
                crate_name, name, start_label
            );
            let elapsed = self.run_once()?;
            let msec = elapsed.as_micros() as f64 / 1000.0;
            eprintln!(
                "===== {} {} {} in {:.1} msec =====",
                crate_name, name, end_label, msec
            );
            if is_timing_iteration {
                let mut stats = vec![("time".to_owned(), Value::Float(msec))];
                stats.append(&mut self.bencher.stats.borrow_mut());
                Record {
                    format: args.stat_format,
                    stats,
                }
                .dump_values()?;
            }
        }
        Ok(())
    }
}

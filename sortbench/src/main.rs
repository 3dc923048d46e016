use clap::{Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;

mod commands;
mod data;
mod report;

/// Time seqsort on sample datasets
#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Sorting algorithm under test
    #[arg(long, global = true, value_enum, default_value = "stable")]
    algorithm: AlgorithmArg,
}

#[derive(Subcommand)]
pub enum Commands {
    Demo(commands::demo::DemoArgs),
    Random(commands::random::RandomArgs),
    Values(commands::values::ValuesArgs),
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum AlgorithmArg {
    Stable,
    Unstable,
}

impl From<AlgorithmArg> for seqsort::Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Stable => Self::Stable,
            AlgorithmArg::Unstable => Self::Unstable,
        }
    }
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() -> anyhow::Result<()> {
    let args = &*CMD_ARGS;
    env_logger::init();
    let algorithm = seqsort::Algorithm::from(args.algorithm);
    log::debug!("using {:?} sort", algorithm);
    let result = match &args.command {
        Commands::Demo(cmd) => cmd.run(algorithm),
        Commands::Random(cmd) => cmd.run(algorithm),
        Commands::Values(cmd) => cmd.run(algorithm),
    };
    if let Err(err) = result {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), err.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}

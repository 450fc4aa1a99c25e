//! Batch driver: runs the selected strategies over every input instance and
//! writes one solution file per (instance, strategy).
//!
//! Usage:
//!   cargo run --features cli -- [OPTIONS] <INPUTS>...
//!
//! Set `RUST_LOG=u_knapsack=debug` to see improvements as they happen.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use u_knapsack::io::{load_path, save_path, solution_path};
use u_knapsack::solver::{create_rng, Solver, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Random,
    OptimalRecursive,
    OptimalIterative,
    RandomImproved,
}

#[derive(Parser, Debug)]
#[command(name = "u-knapsack")]
#[command(about = "Solve two-constraint 0/1 knapsack instances")]
struct Args {
    /// Instance files (CSV with a header line and one `knapsack` record).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Strategies to run, in order. Default: all four.
    #[arg(long = "strategy", value_enum)]
    strategies: Vec<StrategyArg>,

    /// Trials for the random-restart strategy.
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Trials for the random-improvement strategy.
    #[arg(long, default_value_t = 5000)]
    improvement_trials: usize,

    /// Seed for the random strategies. Omit for a fresh seed per run.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for solution files. Default: next to each input.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip exhaustive strategies for catalogs larger than this.
    #[arg(long, default_value_t = 25)]
    max_exhaustive_items: usize,
}

impl Args {
    fn strategies(&self) -> Vec<Strategy> {
        let selected = if self.strategies.is_empty() {
            vec![
                StrategyArg::Random,
                StrategyArg::OptimalRecursive,
                StrategyArg::OptimalIterative,
                StrategyArg::RandomImproved,
            ]
        } else {
            self.strategies.clone()
        };

        selected
            .into_iter()
            .map(|arg| match arg {
                StrategyArg::Random => Strategy::random_restart(self.trials),
                StrategyArg::OptimalRecursive => Strategy::exhaustive_recursive(),
                StrategyArg::OptimalIterative => Strategy::exhaustive_iterative(),
                StrategyArg::RandomImproved => {
                    Strategy::random_improvement(self.improvement_trials)
                }
            })
            .collect()
    }
}

fn solve_file(args: &Args, input: &Path, strategies: &[Strategy]) -> anyhow::Result<()> {
    info!(input = %input.display(), "solving");
    let (initial, catalog) =
        load_path(input).with_context(|| format!("loading {}", input.display()))?;
    let mut rng = create_rng(args.seed);

    for strategy in strategies {
        if strategy.is_exhaustive() && catalog.len() > args.max_exhaustive_items {
            warn!(
                strategy = strategy.name(),
                items = catalog.len(),
                limit = args.max_exhaustive_items,
                "skipping exhaustive strategy for large catalog"
            );
            continue;
        }

        let result = strategy
            .solve(&initial, &catalog, &mut rng)
            .with_context(|| format!("{} on {}", strategy.name(), input.display()))?;
        let output = solution_path(input, strategy.name(), args.output_dir.as_deref());
        save_path(&result.best, &output)
            .with_context(|| format!("writing {}", output.display()))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("u_knapsack=info")),
        )
        .init();

    let args = Args::parse();
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let strategies = args.strategies();
    let mut failures = 0usize;
    for input in &args.inputs {
        if let Err(err) = solve_file(&args, input, &strategies) {
            error!("{err:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs failed", args.inputs.len());
    }
    Ok(())
}

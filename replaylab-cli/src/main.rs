//! ReplayLab CLI — run simulations and generate price data.
//!
//! Commands:
//! - `run` — replay a price series through a strategy, from a TOML config
//!   file or from flags, and write the equity curve as CSV
//! - `synth` — generate a seeded synthetic price CSV for offline use

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use replaylab_core::data::{generate_series, load_csv};
use replaylab_core::domain::PriceSeries;
use replaylab_core::engine::{run_simulation, EngineConfig, RunResult};
use replaylab_core::signals::VolatilityBreakout;
use std::path::{Path, PathBuf};

mod config;
mod export;

use config::{DataConfig, RunConfig, StrategyConfig};

#[derive(Parser)]
#[command(
    name = "replaylab",
    about = "ReplayLab CLI — signal-driven market replay engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a price series through a strategy and report the equity curve.
    Run {
        /// Path to a TOML config file (mutually exclusive with the flags below).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to a `date,price` CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Generate this many synthetic bars instead of loading a CSV.
        #[arg(long)]
        synthetic: Option<usize>,

        /// Cash endowment. Ignored when --config is given.
        #[arg(long, default_value_t = 1_000_000.0)]
        cash: f64,

        /// Volatility breakout window. Ignored when --config is given.
        #[arg(long, default_value_t = VolatilityBreakout::DEFAULT_WINDOW)]
        window: usize,

        /// Seed for synthetic data. Ignored when --config is given.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output directory for the equity CSV.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print the summary only, write no files.
        #[arg(long, default_value_t = false)]
        no_artifacts: bool,
    },
    /// Generate a seeded synthetic price CSV.
    Synth {
        /// Number of bars to generate.
        #[arg(long, default_value_t = 252)]
        bars: usize,

        /// First bar's price.
        #[arg(long, default_value_t = 100.0)]
        start_price: f64,

        /// RNG seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file.
        #[arg(long, default_value = "prices.csv")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            csv,
            synthetic,
            cash,
            window,
            seed,
            output_dir,
            no_artifacts,
        } => run_cmd(
            config, csv, synthetic, cash, window, seed, output_dir, no_artifacts,
        ),
        Commands::Synth {
            bars,
            start_price,
            seed,
            out,
        } => synth_cmd(bars, start_price, seed, &out),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    config_path: Option<PathBuf>,
    csv: Option<PathBuf>,
    synthetic: Option<usize>,
    cash: f64,
    window: usize,
    seed: u64,
    output_dir: PathBuf,
    no_artifacts: bool,
) -> Result<()> {
    // Validate mutually exclusive options
    if config_path.is_some() && (csv.is_some() || synthetic.is_some()) {
        bail!("--config is mutually exclusive with --csv and --synthetic");
    }

    let run_config = if let Some(path) = config_path {
        RunConfig::from_file(&path)?
    } else {
        let data = match (csv, synthetic) {
            (Some(_), Some(_)) => bail!("--csv and --synthetic are mutually exclusive"),
            (Some(path), None) => DataConfig::Csv { path },
            (None, Some(bars)) => DataConfig::Synthetic {
                bars,
                start_price: 100.0,
                seed,
            },
            (None, None) => bail!("one of --config, --csv, or --synthetic is required"),
        };
        RunConfig {
            initial_cash: cash,
            strategy: StrategyConfig::VolatilityBreakout { window },
            data,
        }
    };

    if !run_config.initial_cash.is_finite() || run_config.initial_cash < 0.0 {
        bail!(
            "initial cash must be non-negative and finite, got {}",
            run_config.initial_cash
        );
    }

    let series = load_series(&run_config.data)?;
    let strategy = run_config.strategy.build()?;
    let engine_config = EngineConfig::new(run_config.initial_cash);
    let result = run_simulation(&series, strategy.as_ref(), &engine_config)?;

    let run_id = run_config.run_id();
    print_summary(
        &run_id,
        strategy.name(),
        &series,
        &result,
        run_config.initial_cash,
    );

    if !no_artifacts {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;
        let path = output_dir.join(format!("equity_{}.csv", &run_id[..16]));
        export::write_equity_csv(&path, &result.records)?;
        println!("Equity curve saved to: {}", path.display());
    }

    Ok(())
}

fn load_series(data: &DataConfig) -> Result<PriceSeries> {
    match data {
        DataConfig::Csv { path } => load_csv(path)
            .with_context(|| format!("failed to load price CSV {}", path.display())),
        DataConfig::Synthetic {
            bars,
            start_price,
            seed,
        } => {
            if !start_price.is_finite() || *start_price <= 0.0 {
                bail!("synthetic start price must be positive and finite, got {start_price}");
            }
            Ok(generate_series(*bars, *start_price, *seed))
        }
    }
}

fn synth_cmd(bars: usize, start_price: f64, seed: u64, out: &Path) -> Result<()> {
    if !start_price.is_finite() || start_price <= 0.0 {
        bail!("--start-price must be positive and finite, got {start_price}");
    }

    let series = generate_series(bars, start_price, seed);
    export::write_price_csv(out, &series)?;
    println!("Wrote {} bars to {}", series.len(), out.display());

    Ok(())
}

fn print_summary(
    run_id: &str,
    strategy_name: &str,
    series: &PriceSeries,
    result: &RunResult,
    initial_cash: f64,
) {
    println!();
    println!("=== ReplayLab Run ===");
    println!("Run ID:         {}", &run_id[..16]);
    println!("Strategy:       {strategy_name}");
    println!(
        "Dataset:        {} bars (fingerprint {})",
        series.len(),
        &series.fingerprint()[..12]
    );
    if let (Some(first), Some(last)) = (series.get(0), series.last()) {
        println!("Period:         {} to {}", first.date, last.date);
    }
    println!("Orders filled:  {}", result.order_count());
    println!();
    println!("--- Performance ---");
    println!("Initial cash:   {initial_cash:.2}");
    let final_equity = result.final_equity().unwrap_or(initial_cash);
    println!("Final equity:   {final_equity:.2}");
    let total_return = if initial_cash > 0.0 {
        final_equity / initial_cash - 1.0
    } else {
        0.0
    };
    println!("Total return:   {:.2}%", total_return * 100.0);
    println!();
}

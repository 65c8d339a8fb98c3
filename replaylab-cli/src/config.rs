//! Serializable run configuration.

use anyhow::{bail, Context, Result};
use replaylab_core::signals::{NullStrategy, Strategy, VolatilityBreakout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

/// Serializable configuration for a single simulation run.
///
/// Captures everything needed to reproduce the run: the cash endowment,
/// the strategy and its parameters, and the price data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Cash endowment the account starts with.
    pub initial_cash: f64,

    /// Strategy configuration.
    pub strategy: StrategyConfig,

    /// Price data source.
    pub data: DataConfig,
}

impl RunConfig {
    /// Computes a deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs share a RunId, so artifacts from
    /// repeated runs land on the same files.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        format!("{}", hash.to_hex())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse TOML config")
    }
}

/// Strategy configuration (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyConfig {
    /// Volatility breakout: latest return exceeds the trailing deviation
    /// of returns.
    VolatilityBreakout { window: usize },

    /// Never enters; baseline.
    Null,
}

impl StrategyConfig {
    /// Instantiate the configured strategy.
    pub fn build(&self) -> Result<Box<dyn Strategy>> {
        match self {
            StrategyConfig::VolatilityBreakout { window } => {
                if *window < 2 {
                    bail!("volatility breakout window must be >= 2, got {window}");
                }
                Ok(Box::new(VolatilityBreakout::new(*window)))
            }
            StrategyConfig::Null => Ok(Box::new(NullStrategy)),
        }
    }
}

/// Price data source (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataConfig {
    /// Load a `date,price` CSV file.
    Csv { path: PathBuf },

    /// Generate a seeded random walk.
    Synthetic {
        bars: usize,
        start_price: f64,
        seed: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_config() -> RunConfig {
        RunConfig {
            initial_cash: 1_000.0,
            strategy: StrategyConfig::VolatilityBreakout { window: 20 },
            data: DataConfig::Synthetic {
                bars: 252,
                start_price: 100.0,
                seed: 42,
            },
        }
    }

    #[test]
    fn parses_csv_config_from_toml() {
        let config = RunConfig::from_toml(
            r#"
initial_cash = 1000.0

[strategy]
type = "VOLATILITY_BREAKOUT"
window = 10

[data]
source = "CSV"
path = "prices.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.initial_cash, 1_000.0);
        assert_eq!(
            config.strategy,
            StrategyConfig::VolatilityBreakout { window: 10 }
        );
        assert_eq!(
            config.data,
            DataConfig::Csv {
                path: PathBuf::from("prices.csv"),
            }
        );
    }

    #[test]
    fn parses_synthetic_config_from_toml() {
        let config = RunConfig::from_toml(
            r#"
initial_cash = 500.0

[strategy]
type = "NULL"

[data]
source = "SYNTHETIC"
bars = 100
start_price = 50.0
seed = 7
"#,
        )
        .unwrap();

        assert_eq!(config.strategy, StrategyConfig::Null);
        assert_eq!(
            config.data,
            DataConfig::Synthetic {
                bars: 100,
                start_price: 50.0,
                seed: 7,
            }
        );
    }

    #[test]
    fn rejects_unknown_strategy_type() {
        let result = RunConfig::from_toml(
            r#"
initial_cash = 500.0

[strategy]
type = "MOON_PHASE"

[data]
source = "SYNTHETIC"
bars = 10
start_price = 100.0
seed = 1
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
initial_cash = 250.0

[strategy]
type = "NULL"

[data]
source = "CSV"
path = "data/prices.csv"
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.initial_cash, 250.0);
    }

    #[test]
    fn run_id_is_deterministic() {
        let config = sample_config();
        assert_eq!(config.run_id(), config.run_id());
    }

    #[test]
    fn run_id_changes_with_params() {
        let a = sample_config();
        let mut b = sample_config();
        b.initial_cash = 2_000.0;
        assert_ne!(a.run_id(), b.run_id());

        let mut c = sample_config();
        c.strategy = StrategyConfig::VolatilityBreakout { window: 21 };
        assert_ne!(a.run_id(), c.run_id());
    }

    #[test]
    fn build_instantiates_the_configured_strategy() {
        let strat = StrategyConfig::VolatilityBreakout { window: 14 }
            .build()
            .unwrap();
        assert_eq!(strat.name(), "volatility_breakout_14");

        let null = StrategyConfig::Null.build().unwrap();
        assert_eq!(null.name(), "null");
    }

    #[test]
    fn build_rejects_degenerate_window() {
        let err = StrategyConfig::VolatilityBreakout { window: 1 }
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("window must be >= 2"));
    }
}

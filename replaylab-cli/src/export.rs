//! CSV artifact writers.

use anyhow::{Context, Result};
use replaylab_core::domain::PriceSeries;
use replaylab_core::engine::EquityRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the per-bar equity curve as `date,cash,position,equity`.
pub fn write_equity_csv(path: &Path, records: &[EquityRecord]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create equity CSV {}", path.display()))?;

    writeln!(file, "date,cash,position,equity")?;
    for record in records {
        writeln!(
            file,
            "{},{:.4},{},{:.4}",
            record.date, record.cash, record.position, record.equity
        )?;
    }

    Ok(())
}

/// Writes a price series as `date,price`, the format `load_csv` reads back.
pub fn write_price_csv(path: &Path, series: &PriceSeries) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create price CSV {}", path.display()))?;

    writeln!(file, "date,price")?;
    for point in series.points() {
        writeln!(file, "{},{:.4}", point.date, point.price)?;
    }

    Ok(())
}

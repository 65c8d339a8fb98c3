//! Step-by-step simulation loop — the heart of the replay engine.
//!
//! Per step: take the one-step-delayed signal, reconcile the account's
//! position with the desired exposure via at most one market order, then
//! record the post-order account snapshot at this step's price.

use crate::domain::{Account, AccountError, MarketOrder, PriceSeries};
use crate::signals::{Signal, Strategy};
use thiserror::Error;

use super::state::{EngineConfig, EquityRecord, RunResult};

/// Units bought on an entry. Exits always sell the whole position.
const ENTRY_QUANTITY: i64 = 1;

/// Why a run aborted. Results are all-or-nothing: the first failure ends
/// the run and no records are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("account rejected order: {0}")]
    Account(#[from] AccountError),

    #[error("strategy returned {actual} signals for {expected} price points")]
    SignalMisaligned { expected: usize, actual: usize },
}

/// Shift a raw signal series forward one step.
///
/// The signal computed at index t-1 is the one acted on at index t; index 0
/// has nothing to act on yet. No order at step t can depend on the price at
/// step t.
pub fn shift_signals(raw: &[Signal]) -> Vec<Signal> {
    let mut shifted = Vec::with_capacity(raw.len());
    if !raw.is_empty() {
        shifted.push(Signal::Flat);
        shifted.extend_from_slice(&raw[..raw.len() - 1]);
    }
    shifted
}

/// Replay a price series through a fresh account under a strategy's signals.
///
/// 1. Precompute the strategy's raw signal series; reject it if it is not
///    aligned one-to-one with the price points.
/// 2. Shift it one step (`shift_signals`).
/// 3. Walk the series in order: enter long one unit when the delayed signal
///    wants exposure and the account is flat; liquidate the entire position
///    when it wants none and the account is long; otherwise no order.
/// 4. After any order, record date, cash, position, and equity at this
///    step's price — one record per input index.
///
/// An empty series yields an empty result. Any account rejection aborts the
/// run via `?`.
pub fn run_simulation(
    series: &PriceSeries,
    strategy: &dyn Strategy,
    config: &EngineConfig,
) -> Result<RunResult, EngineError> {
    let raw = strategy.signals(series);
    if raw.len() != series.len() {
        return Err(EngineError::SignalMisaligned {
            expected: series.len(),
            actual: raw.len(),
        });
    }

    let actions = shift_signals(&raw);
    let mut account = Account::new(config.initial_cash);
    let mut records = Vec::with_capacity(series.len());

    for (action, point) in actions.iter().zip(series.points()) {
        match action {
            Signal::Long if account.is_flat() => {
                account.apply_market_order(MarketOrder::buy(ENTRY_QUANTITY, point.price))?;
            }
            Signal::Flat if !account.is_flat() => {
                let held = account.position();
                account.apply_market_order(MarketOrder::sell(held, point.price))?;
            }
            _ => {}
        }

        records.push(EquityRecord {
            date: point.date,
            cash: account.cash(),
            position: account.position(),
            equity: account.equity(point.price),
        });
    }

    Ok(RunResult { records })
}

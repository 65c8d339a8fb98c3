//! Simulation engine — one-step-delayed signal replay over a price series.
//!
//! Per step:
//! 1. Delayed signal: the strategy's output at t-1 is the action at t
//! 2. Reconcile: at most one market order brings the position in line
//! 3. Record: post-order (cash, position, equity) at this step's price

pub mod loop_runner;
pub mod state;

pub use loop_runner::{run_simulation, shift_signals, EngineError};
pub use state::{EngineConfig, EquityRecord, RunResult};

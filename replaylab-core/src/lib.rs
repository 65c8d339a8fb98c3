//! ReplayLab Core — account state machine, signal strategies, simulation loop.
//!
//! This crate contains the heart of the replay simulator:
//! - Domain types (account, market orders, validated price series)
//! - Signal strategies (desired-exposure series, precomputed)
//! - Step-by-step simulation loop with a one-step execution delay
//! - Data loading (CSV) and deterministic synthetic series
//!
//! The loop is strictly sequential: one instrument, one pass over the
//! series, no shared state. Collaborators are injected (`&dyn Strategy`),
//! never global.

pub mod data;
pub mod domain;
pub mod engine;
pub mod signals;

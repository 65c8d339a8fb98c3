//! Engine configuration and run result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Cash endowment the account starts with.
    pub initial_cash: f64,
}

impl EngineConfig {
    pub fn new(initial_cash: f64) -> Self {
        Self { initial_cash }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(1_000_000.0)
    }
}

/// Account snapshot recorded after each simulation step.
///
/// `equity == cash + position * price` at the step's price — exact by
/// construction, re-checked by the property tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityRecord {
    pub date: NaiveDate,
    pub cash: f64,
    pub position: i64,
    pub equity: f64,
}

/// Output of a simulation run: one record per input index, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunResult {
    pub records: Vec<EquityRecord>,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn final_record(&self) -> Option<&EquityRecord> {
        self.records.last()
    }

    /// Equity at the last step, if any steps ran.
    pub fn final_equity(&self) -> Option<f64> {
        self.records.last().map(|r| r.equity)
    }

    /// Number of orders the run filled.
    ///
    /// Every fill moves the position, so fills are exactly the position
    /// transitions between consecutive records (plus a nonzero opening
    /// position, which the delayed first action makes impossible in
    /// practice).
    pub fn order_count(&self) -> usize {
        let transitions = self
            .records
            .windows(2)
            .filter(|w| w[0].position != w[1].position)
            .count();
        let opening = self.records.first().map_or(0, |r| usize::from(r.position != 0));
        transitions + opening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, cash: f64, position: i64, equity: f64) -> EquityRecord {
        EquityRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            cash,
            position,
            equity,
        }
    }

    #[test]
    fn empty_result_accessors() {
        let result = RunResult::default();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.final_equity().is_none());
        assert!(result.final_record().is_none());
        assert_eq!(result.order_count(), 0);
    }

    #[test]
    fn order_count_counts_position_transitions() {
        let result = RunResult {
            records: vec![
                record(2, 1_000.0, 0, 1_000.0),
                record(3, 899.0, 1, 1_000.0),  // entry
                record(4, 899.0, 1, 1_004.0),  // hold
                record(5, 1_003.0, 0, 1_003.0), // exit
                record(6, 1_003.0, 0, 1_003.0),
            ],
        };
        assert_eq!(result.order_count(), 2);
        assert_eq!(result.final_equity(), Some(1_003.0));
    }

    #[test]
    fn default_config_endowment() {
        assert_eq!(EngineConfig::default().initial_cash, 1_000_000.0);
        assert_eq!(EngineConfig::new(500.0).initial_cash, 500.0);
    }
}

//! Fairness metrics.
//!
//! Summarises how evenly evaluations are spread over the roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Min / Max | Lowest and highest tally |
//! | Spread | max − min (0 or 1 means perfectly even) |
//! | Mean | Average tally |
//! | Unevaluated | Teams never handed to a judge |
//! | Total | Sum of all tallies |

use super::FairnessCounter;

/// Evaluation spread indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessKpi {
    /// Lowest tally.
    pub min_evaluations: u32,
    /// Highest tally.
    pub max_evaluations: u32,
    /// Mean tally.
    pub mean_evaluations: f64,
    /// Number of teams with a zero tally.
    pub unevaluated_teams: usize,
    /// Sum of all tallies.
    pub total_evaluations: u64,
}

impl FairnessKpi {
    /// Computes indicators from the current tally.
    pub fn calculate(counter: &FairnessCounter) -> Self {
        let counts = counter.counts();
        let min_evaluations = counts.iter().min().copied().unwrap_or(0);
        let max_evaluations = counts.iter().max().copied().unwrap_or(0);
        let total_evaluations: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        let unevaluated_teams = counts.iter().filter(|&&c| c == 0).count();

        let mean_evaluations = if counts.is_empty() {
            0.0
        } else {
            total_evaluations as f64 / counts.len() as f64
        };

        Self {
            min_evaluations,
            max_evaluations,
            mean_evaluations,
            unevaluated_teams,
            total_evaluations,
        }
    }

    /// max − min.
    pub fn spread(&self) -> u32 {
        self.max_evaluations - self.min_evaluations
    }

    /// Whether no team is more than `tolerance` evaluations ahead of another.
    pub fn is_balanced(&self, tolerance: u32) -> bool {
        self.spread() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{roster, TeamId};

    #[test]
    fn test_kpi_fresh_counter() {
        let kpi = FairnessKpi::calculate(&FairnessCounter::new(roster(1, 4)));
        assert_eq!(kpi.spread(), 0);
        assert_eq!(kpi.unevaluated_teams, 4);
        assert_eq!(kpi.total_evaluations, 0);
        assert!(kpi.is_balanced(0));
    }

    #[test]
    fn test_kpi_values() {
        let mut counter = FairnessCounter::new(roster(1, 4));
        counter.record(TeamId(1));
        counter.record(TeamId(1));
        counter.record(TeamId(1));
        counter.record(TeamId(2));

        let kpi = FairnessKpi::calculate(&counter);
        assert_eq!(kpi.min_evaluations, 0);
        assert_eq!(kpi.max_evaluations, 3);
        assert_eq!(kpi.spread(), 3);
        assert_eq!(kpi.unevaluated_teams, 2);
        assert_eq!(kpi.total_evaluations, 4);
        assert!((kpi.mean_evaluations - 1.0).abs() < 1e-10);
        assert!(!kpi.is_balanced(1));
    }

    #[test]
    fn test_kpi_empty_counter() {
        let kpi = FairnessKpi::calculate(&FairnessCounter::default());
        assert_eq!(kpi.mean_evaluations, 0.0);
        assert_eq!(kpi.spread(), 0);
    }
}

//! Score model.
//!
//! A score entry is one judge's mark for one team. Marks are bounded by an
//! event-wide inclusive range (e.g. 0–3 or 0–10 depending on deployment).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{JudgeId, TeamId};

/// Inclusive range of accepted scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    /// Lowest accepted score.
    pub min: f64,
    /// Highest accepted score.
    pub max: f64,
}

impl ScoreRange {
    /// Creates a range `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `score` is a finite value within the bounds.
    pub fn contains(&self, score: f64) -> bool {
        score.is_finite() && score >= self.min && score <= self.max
    }

    /// Whether the range itself is usable (finite bounds, `min <= max`).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

/// A (judge, team, score) triple recorded by a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Judge who gave the score.
    pub judge: JudgeId,
    /// Scored team.
    pub team: TeamId,
    /// The mark.
    pub score: f64,
}

impl ScoreEntry {
    /// Creates a score entry.
    pub fn new(judge: JudgeId, team: TeamId, score: f64) -> Self {
        Self { judge, team, score }
    }
}

/// Marks a judge hands in for their batch, keyed by team.
pub type ScoreSheet = BTreeMap<TeamId, f64>;

/// A stored score row as returned by the persistence collaborator.
pub type ScoreRecord = ScoreEntry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        let range = ScoreRange::new(0.0, 3.0);
        assert!(range.contains(0.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(-1.0));
        assert!(!range.contains(4.0));
    }

    #[test]
    fn test_range_rejects_non_finite() {
        let range = ScoreRange::default();
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
    }

    #[test]
    fn test_range_validity() {
        assert!(ScoreRange::default().is_valid());
        assert!(ScoreRange::new(2.0, 2.0).is_valid());
        assert!(!ScoreRange::new(5.0, 1.0).is_valid());
        assert!(!ScoreRange::new(0.0, f64::NAN).is_valid());
    }
}

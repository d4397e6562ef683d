//! Score aggregation.
//!
//! Turns stored score rows into a per-team table: each judge's mark,
//! the number of judges who scored the team, and the average mark.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{JudgeId, ScoreRecord, TeamId};

/// Aggregated scores for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Team identifier.
    pub team: TeamId,
    /// Mark per judge.
    pub scores: BTreeMap<JudgeId, f64>,
}

impl TeamStanding {
    /// Number of judges who scored the team.
    pub fn judge_count(&self) -> usize {
        self.scores.len()
    }

    /// Mean mark, or `None` if nobody scored the team.
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.values().sum::<f64>() / self.scores.len() as f64)
    }
}

/// Per-team score table, ordered by team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    /// One row per scored team.
    pub teams: Vec<TeamStanding>,
}

impl Standings {
    /// Builds the table from stored rows.
    ///
    /// A later row for the same (judge, team) replaces an earlier one.
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        let mut by_team: BTreeMap<TeamId, BTreeMap<JudgeId, f64>> = BTreeMap::new();
        for record in records {
            by_team
                .entry(record.team)
                .or_default()
                .insert(record.judge.clone(), record.score);
        }
        Self {
            teams: by_team
                .into_iter()
                .map(|(team, scores)| TeamStanding { team, scores })
                .collect(),
        }
    }

    /// Row for `team`.
    pub fn team(&self, team: TeamId) -> Option<&TeamStanding> {
        self.teams.iter().find(|s| s.team == team)
    }

    /// Teams ordered by average, best first. Ties keep team order.
    pub fn ranked(&self) -> Vec<&TeamStanding> {
        let mut ranked: Vec<&TeamStanding> = self.teams.iter().collect();
        ranked.sort_by(|a, b| {
            let a = a.average().unwrap_or(f64::NEG_INFINITY);
            let b = b.average().unwrap_or(f64::NEG_INFINITY);
            b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

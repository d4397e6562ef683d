//! Judge model.
//!
//! A judge holds exactly one batch of teams at a time and an append-only
//! history of the score sets they have submitted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ScoreEntry, TeamId};

/// Judge identifier.
///
/// Numbered judges use their number as id (`"1"`, `"2"`, ...); judges who
/// join by name use the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgeId(String);

impl JudgeId {
    /// Creates an id from a name. Surrounding whitespace is dropped.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Id of the `n`-th numbered judge.
    pub fn numbered(n: usize) -> Self {
        Self(n.to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for JudgeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<usize> for JudgeId {
    fn from(n: usize) -> Self {
        Self::numbered(n)
    }
}

impl fmt::Display for JudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One accepted score set for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Entries in batch order.
    pub entries: Vec<ScoreEntry>,
}

impl Submission {
    /// Score given to `team` in this submission.
    pub fn score_for(&self, team: TeamId) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.team == team)
            .map(|e| e.score)
    }

    /// Number of scored teams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the submission scored nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A judge and their session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judge {
    /// Judge identifier.
    pub id: JudgeId,
    /// Teams currently assigned, in selection order. May repeat a team
    /// when the roster is smaller than the batch size.
    pub batch: Vec<TeamId>,
    /// Accepted submissions, oldest first.
    pub history: Vec<Submission>,
}

impl Judge {
    /// Creates a judge holding `batch`.
    pub fn new(id: JudgeId, batch: Vec<TeamId>) -> Self {
        Self {
            id,
            batch,
            history: Vec::new(),
        }
    }

    /// Distinct teams of the current batch, first occurrence order.
    pub fn batch_teams(&self) -> Vec<TeamId> {
        let mut seen = Vec::with_capacity(self.batch.len());
        for &team in &self.batch {
            if !seen.contains(&team) {
                seen.push(team);
            }
        }
        seen
    }

    /// Number of accepted submissions (completed rounds).
    pub fn rounds_completed(&self) -> usize {
        self.history.len()
    }
}

//! Score persistence collaborator.
//!
//! The judging core does not own a storage format. It talks to a
//! `ScoreStore`, which keeps one score per (judge, team) pair: writing a
//! pair that already exists replaces its score.
//!
//! `MemoryScoreStore` satisfies the contract without external
//! dependencies and backs the tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::models::{JudgeId, ScoreRecord, TeamId};

/// Errors raised by a score store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Score store unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected the operation.
    #[error("Score store operation failed: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No score existed for the pair.
    Inserted,
    /// An existing score was replaced.
    Updated,
}

/// Persistence for scores and judge registrations.
///
/// Guarantees:
/// - `upsert_score` keeps exactly one row per (judge, team); last write wins.
/// - `list_judges` includes every registered judge and every judge with a score.
/// - Retries, if any, are the implementation's own policy.
pub trait ScoreStore: Send + Sync {
    /// All stored scores.
    fn get_scores(&self) -> StoreResult<Vec<ScoreRecord>>;

    /// Inserts or replaces the score for (judge, team).
    fn upsert_score(&self, judge: &JudgeId, team: TeamId, score: f64) -> StoreResult<Upsert>;

    /// Known judges, sorted by id.
    fn list_judges(&self) -> StoreResult<Vec<JudgeId>>;

    /// Registers a judge. Registering twice is a no-op.
    fn add_judge(&self, judge: &JudgeId) -> StoreResult<()>;

    /// Removes every score and judge registration.
    fn clear_all(&self) -> StoreResult<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    scores: BTreeMap<(JudgeId, TeamId), f64>,
    judges: BTreeSet<JudgeId>,
}

/// In-memory store backed by a `BTreeMap<(judge, team), score>`.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    state: Mutex<MemoryState>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored score rows.
    pub fn len(&self) -> usize {
        self.lock().scores.len()
    }

    /// Whether no scores are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get_scores(&self) -> StoreResult<Vec<ScoreRecord>> {
        let state = self.lock();
        Ok(state
            .scores
            .iter()
            .map(|((judge, team), &score)| ScoreRecord::new(judge.clone(), *team, score))
            .collect())
    }

    fn upsert_score(&self, judge: &JudgeId, team: TeamId, score: f64) -> StoreResult<Upsert> {
        let mut state = self.lock();
        match state.scores.insert((judge.clone(), team), score) {
            Some(_) => Ok(Upsert::Updated),
            None => Ok(Upsert::Inserted),
        }
    }

    fn list_judges(&self) -> StoreResult<Vec<JudgeId>> {
        let state = self.lock();
        let mut judges = state.judges.clone();
        judges.extend(state.scores.keys().map(|(judge, _)| judge.clone()));
        Ok(judges.into_iter().collect())
    }

    fn add_judge(&self, judge: &JudgeId) -> StoreResult<()> {
        self.lock().judges.insert(judge.clone());
        Ok(())
    }

    fn clear_all(&self) -> StoreResult<()> {
        let mut state = self.lock();
        state.scores.clear();
        state.judges.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_last_write_wins() {
        let store = MemoryScoreStore::new();
        let judge = JudgeId::new("Alice");

        assert_eq!(store.upsert_score(&judge, TeamId(1), 2.0), Ok(Upsert::Inserted));
        assert_eq!(store.upsert_score(&judge, TeamId(1), 3.0), Ok(Upsert::Updated));

        let scores = store.get_scores().unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].score, 3.0);
    }

    #[test]
    fn test_pairs_are_independent() {
        let store = MemoryScoreStore::new();
        let alice = JudgeId::new("Alice");
        let bob = JudgeId::new("Bob");

        store.upsert_score(&alice, TeamId(1), 1.0).unwrap();
        store.upsert_score(&bob, TeamId(1), 2.0).unwrap();
        store.upsert_score(&alice, TeamId(2), 3.0).unwrap();

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_judges_merges_registrations_and_scores() {
        let store = MemoryScoreStore::new();
        store.add_judge(&JudgeId::new("Zed")).unwrap();
        store.add_judge(&JudgeId::new("Zed")).unwrap();
        store
            .upsert_score(&JudgeId::new("Amy"), TeamId(1), 1.0)
            .unwrap();

        let judges = store.list_judges().unwrap();
        assert_eq!(judges, vec![JudgeId::new("Amy"), JudgeId::new("Zed")]);
    }

    #[test]
    fn test_clear_all() {
        let store = MemoryScoreStore::new();
        store.add_judge(&JudgeId::new("Amy")).unwrap();
        store
            .upsert_score(&JudgeId::new("Amy"), TeamId(1), 1.0)
            .unwrap();

        store.clear_all().unwrap();
        assert!(store.is_empty());
        assert!(store.list_judges().unwrap().is_empty());
    }
}

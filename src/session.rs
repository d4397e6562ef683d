//! Per-judge session state.
//!
//! Each judge cycles through batch assignment → submission → new batch.
//! The tracker owns the judge table; it never picks teams itself but asks
//! the scheduler it is handed, so the table and the tally move together.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{JudgingError, Result};
use crate::models::{Judge, JudgeId, ScoreEntry, ScoreRange, ScoreSheet, Submission, TeamId};
use crate::scheduler::AssignmentScheduler;
use crate::validation::validate_submission;

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    /// Scores accepted, in batch order.
    pub entries: Vec<ScoreEntry>,
    /// The judge's new batch.
    pub next_batch: Vec<TeamId>,
}

/// Judge table with current batches and submission histories.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    judges: Vec<Judge>,
    index: HashMap<JudgeId, usize>,
}

impl SessionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster with `ids`, giving each judge a fresh batch.
    ///
    /// Batches are drawn in the order of `ids`. Repeated ids are seated once.
    pub fn reset(
        &mut self,
        ids: impl IntoIterator<Item = JudgeId>,
        scheduler: &mut AssignmentScheduler,
    ) {
        self.judges.clear();
        self.index.clear();
        for id in ids {
            if !self.index.contains_key(&id) {
                self.push(id, scheduler);
            }
        }
    }

    /// Adds a judge with a fresh batch.
    ///
    /// # Errors
    /// `DuplicateJudge` if the id is already seated.
    pub fn seat(&mut self, id: JudgeId, scheduler: &mut AssignmentScheduler) -> Result<&Judge> {
        if self.index.contains_key(&id) {
            return Err(JudgingError::DuplicateJudge(id));
        }
        Ok(self.push(id, scheduler))
    }

    /// Validates and records `scores`, then hands the judge a new batch.
    ///
    /// All-or-nothing: on any error neither the judge nor the tally changes.
    pub fn submit(
        &mut self,
        judge: &JudgeId,
        scores: &ScoreSheet,
        range: &ScoreRange,
        scheduler: &mut AssignmentScheduler,
    ) -> Result<SubmitReceipt> {
        let pos = self.position(judge)?;

        if let Err(errors) = validate_submission(&self.judges[pos].batch, scores, range) {
            warn!(judge = %judge, issues = errors.len(), "submission rejected");
            return Err(JudgingError::Validation(errors));
        }

        let entries: Vec<ScoreEntry> = self.judges[pos]
            .batch_teams()
            .into_iter()
            .filter_map(|team| {
                scores
                    .get(&team)
                    .map(|&score| ScoreEntry::new(judge.clone(), team, score))
            })
            .collect();

        let next_batch = scheduler.next_batch(judge);
        let record = &mut self.judges[pos];
        record.history.push(Submission {
            entries: entries.clone(),
        });
        record.batch = next_batch.clone();

        Ok(SubmitReceipt {
            entries,
            next_batch,
        })
    }

    /// The judge's current batch.
    pub fn current_batch(&self, judge: &JudgeId) -> Result<&[TeamId]> {
        Ok(&self.get(judge)?.batch)
    }

    /// The judge's accepted submissions, oldest first.
    pub fn history(&self, judge: &JudgeId) -> Result<&[Submission]> {
        Ok(&self.get(judge)?.history)
    }

    /// Looks up a judge.
    pub fn get(&self, judge: &JudgeId) -> Result<&Judge> {
        self.position(judge).map(|pos| &self.judges[pos])
    }

    /// Whether `judge` is seated.
    pub fn contains(&self, judge: &JudgeId) -> bool {
        self.index.contains_key(judge)
    }

    /// Seated judges in seating order.
    pub fn judges(&self) -> &[Judge] {
        &self.judges
    }

    /// Number of seated judges.
    pub fn len(&self) -> usize {
        self.judges.len()
    }

    /// Whether no judge is seated.
    pub fn is_empty(&self) -> bool {
        self.judges.is_empty()
    }

    fn position(&self, judge: &JudgeId) -> Result<usize> {
        self.index.get(judge).copied().ok_or_else(|| {
            warn!(judge = %judge, "unknown judge");
            JudgingError::UnknownJudge(judge.clone())
        })
    }

    fn push(&mut self, id: JudgeId, scheduler: &mut AssignmentScheduler) -> &Judge {
        let batch = scheduler.next_batch(&id);
        let pos = self.judges.len();
        self.index.insert(id.clone(), pos);
        self.judges.push(Judge::new(id, batch));
        &self.judges[pos]
    }
}

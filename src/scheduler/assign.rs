//! Least-evaluated batch scheduler.
//!
//! # Algorithm
//!
//! 1. Order the roster by evaluation tally (ties by roster order).
//! 2. Take the first `batch_size` teams, cycling if the roster is smaller.
//! 3. Record one evaluation for every team taken.
//!
//! Steps 2 and 3 are one operation (`select_and_reserve`) taking `&mut self`,
//! so no caller can observe a batch whose teams have not been counted yet.
//! Teams are counted when handed out, not when scored.
//!
//! # Complexity
//! O(n log n) per batch, n = roster size.

use tracing::debug;

use super::FairnessCounter;
use crate::models::{JudgeId, TeamId};

/// Greedy fairness scheduler over a team roster.
///
/// # Example
///
/// ```
/// use u_judging::models::{roster, JudgeId, TeamId};
/// use u_judging::scheduler::AssignmentScheduler;
///
/// let mut scheduler = AssignmentScheduler::new(roster(1, 4), 2);
/// let first = scheduler.next_batch(&JudgeId::numbered(1));
/// let second = scheduler.next_batch(&JudgeId::numbered(2));
/// assert_eq!(first, vec![TeamId(1), TeamId(2)]);
/// assert_eq!(second, vec![TeamId(3), TeamId(4)]);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentScheduler {
    counter: FairnessCounter,
    batch_size: usize,
}

impl AssignmentScheduler {
    /// Creates a scheduler with a fresh counter over `roster`.
    pub fn new(roster: impl IntoIterator<Item = TeamId>, batch_size: usize) -> Self {
        Self::with_counter(FairnessCounter::new(roster), batch_size)
    }

    /// Creates a scheduler that continues from an existing tally.
    pub fn with_counter(counter: FairnessCounter, batch_size: usize) -> Self {
        Self {
            counter,
            batch_size,
        }
    }

    /// Picks the least-evaluated batch and counts it as evaluated.
    pub fn select_and_reserve(&mut self) -> Vec<TeamId> {
        let batch = self.counter.least_evaluated(self.batch_size);
        for &team in &batch {
            self.counter.record(team);
        }
        batch
    }

    /// Next batch for `judge`.
    ///
    /// The judge id only labels the log line; selection is global.
    pub fn next_batch(&mut self, judge: &JudgeId) -> Vec<TeamId> {
        let batch = self.select_and_reserve();
        debug!(judge = %judge, teams = ?batch, "reserved batch");
        batch
    }

    /// The evaluation tally.
    pub fn counter(&self) -> &FairnessCounter {
        &self.counter
    }

    /// Teams per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Consumes the scheduler, keeping the tally.
    pub fn into_counter(self) -> FairnessCounter {
        self.counter
    }
}

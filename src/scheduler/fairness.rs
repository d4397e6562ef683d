//! Per-team evaluation tally.
//!
//! The counter is the single source of truth for how often each team has
//! been handed to a judge. Selection is greedy over the whole roster: the
//! least-evaluated teams come first regardless of room or group.
//!
//! # Tie-breaking
//! Teams with equal counts are ordered by their position in the roster as
//! loaded, so identical counts always yield the same selection.

use std::collections::HashMap;

use crate::models::{Team, TeamId};

/// Evaluation tally for every team of the roster.
#[derive(Debug, Clone, Default)]
pub struct FairnessCounter {
    /// Teams in roster order (tie-break key).
    teams: Vec<TeamId>,
    /// Tally parallel to `teams`.
    counts: Vec<u32>,
    /// team → position in `teams`.
    positions: HashMap<TeamId, usize>,
}

impl FairnessCounter {
    /// Creates a counter with every team at zero.
    ///
    /// Duplicate ids keep their first position.
    pub fn new(roster: impl IntoIterator<Item = TeamId>) -> Self {
        let mut counter = Self::default();
        for team in roster {
            counter.position_or_insert(team);
        }
        counter
    }

    /// Current tally for `team` (0 for teams never seen).
    pub fn count(&self, team: TeamId) -> u32 {
        self.positions
            .get(&team)
            .map(|&pos| self.counts[pos])
            .unwrap_or(0)
    }

    /// Adds one evaluation to `team` and returns its new tally.
    ///
    /// Not idempotent: every call counts. A team outside the roster is
    /// appended to it.
    pub fn record(&mut self, team: TeamId) -> u32 {
        let pos = self.position_or_insert(team);
        self.counts[pos] = self.counts[pos].saturating_add(1);
        self.counts[pos]
    }

    /// The `k` least-evaluated teams, lowest tally first.
    ///
    /// Ties follow roster order. When `k` exceeds the roster size the
    /// ordering repeats from the start, so teams may appear more than once.
    /// Returns an empty vector only for an empty roster or `k == 0`.
    pub fn least_evaluated(&self, k: usize) -> Vec<TeamId> {
        let mut order: Vec<usize> = (0..self.teams.len()).collect();
        // stable sort keeps roster order within equal counts
        order.sort_by_key(|&pos| self.counts[pos]);
        order
            .iter()
            .cycle()
            .take(k)
            .map(|&pos| self.teams[pos])
            .collect()
    }

    /// Snapshot of every team with its tally, in roster order.
    pub fn teams(&self) -> Vec<Team> {
        self.teams
            .iter()
            .zip(&self.counts)
            .map(|(&id, &evaluations)| Team::new(id).with_evaluations(evaluations))
            .collect()
    }

    /// Tallies in roster order.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of teams tracked.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn position_or_insert(&mut self, team: TeamId) -> usize {
        if let Some(&pos) = self.positions.get(&team) {
            return pos;
        }
        let pos = self.teams.len();
        self.teams.push(team);
        self.counts.push(0);
        self.positions.insert(team, pos);
        pos
    }
}

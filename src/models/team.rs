//! Team model.
//!
//! A team is a competition entry that judges evaluate. Teams are created
//! once when the roster is loaded and are never removed while an event runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team identifier (the team's number on the event floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    /// The team number.
    #[inline]
    pub fn number(self) -> u32 {
        self.0
    }
}

impl From<u32> for TeamId {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// A team together with its current evaluation tally.
///
/// This is a snapshot; the live tally is owned by the fairness counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier.
    pub id: TeamId,
    /// Number of times the team has been handed to a judge.
    pub evaluations: u32,
}

impl Team {
    /// Creates a team that has not been evaluated yet.
    pub fn new(id: impl Into<TeamId>) -> Self {
        Self {
            id: id.into(),
            evaluations: 0,
        }
    }

    /// Sets the evaluation tally.
    pub fn with_evaluations(mut self, evaluations: u32) -> Self {
        self.evaluations = evaluations;
        self
    }
}

/// Builds the consecutive roster `first .. first + count`.
///
/// Stops early at `u32::MAX`, so the result may be shorter than `count`.
pub fn roster(first: u32, count: usize) -> Vec<TeamId> {
    (0..count)
        .map_while(|i| u32::try_from(i).ok().and_then(|i| first.checked_add(i)))
        .map(TeamId)
        .collect()
}

//! Event configuration.
//!
//! Describes the size of a judged event. Built in code with the `with_*`
//! builder or parsed from JSON; missing fields fall back to the defaults
//! of a 100-team, 30-judge, 10-room event.

use serde::{Deserialize, Serialize};

use crate::error::{JudgingError, Result};
use crate::models::{roster, ScoreRange, TeamId};
use crate::validation::validate_config;

/// Configuration of a judged event.
///
/// `group_size` is both the number of teams seated together and the
/// number of teams handed to a judge per batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Number of competing teams.
    pub num_teams: usize,
    /// Number of numbered judges created at initialization.
    pub num_judges: usize,
    /// Number of physical rooms.
    pub num_rooms: usize,
    /// Teams per group and per judge batch.
    pub group_size: usize,
    /// Accepted score range (inclusive).
    pub score_range: ScoreRange,
    /// Number of the first team; teams are numbered consecutively from it.
    pub first_team: u32,
    /// Seed for the roster shuffle. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            num_teams: 100,
            num_judges: 30,
            num_rooms: 10,
            group_size: 5,
            score_range: ScoreRange::default(),
            first_team: 1,
            seed: None,
        }
    }
}

impl EventConfig {
    /// Creates a configuration with the given counts and default scoring.
    pub fn new(num_teams: usize, num_judges: usize, num_rooms: usize, group_size: usize) -> Self {
        Self {
            num_teams,
            num_judges,
            num_rooms,
            group_size,
            ..Default::default()
        }
    }

    /// Parses a JSON configuration. Absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Sets the accepted score range.
    pub fn with_score_range(mut self, min: f64, max: f64) -> Self {
        self.score_range = ScoreRange::new(min, max);
        self
    }

    /// Sets the number of the first team.
    pub fn with_first_team(mut self, first_team: u32) -> Self {
        self.first_team = first_team;
        self
    }

    /// Fixes the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of judges.
    pub fn with_judges(mut self, num_judges: usize) -> Self {
        self.num_judges = num_judges;
        self
    }

    /// Checks every field, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(JudgingError::Configuration)
    }

    /// Batch size handed to each judge.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.group_size
    }

    /// The team roster in load order.
    pub fn roster(&self) -> Vec<TeamId> {
        roster(self.first_team, self.num_teams)
    }
}

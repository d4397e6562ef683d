//! Judging event facade.
//!
//! `JudgingEvent` is what the HTTP/CRUD layer talks to. It owns the room
//! layout, the fairness tally, and the judge table behind one mutex, and
//! forwards accepted scores to a `ScoreStore`.
//!
//! # Locking
//!
//! Every batch hand-out (tally read + increment) and every judge-table
//! change happens under the same lock, so concurrent judges never race on
//! the tally. Store calls happen outside the lock. Scores are upserted after
//! the transition commits; judge registration happens before seating.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info};

use crate::config::EventConfig;
use crate::error::{JudgingError, Result};
use crate::models::{JudgeId, RoomLayout, ScoreEntry, ScoreSheet, Submission, Team, TeamId};
use crate::partition::build_layout;
use crate::scheduler::{AssignmentScheduler, FairnessKpi};
use crate::session::SessionTracker;
use crate::standings::Standings;
use crate::store::{MemoryScoreStore, ScoreStore, StoreError};
use crate::validation::{validate_judge_id, ValidationError, ValidationErrorKind};

#[derive(Debug)]
struct EventState {
    config: EventConfig,
    layout: RoomLayout,
    scheduler: AssignmentScheduler,
    sessions: SessionTracker,
}

impl EventState {
    fn build(config: EventConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let roster = config.roster();
        let layout = build_layout(&roster, config.group_size, config.num_rooms, seed)?;
        let mut scheduler = AssignmentScheduler::new(roster, config.batch_size());
        let mut sessions = SessionTracker::new();
        sessions.reset(numbered_judges(config.num_judges), &mut scheduler);

        info!(
            teams = config.num_teams,
            judges = config.num_judges,
            rooms = config.num_rooms,
            group_size = config.group_size,
            seed,
            "event initialized"
        );

        Ok(Self {
            config,
            layout,
            scheduler,
            sessions,
        })
    }
}

fn numbered_judges(count: usize) -> impl Iterator<Item = JudgeId> {
    (1..=count).map(JudgeId::numbered)
}

/// A running judged event.
///
/// `Send + Sync`; share it across request handlers with `Arc`.
///
/// # Example
///
/// ```
/// use u_judging::config::EventConfig;
/// use u_judging::event::JudgingEvent;
/// use u_judging::models::{JudgeId, ScoreSheet};
///
/// let event = JudgingEvent::with_memory_store(EventConfig::new(10, 1, 2, 5)).unwrap();
/// let judge = JudgeId::numbered(1);
///
/// let batch = event.current_batch(&judge).unwrap();
/// let scores: ScoreSheet = batch.iter().map(|&team| (team, 7.0)).collect();
/// let next = event.submit(&judge, &scores).unwrap();
/// assert_eq!(next.len(), 5);
/// assert!(next.iter().all(|team| !batch.contains(team)));
/// ```
pub struct JudgingEvent {
    state: Mutex<EventState>,
    store: Arc<dyn ScoreStore>,
}

impl JudgingEvent {
    /// Initializes an event backed by `store`.
    pub fn new(config: EventConfig, store: Arc<dyn ScoreStore>) -> Result<Self> {
        Ok(Self {
            state: Mutex::new(EventState::build(config)?),
            store,
        })
    }

    /// Initializes an event backed by a fresh in-memory store.
    pub fn with_memory_store(config: EventConfig) -> Result<Self> {
        Self::new(config, Arc::new(MemoryScoreStore::new()))
    }

    /// Rebuilds roster, layout, tally, and judge batches from `config`.
    ///
    /// All prior in-memory state is replaced; stored scores are kept.
    /// On error the previous state stays in place.
    pub fn initialize(&self, config: EventConfig) -> Result<()> {
        let fresh = EventState::build(config)?;
        *self.lock() = fresh;
        Ok(())
    }

    /// The room layout.
    pub fn room_layout(&self) -> RoomLayout {
        self.lock().layout.clone()
    }

    /// The judge's current batch.
    pub fn current_batch(&self, judge: &JudgeId) -> Result<Vec<TeamId>> {
        Ok(self.lock().sessions.current_batch(judge)?.to_vec())
    }

    /// Records scores for the judge's current batch and returns the next one.
    ///
    /// Validation failures change nothing. Once accepted, every score is
    /// sent to the store; if any upsert fails the judge has still moved on
    /// and `Unpersisted` carries the next batch and the number of lost
    /// writes.
    pub fn submit(&self, judge: &JudgeId, scores: &ScoreSheet) -> Result<Vec<TeamId>> {
        let receipt = {
            let mut state = self.lock();
            let EventState {
                config,
                scheduler,
                sessions,
                ..
            } = &mut *state;
            sessions.submit(judge, scores, &config.score_range, scheduler)?
        };
        debug!(judge = %judge, scored = receipt.entries.len(), "submission accepted");

        match self.persist(&receipt.entries) {
            Ok(_) => Ok(receipt.next_batch),
            Err((failed, source)) => Err(JudgingError::Unpersisted {
                judge: judge.clone(),
                failed,
                next_batch: receipt.next_batch,
                source,
            }),
        }
    }

    /// Re-sends every score in the judge's history to the store, oldest
    /// first, and returns how many were written.
    ///
    /// On failure `Unpersisted` carries the judge's current batch.
    ///
    /// Upserts are last-write-wins, so replaying rows the store already
    /// holds is harmless and the latest mark for each team ends up stored.
    pub fn persist_history(&self, judge: &JudgeId) -> Result<usize> {
        let (entries, batch) = {
            let state = self.lock();
            let entries: Vec<ScoreEntry> = state
                .sessions
                .history(judge)?
                .iter()
                .flat_map(|submission| submission.entries.iter().cloned())
                .collect();
            (entries, state.sessions.current_batch(judge)?.to_vec())
        };

        let written = self
            .persist(&entries)
            .map_err(|(failed, source)| JudgingError::Unpersisted {
                judge: judge.clone(),
                failed,
                next_batch: batch,
                source,
            })?;
        info!(judge = %judge, written, "history persisted");
        Ok(written)
    }

    /// Upserts every entry, continuing past failures. On failure returns the
    /// failure count and the first error.
    fn persist(&self, entries: &[ScoreEntry]) -> std::result::Result<usize, (usize, StoreError)> {
        let mut failed = 0;
        let mut first = None;
        for entry in entries {
            if let Err(err) = self
                .store
                .upsert_score(&entry.judge, entry.team, entry.score)
            {
                error!(judge = %entry.judge, team = %entry.team, error = %err, "failed to persist score");
                failed += 1;
                first.get_or_insert(err);
            }
        }
        match first {
            Some(err) => Err((failed, err)),
            None => Ok(entries.len()),
        }
    }

    /// Replaces the judge roster with judges `1..=count`, each with a fresh
    /// batch. Team tallies are kept.
    pub fn reconfigure_judges(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(JudgingError::Configuration(vec![ValidationError::new(
                ValidationErrorKind::InvalidCount,
                "num_judges must be at least 1",
            )]));
        }

        let mut state = self.lock();
        let EventState {
            config,
            scheduler,
            sessions,
            ..
        } = &mut *state;
        sessions.reset(numbered_judges(count), scheduler);
        config.num_judges = count;
        info!(judges = count, "judge roster reconfigured");
        Ok(())
    }

    /// Seats a judge joining by name and returns their first batch.
    ///
    /// The judge is registered with the store before being seated, so a
    /// store failure leaves the roster and tally unchanged.
    pub fn add_judge(&self, name: &str) -> Result<Vec<TeamId>> {
        let id = JudgeId::new(name);
        validate_judge_id(&id).map_err(JudgingError::Validation)?;
        if self.lock().sessions.contains(&id) {
            return Err(JudgingError::DuplicateJudge(id));
        }

        self.store.add_judge(&id).map_err(|err| {
            error!(judge = %id, error = %err, "failed to register judge");
            JudgingError::from(err)
        })?;

        // registration is idempotent, so losing a seating race is harmless
        let batch = {
            let mut state = self.lock();
            let EventState {
                scheduler,
                sessions,
                ..
            } = &mut *state;
            sessions.seat(id.clone(), scheduler)?.batch.clone()
        };
        info!(judge = %id, "judge added");
        Ok(batch)
    }

    /// The judge's accepted submissions, oldest first.
    pub fn history(&self, judge: &JudgeId) -> Result<Vec<Submission>> {
        Ok(self.lock().sessions.history(judge)?.to_vec())
    }

    /// Seated judges in seating order.
    pub fn judges(&self) -> Vec<JudgeId> {
        self.lock()
            .sessions
            .judges()
            .iter()
            .map(|j| j.id.clone())
            .collect()
    }

    /// Every team with its evaluation tally, in roster order.
    pub fn teams(&self) -> Vec<Team> {
        self.lock().scheduler.counter().teams()
    }

    /// Spread of evaluation tallies.
    pub fn fairness_kpi(&self) -> FairnessKpi {
        FairnessKpi::calculate(self.lock().scheduler.counter())
    }

    /// Current configuration (judge count reflects reconfiguration).
    pub fn config(&self) -> EventConfig {
        self.lock().config.clone()
    }

    /// Per-team score table from the store.
    pub fn standings(&self) -> Result<Standings> {
        let records = self.store.get_scores()?;
        Ok(Standings::from_records(&records))
    }

    /// Judges known to the store.
    pub fn stored_judges(&self) -> Result<Vec<JudgeId>> {
        Ok(self.store.list_judges()?)
    }

    /// Removes every stored score and judge registration.
    ///
    /// In-memory tallies and batches are untouched; use `initialize` to
    /// reset those.
    pub fn clear_scores(&self) -> Result<()> {
        self.store.clear_all()?;
        info!("stored scores cleared");
        Ok(())
    }

    // Every mutation validates before touching state, so a poisoned guard
    // never holds a half-applied transition.
    fn lock(&self) -> MutexGuard<'_, EventState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for JudgingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("JudgingEvent")
            .field("config", &state.config)
            .field("judges", &state.sessions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster;

    fn sheet(batch: &[TeamId], score: f64) -> ScoreSheet {
        batch.iter().map(|&t| (t, score)).collect()
    }

    fn event(teams: usize, judges: usize) -> JudgingEvent {
        JudgingEvent::with_memory_store(EventConfig::new(teams, judges, 2, 5).with_seed(1)).unwrap()
    }

    #[test]
    fn test_initial_batches_follow_roster() {
        let event = event(10, 1);
        let batch = event.current_batch(&JudgeId::numbered(1)).unwrap();
        assert_eq!(batch, roster(1, 5));
    }

    #[test]
    fn test_submit_advances_batch() {
        let event = event(10, 1);
        let judge = JudgeId::numbered(1);
        let batch = event.current_batch(&judge).unwrap();

        let next = event.submit(&judge, &sheet(&batch, 3.0)).unwrap();

        assert_eq!(next, roster(6, 5));
        let teams = event.teams();
        assert!(teams[..5].iter().all(|t| t.evaluations == 1));
        assert!(teams[5..].iter().all(|t| t.evaluations == 1));
        assert_eq!(event.history(&judge).unwrap().len(), 1);
        assert_eq!(event.standings().unwrap().teams.len(), 5);
    }

    #[test]
    fn test_reconfigure_keeps_tallies() {
        let event = event(20, 5);
        let before = event.teams();
        assert_eq!(
            before.iter().map(|t| u64::from(t.evaluations)).sum::<u64>(),
            25
        );

        event.reconfigure_judges(3).unwrap();

        assert_eq!(event.judges().len(), 3);
        assert_eq!(event.config().num_judges, 3);
        let after = event.teams();
        for (b, a) in before.iter().zip(&after) {
            assert!(a.evaluations >= b.evaluations);
        }
        assert_eq!(
            after.iter().map(|t| u64::from(t.evaluations)).sum::<u64>(),
            40
        );
        assert!(matches!(
            event.current_batch(&JudgeId::numbered(4)),
            Err(JudgingError::UnknownJudge(_))
        ));
    }

    #[test]
    fn test_reconfigure_zero_rejected() {
        let event = event(10, 2);
        assert!(matches!(
            event.reconfigure_judges(0),
            Err(JudgingError::Configuration(_))
        ));
        assert_eq!(event.judges().len(), 2);
    }

    #[test]
    fn test_add_judge() {
        let event = event(10, 1);
        let batch = event.add_judge("Alice").unwrap();
        assert_eq!(batch, roster(6, 5));
        assert!(event.judges().contains(&JudgeId::new("Alice")));
        assert_eq!(event.stored_judges().unwrap(), vec![JudgeId::new("Alice")]);

        assert!(matches!(
            event.add_judge(" Alice "),
            Err(JudgingError::DuplicateJudge(_))
        ));
        assert!(matches!(
            event.add_judge(""),
            Err(JudgingError::Validation(_))
        ));
    }

    #[test]
    fn test_initialize_invalid_keeps_state() {
        let event = event(10, 2);
        let err = event.initialize(EventConfig::new(10, 2, 0, 5)).unwrap_err();
        assert!(matches!(err, JudgingError::Configuration(_)));
        assert_eq!(event.judges().len(), 2);
    }

    #[test]
    fn test_initialize_replaces_state() {
        let event = event(10, 2);
        event.initialize(EventConfig::new(30, 4, 3, 5).with_seed(2)).unwrap();
        assert_eq!(event.judges().len(), 4);
        assert_eq!(event.teams().len(), 30);
        assert_eq!(event.room_layout().rooms.len(), 3);
        assert_eq!(event.room_layout().seed, 2);
    }

    #[test]
    fn test_clear_scores() {
        let event = event(10, 1);
        let judge = JudgeId::numbered(1);
        let batch = event.current_batch(&judge).unwrap();
        event.submit(&judge, &sheet(&batch, 1.0)).unwrap();

        event.clear_scores().unwrap();
        assert!(event.standings().unwrap().teams.is_empty());
        assert_eq!(event.history(&judge).unwrap().len(), 1);
    }
}

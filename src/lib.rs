//! Fair judge–team assignment for hackathon-style events.
//!
//! Seats teams in rooms, hands each judge the teams evaluated least so
//! far, and runs each judge's assign → score → reassign cycle.
//! Score persistence and transport belong to the embedding service.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TeamId`, `Team`, `JudgeId`, `Judge`,
//!   `Room`, `Group`, `RoomLayout`, `ScoreEntry`, `ScoreRange`
//! - **`config`**: `EventConfig` — event size, score range, shuffle seed
//! - **`partition`**: Seeded roster shuffle into groups and rooms
//! - **`scheduler`**: `FairnessCounter`, `AssignmentScheduler`, `FairnessKpi`
//! - **`session`**: `SessionTracker` — per-judge batch and history
//! - **`validation`**: Configuration and submission checks
//! - **`store`**: `ScoreStore` collaborator trait and an in-memory store
//! - **`standings`**: Per-team averages from stored scores
//! - **`event`**: `JudgingEvent` — the thread-safe facade
//!
//! # Fairness policy
//!
//! Selection is greedy over the whole roster: the next batch is always the
//! globally least-evaluated teams, ties broken by roster order. Rooms are
//! informational only.

pub mod config;
pub mod error;
pub mod event;
pub mod models;
pub mod partition;
pub mod scheduler;
pub mod session;
pub mod standings;
pub mod store;
pub mod validation;

pub use config::EventConfig;
pub use error::{JudgingError, Result};
pub use event::JudgingEvent;

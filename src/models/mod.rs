//! Judging domain models.
//!
//! Provides the core data types for a judged competition: who is judged,
//! who judges, where teams sit, and what marks were given.
//!
//! # Domain Mappings
//!
//! | u-judging | Hackathon | Science Fair | Pitch Day |
//! |-----------|-----------|--------------|-----------|
//! | Team | Team | Project | Startup |
//! | Judge | Judge | Reviewer | Investor |
//! | Room | Room | Hall | Stage |
//! | Group | Table cluster | Aisle | Session slot |

mod judge;
mod room;
mod score;
mod team;

pub use judge::{Judge, JudgeId, Submission};
pub use room::{Group, Room, RoomLayout};
pub use score::{ScoreEntry, ScoreRange, ScoreRecord, ScoreSheet};
pub use team::{roster, Team, TeamId};

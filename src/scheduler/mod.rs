//! Fair batch scheduling and fairness metrics.
//!
//! # Algorithm
//!
//! `AssignmentScheduler` hands each judge the globally least-evaluated
//! teams, counting them at hand-out time. Room and group layout is not
//! consulted: any judge may be sent to any team.
//!
//! # KPI
//!
//! `FairnessKpi` summarises the spread of evaluation tallies.

mod assign;
mod fairness;
mod kpi;

pub use assign::AssignmentScheduler;
pub use fairness::FairnessCounter;
pub use kpi::FairnessKpi;

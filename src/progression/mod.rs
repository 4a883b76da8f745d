//! Progression engine - unlock decisions, weighted completion, and
//! mastery transition validation
//!
//! The engine reads a learner's mastery snapshot and answers what is
//! unlocked and how complete each grade is. It never writes the snapshot:
//! validated changes go back to the host as [`MasteryUpdate`] values.

pub mod engine;
pub mod ledger;

pub use engine::{GradeProgress, ProgressionEngine};
pub use ledger::{MasteryLedger, MasteryUpdate};

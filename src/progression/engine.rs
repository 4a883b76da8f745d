//! Unlock decisions, weighted completion, and transition validation

use crate::core::config::ProgressionConfig;
use crate::core::error::{KeikoError, Result};
use crate::core::types::{Grade, MasteryLevel};
use crate::curriculum::CurriculumIndex;
use crate::progression::ledger::{MasteryLedger, MasteryUpdate};
use serde::Serialize;

/// Minimum level a technique must reach before the next roster position
/// opens. Learning is not enough.
const ADVANCE_GATE: MasteryLevel = MasteryLevel::Practiced;

/// Mastery-level counts and weighted completion for one grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeProgress {
    pub mastered: u32,
    pub practiced: u32,
    pub learning: u32,
    pub not_started: u32,
    /// Distinct techniques in the grade's roster
    pub total: u32,
    /// Weighted average over the roster, 0-100
    pub completion_percent: u8,
}

/// Pure decision logic over a curriculum index and a mastery snapshot
///
/// Holds no mutable state; every operation is a terminating computation
/// over the borrowed index and the caller's ledger. Unlock gates control
/// what the presentation layer offers, not what the ledger may record.
pub struct ProgressionEngine<'a> {
    index: &'a CurriculumIndex,
    config: ProgressionConfig,
}

impl<'a> ProgressionEngine<'a> {
    /// Engine with the standard grading policy
    pub fn new(index: &'a CurriculumIndex) -> Self {
        Self {
            index,
            config: ProgressionConfig::default(),
        }
    }

    /// Engine with a host-supplied policy, validated up front
    pub fn with_config(index: &'a CurriculumIndex, config: ProgressionConfig) -> Result<Self> {
        config.validate().map_err(KeikoError::InvalidConfig)?;
        Ok(Self { index, config })
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Read-only roster view for rendering
    pub fn techniques_of(&self, grade: Grade) -> &[&'static str] {
        self.index.techniques_of(grade)
    }

    /// Level counts and weighted completion for one grade
    ///
    /// An empty roster reports zero completion rather than an error.
    pub fn grade_progress(&self, grade: Grade, ledger: &MasteryLedger) -> GradeProgress {
        let roster = self.index.techniques_of(grade);
        let mut progress = GradeProgress {
            mastered: 0,
            practiced: 0,
            learning: 0,
            not_started: 0,
            total: roster.len() as u32,
            completion_percent: 0,
        };

        let mut weighted_sum: u64 = 0;
        for technique in roster {
            let level = ledger.level(technique);
            match level {
                MasteryLevel::Mastered => progress.mastered += 1,
                MasteryLevel::Practiced => progress.practiced += 1,
                MasteryLevel::Learning => progress.learning += 1,
                MasteryLevel::NotStarted => progress.not_started += 1,
            }
            weighted_sum += u64::from(self.config.weight(level));
        }

        if progress.total > 0 {
            progress.completion_percent =
                (weighted_sum as f64 / f64::from(progress.total)).round() as u8;
        }

        progress
    }

    /// Whether a grade is open to the learner
    ///
    /// The first grade is always open; each later grade checks only the
    /// immediately preceding grade's completion against the threshold.
    pub fn is_grade_unlocked(&self, grade: Grade, ledger: &MasteryLedger) -> bool {
        match grade.previous() {
            None => true,
            Some(prev) => {
                self.grade_progress(prev, ledger).completion_percent
                    >= self.config.grade_unlock_threshold
            }
        }
    }

    /// Locked/unlocked state for every grade, first grade forward
    ///
    /// Each decision still consults only its immediate predecessor, so a
    /// grade can read as open while an earlier one is not; hosts render
    /// the whole list from this walk when initializing.
    pub fn grade_unlock_states(&self, ledger: &MasteryLedger) -> Vec<(Grade, bool)> {
        Grade::ALL
            .iter()
            .map(|&grade| (grade, self.is_grade_unlocked(grade, ledger)))
            .collect()
    }

    /// Whether the technique at a roster position is open to the learner
    ///
    /// Position 0 is always open; position i opens once position i-1 is
    /// practiced or better. Only the immediate predecessor is consulted.
    /// Independent of the grade gate - the presentation layer combines
    /// both.
    pub fn is_technique_unlocked(
        &self,
        grade: Grade,
        index: usize,
        ledger: &MasteryLedger,
    ) -> Result<bool> {
        let roster = self.index.techniques_of(grade);
        if index >= roster.len() {
            return Err(KeikoError::IndexOutOfRange {
                grade,
                index,
                len: roster.len(),
            });
        }
        if index == 0 {
            return Ok(true);
        }
        Ok(ledger.level(roster[index - 1]) >= ADVANCE_GATE)
    }

    /// Validate a requested mastery change and hand it back for the host
    /// to apply
    ///
    /// Any of the four levels is a valid target - learners may move
    /// backward - and locked techniques may still be written; unlock
    /// state gates visibility, not the ledger.
    pub fn validate_transition(
        &self,
        technique_id: &str,
        target_level: &str,
    ) -> Result<MasteryUpdate> {
        let level = MasteryLevel::parse(target_level)?;
        if !self.index.contains(technique_id) {
            return Err(KeikoError::UnknownTechnique(technique_id.to_string()));
        }
        Ok(MasteryUpdate {
            technique_id: technique_id.to_string(),
            level,
        })
    }
}

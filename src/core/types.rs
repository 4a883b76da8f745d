//! Shared curriculum types used throughout the codebase

use crate::core::error::KeikoError;
use serde::{Deserialize, Serialize};

/// A curriculum grade: six kyu grades counting down, then four dan grades
/// counting up. Progression order is `Rokkyu` first, `Yondan` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Rokkyu,
    Gokyu,
    Yonkyu,
    Sankyu,
    Nikyu,
    Ikkyu,
    Shodan,
    Nidan,
    Sandan,
    Yondan,
}

impl Grade {
    /// All grades in progression order (introductory first).
    pub const ALL: [Grade; 10] = [
        Grade::Rokkyu,
        Grade::Gokyu,
        Grade::Yonkyu,
        Grade::Sankyu,
        Grade::Nikyu,
        Grade::Ikkyu,
        Grade::Shodan,
        Grade::Nidan,
        Grade::Sandan,
        Grade::Yondan,
    ];

    /// Stable string token used at the host boundary.
    pub fn token(&self) -> &'static str {
        match self {
            Grade::Rokkyu => "rokkyu",
            Grade::Gokyu => "gokyu",
            Grade::Yonkyu => "yonkyu",
            Grade::Sankyu => "sankyu",
            Grade::Nikyu => "nikyu",
            Grade::Ikkyu => "ikkyu",
            Grade::Shodan => "shodan",
            Grade::Nidan => "nidan",
            Grade::Sandan => "sandan",
            Grade::Yondan => "yondan",
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Grade::Rokkyu => "6th kyu",
            Grade::Gokyu => "5th kyu",
            Grade::Yonkyu => "4th kyu",
            Grade::Sankyu => "3rd kyu",
            Grade::Nikyu => "2nd kyu",
            Grade::Ikkyu => "1st kyu",
            Grade::Shodan => "1st dan",
            Grade::Nidan => "2nd dan",
            Grade::Sandan => "3rd dan",
            Grade::Yondan => "4th dan",
        }
    }

    /// Parse a host-supplied grade token.
    pub fn parse(token: &str) -> Result<Self, KeikoError> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.token() == token)
            .ok_or_else(|| KeikoError::UnknownGrade(token.to_string()))
    }

    /// The grade immediately before this one in progression order.
    pub fn previous(&self) -> Option<Grade> {
        let pos = Self::ALL.iter().position(|g| g == self)?;
        if pos == 0 {
            None
        } else {
            Some(Self::ALL[pos - 1])
        }
    }

    /// Dan grades carry the weapons-taking portion of the syllabus.
    pub fn is_dan(&self) -> bool {
        *self >= Grade::Shodan
    }
}

/// A learner's recorded mastery of one technique, in ascending order.
///
/// Absent ledger keys read as `NotStarted`. The ordering is load-bearing:
/// gate checks are written as `level >= Practiced`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    #[default]
    NotStarted,
    Learning,
    Practiced,
    Mastered,
}

impl MasteryLevel {
    /// All mastery levels in ascending order.
    pub const ALL: [MasteryLevel; 4] = [
        MasteryLevel::NotStarted,
        MasteryLevel::Learning,
        MasteryLevel::Practiced,
        MasteryLevel::Mastered,
    ];

    /// Stable string token used at the host boundary.
    pub fn token(&self) -> &'static str {
        match self {
            MasteryLevel::NotStarted => "not_started",
            MasteryLevel::Learning => "learning",
            MasteryLevel::Practiced => "practiced",
            MasteryLevel::Mastered => "mastered",
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            MasteryLevel::NotStarted => "Not started",
            MasteryLevel::Learning => "Learning",
            MasteryLevel::Practiced => "Practiced",
            MasteryLevel::Mastered => "Mastered",
        }
    }

    /// Parse a host-supplied level token.
    pub fn parse(token: &str) -> Result<Self, KeikoError> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.token() == token)
            .ok_or_else(|| KeikoError::InvalidLevel(token.to_string()))
    }
}

/// Canonical execution side of a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Omote,
    Ura,
}

impl Side {
    pub fn token(&self) -> &'static str {
        match self {
            Side::Omote => "omote",
            Side::Ura => "ura",
        }
    }
}

/// How a combination ends: a controlling hold or a break-fall outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    Pin,
    Fall,
}

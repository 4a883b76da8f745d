//! Learner mastery snapshots

use crate::core::types::MasteryLevel;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A validated mastery change for the host to apply and persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryUpdate {
    pub technique_id: String,
    pub level: MasteryLevel,
}

/// Snapshot of a learner's recorded mastery levels, keyed by technique id
///
/// Owned and persisted by the host application; the engine reads a
/// snapshot and never writes one. Absent keys read as `NotStarted`, so a
/// fresh learner is an empty ledger. Serializes as a flat JSON object
/// (`{"ikkyo": "practiced", ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryLedger {
    #[serde(flatten)]
    levels: AHashMap<String, MasteryLevel>,
}

impl MasteryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded level for a technique, `NotStarted` if absent
    pub fn level(&self, technique_id: &str) -> MasteryLevel {
        self.levels
            .get(technique_id)
            .copied()
            .unwrap_or(MasteryLevel::NotStarted)
    }

    /// Record a level directly (host-side; the engine never calls this)
    pub fn set(&mut self, technique_id: impl Into<String>, level: MasteryLevel) {
        self.levels.insert(technique_id.into(), level);
    }

    /// Apply a validated update from the engine
    pub fn apply(&mut self, update: MasteryUpdate) {
        self.levels.insert(update.technique_id, update.level);
    }

    /// All explicitly recorded entries (absent techniques not included)
    pub fn recorded(&self) -> impl Iterator<Item = (&str, MasteryLevel)> {
        self.levels.iter().map(|(id, level)| (id.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(String, MasteryLevel)> for MasteryLedger {
    fn from_iter<I: IntoIterator<Item = (String, MasteryLevel)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_technique_reads_not_started() {
        let ledger = MasteryLedger::new();
        assert_eq!(ledger.level("ikkyo"), MasteryLevel::NotStarted);
        assert!(ledger.is_empty());
    }

    #[test]
    fn set_then_read_back() {
        let mut ledger = MasteryLedger::new();
        ledger.set("ikkyo", MasteryLevel::Practiced);
        assert_eq!(ledger.level("ikkyo"), MasteryLevel::Practiced);
        assert_eq!(ledger.len(), 1);

        let recorded: Vec<_> = ledger.recorded().collect();
        assert_eq!(recorded, [("ikkyo", MasteryLevel::Practiced)]);
    }

    #[test]
    fn apply_overwrites_in_both_directions() {
        let mut ledger = MasteryLedger::new();
        ledger.apply(MasteryUpdate {
            technique_id: "nikyo".to_string(),
            level: MasteryLevel::Mastered,
        });
        assert_eq!(ledger.level("nikyo"), MasteryLevel::Mastered);

        // Learners may step back down
        ledger.apply(MasteryUpdate {
            technique_id: "nikyo".to_string(),
            level: MasteryLevel::Learning,
        });
        assert_eq!(ledger.level("nikyo"), MasteryLevel::Learning);
    }

    #[test]
    fn round_trips_as_flat_json() {
        let mut ledger = MasteryLedger::new();
        ledger.set("ikkyo", MasteryLevel::Mastered);
        ledger.set("shiho-nage", MasteryLevel::Learning);

        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"ikkyo\":\"mastered\""));

        let back: MasteryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }

    #[test]
    fn parses_host_snapshot() {
        let ledger: MasteryLedger =
            serde_json::from_str(r#"{"ikkyo":"practiced","nikyo":"learning"}"#).unwrap();
        assert_eq!(ledger.level("ikkyo"), MasteryLevel::Practiced);
        assert_eq!(ledger.level("nikyo"), MasteryLevel::Learning);
        assert_eq!(ledger.level("sankyo"), MasteryLevel::NotStarted);
    }
}

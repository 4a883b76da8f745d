//! Combination entry records and read-only catalog access

use crate::core::types::{Grade, ResolutionKind, Side};
use serde::Serialize;

/// The core technique of a combination, with optional execution detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechniqueRef {
    pub id: &'static str,
    /// Execution side, where the technique distinguishes omote/ura
    pub side: Option<Side>,
    /// Named variant of the same technique (e.g. uchi/soto kaiten-nage)
    pub variant: Option<&'static str>,
}

/// How a combination ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub id: &'static str,
    pub kind: ResolutionKind,
}

/// One teachable unit: attack, entry movement, technique, resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombinationEntry {
    /// Unique across the whole catalog
    pub id: &'static str,
    /// Grade at which this combination is first taught
    pub grade: Grade,
    /// None for solo exercises (weapons kata, suburi)
    pub attack: Option<&'static str>,
    pub entry_movement: &'static str,
    pub technique: TechniqueRef,
    pub resolution: Resolution,
    /// Display-only classification for catalog filtering; the unlock
    /// logic never reads it
    pub category: Option<&'static str>,
}

impl CombinationEntry {
    /// Solo exercises have no initiating attack
    pub fn is_solo(&self) -> bool {
        self.attack.is_none()
    }
}

/// Read-only view over a combination table, in declaration order
///
/// Declaration order is semantically meaningful: it defines default
/// display order and, via first occurrence, the sequential-unlock order
/// inside each grade.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CombinationEntry],
}

impl Catalog {
    /// Catalog over the full dojo syllabus
    pub fn syllabus() -> Self {
        Self {
            entries: crate::catalog::syllabus::SYLLABUS,
        }
    }

    /// Catalog over a custom entry table
    pub fn from_entries(entries: &'static [CombinationEntry]) -> Self {
        Self { entries }
    }

    /// Look up one entry by its id
    pub fn lookup(&self, id: &str) -> Option<&'static CombinationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in declaration order
    pub fn all(&self) -> &'static [CombinationEntry] {
        self.entries
    }

    /// Entries taught at one grade, in declaration order
    pub fn entries_of(self, grade: Grade) -> impl Iterator<Item = &'static CombinationEntry> {
        self.entries.iter().filter(move |e| e.grade == grade)
    }

    /// Entries carrying a category tag (display filtering)
    pub fn with_category<'a>(
        self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'static CombinationEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.category == Some(tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::syllabus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_declared_entry() {
        let catalog = Catalog::syllabus();
        let entry = catalog.lookup("shomen-uchi-ikkyo-omote").unwrap();
        assert_eq!(entry.grade, Grade::Rokkyu);
        assert_eq!(entry.technique.id, "ikkyo");
        assert_eq!(entry.technique.side, Some(Side::Omote));
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        assert!(Catalog::syllabus().lookup("no-such-combination").is_none());
    }

    #[test]
    fn entries_of_filters_by_grade() {
        let catalog = Catalog::syllabus();
        assert!(catalog.entries_of(Grade::Rokkyu).count() > 0);
        for entry in catalog.entries_of(Grade::Rokkyu) {
            assert_eq!(entry.grade, Grade::Rokkyu);
        }
    }

    #[test]
    fn category_filter_matches_tag() {
        let catalog = Catalog::syllabus();
        let seated: Vec<_> = catalog.with_category("suwari-waza").collect();
        assert!(!seated.is_empty());
        for entry in seated {
            assert_eq!(entry.category, Some("suwari-waza"));
        }
    }

    #[test]
    fn solo_entries_have_no_attack() {
        let catalog = Catalog::syllabus();
        let solo: Vec<_> = catalog.all().iter().filter(|e| e.is_solo()).collect();
        assert!(!solo.is_empty(), "syllabus carries solo weapons forms");
        for entry in solo {
            assert!(entry.attack.is_none());
        }
    }
}

//! Grade rosters and first-introduction lookup
//!
//! The same technique appears in many combination rows - taught against
//! different attacks, sometimes again at a later grade. Progression tracks
//! the technique, not the row, so the index collapses rows to distinct
//! technique ids per grade.

use crate::catalog::Catalog;
use crate::core::types::Grade;
use ahash::AHashMap;

/// Per-grade technique rosters and technique lookup
///
/// Built once from a catalog at startup; read-only afterward, so it can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct CurriculumIndex {
    /// Distinct technique ids per grade, in first-occurrence order.
    /// This order is the sequential-unlock order.
    rosters: AHashMap<Grade, Vec<&'static str>>,
    /// Grade at which each technique id first appears in the catalog.
    introduced: AHashMap<&'static str, Grade>,
}

impl CurriculumIndex {
    /// Build the index with a single pass over the catalog
    ///
    /// A technique id joins a grade's roster the first time it appears in
    /// that grade's entries; its grade of introduction is wherever it
    /// appeared first overall.
    pub fn build(catalog: &Catalog) -> Self {
        let mut rosters: AHashMap<Grade, Vec<&'static str>> = AHashMap::new();
        let mut introduced: AHashMap<&'static str, Grade> = AHashMap::new();

        for entry in catalog.all() {
            let technique = entry.technique.id;
            let roster = rosters.entry(entry.grade).or_default();
            if !roster.contains(&technique) {
                roster.push(technique);
            }
            introduced.entry(technique).or_insert(entry.grade);
        }

        tracing::debug!(
            "curriculum index built: {} techniques over {} populated grades",
            introduced.len(),
            rosters.len()
        );

        Self { rosters, introduced }
    }

    /// Distinct technique ids of one grade, in unlock order
    pub fn techniques_of(&self, grade: Grade) -> &[&'static str] {
        self.rosters.get(&grade).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Grade at which a technique is first introduced
    pub fn grade_of(&self, technique_id: &str) -> Option<Grade> {
        self.introduced.get(technique_id).copied()
    }

    /// All grades in progression order
    pub fn grades(&self) -> &'static [Grade] {
        &Grade::ALL
    }

    /// Whether a technique id exists anywhere in the curriculum
    pub fn contains(&self, technique_id: &str) -> bool {
        self.introduced.contains_key(technique_id)
    }

    /// Number of distinct techniques across the whole curriculum
    pub fn technique_count(&self) -> usize {
        self.introduced.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::{CombinationEntry, Resolution, TechniqueRef};
    use crate::core::types::ResolutionKind;

    fn syllabus_index() -> CurriculumIndex {
        CurriculumIndex::build(&Catalog::syllabus())
    }

    #[test]
    fn rokkyu_roster_in_teaching_order() {
        let index = syllabus_index();
        assert_eq!(
            index.techniques_of(Grade::Rokkyu),
            ["ikkyo", "irimi-nage", "shiho-nage", "kokyu-ho"]
        );
    }

    #[test]
    fn rosters_deduplicate_attack_variants() {
        let index = syllabus_index();
        for grade in Grade::ALL {
            let roster = index.techniques_of(grade);
            for (i, technique) in roster.iter().enumerate() {
                assert!(
                    !roster[i + 1..].contains(technique),
                    "{} appears twice in the {:?} roster",
                    technique,
                    grade
                );
            }
        }
    }

    #[test]
    fn reused_technique_keeps_first_grade() {
        let index = syllabus_index();
        // Ikkyo reappears at gokyu and yonkyu; kote-gaeshi returns against
        // the knife at shodan. Both stay indexed to their introduction.
        assert_eq!(index.grade_of("ikkyo"), Some(Grade::Rokkyu));
        assert_eq!(index.grade_of("kote-gaeshi"), Some(Grade::Gokyu));
        assert_eq!(index.grade_of("randori"), Some(Grade::Nidan));
    }

    #[test]
    fn reused_technique_joins_later_roster() {
        let index = syllabus_index();
        assert!(index.techniques_of(Grade::Gokyu).contains(&"ikkyo"));
        assert!(index.techniques_of(Grade::Shodan).contains(&"kote-gaeshi"));
    }

    #[test]
    fn unknown_technique_not_indexed() {
        let index = syllabus_index();
        assert_eq!(index.grade_of("tobi-geri"), None);
        assert!(!index.contains("tobi-geri"));
    }

    #[test]
    fn build_is_deterministic() {
        let a = syllabus_index();
        let b = syllabus_index();
        for grade in Grade::ALL {
            assert_eq!(a.techniques_of(grade), b.techniques_of(grade));
        }
        assert_eq!(a.technique_count(), b.technique_count());
    }

    static SPARSE: &[CombinationEntry] = &[CombinationEntry {
        id: "shomen-uchi-ikkyo-omote",
        grade: Grade::Rokkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "ikkyo",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ikkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    }];

    #[test]
    fn grade_without_entries_has_empty_roster() {
        let index = CurriculumIndex::build(&Catalog::from_entries(SPARSE));
        assert_eq!(index.techniques_of(Grade::Rokkyu), ["ikkyo"]);
        assert!(index.techniques_of(Grade::Gokyu).is_empty());
        assert!(index.techniques_of(Grade::Yondan).is_empty());
    }
}

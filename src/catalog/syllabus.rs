//! The full dojo syllabus - every combination taught, grade by grade
//!
//! Declaration order inside each grade is the teaching order; the
//! curriculum index derives rosters and unlock order from it. Pins end in
//! an osae hold, throws end in the ukemi the partner takes. Solo weapons
//! forms have no attacker and close in kime.

use crate::catalog::entry::{CombinationEntry, Resolution, TechniqueRef};
use crate::core::types::{Grade, ResolutionKind, Side};

/// Global combination table - static syllabus data
pub static SYLLABUS: &[CombinationEntry] = &[
    // === ROKKYU (6th kyu) ===
    CombinationEntry {
        id: "shomen-uchi-ikkyo-omote",
        grade: Grade::Rokkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "ikkyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "ikkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-ikkyo-ura",
        grade: Grade::Rokkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "ikkyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "ikkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-irimi-nage",
        grade: Grade::Rokkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "irimi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "katate-dori-shiho-nage-omote",
        grade: Grade::Rokkyu,
        attack: Some("katate-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "shiho-nage",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "katate-dori-shiho-nage-ura",
        grade: Grade::Rokkyu,
        attack: Some("katate-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "shiho-nage",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "suwari-ryote-dori-kokyu-ho",
        grade: Grade::Rokkyu,
        attack: Some("ryote-dori"),
        entry_movement: "tai-no-henko",
        technique: TechniqueRef {
            id: "kokyu-ho",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("suwari-waza"),
    },
    // === GOKYU (5th kyu) ===
    // Ikkyo returns against the cross-hand grab; the technique itself
    // stays indexed to rokkyu.
    CombinationEntry {
        id: "ai-hanmi-katate-dori-ikkyo",
        grade: Grade::Gokyu,
        attack: Some("ai-hanmi-katate-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "ikkyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "ikkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-nikyo-omote",
        grade: Grade::Gokyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "nikyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "nikyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-nikyo-ura",
        grade: Grade::Gokyu,
        attack: Some("shomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "nikyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "nikyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "kata-dori-nikyo",
        grade: Grade::Gokyu,
        attack: Some("kata-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "nikyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "nikyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "chudan-tsuki-kote-gaeshi",
        grade: Grade::Gokyu,
        attack: Some("chudan-tsuki"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "kote-gaeshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "ryote-dori-tenchi-nage",
        grade: Grade::Gokyu,
        attack: Some("ryote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "tenchi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "morote-dori-kokyu-ho",
        grade: Grade::Gokyu,
        attack: Some("morote-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "kokyu-ho",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    // === YONKYU (4th kyu) ===
    CombinationEntry {
        id: "shomen-uchi-sankyo-omote",
        grade: Grade::Yonkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "sankyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "sankyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-sankyo-ura",
        grade: Grade::Yonkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "sankyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "sankyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "katate-dori-kaiten-nage-uchi",
        grade: Grade::Yonkyu,
        attack: Some("katate-dori"),
        entry_movement: "uchi-kaiten",
        technique: TechniqueRef {
            id: "kaiten-nage",
            side: None,
            variant: Some("uchi"),
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "katate-dori-kaiten-nage-soto",
        grade: Grade::Yonkyu,
        attack: Some("katate-dori"),
        entry_movement: "soto-kaiten",
        technique: TechniqueRef {
            id: "kaiten-nage",
            side: None,
            variant: Some("soto"),
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "yokomen-uchi-irimi-nage",
        grade: Grade::Yonkyu,
        attack: Some("yokomen-uchi"),
        entry_movement: "tenshin",
        technique: TechniqueRef {
            id: "irimi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "ryote-dori-sumi-otoshi",
        grade: Grade::Yonkyu,
        attack: Some("ryote-dori"),
        entry_movement: "tenshin",
        technique: TechniqueRef {
            id: "sumi-otoshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "suwari-shomen-uchi-ikkyo",
        grade: Grade::Yonkyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "ikkyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "ikkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: Some("suwari-waza"),
    },
    // === SANKYU (3rd kyu) ===
    CombinationEntry {
        id: "shomen-uchi-yonkyo-omote",
        grade: Grade::Sankyu,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "yonkyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "yonkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "shomen-uchi-yonkyo-ura",
        grade: Grade::Sankyu,
        attack: Some("shomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "yonkyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "yonkyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "yokomen-uchi-shiho-nage",
        grade: Grade::Sankyu,
        attack: Some("yokomen-uchi"),
        entry_movement: "tenshin",
        technique: TechniqueRef {
            id: "shiho-nage",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "ushiro-ryote-dori-kote-gaeshi",
        grade: Grade::Sankyu,
        attack: Some("ushiro-ryote-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "kote-gaeshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("ushiro-waza"),
    },
    CombinationEntry {
        id: "ushiro-ryote-dori-nikyo",
        grade: Grade::Sankyu,
        attack: Some("ushiro-ryote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "nikyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "nikyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: Some("ushiro-waza"),
    },
    CombinationEntry {
        id: "katate-dori-koshi-nage",
        grade: Grade::Sankyu,
        attack: Some("katate-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "koshi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "morote-dori-ude-kime-nage",
        grade: Grade::Sankyu,
        attack: Some("morote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "ude-kime-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    // === NIKYU (2nd kyu) ===
    CombinationEntry {
        id: "yokomen-uchi-gokyo",
        grade: Grade::Nikyu,
        attack: Some("yokomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "gokyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "gokyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: None,
    },
    CombinationEntry {
        id: "ushiro-ryote-dori-juji-garami",
        grade: Grade::Nikyu,
        attack: Some("ushiro-ryote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "juji-garami",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("ushiro-waza"),
    },
    CombinationEntry {
        id: "ushiro-ryokata-dori-aiki-otoshi",
        grade: Grade::Nikyu,
        attack: Some("ushiro-ryokata-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "aiki-otoshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("ushiro-waza"),
    },
    CombinationEntry {
        id: "hanmi-handachi-katate-dori-shiho-nage",
        grade: Grade::Nikyu,
        attack: Some("katate-dori"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "shiho-nage",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("hanmi-handachi"),
    },
    CombinationEntry {
        id: "chudan-tsuki-irimi-nage",
        grade: Grade::Nikyu,
        attack: Some("chudan-tsuki"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "irimi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "yokomen-uchi-kote-gaeshi",
        grade: Grade::Nikyu,
        attack: Some("yokomen-uchi"),
        entry_movement: "tenshin",
        technique: TechniqueRef {
            id: "kote-gaeshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    // === IKKYU (1st kyu) ===
    CombinationEntry {
        id: "morote-dori-kokyu-nage",
        grade: Grade::Ikkyu,
        attack: Some("morote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "kokyu-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "ushiro-ryote-dori-sankyo",
        grade: Grade::Ikkyu,
        attack: Some("ushiro-ryote-dori"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "sankyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "sankyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: Some("ushiro-waza"),
    },
    CombinationEntry {
        id: "yokomen-uchi-koshi-nage",
        grade: Grade::Ikkyu,
        attack: Some("yokomen-uchi"),
        entry_movement: "irimi-tenkan",
        technique: TechniqueRef {
            id: "koshi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    // Solo forms end in kime rather than a partner outcome.
    CombinationEntry {
        id: "jo-kata-jusan",
        grade: Grade::Ikkyu,
        attack: None,
        entry_movement: "tsugi-ashi",
        technique: TechniqueRef {
            id: "jo-kata-jusan",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "kime",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "happo-giri",
        grade: Grade::Ikkyu,
        attack: None,
        entry_movement: "ayumi-ashi",
        technique: TechniqueRef {
            id: "happo-giri",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "kime",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    // === SHODAN (1st dan) ===
    // The empty-hand basics return against weapons.
    CombinationEntry {
        id: "tanto-tsuki-kote-gaeshi",
        grade: Grade::Shodan,
        attack: Some("tanto-tsuki"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "kote-gaeshi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "tanto-tsuki-gokyo",
        grade: Grade::Shodan,
        attack: Some("tanto-tsuki"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "gokyo",
            side: Some(Side::Ura),
            variant: None,
        },
        resolution: Resolution {
            id: "gokyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "tachi-shomen-giri-irimi-nage",
        grade: Grade::Shodan,
        attack: Some("tachi-shomen-giri"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "irimi-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "ushiro-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "jo-tsuki-kokyu-nage",
        grade: Grade::Shodan,
        attack: Some("jo-tsuki"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "kokyu-nage",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "mae-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "jo-kata-sanjusan",
        grade: Grade::Shodan,
        attack: None,
        entry_movement: "tsugi-ashi",
        technique: TechniqueRef {
            id: "jo-kata-sanjusan",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "kime",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    // === NIDAN (2nd dan) ===
    CombinationEntry {
        id: "tanto-yokomen-sankyo",
        grade: Grade::Nidan,
        attack: Some("tanto-yokomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "sankyo",
            side: Some(Side::Omote),
            variant: None,
        },
        resolution: Resolution {
            id: "sankyo-osae",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "shomen-uchi-kaeshi-waza",
        grade: Grade::Nidan,
        attack: Some("shomen-uchi"),
        entry_movement: "tenkan",
        technique: TechniqueRef {
            id: "kaeshi-waza",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "taninzu-gake-randori",
        grade: Grade::Nidan,
        attack: Some("taninzu-gake"),
        entry_movement: "irimi-tenkan",
        technique: TechniqueRef {
            id: "randori",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    // === SANDAN (3rd dan) ===
    CombinationEntry {
        id: "shomen-uchi-henka-waza",
        grade: Grade::Sandan,
        attack: Some("shomen-uchi"),
        entry_movement: "irimi",
        technique: TechniqueRef {
            id: "henka-waza",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: None,
    },
    CombinationEntry {
        id: "tanto-taninzu-randori",
        grade: Grade::Sandan,
        attack: Some("tanto-taninzu-gake"),
        entry_movement: "tenshin",
        technique: TechniqueRef {
            id: "randori",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "tobi-ukemi",
            kind: ResolutionKind::Fall,
        },
        category: Some("buki-waza"),
    },
    // === YONDAN (4th dan) ===
    CombinationEntry {
        id: "aiki-ken-kumitachi",
        grade: Grade::Yondan,
        attack: Some("uchi-tachi-shomen"),
        entry_movement: "ayumi-ashi",
        technique: TechniqueRef {
            id: "aiki-ken-kumitachi",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "kime",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
    CombinationEntry {
        id: "aiki-jo-kumijo",
        grade: Grade::Yondan,
        attack: Some("uchi-jo-tsuki"),
        entry_movement: "tsugi-ashi",
        technique: TechniqueRef {
            id: "aiki-jo-kumijo",
            side: None,
            variant: None,
        },
        resolution: Resolution {
            id: "kime",
            kind: ResolutionKind::Pin,
        },
        category: Some("buki-waza"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_unique_across_catalog() {
        let mut seen = HashSet::new();
        for entry in SYLLABUS {
            assert!(seen.insert(entry.id), "Duplicate combination id {}", entry.id);
        }
    }

    #[test]
    fn every_grade_populated() {
        for grade in Grade::ALL {
            assert!(
                SYLLABUS.iter().any(|e| e.grade == grade),
                "No combinations declared for {:?}",
                grade
            );
        }
    }

    #[test]
    fn osae_endings_are_pins() {
        for entry in SYLLABUS {
            if entry.resolution.id.ends_with("-osae") {
                assert_eq!(
                    entry.resolution.kind,
                    ResolutionKind::Pin,
                    "{} ends in an osae hold but is not a pin",
                    entry.id
                );
            }
            if entry.resolution.id.ends_with("-ukemi") {
                assert_eq!(
                    entry.resolution.kind,
                    ResolutionKind::Fall,
                    "{} ends in ukemi but is not a fall",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn solo_forms_are_weapons_work() {
        for entry in SYLLABUS {
            if entry.attack.is_none() {
                assert_eq!(
                    entry.category,
                    Some("buki-waza"),
                    "Solo entry {} outside the weapons syllabus",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn sides_only_where_techniques_distinguish_them() {
        // Entries for the same technique must agree on whether the
        // technique carries an execution side at all.
        for entry in SYLLABUS {
            for other in SYLLABUS {
                if entry.technique.id == other.technique.id {
                    assert_eq!(
                        entry.technique.side.is_some(),
                        other.technique.side.is_some(),
                        "{} and {} disagree on sides for {}",
                        entry.id,
                        other.id,
                        entry.technique.id
                    );
                }
            }
        }
    }

    #[test]
    fn dan_grades_revisit_basics_against_weapons() {
        let kyu_techniques: HashSet<&str> = SYLLABUS
            .iter()
            .filter(|e| !e.grade.is_dan())
            .map(|e| e.technique.id)
            .collect();
        let revisited = SYLLABUS
            .iter()
            .filter(|e| e.grade.is_dan() && e.attack.is_some())
            .any(|e| kyu_techniques.contains(e.technique.id));
        assert!(revisited, "Dan syllabus should reuse kyu-grade techniques");
    }
}
